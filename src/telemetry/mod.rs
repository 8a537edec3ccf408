//! Serial telemetry frames.
//!
//! Wire layout, 11 bytes, multi-byte fields big-endian:
//!
//! ```text
//! AA AA | ex_hi ex_lo ey_hi ey_lo d_hi d_lo | sum | FF FF
//! ```
//!
//! `sum` is the wrapping byte sum of the six data bytes. [`FrameDecoder`]
//! consumes a byte stream one byte at a time and resynchronises on the next
//! header after any corrupt frame.

mod decoder;
mod frame;

pub use decoder::{DecoderState, FrameDecoder};
pub use frame::{
    checksum, TelemetryFrame, FRAME_DATA_SIZE, FRAME_HEADER, FRAME_LEN, FRAME_TRAILER,
};
