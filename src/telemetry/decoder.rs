use super::frame::{checksum, TelemetryFrame, FRAME_DATA_SIZE, FRAME_HEADER, FRAME_TRAILER};
use log::debug;

/// Position of the decoder inside the frame layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecoderState {
    WaitHeader1,
    WaitHeader2,
    Data,
    Checksum,
    WaitTrailer1,
    WaitTrailer2,
}

/// Byte-at-a-time telemetry frame decoder.
#[derive(Clone, Debug)]
pub struct FrameDecoder {
    state: DecoderState,
    data: [u8; FRAME_DATA_SIZE],
    index: usize,
    rejected: u64,
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self {
            state: DecoderState::WaitHeader1,
            data: [0; FRAME_DATA_SIZE],
            index: 0,
            rejected: 0,
        }
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Frames dropped on a bad second header, checksum or trailer byte.
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    pub fn reset(&mut self) {
        self.state = DecoderState::WaitHeader1;
        self.index = 0;
    }

    /// Consume one byte. Returns the frame completed by this byte, if any.
    ///
    /// A mismatching byte drops the partial frame; it is not reconsidered as
    /// the start of a new one.
    pub fn push(&mut self, byte: u8) -> Option<TelemetryFrame> {
        match self.state {
            DecoderState::WaitHeader1 => {
                if byte == FRAME_HEADER[0] {
                    self.state = DecoderState::WaitHeader2;
                }
            }
            DecoderState::WaitHeader2 => {
                if byte == FRAME_HEADER[1] {
                    self.index = 0;
                    self.state = DecoderState::Data;
                } else {
                    self.reject("header", byte);
                }
            }
            DecoderState::Data => {
                self.data[self.index] = byte;
                self.index += 1;
                if self.index >= FRAME_DATA_SIZE {
                    self.state = DecoderState::Checksum;
                }
            }
            DecoderState::Checksum => {
                if byte == checksum(&self.data) {
                    self.state = DecoderState::WaitTrailer1;
                } else {
                    self.reject("checksum", byte);
                }
            }
            DecoderState::WaitTrailer1 => {
                if byte == FRAME_TRAILER[0] {
                    self.state = DecoderState::WaitTrailer2;
                } else {
                    self.reject("trailer", byte);
                }
            }
            DecoderState::WaitTrailer2 => {
                self.reset();
                if byte == FRAME_TRAILER[1] {
                    return Some(TelemetryFrame::from_data_bytes(&self.data));
                }
                self.rejected += 1;
                debug!("FrameDecoder::push bad trailer byte {byte:#04x}");
            }
        }
        None
    }

    /// Push every byte of `bytes`, calling `on_frame` for each complete frame.
    /// Returns the number of frames delivered.
    pub fn feed<F>(&mut self, bytes: &[u8], mut on_frame: F) -> usize
    where
        F: FnMut(TelemetryFrame),
    {
        let mut delivered = 0;
        for &b in bytes {
            if let Some(frame) = self.push(b) {
                on_frame(frame);
                delivered += 1;
            }
        }
        delivered
    }

    fn reject(&mut self, what: &str, byte: u8) {
        debug!("FrameDecoder::push bad {what} byte {byte:#04x} in {:?}", self.state);
        self.rejected += 1;
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(bytes: &[u8]) -> (Vec<TelemetryFrame>, FrameDecoder) {
        let mut dec = FrameDecoder::new();
        let mut frames = Vec::new();
        dec.feed(bytes, |f| frames.push(f));
        (frames, dec)
    }

    #[test]
    fn decodes_an_encoded_frame() {
        let frame = TelemetryFrame::new(-120, 37, 110);
        let (frames, dec) = decode_all(&frame.encode());
        assert_eq!(frames, vec![frame]);
        assert_eq!(dec.state(), DecoderState::WaitHeader1);
        assert_eq!(dec.rejected(), 0);
    }

    #[test]
    fn skips_leading_noise() {
        let mut bytes = vec![0x00, 0x13, 0xFF];
        bytes.extend_from_slice(&TelemetryFrame::new(1, 2, 3).encode());
        let (frames, _) = decode_all(&bytes);
        assert_eq!(frames, vec![TelemetryFrame::new(1, 2, 3)]);
    }

    #[test]
    fn corrupt_checksum_is_dropped() {
        let good = TelemetryFrame::new(5, -5, 500);
        let mut bad = TelemetryFrame::new(9, 9, 9).encode();
        bad[8] = bad[8].wrapping_add(1);
        let mut bytes = bad.to_vec();
        bytes.extend_from_slice(&good.encode());
        let (frames, dec) = decode_all(&bytes);
        assert_eq!(frames, vec![good]);
        assert_eq!(dec.rejected(), 1);
    }

    #[test]
    fn bad_trailer_is_dropped() {
        for pos in [9, 10] {
            let mut bytes = TelemetryFrame::new(7, 7, 7).encode();
            bytes[pos] = 0x00;
            let (frames, dec) = decode_all(&bytes);
            assert!(frames.is_empty(), "trailer byte {pos}");
            assert_eq!(dec.rejected(), 1);
            assert_eq!(dec.state(), DecoderState::WaitHeader1);
        }
    }

    #[test]
    fn offending_byte_is_consumed() {
        // The second byte fails as header 2 and is not retried as header 1,
        // so the real frame starting at the third byte decodes.
        let frame = TelemetryFrame::new(0, 0, 42);
        let mut bytes = vec![0xAA, 0x01];
        bytes.extend_from_slice(&frame.encode());
        let (frames, dec) = decode_all(&bytes);
        assert_eq!(frames, vec![frame]);
        assert_eq!(dec.rejected(), 1);
    }
}
