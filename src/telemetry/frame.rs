use serde::{Deserialize, Serialize};

pub const FRAME_HEADER: [u8; 2] = [0xAA, 0xAA];
pub const FRAME_TRAILER: [u8; 2] = [0xFF, 0xFF];
pub const FRAME_DATA_SIZE: usize = 6;
pub const FRAME_LEN: usize = FRAME_HEADER.len() + FRAME_DATA_SIZE + 1 + FRAME_TRAILER.len();

/// Target information carried by one telemetry frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryFrame {
    pub error_x: i16,
    pub error_y: i16,
    pub distance: u16,
}

impl TelemetryFrame {
    pub fn new(error_x: i16, error_y: i16, distance: u16) -> Self {
        Self {
            error_x,
            error_y,
            distance,
        }
    }

    /// The six payload bytes.
    pub fn data_bytes(&self) -> [u8; FRAME_DATA_SIZE] {
        let [xh, xl] = self.error_x.to_be_bytes();
        let [yh, yl] = self.error_y.to_be_bytes();
        let [dh, dl] = self.distance.to_be_bytes();
        [xh, xl, yh, yl, dh, dl]
    }

    pub(crate) fn from_data_bytes(data: &[u8; FRAME_DATA_SIZE]) -> Self {
        Self {
            error_x: i16::from_be_bytes([data[0], data[1]]),
            error_y: i16::from_be_bytes([data[2], data[3]]),
            distance: u16::from_be_bytes([data[4], data[5]]),
        }
    }

    /// Complete wire frame including header, checksum and trailer.
    pub fn encode(&self) -> [u8; FRAME_LEN] {
        let data = self.data_bytes();
        let mut out = [0u8; FRAME_LEN];
        out[..2].copy_from_slice(&FRAME_HEADER);
        out[2..2 + FRAME_DATA_SIZE].copy_from_slice(&data);
        out[2 + FRAME_DATA_SIZE] = checksum(&data);
        out[FRAME_LEN - 2..].copy_from_slice(&FRAME_TRAILER);
        out
    }
}

/// Wrapping byte sum.
pub fn checksum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_layout() {
        let bytes = TelemetryFrame::new(-2, 0x0102, 300).encode();
        assert_eq!(
            bytes,
            [0xAA, 0xAA, 0xFF, 0xFE, 0x01, 0x02, 0x01, 0x2C, 0x2D, 0xFF, 0xFF]
        );
    }

    #[test]
    fn checksum_wraps() {
        assert_eq!(checksum(&[0xFF, 0x02]), 0x01);
        assert_eq!(checksum(&[]), 0);
    }
}
