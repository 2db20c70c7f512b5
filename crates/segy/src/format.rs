//! On-disk layout of a CWP/SU trace record
//!
//! A record is a fixed 240-byte header followed by `ns` 32-bit float samples,
//! where `ns` is the unsigned 16-bit field at byte offset 114 of the header.
//! There is no file-level header; records follow each other back to back.

use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size of the trace header block in bytes
pub const HEADER_BYTES: usize = 240;

/// Byte offset of the `ns` (samples per trace) field within the header
pub const NS_OFFSET: usize = 114;

/// Size of one sample in bytes
pub const SAMPLE_BYTES: usize = std::mem::size_of::<f32>();

/// Byte order used for the `ns` field and the sample values
///
/// SU files are written in the byte order of the machine that produced them,
/// so `Native` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    #[default]
    Native,
    Little,
    Big,
}

impl ByteOrder {
    fn is_little(self) -> bool {
        match self {
            ByteOrder::Native => cfg!(target_endian = "little"),
            ByteOrder::Little => true,
            ByteOrder::Big => false,
        }
    }

    /// Decode the `ns` field from a header block
    pub fn read_ns(self, header: &[u8; HEADER_BYTES]) -> u16 {
        let mut field = &header[NS_OFFSET..NS_OFFSET + 2];
        if self.is_little() {
            field.get_u16_le()
        } else {
            field.get_u16()
        }
    }

    /// Encode the `ns` field into a header block
    pub fn write_ns(self, header: &mut [u8; HEADER_BYTES], ns: u16) {
        let mut field = &mut header[NS_OFFSET..NS_OFFSET + 2];
        if self.is_little() {
            field.put_u16_le(ns);
        } else {
            field.put_u16(ns);
        }
    }

    /// Decode a packed sample block into `out`, replacing its contents
    pub fn decode_samples(self, mut raw: &[u8], out: &mut Vec<f32>) {
        out.clear();
        out.reserve(raw.len() / SAMPLE_BYTES);
        let little = self.is_little();
        while raw.remaining() >= SAMPLE_BYTES {
            out.push(if little { raw.get_f32_le() } else { raw.get_f32() });
        }
    }

    /// Encode samples into a packed block appended to `out`
    pub fn encode_samples(self, samples: &[f32], out: &mut Vec<u8>) {
        out.reserve(samples.len() * SAMPLE_BYTES);
        let little = self.is_little();
        for &sample in samples {
            if little {
                out.put_f32_le(sample);
            } else {
                out.put_f32(sample);
            }
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ByteOrder::Native => "native",
            ByteOrder::Little => "little",
            ByteOrder::Big => "big",
        };
        f.write_str(name)
    }
}

impl FromStr for ByteOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(ByteOrder::Native),
            "little" | "le" => Ok(ByteOrder::Little),
            "big" | "be" => Ok(ByteOrder::Big),
            other => Err(format!(
                "unknown byte order '{}' (expected native, little or big)",
                other
            )),
        }
    }
}
