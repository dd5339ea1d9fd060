use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

/// Codec applied to a producer's record batches. The discriminant is the
/// value stored in the batch attributes.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum CompressionCodec {
    #[default]
    None = 0,
    Gzip = 1,
    Snappy = 2,
    Lz4 = 3,
}

impl CompressionCodec {
    pub fn attribute(self) -> i8 {
        self as i8
    }
}

impl TryFrom<i8> for CompressionCodec {
    type Error = ProtocolError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CompressionCodec::None),
            1 => Ok(CompressionCodec::Gzip),
            2 => Ok(CompressionCodec::Snappy),
            3 => Ok(CompressionCodec::Lz4),
            _ => Err(ProtocolError::UnknownCompressionCodec(value)),
        }
    }
}

impl fmt::Display for CompressionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompressionCodec::None => "none",
            CompressionCodec::Gzip => "gzip",
            CompressionCodec::Snappy => "snappy",
            CompressionCodec::Lz4 => "lz4",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_codes_convert_back() {
        for codec in [
            CompressionCodec::None,
            CompressionCodec::Gzip,
            CompressionCodec::Snappy,
            CompressionCodec::Lz4,
        ] {
            assert_eq!(CompressionCodec::try_from(codec.attribute()), Ok(codec));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(
            CompressionCodec::try_from(9),
            Err(ProtocolError::UnknownCompressionCodec(9))
        );
    }
}
