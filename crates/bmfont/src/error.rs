use thiserror::Error;

use crate::block::BlockKind;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid identifier {0:?}, expected \"BMF\"")]
    InvalidMagic([u8; 3]),
    #[error("unsupported version {0}, only version 3 is supported")]
    UnsupportedVersion(u8),
    #[error("truncated input: {needed} bytes needed at offset {offset}, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("block length mismatch: decoder consumes {expected} bytes, block declares {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error("error parsing {kind} block{}", fmt_index(.index))]
    BlockDecode {
        kind: BlockKind,
        index: Option<usize>,
        source: Box<FormatError>,
    },
}

fn fmt_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" (record {i})"),
        None => String::new(),
    }
}

impl FormatError {
    pub(crate) fn in_block(self, kind: BlockKind, index: Option<usize>) -> Self {
        FormatError::BlockDecode {
            kind,
            index,
            source: Box::new(self),
        }
    }

    /// The innermost error, with every `BlockDecode` layer peeled off.
    pub fn root_cause(&self) -> &FormatError {
        let mut err = self;
        while let FormatError::BlockDecode { source, .. } = err {
            err = source;
        }
        err
    }
}

/// A byte the text decoder could not convert. `encoding` names the decoder
/// that failed, so injected decoders report under their own name.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("cannot decode byte 0x{byte:02x} at offset {offset} as {encoding}")]
pub struct EncodingError {
    pub encoding: &'static str,
    pub byte: u8,
    pub offset: usize,
}

pub type Result<T> = std::result::Result<T, FormatError>;
