//! Block framing for binary BMFont files.
//!
//! A file is the 4 byte header `B M F 3` followed by blocks of
//! `tag: u8, length: u32 (LE), payload: [u8; length]`.
use std::{fmt, iter::FusedIterator};

use crate::{
    codepage::TextDecoder,
    error::{FormatError, Result},
    records::{Char, Common, Info, KerningPair},
};

pub const MAGIC: &[u8; 3] = b"BMF";
pub const VERSION: u8 = 3;
pub const HEADER_SIZE: usize = 4;
pub const BLOCK_HEADER_SIZE: usize = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockKind {
    Info = 1,
    Common = 2,
    Pages = 3,
    Chars = 4,
    KerningPairs = 5,
}

impl BlockKind {
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(BlockKind::Info),
            2 => Some(BlockKind::Common),
            3 => Some(BlockKind::Pages),
            4 => Some(BlockKind::Chars),
            5 => Some(BlockKind::KerningPairs),
            _ => None,
        }
    }

    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Info => "info",
            BlockKind::Common => "common",
            BlockKind::Pages => "pages",
            BlockKind::Chars => "chars",
            BlockKind::KerningPairs => "kerning pairs",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One framed block whose payload has not been decoded yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawBlock<'a> {
    pub tag: u8,
    /// Offset of the payload from the start of the file.
    pub offset: usize,
    pub payload: &'a [u8],
}

/// A decoded block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block<'a> {
    Info(Info),
    Common(Common),
    Pages(Vec<String>),
    Chars(Vec<Char>),
    KerningPairs(Vec<KerningPair>),
    /// A tag this decoder does not know; the payload is handed back untouched.
    Unknown { tag: u8, payload: &'a [u8] },
}

impl Block<'_> {
    pub fn kind(&self) -> Option<BlockKind> {
        match self {
            Block::Info(_) => Some(BlockKind::Info),
            Block::Common(_) => Some(BlockKind::Common),
            Block::Pages(_) => Some(BlockKind::Pages),
            Block::Chars(_) => Some(BlockKind::Chars),
            Block::KerningPairs(_) => Some(BlockKind::KerningPairs),
            Block::Unknown { .. } => None,
        }
    }
}

impl<'a> RawBlock<'a> {
    pub fn kind(&self) -> Option<BlockKind> {
        BlockKind::from_tag(self.tag)
    }

    /// Decode the payload. Any failure is reported as
    /// [`FormatError::BlockDecode`] naming this block's kind.
    pub fn decode<D: TextDecoder + ?Sized>(&self, text: &D) -> Result<Block<'a>> {
        let Some(kind) = self.kind() else {
            return Ok(Block::Unknown {
                tag: self.tag,
                payload: self.payload,
            });
        };
        let payload = self.payload;
        let block = match kind {
            BlockKind::Info => Info::from_bytes(payload, text).map(Block::Info),
            BlockKind::Common => Common::from_block(payload).map(Block::Common),
            BlockKind::Pages => text
                .decode_text(payload)
                .map(|text| Block::Pages(split_pages(&text)))
                .map_err(FormatError::from),
            BlockKind::Chars => {
                return decode_records(kind, payload, Char::SIZE, Char::from_bytes)
                    .map(Block::Chars)
            }
            BlockKind::KerningPairs => {
                return decode_records(kind, payload, KerningPair::SIZE, KerningPair::from_bytes)
                    .map(Block::KerningPairs)
            }
        };
        block.map_err(|e| e.in_block(kind, None))
    }
}

/// Split transcoded page text into file names.
///
/// Every name is NUL terminated, so only the empty segment after the final
/// terminator is dropped. An empty name written before it survives, as does a
/// final name missing its terminator.
pub fn split_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split('\0').map(str::to_owned).collect();
    if pages.last().is_some_and(String::is_empty) {
        pages.pop();
    }
    pages
}

/// Decode a payload of back to back `size` byte records. A trailing partial
/// record is reported as truncated input at its record index.
fn decode_records<T>(
    kind: BlockKind,
    payload: &[u8],
    size: usize,
    read: impl Fn(&[u8]) -> Result<T>,
) -> Result<Vec<T>> {
    let mut chunks = payload.chunks_exact(size);
    let mut records = Vec::with_capacity(payload.len() / size);
    for (index, chunk) in chunks.by_ref().enumerate() {
        records.push(read(chunk).map_err(|e| e.in_block(kind, Some(index)))?);
    }
    let rest = chunks.remainder();
    if !rest.is_empty() {
        let err = FormatError::TruncatedInput {
            offset: payload.len() - rest.len(),
            needed: size,
            available: rest.len(),
        };
        return Err(err.in_block(kind, Some(records.len())));
    }
    Ok(records)
}

/// Iterator over the blocks of a file, in file order.
///
/// Stops once fewer than [`BLOCK_HEADER_SIZE`] bytes remain; those trailing
/// bytes are ignored. A block whose declared length runs past the end of the
/// buffer yields one [`FormatError::TruncatedInput`] and ends the iteration.
#[derive(Clone, Debug)]
pub struct Blocks<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Blocks<'a> {
    /// Validate the file header and position the iterator on the first block.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let Some(header) = data.get(..HEADER_SIZE) else {
            return Err(FormatError::TruncatedInput {
                offset: 0,
                needed: HEADER_SIZE,
                available: data.len(),
            });
        };
        if &header[..3] != MAGIC {
            return Err(FormatError::InvalidMagic([header[0], header[1], header[2]]));
        }
        if header[3] != VERSION {
            return Err(FormatError::UnsupportedVersion(header[3]));
        }
        Ok(Self {
            data,
            pos: HEADER_SIZE,
        })
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Result<RawBlock<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.data.get(self.pos..).unwrap_or_default();
        let &[tag, l0, l1, l2, l3, ..] = rest else {
            return None;
        };
        let len = u32::from_le_bytes([l0, l1, l2, l3]) as usize;
        let start = self.pos + BLOCK_HEADER_SIZE;
        let payload = start
            .checked_add(len)
            .and_then(|end| self.data.get(start..end));
        let Some(payload) = payload else {
            self.pos = self.data.len();
            return Some(Err(FormatError::TruncatedInput {
                offset: start,
                needed: len,
                available: self.data.len() - start,
            }));
        };
        self.pos = start + len;
        Some(Ok(RawBlock {
            tag,
            offset: start,
            payload,
        }))
    }
}

impl FusedIterator for Blocks<'_> {}
