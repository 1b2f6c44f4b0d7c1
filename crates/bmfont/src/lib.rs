//! bmfont: decoder for binary AngelCode BMFont (`.fnt`, version 3) files.
//!
//! The whole file is expected in memory; [`decode`] turns it into a [`Font`]
//! holding the info, common, page, glyph and kerning data.

pub mod block;
pub mod codepage;
mod error;
mod font;
mod layout;
mod records;

pub use block::{Block, BlockKind, Blocks, RawBlock};
pub use codepage::{CodePage, TextDecoder};
pub use error::{EncodingError, FormatError, Result};
pub use font::Font;
pub use layout::{Field, Layout, Scalar};
pub use records::{Char, Common, Info, KerningPair};

// Test utilities
pub mod test_support;

/// Decode a binary BMFont file, reading text as Windows-1252.
pub fn decode(bytes: &[u8]) -> Result<Font> {
    Font::from_bytes(bytes)
}

/// Decode a binary BMFont file, reading text with `text`.
pub fn decode_with<D: TextDecoder + ?Sized>(bytes: &[u8], text: &D) -> Result<Font> {
    Font::from_bytes_with(bytes, text)
}
