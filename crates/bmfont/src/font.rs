use log::{debug, trace};

use crate::{
    block::{Block, Blocks},
    codepage::{CodePage, TextDecoder},
    records::{Char, Common, Info, KerningPair},
    Result,
};

/// A decoded BMFont descriptor.
///
/// Built in a single pass over the file's blocks: info and common are set
/// when their block is seen (a repeated block replaces the earlier one),
/// pages, chars and kerning pairs are appended in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    pub info: Option<Info>,
    pub common: Option<Common>,
    pub pages: Vec<String>,
    pub chars: Vec<Char>,
    pub kerning_pairs: Vec<KerningPair>,
}

impl Font {
    /// Decode a whole file held in memory, reading text as Windows-1252.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_with(bytes, &CodePage::default())
    }

    /// Decode a whole file held in memory, reading text with `text`.
    ///
    /// Decoding is all or nothing: the first error aborts and no partial
    /// font is returned.
    pub fn from_bytes_with<D: TextDecoder + ?Sized>(bytes: &[u8], text: &D) -> Result<Self> {
        let mut font = Font::default();
        for raw in Blocks::new(bytes)? {
            let raw = raw?;
            trace!(
                "block tag {} at offset {} ({} bytes)",
                raw.tag,
                raw.offset,
                raw.payload.len()
            );
            font.push_block(raw.decode(text)?);
        }
        debug!(
            "decoded font: {} pages, {} chars, {} kerning pairs",
            font.pages.len(),
            font.chars.len(),
            font.kerning_pairs.len()
        );
        Ok(font)
    }

    /// Fold one decoded block into the font.
    pub fn push_block(&mut self, block: Block<'_>) {
        match block {
            Block::Info(info) => self.info = Some(info),
            Block::Common(common) => self.common = Some(common),
            Block::Pages(pages) => self.pages.extend(pages),
            Block::Chars(chars) => self.chars.extend(chars),
            Block::KerningPairs(pairs) => self.kerning_pairs.extend(pairs),
            Block::Unknown { tag, payload } => {
                debug!("skipping unknown block tag {tag} ({} bytes)", payload.len())
            }
        }
    }

    /// Face name from the info block, without its terminator.
    pub fn name(&self) -> Option<&str> {
        self.info.as_ref().map(Info::name)
    }

    pub fn char(&self, id: u32) -> Option<&Char> {
        self.chars.iter().find(|c| c.id == id)
    }

    pub fn has_char(&self, id: u32) -> bool {
        self.char(id).is_some()
    }

    /// Horizontal adjustment between `first` and `second`, 0 if there is no pair.
    pub fn kerning(&self, first: u32, second: u32) -> i16 {
        self.kerning_pairs
            .iter()
            .find(|k| k.first == first && k.second == second)
            .map_or(0, |k| k.amount)
    }

    pub fn page(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }

    /// Texture page holding `ch`.
    pub fn page_of(&self, ch: &Char) -> Option<&str> {
        self.page(ch.page as usize)
    }
}
