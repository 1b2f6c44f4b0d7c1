//! Test support utilities for bmfont.
//!
//! Builders for synthetic BMFont byte streams, used by the test suites and the
//! benchmark. They are not part of the decoding API.

use crate::{
    block::{BlockKind, MAGIC, VERSION},
    Char, Common, Info, KerningPair,
};

/// Assembles a BMFont file block by block.
pub struct FontBytes {
    bytes: Vec<u8>,
}

impl FontBytes {
    /// A stream starting with a valid `BMF 3` header.
    pub fn new() -> Self {
        Self::with_header(*MAGIC, VERSION)
    }

    pub fn with_header(magic: [u8; 3], version: u8) -> Self {
        let mut bytes = magic.to_vec();
        bytes.push(version);
        Self { bytes }
    }

    /// Append a block with an arbitrary tag.
    pub fn block(mut self, tag: u8, payload: &[u8]) -> Self {
        self.bytes.push(tag);
        self.bytes.extend((payload.len() as u32).to_le_bytes());
        self.bytes.extend_from_slice(payload);
        self
    }

    /// Append bytes verbatim, without any framing.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Info block using the header fields of `info` and `name` as the
    /// already encoded face name.
    pub fn info(self, info: &Info, name: &[u8]) -> Self {
        let mut payload = info_header_bytes(info).to_vec();
        payload.extend_from_slice(name);
        self.block(BlockKind::Info.tag(), &payload)
    }

    pub fn common(self, common: &Common) -> Self {
        self.block(BlockKind::Common.tag(), &common_bytes(common))
    }

    /// Pages block with every name NUL terminated.
    pub fn pages(self, names: &[&str]) -> Self {
        let mut payload = Vec::new();
        for name in names {
            payload.extend_from_slice(name.as_bytes());
            payload.push(0);
        }
        self.block(BlockKind::Pages.tag(), &payload)
    }

    pub fn chars(self, chars: &[Char]) -> Self {
        let payload: Vec<u8> = chars.iter().flat_map(char_bytes).collect();
        self.block(BlockKind::Chars.tag(), &payload)
    }

    pub fn kerning_pairs(self, pairs: &[KerningPair]) -> Self {
        let payload: Vec<u8> = pairs.iter().flat_map(kerning_pair_bytes).collect();
        self.block(BlockKind::KerningPairs.tag(), &payload)
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

impl Default for FontBytes {
    fn default() -> Self {
        Self::new()
    }
}

pub fn info_header_bytes(info: &Info) -> [u8; Info::HEADER_SIZE] {
    let mut out = [0; Info::HEADER_SIZE];
    out[0..2].copy_from_slice(&info.font_size.to_le_bytes());
    out[2] = info.bit_field;
    out[3] = info.char_set;
    out[4..6].copy_from_slice(&info.stretch_h.to_le_bytes());
    out[6..14].copy_from_slice(&[
        info.aa,
        info.padding_up,
        info.padding_right,
        info.padding_down,
        info.padding_left,
        info.spacing_horiz,
        info.spacing_vert,
        info.outline,
    ]);
    out
}

pub fn common_bytes(common: &Common) -> [u8; Common::SIZE] {
    let mut out = [0; Common::SIZE];
    out[0..2].copy_from_slice(&common.line_height.to_le_bytes());
    out[2..4].copy_from_slice(&common.base.to_le_bytes());
    out[4..6].copy_from_slice(&common.scale_w.to_le_bytes());
    out[6..8].copy_from_slice(&common.scale_h.to_le_bytes());
    out[8..10].copy_from_slice(&common.pages.to_le_bytes());
    out[10..15].copy_from_slice(&[
        common.bit_field,
        common.alpha_chnl,
        common.red_chnl,
        common.green_chnl,
        common.blue_chnl,
    ]);
    out
}

pub fn char_bytes(ch: &Char) -> [u8; Char::SIZE] {
    let mut out = [0; Char::SIZE];
    out[0..4].copy_from_slice(&ch.id.to_le_bytes());
    out[4..6].copy_from_slice(&ch.x.to_le_bytes());
    out[6..8].copy_from_slice(&ch.y.to_le_bytes());
    out[8..10].copy_from_slice(&ch.width.to_le_bytes());
    out[10..12].copy_from_slice(&ch.height.to_le_bytes());
    out[12..14].copy_from_slice(&ch.xoffset.to_le_bytes());
    out[14..16].copy_from_slice(&ch.yoffset.to_le_bytes());
    out[16..18].copy_from_slice(&ch.xadvance.to_le_bytes());
    out[18] = ch.page;
    out[19] = ch.chnl;
    out
}

pub fn kerning_pair_bytes(pair: &KerningPair) -> [u8; KerningPair::SIZE] {
    let mut out = [0; KerningPair::SIZE];
    out[0..4].copy_from_slice(&pair.first.to_le_bytes());
    out[4..8].copy_from_slice(&pair.second.to_le_bytes());
    out[8..10].copy_from_slice(&pair.amount.to_le_bytes());
    out
}
