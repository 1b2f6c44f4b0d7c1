//! The fixed-size records carried by the info, common, chars and kerning
//! pair blocks.
use crate::{
    error::{FormatError, Result},
    layout::record,
};

record! {
    /// Font-level metadata from the info block.
    pub struct Info (14) {
        /// Size of the source TrueType font. Negative when the font was
        /// generated to match character height rather than cell height.
        [0] font_size: i16,
        [2] bit_field: u8,
        /// OEM charset id, meaningful when the unicode bit is clear.
        [3] char_set: u8,
        /// Horizontal stretch in percent; 100 means no stretch.
        [4] stretch_h: u16,
        /// Supersampling level; 1 means none.
        [6] aa: u8,
        [7] padding_up: u8,
        [8] padding_right: u8,
        [9] padding_down: u8,
        [10] padding_left: u8,
        [11] spacing_horiz: u8,
        [12] spacing_vert: u8,
        [13] outline: u8,
    }
    /// Face name as transcoded, including any terminator the writer stored.
    text font_name;
}

impl Info {
    pub const SMOOTH: u8 = 1 << 7;
    pub const UNICODE: u8 = 1 << 6;
    pub const ITALIC: u8 = 1 << 5;
    pub const BOLD: u8 = 1 << 4;
    pub const FIXED_HEIGHT: u8 = 1 << 3;

    /// Face name without trailing NUL terminators.
    pub fn name(&self) -> &str {
        self.font_name.trim_end_matches('\0')
    }

    pub fn is_smooth(&self) -> bool {
        self.bit_field & Self::SMOOTH != 0
    }

    pub fn is_unicode(&self) -> bool {
        self.bit_field & Self::UNICODE != 0
    }

    pub fn is_italic(&self) -> bool {
        self.bit_field & Self::ITALIC != 0
    }

    pub fn is_bold(&self) -> bool {
        self.bit_field & Self::BOLD != 0
    }

    pub fn is_fixed_height(&self) -> bool {
        self.bit_field & Self::FIXED_HEIGHT != 0
    }
}

record! {
    /// Rendering parameters shared by every glyph.
    pub struct Common (15) {
        /// Distance in pixels between two lines of text.
        [0] line_height: u16,
        /// Distance from the top of a line to the glyph baseline.
        [2] base: u16,
        [4] scale_w: u16,
        [6] scale_h: u16,
        /// Number of texture pages the writer declared.
        [8] pages: u16,
        [10] bit_field: u8,
        [11] alpha_chnl: u8,
        [12] red_chnl: u8,
        [13] green_chnl: u8,
        [14] blue_chnl: u8,
    }
}

impl Common {
    pub const PACKED: u8 = 1;

    /// Decode a common block, which must be exactly [`Common::SIZE`] bytes.
    pub fn from_block(bytes: &[u8]) -> Result<Self> {
        let common = Self::from_bytes(bytes)?;
        if bytes.len() != Self::SIZE {
            return Err(FormatError::LengthMismatch {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }
        Ok(common)
    }

    /// Glyphs are packed into separate color channels.
    pub fn is_packed(&self) -> bool {
        self.bit_field & Self::PACKED != 0
    }
}

record! {
    /// Placement and metrics of a single glyph in the atlas.
    pub struct Char (20) {
        [0] id: u32,
        [4] x: u16,
        [6] y: u16,
        [8] width: u16,
        [10] height: u16,
        [12] xoffset: i16,
        [14] yoffset: i16,
        [16] xadvance: i16,
        /// Index into the page list.
        [18] page: u8,
        /// Channels holding the glyph (1 blue, 2 green, 4 red, 8 alpha, 15 all).
        [19] chnl: u8,
    }
}

record! {
    pub struct KerningPair (10) {
        [0] first: u32,
        [4] second: u32,
        [8] amount: i16,
    }
}
