//! Legacy single-byte text decoding.
//!
//! BMFont stores the face name and page file names in the code page of the
//! machine that produced the file, which in practice is Windows-1252. The code
//! page is always passed to the decoder explicitly; nothing here is global.
use std::{fmt, str::FromStr};

use crate::error::EncodingError;

/// Converts a span of encoded bytes into a Unicode string.
pub trait TextDecoder {
    fn decode_text(&self, bytes: &[u8]) -> Result<String, EncodingError>;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CodePage {
    #[default]
    Windows1252,
    Latin1,
    Cp437,
    Ascii,
    Utf8,
}

/// Bytes reserved for decoding `len` input bytes. Most code page bytes fit in
/// two UTF-8 bytes; the buffer still grows for the rare three byte ones.
pub const fn output_capacity(len: usize) -> usize {
    len * 5 / 2
}

impl CodePage {
    pub const ALL: [CodePage; 5] = [
        CodePage::Windows1252,
        CodePage::Latin1,
        CodePage::Cp437,
        CodePage::Ascii,
        CodePage::Utf8,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CodePage::Windows1252 => "windows-1252",
            CodePage::Latin1 => "latin1",
            CodePage::Cp437 => "cp437",
            CodePage::Ascii => "ascii",
            CodePage::Utf8 => "utf8",
        }
    }

    /// Decode `src`, appending to `dst`. Returns the number of UTF-8 bytes
    /// written. On error `dst` is left as it was.
    pub fn decode_into(self, src: &[u8], dst: &mut String) -> Result<usize, EncodingError> {
        let start = dst.len();
        if self == CodePage::Utf8 {
            let text = std::str::from_utf8(src).map_err(|e| EncodingError {
                encoding: self.name(),
                byte: src[e.valid_up_to()],
                offset: e.valid_up_to(),
            })?;
            dst.push_str(text);
            return Ok(dst.len() - start);
        }
        dst.reserve(output_capacity(src.len()));
        for (offset, &byte) in src.iter().enumerate() {
            match self.map_byte(byte) {
                Some(ch) => dst.push(ch),
                None => {
                    dst.truncate(start);
                    return Err(EncodingError {
                        encoding: self.name(),
                        byte,
                        offset,
                    });
                }
            }
        }
        Ok(dst.len() - start)
    }

    fn map_byte(self, byte: u8) -> Option<char> {
        if byte < 0x80 {
            return Some(byte as char);
        }
        match self {
            CodePage::Windows1252 => Some(match byte {
                0x80..=0x9F => WINDOWS_1252_C1[(byte - 0x80) as usize],
                _ => byte as char,
            }),
            CodePage::Latin1 => Some(byte as char),
            CodePage::Cp437 => Some(CP437_HIGH[(byte - 0x80) as usize]),
            CodePage::Ascii | CodePage::Utf8 => None,
        }
    }
}

impl TextDecoder for CodePage {
    fn decode_text(&self, bytes: &[u8]) -> Result<String, EncodingError> {
        let mut out = String::with_capacity(output_capacity(bytes.len()));
        self.decode_into(bytes, &mut out)?;
        Ok(out)
    }
}

impl fmt::Display for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CodePage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows-1252" | "windows1252" | "cp1252" => Ok(CodePage::Windows1252),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(CodePage::Latin1),
            "cp437" | "ibm437" => Ok(CodePage::Cp437),
            "ascii" | "us-ascii" => Ok(CodePage::Ascii),
            "utf8" | "utf-8" => Ok(CodePage::Utf8),
            other => Err(format!("unknown code page '{other}'")),
        }
    }
}

// 0x81, 0x8D, 0x8F, 0x90 and 0x9D are unassigned and pass through as C1 controls.
const WINDOWS_1252_C1: [char; 32] = [
    '\u{20ac}', '\u{0081}', '\u{201a}', '\u{0192}', '\u{201e}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02c6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008d}', '\u{017d}', '\u{008f}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201c}', '\u{201d}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02dc}', '\u{2122}', '\u{0161}', '\u{203a}', '\u{0153}', '\u{009d}', '\u{017e}', '\u{0178}',
];

const CP437_HIGH: [char; 128] = [
    '\u{00c7}', '\u{00fc}', '\u{00e9}', '\u{00e2}', '\u{00e4}', '\u{00e0}', '\u{00e5}', '\u{00e7}',
    '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ef}', '\u{00ee}', '\u{00ec}', '\u{00c4}', '\u{00c5}',
    '\u{00c9}', '\u{00e6}', '\u{00c6}', '\u{00f4}', '\u{00f6}', '\u{00f2}', '\u{00fb}', '\u{00f9}',
    '\u{00ff}', '\u{00d6}', '\u{00dc}', '\u{00a2}', '\u{00a3}', '\u{00a5}', '\u{20a7}', '\u{0192}',
    '\u{00e1}', '\u{00ed}', '\u{00f3}', '\u{00fa}', '\u{00f1}', '\u{00d1}', '\u{00aa}', '\u{00ba}',
    '\u{00bf}', '\u{2310}', '\u{00ac}', '\u{00bd}', '\u{00bc}', '\u{00a1}', '\u{00ab}', '\u{00bb}',
    '\u{2591}', '\u{2592}', '\u{2593}', '\u{2502}', '\u{2524}', '\u{2561}', '\u{2562}', '\u{2556}',
    '\u{2555}', '\u{2563}', '\u{2551}', '\u{2557}', '\u{255d}', '\u{255c}', '\u{255b}', '\u{2510}',
    '\u{2514}', '\u{2534}', '\u{252c}', '\u{251c}', '\u{2500}', '\u{253c}', '\u{255e}', '\u{255f}',
    '\u{255a}', '\u{2554}', '\u{2569}', '\u{2566}', '\u{2560}', '\u{2550}', '\u{256c}', '\u{2567}',
    '\u{2568}', '\u{2564}', '\u{2565}', '\u{2559}', '\u{2558}', '\u{2552}', '\u{2553}', '\u{256b}',
    '\u{256a}', '\u{2518}', '\u{250c}', '\u{2588}', '\u{2584}', '\u{258c}', '\u{2590}', '\u{2580}',
    '\u{03b1}', '\u{00df}', '\u{0393}', '\u{03c0}', '\u{03a3}', '\u{03c3}', '\u{00b5}', '\u{03c4}',
    '\u{03a6}', '\u{0398}', '\u{03a9}', '\u{03b4}', '\u{221e}', '\u{03c6}', '\u{03b5}', '\u{2229}',
    '\u{2261}', '\u{00b1}', '\u{2265}', '\u{2264}', '\u{2320}', '\u{2321}', '\u{00f7}', '\u{2248}',
    '\u{00b0}', '\u{2219}', '\u{00b7}', '\u{221a}', '\u{207f}', '\u{00b2}', '\u{25a0}', '\u{00a0}',
];
