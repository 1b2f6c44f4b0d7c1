use bmfont::{decode, decode_with, Char, CodePage, Common, FormatError, KerningPair};
use pretty_assertions::assert_eq;

const SAMPLE_FNT: &[u8] = include_bytes!("data/sample.fnt");

#[test]
fn test_sample_info() {
    let font = decode(SAMPLE_FNT).expect("sample.fnt should decode");
    let info = font.info.as_ref().expect("info block");
    assert_eq!(info.font_size, -24);
    assert!(info.is_smooth());
    assert!(info.is_unicode());
    assert!(!info.is_italic());
    assert!(!info.is_bold());
    assert!(!info.is_fixed_height());
    assert_eq!(info.char_set, 0);
    assert_eq!(info.stretch_h, 100);
    assert_eq!(info.aa, 1);
    assert_eq!(
        [
            info.padding_up,
            info.padding_right,
            info.padding_down,
            info.padding_left
        ],
        [1, 2, 3, 4]
    );
    assert_eq!([info.spacing_horiz, info.spacing_vert], [1, 1]);
    assert_eq!(info.outline, 0);
    // The writer stores the terminator; it is kept in the raw field.
    assert_eq!(info.font_name, "Café Sans\0");
    assert_eq!(font.name(), Some("Café Sans"));
}

#[test]
fn test_sample_common_and_pages() {
    let font = decode(SAMPLE_FNT).unwrap();
    assert_eq!(
        font.common,
        Some(Common {
            line_height: 29,
            base: 23,
            scale_w: 256,
            scale_h: 128,
            pages: 2,
            bit_field: 0,
            alpha_chnl: 1,
            red_chnl: 0,
            green_chnl: 0,
            blue_chnl: 0,
        })
    );
    assert!(!font.common.unwrap().is_packed());
    assert_eq!(font.pages, ["sample_0.png", "sample_1.png"]);
    assert_eq!(font.pages.len(), font.common.unwrap().pages as usize);
}

#[test]
fn test_sample_chars() {
    let font = decode(SAMPLE_FNT).unwrap();
    assert_eq!(font.chars.len(), 5);
    assert_eq!(
        font.char('A' as u32),
        Some(&Char {
            id: 65,
            x: 10,
            y: 0,
            width: 16,
            height: 18,
            xoffset: -1,
            yoffset: 5,
            xadvance: 15,
            page: 0,
            chnl: 15,
        })
    );
    let e_acute = font.char('é' as u32).unwrap();
    assert_eq!(e_acute.xoffset, 1);
    assert_eq!(font.page_of(e_acute), Some("sample_1.png"));
    let euro = font.char('€' as u32).unwrap();
    assert_eq!((euro.x, euro.y, euro.page), (20, 40, 1));
    assert!(font.has_char(' ' as u32));
    assert!(!font.has_char('Z' as u32));
}

#[test]
fn test_sample_kerning() {
    let font = decode(SAMPLE_FNT).unwrap();
    assert_eq!(
        font.kerning_pairs,
        [
            KerningPair {
                first: 65,
                second: 86,
                amount: -2
            },
            KerningPair {
                first: 86,
                second: 65,
                amount: -3
            },
        ]
    );
    assert_eq!(font.kerning('A' as u32, 'V' as u32), -2);
    assert_eq!(font.kerning('V' as u32, 'A' as u32), -3);
    assert_eq!(font.kerning('A' as u32, 'A' as u32), 0);
}

#[test]
fn test_sample_code_pages() {
    // The face name contains 0xE9, which only ASCII cannot represent.
    let latin1 = decode_with(SAMPLE_FNT, &CodePage::Latin1).unwrap();
    assert_eq!(latin1.name(), Some("Café Sans"));
    let cp437 = decode_with(SAMPLE_FNT, &CodePage::Cp437).unwrap();
    assert_eq!(cp437.name(), Some("CafΘ Sans"));
    assert_eq!(cp437.chars, latin1.chars);

    let err = decode_with(SAMPLE_FNT, &CodePage::Ascii).unwrap_err();
    assert!(matches!(
        err.root_cause(),
        FormatError::Encoding(e) if e.byte == 0xe9 && e.offset == 3
    ));
}

#[test]
fn test_sample_truncated_everywhere() {
    // Cutting the file anywhere inside a block must fail cleanly. Cuts that
    // leave fewer than five bytes after the last complete block still decode.
    let block_ends = [33, 53, 84, 189, 214];
    for len in 0..SAMPLE_FNT.len() {
        let result = decode(&SAMPLE_FNT[..len]);
        if len < 4 {
            assert!(matches!(result, Err(FormatError::TruncatedInput { .. })));
            continue;
        }
        let last_end = block_ends.iter().rev().find(|&&end| end <= len).copied().unwrap_or(4);
        if len - last_end < 5 {
            assert!(result.is_ok(), "cut at {len} should decode");
        } else {
            assert!(
                matches!(result, Err(FormatError::TruncatedInput { .. })),
                "cut at {len}: {result:?}"
            );
        }
    }
}
