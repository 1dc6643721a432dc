/// Built-in PDF fonts the flyer template uses. These are part of the
/// standard 14 and are available in every viewer without embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    ZapfDingbats,
}

impl BuiltinFont {
    /// Every font, in resource-name order.
    pub const ALL: [BuiltinFont; 4] = [
        BuiltinFont::Helvetica,
        BuiltinFont::HelveticaBold,
        BuiltinFont::HelveticaOblique,
        BuiltinFont::ZapfDingbats,
    ];

    /// Resource name used in content streams (e.g. "F1").
    pub fn pdf_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "F1",
            BuiltinFont::HelveticaBold => "F2",
            BuiltinFont::HelveticaOblique => "F3",
            BuiltinFont::ZapfDingbats => "F4",
        }
    }

    /// PDF BaseFont name.
    pub fn pdf_base_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::HelveticaOblique => "Helvetica-Oblique",
            BuiltinFont::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Symbolic fonts carry their own built-in encoding.
    pub fn is_symbolic(&self) -> bool {
        matches!(self, BuiltinFont::ZapfDingbats)
    }

    /// Encode text into the single-byte code space of this font.
    /// Text fonts use WinAnsiEncoding; characters it cannot represent
    /// become `?`.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        if self.is_symbolic() {
            return text.chars().map(dingbat_code).collect();
        }
        text.chars().map(win_ansi_code).collect()
    }
}

// -------------------------------------------------------
// Encoding
// -------------------------------------------------------

fn win_ansi_code(ch: char) -> u8 {
    let code = ch as u32;
    match code {
        0x20..=0x7e | 0xa0..=0xff => code as u8,
        _ => match ch {
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‰' => 0x89,
            '‹' => 0x8b,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            '›' => 0x9b,
            '\t' => b' ',
            _ => b'?',
        },
    }
}

fn dingbat_code(ch: char) -> u8 {
    match ch {
        '✓' => 0x33,
        '✔' => 0x34,
        '✗' => 0x37,
        ' '..='~' => ch as u8,
        _ => 0x6c, // filled circle
    }
}

// -------------------------------------------------------
// Metrics
// -------------------------------------------------------

/// Helvetica advance widths for ASCII 32..=126, in 1/1000 em.
/// Source: Adobe Helvetica AFM data. Oblique shares these widths.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advance widths for ASCII 32..=126, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width of a dingbat glyph that is not listed individually.
const DINGBAT_WIDTH: u16 = 788;

/// Font metrics for the built-in fonts.
pub struct FontMetrics;

impl FontMetrics {
    /// Width of one encoded byte in 1/1000 em.
    pub fn byte_width(font: BuiltinFont, code: u8) -> u16 {
        if font.is_symbolic() {
            return match code {
                0x20 => 278,
                0x33 => 755,
                0x34 => 761,
                _ => DINGBAT_WIDTH,
            };
        }
        let bold = font == BuiltinFont::HelveticaBold;
        let ascii = |c: u8| {
            let index = (c - 32) as usize;
            if bold {
                HELVETICA_BOLD_WIDTHS[index]
            } else {
                HELVETICA_WIDTHS[index]
            }
        };
        match code {
            0x20..=0x7e => ascii(code),
            0x95 => 350,
            0x80 | 0x96 => 556,
            0x85 | 0x89 | 0x97 => 1000,
            0x82 | 0x91 | 0x92 => if bold { 278 } else { 222 },
            0x84 | 0x93 | 0x94 => if bold { 500 } else { 333 },
            0x8b | 0x9b => 333,
            0x99 => 1000,
            0xa0 => 278,
            0xa7 | 0xab | 0xbb => 556,
            0xa9 | 0xae => 737,
            0xb0 => 400,
            0xdf => 611,
            _ => match latin1_base_letter(code) {
                Some(base) => ascii(base),
                None => 556,
            },
        }
    }

    /// Width of a single character once encoded for `font`.
    pub fn char_width(font: BuiltinFont, ch: char) -> u16 {
        let mut buf = [0u8; 4];
        font.encode(ch.encode_utf8(&mut buf))
            .first()
            .map(|&code| Self::byte_width(font, code))
            .unwrap_or(0)
    }

    /// Measure a string in points.
    pub fn measure_text(text: &str, font: BuiltinFont, font_size: f64) -> f64 {
        let total: u32 = font
            .encode(text)
            .into_iter()
            .map(|code| Self::byte_width(font, code) as u32)
            .sum();
        total as f64 * font_size / 1000.0
    }
}

/// Accented Latin-1 letters take the width of their base letter.
fn latin1_base_letter(code: u8) -> Option<u8> {
    let base = match code {
        0xc0..=0xc5 => b'A',
        0xc6 => b'W', // AE is as wide as W
        0xc7 => b'C',
        0xc8..=0xcb => b'E',
        0xcc..=0xcf => b'I',
        0xd1 => b'N',
        0xd2..=0xd6 | 0xd8 => b'O',
        0xd9..=0xdc => b'U',
        0xdd => b'Y',
        0xe0..=0xe5 => b'a',
        0xe6 => b'm',
        0xe7 => b'c',
        0xe8..=0xeb => b'e',
        0xec..=0xef => b'I', // accented i is wider than i
        0xf1 => b'n',
        0xf2..=0xf6 | 0xf8 => b'o',
        0xf9..=0xfc => b'u',
        0xfd | 0xff => b'y',
        _ => return None,
    };
    Some(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn umlauts_encode_to_latin1() {
        assert_eq!(BuiltinFont::Helvetica.encode("Müller"), b"M\xfcller".to_vec());
    }

    #[test]
    fn bullet_and_dash_encode_to_win_ansi() {
        assert_eq!(BuiltinFont::Helvetica.encode("•–"), vec![0x95, 0x96]);
    }

    #[test]
    fn unmappable_becomes_question_mark() {
        assert_eq!(BuiltinFont::HelveticaBold.encode("✓"), b"?".to_vec());
    }

    #[test]
    fn check_mark_maps_to_dingbat() {
        assert_eq!(BuiltinFont::ZapfDingbats.encode("✓"), b"3".to_vec());
    }

    #[test]
    fn umlaut_width_matches_base_letter() {
        assert_eq!(
            FontMetrics::char_width(BuiltinFont::Helvetica, 'ü'),
            FontMetrics::char_width(BuiltinFont::Helvetica, 'u'),
        );
        assert_eq!(FontMetrics::char_width(BuiltinFont::Helvetica, 'ß'), 611);
    }
}
