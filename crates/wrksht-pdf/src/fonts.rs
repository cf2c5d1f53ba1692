//! Core Helvetica faces and their advance widths.
//!
//! The standard 14 fonts are not embedded, so string measurement uses the
//! published AFM widths (thousandths of an em) for the printable ASCII
//! range. Anything outside that range is measured as a digit.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontFace {
    Regular,
    Bold,
    Italic,
}

impl FontFace {
    pub const ALL: [FontFace; 3] = [FontFace::Regular, FontFace::Bold, FontFace::Italic];

    /// Name used in the page resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::Regular => "F1",
            FontFace::Bold => "F2",
            FontFace::Italic => "F3",
        }
    }

    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
            FontFace::Italic => "Helvetica-Oblique",
        }
    }

    pub fn char_width(self, c: char) -> u16 {
        let table = match self {
            // Oblique shares the upright metrics.
            FontFace::Regular | FontFace::Italic => &HELVETICA,
            FontFace::Bold => &HELVETICA_BOLD,
        };
        match c {
            ' '..='~' => table[c as usize - 32],
            _ => DEFAULT_WIDTH,
        }
    }
}

/// A face at a size, plus the underline flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub face: FontFace,
    /// Size in points.
    pub size: f32,
    pub underline: bool,
}

impl Font {
    pub fn regular(size: f32) -> Self {
        Self {
            face: FontFace::Regular,
            size,
            underline: false,
        }
    }

    pub fn bold(size: f32) -> Self {
        Self {
            face: FontFace::Bold,
            size,
            underline: false,
        }
    }

    pub fn italic(size: f32) -> Self {
        Self {
            face: FontFace::Italic,
            size,
            underline: false,
        }
    }

    pub fn underlined(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Width of `text` in points.
    pub fn string_width(&self, text: &str) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(self.face.char_width(c))).sum();
        units as f32 * self.size / 1000.0
    }
}

const DEFAULT_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // space - /
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // 0 - 9
    278, 278, 584, 584, 584, 556, 1015,                                             // : - @
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // A - M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // N - Z
    278, 278, 278, 469, 556, 333,                                                   // [ - `
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // a - m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // n - z
    334, 260, 334, 584,                                                             // { - ~
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Encode text for a WinAnsiEncoding font. Unmappable characters become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}
