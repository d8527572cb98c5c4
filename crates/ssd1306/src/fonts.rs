//! Built-in glyph art
//!
//! Each font is a bitmap of `'0'`/`'1'` pixel flags, one string literal per
//! bitmap row. Cells are laid out in the order of the `chars` rows; the last
//! column of every cell is spacing and never reaches the panel.

use crate::font::GlyphSource;

/// Characters covered by the built-in fonts, one string per row of cells
///
/// The trailing spaces pad the last row to the full bitmap width.
pub const BUILTIN_CHARS: &[&str] = &[
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789.:,;(*!?')/-    ",
];

/// 4x6 font in 5x8 cells, the default at font height 6
pub const FONT_4X6: GlyphSource<'static> = GlyphSource {
    char_size: (5, 8),
    data_size: (130, 24),
    chars: BUILTIN_CHARS,
    data: concat!(
        "0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
        "0000010000000000001000000001000000010000001000001010000011000000000000000000000000000000000000001000000000000000000000000000000000",
        "0000010000000000001000000010100000010000000000000010000001000000000000000000000000000000000000001000000000000000000000000000000000",
        "0111011100011000111001100010000111011100011000001010100001001010011100011001110001110111000111011100100100101010010100101001011110",
        "1001010010100001001010110111001001010010001000001011000001001111010010100101001010010100101100001000100100101010010011001001000100",
        "1011010010100001001011000010000110010010001000001010100001001001010010100101001010010100000011001000100100101011110011000101001000",
        "0101011100011000111001100010001000010010011100101010010011101001010010011001110001110100001110000110011100010011110100100010011110",
        "0000000000000000000000000000000111000000000000010000000000000000000000000001000000010000000000000000000000000000000000000100000000",
        "0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
        "0110011100011001110011110111100110010010011100001010010100001001010010011001110001100111000110001110100101001010010100100101011110",
        "1001010010100101001010000100001001010010001000001010100100001111011010100101001010010100101001000100100101001010010100100101000010",
        "1001011100100001001011100111001000011110001000001011000100001111011010100101001010010100100100000100100101001010010011000101000100",
        "1111010010100001001010000100001011010010001000001011000100001001010110100101110010010111000010000100100101001011110011000010001000",
        "1001010010100101001010000100001001010010001001001010100100001001010110100101000011010101001001000100100100110011110100100010010000",
        "1001011100011001110011110100000111010010011100110010010111101001010010011001000001100100100110000100011000110010010100100010011110",
        "0000000000000000000000000000000000000000000000000000000000000000000000000000000000010000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
        "0010000100011001111000100111100110011110011000110000000000000000000000001000000000100001000010001000001000000000000000000000000000",
        "0101001100100100001001100100001000000010100101001000000011000000001100010000101000100010100010000100001000000000000000000000000000",
        "0101000100000100110010100111001110000100011001001000000011000000001100010000010000100000100010000100010000000000000000000000000000",
        "0101000100001000001011110000101001000100100100111000000000000000000000010000111000100001000000000100010001110000000000000000000000",
        "0101000100010001001000100100101001001000100100001001100011000011001100010000010000000000000000000100100000000000000000000000000000",
        "0010001110111100110000100011000110001000011000110001100011000010001000001000101000100001000000001000100000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000100010000000000000000000000000000000000000000000000000000000000000000",
    ),
};

/// Narrow 3x6 font in 4x8 cells
pub const FONT_3X6: GlyphSource<'static> = GlyphSource {
    char_size: (4, 8),
    data_size: (104, 24),
    chars: BUILTIN_CHARS,
    data: concat!(
        "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
        "00001000000000100000001000001000010000101000110000000000000000000000000000000100000000000000000000000000",
        "01101100011001100100010001101100000000001010010010101100010011000110101001101110101010101010101010101110",
        "10101010100010101010111010101010110000101100010011101010101010101010110011000100101010101010010010100010",
        "10101010100010101100010001101010010000101010010010101010101011001010100000100100101010101110010001100100",
        "01101100011001100110010000101010111000101010111010101010010010000110100011000010011001001010101000101110",
        "00000000000000000000000011000000000011000000000000000000000010000010000000000000000000000000000011000000",
        "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
        "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
        "01001100010011001110111001101010111000101010100010100010010011000100110001101110101010101010101010101110",
        "10101010101010101000100010001010010000101010100011101010101010101010101010000100101010101010101010100010",
        "11101100100010101100110010101110010000101100100011101110101011001010110001000100101010101110010001000100",
        "10101010101010101000100010101010010010101010100010101010101010001010101000100100101011101110101001001000",
        "10101100010011001110100001101010111001001010111010101000010010000100101011000100111001001010101001001110",
        "00000000000000000000000000000000000000000000000000000000000000000010000000000000000000000000000000000000",
        "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
        "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
        "01000100010011101010111001101110011001000000000000000000001010100100110001001000001000000000000000000000",
        "10101100101000101010100010000010101010100000010000000100010001000100001001000100001000000000000000000000",
        "11100100001001001110110011000100010001100000000000000000010011100100010000000100010000000000000000000000",
        "10100100010000100010001010101000101000100000000000000000010001000000000000000100010011100000000000000000",
        "01001110111011000010110001001000110011000100010001000100010010100100010000000100100000000000000000000000",
        "00000000000000000000000000000000000000000000000010001000001000000000000000001000100000000000000000000000",
        "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    ),
};
