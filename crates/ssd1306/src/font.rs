//! Bitmap font compiler
//!
//! Converts pseudo-pixel glyph art ([`GlyphSource`]) into the column bytes the
//! controller expects: one byte per pixel column, bit *n* lit when row *n* of
//! the cell is lit (bit 0 = top row). Cells taller than eight rows span two
//! pages and produce two bytes per column, top page first, which is the order
//! vertical addressing consumes them in.
//!
//! Compilation runs once at startup; [`FontTable`] keeps the result for the
//! lifetime of the driver.

use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;

use log::debug;

use crate::error::FontError;
use crate::fonts::FONT_4X6;
use crate::text::SINGLE_PAGE_HEIGHT;

/// Font height the built-in font is registered under
pub const DEFAULT_FONT_HEIGHT: u8 = 6;

/// Tallest cell the compiler accepts (two pages)
pub const MAX_CELL_HEIGHT: u8 = 16;

/// Declarative glyph art
///
/// `data` is the whole bitmap as row-major `'0'`/`'1'` flags. The bitmap is cut
/// into `char_size` cells; `chars[row][col]` names the character drawn in the
/// cell at that row/column block. The last pixel column of every cell is
/// spacing and is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphSource<'a> {
    /// Cell size (width, height) in pixels, spacing column included
    pub char_size: (u8, u8),
    /// Bitmap size (width, height) in pixels
    pub data_size: (u16, u16),
    /// Alphabet, one string per row of cells
    pub chars: &'a [&'a str],
    /// Pixel flags
    pub data: &'a str,
}

/// Compiled glyphs for one font
pub type Glyphs = BTreeMap<char, Vec<u8>>;

/// Compile glyph art into per-character column bytes
///
/// A character may appear in more than one cell only if every later cell is
/// blank; the first cell defines the glyph. Cells one pixel wide compile to an
/// empty byte sequence.
///
/// # Errors
///
/// Returns a [`FontError`] if the grid, the pixel data or the alphabet are
/// inconsistent.
pub fn compile(source: &GlyphSource<'_>) -> Result<Glyphs, FontError> {
    let (cw, ch) = (source.char_size.0 as usize, source.char_size.1 as usize);
    let (dw, dh) = (source.data_size.0 as usize, source.data_size.1 as usize);

    if cw == 0 || ch == 0 || dw == 0 || dh == 0 || dw % cw != 0 || dh % ch != 0 {
        return Err(FontError::UnevenGrid {
            char_size: source.char_size,
            data_size: source.data_size,
        });
    }
    if source.char_size.1 > MAX_CELL_HEIGHT {
        return Err(FontError::CellTooTall(source.char_size.1));
    }

    let provided = source.data.chars().count();
    if provided != dw * dh {
        return Err(FontError::DataLength {
            expected: dw * dh,
            provided,
        });
    }

    let block_cols = dw / cw;
    let cells = alphabet_cells(source.chars, dh / ch, block_cols)?;

    // First cell declaring a character owns its glyph
    let mut owners: BTreeMap<char, usize> = BTreeMap::new();
    for (block, &c) in cells.iter().enumerate() {
        owners.entry(c).or_insert(block);
    }

    let pages = ch.div_ceil(8);
    let mut glyphs: Glyphs = owners
        .keys()
        .map(|&c| (c, vec![0u8; (cw - 1) * pages]))
        .collect();

    for (index, flag) in source.data.chars().enumerate() {
        let lit = match flag {
            '0' => false,
            '1' => true,
            found => return Err(FontError::InvalidPixel { index, found }),
        };

        let (row, col) = (index / dw, index % dw);
        let local_col = col % cw;
        if !lit || local_col == cw - 1 {
            continue;
        }

        let block = (row / ch) * block_cols + col / cw;
        let c = cells[block];
        if owners.get(&c) != Some(&block) {
            return Err(FontError::DuplicateCharacter(c));
        }

        let local_row = row % ch;
        if let Some(bytes) = glyphs.get_mut(&c) {
            bytes[local_col * pages + local_row / 8] |= 1 << (local_row % 8);
        }
    }

    Ok(glyphs)
}

/// Resolve the character of every cell, row-major
fn alphabet_cells(chars: &[&str], rows: usize, cols: usize) -> Result<Vec<char>, FontError> {
    let mut cells = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let mut line = chars.get(row).map(|s| s.chars());
        for col in 0..cols {
            let c = line
                .as_mut()
                .and_then(|chars| chars.next())
                .ok_or(FontError::MissingCell { row, col })?;
            cells.push(c);
        }
    }
    Ok(cells)
}

/// Compiled fonts keyed by font height
///
/// ## Example
///
/// ```
/// use ssd1306::FontTable;
///
/// let fonts = FontTable::builtin().expect("built-in art compiles");
/// assert_eq!(fonts.glyph(6, 'A'), Some(&[124, 18, 18, 124][..]));
/// assert_eq!(fonts.glyph(6, '~'), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontTable {
    fonts: BTreeMap<u8, Glyphs>,
}

impl FontTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding [`FONT_4X6`] at [`DEFAULT_FONT_HEIGHT`]
    ///
    /// # Errors
    ///
    /// Returns a [`FontError`] if the built-in art is malformed.
    pub fn builtin() -> Result<Self, FontError> {
        let mut table = Self::new();
        table.insert_source(DEFAULT_FONT_HEIGHT, &FONT_4X6)?;
        Ok(table)
    }

    /// Compile `source` and register it under `height`, replacing any font
    /// already registered there
    ///
    /// # Errors
    ///
    /// Returns a [`FontError`] if the art is malformed, or if `height` and
    /// the cell height disagree on whether the font spans two pages. The
    /// table is left unchanged.
    pub fn insert_source(&mut self, height: u8, source: &GlyphSource<'_>) -> Result<(), FontError> {
        let cell_height = source.char_size.1;
        if (height > SINGLE_PAGE_HEIGHT) != (cell_height > SINGLE_PAGE_HEIGHT) {
            return Err(FontError::HeightMismatch {
                height,
                cell_height,
            });
        }
        let glyphs = compile(source)?;
        debug!("compiled {} glyphs for font height {height}", glyphs.len());
        self.insert(height, glyphs);
        Ok(())
    }

    /// Register already compiled glyphs under `height`
    ///
    /// Not checked: glyphs for `height` above eight rows must hold two bytes
    /// per column.
    pub fn insert(&mut self, height: u8, glyphs: Glyphs) {
        self.fonts.insert(height, glyphs);
    }

    /// Column bytes of `c` at `height`
    pub fn glyph(&self, height: u8, c: char) -> Option<&[u8]> {
        self.fonts.get(&height)?.get(&c).map(Vec::as_slice)
    }

    /// Whether a font is registered under `height`
    pub fn has_height(&self, height: u8) -> bool {
        self.fonts.contains_key(&height)
    }

    /// Registered font heights, ascending
    pub fn heights(&self) -> impl Iterator<Item = u8> + '_ {
        self.fonts.keys().copied()
    }
}
