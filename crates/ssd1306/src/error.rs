//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! font compilation ([`FontError`]) and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Invalid values passed to the configuration builder
//! - [`FontError`] - Malformed glyph source art, raised at startup only
//! - [`Error`] - Runtime errors during display operations, including bus errors
//!
//! ## Example
//!
//! ```
//! use ssd1306::{Builder, BuilderError};
//!
//! let result = Builder::new().contrast(0xFF).build();
//! assert!(matches!(result, Err(BuilderError::ContrastOutOfRange(0xFF))));
//! ```

use crate::icon::Icon;
use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific bus error type.
/// Nothing is retried or rolled back: columns written before the failing
/// transfer stay on the panel.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (bus transfer failed)
    ///
    /// Wraps the underlying error from the [`DisplayInterface`] implementation
    /// unchanged.
    Interface(I::Error),
    /// The built-in or supplied font art could not be compiled
    Font(FontError),
    /// A character has no glyph at the requested font height
    ///
    /// Raised after the addressing window for the call was set and after the
    /// preceding characters were written.
    GlyphNotFound {
        /// Character that could not be drawn
        character: char,
        /// Requested font height
        height: u8,
    },
    /// An icon has no bitmap at the requested height
    IconNotFound {
        /// Requested icon
        icon: Icon,
        /// Requested height
        height: u8,
    },
    /// Fill fraction is negative or NaN
    InvalidFillFraction(f32),
    /// Addressing window does not fit the controller
    ///
    /// Columns run 0..=127 and pages 0..=7, and `start` must not exceed `end`.
    InvalidWindow {
        /// Requested first column/page
        start: u16,
        /// Requested last column/page
        end: u16,
        /// Highest addressable column/page
        limit: u8,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "Interface error: {e:?}"),
            Error::Font(e) => write!(f, "Font error: {e}"),
            Error::GlyphNotFound { character, height } => {
                write!(f, "No glyph for {character:?} at height {height}")
            }
            Error::IconNotFound { icon, height } => {
                write!(f, "No bitmap for icon {icon:?} at height {height}")
            }
            Error::InvalidFillFraction(fill) => {
                write!(f, "Invalid fill fraction {fill} (must be >= 0.0)")
            }
            Error::InvalidWindow { start, end, limit } => {
                write!(f, "Invalid window {start}..={end} (limit {limit})")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

impl<I: DisplayInterface> From<FontError> for Error<I> {
    fn from(e: FontError) -> Self {
        Error::Font(e)
    }
}

/// Errors raised while compiling a [`GlyphSource`](crate::font::GlyphSource)
///
/// Produced while building a [`FontTable`](crate::font::FontTable), either
/// during driver construction or when registering another font height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    /// Pixel data length does not match the declared grid
    DataLength {
        /// `data_size.width * data_size.height`
        expected: usize,
        /// Number of pixel flags supplied
        provided: usize,
    },
    /// Character cells do not evenly tile the bitmap, or a size is zero
    UnevenGrid {
        /// Character cell size (width, height)
        char_size: (u8, u8),
        /// Bitmap size (width, height)
        data_size: (u16, u16),
    },
    /// Character cell is taller than two pages
    CellTooTall(u8),
    /// Pixel flag other than `'0'` or `'1'`
    InvalidPixel {
        /// Index into the flat data string
        index: usize,
        /// Offending character
        found: char,
    },
    /// No alphabet entry for a cell of the bitmap
    MissingCell {
        /// Row block (alphabet row)
        row: usize,
        /// Column block (position in the alphabet row)
        col: usize,
    },
    /// A character is declared again in a cell that is not blank padding
    DuplicateCharacter(char),
    /// Font height key and cell height disagree on the number of pages
    HeightMismatch {
        /// Height the font is registered under
        height: u8,
        /// Cell height of the glyph art
        cell_height: u8,
    },
}

impl core::fmt::Display for FontError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FontError::DataLength { expected, provided } => write!(
                f,
                "Pixel data length mismatch: expected {expected}, provided {provided}"
            ),
            FontError::UnevenGrid {
                char_size,
                data_size,
            } => write!(
                f,
                "Cells {}x{} do not tile bitmap {}x{}",
                char_size.0, char_size.1, data_size.0, data_size.1
            ),
            FontError::CellTooTall(h) => write!(f, "Cell height {h} exceeds 16 rows"),
            FontError::InvalidPixel { index, found } => {
                write!(f, "Invalid pixel flag {found:?} at index {index}")
            }
            FontError::MissingCell { row, col } => {
                write!(f, "No character declared for cell ({row}, {col})")
            }
            FontError::DuplicateCharacter(c) => {
                write!(f, "Character {c:?} declared in more than one non-blank cell")
            }
            FontError::HeightMismatch {
                height,
                cell_height,
            } => write!(
                f,
                "Font height {height} and cell height {cell_height} span different page counts"
            ),
        }
    }
}

impl core::error::Error for FontError {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// Contrast above the 0..=127 range used by this driver
    ContrastOutOfRange(u8),
    /// Multiplex ratio outside 15..=63
    MultiplexRatioOutOfRange(u8),
    /// Display offset above 63
    DisplayOffsetOutOfRange(u8),
    /// Start line above 63
    StartLineOutOfRange(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuilderError::ContrastOutOfRange(v) => {
                write!(f, "Contrast {v} out of range (max 127)")
            }
            BuilderError::MultiplexRatioOutOfRange(v) => {
                write!(f, "Multiplex ratio {v} out of range (15..=63)")
            }
            BuilderError::DisplayOffsetOutOfRange(v) => {
                write!(f, "Display offset {v} out of range (max 63)")
            }
            BuilderError::StartLineOutOfRange(v) => {
                write!(f, "Start line {v} out of range (max 63)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
