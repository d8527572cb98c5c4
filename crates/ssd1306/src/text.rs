//! Text and icon rendering
//!
//! Text is written straight into controller RAM: the renderer sets the
//! addressing window once and streams glyph columns, letting the controller
//! advance its cursor. A one-column gap follows every glyph.

use crate::addressing::{AddressMode, check_window};
use crate::display::{Display, DisplayResult, send_data};
use crate::error::Error;
use crate::icon::{ICON_WIDTH, Icon};
use crate::interface::DisplayInterface;
use crate::{MAX_COLUMN, MAX_PAGE};

/// Font heights above this span two pages and use vertical addressing
pub const SINGLE_PAGE_HEIGHT: u8 = 8;

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Draw `text` at `page`, inside columns `start_column..=start_column + width`
    ///
    /// Fonts taller than [`SINGLE_PAGE_HEIGHT`] span `page` and `page + 1` and
    /// are written in vertical addressing mode; their glyphs must hold two
    /// bytes per column.
    ///
    /// Text wider than the window wraps inside it (controller behavior).
    ///
    /// # Errors
    ///
    /// [`Error::GlyphNotFound`] when a character has no glyph at
    /// `font_height`. The window is already set and preceding characters are
    /// already on the panel at that point; nothing of the missing character
    /// is written.
    pub fn draw_text(
        &mut self,
        page: u8,
        text: &str,
        start_column: u8,
        width: u8,
        font_height: u8,
    ) -> DisplayResult<I> {
        let pages: u8 = if font_height > SINGLE_PAGE_HEIGHT { 2 } else { 1 };
        let mode = if pages == 2 {
            AddressMode::Vertical
        } else {
            AddressMode::Horizontal
        };
        let end_page = window_end::<I>(page, pages - 1, MAX_PAGE)?;
        let end_column = window_end::<I>(start_column, width, MAX_COLUMN)?;

        self.set_address_mode(mode)?;
        self.set_page_window(page, end_page)?;
        self.set_column_window(start_column, end_column)?;

        let Self {
            interface, fonts, ..
        } = self;
        for character in text.chars() {
            let glyph = fonts
                .glyph(font_height, character)
                .ok_or(Error::GlyphNotFound {
                    character,
                    height: font_height,
                })?;
            for &byte in glyph {
                send_data(interface, byte)?;
            }
            for _ in 0..pages {
                send_data(interface, 0x00)?;
            }
        }
        Ok(())
    }

    /// Draw a built-in icon at `page`, inside columns
    /// `start_column..=start_column + 8`
    ///
    /// # Errors
    ///
    /// [`Error::IconNotFound`] when the icon has no bitmap at `height`; nothing
    /// is sent in that case.
    pub fn draw_icon(
        &mut self,
        page: u8,
        icon: Icon,
        start_column: u8,
        height: u8,
    ) -> DisplayResult<I> {
        let bitmap = icon
            .bitmap(height)
            .ok_or(Error::IconNotFound { icon, height })?;
        check_window::<I>(page, page, MAX_PAGE)?;
        let end_column = window_end::<I>(start_column, ICON_WIDTH, MAX_COLUMN)?;

        self.set_address_mode(AddressMode::Horizontal)?;
        self.set_page_window(page, page)?;
        self.set_column_window(start_column, end_column)?;
        for &byte in bitmap {
            self.write_column(byte)?;
        }
        Ok(())
    }
}

/// `start + span`, validated against `limit`
fn window_end<I: DisplayInterface>(start: u8, span: u8, limit: u8) -> Result<u8, Error<I>> {
    let end = u16::from(start) + u16::from(span);
    if end > u16::from(limit) {
        return Err(Error::InvalidWindow {
            start: start.into(),
            end,
            limit,
        });
    }
    // end <= limit, so it fits
    Ok(end as u8)
}
