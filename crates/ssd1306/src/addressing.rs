//! Controller addressing state machine
//!
//! Tracks the addressing mode and the column/page windows last sent to the
//! controller so redundant window-set commands can be skipped.
//!
//! Caching is asymmetric:
//!
//! - the addressing mode and the page window are only re-sent when they change,
//! - the column window is re-sent on every call.
//!
//! Once a window is set, the controller advances its own cursor after every
//! data byte and wraps silently inside the window. Writing more columns than
//! the window spans overwrites its beginning; the driver does not guard
//! against this.

use log::{debug, trace};

use crate::command::{
    CONTROL_COMMAND, MODE_HORIZONTAL, MODE_PAGE, MODE_VERTICAL, SET_ADDRESSING_MODE,
    SET_COLUMN_ADDRESS, SET_PAGE_ADDRESS,
};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::{MAX_COLUMN, MAX_PAGE};

/// Memory addressing mode of the controller
///
/// Controls how the internal cursor advances after each column write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AddressMode {
    /// Advance along the column window, then to the next page
    Horizontal = MODE_HORIZONTAL,
    /// Advance down the page window, then to the next column
    Vertical = MODE_VERTICAL,
    /// Advance along the column window and wrap within the same page
    Page = MODE_PAGE,
}

/// Addressing state shadowed from the controller
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressingState {
    address_mode: Option<AddressMode>,
    column_window: (u8, u8),
    page_window: (u8, u8),
    last_page_window: Option<(u8, u8)>,
}

impl Default for AddressingState {
    fn default() -> Self {
        Self {
            address_mode: None,
            column_window: (0, MAX_COLUMN),
            page_window: (0, MAX_PAGE),
            last_page_window: None,
        }
    }
}

impl AddressingState {
    /// Controller defaults, nothing sent yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Last addressing mode sent, if any
    pub fn address_mode(&self) -> Option<AddressMode> {
        self.address_mode
    }

    /// Active column window (inclusive)
    pub fn column_window(&self) -> (u8, u8) {
        self.column_window
    }

    /// Active page window (inclusive)
    pub fn page_window(&self) -> (u8, u8) {
        self.page_window
    }

    /// Forget everything that was sent so the next calls re-emit
    pub fn invalidate(&mut self) {
        self.address_mode = None;
        self.last_page_window = None;
    }

    /// Select the addressing mode, skipped when unchanged
    pub fn set_address_mode<I: DisplayInterface>(
        &mut self,
        interface: &mut I,
        mode: AddressMode,
    ) -> Result<(), Error<I>> {
        if self.address_mode == Some(mode) {
            trace!("address mode {mode:?} unchanged, skipped");
            return Ok(());
        }
        debug!("address mode -> {mode:?}");
        // Unknown until both bytes are on the bus
        self.address_mode = None;
        send(interface, SET_ADDRESSING_MODE)?;
        send(interface, mode as u8)?;
        self.address_mode = Some(mode);
        Ok(())
    }

    /// Set the column window; always sent
    pub fn set_column_window<I: DisplayInterface>(
        &mut self,
        interface: &mut I,
        start: u8,
        end: u8,
    ) -> Result<(), Error<I>> {
        check_window::<I>(start, end, MAX_COLUMN)?;
        trace!("column window -> {start}..={end}");
        send(interface, SET_COLUMN_ADDRESS)?;
        send(interface, start)?;
        send(interface, end)?;
        self.column_window = (start, end);
        Ok(())
    }

    /// Set the page window, skipped when equal to the last one sent
    pub fn set_page_window<I: DisplayInterface>(
        &mut self,
        interface: &mut I,
        start: u8,
        end: u8,
    ) -> Result<(), Error<I>> {
        check_window::<I>(start, end, MAX_PAGE)?;
        if self.last_page_window == Some((start, end)) {
            trace!("page window {start}..={end} unchanged, skipped");
            return Ok(());
        }
        debug!("page window -> {start}..={end}");
        self.last_page_window = None;
        send(interface, SET_PAGE_ADDRESS)?;
        send(interface, start)?;
        send(interface, end)?;
        self.page_window = (start, end);
        self.last_page_window = Some((start, end));
        Ok(())
    }
}

pub(crate) fn check_window<I: DisplayInterface>(
    start: u8,
    end: u8,
    limit: u8,
) -> Result<(), Error<I>> {
    if start > end || end > limit {
        return Err(Error::InvalidWindow {
            start: start.into(),
            end: end.into(),
            limit,
        });
    }
    Ok(())
}

fn send<I: DisplayInterface>(interface: &mut I, byte: u8) -> Result<(), Error<I>> {
    interface
        .send(CONTROL_COMMAND, byte)
        .map_err(Error::Interface)
}
