//! Incremental progress bar rendering
//!
//! A bar occupies one page and `width` columns. Columns left of the fill
//! boundary hold [`BAR_FILLED`], the rest hold the hollow [`BAR_EMPTY`] outline
//! and the last column is always a filled end cap:
//!
//! ```text
//! start        target            max
//!   |############|----------------|#
//! ```
//!
//! The first draw of a bar paints every column. Every later draw only rewrites
//! the columns between the previous and the new boundary, so a gauge updated
//! many times per second costs a handful of bytes per frame.

use log::{debug, trace};

use crate::addressing::{AddressMode, check_window};
use crate::display::{Display, DisplayResult};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::{MAX_COLUMN, MAX_PAGE};

/// Column byte of the filled part of a bar (all eight rows lit)
pub const BAR_FILLED: u8 = 0xFF;
/// Column byte of the empty part of a bar (top and bottom border only)
pub const BAR_EMPTY: u8 = 0x81;

/// Screen region of one bar; bars are tracked independently per region
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BarRegion {
    /// Page the bar is drawn on
    pub page: u8,
    /// First column of the bar
    pub start_column: u8,
    /// Number of columns, end cap included
    pub width: u8,
}

impl BarRegion {
    /// Last column of the bar (the end cap)
    ///
    /// Saturates at 255 for regions reaching past the last address;
    /// [`Display::draw_bar`] rejects those before drawing.
    pub fn max_column(&self) -> u8 {
        self.start_column.saturating_add(self.width.saturating_sub(1))
    }

    /// Column the fill boundary lands on for `fill` (clamped to 1.0)
    ///
    /// The fractional part is truncated.
    pub fn target_column(&self, fill: f32) -> u8 {
        let span = f32::from(self.width.saturating_sub(1));
        // fill is in 0.0..=1.0, so the offset is in 0..=span
        self.start_column
            .saturating_add((fill.min(1.0) * span) as u8)
    }
}

/// Render history of one bar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BarState {
    /// Fill boundary reached by the previous draw, `None` before the first
    pub last_fill_column: Option<u8>,
}

/// Columns a bar draw has to rewrite
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarUpdate {
    /// Paint the whole bar
    Full {
        /// Fill boundary
        target: u8,
    },
    /// Fill columns `from..to`
    Grow {
        /// Previous boundary
        from: u8,
        /// New boundary
        to: u8,
    },
    /// Hollow out columns `to..from`
    Shrink {
        /// Previous boundary
        from: u8,
        /// New boundary
        to: u8,
    },
    /// Boundary did not move
    Unchanged,
}

impl BarUpdate {
    /// Plan the update from the previous boundary to `target`
    pub fn plan(previous: Option<u8>, target: u8) -> Self {
        match previous {
            None => BarUpdate::Full { target },
            Some(from) if from < target => BarUpdate::Grow { from, to: target },
            Some(from) if from > target => BarUpdate::Shrink { from, to: target },
            Some(_) => BarUpdate::Unchanged,
        }
    }
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Draw a progress bar at `page`, `width` columns from `start_column`
    ///
    /// `fill` above 1.0 is clamped. Only the columns between the previous
    /// and the new fill boundary are written; drawing the same boundary
    /// twice sends nothing.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidFillFraction`] for a negative or NaN `fill`
    /// - [`Error::InvalidWindow`] when the bar does not fit the panel or
    ///   `width` is zero
    ///
    /// Both are raised before anything is sent. On a bus error the bar
    /// history is not updated, so the next call repeats the same update.
    pub fn draw_bar(
        &mut self,
        page: u8,
        start_column: u8,
        width: u8,
        fill: f32,
    ) -> DisplayResult<I> {
        if fill.is_nan() || fill < 0.0 {
            return Err(Error::InvalidFillFraction(fill));
        }
        check_window::<I>(page, page, MAX_PAGE)?;
        let end = (u16::from(start_column) + u16::from(width)).saturating_sub(1);
        if width == 0 || end > u16::from(MAX_COLUMN) {
            return Err(Error::InvalidWindow {
                start: start_column.into(),
                end,
                limit: MAX_COLUMN,
            });
        }

        let region = BarRegion {
            page,
            start_column,
            width,
        };
        let target = region.target_column(fill);
        let previous = self.bar_state(region).last_fill_column;

        match BarUpdate::plan(previous, target) {
            BarUpdate::Unchanged => {
                trace!("bar {region:?} unchanged at column {target}");
                return Ok(());
            }
            BarUpdate::Full { target } => {
                debug!("bar {region:?} full draw, boundary {target}");
                self.select_bar_page(page)?;
                self.set_column_window(start_column, target)?;
                self.write_run(BAR_FILLED, target - start_column)?;
                let max = region.max_column();
                self.set_column_window(target, max)?;
                self.write_run(BAR_EMPTY, max - target)?;
                self.write_column(BAR_FILLED)?;
            }
            BarUpdate::Grow { from, to } => {
                trace!("bar {region:?} grow {from} -> {to}");
                self.select_bar_page(page)?;
                self.set_column_window(from, to)?;
                self.write_run(BAR_FILLED, to - from)?;
            }
            BarUpdate::Shrink { from, to } => {
                trace!("bar {region:?} shrink {from} -> {to}");
                self.select_bar_page(page)?;
                self.set_column_window(to, from)?;
                self.write_run(BAR_EMPTY, from - to)?;
            }
        }

        self.bars.insert(
            region,
            BarState {
                last_fill_column: Some(target),
            },
        );
        Ok(())
    }

    /// Render history of the bar at `region`
    pub fn bar_state(&self, region: BarRegion) -> BarState {
        self.bars.get(&region).copied().unwrap_or_default()
    }

    /// Forget one bar so its next draw is a full draw
    pub fn forget_bar(&mut self, page: u8, start_column: u8, width: u8) {
        self.bars.remove(&BarRegion {
            page,
            start_column,
            width,
        });
    }

    /// Forget every bar
    pub fn forget_bars(&mut self) {
        self.bars.clear();
    }

    fn select_bar_page(&mut self, page: u8) -> DisplayResult<I> {
        self.set_address_mode(AddressMode::Horizontal)?;
        self.set_page_window(page, page)
    }

    fn write_run(&mut self, byte: u8, count: u8) -> DisplayResult<I> {
        for _ in 0..count {
            self.write_column(byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::mock::{MockBusError, MockInterface};
    use alloc::vec;
    use alloc::vec::Vec;

    fn test_display() -> Display<MockInterface> {
        Display::new(MockInterface::new(), Builder::new().build().unwrap()).unwrap()
    }

    /// Column windows sent, in order
    fn column_windows(commands: &[u8]) -> Vec<(u8, u8)> {
        commands
            .windows(3)
            .filter(|w| w[0] == 0x21)
            .map(|w| (w[1], w[2]))
            .collect()
    }

    const REGION: BarRegion = BarRegion {
        page: 4,
        start_column: 0,
        width: 100,
    };

    #[test]
    fn test_target_column_truncates() {
        assert_eq!(REGION.target_column(0.0), 0);
        assert_eq!(REGION.target_column(0.2), 19);
        assert_eq!(REGION.target_column(0.5), 49);
        assert_eq!(REGION.target_column(0.3), 29);
        assert_eq!(REGION.target_column(1.0), 99);
        assert_eq!(REGION.target_column(1.7), 99);
        assert_eq!(REGION.max_column(), 99);
    }

    #[test]
    fn test_region_past_last_column_saturates() {
        let region = BarRegion {
            page: 0,
            start_column: 200,
            width: 100,
        };
        assert_eq!(region.max_column(), 255);
        assert_eq!(region.target_column(1.0), 255);
        assert_eq!(region.target_column(0.0), 200);
    }

    #[test]
    fn test_plan() {
        assert_eq!(BarUpdate::plan(None, 3), BarUpdate::Full { target: 3 });
        assert_eq!(
            BarUpdate::plan(Some(1), 3),
            BarUpdate::Grow { from: 1, to: 3 }
        );
        assert_eq!(
            BarUpdate::plan(Some(3), 1),
            BarUpdate::Shrink { from: 3, to: 1 }
        );
        assert_eq!(BarUpdate::plan(Some(3), 3), BarUpdate::Unchanged);
    }

    #[test]
    fn test_first_draw_paints_whole_bar() {
        let mut display = test_display();
        display.draw_bar(4, 0, 100, 0.2).unwrap();

        let commands = display.interface.commands();
        assert_eq!(&commands[..5], &[0x20, 0x00, 0x22, 4, 4]);
        assert_eq!(column_windows(&commands), vec![(0, 19), (19, 99)]);

        let mut expected = vec![BAR_FILLED; 19];
        expected.extend(vec![BAR_EMPTY; 80]);
        expected.push(BAR_FILLED);
        assert_eq!(display.interface.data(), expected);
        assert_eq!(display.bar_state(REGION).last_fill_column, Some(19));
    }

    #[test]
    fn test_growth_touches_only_delta() {
        let mut display = test_display();
        display.draw_bar(4, 0, 100, 0.2).unwrap();
        display.interface.clear();

        display.draw_bar(4, 0, 100, 0.5).unwrap();
        // Mode and page unchanged, so only the column window goes out
        assert_eq!(display.interface.commands(), vec![0x21, 19, 49]);
        assert_eq!(display.interface.data(), vec![BAR_FILLED; 30]);
        assert_eq!(display.bar_state(REGION).last_fill_column, Some(49));
    }

    #[test]
    fn test_shrink_hollows_vacated_span() {
        let mut display = test_display();
        display.draw_bar(4, 0, 100, 0.2).unwrap();
        display.draw_bar(4, 0, 100, 0.5).unwrap();
        display.interface.clear();

        display.draw_bar(4, 0, 100, 0.3).unwrap();
        assert_eq!(display.interface.commands(), vec![0x21, 29, 49]);
        assert_eq!(display.interface.data(), vec![BAR_EMPTY; 20]);
        assert_eq!(display.bar_state(REGION).last_fill_column, Some(29));
    }

    #[test]
    fn test_same_fill_is_a_no_op() {
        let mut display = test_display();
        display.draw_bar(4, 0, 100, 0.42).unwrap();
        display.interface.clear();
        display.draw_bar(4, 0, 100, 0.42).unwrap();
        assert!(display.interface.writes.is_empty());
    }

    #[test]
    fn test_fill_above_one_is_clamped() {
        let mut clamped = test_display();
        clamped.draw_bar(1, 10, 50, 1.7).unwrap();
        let mut full = test_display();
        full.draw_bar(1, 10, 50, 1.0).unwrap();
        assert_eq!(clamped.interface.writes, full.interface.writes);

        // And a clamped update after a full bar is a no-op
        clamped.interface.clear();
        clamped.draw_bar(1, 10, 50, 1.0).unwrap();
        assert!(clamped.interface.writes.is_empty());
    }

    #[test]
    fn test_negative_and_nan_fill_rejected() {
        let mut display = test_display();
        assert!(matches!(
            display.draw_bar(0, 0, 10, -0.1),
            Err(Error::InvalidFillFraction(f)) if f == -0.1
        ));
        assert!(matches!(
            display.draw_bar(0, 0, 10, f32::NAN),
            Err(Error::InvalidFillFraction(_))
        ));
        assert!(display.interface.writes.is_empty());
        assert_eq!(display.bar_state(REGION), BarState::default());
    }

    #[test]
    fn test_bar_must_fit_panel() {
        let mut display = test_display();
        assert!(matches!(
            display.draw_bar(0, 100, 30, 0.5),
            Err(Error::InvalidWindow {
                start: 100,
                end: 129,
                limit: 127
            })
        ));
        assert!(matches!(
            display.draw_bar(0, 10, 0, 0.5),
            Err(Error::InvalidWindow { .. })
        ));
        assert!(matches!(
            display.draw_bar(8, 0, 10, 0.5),
            Err(Error::InvalidWindow { limit: 7, .. })
        ));
        assert!(display.interface.writes.is_empty());

        // Exactly up to the last column is fine
        display.draw_bar(0, 100, 28, 1.0).unwrap();
    }

    #[test]
    fn test_single_column_bar_is_its_end_cap() {
        let mut display = test_display();
        display.draw_bar(0, 127, 1, 0.5).unwrap();
        assert_eq!(display.interface.data(), vec![BAR_FILLED]);
    }

    #[test]
    fn test_bars_are_tracked_per_region() {
        let mut display = test_display();
        display.draw_bar(2, 0, 50, 0.5).unwrap();
        display.draw_bar(3, 0, 50, 0.5).unwrap();
        display.interface.clear();

        // Second bar grows; page must be re-selected, first bar untouched
        display.draw_bar(3, 0, 50, 1.0).unwrap();
        assert_eq!(display.interface.commands(), vec![0x21, 24, 49]);
        display.interface.clear();
        display.draw_bar(2, 0, 50, 1.0).unwrap();
        assert_eq!(display.interface.commands(), vec![0x22, 2, 2, 0x21, 24, 49]);
    }

    #[test]
    fn test_delta_reselects_page_after_text() {
        let mut display = test_display();
        display.draw_bar(5, 0, 40, 0.25).unwrap();
        display.draw_text(0, "a", 0, 10, 6).unwrap();
        display.interface.clear();

        display.draw_bar(5, 0, 40, 0.5).unwrap();
        assert_eq!(display.interface.commands(), vec![0x22, 5, 5, 0x21, 9, 19]);
    }

    #[test]
    fn test_forget_bar_forces_full_draw() {
        let mut display = test_display();
        display.draw_bar(4, 0, 100, 0.5).unwrap();
        display.forget_bar(4, 0, 100);
        display.interface.clear();
        display.draw_bar(4, 0, 100, 0.5).unwrap();
        assert_eq!(display.interface.data().len(), 100);
    }

    #[test]
    fn test_clear_screen_forgets_bars() {
        let mut display = test_display();
        display.draw_bar(4, 0, 100, 0.5).unwrap();
        display.clear_screen().unwrap();
        assert_eq!(display.bar_state(REGION), BarState::default());
    }

    #[test]
    fn test_interrupted_clear_forgets_bars() {
        let mut display = test_display();
        display.draw_bar(4, 0, 100, 0.5).unwrap();
        // Fails after half the panel has been blanked
        display.interface.fail_after = Some(display.interface.writes.len() + 400);
        assert!(matches!(
            display.clear_screen(),
            Err(Error::Interface(MockBusError))
        ));
        assert_eq!(display.bar_state(REGION), BarState::default());

        display.interface.fail_after = None;
        display.interface.clear();
        display.draw_bar(4, 0, 100, 0.6).unwrap();
        assert_eq!(display.interface.data().len(), 100);
    }

    #[test]
    fn test_delta_reselects_page_after_interrupted_text() {
        let mut display = test_display();
        display.draw_bar(2, 0, 40, 0.25).unwrap();

        // Bus drops after `0x22, 4` of the text's page window
        display.interface.fail_after = Some(display.interface.writes.len() + 2);
        assert!(display.draw_text(4, "a", 0, 10, 6).is_err());

        display.interface.fail_after = None;
        display.interface.clear();
        display.draw_bar(2, 0, 40, 0.5).unwrap();
        assert_eq!(display.interface.commands(), vec![0x22, 2, 2, 0x21, 9, 19]);
    }

    #[test]
    fn test_bus_error_keeps_previous_history() {
        let mut display = test_display();
        display.draw_bar(4, 0, 100, 0.2).unwrap();
        let sent = display.interface.writes.len();
        display.interface.fail_after = Some(sent + 4);

        let result = display.draw_bar(4, 0, 100, 0.5);
        assert!(matches!(result, Err(Error::Interface(MockBusError))));
        assert_eq!(display.bar_state(REGION).last_fill_column, Some(19));

        display.interface.fail_after = None;
        display.interface.clear();
        display.draw_bar(4, 0, 100, 0.5).unwrap();
        assert_eq!(display.interface.data(), vec![BAR_FILLED; 30]);
    }
}
