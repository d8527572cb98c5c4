//! Pixel-level checks of the driver against the emulated controller

use proptest::prelude::*;
use ssd1306::{BAR_EMPTY, BAR_FILLED, Builder, Display, FontTable, GlyphSource, Icon};
use ssd1306_sim::Emulator;

fn powered() -> Display<Emulator> {
    let mut display = Display::new(Emulator::new(), Builder::new().build().unwrap()).unwrap();
    display.initialize_defaults().unwrap();
    display.set_power(true).unwrap();
    display
}

#[test]
fn test_text_lands_on_requested_page_and_column() {
    let mut display = powered();
    display.draw_text(2, "A", 20, 10, 6).unwrap();

    let page = display.interface().page_bytes(2);
    assert_eq!(&page[20..25], &[124, 18, 18, 124, 0]);
    assert!(page[..20].iter().all(|&b| b == 0));
    // Row 1 of 'A' is lit in its two middle columns only
    assert!(!display.interface().lit(20, 16 + 1));
    assert!(display.interface().lit(21, 16 + 1));
    assert!(display.interface().lit(22, 16 + 1));
    assert!(!display.interface().lit(23, 16 + 1));
}

#[test]
fn test_icon_and_text_share_a_page() {
    let mut display = powered();
    display.draw_icon(0, Icon::Speed, 0, 6).unwrap();
    display.draw_text(0, "1", 10, 10, 6).unwrap();

    let page = display.interface().page_bytes(0);
    assert_eq!(&page[..7], Icon::Speed.bitmap(6).unwrap());
    assert_eq!(&page[10..14], &[0, 68, 126, 64]);
}

#[test]
fn test_tall_font_spans_two_pages() {
    let mut data = String::new();
    for row in 0..10 {
        data.push_str(if row == 0 || row == 9 { "10" } else { "00" });
    }
    let mut fonts = FontTable::new();
    fonts
        .insert_source(
            10,
            &GlyphSource {
                char_size: (2, 10),
                data_size: (2, 10),
                chars: &["I"],
                data: &data,
            },
        )
        .unwrap();
    let mut display =
        Display::with_fonts(Emulator::new(), Builder::new().build().unwrap(), fonts);
    display.draw_text(3, "II", 0, 4, 10).unwrap();

    let emulator = display.interface();
    assert_eq!(&emulator.page_bytes(3)[..4], &[0x01, 0x00, 0x01, 0x00]);
    assert_eq!(&emulator.page_bytes(4)[..4], &[0x02, 0x00, 0x02, 0x00]);
    // Rows 24 and 33
    assert!(emulator.pixel(0, 24));
    assert!(emulator.pixel(0, 33));
}

#[test]
fn test_text_wider_than_window_wraps_inside_it() {
    let mut display = powered();
    // Ten columns, twenty written: the second half overwrites the first
    display.draw_text(4, "AAaa", 0, 9, 6).unwrap();
    let page = display.interface().page_bytes(4);
    assert_eq!(&page[..5], &[48, 72, 40, 120, 0]);
    assert!(page[10..].iter().all(|&b| b == 0));
}

#[test]
fn test_bar_pixels() {
    let mut display = powered();
    display.draw_bar(5, 10, 20, 0.5).unwrap();

    let page = display.interface().page_bytes(5);
    // Boundary 10 + trunc(0.5 * 19) = 19
    assert!(page[10..19].iter().all(|&b| b == BAR_FILLED));
    assert!(page[19..29].iter().all(|&b| b == BAR_EMPTY));
    assert_eq!(page[29], BAR_FILLED);
    assert_eq!(page[30], 0);
    assert_eq!(page[9], 0);
}

#[test]
fn test_delta_lands_on_bar_page_after_text_elsewhere() {
    let mut display = powered();
    display.draw_bar(6, 0, 64, 0.25).unwrap();
    display.draw_text(0, "a", 0, 10, 6).unwrap();
    display.draw_bar(6, 0, 64, 0.75).unwrap();
    display.draw_text(0, "b", 0, 10, 6).unwrap();

    let mut fresh = powered();
    fresh.draw_bar(6, 0, 64, 0.75).unwrap();
    assert_eq!(
        display.interface().page_bytes(6),
        fresh.interface().page_bytes(6)
    );
}

#[test]
fn test_update_traffic() {
    let mut display = powered();
    display.draw_bar(3, 0, 128, 0.0).unwrap();

    display.interface_mut().reset_counters();
    display.draw_bar(3, 0, 128, 0.0).unwrap();
    assert_eq!(display.interface().command_count, 0);
    assert_eq!(display.interface().data_count, 0);

    // Boundary 0 -> 12: column window plus twelve columns
    display.draw_bar(3, 0, 128, 0.1).unwrap();
    assert_eq!(display.interface().command_count, 3);
    assert_eq!(display.interface().data_count, 12);
}

#[test]
fn test_clear_screen_then_full_redraw() {
    let mut display = powered();
    display.draw_bar(2, 0, 100, 0.6).unwrap();
    display.clear_screen().unwrap();
    assert!(display.interface().gddram().iter().all(|&b| b == 0));

    display.draw_bar(2, 0, 100, 0.6).unwrap();
    let mut fresh = powered();
    fresh.draw_bar(2, 0, 100, 0.6).unwrap();
    assert_eq!(display.interface().gddram(), fresh.interface().gddram());
}

#[test]
fn test_power_and_polarity() {
    let mut display = Display::new(Emulator::new(), Builder::new().build().unwrap()).unwrap();
    display.initialize_defaults().unwrap();
    display.fill_page(0, 0xFF).unwrap();
    assert!(!display.interface().lit(0, 0));

    display.set_power(true).unwrap();
    assert!(display.interface().lit(0, 0));
    display.set_display_ram_inverted(true).unwrap();
    assert!(!display.interface().lit(0, 0));
    assert!(display.interface().lit(0, 8));
}

proptest! {
    #[test]
    fn prop_delta_redraw_matches_full_redraw(
        start in 0u8..64,
        width in 1u8..=64,
        fills in proptest::collection::vec(0.0f32..=1.2, 1..12),
    ) {
        let mut incremental = powered();
        for &fill in &fills {
            incremental.draw_bar(4, start, width, fill).unwrap();
        }

        let mut fresh = powered();
        fresh.draw_bar(4, start, width, *fills.last().unwrap()).unwrap();

        prop_assert_eq!(incremental.interface().gddram(), fresh.interface().gddram());
    }
}
