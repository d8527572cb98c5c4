//! Terminal simulator: drives a speed gauge through the emulated controller.
//!
//! Usage: `ssd1306-sim [frames]`. Bus traffic per frame is logged at `info`
//! (`RUST_LOG=debug` shows the addressing decisions of the driver) and the
//! final panel is printed to stdout.

use log::info;
use ssd1306::{Builder, Display, Icon};
use ssd1306_sim::Emulator;

const DEFAULT_FRAMES: usize = 24;
const MAX_SPEED: f32 = 200.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let frames = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<usize>())
        .transpose()?
        .unwrap_or(DEFAULT_FRAMES);

    let config = Builder::new().contrast(0x7F).build()?;
    let mut display = Display::new(Emulator::new(), config)?;
    display.initialize_defaults()?;
    display.set_charge_pump(true)?;
    display.set_power(true)?;
    display.clear_screen()?;

    display.draw_text(0, "speed", 10, 40, 6)?;
    display.draw_text(5, "throttle", 10, 50, 6)?;

    let mut top_speed: f32 = 0.0;
    for frame in 0..frames {
        let t = frame as f32 / 6.0;
        // Overshoots the scale now and then; the bar clamps
        let speed = (t.sin() * 0.55 + 0.5).max(0.0) * MAX_SPEED;
        let throttle = (t * 1.7).cos() * 0.5 + 0.5;
        top_speed = top_speed.max(speed);

        display.interface_mut().reset_counters();
        let icon = if speed >= MAX_SPEED {
            Icon::MaxSpeed
        } else {
            Icon::Speed
        };
        display.draw_icon(1, icon, 0, 6)?;
        display.draw_text(1, &format!("{:>3} km/h", speed as u32), 10, 60, 6)?;
        display.draw_text(1, &format!("max {:>3}", top_speed as u32), 80, 40, 6)?;
        display.draw_bar(3, 0, 128, speed / MAX_SPEED)?;
        display.draw_bar(6, 0, 128, throttle)?;

        let emulator = display.interface();
        info!(
            "frame {frame:>3}: {speed:5.1} km/h, throttle {:3.0}%, {} command + {} data bytes",
            throttle * 100.0,
            emulator.command_count,
            emulator.data_count
        );
    }

    print!("{}", display.interface().render());
    Ok(())
}
