//! Rampball entry point
//!
//! Sets up logging, settings and the terminal, then runs the frame loop:
//! clear, rasterize, present, step the physics, wait for the next frame.

use std::io;
use std::thread;
use std::time::Duration;

use rampball::consts::{FPS, SIM_DT};
use rampball::platform::{Request, Terminal};
use rampball::renderer::{FrameBuffer, rasterize, render_rows};
use rampball::sim::{SimState, tick};
use rampball::{Pacing, Settings};

fn main() -> io::Result<()> {
    env_logger::init();

    let settings = Settings::load();
    log::info!(
        "rampball starting (second_ramp={}, pacing={:?})",
        settings.second_ramp,
        settings.pacing
    );

    let mut terminal = Terminal::new()?;
    let result = run(&mut terminal, &settings);
    drop(terminal);

    log::info!("rampball exiting");
    result
}

fn run(terminal: &mut Terminal, settings: &Settings) -> io::Result<()> {
    let mut state = SimState::new(settings.second_ramp);
    let mut fb = FrameBuffer::new();

    loop {
        terminal.clear()?;

        rasterize(&state, &mut fb);
        terminal.present(&render_rows(&fb))?;

        tick(&mut state, SIM_DT);

        let request = match settings.pacing {
            Pacing::Keypress => terminal.wait_key()?,
            Pacing::Clock => {
                thread::sleep(Duration::from_millis(1000 / FPS as u64));
                terminal.poll_keys()?
            }
        };
        if request == Request::Quit {
            return Ok(());
        }
    }
}
