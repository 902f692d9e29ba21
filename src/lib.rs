//! Rampball - a bouncing ball in your terminal
//!
//! A ball falls under gravity, bounces off a sloped ramp and the floor,
//! and eventually rolls off the right edge of the screen, at which point
//! it respawns at the top left. Each frame is rasterized into an 80x22
//! binary pixel grid and compressed two rows at a time into the half-block
//! characters ` `, `_`, `^` and `S`.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, ramp collisions)
//! - `renderer`: Framebuffer, rasterization, half-block text output
//! - `platform`: Terminal handling (raw mode, clear, key events)
//! - `settings`: User preferences (second ramp, frame pacing)

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Pacing, Settings};

use glam::Vec2;

/// Fixed demo constants
pub mod consts {
    use glam::Vec2;

    /// Screen width in character cells
    pub const IWIDTH: usize = 80;
    /// Screen height in pixel rows (two pixel rows per printed text row)
    pub const IHEIGHT: usize = 22;

    /// Float views of the screen dimensions for the physics/raster math
    pub const WIDTH: f32 = IWIDTH as f32;
    pub const HEIGHT: f32 = IHEIGHT as f32;

    /// Nominal frame rate; only feeds the integration timestep (frames
    /// advance on keypress by default, see [`crate::Pacing`])
    pub const FPS: u32 = 30;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / FPS as f32;

    /// Downward acceleration in cells/s²
    pub const GRAVITY: Vec2 = Vec2::new(0.0, 120.0);

    /// Ball radius in cells
    pub const BALL_RADIUS: f32 = HEIGHT / 4.0;

    /// Thickness of the rasterized ramp band, in pixel rows
    pub const BAR_WIDTH: f32 = 2.0;

    /// Floor bounce: vertical restitution and horizontal drag
    pub const FLOOR_RESTITUTION: f32 = 0.98;
    pub const FLOOR_DRAG: f32 = 0.98;

    /// Ramp bounce response, tuned to look plausible rather than derived
    pub const RAMP_KICK_X: f32 = 1.2;
    pub const RAMP_KICK_Y: f32 = 1.8;
    pub const RAMP_DRAG: f32 = 0.99;

    /// How far past the right edge the ball may travel before respawning
    pub const EXIT_MARGIN: f32 = 2.0;
}

/// Where the ball respawns after leaving the screen
#[inline]
pub fn spawn_point() -> Vec2 {
    Vec2::new(consts::BALL_RADIUS, 0.0)
}
