//! Framebuffer rendering module
//!
//! Shapes are rasterized into a fixed 80x22 binary pixel grid, which is
//! then compressed two rows at a time into half-block characters.

pub mod framebuffer;
pub mod halfblock;
pub mod raster;

pub use framebuffer::{FrameBuffer, Pixel};
pub use halfblock::render_rows;
pub use raster::{draw_ball, draw_ramp};

use crate::sim::SimState;

/// Rasterize one frame: clear the buffer, then the ball, then the ramps
pub fn rasterize(state: &SimState, fb: &mut FrameBuffer) {
    fb.clear(Pixel::Bg);
    draw_ball(fb, &state.ball);
    for ramp in &state.ramps {
        draw_ramp(fb, ramp);
    }
}
