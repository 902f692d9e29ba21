//! Shape rasterization into the framebuffer

use glam::Vec2;

use crate::consts::{BAR_WIDTH, HEIGHT, WIDTH};
use crate::renderer::framebuffer::{FrameBuffer, Pixel};
use crate::sim::state::{Ball, Ramp};

/// Rasterize the ball as a filled disk.
///
/// Walks the ball's bounding box and lights every cell whose center lies
/// inside the circle. The `y > HEIGHT` bound admits the row at exactly
/// `HEIGHT`; the framebuffer clips it.
pub fn draw_ball(fb: &mut FrameBuffer, ball: &Ball) {
    let radius_vec = Vec2::splat(ball.radius);
    let top_l = ball.center - radius_vec;
    let bot_r = ball.center + radius_vec;

    for y in (top_l.y.floor() as i32)..(bot_r.y.ceil() as i32) {
        if (y as f32) < 0.0 || (y as f32) > HEIGHT {
            continue;
        }
        for x in (top_l.x.floor() as i32)..(bot_r.x.ceil() as i32) {
            if (x as f32) < 0.0 || (x as f32) >= WIDTH {
                continue;
            }
            // distance from the cell center to the ball center,
            // x^2 + y^2 <= r^2
            let pos = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let d = ball.center - pos;
            if d.length_squared() <= ball.radius * ball.radius {
                fb.set(x, y, Pixel::Fg);
            }
        }
    }
}

/// Rasterize the ramp as a band `BAR_WIDTH` rows thick.
///
/// A cell is lit when its row sits within `[fx, fx + BAR_WIDTH]` of the
/// ramp height at that column, clipped to the segment's bounding box.
/// A vertical ramp has a NaN height everywhere and draws nothing.
pub fn draw_ramp(fb: &mut FrameBuffer, ramp: &Ramp) {
    let top_l = Vec2::new(
        ramp.start.x.min(ramp.end.x),
        ramp.start.y.min(ramp.end.y),
    );
    let bot_r = Vec2::new(
        ramp.start.x.max(ramp.end.x),
        ramp.start.y.max(ramp.end.y),
    );

    for y in (top_l.y.floor() as i32)..(bot_r.y.ceil() as i32) {
        if (y as f32) < 0.0 || (y as f32) >= HEIGHT {
            continue;
        }
        for x in (top_l.x.floor() as i32)..(bot_r.x.ceil() as i32) {
            if (x as f32) < 0.0 || (x as f32) >= WIDTH {
                continue;
            }
            if let Some(fx) = ramp.y_at(x as f32) {
                let pos = fx - y as f32;
                if pos >= -BAR_WIDTH && pos <= 0.0 {
                    fb.set(x, y, Pixel::Fg);
                }
            }
        }
    }
}
