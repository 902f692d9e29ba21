//! Fixed timestep physics update
//!
//! Semi-implicit Euler integration, then collision passes against the
//! floor and each ramp, then the off-screen respawn check.

use crate::consts::*;
use crate::sim::state::SimState;

/// Advance the simulation by one fixed timestep
pub fn tick(state: &mut SimState, dt: f32) {
    let ball = &mut state.ball;

    // V = V0 + g*Δt
    ball.velocity += GRAVITY * dt;
    // S = S0 + V*Δt
    ball.center += ball.velocity * dt;

    // Floor: clamp and bounce with a little energy loss
    if ball.center.y >= HEIGHT - ball.radius {
        ball.center.y = HEIGHT - ball.radius;
        ball.velocity.y *= -FLOOR_RESTITUTION;
        ball.velocity.x *= FLOOR_DRAG;
    }

    // Ramps: clamp to the surface, then a hand-tuned kick that shoves the
    // ball along the slope. Not a reflection formula; it just looks right.
    for ramp in &state.ramps {
        if let Some(fx) = ramp.y_at(ball.center.x) {
            if ball.center.y >= fx - ball.radius {
                ball.center.y = fx - ball.radius;

                let vx =
                    ramp.angle.sin() * (ball.velocity.x + ramp.slope * GRAVITY.y / 2.0) * RAMP_KICK_X;
                let vy = -ramp.angle.cos() * ball.velocity.y * RAMP_KICK_Y;

                ball.velocity.x += vx;
                ball.velocity.y += vy;
                ball.velocity.x *= RAMP_DRAG;
            }
        }
    }

    // Rolled off the right edge: back to the drop point
    if ball.center.x > WIDTH + ball.radius + EXIT_MARGIN {
        log::debug!(
            "ball left the screen at x={:.1}, respawning",
            ball.center.x
        );
        ball.respawn();
    }
}
