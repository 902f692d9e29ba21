//! Simulation state and core types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::spawn_point;

/// The bouncing ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub center: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(radius: f32, center: Vec2, velocity: Vec2) -> Self {
        Self {
            center,
            velocity,
            radius,
        }
    }

    /// Put the ball back at the drop point, at rest
    pub fn respawn(&mut self) {
        self.center = spawn_point();
        self.velocity = Vec2::ZERO;
    }
}

/// A static sloped obstacle, defined by its two endpoints
///
/// The line-equation fields are derived once at construction. A vertical
/// segment produces a non-finite slope; every later comparison against it
/// is false, so such a ramp neither draws nor collides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ramp {
    pub start: Vec2,
    pub end: Vec2,

    pub angle: f32,
    pub slope: f32,
    pub y_intercept: f32,
}

impl Ramp {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        let dy = end.y - start.y;
        let dx = end.x - start.x;
        let angle = dy.atan2(dx);
        // m = (y-y0)/(x-x0)
        let slope = dy / dx;
        // y = m(x-x0) + y0
        let y_intercept = slope * (0.0 - start.x) + start.y;

        Self {
            start,
            end,
            angle,
            slope,
            y_intercept,
        }
    }

    /// Height of the ramp surface at `x`, or `None` outside its domain.
    ///
    /// The `||` in the domain check makes it hold for every finite `x`;
    /// both the rasterizer and the bounce response rely on the ramp's
    /// function staying live across the whole screen.
    pub fn y_at(&self, x: f32) -> Option<f32> {
        let lx = self.start.x.min(self.end.x);
        let rx = self.start.x.max(self.end.x);

        if x >= lx || x <= rx {
            Some(self.slope * x + self.y_intercept)
        } else {
            None
        }
    }
}

/// Complete simulation state: one ball, the static ramps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub ball: Ball,
    pub ramps: Vec<Ramp>,
}

impl SimState {
    /// Build the scene: ball at the drop point, left ramp from just off
    /// the top-left corner down to mid-floor, and optionally a mirrored
    /// right ramp climbing back up to the right edge.
    pub fn new(second_ramp: bool) -> Self {
        let r = BALL_RADIUS;

        let mut ramps = vec![Ramp::new(
            Vec2::new(-r, r),
            Vec2::new(WIDTH / 2.0, HEIGHT),
        )];
        if second_ramp {
            ramps.push(Ramp::new(
                Vec2::new(WIDTH / 2.0, HEIGHT),
                Vec2::new(WIDTH + r, r),
            ));
        }

        Self {
            ball: Ball::new(r, spawn_point(), Vec2::ZERO),
            ramps,
        }
    }
}
