//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure:
//! - Fixed timestep only
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Ball, Ramp, SimState};
pub use tick::tick;
