//! Interactive 2D gravity toy: bodies attract each other, the user throws
//! new ones in with the mouse.
//!
//! The physics and the input state machine live in [`simulation`] and know
//! nothing about bevy beyond its math, color and log types; [`plugin`] wires
//! them into a bevy app.

pub mod config;
pub mod error;
pub mod plugin;
pub mod simulation;

pub use config::Params;
pub use error::BodyError;
pub use plugin::GravityPlugin;
pub use simulation::Simulation;
