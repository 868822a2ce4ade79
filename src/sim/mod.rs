//! Simulation module
//!
//! All gameplay logic lives here. No rendering, audio or platform
//! dependencies; randomness only through `ServeSource`.

pub mod geometry;
pub mod serve;
pub mod state;
pub mod tick;

pub use geometry::Aabb;
pub use serve::{FixedServe, PcgServe, ServeSource};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, Scores, Side};
pub use tick::{TickInput, tick};
