//! Simulation module
//!
//! Geometry, entities and the per-frame coordinator. Everything here is
//! deterministic for a given seed and input sequence:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod background;
pub mod polygon;
pub mod state;
pub mod tick;

pub use background::Background;
pub use polygon::{Polygon, Rect, area, centroid};
pub use state::{Bullet, Enemy, GameEvent, GameState, Player, RoundPhase};
pub use tick::{TickInput, tick};
