//! Ball Field - randomized circular bodies in a bounded 2D world
//!
//! Core modules:
//! - `sim`: Entities, the injected random source and the ball manager
//! - `settings`: World bounds and spawn parameters (JSON-backed)
//! - `error`: Crate error type

pub mod error;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::WorldSettings;

use glam::{IVec2, Vec2};

/// World configuration defaults
pub mod consts {
    /// Window dimensions (spawn region is centered at the origin)
    pub const WINDOW_WIDTH: f32 = 1920.0;
    pub const WINDOW_HEIGHT: f32 = 1080.0;

    /// Mass per unit of radius
    pub const MASS_SCALE_BY_RADIUS: f32 = 10.0;

    /// Spawn radius range, half-open [min, max)
    pub const BALL_MIN_RADIUS: f32 = 2.0;
    pub const BALL_MAX_RADIUS: f32 = 7.0;

    /// Capacity hint for a fresh manager
    pub const INITIAL_CAPACITY: usize = 32;

    /// Balls spawned by the driver when no count is given
    pub const DEFAULT_BALL_COUNT: usize = 16;
}

/// World (Y-up, origin at center) to screen (Y-down, origin top-left)
#[inline]
pub fn world_to_screen(world: Vec2, screen_center: Vec2) -> Vec2 {
    Vec2::new(world.x + screen_center.x, screen_center.y - world.y)
}

/// Screen (Y-down, origin top-left) to world (Y-up, origin at center)
#[inline]
pub fn screen_to_world(screen: IVec2, screen_center: Vec2) -> Vec2 {
    Vec2::new(
        screen.x as f32 - screen_center.x,
        screen_center.y - screen.y as f32,
    )
}
