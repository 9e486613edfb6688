use log::Level;

/// Scroll offset (px) past which the nav bar switches to its solid look.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Cost of supplies and meals for one child for a semester, in dollars.
pub const UNIT_COST: u64 = 5;

pub const PARALLAX_RANGE: f64 = 500.0;
pub const PARALLAX_TRAVEL: f64 = 200.0;

/// Seconds between program cards revealing.
pub const STAGGER_INCREMENT: f64 = 0.2;
/// Seconds between stat tiles revealing.
pub const STAT_STAGGER_INCREMENT: f64 = 0.1;

/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const PRESET_AMOUNTS: [u64; 4] = [25, 50, 100, 250];
pub const DEFAULT_AMOUNT: u64 = 100;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
