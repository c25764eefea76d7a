//! Utility algorithms shared across modules.

pub mod sequence;

/// Round a percentage to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
