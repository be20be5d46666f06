//! Utility helpers for tests.
//!
//! Shared fixtures for building nodes and configurations, plus tolerant
//! vector assertions.

use bevy::prelude::*;
use idle_sway::{AnimationConfig, SwayNode};

/// Tolerance used by [`assert_vec2_near`] and [`assert_f32_near`].
pub const TOLERANCE: f32 = 1e-3;

/// Builds an unrotated, unscaled node at `(x, y)` with a 40×40 size.
pub fn node_at(x: f32, y: f32) -> SwayNode {
    SwayNode::new(Vec2::new(x, y), Vec2::splat(40.0))
}

/// Builds a configuration that animates only the given channels.
///
/// Amplitudes and frequencies keep their defaults; the pivot is left alone
/// so positional assertions stay simple.
pub fn config_with(position: bool, rotation: bool, scale: bool) -> AnimationConfig {
    AnimationConfig {
        animate_position: position,
        animate_rotation: rotation,
        animate_scale: scale,
        force_center_pivot: false,
        ..AnimationConfig::default()
    }
}

/// Assert that two vectors agree within [`TOLERANCE`] on both axes.
///
/// # Panics
/// Panics with both values when either axis differs by more than the
/// tolerance.
pub fn assert_vec2_near(actual: Vec2, expected: Vec2) {
    assert!(
        (actual - expected).abs().max_element() <= TOLERANCE,
        "expected {expected:?}, got {actual:?}"
    );
}

/// Assert that two scalars agree within [`TOLERANCE`].
///
/// # Panics
/// Panics with both values when they differ by more than the tolerance.
pub fn assert_f32_near(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() <= TOLERANCE,
        "expected {expected}, got {actual}"
    );
}
