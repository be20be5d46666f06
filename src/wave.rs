//! Sine offset helpers shared by every animation channel.
//!
//! The formula is `amplitude * sin(time * frequency * 2π)`. Vector channels
//! apply it per axis with an independent amplitude but a shared frequency and
//! phase, so both axes cross the baseline together.
//!
//! Time is carried in `f64` seconds so the phase stays accurate after days
//! of uptime. Only the unit sine is narrowed to `f32`.

use std::f64::consts::TAU;

use glam::Vec2;

/// Unit sine of the channel phase at `time` seconds, in `[-1, 1]`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "A sine lies in [-1, 1], which f32 represents without overflow."
)]
fn unit_wave(frequency: f32, time: f64) -> f32 {
    (time * f64::from(frequency) * TAU).sin() as f32
}

/// Returns the sinusoidal offset for a scalar channel at `time` seconds.
///
/// Zero and negative amplitudes or frequencies are accepted: a zero value
/// yields no motion and a negative one inverts the phase.
///
/// # Examples
///
/// ```
/// use idle_sway::wave::sine_offset;
/// assert!((sine_offset(20.0, 1.0, 0.25) - 20.0).abs() < 1e-4);
/// assert!(sine_offset(20.0, 1.0, 0.0).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn sine_offset(amplitude: f32, frequency: f32, time: f64) -> f32 {
    amplitude * unit_wave(frequency, time)
}

/// Returns the per-axis sinusoidal offset for a vector channel.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use idle_sway::wave::sine_offset_vec2;
/// let offset = sine_offset_vec2(Vec2::new(4.0, -2.0), 1.0, 0.25);
/// assert!((offset - Vec2::new(4.0, -2.0)).length() < 1e-4);
/// ```
#[must_use]
pub fn sine_offset_vec2(amplitude: Vec2, frequency: f32, time: f64) -> Vec2 {
    amplitude * unit_wave(frequency, time)
}
