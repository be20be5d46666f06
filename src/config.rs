//! Runtime configuration for idle sway animation.
//!
//! [`AnimationConfig`] is a plain record read fresh on every tick, so hosts
//! may change it at any time. It can be authored in JSON; missing fields fall
//! back to the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the animator decides whether it responds to ticks at all.
///
/// The decision guards both the clock and the transform writes.
#[derive(Reflect, Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EngagementPolicy {
    /// Engagement is decided once when the baseline is captured. Enabling a
    /// channel later has no effect if every channel was off at that point.
    #[default]
    Startup,
    /// Engagement is recomputed from the channel flags on every tick.
    Reevaluate,
}

/// Channel toggles, amplitudes and frequencies for one animated node.
///
/// # Examples
///
/// ```
/// use idle_sway::AnimationConfig;
///
/// let config = AnimationConfig {
///     animate_scale: false,
///     rotation_amplitude: 4.0,
///     ..AnimationConfig::default()
/// };
/// assert!(config.any_channel_enabled());
/// ```
#[derive(Reflect, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[reflect(Default)]
#[serde(default)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Each flag is an independent, user-facing animation toggle."
)]
pub struct AnimationConfig {
    /// Whether the position channel oscillates.
    pub animate_position: bool,
    /// Whether the rotation channel oscillates.
    pub animate_rotation: bool,
    /// Whether the scale channel oscillates.
    pub animate_scale: bool,
    /// Maximum position offset in pixels, per axis.
    pub position_amplitude: Vec2,
    /// Maximum rotation swing in degrees.
    pub rotation_amplitude: f32,
    /// Maximum scale delta added to the baseline scale, per axis.
    pub scale_amplitude: Vec2,
    /// Position oscillation rate in cycles per second.
    pub position_frequency: f32,
    /// Rotation oscillation rate in cycles per second.
    pub rotation_frequency: f32,
    /// Scale oscillation rate in cycles per second.
    pub scale_frequency: f32,
    /// Recentre the target's pivot to half its size when the baseline is
    /// captured.
    pub force_center_pivot: bool,
    /// Suspends ticking. The clock keeps its value while paused.
    pub paused: bool,
    /// When the animator decides whether to respond to ticks.
    pub engagement: EngagementPolicy,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            animate_position: true,
            animate_rotation: true,
            animate_scale: true,
            position_amplitude: Vec2::new(0.0, 5.0),
            rotation_amplitude: 2.0,
            scale_amplitude: Vec2::splat(0.02),
            position_frequency: 1.0,
            rotation_frequency: 1.0,
            scale_frequency: 1.0,
            force_center_pivot: true,
            paused: false,
            engagement: EngagementPolicy::Startup,
        }
    }
}

impl AnimationConfig {
    /// Returns a configuration with every channel switched off.
    ///
    /// Amplitudes and frequencies keep their default values so a channel can
    /// be switched back on without further setup.
    #[must_use]
    pub fn still() -> Self {
        Self {
            animate_position: false,
            animate_rotation: false,
            animate_scale: false,
            ..Self::default()
        }
    }

    /// Returns `true` when at least one channel is enabled.
    #[must_use]
    pub const fn any_channel_enabled(&self) -> bool {
        self.animate_position || self.animate_rotation || self.animate_scale
    }

    /// Parses a configuration from a JSON document.
    ///
    /// Fields absent from the document keep their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid JSON or
    /// a field has the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse { path: None, source })
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are not a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = path.as_ref();
        let contents = fs::read_to_string(file).map_err(|source| ConfigError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: Some(file.to_path_buf()),
            source,
        })
    }
}

/// Failure raised while loading an [`AnimationConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read animation config {path:?}: {source}")]
    Io {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The configuration document was malformed.
    #[error("invalid animation config{}: {source}", describe_origin(.path.as_deref()))]
    Parse {
        /// File the document came from, when it was read from disk.
        path: Option<PathBuf>,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
}

fn describe_origin(path: Option<&Path>) -> String {
    path.map(|p| format!(" {}", p.display())).unwrap_or_default()
}
