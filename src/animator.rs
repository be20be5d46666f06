//! The idle sway animator: baseline capture, per-tick oscillation and reset.
//!
//! [`IdleSway`] follows a two-phase lifecycle. It is constructed with a
//! configuration, then [`IdleSway::initialize`] captures the baseline once the
//! target's layout is valid. Only after that do [`IdleSway::tick`] and
//! [`IdleSway::reset`] touch the target.
//!
//! The animator never stores its target. Each operation borrows it as an
//! `Option<&mut T>`; passing `None` models an absent target and turns the
//! operation into a no-op.

use bevy::prelude::*;
use log::debug;

use crate::baseline::BaselineState;
use crate::config::{AnimationConfig, EngagementPolicy};
use crate::target::TransformTarget;
use crate::wave::{sine_offset, sine_offset_vec2};

/// Where an animator is in its initialise/animate lifecycle.
#[derive(Reflect, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, waiting for the ready notification.
    #[default]
    Uninitialized,
    /// Baseline captured; ticks and resets act on the target.
    Ready,
    /// The ready notification arrived without a target. Every later
    /// operation is a no-op.
    Inert,
}

/// Sinusoidal idle motion around a captured baseline.
///
/// # Examples
///
/// ```
/// use bevy::prelude::*;
/// use idle_sway::{AnimationConfig, IdleSway, SwayNode};
///
/// let mut node = SwayNode::new(Vec2::new(100.0, 100.0), Vec2::new(40.0, 40.0));
/// let mut sway = IdleSway::new(AnimationConfig {
///     animate_rotation: false,
///     animate_scale: false,
///     position_amplitude: Vec2::new(20.0, 20.0),
///     ..AnimationConfig::default()
/// });
///
/// sway.initialize(Some(&mut node));
/// sway.tick(Some(&mut node), 0.25);
/// assert!((node.position - Vec2::new(120.0, 120.0)).length() < 1e-3);
///
/// sway.reset(Some(&mut node));
/// assert_eq!(node.position, Vec2::new(100.0, 100.0));
/// ```
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component, Default)]
pub struct IdleSway {
    config: AnimationConfig,
    lifecycle: Lifecycle,
    baseline: Option<BaselineState>,
    time_elapsed: f64,
    engaged_at_startup: bool,
}

impl IdleSway {
    /// Creates an uninitialised animator.
    #[must_use]
    pub const fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            lifecycle: Lifecycle::Uninitialized,
            baseline: None,
            time_elapsed: 0.0,
            engaged_at_startup: false,
        }
    }

    /// Captures the baseline from `target`; the "ready" notification.
    ///
    /// Only the first call has an effect. Later calls return the baseline
    /// captured the first time without reading the target again. When
    /// `target` is `None` the animator becomes [`Lifecycle::Inert`].
    ///
    /// If `force_center_pivot` is set, the target's pivot offset is moved to
    /// half its size before the baseline is read.
    pub fn initialize<T: TransformTarget + ?Sized>(
        &mut self,
        target: Option<&mut T>,
    ) -> Option<BaselineState> {
        match self.lifecycle {
            Lifecycle::Ready => return self.baseline,
            Lifecycle::Inert => return None,
            Lifecycle::Uninitialized => {}
        }

        let Some(node) = target else {
            debug!("idle sway has no target at ready time; animation stays inert");
            self.lifecycle = Lifecycle::Inert;
            return None;
        };

        if self.config.force_center_pivot {
            let half_size = node.size() * 0.5;
            node.set_pivot_offset(half_size);
        }

        let baseline = BaselineState::capture(&*node);
        self.baseline = Some(baseline);
        self.engaged_at_startup = self.config.any_channel_enabled();
        self.lifecycle = Lifecycle::Ready;
        debug!(
            "idle sway baseline captured: position={:?} rotation={} scale={:?} engaged={}",
            baseline.position, baseline.rotation, baseline.scale, self.engaged_at_startup
        );
        Some(baseline)
    }

    /// Advances the clock by `delta_seconds` and reapplies every enabled
    /// channel's offset to the target.
    ///
    /// Does nothing unless the animator is ready, the target is present, the
    /// animation is unpaused and engaged, and at least one channel is on.
    pub fn tick<T: TransformTarget + ?Sized>(&mut self, target: Option<&mut T>, delta_seconds: f32) {
        if !self.is_running() {
            return;
        }
        let (Some(baseline), Some(node)) = (self.baseline, target) else {
            return;
        };

        self.time_elapsed += f64::from(delta_seconds);
        self.apply_offsets(&baseline, node);
    }

    fn apply_offsets<T: TransformTarget + ?Sized>(&self, baseline: &BaselineState, target: &mut T) {
        let config = &self.config;
        let time = self.time_elapsed;

        if config.animate_position {
            let offset = sine_offset_vec2(config.position_amplitude, config.position_frequency, time);
            target.set_position(baseline.position + offset);
        }
        if config.animate_rotation {
            let offset = sine_offset(config.rotation_amplitude, config.rotation_frequency, time);
            target.set_rotation_degrees(baseline.rotation + offset);
        }
        if config.animate_scale {
            let offset = sine_offset_vec2(config.scale_amplitude, config.scale_frequency, time);
            target.set_scale(baseline.scale + offset);
        }
    }

    /// Overwrites the target's transform with the baseline.
    ///
    /// The clock, the pause flag and the baseline itself are left untouched.
    pub fn reset<T: TransformTarget + ?Sized>(&self, target: Option<&mut T>) {
        if let (Some(baseline), Some(node)) = (self.baseline, target) {
            baseline.restore(node);
        }
    }

    /// Whether the next tick with a target present would advance the clock.
    ///
    /// Callers holding change-detected storage can check this before taking
    /// the animator mutably.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Ready)
            && !self.config.paused
            && self.is_engaged()
            && self.config.any_channel_enabled()
    }

    /// Whether ticks are allowed to run under the configured
    /// [`EngagementPolicy`].
    #[must_use]
    pub const fn is_engaged(&self) -> bool {
        match self.config.engagement {
            EngagementPolicy::Startup => self.engaged_at_startup,
            EngagementPolicy::Reevaluate => self.config.any_channel_enabled(),
        }
    }

    /// Suspends ticking without touching the clock.
    pub const fn pause(&mut self) {
        self.config.paused = true;
    }

    /// Resumes ticking from the current clock value.
    pub const fn resume(&mut self) {
        self.config.paused = false;
    }

    /// Whether ticking is suspended.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.config.paused
    }

    /// Current lifecycle stage.
    #[must_use]
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// The captured baseline, once ready.
    #[must_use]
    pub const fn baseline(&self) -> Option<BaselineState> {
        self.baseline
    }

    /// Seconds accumulated by unpaused, engaged ticks.
    #[must_use]
    pub const fn time_elapsed(&self) -> f64 {
        self.time_elapsed
    }

    /// The live configuration.
    #[must_use]
    pub const fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Mutable access to the configuration; changes apply on the next tick.
    pub const fn config_mut(&mut self) -> &mut AnimationConfig {
        &mut self.config
    }
}
