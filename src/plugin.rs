//! Bevy plugin wiring idle sway into the schedule.
//!
//! The host engine's lifecycle maps onto the animator as follows:
//!
//! - the "ready" notification is [`capture_baselines_system`] in `PreUpdate`,
//!   one schedule step after the entity was spawned, so the node's size has
//!   been laid out by then;
//! - the per-frame tick is [`tick_sway_system`] in `Update`;
//! - [`sync_node_transforms_system`] copies changed [`SwayNode`]s into their
//!   `Transform` before Bevy propagates transforms.

use bevy::ecs::prelude::{EntityEvent, On};
use bevy::prelude::*;
use bevy::transform::TransformSystems;
use log::debug;

use crate::animator::{IdleSway, Lifecycle};
use crate::config::AnimationConfig;
use crate::target::SwayNode;

/// System sets for ordering host systems around the animation.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwaySystems {
    /// Baseline capture, in `PreUpdate`.
    Capture,
    /// Oscillation, in `Update`.
    Tick,
    /// Node to `Transform` copy, in `PostUpdate`.
    Sync,
}

/// Snaps one entity's [`SwayNode`] back to its captured baseline.
///
/// # Examples
///
/// ```ignore
/// fn on_disable(mut commands: Commands, actor: Entity) {
///     commands.trigger(ResetSway { entity: actor });
/// }
/// ```
#[derive(EntityEvent, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetSway {
    /// Entity carrying the [`IdleSway`] to reset.
    pub entity: Entity,
}

/// Captures the baseline of every animator still waiting for its ready
/// notification. Entities without a [`SwayNode`] become inert.
pub fn capture_baselines_system(mut query: Query<(Entity, &mut IdleSway, Option<&mut SwayNode>)>) {
    for (entity, mut sway, mut node) in &mut query {
        if sway.lifecycle() != Lifecycle::Uninitialized {
            continue;
        }
        if sway.initialize(node.as_mut()).is_some() {
            debug!("idle sway ready on {entity}");
        }
    }
}

/// Advances every running animator by the frame's delta time.
///
/// Paused, inert and disengaged animators are only read, so they are not
/// flagged as changed.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn tick_sway_system(time: Res<Time>, mut query: Query<(&mut IdleSway, Option<&mut SwayNode>)>) {
    let delta = time.delta_secs();
    for (mut sway, mut node) in &mut query {
        if !sway.is_running() {
            continue;
        }
        sway.tick(node.as_mut(), delta);
    }
}

/// Copies each changed [`SwayNode`] into its `Transform`, keeping the
/// transform's depth.
pub fn sync_node_transforms_system(
    mut query: Query<(&SwayNode, &mut Transform), Changed<SwayNode>>,
) {
    for (node, mut transform) in &mut query {
        *transform = node.to_transform(transform.translation.z);
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn reset_on_event(event: On<ResetSway>, mut query: Query<(&IdleSway, Option<&mut SwayNode>)>) {
    let entity = event.event().entity;
    let Ok((sway, mut node)) = query.get_mut(entity) else {
        debug!("reset requested for {entity}, which has no idle sway");
        return;
    };
    sway.reset(node.as_mut());
}

/// Plugin installing the idle sway systems and reset observer.
///
/// # Examples
///
/// ```ignore
/// use bevy::prelude::*;
/// use idle_sway::{AnimationConfig, IdleSway, IdleSwayPlugin, SwayNode};
///
/// App::new()
///     .add_plugins((DefaultPlugins, IdleSwayPlugin))
///     .add_systems(Startup, |mut commands: Commands| {
///         commands.spawn((
///             SwayNode::new(Vec2::ZERO, Vec2::new(64.0, 64.0)),
///             IdleSway::new(AnimationConfig::default()),
///         ));
///     })
///     .run();
/// ```
#[derive(Debug, Default)]
pub struct IdleSwayPlugin;

impl Plugin for IdleSwayPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<IdleSway>();
        app.register_type::<SwayNode>();
        app.register_type::<AnimationConfig>();
        app.add_observer(reset_on_event);
        app.add_systems(
            PreUpdate,
            capture_baselines_system.in_set(SwaySystems::Capture),
        );
        app.add_systems(Update, tick_sway_system.in_set(SwaySystems::Tick));
        app.add_systems(
            PostUpdate,
            sync_node_transforms_system
                .in_set(SwaySystems::Sync)
                .before(TransformSystems::Propagate),
        );
    }
}
