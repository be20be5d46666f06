//! Rest transform recorded once per animated node.

use bevy::prelude::*;

use crate::target::TransformTarget;

/// The target's transform at activation: the centre of oscillation.
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct BaselineState {
    /// Rest position.
    pub position: Vec2,
    /// Rest rotation in degrees.
    pub rotation: f32,
    /// Rest scale.
    pub scale: Vec2,
}

impl BaselineState {
    /// Reads the baseline from a target's current transform.
    #[must_use]
    pub fn capture<T: TransformTarget + ?Sized>(target: &T) -> Self {
        Self {
            position: target.position(),
            rotation: target.rotation_degrees(),
            scale: target.scale(),
        }
    }

    /// Writes the baseline back onto a target.
    pub fn restore<T: TransformTarget + ?Sized>(&self, target: &mut T) {
        target.set_position(self.position);
        target.set_rotation_degrees(self.rotation);
        target.set_scale(self.scale);
    }
}
