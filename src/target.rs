//! Transform targets the animator can drive.
//!
//! [`TransformTarget`] is the contract between the animator and whatever
//! owns the transform. [`SwayNode`] is the stock Bevy implementation: a 2D
//! node with a top-left position, a size, and a pivot about which rotation
//! and scale are applied.

use bevy::prelude::*;

/// Readable and writable 2D transform with a size-derived pivot.
///
/// The animator borrows a target for the duration of each call and never
/// stores it, so a target only needs to outlive the call.
pub trait TransformTarget {
    /// Current position.
    fn position(&self) -> Vec2;
    /// Overwrites the position.
    fn set_position(&mut self, position: Vec2);
    /// Current rotation in degrees.
    fn rotation_degrees(&self) -> f32;
    /// Overwrites the rotation in degrees.
    fn set_rotation_degrees(&mut self, degrees: f32);
    /// Current scale.
    fn scale(&self) -> Vec2;
    /// Overwrites the scale.
    fn set_scale(&mut self, scale: Vec2);
    /// Laid-out size of the target.
    fn size(&self) -> Vec2;
    /// Moves the point about which rotation and scale are applied, relative
    /// to the position.
    fn set_pivot_offset(&mut self, offset: Vec2);
}

/// A 2D visual node animated by [`IdleSway`](crate::IdleSway).
///
/// `position` is the node's top-left corner before rotation and scale.
/// Rotation is counter-clockwise in Bevy's y-up world space.
///
/// # Examples
///
/// ```
/// use bevy::prelude::*;
/// use idle_sway::SwayNode;
///
/// let node = SwayNode::new(Vec2::new(100.0, 40.0), Vec2::new(64.0, 32.0));
/// assert_eq!(node.scale, Vec2::ONE);
/// assert_eq!(node.pivot_offset, Vec2::ZERO);
/// ```
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component, Default)]
#[require(Transform)]
pub struct SwayNode {
    /// Top-left corner in world units.
    pub position: Vec2,
    /// Rotation in degrees.
    pub rotation_degrees: f32,
    /// Per-axis scale.
    pub scale: Vec2,
    /// Laid-out size in world units.
    pub size: Vec2,
    /// Rotation and scale centre relative to `position`.
    pub pivot_offset: Vec2,
}

impl Default for SwayNode {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation_degrees: 0.0,
            scale: Vec2::ONE,
            size: Vec2::ZERO,
            pivot_offset: Vec2::ZERO,
        }
    }
}

impl SwayNode {
    /// Creates an unrotated, unscaled node at `position` with the given size.
    #[must_use]
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            rotation_degrees: 0.0,
            scale: Vec2::ONE,
            size,
            pivot_offset: Vec2::ZERO,
        }
    }

    /// Converts the node into a Bevy [`Transform`].
    ///
    /// The resulting translation is where the node's top-left corner lands
    /// after rotating and scaling about `position + pivot_offset`. The `z`
    /// component is carried over from `depth` so layering is preserved.
    #[must_use]
    pub fn to_transform(&self, depth: f32) -> Transform {
        let rotation = Quat::from_rotation_z(self.rotation_degrees.to_radians());
        let pivot = self.position + self.pivot_offset;
        let corner = pivot + Mat2::from_angle(self.rotation_degrees.to_radians())
            * (self.scale * -self.pivot_offset);
        Transform {
            translation: corner.extend(depth),
            rotation,
            scale: self.scale.extend(1.0),
        }
    }
}

impl TransformTarget for SwayNode {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    fn set_rotation_degrees(&mut self, degrees: f32) {
        self.rotation_degrees = degrees;
    }

    fn scale(&self) -> Vec2 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_pivot_offset(&mut self, offset: Vec2) {
        self.pivot_offset = offset;
    }
}

/// Mutable Bevy component references act as targets so systems can pass
/// `Mut<SwayNode>` straight to the animator. Writes go through `DerefMut`,
/// which marks the component changed.
impl<T: TransformTarget> TransformTarget for Mut<'_, T> {
    fn position(&self) -> Vec2 {
        (**self).position()
    }

    fn set_position(&mut self, position: Vec2) {
        (**self).set_position(position);
    }

    fn rotation_degrees(&self) -> f32 {
        (**self).rotation_degrees()
    }

    fn set_rotation_degrees(&mut self, degrees: f32) {
        (**self).set_rotation_degrees(degrees);
    }

    fn scale(&self) -> Vec2 {
        (**self).scale()
    }

    fn set_scale(&mut self, scale: Vec2) {
        (**self).set_scale(scale);
    }

    fn size(&self) -> Vec2 {
        (**self).size()
    }

    fn set_pivot_offset(&mut self, offset: Vec2) {
        (**self).set_pivot_offset(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn default_node_is_identity() {
        let transform = SwayNode::default().to_transform(0.0);
        assert_eq!(transform, Transform::IDENTITY);
    }

    #[rstest]
    #[case::origin_pivot(Vec2::ZERO)]
    #[case::centre_pivot(Vec2::new(32.0, 16.0))]
    fn untransformed_node_maps_to_its_position(#[case] pivot_offset: Vec2) {
        let node = SwayNode {
            pivot_offset,
            ..SwayNode::new(Vec2::new(10.0, 20.0), Vec2::new(64.0, 32.0))
        };
        let transform = node.to_transform(3.0);
        assert_relative_eq!(transform.translation.x, 10.0, epsilon = 1e-4);
        assert_relative_eq!(transform.translation.y, 20.0, epsilon = 1e-4);
        assert_relative_eq!(transform.translation.z, 3.0);
    }

    #[test]
    fn scaling_about_centre_pivot_keeps_centre_fixed() {
        let node = SwayNode {
            scale: Vec2::splat(2.0),
            pivot_offset: Vec2::new(5.0, 5.0),
            ..SwayNode::new(Vec2::ZERO, Vec2::new(10.0, 10.0))
        };
        let transform = node.to_transform(0.0);
        // The corner moves away from the pivot by the scaled offset.
        assert_relative_eq!(transform.translation.x, -5.0, epsilon = 1e-4);
        assert_relative_eq!(transform.translation.y, -5.0, epsilon = 1e-4);
        let centre = transform.transform_point(Vec3::new(5.0, 5.0, 0.0));
        assert_relative_eq!(centre.x, 5.0, epsilon = 1e-4);
        assert_relative_eq!(centre.y, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn rotating_about_centre_pivot_keeps_centre_fixed() {
        let node = SwayNode {
            rotation_degrees: 90.0,
            pivot_offset: Vec2::new(4.0, 2.0),
            ..SwayNode::new(Vec2::new(1.0, 1.0), Vec2::new(8.0, 4.0))
        };
        let transform = node.to_transform(0.0);
        let centre = transform.transform_point(Vec3::new(4.0, 2.0, 0.0));
        assert_relative_eq!(centre.x, 5.0, epsilon = 1e-4);
        assert_relative_eq!(centre.y, 3.0, epsilon = 1e-4);
    }

    #[test]
    fn setters_write_fields() {
        let mut node = SwayNode::default();
        node.set_position(Vec2::new(1.0, 2.0));
        node.set_rotation_degrees(15.0);
        node.set_scale(Vec2::splat(1.5));
        node.set_pivot_offset(Vec2::new(3.0, 4.0));
        assert_eq!(node.position(), Vec2::new(1.0, 2.0));
        assert_relative_eq!(node.rotation_degrees(), 15.0);
        assert_eq!(node.scale(), Vec2::splat(1.5));
        assert_eq!(node.pivot_offset, Vec2::new(3.0, 4.0));
    }
}
