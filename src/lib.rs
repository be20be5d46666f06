#![cfg_attr(docsrs, feature(doc_cfg))]
//! Idle "breathing" motion for 2D nodes.
//!
//! An [`IdleSway`] perturbs a node's position, rotation and scale around a
//! baseline captured once the node is laid out, using one sine wave per
//! channel. [`IdleSwayPlugin`] drives it from Bevy's schedule; the animator
//! itself works on any [`TransformTarget`].
pub mod animator;
pub mod baseline;
pub mod config;
pub mod logging;
pub mod plugin;
pub mod target;
pub mod wave;

pub use animator::{IdleSway, Lifecycle};
pub use baseline::BaselineState;
pub use config::{AnimationConfig, ConfigError, EngagementPolicy};
pub use logging::init as init_logging;
pub use plugin::{
    capture_baselines_system, sync_node_transforms_system, tick_sway_system, IdleSwayPlugin,
    ResetSway, SwaySystems,
};
pub use target::{SwayNode, TransformTarget};
pub use wave::{sine_offset, sine_offset_vec2};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use idle_sway::prelude::*;
    //! ```

    pub use crate::AnimationConfig;
    pub use crate::EngagementPolicy;
    pub use crate::IdleSway;
    pub use crate::IdleSwayPlugin;
    pub use crate::ResetSway;
    pub use crate::SwayNode;
    pub use crate::TransformTarget;
}
