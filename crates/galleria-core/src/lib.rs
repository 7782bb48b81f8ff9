//! Galleria Core - Core types and utilities for the tour viewer
//!
//! This crate provides the foundational types used throughout the viewer:
//! - Mathematical primitives (re-exported from glam)
//! - Camera pose (position, orientation, look-at target, zoom)
//! - Easing and interpolation for camera transitions
//! - The tick clock driving the render/animation loop

pub mod easing;
pub mod pose;
pub mod time;

pub use easing::{ease_in_out, Lerp};
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
pub use pose::Pose;
pub use time::{TickClock, TickConfig};
