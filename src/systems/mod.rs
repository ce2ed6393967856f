//! Systems module - all ECS systems for the range simulation.

pub mod culling;
pub mod debug;
pub mod hud;
pub mod kinematics;
pub mod launcher;
pub mod scoring;
pub mod target;
