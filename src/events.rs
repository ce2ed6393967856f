//! Events for the target range simulation.
//!
//! Note: In Bevy 0.18, buffered events use the `Message` trait instead of `Event`.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::types::{ControlAction, LaunchParams};

/// One player action, emitted by the keyboard layer.
///
/// The dispatcher consumes these one per fixed tick, so rapid input queues up
/// instead of collapsing into a single tick.
#[derive(Message, Clone, Copy, Debug)]
pub struct ControlEvent {
    /// Action to apply this tick
    pub action: ControlAction,
}

impl ControlEvent {
    /// Wraps an action in an event.
    pub fn new(action: ControlAction) -> Self {
        Self { action }
    }
}

/// Event fired when the launcher discharges.
///
/// Carries the launch parameter snapshot taken at fire time; the spawn system
/// turns each of these into one live shot entity.
///
/// # Fields
/// * `params` - Copied launcher aim (angle, velocity, height)
///
/// # Example
/// ```
/// use bevy_target_range::events::FireEvent;
/// use bevy_target_range::types::LaunchParams;
///
/// let event = FireEvent::new(LaunchParams::new(45.0, 35.0, 0.0));
/// assert_eq!(event.params.angle, 45.0);
/// ```
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct FireEvent {
    /// Launcher aim snapshot
    pub params: LaunchParams,
}

impl FireEvent {
    /// Creates a fire event from a launch snapshot.
    pub fn new(params: LaunchParams) -> Self {
        Self { params }
    }
}

/// Event fired for every shot-tick inside the scoring band.
///
/// One event per shot per tick the condition holds; a lingering shot emits a
/// stream of these, matching the scoring rule.
///
/// # Fields
/// * `shot` - The scoring shot entity
/// * `shot_position` - The shot's position at the scoring tick
/// * `target_x` - Target center at the scoring tick
#[derive(Message, Clone, Copy, Debug)]
pub struct TargetHitEvent {
    /// Scoring shot entity
    pub shot: Entity,
    /// Shot position when it scored
    pub shot_position: Vec2,
    /// Target center when it scored
    pub target_x: f32,
}

/// Event fired exactly once when a shot leaves the valid bounds.
///
/// Written by the culling system in the same tick it despawns the shot, so
/// observers see each shot retire exactly once.
///
/// # Fields
/// * `shot` - The despawned shot entity
/// * `final_position` - Where the shot was when it was culled
#[derive(Message, Clone, Copy, Debug)]
pub struct ShotCulledEvent {
    /// Despawned shot entity
    pub shot: Entity,
    /// Position at cull time
    pub final_position: Vec2,
}
