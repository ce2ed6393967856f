//! Global resources for the target range simulation.

use bevy::prelude::*;

/// Environment settings shared by every shot in flight.
///
/// # Fields
/// * `gravity` - Downward acceleration applied to vertical velocity each
///   integration step (units/s²)
///
/// # Example
/// ```
/// use bevy_target_range::resources::RangeEnvironment;
///
/// let env = RangeEnvironment::default();
/// assert_eq!(env.gravity, 9.8);
/// ```
#[derive(Resource, Reflect, Clone)]
#[reflect(Resource)]
pub struct RangeEnvironment {
    /// Downward acceleration (units/s²)
    pub gravity: f32,
}

impl Default for RangeEnvironment {
    /// Standard range gravity of 9.8 units/s².
    fn default() -> Self {
        Self { gravity: 9.8 }
    }
}

/// Global configuration for the range.
///
/// # Fields
/// * `max_range` - Shots are culled once `x` reaches this bound
/// * `scoring_height` - A shot scores only while its `y` is below this band
/// * `target_min_x` / `target_max_x` - Target sweep bounds
/// * `target_step` - Magnitude of the target's per-tick horizontal step
/// * `adjust_step` - Launcher change applied per key event (angle, speed, height)
/// * `debug_draw` - Enables the gizmo overlay for shot velocities and the
///   target span
#[derive(Resource, Reflect, Clone)]
#[reflect(Resource)]
pub struct RangeConfig {
    /// Horizontal cull bound
    pub max_range: f32,
    /// Scoring band ceiling
    pub scoring_height: f32,
    /// Left target sweep bound
    pub target_min_x: f32,
    /// Right target sweep bound
    pub target_max_x: f32,
    /// Per-tick target step magnitude
    pub target_step: f32,
    /// Launcher adjustment per key event
    pub adjust_step: f32,
    /// Debug visualization
    pub debug_draw: bool,
}

impl Default for RangeConfig {
    /// The classic range layout.
    ///
    /// Default values:
    /// - Cull bound at x = 200
    /// - Scoring band below y = 0.75
    /// - Target sweeping [50, 170] at 0.1 units per tick
    /// - ±5 launcher adjustments
    /// - Debug drawing disabled
    fn default() -> Self {
        Self {
            max_range: 200.0,
            scoring_height: 0.75,
            target_min_x: 50.0,
            target_max_x: 170.0,
            target_step: 0.1,
            adjust_step: 5.0,
            debug_draw: false,
        }
    }
}

/// Current sweep direction and step of the target.
///
/// `dx` keeps its magnitude and flips sign when the target leaves the sweep
/// band; the flip is applied by
/// [`sweep_target`](crate::systems::target::sweep_target) on the tick *after*
/// the bound is crossed.
#[derive(Resource, Reflect, Clone)]
#[reflect(Resource)]
pub struct TargetSweep {
    /// Signed per-tick step
    pub dx: f32,
}

impl Default for TargetSweep {
    /// Starts sweeping right at the standard step.
    fn default() -> Self {
        Self { dx: 0.1 }
    }
}

/// Running hit counter.
///
/// Incremented by [`score_hits`](crate::systems::scoring::score_hits) once per
/// shot per tick the scoring condition holds. A shot lingering inside the band
/// keeps scoring — that re-trigger is the defined rule, not an accident.
#[derive(Resource, Reflect, Default, Clone)]
#[reflect(Resource)]
pub struct Score {
    /// Total hits this session
    pub hits: u32,
}
