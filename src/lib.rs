//! # Bevy Target Range
//!
//! A fixed-timestep 2D target practice simulation plugin for Bevy 0.18.
//!
//! ## Features
//! - Semi-implicit Euler projectile kinematics, bitwise-deterministic replay
//! - Player-adjustable launcher (angle, speed, base height) with aim preview
//! - Horizontally oscillating target with a fixed-width hit span
//! - Out-of-bounds shot culling with exactly-once retirement events
//! - Re-triggering scoring band, counted once per shot per tick
//! - Headless-friendly: the core runs without input or render plugins
//!
//! ## Quick Start
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_target_range::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(TargetRangePluginGroup)
//!         .run();
//! }
//! ```

pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
pub mod types;

pub mod prelude {
    pub use crate::components::*;
    pub use crate::events::*;
    pub use crate::resources::*;
    pub use crate::types::*;
    pub use crate::TargetRangePluginGroup;
    pub use crate::{RangeCorePlugin, RangeDebugPlugin, RangeHudPlugin};
}

use bevy::prelude::*;

/// Fixed simulation rate: one tick is 1/30 of a simulated second.
pub const TICK_RATE_HZ: f64 = 30.0;

/// Main plugin group that includes all range subsystems.
///
/// Bundles the core simulation with the HUD (score text, aim preview, marker
/// tracking) and the debug overlay. Windowed apps add the whole group;
/// headless runs can add [`RangeCorePlugin`] alone.
///
/// # Example
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_target_range::prelude::*;
///
/// fn main() {
///     App::new()
///         .add_plugins(DefaultPlugins)
///         .add_plugins(TargetRangePluginGroup)
///         .run();
/// }
/// ```
#[derive(Default)]
pub struct TargetRangePluginGroup;

impl PluginGroup for TargetRangePluginGroup {
    fn build(self) -> bevy::app::PluginGroupBuilder {
        bevy::app::PluginGroupBuilder::start::<Self>()
            .add(RangeCorePlugin)
            .add(RangeHudPlugin)
            .add(RangeDebugPlugin)
    }
}

/// Core simulation plugin: kinematics, target sweep, culling, input dispatch
/// and scoring.
///
/// Registers components and messages, pins the fixed timestep to 30 Hz and
/// schedules one tick as a chained `FixedUpdate` sequence:
///
/// 1. `sweep_target` - move the target, flipping at the band edges
/// 2. `integrate_shots` - advance every live shot
/// 3. `cull_shots` - retire shots below ground or past the range
/// 4. `apply_controls` - apply at most one player action
/// 5. `spawn_shots` - turn fire snapshots into live shots
/// 6. `score_hits` - count shots inside the scoring band
pub struct RangeCorePlugin;

impl Plugin for RangeCorePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<components::Projectile>()
            .register_type::<components::ShotMarker>()
            .register_type::<components::Target>()
            .register_type::<components::TargetMarker>()
            .register_type::<components::Launcher>()
            .init_resource::<resources::RangeEnvironment>()
            .init_resource::<resources::RangeConfig>()
            .init_resource::<resources::TargetSweep>()
            .init_resource::<resources::Score>()
            .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .add_message::<events::ControlEvent>()
            .add_message::<events::FireEvent>()
            .add_message::<events::TargetHitEvent>()
            .add_message::<events::ShotCulledEvent>()
            .add_systems(Startup, setup_range)
            .add_systems(Update, systems::launcher::keyboard_controls)
            .add_systems(
                FixedUpdate,
                (
                    systems::target::sweep_target,
                    systems::kinematics::integrate_shots,
                    systems::culling::cull_shots,
                    systems::launcher::apply_controls,
                    systems::launcher::spawn_shots,
                    systems::scoring::score_hits,
                )
                    .chain(),
            );
    }
}

/// Spawn the session-lifetime entities: one target, one launcher.
fn setup_range(mut commands: Commands) {
    let target = components::Target::default();
    let marker = components::TargetMarker {
        rendered_x: target.x,
    };
    commands.spawn((
        target,
        marker,
        Transform::from_xyz(50.0, 0.0, 0.0),
        Name::new("Target"),
    ));
    commands.spawn((components::Launcher::default(), Name::new("Launcher")));
}

/// HUD plugin: score readout, aim preview arrow and render-marker tracking.
///
/// # Systems
/// - `update_score_text` - mirrors the hit counter into the score readout
/// - `track_shot_markers` / `track_target_marker` - move sprites by the delta
///   between physics and last-rendered position
/// - `draw_aim_preview` - redraws the launcher arrow every frame
/// - `position_launcher_base` - keeps the base puck at `(0, height)`
pub struct RangeHudPlugin;

impl Plugin for RangeHudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, systems::hud::setup_score_text)
            .add_systems(
                Update,
                (
                    systems::hud::track_shot_markers,
                    systems::hud::track_target_marker,
                    systems::hud::update_score_text,
                    systems::hud::draw_aim_preview,
                    systems::hud::position_launcher_base,
                ),
            );
    }
}

/// Debug plugin for range visualization.
pub struct RangeDebugPlugin;

impl Plugin for RangeDebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, systems::debug::draw_shot_debug);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Projectile;
    use crate::events::{ControlEvent, ShotCulledEvent};
    use crate::resources::{Score, TargetSweep};
    use crate::types::ControlAction;
    use std::time::Duration;

    fn step(app: &mut App) {
        app.world_mut()
            .resource_mut::<Time<Fixed>>()
            .advance_by(Duration::from_secs_f64(1.0 / TICK_RATE_HZ));
        app.world_mut().run_schedule(FixedUpdate);
    }

    #[test]
    fn fired_shot_travels_and_retires_past_the_apex() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(RangeCorePlugin);
        app.update();

        // Hold the target still so the session state stays simple.
        app.world_mut().resource_mut::<TargetSweep>().dx = 0.0;
        app.world_mut()
            .resource_mut::<Messages<ControlEvent>>()
            .write(ControlEvent::new(ControlAction::Fire));

        let mut final_x = 0.0;
        let mut live = 0;
        for _ in 0..400 {
            step(&mut app);
            let mut shots = app.world_mut().query::<&Projectile>();
            live = shots.iter(app.world()).count();
            if let Ok(shot) = shots.single(app.world()) {
                final_x = shot.position.x;
            }
            if live == 0 && final_x > 0.0 {
                break;
            }
        }

        assert_eq!(live, 0, "the shot must leave the live set");
        assert!(final_x > 0.0, "the shot must travel horizontally before retiring");
        assert_eq!(
            app.world().resource::<Messages<ShotCulledEvent>>().len(),
            1
        );
        // Landed short of the target band: no score at 45°/35 from ground level.
        assert_eq!(app.world().resource::<Score>().hits, 0);
    }
}
