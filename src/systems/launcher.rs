//! Launcher systems - input dispatch, aim adjustment and shot spawning.

use bevy::prelude::*;

use crate::components::{Launcher, Projectile, ShotMarker};
use crate::events::{ControlEvent, FireEvent};
use crate::resources::RangeConfig;
use crate::types::ControlAction;

/// Translate freshly pressed keys into control events.
///
/// Runs in Update. At most one event is emitted per poll, matching a
/// key-at-a-time input source; unmapped keys are ignored. The input resource
/// is optional so headless apps without an input plugin can still run the
/// simulation.
pub fn keyboard_controls(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut controls: MessageWriter<ControlEvent>,
) {
    let Some(keys) = keys else {
        return;
    };

    for key in ControlAction::KEYS {
        if keys.just_pressed(key) {
            if let Some(action) = ControlAction::from_key(key) {
                controls.write(ControlEvent::new(action));
                break;
            }
        }
    }
}

/// Apply at most one pending control action per fixed tick.
///
/// Adjustments mutate the launcher in place; `Fire` snapshots the current aim
/// into a [`FireEvent`]; `Quit` requests a clean exit. Actions beyond the
/// first stay queued for the following ticks.
///
/// # Arguments
/// * `config` - Range configuration with the adjustment step
/// * `controls` - Pending control events
/// * `launchers` - The (single) launcher
/// * `fire_events` - Message writer for fire snapshots
/// * `app_exit` - Message writer for session shutdown
pub fn apply_controls(
    config: Res<RangeConfig>,
    mut controls: MessageReader<ControlEvent>,
    mut launchers: Query<&mut Launcher>,
    mut fire_events: MessageWriter<FireEvent>,
    mut app_exit: MessageWriter<AppExit>,
) {
    let Some(event) = controls.read().next().copied() else {
        return;
    };
    let Ok(mut launcher) = launchers.single_mut() else {
        return;
    };

    let step = config.adjust_step;
    match event.action {
        ControlAction::RaiseAngle => launcher.adj_angle(step),
        ControlAction::LowerAngle => launcher.adj_angle(-step),
        ControlAction::IncreaseVelocity => launcher.adj_velocity(step),
        ControlAction::DecreaseVelocity => launcher.adj_velocity(-step),
        ControlAction::RaiseLauncher => launcher.adj_height(step),
        ControlAction::LowerLauncher => launcher.adj_height(-step),
        ControlAction::Fire => {
            let params = launcher.launch_params();
            debug!(
                "firing: angle {:.1}°, speed {:.1}, height {:.1}",
                params.angle, params.velocity, params.height
            );
            fire_events.write(FireEvent::new(params));
        }
        ControlAction::Quit => {
            info!("quit requested");
            app_exit.write(AppExit::Success);
        }
    }
}

/// Spawn one live shot entity per fire event.
///
/// The entity carries the ballistic state, its render-tracking marker already
/// aligned with the muzzle, and a transform at the spawn point.
pub fn spawn_shots(mut commands: Commands, mut fire_events: MessageReader<FireEvent>) {
    for event in fire_events.read() {
        let shot = Projectile::launch(event.params.angle, event.params.velocity, event.params.height);
        let marker = ShotMarker::at(shot.position);
        let transform = Transform::from_translation(shot.position.extend(0.0));
        commands.spawn((shot, marker, transform, Name::new("Shot")));
    }
}
