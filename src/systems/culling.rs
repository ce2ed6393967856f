//! Culling system - retire shots that leave the valid simulation bounds.

use bevy::prelude::*;

use crate::components::Projectile;
use crate::events::ShotCulledEvent;
use crate::resources::RangeConfig;

/// Despawn every shot that has fallen below ground or flown past the range.
///
/// Runs immediately after integration, so a shot is removed within the same
/// tick its `y` first turns negative or its `x` reaches the cull bound. The
/// survivors keep their spawn order; each despawn writes exactly one
/// [`ShotCulledEvent`].
///
/// # Arguments
/// * `commands` - Bevy Commands for entity despawning
/// * `config` - Range configuration with the horizontal cull bound
/// * `culled` - Message writer for retirement notifications
/// * `shots` - Query over all live shots
pub fn cull_shots(
    mut commands: Commands,
    config: Res<RangeConfig>,
    mut culled: MessageWriter<ShotCulledEvent>,
    shots: Query<(Entity, &Projectile)>,
) {
    for (entity, shot) in shots.iter() {
        if shot.position.y >= 0.0 && shot.position.x < config.max_range {
            continue;
        }

        debug!(
            "culling shot at ({:.2}, {:.2})",
            shot.position.x, shot.position.y
        );
        culled.write(ShotCulledEvent {
            shot: entity,
            final_position: shot.position,
        });
        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ShotMarker;
    use crate::RangeCorePlugin;
    use std::time::Duration;

    fn step(app: &mut App) {
        app.world_mut()
            .resource_mut::<Time<Fixed>>()
            .advance_by(Duration::from_secs_f64(1.0 / 30.0));
        app.world_mut().run_schedule(FixedUpdate);
    }

    #[test]
    fn shot_is_removed_the_tick_it_drops_below_ground() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(RangeCorePlugin);
        app.update();

        let shot = Projectile::launch(45.0, 10.0, 0.0);
        let marker = ShotMarker::at(shot.position);
        let entity = app.world_mut().spawn((shot, marker)).id();

        let mut survived_a_negative_y = false;
        for _ in 0..300 {
            step(&mut app);
            match app.world().get::<Projectile>(entity) {
                Some(shot) => {
                    if shot.position.y < 0.0 {
                        survived_a_negative_y = true;
                    }
                }
                None => break,
            }
        }

        assert!(
            app.world().get::<Projectile>(entity).is_none(),
            "shot should have been culled"
        );
        assert!(
            !survived_a_negative_y,
            "a shot must never outlive the tick its y turns negative"
        );
        let culled = app.world().resource::<Messages<ShotCulledEvent>>();
        assert_eq!(culled.len(), 1, "retirement must be reported exactly once");
    }

    #[test]
    fn shot_is_removed_at_the_horizontal_bound() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(RangeCorePlugin);
        app.update();

        // Flat and fast: reaches x = 200 long before it can drop below ground.
        let entity = app
            .world_mut()
            .spawn(Projectile {
                position: Vec2::new(199.9, 50.0),
                velocity: Vec2::new(30.0, 0.0),
            })
            .id();

        step(&mut app);
        assert!(app.world().get::<Projectile>(entity).is_none());
    }

    #[test]
    fn in_bounds_shots_survive() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(RangeCorePlugin);
        app.update();

        let entity = app
            .world_mut()
            .spawn(Projectile {
                position: Vec2::new(10.0, 50.0),
                velocity: Vec2::ZERO,
            })
            .id();

        step(&mut app);
        assert!(app.world().get::<Projectile>(entity).is_some());
    }
}
