//! Scoring system - the hit-detection rule against the target span.

use bevy::prelude::*;

use crate::components::{Projectile, Target};
use crate::events::TargetHitEvent;
use crate::resources::{RangeConfig, Score};

/// Count every shot currently inside the scoring band.
///
/// A shot scores when it is strictly between the target edges and below the
/// scoring height. The test re-triggers on every tick the condition holds, so
/// a shot lingering inside the band scores once per tick until it is culled —
/// that repeat count is the defined rule and must not be deduplicated.
///
/// # Arguments
/// * `config` - Range configuration with the scoring band ceiling
/// * `score` - Running hit counter
/// * `hits` - Message writer for hit notifications
/// * `targets` - The (single) target
/// * `shots` - Query over all live shots
pub fn score_hits(
    config: Res<RangeConfig>,
    mut score: ResMut<Score>,
    mut hits: MessageWriter<TargetHitEvent>,
    targets: Query<&Target>,
    shots: Query<(Entity, &Projectile)>,
) {
    let Ok(target) = targets.single() else {
        return;
    };
    let (left, right) = target.edges();

    for (entity, shot) in shots.iter() {
        let x = shot.position.x;
        if left < x && x < right && shot.position.y < config.scoring_height {
            score.hits += 1;
            debug!("hit at x {:.2}, score {}", x, score.hits);
            hits.write(TargetHitEvent {
                shot: entity,
                shot_position: shot.position,
                target_x: target.x,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::TargetSweep;
    use crate::RangeCorePlugin;
    use std::time::Duration;

    fn app_with_fixed_target(x: f32) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(RangeCorePlugin);
        app.update();

        let mut targets = app.world_mut().query::<&mut Target>();
        targets.single_mut(app.world_mut()).unwrap().x = x;
        app.world_mut().resource_mut::<TargetSweep>().dx = 0.0;
        app
    }

    fn step(app: &mut App) {
        app.world_mut()
            .resource_mut::<Time<Fixed>>()
            .advance_by(Duration::from_secs_f64(1.0 / 30.0));
        app.world_mut().run_schedule(FixedUpdate);
    }

    fn hits(app: &App) -> u32 {
        app.world().resource::<Score>().hits
    }

    #[test]
    fn one_tick_in_band_scores_once() {
        let mut app = app_with_fixed_target(100.0);
        app.world_mut().spawn(Projectile {
            position: Vec2::new(100.0, 0.5),
            velocity: Vec2::ZERO,
        });

        step(&mut app);
        assert_eq!(hits(&app), 1);
    }

    #[test]
    fn lingering_shot_retriggers_each_tick() {
        let mut app = app_with_fixed_target(100.0);
        app.world_mut().spawn(Projectile {
            position: Vec2::new(100.0, 0.5),
            velocity: Vec2::ZERO,
        });

        // Under gravity alone the shot stays in-band and above ground for
        // three ticks; each one scores again.
        step(&mut app);
        step(&mut app);
        step(&mut app);
        assert_eq!(hits(&app), 3);
        assert_eq!(
            app.world().resource::<Messages<TargetHitEvent>>().len(),
            3
        );
    }

    #[test]
    fn shots_outside_the_span_or_above_the_band_do_not_score() {
        let mut app = app_with_fixed_target(100.0);
        // On the edge: the interval is open.
        app.world_mut().spawn(Projectile {
            position: Vec2::new(110.0, 0.5),
            velocity: Vec2::ZERO,
        });
        // In the span but above the band.
        app.world_mut().spawn(Projectile {
            position: Vec2::new(100.0, 5.0),
            velocity: Vec2::ZERO,
        });

        step(&mut app);
        assert_eq!(hits(&app), 0);
    }
}
