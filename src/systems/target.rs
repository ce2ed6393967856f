//! Target motion system - horizontal sweep with deferred direction flips.

use bevy::prelude::*;

use crate::components::Target;
use crate::resources::{RangeConfig, TargetSweep};

/// Sweep the target one step and flip direction at the band edges.
///
/// The flip test runs *before* the move and uses strict comparisons against
/// the sweep bounds, so the target only reverses on the tick after its
/// position has left [min, max]. The one-tick overshoot is part of the
/// motion contract, kept exactly.
///
/// # Arguments
/// * `config` - Range configuration with the sweep bounds
/// * `sweep` - Current signed step
/// * `targets` - The (single) target
pub fn sweep_target(
    config: Res<RangeConfig>,
    mut sweep: ResMut<TargetSweep>,
    mut targets: Query<&mut Target>,
) {
    let Ok(mut target) = targets.single_mut() else {
        return;
    };

    if target.x > config.target_max_x || target.x < config.target_min_x {
        sweep.dx = -sweep.dx;
    }
    target.x += sweep.dx;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::TargetMarker;
    use crate::RangeCorePlugin;
    use std::time::Duration;

    fn app_with_target(x: f32, dx: f32) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(RangeCorePlugin);
        app.update();

        let mut targets = app.world_mut().query::<&mut Target>();
        targets.single_mut(app.world_mut()).unwrap().x = x;
        app.world_mut().resource_mut::<TargetSweep>().dx = dx;
        app
    }

    fn step(app: &mut App) {
        app.world_mut()
            .resource_mut::<Time<Fixed>>()
            .advance_by(Duration::from_secs_f64(1.0 / 30.0));
        app.world_mut().run_schedule(FixedUpdate);
    }

    #[test]
    fn flips_to_rightward_below_the_left_bound() {
        let mut app = app_with_target(49.9, -0.1);
        step(&mut app);
        assert!(app.world().resource::<TargetSweep>().dx > 0.0);
        let mut targets = app.world_mut().query::<&Target>();
        let x = targets.single(app.world()).unwrap().x;
        assert!((x - 50.0).abs() < 1e-4);
    }

    #[test]
    fn flips_to_leftward_above_the_right_bound() {
        let mut app = app_with_target(170.1, 0.1);
        step(&mut app);
        assert!(app.world().resource::<TargetSweep>().dx < 0.0);
    }

    #[test]
    fn keeps_direction_inside_the_band() {
        let mut app = app_with_target(100.0, 0.1);
        step(&mut app);
        assert!(app.world().resource::<TargetSweep>().dx > 0.0);
        let mut targets = app.world_mut().query::<&Target>();
        let x = targets.single(app.world()).unwrap().x;
        assert!((x - 100.1).abs() < 1e-4);
    }

    #[test]
    fn overshoots_one_tick_before_reversing() {
        // At exactly the bound the strict compare does not flip yet.
        let mut app = app_with_target(170.0, 0.1);
        step(&mut app);
        assert!(app.world().resource::<TargetSweep>().dx > 0.0);
        // Now at 170.1, outside the band: the next tick reverses.
        step(&mut app);
        assert!(app.world().resource::<TargetSweep>().dx < 0.0);
    }

    #[test]
    fn startup_spawns_one_target_with_aligned_marker() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(RangeCorePlugin);
        app.update();

        let mut q = app.world_mut().query::<(&Target, &TargetMarker)>();
        let (target, marker) = q.single(app.world()).unwrap();
        assert_eq!(target.x, 50.0);
        assert_eq!(marker.rendered_x, target.x);
    }
}
