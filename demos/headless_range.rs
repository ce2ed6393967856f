//! Headless range run: fires one scripted shot and traces it to retirement.

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use bevy_target_range::prelude::*;
use std::time::Duration;

fn main() {
    println!("Starting headless range simulation...");
    println!("One shot at 60°, speed 40, height 5; running at 30 ticks/s.");

    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_secs_f64(1.0 / 30.0),
        )))
        .add_plugins(RangeCorePlugin)
        .add_systems(Startup, fire_scripted_shot)
        .add_systems(FixedUpdate, report_flight)
        .run();
}

fn fire_scripted_shot(mut fire_events: MessageWriter<FireEvent>) {
    fire_events.write(FireEvent::new(LaunchParams::new(60.0, 40.0, 5.0)));
}

fn report_flight(
    shots: Query<&Projectile>,
    mut hits: MessageReader<TargetHitEvent>,
    mut culled: MessageReader<ShotCulledEvent>,
    mut app_exit: MessageWriter<AppExit>,
    mut ticks: Local<u32>,
) {
    *ticks += 1;
    if *ticks % 30 == 0 {
        if let Ok(shot) = shots.single() {
            println!(
                "[TICK {:>4}] x = {:>7.2}, y = {:>7.2}, vy = {:>7.2}",
                *ticks, shot.position.x, shot.position.y, shot.velocity.y
            );
        }
    }

    for hit in hits.read() {
        println!(
            "[HIT] shot in band at ({:.2}, {:.2}), target at {:.2}",
            hit.shot_position.x, hit.shot_position.y, hit.target_x
        );
    }

    for event in culled.read() {
        println!(
            "[RETIRED] shot left the range at ({:.2}, {:.2}) after {} ticks",
            event.final_position.x, event.final_position.y, *ticks
        );
        app_exit.write(AppExit::Success);
    }
}
