//! Windowed target practice session.
//!
//! Controls: Up/Down adjust the angle, Left/Right the launch speed, E/D the
//! base height, F fires, Q quits.

use bevy::prelude::*;
use bevy_target_range::prelude::*;

// World framing: the range spans roughly -10..210 on both axes.
const WORLD_CENTER: Vec2 = Vec2::new(100.0, 100.0);
const WORLD_HEIGHT: f32 = 220.0;
const WINDOW_HEIGHT: f32 = 800.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Target Practice".to_string(),
                resolution: (1000, WINDOW_HEIGHT as u32).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(TargetRangePluginGroup)
        .add_systems(Startup, setup)
        .add_systems(Update, (dress_target, dress_shots))
        .run();
}

fn setup(mut commands: Commands) {
    // Camera scaled so the window shows the whole range.
    let scale = WORLD_HEIGHT / WINDOW_HEIGHT;
    commands.spawn((
        Camera2d,
        Transform::from_translation(WORLD_CENTER.extend(0.0)).with_scale(Vec3::splat(scale)),
    ));

    // Launcher base puck at the origin; the HUD keeps it at (0, height).
    commands.spawn((
        Sprite {
            color: Color::srgb(0.9, 0.1, 0.1),
            custom_size: Some(Vec2::splat(5.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        LauncherBase,
    ));

    // Ground axis from -5 to 205 with tick marks and labels every 50 units.
    commands.spawn((
        Sprite {
            color: Color::WHITE,
            custom_size: Some(Vec2::new(210.0, 0.4)),
            ..default()
        },
        Transform::from_xyz(100.0, 0.0, 0.0),
    ));
    for i in (0..=200).step_by(50) {
        let x = i as f32;
        commands.spawn((
            Sprite {
                color: Color::WHITE,
                custom_size: Some(Vec2::new(0.4, 2.5)),
                ..default()
            },
            Transform::from_xyz(x, 1.25, 0.0),
        ));
        commands.spawn((
            Text2d::new(format!("{i}")),
            TextFont {
                font_size: 24.0,
                ..default()
            },
            Transform::from_xyz(x, -6.0, 0.0).with_scale(Vec3::splat(0.15)),
        ));
    }

    // Help text.
    commands.spawn((
        Text::new(
            "HIT THE MOVING TARGET\n\n\
             f = fire\n\
             e & d = adjust initial height\n\
             Up & Down = adjust the angle\n\
             Left & Right = adjust velocity\n\
             q to quit",
        ),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            right: Val::Px(10.0),
            ..default()
        },
    ));
}

/// Attach a sprite to the target entity the core spawned.
fn dress_target(mut commands: Commands, targets: Query<(Entity, &Target), Added<Target>>) {
    for (entity, target) in targets.iter() {
        commands.entity(entity).insert(Sprite {
            color: Color::srgb(0.83, 0.83, 0.83),
            custom_size: Some(Vec2::new(target.half_width * 2.0, 10.0)),
            ..default()
        });
    }
}

/// Attach a marker sprite to each freshly fired shot.
fn dress_shots(mut commands: Commands, shots: Query<Entity, Added<Projectile>>) {
    for entity in shots.iter() {
        commands.entity(entity).insert(Sprite {
            color: Color::srgb(0.9, 0.1, 0.1),
            custom_size: Some(Vec2::splat(5.0)),
            ..default()
        });
    }
}
