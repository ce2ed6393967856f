//! HUD systems - score text, aim preview and render-marker tracking.

use bevy::prelude::*;

use crate::components::{
    Launcher, LauncherBase, Projectile, ScoreText, ShotMarker, Target, TargetMarker,
};
use crate::resources::Score;

/// Spawn the score readout in the top HUD area.
pub fn setup_score_text(mut commands: Commands) {
    commands.spawn((
        Text::new("SCORE = 0"),
        TextFont {
            font_size: 25.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(60.0),
            left: Val::Px(10.0),
            ..default()
        },
        ScoreText,
    ));
}

/// Keep the score readout in sync with the hit counter.
pub fn update_score_text(score: Res<Score>, mut texts: Query<&mut Text, With<ScoreText>>) {
    if !score.is_changed() {
        return;
    }
    for mut text in texts.iter_mut() {
        text.0 = format!("SCORE = {}", score.hits);
    }
}

/// Move each shot marker by the delta between physics and rendered position.
///
/// The marker records the position it last pushed to the transform and never
/// reads the transform back, so the render side can live in any coordinate
/// frame as long as it started aligned.
pub fn track_shot_markers(mut markers: Query<(&Projectile, &mut ShotMarker, &mut Transform)>) {
    for (shot, mut marker, mut transform) in markers.iter_mut() {
        let delta = shot.position - marker.rendered;
        transform.translation += delta.extend(0.0);
        marker.rendered = shot.position;
    }
}

/// Same delta tracking for the target sprite, horizontal only.
pub fn track_target_marker(mut markers: Query<(&Target, &mut TargetMarker, &mut Transform)>) {
    for (target, mut marker, mut transform) in markers.iter_mut() {
        let delta = target.x - marker.rendered_x;
        transform.translation.x += delta;
        marker.rendered_x = target.x;
    }
}

/// Draw the launcher's aim preview arrow.
///
/// Immediate-mode gizmos redraw the whole arrow every frame, so an aim
/// adjustment is reflected without an undraw/redraw pair.
pub fn draw_aim_preview(mut gizmos: Gizmos, launchers: Query<&Launcher>) {
    for launcher in launchers.iter() {
        let base = Vec2::new(0.0, launcher.height);
        gizmos.arrow_2d(base, launcher.preview_tip(), Color::WHITE);
    }
}

/// Keep the launcher base puck at `(0, height)`.
pub fn position_launcher_base(
    launchers: Query<&Launcher>,
    mut bases: Query<&mut Transform, With<LauncherBase>>,
) {
    let Ok(launcher) = launchers.single() else {
        return;
    };
    for mut transform in bases.iter_mut() {
        transform.translation.x = 0.0;
        transform.translation.y = launcher.height;
    }
}
