use bevy::prelude::*;

use crate::components::{Projectile, Target};
use crate::resources::RangeConfig;

/// Draw debug gizmos for shots and the target span.
///
/// Draws each shot's position and velocity vector, and the current hit span
/// at ground level.
pub fn draw_shot_debug(
    mut gizmos: Gizmos,
    config: Res<RangeConfig>,
    shots: Query<&Projectile>,
    targets: Query<&Target>,
) {
    if !config.debug_draw {
        return;
    }

    for shot in shots.iter() {
        gizmos.circle_2d(shot.position, 0.5, Color::srgb(1.0, 0.0, 0.0));

        // Velocity vector, scaled down for visibility
        let end = shot.position + shot.velocity * 0.1;
        gizmos.line_2d(shot.position, end, Color::srgb(0.0, 1.0, 0.0));
    }

    for target in targets.iter() {
        let (left, right) = target.edges();
        gizmos.line_2d(
            Vec2::new(left, 0.0),
            Vec2::new(right, 0.0),
            Color::srgb(1.0, 1.0, 0.0),
        );
    }
}
