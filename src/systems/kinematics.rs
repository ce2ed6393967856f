//! Kinematics system - semi-implicit Euler integration for shots in flight.

use bevy::prelude::*;

use crate::components::Projectile;
use crate::resources::RangeEnvironment;

/// Advance every live shot by one fixed timestep.
///
/// Runs in FixedUpdate for deterministic simulation. The integration itself
/// lives in [`Projectile::advance`]; this system only feeds it the fixed dt
/// and the shared gravity.
///
/// # Arguments
/// * `time` - Bevy FixedTime resource to get delta time
/// * `env` - Range environment resource with the gravity constant
/// * `query` - Query over all live shots
pub fn integrate_shots(
    time: Res<Time<Fixed>>,
    env: Res<RangeEnvironment>,
    mut query: Query<&mut Projectile>,
) {
    let dt = time.delta_secs();

    for mut shot in query.iter_mut() {
        shot.advance(dt, env.gravity);
    }
}
