//! Core components for the target range simulation.

use bevy::prelude::*;

/// Ballistic state of one fired shot.
///
/// Position and velocity live here, not in `Transform`: the physics state is
/// authoritative and the rendered marker catches up to it each frame (see
/// [`ShotMarker`]). Horizontal velocity is constant (no drag); vertical
/// velocity loses `gravity` every integration step.
///
/// # Fields
/// * `position` - Current position in simulation units
/// * `velocity` - Current velocity in simulation units per second
///
/// # Example
/// ```
/// use bevy_target_range::components::Projectile;
///
/// let shot = Projectile::launch(45.0, 35.0, 0.0);
/// assert_eq!(shot.position.y, 0.0);
/// ```
#[derive(Component, Reflect, Default, Clone)]
#[reflect(Component)]
pub struct Projectile {
    /// Current position (simulation units)
    pub position: Vec2,
    /// Current velocity (units/s)
    pub velocity: Vec2,
}

impl Projectile {
    /// Creates a projectile at the launcher muzzle.
    ///
    /// # Arguments
    /// * `angle_deg` - Launch angle in degrees above the horizontal
    /// * `speed` - Initial speed in units per second
    /// * `height` - Launch height; the shot starts at `(0, height)`
    ///
    /// # Returns
    /// A new Projectile with velocity `(speed·cos θ, speed·sin θ)`
    pub fn launch(angle_deg: f32, speed: f32, height: f32) -> Self {
        let theta = angle_deg.to_radians();
        Self {
            position: Vec2::new(0.0, height),
            velocity: Vec2::new(speed * theta.cos(), speed * theta.sin()),
        }
    }

    /// Advances the shot by one timestep using semi-implicit Euler.
    ///
    /// The update order is part of the contract: horizontal position first,
    /// then vertical velocity, then vertical position using the *updated*
    /// velocity. Replaying the same dt sequence from the same initial state
    /// reproduces the trajectory bit for bit.
    ///
    /// # Arguments
    /// * `dt` - Elapsed simulation time since the last step
    /// * `gravity` - Downward acceleration (units/s²)
    pub fn advance(&mut self, dt: f32, gravity: f32) {
        self.position.x += self.velocity.x * dt;
        self.velocity.y -= gravity * dt;
        self.position.y += self.velocity.y * dt;
    }
}

/// Render-tracking state for a shot's on-screen marker.
///
/// Holds the last position that was pushed to the entity's `Transform`. The
/// HUD moves the marker by the delta between the physics position and this
/// field, then records the new position — the render side is never queried.
#[derive(Component, Reflect, Default, Clone)]
#[reflect(Component)]
pub struct ShotMarker {
    /// Last position applied to the rendered transform
    pub rendered: Vec2,
}

impl ShotMarker {
    /// Creates a marker already aligned with the given spawn position.
    pub fn at(position: Vec2) -> Self {
        Self { rendered: position }
    }
}

/// The oscillating target.
///
/// Only holds position and extent; the sweep direction and the flip policy
/// live in the [`sweep_target`](crate::systems::target::sweep_target) system
/// and the [`TargetSweep`](crate::resources::TargetSweep) resource.
///
/// # Fields
/// * `x` - Horizontal center position
/// * `half_width` - Half of the hit span (the span is `x ± half_width`)
#[derive(Component, Reflect, Clone)]
#[reflect(Component)]
pub struct Target {
    /// Horizontal center position
    pub x: f32,
    /// Half of the hit span
    pub half_width: f32,
}

impl Target {
    /// Left and right edges of the hit span.
    ///
    /// # Returns
    /// `(x - half_width, x + half_width)`
    pub fn edges(&self) -> (f32, f32) {
        (self.x - self.half_width, self.x + self.half_width)
    }
}

impl Default for Target {
    /// Target at the left sweep bound with the standard 20-unit span.
    fn default() -> Self {
        Self {
            x: 50.0,
            half_width: 10.0,
        }
    }
}

/// Render-tracking state for the target sprite, mirror of [`ShotMarker`].
#[derive(Component, Reflect, Default, Clone)]
#[reflect(Component)]
pub struct TargetMarker {
    /// Last x position applied to the rendered transform
    pub rendered_x: f32,
}

/// Player-controlled aiming configuration and shot factory.
///
/// Pure configuration for the next shot: adjusting it never affects shots
/// already in flight, because [`Launcher::launch_params`] snapshots the
/// current values by copy.
///
/// # Fields
/// * `angle` - Launch angle in degrees (starts at 45)
/// * `velocity` - Launch speed in units per second (starts at 35)
/// * `height` - Launch height, clamped to ≥ 0 (starts at 0)
///
/// # Example
/// ```
/// use bevy_target_range::components::Launcher;
///
/// let mut launcher = Launcher::default();
/// launcher.adj_angle(5.0);
/// launcher.adj_height(-1000.0);
/// assert_eq!(launcher.angle, 50.0);
/// assert_eq!(launcher.height, 0.0);
/// ```
#[derive(Component, Reflect, Clone)]
#[reflect(Component)]
pub struct Launcher {
    /// Launch angle (degrees)
    pub angle: f32,
    /// Launch speed (units/s)
    pub velocity: f32,
    /// Launch height (units, never negative)
    pub height: f32,
}

impl Default for Launcher {
    /// 45 degrees, speed 35, ground level.
    fn default() -> Self {
        Self {
            angle: 45.0,
            velocity: 35.0,
            height: 0.0,
        }
    }
}

impl Launcher {
    /// Adjusts the launch angle by `delta` degrees. Unclamped.
    pub fn adj_angle(&mut self, delta: f32) {
        self.angle += delta;
    }

    /// Adjusts the launch speed by `delta`. Unclamped.
    pub fn adj_velocity(&mut self, delta: f32) {
        self.velocity += delta;
    }

    /// Adjusts the launch height by `delta`, clamped to a floor of 0.
    pub fn adj_height(&mut self, delta: f32) {
        self.height = (self.height + delta).max(0.0);
    }

    /// Snapshots the current aim as launch parameters for one shot.
    ///
    /// # Returns
    /// A [`LaunchParams`](crate::types::LaunchParams) copy of the current
    /// angle, velocity and height
    pub fn launch_params(&self) -> crate::types::LaunchParams {
        crate::types::LaunchParams::new(self.angle, self.velocity, self.height)
    }

    /// Endpoint of the aim preview arrow, relative to the world origin.
    ///
    /// The arrow runs from the base at `(0, height)` to
    /// `(velocity·cos θ, velocity·sin θ + height)`.
    pub fn preview_tip(&self) -> Vec2 {
        let theta = self.angle.to_radians();
        Vec2::new(
            self.velocity * theta.cos(),
            self.velocity * theta.sin() + self.height,
        )
    }
}

/// Marker for the sprite showing the launcher base puck.
#[derive(Component)]
pub struct LauncherBase;

/// Marker for the HUD score text.
#[derive(Component)]
pub struct ScoreText;
