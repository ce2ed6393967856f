//! Common types for the target range simulation.

use bevy::prelude::*;

/// One discrete player action.
///
/// The keyboard layer maps pressed keys onto these; the dispatcher applies at
/// most one per fixed tick. Keys outside the mapping are no-ops.
///
/// # Variants
/// * `RaiseAngle` / `LowerAngle` - Tilt the launcher by the adjustment step
/// * `IncreaseVelocity` / `DecreaseVelocity` - Change launch speed
/// * `RaiseLauncher` / `LowerLauncher` - Change base height (floored at 0)
/// * `Fire` - Snapshot the launcher and spawn a shot
/// * `Quit` - End the session
///
/// # Example
/// ```
/// use bevy::prelude::KeyCode;
/// use bevy_target_range::types::ControlAction;
///
/// assert_eq!(ControlAction::from_key(KeyCode::KeyF), Some(ControlAction::Fire));
/// assert_eq!(ControlAction::from_key(KeyCode::KeyZ), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Reflect)]
pub enum ControlAction {
    /// Arrow up: angle +step
    RaiseAngle,
    /// Arrow down: angle -step
    LowerAngle,
    /// Arrow right: speed +step
    IncreaseVelocity,
    /// Arrow left: speed -step
    DecreaseVelocity,
    /// E: height +step
    RaiseLauncher,
    /// D: height -step (floored at 0)
    LowerLauncher,
    /// F: fire a shot
    Fire,
    /// Q: quit the session
    Quit,
}

impl ControlAction {
    /// Maps a key to its action, if any.
    ///
    /// # Arguments
    /// * `key` - The pressed key
    ///
    /// # Returns
    /// The matching action, or `None` for unmapped keys
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::ArrowUp => Some(Self::RaiseAngle),
            KeyCode::ArrowDown => Some(Self::LowerAngle),
            KeyCode::ArrowRight => Some(Self::IncreaseVelocity),
            KeyCode::ArrowLeft => Some(Self::DecreaseVelocity),
            KeyCode::KeyE => Some(Self::RaiseLauncher),
            KeyCode::KeyD => Some(Self::LowerLauncher),
            KeyCode::KeyF => Some(Self::Fire),
            KeyCode::KeyQ => Some(Self::Quit),
            _ => None,
        }
    }

    /// All mapped keys, in dispatch priority order.
    pub const KEYS: [KeyCode; 8] = [
        KeyCode::ArrowUp,
        KeyCode::ArrowDown,
        KeyCode::ArrowRight,
        KeyCode::ArrowLeft,
        KeyCode::KeyE,
        KeyCode::KeyD,
        KeyCode::KeyF,
        KeyCode::KeyQ,
    ];
}

/// Launch parameter snapshot for one shot.
///
/// A copy of the launcher's aim taken at fire time; later launcher
/// adjustments never reach a shot built from this.
///
/// # Fields
/// * `angle` - Launch angle in degrees
/// * `velocity` - Launch speed in units per second
/// * `height` - Launch height in units
///
/// # Example
/// ```
/// use bevy_target_range::types::LaunchParams;
///
/// let params = LaunchParams::new(45.0, 35.0, 0.0).with_height(5.0);
/// assert_eq!(params.height, 5.0);
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Reflect)]
pub struct LaunchParams {
    pub angle: f32,
    pub velocity: f32,
    pub height: f32,
}

impl Default for LaunchParams {
    /// Matches the launcher's starting aim.
    fn default() -> Self {
        Self {
            angle: 45.0,
            velocity: 35.0,
            height: 0.0,
        }
    }
}

impl LaunchParams {
    /// Creates launch parameters from explicit values.
    pub fn new(angle: f32, velocity: f32, height: f32) -> Self {
        Self {
            angle,
            velocity,
            height,
        }
    }

    /// Sets the launch angle.
    ///
    /// # Returns
    /// The modified LaunchParams for method chaining
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the launch speed.
    ///
    /// # Returns
    /// The modified LaunchParams for method chaining
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the launch height.
    ///
    /// # Returns
    /// The modified LaunchParams for method chaining
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mapped_key_resolves_and_unmapped_keys_do_not() {
        for key in ControlAction::KEYS {
            assert!(ControlAction::from_key(key).is_some());
        }
        assert_eq!(ControlAction::from_key(KeyCode::Space), None);
        assert_eq!(ControlAction::from_key(KeyCode::KeyW), None);
    }

    #[test]
    fn launch_params_builder_chains() {
        let params = LaunchParams::default()
            .with_angle(60.0)
            .with_velocity(40.0)
            .with_height(2.0);
        assert_eq!(params, LaunchParams::new(60.0, 40.0, 2.0));
    }
}
