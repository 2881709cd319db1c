//! Player input for one tick

use energetic_engine::foundation::math::Vec2;

/// Thrust along the aim direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Thrust {
    /// No thrust; inertial damping may brake
    #[default]
    None,
    /// Accelerate toward the aim point
    Forward,
    /// Accelerate away from the aim point
    Backward,
}

/// Sideways thrust relative to the aim direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strafe {
    /// No strafing; inertial damping may brake
    #[default]
    None,
    /// Strafe to the left of the aim direction
    Left,
    /// Strafe to the right of the aim direction
    Right,
}

/// Everything the player does during one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerControls {
    /// Forward/backward thrust
    pub thrust: Thrust,
    /// Sideways thrust
    pub strafe: Strafe,
    /// World point the ship faces and fires at
    pub aim: Vec2,
    /// Fire one projectile toward `aim`
    pub fire: bool,
    /// Switch inertial damping on or off
    pub toggle_damping: bool,
}

impl PlayerControls {
    /// Idle controls facing `aim`
    pub fn aiming_at(aim: Vec2) -> Self {
        Self {
            aim,
            ..Self::default()
        }
    }
}
