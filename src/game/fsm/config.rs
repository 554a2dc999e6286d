// Per-state tuning supplied when a state is constructed

use crate::game::combat::Moveset;
use std::sync::Arc;

/// Walk tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementConfig {
    /// Horizontal speed, scaled by the tick duration
    pub move_speed: f32,
    /// Multiplier applied when walking away from the opponent
    pub backward_speed_factor: f32,
}

/// Jump tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpConfig {
    /// Vertical velocity given on take-off
    pub jump_force: f32,
}

/// Fall tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallConfig {
    /// Extra downward force while descending
    pub fall_gravity_multiplier: f32,
    /// Downward force while still rising, cuts the jump short
    pub jump_halt_force: f32,
}

/// Attack tuning
#[derive(Debug, Clone, PartialEq)]
pub struct AttackConfig {
    pub moveset: Arc<Moveset>,
}

/// Hit stun tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitStunConfig {
    /// Stun length used when the hit does not specify one
    pub stun_frames: u32,
}

pub const STANDARD_MOVEMENT: MovementConfig = MovementConfig {
    move_speed: 300.0,
    backward_speed_factor: 0.5,
};

pub const STANDARD_JUMP: JumpConfig = JumpConfig { jump_force: 12.0 };

pub const STANDARD_FALL: FallConfig = FallConfig {
    fall_gravity_multiplier: 7.0,
    jump_halt_force: 6.0,
};

pub const STANDARD_HIT_STUN: HitStunConfig = HitStunConfig { stun_frames: 18 };

/// Configuration blocks for every configurable state
///
/// A missing block is a wiring error for the state that needs it; the
/// machine refuses that transition rather than substituting defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateConfig {
    pub movement: Option<MovementConfig>,
    pub jump: Option<JumpConfig>,
    pub fall: Option<FallConfig>,
    pub attack: Option<AttackConfig>,
    pub hit_stun: Option<HitStunConfig>,
}

impl StateConfig {
    /// Empty configuration; only None and Idle can be entered
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fully populated configuration with the tuned values
    pub fn standard(moveset: Arc<Moveset>) -> Self {
        Self {
            movement: Some(STANDARD_MOVEMENT),
            jump: Some(STANDARD_JUMP),
            fall: Some(STANDARD_FALL),
            attack: Some(AttackConfig { moveset }),
            hit_stun: Some(STANDARD_HIT_STUN),
        }
    }

    pub fn with_movement(mut self, movement: MovementConfig) -> Self {
        self.movement = Some(movement);
        self
    }

    pub fn with_jump(mut self, jump: JumpConfig) -> Self {
        self.jump = Some(jump);
        self
    }

    pub fn with_fall(mut self, fall: FallConfig) -> Self {
        self.fall = Some(fall);
        self
    }

    pub fn with_attack(mut self, moveset: Arc<Moveset>) -> Self {
        self.attack = Some(AttackConfig { moveset });
        self
    }

    pub fn with_hit_stun(mut self, hit_stun: HitStunConfig) -> Self {
        self.hit_stun = Some(hit_stun);
        self
    }
}
