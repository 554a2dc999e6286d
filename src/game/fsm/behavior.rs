// Uniform enter/update/exit contract over the per-state behaviors

use super::config::StateConfig;
use super::context::CharacterContext;
use super::error::FsmError;
use super::state::StateType;
use super::states::{
    AttackKind, AttackState, FallState, HitStunState, IdleState, JumpState, NoneState, WalkState,
};

/// What a behavior wants after a lifecycle call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFlow {
    /// Stay in the current tenure
    Continue,
    /// Leave the current tenure for the given state
    Exit(StateType),
}

/// The behavior owned by one tenure
#[derive(Debug)]
pub enum StateBehavior {
    None(NoneState),
    Idle(IdleState),
    Walk(WalkState),
    Jump(JumpState),
    Fall(FallState),
    Attack(AttackState),
    AirborneAttack(AttackState),
    HitStun(HitStunState),
}

impl Default for StateBehavior {
    fn default() -> Self {
        Self::None(NoneState::new())
    }
}

impl StateBehavior {
    /// Construct a fresh behavior for `state`
    ///
    /// Reserved and unknown states have no behavior and yield
    /// `InvalidStateRequested`; the caller decides how to recover.
    pub fn build(state: StateType, config: &StateConfig) -> Result<Self, FsmError> {
        let missing = || FsmError::ConfigurationMissing { state };

        let behavior = match state {
            StateType::None => Self::None(NoneState::new()),
            StateType::Idle => Self::Idle(IdleState::new()),
            StateType::Walk => Self::Walk(WalkState::new(config.movement.ok_or_else(missing)?)),
            StateType::Jump => Self::Jump(JumpState::new(config.jump.ok_or_else(missing)?)),
            StateType::Fall => Self::Fall(FallState::new(config.fall.ok_or_else(missing)?)),
            StateType::Attack => {
                let attack = config.attack.as_ref().ok_or_else(missing)?;
                Self::Attack(AttackState::new(AttackKind::Ground, attack.moveset.clone()))
            }
            StateType::AirborneAttack => {
                let attack = config.attack.as_ref().ok_or_else(missing)?;
                Self::AirborneAttack(AttackState::new(
                    AttackKind::Airborne,
                    attack.moveset.clone(),
                ))
            }
            StateType::HitStun => {
                let hit_stun = config.hit_stun.ok_or_else(missing)?;
                Self::HitStun(HitStunState::new(hit_stun.stun_frames))
            }
            _ => return Err(FsmError::InvalidStateRequested { state }),
        };

        Ok(behavior)
    }

    /// Check if `state` has a behavior this machine can enter
    pub fn is_implemented(state: StateType) -> bool {
        matches!(
            state,
            StateType::None
                | StateType::Idle
                | StateType::Walk
                | StateType::Jump
                | StateType::Fall
                | StateType::Attack
                | StateType::AirborneAttack
                | StateType::HitStun
        )
    }

    pub fn state_type(&self) -> StateType {
        match self {
            Self::None(_) => StateType::None,
            Self::Idle(_) => StateType::Idle,
            Self::Walk(_) => StateType::Walk,
            Self::Jump(_) => StateType::Jump,
            Self::Fall(_) => StateType::Fall,
            Self::Attack(_) => StateType::Attack,
            Self::AirborneAttack(_) => StateType::AirborneAttack,
            Self::HitStun(_) => StateType::HitStun,
        }
    }

    pub fn enter(&mut self, ctx: &mut dyn CharacterContext) -> StateFlow {
        match self {
            Self::None(state) => state.enter(ctx),
            Self::Idle(state) => state.enter(ctx),
            Self::Walk(_) => StateFlow::Continue,
            Self::Jump(state) => state.enter(ctx),
            Self::Fall(state) => state.enter(ctx),
            Self::Attack(state) | Self::AirborneAttack(state) => state.enter(ctx),
            Self::HitStun(state) => state.enter(ctx),
        }
    }

    pub fn update(&mut self, ctx: &mut dyn CharacterContext) -> StateFlow {
        match self {
            Self::None(_) | Self::Idle(_) => StateFlow::Continue,
            Self::Walk(state) => state.update(ctx),
            Self::Jump(state) => state.update(ctx),
            Self::Fall(state) => state.update(ctx),
            Self::Attack(state) | Self::AirborneAttack(state) => state.update(ctx),
            Self::HitStun(state) => state.update(ctx),
        }
    }

    pub fn exit(&mut self, ctx: &mut dyn CharacterContext) {
        match self {
            Self::Walk(state) => state.exit(ctx),
            Self::Fall(state) => state.exit(ctx),
            Self::Attack(state) | Self::AirborneAttack(state) => state.exit(ctx),
            Self::HitStun(state) => state.exit(ctx),
            Self::None(_) | Self::Idle(_) | Self::Jump(_) => {}
        }
    }

    /// Frames spent in a timed tenure (attacks and hit stun)
    pub fn elapsed_frames(&self) -> Option<u32> {
        match self {
            Self::Attack(state) | Self::AirborneAttack(state) => Some(state.elapsed_frames()),
            Self::HitStun(state) => Some(state.elapsed_frames()),
            _ => None,
        }
    }

    /// The attack tenure, if this is one
    pub fn as_attack(&self) -> Option<&AttackState> {
        match self {
            Self::Attack(state) | Self::AirborneAttack(state) => Some(state),
            _ => None,
        }
    }
}
