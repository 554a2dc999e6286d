// Baseline states

use crate::game::fsm::behavior::StateFlow;
use crate::game::fsm::context::CharacterContext;
use crate::game::fsm::state::StateType;
use log::{info, trace};

/// Bottom state, also the fallback when a request cannot be honoured
#[derive(Debug, Default)]
pub struct NoneState;

impl NoneState {
    pub fn new() -> Self {
        Self
    }

    pub fn enter(&mut self, _ctx: &mut dyn CharacterContext) -> StateFlow {
        info!(
            target: StateType::None.log_target(),
            "'None' state selected, no state to transition to"
        );
        StateFlow::Continue
    }
}

/// Standing still. The idle timeout itself is tracked by the character
///
/// Entering Idle cues no clip of its own; the animator falls back to its idle
/// loop once the locomotion flags and the leaving state's exit cue settle.
#[derive(Debug, Default)]
pub struct IdleState;

impl IdleState {
    pub fn new() -> Self {
        Self
    }

    pub fn enter(&mut self, _ctx: &mut dyn CharacterContext) -> StateFlow {
        trace!(target: StateType::Idle.log_target(), "Idle bookkeeping reset");
        StateFlow::Continue
    }
}
