// Reeling from a hit

use crate::game::fsm::behavior::StateFlow;
use crate::game::fsm::context::CharacterContext;
use crate::game::fsm::state::StateType;

#[derive(Debug)]
pub struct HitStunState {
    stun_frames: u32,
    elapsed_frames: u32,
}

impl HitStunState {
    pub fn new(stun_frames: u32) -> Self {
        Self {
            stun_frames,
            elapsed_frames: 0,
        }
    }

    pub fn enter(&mut self, ctx: &mut dyn CharacterContext) -> StateFlow {
        ctx.play_animation("HitStun");
        StateFlow::Continue
    }

    pub fn update(&mut self, ctx: &mut dyn CharacterContext) -> StateFlow {
        self.elapsed_frames += 1;
        if self.elapsed_frames < self.stun_frames {
            return StateFlow::Continue;
        }

        if ctx.is_grounded() {
            StateFlow::Exit(StateType::Idle)
        } else {
            StateFlow::Exit(StateType::Fall)
        }
    }

    /// Reset the animator out of the stun clip
    pub fn exit(&mut self, ctx: &mut dyn CharacterContext) {
        ctx.play_animation("Idle");
    }

    pub fn elapsed_frames(&self) -> u32 {
        self.elapsed_frames
    }
}
