// Descent, jump halt and landing

use super::grounded_rest_state;
use crate::game::fsm::behavior::StateFlow;
use crate::game::fsm::config::FallConfig;
use crate::game::fsm::context::CharacterContext;
use glam::Vec2;

const IS_FALLING: &str = "IsFalling";
const LAND: &str = "Land";

#[derive(Debug)]
pub struct FallState {
    config: FallConfig,
    landed: bool,
}

impl FallState {
    pub fn new(config: FallConfig) -> Self {
        Self {
            config,
            landed: false,
        }
    }

    pub fn enter(&mut self, ctx: &mut dyn CharacterContext) -> StateFlow {
        ctx.set_animator_flag(IS_FALLING, true);
        StateFlow::Continue
    }

    pub fn update(&mut self, ctx: &mut dyn CharacterContext) -> StateFlow {
        let vertical = ctx.velocity().y;

        if ctx.is_grounded() && vertical <= 0.0 {
            self.landed = true;
            return StateFlow::Exit(grounded_rest_state(&*ctx));
        }

        if vertical < 0.0 {
            ctx.apply_force(Vec2::NEG_Y * self.config.fall_gravity_multiplier);
        } else if vertical > 0.0 {
            ctx.apply_force(Vec2::NEG_Y * self.config.jump_halt_force);
        }

        ctx.set_animator_flag(IS_FALLING, true);
        StateFlow::Continue
    }

    pub fn exit(&mut self, ctx: &mut dyn CharacterContext) {
        ctx.set_animator_flag(IS_FALLING, false);
        if self.landed {
            ctx.set_animator_trigger(LAND);
        }
    }

    pub fn has_landed(&self) -> bool {
        self.landed
    }
}
