// Take-off and rise

use crate::game::fsm::behavior::StateFlow;
use crate::game::fsm::config::JumpConfig;
use crate::game::fsm::context::CharacterContext;
use crate::game::fsm::state::StateType;
use glam::Vec2;

#[derive(Debug)]
pub struct JumpState {
    config: JumpConfig,
}

impl JumpState {
    pub fn new(config: JumpConfig) -> Self {
        Self { config }
    }

    pub fn enter(&mut self, ctx: &mut dyn CharacterContext) -> StateFlow {
        let horizontal = ctx.velocity().x;
        ctx.set_velocity(Vec2::new(horizontal, self.config.jump_force));
        ctx.set_animator_trigger("Jump");
        StateFlow::Continue
    }

    /// Hands over to Fall at the apex, or early when jump is released
    pub fn update(&mut self, ctx: &mut dyn CharacterContext) -> StateFlow {
        if ctx.velocity().y <= 0.0 || !ctx.jump_held() {
            StateFlow::Exit(StateType::Fall)
        } else {
            StateFlow::Continue
        }
    }
}
