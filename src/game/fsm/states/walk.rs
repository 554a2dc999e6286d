// Grounded horizontal movement

use crate::core::math::apply_dead_zone;
use crate::engine::game_loop::FIXED_TIMESTEP;
use crate::game::fsm::behavior::StateFlow;
use crate::game::fsm::config::MovementConfig;
use crate::game::fsm::context::CharacterContext;
use crate::game::fsm::state::StateType;
use glam::Vec2;

const WALK_FORWARD: &str = "WalkForward";
const WALK_BACKWARD: &str = "WalkBackward";

#[derive(Debug)]
pub struct WalkState {
    config: MovementConfig,
}

impl WalkState {
    pub fn new(config: MovementConfig) -> Self {
        Self { config }
    }

    pub fn update(&mut self, ctx: &mut dyn CharacterContext) -> StateFlow {
        let axis = apply_dead_zone(ctx.move_axis());
        if axis == 0.0 {
            return StateFlow::Exit(StateType::Idle);
        }

        let backward = axis * ctx.facing() < 0.0;
        let mut speed = self.config.move_speed * FIXED_TIMESTEP;
        if backward {
            speed *= self.config.backward_speed_factor;
        }

        let vertical = ctx.velocity().y;
        ctx.set_velocity(Vec2::new(axis * speed, vertical));
        ctx.set_animator_flag(WALK_FORWARD, !backward);
        ctx.set_animator_flag(WALK_BACKWARD, backward);

        StateFlow::Continue
    }

    pub fn exit(&mut self, ctx: &mut dyn CharacterContext) {
        let vertical = ctx.velocity().y;
        ctx.set_velocity(Vec2::new(0.0, vertical));
        ctx.set_animator_flag(WALK_FORWARD, false);
        ctx.set_animator_flag(WALK_BACKWARD, false);
    }
}
