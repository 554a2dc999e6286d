// One behavior per implemented state

mod attack;
mod fall;
mod hit_stun;
mod idle;
mod jump;
mod walk;

pub use attack::{AttackKind, AttackState};
pub use fall::FallState;
pub use hit_stun::HitStunState;
pub use idle::{IdleState, NoneState};
pub use jump::JumpState;
pub use walk::WalkState;

use super::context::CharacterQuery;
use super::state::StateType;
use crate::core::math::apply_dead_zone;

/// Walk when grounded with the stick held, Idle otherwise
pub(crate) fn grounded_rest_state<C: CharacterQuery + ?Sized>(ctx: &C) -> StateType {
    if ctx.is_grounded() && apply_dead_zone(ctx.move_axis()) != 0.0 {
        StateType::Walk
    } else {
        StateType::Idle
    }
}
