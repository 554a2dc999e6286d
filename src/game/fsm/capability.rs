// Capability predicates checked before a transition is requested

use super::context::CharacterQuery;
use super::state::StateType;

/// What the character may start doing this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub can_move: bool,
    pub can_jump: bool,
    pub can_dash: bool,
    pub can_attack: bool,
    pub can_airborne_attack: bool,
    pub can_fall: bool,
}

impl Capabilities {
    /// Evaluate every predicate against the current state and physics facts
    pub fn evaluate<Q: CharacterQuery + ?Sized>(state: StateType, query: &Q) -> Self {
        let grounded = query.is_grounded();
        let free_on_ground = grounded
            && matches!(
                state,
                StateType::None | StateType::Idle | StateType::Walk | StateType::Run
            );

        Self {
            can_move: state.is_actionable(),
            can_jump: free_on_ground,
            can_dash: free_on_ground,
            can_attack: grounded && state.is_actionable() && !state.is_airborne(),
            can_airborne_attack: !grounded && matches!(state, StateType::Jump | StateType::Fall),
            can_fall: query.is_falling() && !state.is_attacking(),
        }
    }
}
