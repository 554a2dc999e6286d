// Collaborator interfaces the state machine talks through
//
// States never own the character. Each call receives a `&mut dyn
// CharacterContext` for the duration of that call, reads physics/input
// facts from it and requests outcomes (velocity, forces, animation cues).

use super::state::StateType;
use crate::game::combat::AttackType;
use glam::Vec2;

/// Read-only physics and input facts, queried every tick
pub trait CharacterQuery {
    fn is_grounded(&self) -> bool;

    fn velocity(&self) -> Vec2;

    /// Held movement vector, each axis in [-1, 1]
    fn move_input(&self) -> Vec2;

    fn jump_held(&self) -> bool;

    /// 1.0 when facing right, -1.0 when facing left
    fn facing(&self) -> f32 {
        1.0
    }

    /// Airborne and not rising
    fn is_falling(&self) -> bool {
        !self.is_grounded() && self.velocity().y <= 0.0
    }

    /// Horizontal movement axis in [-1, 1]
    fn move_axis(&self) -> f32 {
        self.move_input().x
    }

    /// Length in seconds of the clip the animator is playing, if it can tell
    fn current_clip_length(&self) -> Option<f32> {
        None
    }
}

/// Fire-and-forget outcome requests
pub trait CharacterOutput {
    fn apply_force(&mut self, force: Vec2);

    fn set_velocity(&mut self, velocity: Vec2);

    fn play_animation(&mut self, name: &str);

    fn set_animator_flag(&mut self, name: &str, value: bool);

    fn set_animator_trigger(&mut self, name: &str);

    /// Open or close the attack hitbox
    fn set_hitbox_active(&mut self, _active: bool) {}

    /// Called after every accepted transition
    fn on_transition(&mut self, _from: StateType, _to: StateType) {}
}

/// Single-writer / single-reader slot holding the last attack pressed
///
/// Input handling writes it, the attack states consume it on entry.
pub trait AttackTokenSlot {
    fn peek_last_attack_pressed(&self) -> Option<AttackType>;

    fn set_last_attack_pressed(&mut self, attack: AttackType);

    fn clear_last_attack_pressed(&mut self);
}

/// Writable side of the input collaborator, used by the input router
pub trait InputSink {
    fn set_move_input(&mut self, move_input: Vec2);

    fn set_jump_held(&mut self, held: bool);
}

/// Everything a state machine needs from the character it drives
pub trait CharacterContext: CharacterQuery + CharacterOutput + AttackTokenSlot + InputSink {}

impl<T> CharacterContext for T where
    T: CharacterQuery + CharacterOutput + AttackTokenSlot + InputSink
{
}
