// Routes raw input intents to transition requests
//
// Every request is guarded by the capability predicates first; the machine
// still has the final say through its priority policy.

use super::capability::Capabilities;
use super::context::CharacterContext;
use super::machine::{StateMachine, TransitionOutcome};
use super::state::StateType;
use crate::core::math::apply_dead_zone;
use crate::engine::input::{Action, InputSnapshot};
use crate::game::combat::AttackType;
use glam::Vec2;
use log::{error, trace};

const LOG_TARGET: &str = "fsm::router";

/// Map an attack button to the attack it requests
pub fn attack_for(action: Action) -> Option<AttackType> {
    match action {
        Action::Punch => Some(AttackType::Punch),
        Action::Kick => Some(AttackType::Kick),
        Action::Slash => Some(AttackType::Slash),
        Action::Unique => Some(AttackType::Unique),
        _ => None,
    }
}

#[derive(Debug)]
pub struct InputRouter {
    enabled: bool,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabled routers drop every event (round intro, pause, KO) and release held input
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Route one tick worth of input, in move / jump / dash / attack order
    pub fn apply(
        &self,
        snapshot: &InputSnapshot,
        machine: &mut StateMachine,
        ctx: &mut dyn CharacterContext,
    ) {
        if !self.enabled {
            self.release(ctx);
            return;
        }

        self.on_move(snapshot.move_input, machine, ctx);
        self.on_jump(snapshot.jump_pressed, snapshot.jump_held, machine, ctx);
        if snapshot.dash_pressed {
            self.on_dash(machine, ctx);
        }
        for attack in snapshot.attacks.iter().copied().filter_map(attack_for) {
            self.on_attack(attack, machine, ctx);
        }
    }

    pub fn on_move(
        &self,
        move_input: Vec2,
        machine: &mut StateMachine,
        ctx: &mut dyn CharacterContext,
    ) {
        if !self.enabled {
            ctx.set_move_input(Vec2::ZERO);
            return;
        }
        ctx.set_move_input(move_input);

        let current = machine.current_state();
        let caps = Capabilities::evaluate(current, &*ctx);
        let wants_walk = apply_dead_zone(ctx.move_axis()) != 0.0;

        if wants_walk
            && caps.can_move
            && ctx.is_grounded()
            && matches!(current, StateType::None | StateType::Idle)
        {
            self.request(StateType::Walk, machine, ctx);
        }
    }

    pub fn on_jump(
        &self,
        pressed: bool,
        held: bool,
        machine: &mut StateMachine,
        ctx: &mut dyn CharacterContext,
    ) {
        if !self.enabled {
            ctx.set_jump_held(false);
            return;
        }
        ctx.set_jump_held(held);

        if pressed && Capabilities::evaluate(machine.current_state(), &*ctx).can_jump {
            self.request(StateType::Jump, machine, ctx);
        }
    }

    pub fn on_dash(&self, machine: &mut StateMachine, ctx: &mut dyn CharacterContext) {
        if !self.enabled {
            return;
        }

        if Capabilities::evaluate(machine.current_state(), &*ctx).can_dash {
            self.request(StateType::Dash, machine, ctx);
        }
    }

    /// Leave the attack token and request the matching attack state
    ///
    /// The token only stays set while a request for it is pending, so a
    /// refused press can never fire later.
    pub fn on_attack(
        &self,
        attack: AttackType,
        machine: &mut StateMachine,
        ctx: &mut dyn CharacterContext,
    ) {
        if !self.enabled {
            return;
        }

        let caps = Capabilities::evaluate(machine.current_state(), &*ctx);
        let target = if caps.can_attack {
            StateType::Attack
        } else if caps.can_airborne_attack {
            StateType::AirborneAttack
        } else {
            trace!(target: LOG_TARGET, "{:?} dropped in {}", attack, machine.current_state());
            return;
        };

        ctx.set_last_attack_pressed(attack);
        if !self.request(target, machine, ctx) {
            ctx.clear_last_attack_pressed();
        }
    }

    /// Drop the held stick and jump button so no state keeps acting on them
    pub fn release(&self, ctx: &mut dyn CharacterContext) {
        ctx.set_move_input(Vec2::ZERO);
        ctx.set_jump_held(false);
    }

    /// Request `target`, logging failures; true when it was accepted
    fn request(
        &self,
        target: StateType,
        machine: &mut StateMachine,
        ctx: &mut dyn CharacterContext,
    ) -> bool {
        match machine.request_transition(target, ctx) {
            Ok(outcome) => outcome == TransitionOutcome::Accepted,
            Err(err) => {
                error!(target: LOG_TARGET, "Request for {} failed: {}", target, err);
                false
            }
        }
    }
}
