// Grounded and airborne attacks
//
// An attack tenure owns exactly one resolved move. The token left by input
// handling is read once on entry and cleared, so a single press can never
// fire twice.

use super::grounded_rest_state;
use crate::core::math::approx_equal;
use crate::engine::game_loop::{frames_to_secs, FIXED_TIMESTEP};
use crate::game::combat::{AttackPhase, AttackResolver, Moveset, Stance};
use crate::game::fsm::behavior::StateFlow;
use crate::game::fsm::context::CharacterContext;
use crate::game::fsm::error::FsmError;
use crate::game::fsm::state::StateType;
use log::{debug, warn};
use std::sync::Arc;

/// Which ground an attack is performed from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackKind {
    Ground,
    Airborne,
}

impl AttackKind {
    pub fn state_type(&self) -> StateType {
        match self {
            Self::Ground => StateType::Attack,
            Self::Airborne => StateType::AirborneAttack,
        }
    }
}

#[derive(Debug)]
pub struct AttackState {
    kind: AttackKind,
    resolver: AttackResolver,
    elapsed_frames: u32,
    hitbox_open: bool,
    desync_reported: bool,
}

impl AttackState {
    pub fn new(kind: AttackKind, moveset: Arc<Moveset>) -> Self {
        Self {
            kind,
            resolver: AttackResolver::new(moveset),
            elapsed_frames: 0,
            hitbox_open: false,
            desync_reported: false,
        }
    }

    pub fn enter(&mut self, ctx: &mut dyn CharacterContext) -> StateFlow {
        let target = self.kind.state_type().log_target();

        let Some(attack) = ctx.peek_last_attack_pressed() else {
            let err = FsmError::NoAttackSelected {
                reason: "the attack token was empty".to_string(),
            };
            warn!(target: target, "{}, leaving the attack state", err);
            return StateFlow::Exit(self.exit_target(ctx));
        };
        ctx.clear_last_attack_pressed();

        let stance = Stance::from_input(
            ctx.move_input(),
            ctx.facing(),
            self.kind == AttackKind::Airborne,
        );

        if !self.resolver.select_attack(attack, stance) {
            let err = FsmError::NoAttackSelected {
                reason: format!(
                    "no {:?} move for {:?} in moveset '{}'",
                    attack,
                    stance,
                    self.resolver.moveset().name()
                ),
            };
            debug!(target: target, "{}", err);
            return StateFlow::Exit(self.exit_target(ctx));
        }

        if let Some(selected) = self.resolver.selected() {
            debug!(
                target: target,
                "Performing {} ({} frames)",
                selected.name,
                selected.total_frames()
            );
            ctx.play_animation(&selected.animation);
        }

        StateFlow::Continue
    }

    pub fn update(&mut self, ctx: &mut dyn CharacterContext) -> StateFlow {
        let target = self.kind.state_type().log_target();

        // Leaving the ground (or touching it, for air attacks) cancels on the spot
        let cancelled = match self.kind {
            AttackKind::Ground => !ctx.is_grounded(),
            AttackKind::Airborne => ctx.is_grounded(),
        };
        if cancelled {
            debug!(target: target, "Attack cancelled after {} frames", self.elapsed_frames);
            return StateFlow::Exit(self.exit_target(ctx));
        }

        self.elapsed_frames += 1;

        let phase = self.resolver.phase(self.elapsed_frames);
        if phase.is_active() != self.hitbox_open {
            self.hitbox_open = phase.is_active();
            ctx.set_hitbox_active(self.hitbox_open);
        }

        self.check_clip_length(ctx);

        if self.elapsed_frames >= self.resolver.duration_frames() {
            StateFlow::Exit(self.exit_target(ctx))
        } else {
            StateFlow::Continue
        }
    }

    pub fn exit(&mut self, ctx: &mut dyn CharacterContext) {
        if self.hitbox_open {
            self.hitbox_open = false;
            ctx.set_hitbox_active(false);
        }
        ctx.play_animation("Idle");
    }

    /// Where the character goes once the attack is over
    fn exit_target(&self, ctx: &dyn CharacterContext) -> StateType {
        match self.kind {
            AttackKind::Airborne if !ctx.is_grounded() => StateType::Fall,
            _ => grounded_rest_state(ctx),
        }
    }

    /// The move's frame data is authoritative; the animator's clip length is
    /// only compared against it for diagnostics
    fn check_clip_length(&mut self, ctx: &dyn CharacterContext) {
        if self.desync_reported {
            return;
        }
        let Some(clip_length) = ctx.current_clip_length() else {
            return;
        };

        let expected = frames_to_secs(self.resolver.duration_frames());
        if !approx_equal(clip_length, expected, FIXED_TIMESTEP) {
            self.desync_reported = true;
            debug!(
                target: self.kind.state_type().log_target(),
                "Animator reports a {:.3}s clip, move lasts {:.3}s",
                clip_length,
                expected
            );
        }
    }

    pub fn kind(&self) -> AttackKind {
        self.kind
    }

    pub fn elapsed_frames(&self) -> u32 {
        self.elapsed_frames
    }

    pub fn phase(&self) -> AttackPhase {
        self.resolver.phase(self.elapsed_frames)
    }

    pub fn resolver(&self) -> &AttackResolver {
        &self.resolver
    }
}
