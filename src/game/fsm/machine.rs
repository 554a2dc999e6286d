// Per-character state machine
//
// Owns exactly one tenure at a time. External requests go through the
// priority policy; a state leaving its own tenure does not.

use super::behavior::{StateBehavior, StateFlow};
use super::config::StateConfig;
use super::context::CharacterContext;
use super::error::FsmError;
use super::state::{InterruptibilityTable, PriorityTable, StateType};
use super::states::HitStunState;
use log::{debug, error, trace};

const LOG_TARGET: &str = "fsm::machine";

/// Upper bound on exits followed back to back within one call
pub const MAX_CHAINED_TRANSITIONS: usize = 4;

/// Result of a transition request that raised no error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The requested state is now current
    Accepted,
    /// The current state outranks the request
    Rejected,
    /// The requested state is recognised but has no behavior
    Ignored,
}

impl TransitionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

#[derive(Debug)]
struct Tenure {
    behavior: StateBehavior,
    entered_at: u64,
}

#[derive(Debug)]
pub struct StateMachine {
    current: Option<Tenure>,
    config: StateConfig,
    priorities: PriorityTable,
    interrupts: InterruptibilityTable,
    tick: u64,
}

impl StateMachine {
    /// Create a machine with the standard priority table and no interruptible states
    pub fn new(config: StateConfig) -> Self {
        Self::with_tables(config, PriorityTable::STANDARD, InterruptibilityTable::new())
    }

    pub fn with_tables(
        config: StateConfig,
        priorities: PriorityTable,
        interrupts: InterruptibilityTable,
    ) -> Self {
        Self {
            current: None,
            config,
            priorities,
            interrupts,
            tick: 0,
        }
    }

    /// Type of the current tenure; None before the first transition
    pub fn current_state(&self) -> StateType {
        self.current
            .as_ref()
            .map_or(StateType::None, |tenure| tenure.behavior.state_type())
    }

    pub fn current_behavior(&self) -> Option<&StateBehavior> {
        self.current.as_ref().map(|tenure| &tenure.behavior)
    }

    pub fn is_initialized(&self) -> bool {
        self.current.is_some()
    }

    /// Number of completed `update` calls
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Frames spent in the current tenure, for timed states
    pub fn elapsed_frames(&self) -> Option<u32> {
        self.current_behavior().and_then(StateBehavior::elapsed_frames)
    }

    pub fn config(&self) -> &StateConfig {
        &self.config
    }

    pub fn priorities(&self) -> &PriorityTable {
        &self.priorities
    }

    /// Check if the current state accepts same-or-lower priority requests
    pub fn can_be_interrupted(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|tenure| self.interrupts.can_be_interrupted(tenure.behavior.state_type()))
    }

    /// Check if a request for `target` would pass the priority policy
    pub fn allows(&self, target: StateType) -> bool {
        let Some(tenure) = &self.current else {
            return true;
        };
        let current = tenure.behavior.state_type();

        self.priorities.outranks(target, current)
            || (target != current && self.interrupts.can_be_interrupted(current))
    }

    /// Try to replace the current state with `target`
    ///
    /// On `Err` the machine has already recovered: a missing configuration
    /// leaves the current state untouched, an unknown state falls back to None.
    pub fn request_transition(
        &mut self,
        target: StateType,
        ctx: &mut dyn CharacterContext,
    ) -> Result<TransitionOutcome, FsmError> {
        self.request_with(target, ctx, |config| StateBehavior::build(target, config))
    }

    /// Request hit stun lasting `stun_frames`, under the same policy as any other request
    pub fn request_hit_stun(
        &mut self,
        stun_frames: u32,
        ctx: &mut dyn CharacterContext,
    ) -> Result<TransitionOutcome, FsmError> {
        self.request_with(StateType::HitStun, ctx, |config| {
            if config.hit_stun.is_none() {
                return Err(FsmError::ConfigurationMissing {
                    state: StateType::HitStun,
                });
            }
            Ok(StateBehavior::HitStun(HitStunState::new(stun_frames)))
        })
    }

    /// Drop to None regardless of priority, running the current state's exit
    ///
    /// For outside events that end every action at once (KO, round end).
    pub fn halt(&mut self, ctx: &mut dyn CharacterContext) {
        debug!(target: LOG_TARGET, "Halting in {}", self.current_state());
        self.fall_back(ctx);
    }

    fn request_with<F>(
        &mut self,
        target: StateType,
        ctx: &mut dyn CharacterContext,
        build: F,
    ) -> Result<TransitionOutcome, FsmError>
    where
        F: FnOnce(&StateConfig) -> Result<StateBehavior, FsmError>,
    {
        if target.is_reserved() {
            debug!(target: LOG_TARGET, "Ignoring request for reserved state {}", target);
            return Ok(TransitionOutcome::Ignored);
        }

        if !StateBehavior::is_implemented(target) {
            let err = FsmError::InvalidStateRequested { state: target };
            error!(target: LOG_TARGET, "{}", err);
            self.fall_back(ctx);
            return Err(err);
        }

        if !self.allows(target) {
            trace!(
                target: LOG_TARGET,
                "Rejected {} -> {} (priority {} <= {})",
                self.current_state(),
                target,
                self.priorities.priority(target),
                self.priorities.priority(self.current_state())
            );
            return Ok(TransitionOutcome::Rejected);
        }

        let behavior = build(&self.config).map_err(|err| {
            error!(target: LOG_TARGET, "{}, staying in {}", err, self.current_state());
            err
        })?;

        let flow = self.install(behavior, ctx);
        self.settle(flow, ctx);
        Ok(TransitionOutcome::Accepted)
    }

    /// Run one fixed tick of the current state
    ///
    /// A tenure entered during this tick is left alone until the next one.
    pub fn update(&mut self, ctx: &mut dyn CharacterContext) {
        if let Some(tenure) = self.current.as_mut() {
            if tenure.entered_at != self.tick {
                let flow = tenure.behavior.update(ctx);
                self.settle(flow, ctx);
            }
        }
        self.tick += 1;
    }

    /// Follow self-exits until a state settles, bypassing the priority policy
    fn settle(&mut self, mut flow: StateFlow, ctx: &mut dyn CharacterContext) {
        let mut depth = 0;

        while let StateFlow::Exit(target) = flow {
            depth += 1;
            if depth > MAX_CHAINED_TRANSITIONS {
                error!(
                    target: LOG_TARGET,
                    "More than {} chained exits out of {}, falling back to None",
                    MAX_CHAINED_TRANSITIONS,
                    self.current_state()
                );
                self.fall_back(ctx);
                return;
            }

            let behavior = match StateBehavior::build(target, &self.config) {
                Ok(behavior) => behavior,
                Err(err) => {
                    error!(target: LOG_TARGET, "Cannot exit {}: {}", self.current_state(), err);
                    StateBehavior::default()
                }
            };
            flow = self.install(behavior, ctx);
        }
    }

    fn fall_back(&mut self, ctx: &mut dyn CharacterContext) {
        self.install(StateBehavior::default(), ctx);
    }

    /// Exit the current tenure and enter `behavior`
    fn install(
        &mut self,
        mut behavior: StateBehavior,
        ctx: &mut dyn CharacterContext,
    ) -> StateFlow {
        let from = self.current_state();
        let to = behavior.state_type();

        if let Some(mut previous) = self.current.take() {
            previous.behavior.exit(ctx);
        }

        debug!(target: LOG_TARGET, "{} -> {}", from, to);
        ctx.on_transition(from, to);

        let flow = behavior.enter(ctx);
        self.current = Some(Tenure {
            behavior,
            entered_at: self.tick,
        });
        flow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::combat::{AttackType, Direction, MoveDefinition, Moveset};
    use crate::game::fsm::testing::MockContext;
    use glam::Vec2;
    use std::sync::Arc;

    fn standard_machine() -> StateMachine {
        StateMachine::new(StateConfig::standard(Arc::new(Moveset::standard())))
    }

    /// Moveset with a single 30 frame (0.5s) punch
    fn half_second_machine() -> StateMachine {
        let moveset = Moveset::new(
            "half",
            vec![MoveDefinition::new(AttackType::Punch, Direction::Neutral, 10, 5, 15)],
        );
        StateMachine::new(StateConfig::standard(Arc::new(moveset)))
    }

    fn enter_attack(machine: &mut StateMachine, ctx: &mut MockContext) {
        ctx.token = Some(AttackType::Punch);
        let outcome = machine.request_transition(StateType::Attack, ctx).unwrap();
        assert_eq!(outcome, TransitionOutcome::Accepted);
        // Entered this tick, first update is skipped
        machine.update(ctx);
    }

    #[test]
    fn test_first_request_always_accepted() {
        let mut machine = standard_machine();
        let mut ctx = MockContext::grounded();
        assert!(!machine.is_initialized());

        let outcome = machine.request_transition(StateType::None, &mut ctx).unwrap();

        assert_eq!(outcome, TransitionOutcome::Accepted);
        assert!(machine.is_initialized());
        assert_eq!(machine.current_state(), StateType::None);
    }

    #[test]
    fn test_lower_or_equal_priority_never_replaces_current() {
        let priorities = PriorityTable::STANDARD;
        let implemented: Vec<StateType> = StateType::ALL
            .into_iter()
            .filter(|state| StateBehavior::is_implemented(*state))
            .collect();

        for &current in &implemented {
            for &requested in &implemented {
                if priorities.priority(requested) > priorities.priority(current) {
                    continue;
                }

                let mut machine = standard_machine();
                let mut ctx = MockContext::grounded();
                ctx.token = Some(AttackType::Punch);
                machine.request_transition(current, &mut ctx).unwrap();
                assert_eq!(machine.current_state(), current);

                ctx.token = Some(AttackType::Punch);
                let outcome = machine.request_transition(requested, &mut ctx).unwrap();

                assert_eq!(outcome, TransitionOutcome::Rejected, "{current} <- {requested}");
                assert_eq!(machine.current_state(), current, "{current} <- {requested}");
            }
        }
    }

    #[test]
    fn test_higher_priority_replaces_current() {
        let mut machine = standard_machine();
        let mut ctx = MockContext::grounded();
        machine.request_transition(StateType::Idle, &mut ctx).unwrap();

        ctx.token = Some(AttackType::Kick);
        let outcome = machine.request_transition(StateType::Attack, &mut ctx).unwrap();

        assert!(outcome.is_accepted());
        assert_eq!(machine.current_state(), StateType::Attack);
    }

    #[test]
    fn test_unknown_state_falls_back_to_none() {
        let mut machine = standard_machine();
        let mut ctx = MockContext::grounded();
        machine.request_transition(StateType::Idle, &mut ctx).unwrap();

        let err = machine.request_transition(StateType::Dash, &mut ctx).unwrap_err();

        assert_eq!(err, FsmError::InvalidStateRequested { state: StateType::Dash });
        assert!(machine.is_initialized());
        assert_eq!(machine.current_state(), StateType::None);
        assert_eq!(ctx.transitions.last(), Some(&(StateType::Idle, StateType::None)));
    }

    #[test]
    fn test_reserved_states_are_ignored() {
        let mut machine = standard_machine();
        let mut ctx = MockContext::grounded();
        machine.request_transition(StateType::Idle, &mut ctx).unwrap();

        for state in [StateType::Run, StateType::Block, StateType::Knockdown, StateType::Dead] {
            let outcome = machine.request_transition(state, &mut ctx).unwrap();
            assert_eq!(outcome, TransitionOutcome::Ignored);
            assert_eq!(machine.current_state(), StateType::Idle);
        }
    }

    #[test]
    fn test_missing_configuration_keeps_current_state() {
        let mut machine = StateMachine::new(StateConfig::empty());
        let mut ctx = MockContext::grounded();
        machine.request_transition(StateType::Idle, &mut ctx).unwrap();

        let err = machine.request_transition(StateType::Jump, &mut ctx).unwrap_err();

        assert_eq!(err, FsmError::ConfigurationMissing { state: StateType::Jump });
        assert_eq!(machine.current_state(), StateType::Idle);
        assert_eq!(ctx.transitions.len(), 1);
    }

    #[test]
    fn test_walk_to_attack_exits_walk_once() {
        let priorities = PriorityTable::from_ranks(&[
            (StateType::Idle, 0),
            (StateType::Walk, 1),
            (StateType::Jump, 2),
            (StateType::Fall, 2),
            (StateType::Attack, 3),
        ]);
        let mut machine = StateMachine::with_tables(
            StateConfig::standard(Arc::new(Moveset::standard())),
            priorities,
            InterruptibilityTable::new(),
        );
        let mut ctx = MockContext::grounded();
        ctx.move_input = Vec2::new(1.0, 0.0);
        ctx.velocity = Vec2::new(4.0, 0.0);
        machine.request_transition(StateType::Walk, &mut ctx).unwrap();

        ctx.token = Some(AttackType::Punch);
        let outcome = machine.request_transition(StateType::Attack, &mut ctx).unwrap();

        assert_eq!(outcome, TransitionOutcome::Accepted);
        assert_eq!(machine.current_state(), StateType::Attack);
        // Walk never updated, so the only velocity write is its exit
        assert_eq!(ctx.velocities, vec![Vec2::ZERO]);
        assert_eq!(
            ctx.transitions,
            vec![
                (StateType::None, StateType::Walk),
                (StateType::Walk, StateType::Attack)
            ]
        );
    }

    #[test]
    fn test_attack_runs_for_its_full_duration() {
        let mut machine = half_second_machine();
        let mut ctx = MockContext::grounded();
        enter_attack(&mut machine, &mut ctx);

        // 24 frames = 0.4s
        for _ in 0..24 {
            machine.update(&mut ctx);
        }
        assert_eq!(machine.current_state(), StateType::Attack);
        assert_eq!(machine.elapsed_frames(), Some(24));

        for _ in 0..5 {
            machine.update(&mut ctx);
        }
        assert_eq!(machine.current_state(), StateType::Attack);

        machine.update(&mut ctx);
        assert_eq!(machine.current_state(), StateType::Idle);
    }

    #[test]
    fn test_attack_exits_to_walk_when_holding_direction() {
        let mut machine = half_second_machine();
        let mut ctx = MockContext::grounded();
        enter_attack(&mut machine, &mut ctx);

        ctx.move_input = Vec2::new(-1.0, 0.0);
        for _ in 0..30 {
            machine.update(&mut ctx);
        }

        assert_eq!(machine.current_state(), StateType::Walk);
    }

    #[test]
    fn test_attack_cancelled_when_airborne() {
        let mut machine = half_second_machine();
        let mut ctx = MockContext::grounded();
        enter_attack(&mut machine, &mut ctx);
        machine.update(&mut ctx);
        assert_eq!(machine.elapsed_frames(), Some(1));

        ctx.grounded = false;
        machine.update(&mut ctx);

        assert_ne!(machine.current_state(), StateType::Attack);
        assert!(ctx.hitbox.is_empty());
    }

    #[test]
    fn test_attack_without_token_settles_in_idle() {
        let mut machine = standard_machine();
        let mut ctx = MockContext::grounded();
        machine.request_transition(StateType::Idle, &mut ctx).unwrap();
        ctx.animations.clear();

        let outcome = machine.request_transition(StateType::Attack, &mut ctx).unwrap();

        assert_eq!(outcome, TransitionOutcome::Accepted);
        assert_eq!(machine.current_state(), StateType::Idle);
        assert!(ctx.forces.is_empty());
        assert!(ctx.velocities.is_empty());
        // Only the generic exit cue from Attack
        assert_eq!(ctx.animations, vec!["Idle".to_string()]);
    }

    #[test]
    fn test_halt_ends_attack_regardless_of_priority() {
        let mut machine = standard_machine();
        let mut ctx = MockContext::grounded();
        machine.request_transition(StateType::Idle, &mut ctx).unwrap();
        enter_attack(&mut machine, &mut ctx);
        for _ in 0..4 {
            machine.update(&mut ctx);
        }
        assert_eq!(ctx.hitbox.last(), Some(&true));

        machine.halt(&mut ctx);

        assert_eq!(machine.current_state(), StateType::None);
        assert!(machine.is_initialized());
        assert_eq!(ctx.hitbox.last(), Some(&false));
        assert_eq!(ctx.transitions.last(), Some(&(StateType::Attack, StateType::None)));
    }

    #[test]
    fn test_timer_resets_on_reentry() {
        let mut machine = half_second_machine();
        let mut ctx = MockContext::grounded();

        for _ in 0..2 {
            machine.request_transition(StateType::Idle, &mut ctx).ok();
            enter_attack(&mut machine, &mut ctx);
            assert_eq!(machine.elapsed_frames(), Some(0));

            for _ in 0..10 {
                machine.update(&mut ctx);
            }
            assert_eq!(machine.elapsed_frames(), Some(10));

            // HitStun cuts the attack short
            machine.request_hit_stun(1, &mut ctx).unwrap();
            machine.update(&mut ctx);
            machine.update(&mut ctx);
            assert_eq!(machine.current_state(), StateType::Idle);
        }
    }

    #[test]
    fn test_state_entered_mid_tick_waits_for_next_update() {
        let mut machine = standard_machine();
        let mut ctx = MockContext::grounded();
        machine.request_transition(StateType::Walk, &mut ctx).unwrap();

        // Axis is neutral: Walk would exit on its first update
        machine.update(&mut ctx);
        assert_eq!(machine.current_state(), StateType::Walk);

        machine.update(&mut ctx);
        assert_eq!(machine.current_state(), StateType::Idle);
    }

    #[test]
    fn test_interruptible_state_accepts_equal_priority() {
        let mut machine = StateMachine::with_tables(
            StateConfig::standard(Arc::new(Moveset::standard())),
            PriorityTable::STANDARD,
            InterruptibilityTable::new().with_interruptible(StateType::Jump),
        );
        let mut ctx = MockContext::airborne();
        ctx.jump_held = true;
        machine.request_transition(StateType::Jump, &mut ctx).unwrap();
        assert!(machine.can_be_interrupted());

        assert!(!machine.allows(StateType::Jump));
        let outcome = machine.request_transition(StateType::Fall, &mut ctx).unwrap();

        assert_eq!(outcome, TransitionOutcome::Accepted);
        assert_eq!(machine.current_state(), StateType::Fall);
    }

    #[test]
    fn test_fall_lands_after_landing() {
        let mut machine = standard_machine();
        let mut ctx = MockContext::airborne();
        ctx.velocity = Vec2::new(0.0, -2.0);
        machine.request_transition(StateType::Fall, &mut ctx).unwrap();
        machine.update(&mut ctx);

        ctx.grounded = true;
        ctx.velocity = Vec2::ZERO;
        machine.update(&mut ctx);

        assert_eq!(machine.current_state(), StateType::Idle);
        assert_eq!(ctx.trigger_count("Land"), 1);
    }

    #[test]
    fn test_self_exit_to_unconfigured_state_falls_back() {
        let config = StateConfig::empty().with_jump(crate::game::fsm::config::STANDARD_JUMP);
        let mut machine = StateMachine::new(config);
        let mut ctx = MockContext::airborne();
        machine.request_transition(StateType::Jump, &mut ctx).unwrap();

        // Jump released: exits to Fall, which has no configuration
        machine.update(&mut ctx);
        machine.update(&mut ctx);

        assert_eq!(machine.current_state(), StateType::None);
    }

    #[test]
    fn test_hit_stun_needs_configuration() {
        let mut machine = StateMachine::new(StateConfig::empty());
        let mut ctx = MockContext::grounded();
        machine.request_transition(StateType::Idle, &mut ctx).unwrap();

        let err = machine.request_hit_stun(10, &mut ctx).unwrap_err();

        assert!(err.is_integration_bug());
        assert_eq!(machine.current_state(), StateType::Idle);
    }
}
