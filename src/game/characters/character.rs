// Fighter entity and management

use crate::core::math::sign;
use crate::engine::game_loop::FIXED_TIMESTEP;
use crate::engine::input::InputSnapshot;
use crate::engine::physics::{
    body::presets, ColliderHandle, PhysicsWorld, QueryFilter, RigidBodyHandle, Vector,
};
use crate::game::combat::{AttackType, Moveset};
use crate::game::fsm::{
    AttackTokenSlot, Capabilities, CharacterOutput, CharacterQuery, FsmError, InputRouter,
    InputSink, StateConfig, StateMachine, StateType, TransitionOutcome,
};
use glam::Vec2;
use log::{debug, error, info, warn};
use std::sync::Arc;

use super::animation::AnimationPlayer;
use super::stats::FighterStats;

/// Unique identifier for a character
pub type CharacterId = u32;

/// Fighters per match
pub const MAX_PLAYERS: usize = 2;

/// Match-level notifications raised by a fighter
pub trait FighterObserver {
    /// The fighter was knocked out and has stopped taking input
    fn on_death(&mut self, id: CharacterId, name: &str);
}

/// Input-derived facts read back by the state machine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    /// Held movement vector (-1 to 1 on each axis)
    pub move_input: Vec2,
    /// Whether jump is held
    pub jump_held: bool,
    /// Attack waiting to be consumed by an attack state
    pub last_attack_pressed: Option<AttackType>,
}

/// Physics handles, input slots and animator of one fighter
#[derive(Debug)]
pub struct FighterRig {
    /// Handle to the fighter's rigid body in the physics world
    pub body_handle: RigidBodyHandle,
    /// Handle to the fighter's collider
    pub collider_handle: ColliderHandle,
    pub stats: FighterStats,
    pub input: InputState,
    pub animation: AnimationPlayer,
    /// Direction the fighter is facing (1 = right, -1 = left)
    pub facing_direction: f32,
    /// Seconds spent grounded with neutral input
    pub idle_time: f32,
    pub hitbox_active: bool,
    /// Whether incoming hits land
    pub hurtbox_active: bool,
}

impl FighterRig {
    /// Check if the fighter is on the ground using a raycast from its feet
    pub fn is_grounded(&self, physics: &PhysicsWorld) -> bool {
        let Some(body) = physics.get_rigid_body(self.body_handle) else {
            return false;
        };

        let position = body.translation();
        let ray_origin = Vector::new(position.x, position.y - self.stats.half_height() + 0.1);
        let ray_direction = Vector::new(0.0, -1.0);

        physics
            .raycast(
                ray_origin,
                ray_direction,
                self.stats.ground_probe_distance,
                true,
                QueryFilter::default().exclude_rigid_body(self.body_handle),
            )
            .is_some()
    }
}

/// Rapier-backed view of one fighter handed to its state machine for a single call
pub struct FighterContext<'a> {
    rig: &'a mut FighterRig,
    physics: &'a mut PhysicsWorld,
}

impl<'a> FighterContext<'a> {
    pub fn new(rig: &'a mut FighterRig, physics: &'a mut PhysicsWorld) -> Self {
        Self { rig, physics }
    }
}

impl CharacterQuery for FighterContext<'_> {
    fn is_grounded(&self) -> bool {
        self.rig.is_grounded(self.physics)
    }

    fn velocity(&self) -> Vec2 {
        self.physics
            .get_rigid_body(self.rig.body_handle)
            .map_or(Vec2::ZERO, |body| Vec2::new(body.linvel().x, body.linvel().y))
    }

    fn move_input(&self) -> Vec2 {
        self.rig.input.move_input
    }

    fn jump_held(&self) -> bool {
        self.rig.input.jump_held
    }

    fn facing(&self) -> f32 {
        self.rig.facing_direction
    }

    fn current_clip_length(&self) -> Option<f32> {
        self.rig.animation.current_clip_length()
    }
}

impl CharacterOutput for FighterContext<'_> {
    fn apply_force(&mut self, force: Vec2) {
        // Forces are held for exactly one tick
        if let Some(body) = self.physics.get_rigid_body_mut(self.rig.body_handle) {
            body.apply_impulse(Vector::new(force.x, force.y) * FIXED_TIMESTEP, true);
        }
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        if let Some(body) = self.physics.get_rigid_body_mut(self.rig.body_handle) {
            body.set_linvel(Vector::new(velocity.x, velocity.y), true);
        }
    }

    fn play_animation(&mut self, name: &str) {
        self.rig.animation.play_from_start(name);
    }

    fn set_animator_flag(&mut self, name: &str, value: bool) {
        self.rig.animation.set_flag(name, value);
    }

    fn set_animator_trigger(&mut self, name: &str) {
        self.rig.animation.set_trigger(name);
    }

    fn set_hitbox_active(&mut self, active: bool) {
        self.rig.hitbox_active = active;
    }

    fn on_transition(&mut self, _from: StateType, _to: StateType) {
        self.rig.idle_time = 0.0;
    }
}

impl AttackTokenSlot for FighterContext<'_> {
    fn peek_last_attack_pressed(&self) -> Option<AttackType> {
        self.rig.input.last_attack_pressed
    }

    fn set_last_attack_pressed(&mut self, attack: AttackType) {
        self.rig.input.last_attack_pressed = Some(attack);
    }

    fn clear_last_attack_pressed(&mut self) {
        self.rig.input.last_attack_pressed = None;
    }
}

impl InputSink for FighterContext<'_> {
    fn set_move_input(&mut self, move_input: Vec2) {
        self.rig.input.move_input = move_input;
    }

    fn set_jump_held(&mut self, held: bool) {
        self.rig.input.jump_held = held;
    }
}

/// Log a failed request; the machine has already recovered
fn log_request(result: Result<TransitionOutcome, FsmError>, target: StateType) -> bool {
    match result {
        Ok(outcome) => outcome.is_accepted(),
        Err(err) if err.is_integration_bug() => {
            error!("Request for {} failed: {}", target, err);
            false
        }
        Err(err) => {
            warn!("Request for {} failed: {}", target, err);
            false
        }
    }
}

/// Represents a player-controlled fighter in the match
#[derive(Debug)]
pub struct Character {
    /// Unique identifier
    pub id: CharacterId,
    /// Character name (for display)
    pub name: String,
    /// Player index controlling this character
    pub player_index: Option<usize>,

    /// State machine for character behavior
    pub state_machine: StateMachine,
    /// Input events to transition requests
    pub router: InputRouter,
    /// Everything the state machine reads from and writes to
    pub rig: FighterRig,
    alive: bool,
}

impl Character {
    /// Create a new character, add it to the physics world and enter Idle
    pub fn new(
        id: CharacterId,
        name: &str,
        player_index: Option<usize>,
        stats: FighterStats,
        config: StateConfig,
        physics: &mut PhysicsWorld,
        spawn: Vec2,
    ) -> Self {
        let body_handle = physics.add_rigid_body(presets::fighter_body(spawn.x, spawn.y));
        let collider = presets::fighter_collider(stats.width, stats.height);
        let collider_handle = physics.add_collider(collider, body_handle);

        let moveset: Arc<Moveset> = config
            .attack
            .as_ref()
            .map(|attack| attack.moveset.clone())
            .unwrap_or_default();

        let mut character = Self {
            id,
            name: name.to_string(),
            player_index,
            state_machine: StateMachine::new(config),
            router: InputRouter::new(),
            rig: FighterRig {
                body_handle,
                collider_handle,
                stats,
                input: InputState::default(),
                animation: AnimationPlayer::with_fighter_animations(&moveset),
                facing_direction: 1.0,
                idle_time: 0.0,
                hitbox_active: false,
                hurtbox_active: true,
            },
            alive: true,
        };

        character.request(StateType::Idle, physics);
        character
    }

    /// Request a transition from outside the input path
    pub fn request(&mut self, target: StateType, physics: &mut PhysicsWorld) -> bool {
        let mut ctx = FighterContext::new(&mut self.rig, physics);
        log_request(self.state_machine.request_transition(target, &mut ctx), target)
    }

    /// Advance one fixed tick: input, fall and idle checks, then the current state
    pub fn tick(&mut self, physics: &mut PhysicsWorld, snapshot: &InputSnapshot) {
        let mut ctx = FighterContext::new(&mut self.rig, physics);

        self.router.apply(snapshot, &mut self.state_machine, &mut ctx);

        let current = self.state_machine.current_state();
        let grounded = ctx.is_grounded();

        if current != StateType::Fall && Capabilities::evaluate(current, &ctx).can_fall {
            let result = self.state_machine.request_transition(StateType::Fall, &mut ctx);
            log_request(result, StateType::Fall);
        }

        let current = self.state_machine.current_state();

        if grounded && snapshot.is_neutral() && current.is_actionable() {
            ctx.rig.idle_time += FIXED_TIMESTEP;
            let timed_out = ctx.rig.idle_time >= ctx.rig.stats.idle_time_threshold;
            if current != StateType::Idle && timed_out {
                debug!("{} idle for {:.2}s", self.name, ctx.rig.idle_time);
                let result = self.state_machine.request_transition(StateType::Idle, &mut ctx);
                log_request(result, StateType::Idle);
            }
        } else {
            ctx.rig.idle_time = 0.0;
        }

        self.state_machine.update(&mut ctx);

        let flip = self.rig.facing_direction < 0.0;
        self.rig.animation.set_flip_horizontal(flip);
        self.rig.animation.update(FIXED_TIMESTEP);
    }

    /// Put the character in hit stun; false when the current state outranks it
    /// or the hurtbox is off
    pub fn receive_hit(&mut self, physics: &mut PhysicsWorld, stun_frames: u32) -> bool {
        if !self.rig.hurtbox_active {
            debug!("{} ignored a hit with its hurtbox off", self.name);
            return false;
        }

        let mut ctx = FighterContext::new(&mut self.rig, physics);
        let result = self.state_machine.request_hit_stun(stun_frames, &mut ctx);
        log_request(result, StateType::HitStun)
    }

    /// Enable or disable input handling
    pub fn set_input_enabled(&mut self, enabled: bool) {
        self.router.set_enabled(enabled);
    }

    /// Knock the fighter out: cut input, end the current action, close both
    /// boxes and tell `observer`. False if it was already down.
    pub fn die(
        &mut self,
        physics: &mut PhysicsWorld,
        observer: &mut dyn FighterObserver,
    ) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        self.router.set_enabled(false);

        let mut ctx = FighterContext::new(&mut self.rig, physics);
        self.router.release(&mut ctx);
        ctx.clear_last_attack_pressed();
        self.state_machine.halt(&mut ctx);
        ctx.set_hitbox_active(false);
        ctx.play_animation("Idle");
        self.rig.hurtbox_active = false;

        info!("{} is down", self.name);
        observer.on_death(self.id, &self.name);
        true
    }

    /// Bring a downed fighter back for the next round
    pub fn revive(&mut self, physics: &mut PhysicsWorld) {
        self.alive = true;
        self.rig.hurtbox_active = true;
        self.router.set_enabled(true);
        self.request(StateType::Idle, physics);
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Get the current state
    pub fn state(&self) -> StateType {
        self.state_machine.current_state()
    }

    /// Get character's current position
    pub fn position(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        physics.get_rigid_body(self.rig.body_handle).map(|body| {
            let pos = body.translation();
            Vec2::new(pos.x, pos.y)
        })
    }

    /// Get character's current velocity
    pub fn velocity(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        physics.get_rigid_body(self.rig.body_handle).map(|body| {
            let vel = body.linvel();
            Vec2::new(vel.x, vel.y)
        })
    }

    /// Set character position (for round resets)
    pub fn set_position(&self, physics: &mut PhysicsWorld, position: Vec2) {
        if let Some(body) = physics.get_rigid_body_mut(self.rig.body_handle) {
            body.set_translation(Vector::new(position.x, position.y), true);
            body.set_linvel(Vector::new(0.0, 0.0), true);
        }
    }

    /// Check if character is on ground
    pub fn is_grounded(&self, physics: &PhysicsWorld) -> bool {
        self.rig.is_grounded(physics)
    }

    pub fn facing(&self) -> f32 {
        self.rig.facing_direction
    }

    pub fn hitbox_active(&self) -> bool {
        self.rig.hitbox_active
    }

    pub fn hurtbox_active(&self) -> bool {
        self.rig.hurtbox_active
    }
}

/// Holds the two fighters of a match and drives them each tick
#[derive(Debug, Default)]
pub struct CharacterManager {
    characters: Vec<Character>,
    next_id: CharacterId,
}

impl CharacterManager {
    pub fn new() -> Self {
        Self {
            characters: Vec::new(),
            next_id: 0,
        }
    }

    /// Spawn a fighter for `player_index`; None if the match is full or the slot taken
    pub fn spawn_character(
        &mut self,
        name: &str,
        player_index: usize,
        stats: FighterStats,
        config: StateConfig,
        physics: &mut PhysicsWorld,
        spawn: Vec2,
    ) -> Option<CharacterId> {
        if self.characters.len() >= MAX_PLAYERS || self.is_player_taken(player_index) {
            warn!("Cannot spawn {} for player {}", name, player_index);
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        let player = Some(player_index);
        let character = Character::new(id, name, player, stats, config, physics, spawn);
        self.characters.push(character);
        physics.update_queries();

        info!("Spawned {} (id {}) for player {}", name, id, player_index);
        Some(id)
    }

    /// Get a character by ID
    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Get a mutable character by ID
    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    /// Get a character by player index
    pub fn get_by_player(&self, player_index: usize) -> Option<&Character> {
        self.characters
            .iter()
            .find(|c| c.player_index == Some(player_index))
    }

    /// Get a mutable character by player index
    pub fn get_by_player_mut(&mut self, player_index: usize) -> Option<&mut Character> {
        self.characters
            .iter_mut()
            .find(|c| c.player_index == Some(player_index))
    }

    /// The other fighter in the match
    pub fn opponent_of(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id != id)
    }

    /// Get all characters
    pub fn all(&self) -> &[Character] {
        &self.characters
    }

    /// Run one tick for every fighter, then step physics
    ///
    /// `snapshots` is indexed by player; missing entries count as neutral input.
    pub fn update(&mut self, physics: &mut PhysicsWorld, snapshots: &[InputSnapshot]) {
        self.face_opponents(physics);

        let neutral = InputSnapshot::default();
        for character in &mut self.characters {
            let snapshot = character
                .player_index
                .and_then(|index| snapshots.get(index))
                .unwrap_or(&neutral);
            character.tick(physics, snapshot);
        }

        physics.step();
    }

    /// Turn every fighter toward its opponent
    fn face_opponents(&mut self, physics: &PhysicsWorld) {
        let positions: Vec<(CharacterId, Option<Vec2>)> = self
            .characters
            .iter()
            .map(|c| (c.id, c.position(physics)))
            .collect();

        for character in &mut self.characters {
            let own = positions.iter().find(|(id, _)| *id == character.id);
            let other = positions.iter().find(|(id, _)| *id != character.id);

            if let (Some((_, Some(own))), Some((_, Some(other)))) = (own, other) {
                let direction = sign(other.x - own.x);
                if direction != 0.0 {
                    character.rig.facing_direction = direction;
                }
            }
        }
    }

    /// Get the number of characters
    pub fn count(&self) -> usize {
        self.characters.len()
    }

    /// Check if a player index is already taken
    pub fn is_player_taken(&self, player_index: usize) -> bool {
        self.characters
            .iter()
            .any(|c| c.player_index == Some(player_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::Action;

    fn arena() -> PhysicsWorld {
        let mut physics = PhysicsWorld::new();
        let stage = physics.add_rigid_body(presets::stage_body(0.0, -0.5));
        physics.add_collider(presets::stage_collider(40.0, 1.0), stage);
        physics.update_queries();
        physics
    }

    fn fighter(physics: &mut PhysicsWorld, x: f32, y: f32) -> Character {
        let config = StateConfig::standard(Arc::new(Moveset::standard()));
        let character = Character::new(
            0,
            "Test",
            Some(0),
            FighterStats::standard(),
            config,
            physics,
            Vec2::new(x, y),
        );
        physics.update_queries();
        character
    }

    fn run(character: &mut Character, physics: &mut PhysicsWorld, snapshot: &InputSnapshot) {
        character.tick(physics, snapshot);
        physics.step();
    }

    /// Drop a fighter onto the stage and let it come to rest
    fn settled_fighter(physics: &mut PhysicsWorld) -> Character {
        let mut character = fighter(physics, 0.0, 2.0);
        for _ in 0..180 {
            run(&mut character, physics, &InputSnapshot::default());
        }
        character
    }

    #[test]
    fn test_character_manager_new() {
        let manager = CharacterManager::new();
        assert_eq!(manager.count(), 0);
    }

    #[test]
    fn test_spawned_in_idle() {
        let mut physics = arena();
        let character = fighter(&mut physics, 0.0, 1.0);

        assert_eq!(character.state(), StateType::Idle);
        assert_eq!(character.rig.animation.current_animation(), "Idle");
    }

    #[test]
    fn test_dropped_fighter_lands_in_idle() {
        let mut physics = arena();
        let mut character = fighter(&mut physics, 0.0, 3.0);

        run(&mut character, &mut physics, &InputSnapshot::default());
        assert_eq!(character.state(), StateType::Fall);

        for _ in 0..180 {
            run(&mut character, &mut physics, &InputSnapshot::default());
        }

        assert!(character.is_grounded(&physics));
        assert_eq!(character.state(), StateType::Idle);
    }

    #[test]
    fn test_jump_goes_through_fall_back_to_idle() {
        let mut physics = arena();
        let mut character = settled_fighter(&mut physics);
        assert_eq!(character.state(), StateType::Idle);

        let press = InputSnapshot {
            jump_pressed: true,
            jump_held: true,
            ..InputSnapshot::default()
        };
        let hold = InputSnapshot {
            jump_held: true,
            ..InputSnapshot::default()
        };

        let mut states = Vec::new();
        run(&mut character, &mut physics, &press);
        states.push(character.state());
        for _ in 0..10 {
            run(&mut character, &mut physics, &hold);
            states.push(character.state());
        }
        for _ in 0..240 {
            run(&mut character, &mut physics, &InputSnapshot::default());
            states.push(character.state());
        }
        states.dedup();

        assert_eq!(states, vec![StateType::Jump, StateType::Fall, StateType::Idle]);
        assert!(character.is_grounded(&physics));
    }

    #[test]
    fn test_walk_moves_fighter() {
        let mut physics = arena();
        let mut character = settled_fighter(&mut physics);
        let start = character.position(&physics).unwrap();

        for _ in 0..30 {
            run(&mut character, &mut physics, &InputSnapshot::moving(1.0, 0.0));
        }

        assert_eq!(character.state(), StateType::Walk);
        assert!(character.position(&physics).unwrap().x > start.x + 0.5);
        assert!(character.rig.animation.flag("WalkForward"));

        run(&mut character, &mut physics, &InputSnapshot::default());
        run(&mut character, &mut physics, &InputSnapshot::default());
        assert_eq!(character.state(), StateType::Idle);
    }

    #[test]
    fn test_attack_opens_and_closes_hitbox() {
        let mut physics = arena();
        let mut character = settled_fighter(&mut physics);
        let punch = InputSnapshot {
            attacks: vec![Action::Punch],
            ..InputSnapshot::default()
        };

        run(&mut character, &mut physics, &punch);
        assert_eq!(character.state(), StateType::Attack);
        assert_eq!(character.rig.input.last_attack_pressed, None);

        let mut saw_hitbox = false;
        for _ in 0..20 {
            run(&mut character, &mut physics, &InputSnapshot::default());
            saw_hitbox |= character.hitbox_active();
        }

        assert!(saw_hitbox);
        assert!(!character.hitbox_active());
        assert_eq!(character.state(), StateType::Idle);
    }

    #[test]
    fn test_receive_hit_stuns_then_recovers() {
        let mut physics = arena();
        let mut character = settled_fighter(&mut physics);

        assert!(character.receive_hit(&mut physics, 5));
        assert_eq!(character.state(), StateType::HitStun);

        for _ in 0..10 {
            run(&mut character, &mut physics, &InputSnapshot::default());
        }
        assert_eq!(character.state(), StateType::Idle);
    }

    #[test]
    fn test_idle_timeout_recovers_from_none() {
        let mut physics = arena();
        let mut character = settled_fighter(&mut physics);
        let dash = InputSnapshot {
            dash_pressed: true,
            ..InputSnapshot::default()
        };

        run(&mut character, &mut physics, &dash);
        assert_eq!(character.state(), StateType::None);

        for _ in 0..40 {
            run(&mut character, &mut physics, &InputSnapshot::default());
        }
        assert_eq!(character.state(), StateType::Idle);
    }

    /// Records every knockout it is told about
    #[derive(Default)]
    struct DeathLog {
        deaths: Vec<(CharacterId, String)>,
    }

    impl FighterObserver for DeathLog {
        fn on_death(&mut self, id: CharacterId, name: &str) {
            self.deaths.push((id, name.to_string()));
        }
    }

    #[test]
    fn test_disabled_input_stops_a_walking_fighter() {
        let mut physics = arena();
        let mut character = settled_fighter(&mut physics);
        let walk = InputSnapshot::moving(1.0, 0.0);

        for _ in 0..10 {
            run(&mut character, &mut physics, &walk);
        }
        assert_eq!(character.state(), StateType::Walk);

        character.set_input_enabled(false);
        for _ in 0..5 {
            run(&mut character, &mut physics, &walk);
        }
        let stopped_at = character.position(&physics).unwrap();

        for _ in 0..120 {
            run(&mut character, &mut physics, &walk);
        }

        assert_eq!(character.state(), StateType::Idle);
        assert_eq!(character.rig.input.move_input, Vec2::ZERO);
        assert!(!character.rig.input.jump_held);
        let drift = character.position(&physics).unwrap().x - stopped_at.x;
        assert!(drift.abs() < 0.1, "drifted {drift}m with input disabled");
    }

    #[test]
    fn test_death_disables_fighter_and_notifies() {
        let mut physics = arena();
        let mut character = settled_fighter(&mut physics);
        let mut log = DeathLog::default();
        let punch = InputSnapshot {
            attacks: vec![Action::Punch],
            ..InputSnapshot::default()
        };

        run(&mut character, &mut physics, &punch);
        for _ in 0..5 {
            run(&mut character, &mut physics, &InputSnapshot::default());
        }
        assert_eq!(character.state(), StateType::Attack);
        assert!(character.hitbox_active());

        assert!(character.die(&mut physics, &mut log));

        assert!(!character.is_alive());
        assert!(!character.router.is_enabled());
        assert!(!character.hitbox_active());
        assert!(!character.hurtbox_active());
        assert_eq!(character.state(), StateType::None);
        assert_eq!(character.rig.animation.current_animation(), "Idle");
        assert_eq!(log.deaths, vec![(0, "Test".to_string())]);

        // Dead fighters take no input and no hits, and only die once
        for _ in 0..10 {
            run(&mut character, &mut physics, &punch);
            assert!(!character.hitbox_active());
        }
        assert!(!character.receive_hit(&mut physics, 5));
        assert!(!character.die(&mut physics, &mut log));
        assert_eq!(log.deaths.len(), 1);
    }

    #[test]
    fn test_revive_restores_input() {
        let mut physics = arena();
        let mut character = settled_fighter(&mut physics);
        character.die(&mut physics, &mut DeathLog::default());

        character.revive(&mut physics);

        assert!(character.is_alive());
        assert!(character.hurtbox_active());
        assert_eq!(character.state(), StateType::Idle);
        run(&mut character, &mut physics, &InputSnapshot::moving(1.0, 0.0));
        assert_eq!(character.state(), StateType::Walk);
    }

    #[test]
    fn test_manager_faces_fighters_toward_each_other() {
        let mut physics = arena();
        let mut manager = CharacterManager::new();
        let config = StateConfig::standard(Arc::new(Moveset::standard()));
        let stats = FighterStats::standard();

        let left = manager
            .spawn_character(
                "Left",
                0,
                stats.clone(),
                config.clone(),
                &mut physics,
                Vec2::new(-2.0, 1.0),
            )
            .unwrap();
        let right = manager
            .spawn_character(
                "Right",
                1,
                stats.clone(),
                config.clone(),
                &mut physics,
                Vec2::new(2.0, 1.0),
            )
            .unwrap();
        assert!(manager
            .spawn_character("Extra", 2, stats, config, &mut physics, Vec2::ZERO)
            .is_none());

        manager.update(&mut physics, &[]);

        assert_eq!(manager.get(left).unwrap().facing(), 1.0);
        assert_eq!(manager.get(right).unwrap().facing(), -1.0);
        assert_eq!(manager.opponent_of(left).unwrap().id, right);
    }
}
