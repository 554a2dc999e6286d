// Recording character context for state and machine tests

use super::context::{AttackTokenSlot, CharacterOutput, CharacterQuery, InputSink};
use super::state::StateType;
use crate::game::combat::AttackType;
use glam::Vec2;
use std::cell::Cell;
use std::collections::HashMap;

/// Scriptable physics/input facts plus a log of every outcome requested
#[derive(Debug)]
pub struct MockContext {
    pub grounded: bool,
    pub velocity: Vec2,
    pub move_input: Vec2,
    pub jump_held: bool,
    pub facing: f32,
    pub token: Option<AttackType>,
    pub clip_length: Option<f32>,

    pub velocities: Vec<Vec2>,
    pub forces: Vec<Vec2>,
    pub animations: Vec<String>,
    pub flags: HashMap<String, bool>,
    pub triggers: Vec<String>,
    pub hitbox: Vec<bool>,
    pub transitions: Vec<(StateType, StateType)>,
    pub token_reads: Cell<u32>,
    pub token_clears: u32,
}

impl MockContext {
    pub fn grounded() -> Self {
        Self {
            grounded: true,
            velocity: Vec2::ZERO,
            move_input: Vec2::ZERO,
            jump_held: false,
            facing: 1.0,
            token: None,
            clip_length: None,
            velocities: Vec::new(),
            forces: Vec::new(),
            animations: Vec::new(),
            flags: HashMap::new(),
            triggers: Vec::new(),
            hitbox: Vec::new(),
            transitions: Vec::new(),
            token_reads: Cell::new(0),
            token_clears: 0,
        }
    }

    pub fn airborne() -> Self {
        Self {
            grounded: false,
            ..Self::grounded()
        }
    }

    pub fn trigger_count(&self, name: &str) -> usize {
        self.triggers.iter().filter(|t| t.as_str() == name).count()
    }
}

impl CharacterQuery for MockContext {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn move_input(&self) -> Vec2 {
        self.move_input
    }

    fn jump_held(&self) -> bool {
        self.jump_held
    }

    fn facing(&self) -> f32 {
        self.facing
    }

    fn current_clip_length(&self) -> Option<f32> {
        self.clip_length
    }
}

impl CharacterOutput for MockContext {
    fn apply_force(&mut self, force: Vec2) {
        self.forces.push(force);
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
        self.velocities.push(velocity);
    }

    fn play_animation(&mut self, name: &str) {
        self.animations.push(name.to_string());
    }

    fn set_animator_flag(&mut self, name: &str, value: bool) {
        self.flags.insert(name.to_string(), value);
    }

    fn set_animator_trigger(&mut self, name: &str) {
        self.triggers.push(name.to_string());
    }

    fn set_hitbox_active(&mut self, active: bool) {
        self.hitbox.push(active);
    }

    fn on_transition(&mut self, from: StateType, to: StateType) {
        self.transitions.push((from, to));
    }
}

impl AttackTokenSlot for MockContext {
    fn peek_last_attack_pressed(&self) -> Option<AttackType> {
        self.token_reads.set(self.token_reads.get() + 1);
        self.token
    }

    fn set_last_attack_pressed(&mut self, attack: AttackType) {
        self.token = Some(attack);
    }

    fn clear_last_attack_pressed(&mut self) {
        self.token_clears += 1;
        self.token = None;
    }
}

impl InputSink for MockContext {
    fn set_move_input(&mut self, move_input: Vec2) {
        self.move_input = move_input;
    }

    fn set_jump_held(&mut self, held: bool) {
        self.jump_held = held;
    }
}
