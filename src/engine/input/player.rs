// Per-player input state management

use super::action::{Action, ATTACK_BUTTONS};
use crate::core::math::apply_dead_zone;
use glam::Vec2;
use std::collections::HashSet;

/// Raw input intents for one simulation tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// Movement vector, each axis in [-1, 1] (x: left/right, y: down/up)
    pub move_input: Vec2,
    /// Jump was pressed this tick
    pub jump_pressed: bool,
    /// Jump is being held
    pub jump_held: bool,
    /// Dash was pressed this tick
    pub dash_pressed: bool,
    /// Attack buttons pressed this tick, in button order
    pub attacks: Vec<Action>,
}

impl InputSnapshot {
    /// Snapshot with only a movement vector
    pub fn moving(x: f32, y: f32) -> Self {
        Self {
            move_input: Vec2::new(x, y),
            ..Self::default()
        }
    }

    /// Check if nothing is pressed or held; stick drift inside the dead zone counts as neutral
    pub fn is_neutral(&self) -> bool {
        apply_dead_zone(self.move_input.x) == 0.0
            && apply_dead_zone(self.move_input.y) == 0.0
            && !self.jump_pressed
            && !self.jump_held
            && !self.dash_pressed
            && self.attacks.is_empty()
    }
}

/// Represents the input state for a single player
#[derive(Debug)]
pub struct PlayerInput {
    /// Player ID (0 or 1)
    player_id: usize,

    /// Actions that are currently pressed
    pressed: HashSet<Action>,

    /// Actions that were pressed since the last tick
    just_pressed: HashSet<Action>,
}

impl PlayerInput {
    /// Create a new player input state
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
        }
    }

    pub fn player_id(&self) -> usize {
        self.player_id
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was pressed since the last tick
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Clear per-tick press events. Call once per tick after the snapshot is taken
    pub fn end_tick(&mut self) {
        self.just_pressed.clear();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }

    /// Get directional input as a vector (-1.0 to 1.0 on each axis)
    pub fn direction(&self) -> Vec2 {
        let mut direction = Vec2::ZERO;

        if self.is_pressed(Action::MoveLeft) {
            direction.x -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            direction.x += 1.0;
        }
        if self.is_pressed(Action::Down) {
            direction.y -= 1.0;
        }
        if self.is_pressed(Action::Up) {
            direction.y += 1.0;
        }

        direction
    }

    /// Build the raw intent snapshot for this tick
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            move_input: self.direction(),
            jump_pressed: self.just_pressed(Action::Jump),
            jump_held: self.is_pressed(Action::Jump),
            dash_pressed: self.just_pressed(Action::Dash),
            attacks: ATTACK_BUTTONS
                .iter()
                .copied()
                .filter(|button| self.just_pressed(*button))
                .collect(),
        }
    }
}
