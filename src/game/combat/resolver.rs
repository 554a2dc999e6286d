// Attack selection and phase tracking

use super::moves::{AttackType, Direction, MoveDefinition, Moveset};
use crate::core::math::AXIS_DEAD_ZONE;
use glam::Vec2;
use std::sync::Arc;

/// Input direction and air/ground context an attack is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stance {
    pub direction: Direction,
    pub airborne: bool,
}

impl Stance {
    pub fn grounded(direction: Direction) -> Self {
        Self {
            direction,
            airborne: false,
        }
    }

    pub fn airborne(direction: Direction) -> Self {
        Self {
            direction,
            airborne: true,
        }
    }

    /// Derive the stance from the held movement vector
    ///
    /// Vertical input wins over horizontal; holding away from the opponent
    /// counts as neutral since movesets have no back-direction moves.
    pub fn from_input(move_input: Vec2, facing: f32, airborne: bool) -> Self {
        let direction = if move_input.y <= -AXIS_DEAD_ZONE {
            Direction::Down
        } else if move_input.y >= AXIS_DEAD_ZONE {
            Direction::Up
        } else if move_input.x * facing >= AXIS_DEAD_ZONE {
            Direction::Forward
        } else {
            Direction::Neutral
        };

        Self {
            direction,
            airborne,
        }
    }
}

/// Where an attack is within its frame data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackPhase {
    Startup,
    Active,
    Recovery,
    Finished,
}

impl AttackPhase {
    /// Phase of `definition` after `elapsed` frames
    pub fn at(definition: &MoveDefinition, elapsed: u32) -> Self {
        let active_start = definition.startup;
        let recovery_start = active_start + definition.active;

        if elapsed < active_start {
            Self::Startup
        } else if elapsed < recovery_start {
            Self::Active
        } else if elapsed < definition.total_frames() {
            Self::Recovery
        } else {
            Self::Finished
        }
    }

    /// Check if the hitbox is out during this phase
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Picks the concrete move for an attack press out of a character's moveset
#[derive(Debug, Clone)]
pub struct AttackResolver {
    moveset: Arc<Moveset>,
    selected: Option<usize>,
}

impl AttackResolver {
    pub fn new(moveset: Arc<Moveset>) -> Self {
        Self {
            moveset,
            selected: None,
        }
    }

    /// Select the first move matching the attack and stance
    ///
    /// Returns false and leaves the previous selection untouched when the
    /// moveset has no such move.
    pub fn select_attack(&mut self, attack: AttackType, stance: Stance) -> bool {
        let found = self
            .moveset
            .find_index(attack, stance.direction, stance.airborne);

        match found {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    /// The currently selected move
    pub fn selected(&self) -> Option<&MoveDefinition> {
        self.selected.and_then(|index| self.moveset.moves().get(index))
    }

    /// Total frames of the selected move (0 when nothing is selected)
    pub fn duration_frames(&self) -> u32 {
        self.selected().map_or(0, MoveDefinition::total_frames)
    }

    /// Phase of the selected move after `elapsed` frames
    pub fn phase(&self, elapsed: u32) -> AttackPhase {
        match self.selected() {
            Some(definition) => AttackPhase::at(definition, elapsed),
            None => AttackPhase::Finished,
        }
    }

    pub fn moveset(&self) -> &Moveset {
        &self.moveset
    }
}
