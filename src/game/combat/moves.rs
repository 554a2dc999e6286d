// Move definitions, movesets and the move catalog

use crate::engine::game_loop::frames_to_secs;
use std::collections::HashMap;
use std::sync::Arc;

/// The four attack buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackType {
    Punch,
    Kick,
    Slash,
    Unique,
}

impl AttackType {
    /// Short button notation used in move names (5P, 2K, j.S ...)
    pub fn notation(&self) -> char {
        match self {
            Self::Punch => 'P',
            Self::Kick => 'K',
            Self::Slash => 'S',
            Self::Unique => 'U',
        }
    }
}

/// Direction that has to be held for a move to come out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Nothing held (5P)
    #[default]
    Neutral,
    /// Toward the opponent (6P)
    Forward,
    /// Crouching (2P)
    Down,
    /// Up (8P)
    Up,
}

impl Direction {
    /// Numpad notation digit
    pub fn notation(&self) -> char {
        match self {
            Self::Neutral => '5',
            Self::Forward => '6',
            Self::Down => '2',
            Self::Up => '8',
        }
    }
}

/// Guard height the defender needs to block the move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Guard {
    #[default]
    High,
    Low,
    All,
}

/// Behavior flags of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveFlags {
    /// Usable while airborne
    pub airborne: bool,
    /// Hits low and knocks down
    pub sweep: bool,
    /// Hits crouching opponents
    pub overhead: bool,
    /// Absorbs hits while active
    pub armored: bool,
    /// Attacker is invincible while performing it
    pub invincible: bool,
    /// Ignores the defender's guard
    pub guard_break: bool,
}

impl MoveFlags {
    pub const NONE: Self = Self {
        airborne: false,
        sweep: false,
        overhead: false,
        armored: false,
        invincible: false,
        guard_break: false,
    };

    pub const AIRBORNE: Self = Self {
        airborne: true,
        ..Self::NONE
    };
}

/// A single move, immutable once loaded
#[derive(Debug, Clone, PartialEq)]
pub struct MoveDefinition {
    pub name: String,
    pub attack: AttackType,
    pub direction: Direction,
    pub guard: Guard,
    pub damage: f32,
    /// Frames before the first active frame
    pub startup: u32,
    /// Frames the hitbox is out
    pub active: u32,
    /// Frames after the active window before the fighter can act
    pub recovery: u32,
    /// Frames the defender is held in block
    pub blockstun: u32,
    pub flags: MoveFlags,
    /// Animation clip played while the move is out
    pub animation: String,
}

impl MoveDefinition {
    /// Create a move with the default name/animation derived from its input
    pub fn new(
        attack: AttackType,
        direction: Direction,
        startup: u32,
        active: u32,
        recovery: u32,
    ) -> Self {
        let name = format!("{}{}", direction.notation(), attack.notation());
        Self {
            animation: name.clone(),
            name,
            attack,
            direction,
            guard: Guard::High,
            damage: 0.0,
            startup,
            active,
            recovery,
            blockstun: 0,
            flags: MoveFlags::NONE,
        }
    }

    pub fn with_damage(mut self, damage: f32) -> Self {
        self.damage = damage;
        self
    }

    pub fn with_guard(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }

    pub fn with_blockstun(mut self, blockstun: u32) -> Self {
        self.blockstun = blockstun;
        self
    }

    pub fn with_flags(mut self, flags: MoveFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Airborne version of the move (j.P, j.K ...)
    pub fn airborne(mut self) -> Self {
        self.flags.airborne = true;
        self.name = format!("j.{}", self.attack.notation());
        self.animation = self.name.clone();
        self
    }

    /// Total frames from press to the end of recovery
    pub fn total_frames(&self) -> u32 {
        self.startup + self.active + self.recovery
    }

    /// Total duration in seconds at the simulation rate
    pub fn duration_secs(&self) -> f32 {
        frames_to_secs(self.total_frames())
    }

    /// Check if this move is the one for the given input and context
    pub fn matches(&self, attack: AttackType, direction: Direction, airborne: bool) -> bool {
        self.attack == attack && self.direction == direction && self.flags.airborne == airborne
    }
}

/// Ordered collection of moves belonging to one character
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Moveset {
    name: String,
    moves: Vec<MoveDefinition>,
}

impl Moveset {
    pub fn new(name: &str, moves: Vec<MoveDefinition>) -> Self {
        Self {
            name: name.to_string(),
            moves,
        }
    }

    /// The example moveset every fighter ships with
    pub fn standard() -> Self {
        use AttackType::*;
        use Direction::*;

        Self::new(
            "standard",
            vec![
                MoveDefinition::new(Punch, Neutral, 4, 3, 8).with_damage(3.0).with_blockstun(9),
                MoveDefinition::new(Kick, Neutral, 7, 3, 12).with_damage(5.0).with_blockstun(11),
                MoveDefinition::new(Slash, Neutral, 10, 4, 16).with_damage(8.0).with_blockstun(14),
                MoveDefinition::new(Unique, Neutral, 14, 6, 20)
                    .with_damage(10.0)
                    .with_flags(MoveFlags {
                        armored: true,
                        ..MoveFlags::NONE
                    }),
                MoveDefinition::new(Punch, Forward, 12, 3, 15)
                    .with_damage(7.0)
                    .with_flags(MoveFlags {
                        overhead: true,
                        ..MoveFlags::NONE
                    }),
                MoveDefinition::new(Kick, Down, 8, 3, 18)
                    .with_damage(6.0)
                    .with_guard(Guard::Low)
                    .with_flags(MoveFlags {
                        sweep: true,
                        ..MoveFlags::NONE
                    }),
                MoveDefinition::new(Punch, Neutral, 5, 4, 6).with_damage(4.0).airborne(),
                MoveDefinition::new(Kick, Neutral, 7, 5, 8).with_damage(6.0).airborne(),
            ],
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn moves(&self) -> &[MoveDefinition] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Index of the first move in declaration order matching the input and context
    pub fn find_index(
        &self,
        attack: AttackType,
        direction: Direction,
        airborne: bool,
    ) -> Option<usize> {
        self.moves
            .iter()
            .position(|m| m.matches(attack, direction, airborne))
    }

    /// First move in declaration order matching the input and context
    pub fn find(
        &self,
        attack: AttackType,
        direction: Direction,
        airborne: bool,
    ) -> Option<&MoveDefinition> {
        self.find_index(attack, direction, airborne)
            .and_then(|index| self.moves.get(index))
    }
}

/// Read-only registry of movesets, shared by every fighter in a match
#[derive(Debug, Clone, Default)]
pub struct MoveCatalog {
    movesets: HashMap<String, Arc<Moveset>>,
}

impl MoveCatalog {
    pub fn new() -> Self {
        Self {
            movesets: HashMap::new(),
        }
    }

    /// Catalog holding only the standard moveset
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.insert(Moveset::standard());
        catalog
    }

    /// Register a moveset under its own name, replacing any previous one
    pub fn insert(&mut self, moveset: Moveset) -> Arc<Moveset> {
        let moveset = Arc::new(moveset);
        self.movesets
            .insert(moveset.name().to_string(), Arc::clone(&moveset));
        moveset
    }

    pub fn get(&self, name: &str) -> Option<Arc<Moveset>> {
        self.movesets.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.movesets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movesets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_move_naming() {
        let jab = MoveDefinition::new(AttackType::Punch, Direction::Neutral, 4, 3, 8);
        assert_eq!(jab.name, "5P");
        assert_eq!(jab.animation, "5P");

        let sweep = MoveDefinition::new(AttackType::Kick, Direction::Down, 8, 3, 18);
        assert_eq!(sweep.name, "2K");

        let air = MoveDefinition::new(AttackType::Slash, Direction::Neutral, 5, 3, 5).airborne();
        assert_eq!(air.name, "j.S");
        assert!(air.flags.airborne);
    }

    #[test]
    fn test_move_duration() {
        let m = MoveDefinition::new(AttackType::Punch, Direction::Neutral, 10, 5, 15);
        assert_eq!(m.total_frames(), 30);
        assert_relative_eq!(m.duration_secs(), 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_moveset_find_respects_context() {
        let moveset = Moveset::standard();

        let ground = moveset
            .find(AttackType::Punch, Direction::Neutral, false)
            .unwrap();
        assert_eq!(ground.name, "5P");

        let air = moveset
            .find(AttackType::Punch, Direction::Neutral, true)
            .unwrap();
        assert_eq!(air.name, "j.P");

        assert!(moveset
            .find(AttackType::Slash, Direction::Up, false)
            .is_none());
        assert!(moveset
            .find(AttackType::Unique, Direction::Neutral, true)
            .is_none());
    }

    #[test]
    fn test_moveset_find_first_declared_wins() {
        let first =
            MoveDefinition::new(AttackType::Kick, Direction::Neutral, 3, 3, 3).with_damage(1.0);
        let second =
            MoveDefinition::new(AttackType::Kick, Direction::Neutral, 9, 9, 9).with_damage(2.0);
        let moveset = Moveset::new("dupes", vec![first.clone(), second]);

        let found = moveset
            .find(AttackType::Kick, Direction::Neutral, false)
            .unwrap();
        assert_eq!(found, &first);
        assert_eq!(
            moveset.find_index(AttackType::Kick, Direction::Neutral, false),
            Some(0)
        );
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = MoveCatalog::standard();
        assert_eq!(catalog.len(), 1);

        let moveset = catalog.get("standard").unwrap();
        assert!(!moveset.is_empty());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_catalog_shares_movesets() {
        let mut catalog = MoveCatalog::new();
        let inserted = catalog.insert(Moveset::new("solo", Vec::new()));
        let fetched = catalog.get("solo").unwrap();
        assert!(Arc::ptr_eq(&inserted, &fetched));
    }
}
