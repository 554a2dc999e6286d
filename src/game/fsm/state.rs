// State identifiers and the static priority / interruptibility tables

use std::fmt;

/// Number of `StateType` variants
pub const STATE_COUNT: usize = 13;

/// Identifies what a character is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateType {
    /// Bottom state, used before initialisation and as the fallback target
    None,
    /// Standing still on ground
    Idle,
    /// Moving horizontally on ground
    Walk,
    Run,
    /// In the air, rising
    Jump,
    /// In the air, falling or cut short
    Fall,
    /// Grounded attack
    Attack,
    /// Attack performed while airborne
    AirborneAttack,
    Dash,
    Block,
    Knockdown,
    /// Reeling from a hit
    HitStun,
    Dead,
}

impl Default for StateType {
    fn default() -> Self {
        Self::None
    }
}

impl StateType {
    pub const ALL: [StateType; STATE_COUNT] = [
        Self::None,
        Self::Idle,
        Self::Walk,
        Self::Run,
        Self::Jump,
        Self::Fall,
        Self::Attack,
        Self::AirborneAttack,
        Self::Dash,
        Self::Block,
        Self::Knockdown,
        Self::HitStun,
        Self::Dead,
    ];

    /// States that are recognised but have no behavior yet; requests for them are dropped
    pub fn is_reserved(&self) -> bool {
        matches!(self, Self::Run | Self::Block | Self::Knockdown | Self::Dead)
    }

    /// Check if this is one of the attack states
    pub fn is_attacking(&self) -> bool {
        matches!(self, Self::Attack | Self::AirborneAttack)
    }

    /// Check if this state can only be held in the air
    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Jump | Self::Fall | Self::AirborneAttack)
    }

    /// Check if the character has control in this state
    pub fn is_actionable(&self) -> bool {
        !matches!(
            self,
            Self::Attack | Self::AirborneAttack | Self::HitStun | Self::Knockdown | Self::Dead
        )
    }

    /// Log target used for diagnostics emitted while in this state
    pub fn log_target(&self) -> &'static str {
        match self {
            Self::None => "fsm::none",
            Self::Idle => "fsm::idle",
            Self::Walk => "fsm::walk",
            Self::Run => "fsm::run",
            Self::Jump => "fsm::jump",
            Self::Fall => "fsm::fall",
            Self::Attack => "fsm::attack",
            Self::AirborneAttack => "fsm::airborne_attack",
            Self::Dash => "fsm::dash",
            Self::Block => "fsm::block",
            Self::Knockdown => "fsm::knockdown",
            Self::HitStun => "fsm::hit_stun",
            Self::Dead => "fsm::dead",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for StateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Rank of every state; higher value takes precedence
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityTable {
    ranks: [i32; STATE_COUNT],
}

impl PriorityTable {
    /// The ranks used in matches
    pub const STANDARD: Self = Self {
        ranks: [
            0, // None
            1, // Idle
            2, // Walk
            2, // Run
            3, // Jump
            3, // Fall
            4, // Attack
            4, // AirborneAttack
            3, // Dash
            5, // Block
            7, // Knockdown
            6, // HitStun
            8, // Dead
        ],
    };

    /// Build a table from explicit ranks; states left out rank at `i32::MIN`
    pub fn from_ranks(ranks: &[(StateType, i32)]) -> Self {
        let mut table = Self {
            ranks: [i32::MIN; STATE_COUNT],
        };
        for (state, rank) in ranks {
            table.ranks[state.index()] = *rank;
        }
        table
    }

    pub fn priority(&self, state: StateType) -> i32 {
        self.ranks[state.index()]
    }

    /// Check if `requested` strictly outranks `current`
    pub fn outranks(&self, requested: StateType, current: StateType) -> bool {
        self.priority(requested) > self.priority(current)
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Whether a state may be pre-empted by a request that does not outrank it
///
/// Every state is non-interruptible by default, which makes strictly greater
/// priority the only way in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InterruptibilityTable {
    interruptible: [bool; STATE_COUNT],
}

impl InterruptibilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `state` as interruptible by same-or-lower priority requests
    pub fn with_interruptible(mut self, state: StateType) -> Self {
        self.interruptible[state.index()] = true;
        self
    }

    pub fn can_be_interrupted(&self, state: StateType) -> bool {
        self.interruptible[state.index()]
    }
}
