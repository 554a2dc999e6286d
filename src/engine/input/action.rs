// Fighter action definitions

/// Represents all possible in-match actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Up,
    Down,
    Jump,
    Dash,

    // Attack buttons
    Punch,
    Kick,
    Slash,
    Unique,
}

/// Attack buttons in the order presses are reported within one tick
pub const ATTACK_BUTTONS: [Action; 4] =
    [Action::Punch, Action::Kick, Action::Slash, Action::Unique];

impl Action {
    /// Check if this action is one of the four attack buttons
    pub fn is_attack(&self) -> bool {
        matches!(self, Self::Punch | Self::Kick | Self::Slash | Self::Unique)
    }

    /// Check if this action contributes to the movement vector
    pub fn is_directional(&self) -> bool {
        matches!(self, Self::MoveLeft | Self::MoveRight | Self::Up | Self::Down)
    }
}
