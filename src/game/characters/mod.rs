// Character system
//
// This module contains the fighters driven by the state machine:
// - Character data structure, its rapier-backed context and match management
// - Fighter stats and properties
// - Animation player standing in for the animator

pub mod animation;
pub mod character;
pub mod stats;

// Re-export commonly used types
pub use animation::{AnimationClip, AnimationPlayer};
pub use character::{
    Character, CharacterId, CharacterManager, FighterContext, FighterObserver, FighterRig,
    InputState,
};
pub use stats::FighterStats;
