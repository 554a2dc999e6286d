// Input handling system
//
// Device binding lives outside this crate; here we only track which fighter
// actions are held and produce one `InputSnapshot` per simulation tick.
//
// ## Architecture
//
// - `action`: Fighter actions (movement, jump, dash, the four attack buttons)
// - `player`: Per-player pressed / just-pressed tracking and snapshots
//
// ## Usage Example
//
// ```rust
// use brawl_fsm::engine::input::{Action, PlayerInput};
//
// let mut input = PlayerInput::new(0);
// input.press(Action::MoveRight);
// input.press(Action::Punch);
//
// // Once per tick, hand the snapshot to the fighter and advance the frame
// let snapshot = input.snapshot();
// input.end_tick();
// ```

pub mod action;
pub mod player;

// Re-export commonly used types
pub use action::Action;
pub use player::{InputSnapshot, PlayerInput};
