// Character state machine
//
// This module contains the per-character behavior core:
// - State identifiers with the priority and interruptibility tables
// - The collaborator traits states read facts from and send outcomes to
// - One behavior per state, dispatched through `StateBehavior`
// - The `StateMachine` transition policy and the `InputRouter` in front of it
//
// Diagnostics are logged under `fsm::<state>`, `fsm::machine` and
// `fsm::router`, so `RUST_LOG=fsm::attack=debug` narrows output to one state.

pub mod behavior;
pub mod capability;
pub mod config;
pub mod context;
pub mod error;
pub mod machine;
pub mod router;
pub mod state;
pub mod states;

#[cfg(test)]
pub mod testing;

// Re-export commonly used types
pub use behavior::{StateBehavior, StateFlow};
pub use capability::Capabilities;
pub use config::StateConfig;
pub use context::{AttackTokenSlot, CharacterContext, CharacterOutput, CharacterQuery, InputSink};
pub use error::FsmError;
pub use machine::{StateMachine, TransitionOutcome};
pub use router::InputRouter;
pub use state::{InterruptibilityTable, PriorityTable, StateType};
