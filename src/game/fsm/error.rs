// State machine error taxonomy

use super::state::StateType;

/// Errors raised while resolving transitions
///
/// None of these ever stop the simulation: the machine applies its safe
/// fallback before returning, callers log and carry on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FsmError {
    #[error("No configuration supplied for the {state} state")]
    ConfigurationMissing { state: StateType },

    #[error("The {state} state does not exist, falling back to None")]
    InvalidStateRequested { state: StateType },

    #[error("No attack selected: {reason}")]
    NoAttackSelected { reason: String },
}

impl FsmError {
    /// Errors that indicate a wiring bug rather than an expected runtime miss
    pub fn is_integration_bug(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationMissing { .. } | Self::InvalidStateRequested { .. }
        )
    }
}
