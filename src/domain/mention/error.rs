use thiserror::Error;

use crate::domain::id::{TeamId, UserId};
use crate::domain::DomainError;

/// Reasons a set of mentions is rejected
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MentionValidationError {
    #[error("Cannot mention a non team member")]
    NonMember { user_ids: Vec<UserId> },

    #[error("Mentioned team not found or not associated with project")]
    TeamNotAssociated { team_ids: Vec<TeamId> },
}

impl From<MentionValidationError> for DomainError {
    fn from(error: MentionValidationError) -> Self {
        DomainError::validation(error.to_string())
    }
}
