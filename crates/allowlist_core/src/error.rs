use thiserror::Error;

use crate::SiteId;

/// Reasons the engine refuses a command. A refused command never changes state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllowListError {
    #[error("url index {index} is out of range for a list of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("unknown site id {0}")]
    UnknownSite(SiteId),
    #[error("invalid state transition: {action}")]
    InvalidStateTransition { action: &'static str },
}
