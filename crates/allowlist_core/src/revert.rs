use crate::SiteId;

/// A revert waiting for the user to confirm or cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertRequest {
    pub site_id: SiteId,
}

/// Confirmation-gated revert: `Idle -> PendingConfirmation -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevertPhase {
    #[default]
    Idle,
    PendingConfirmation(RevertRequest),
}

impl RevertPhase {
    pub fn pending(self) -> Option<RevertRequest> {
        match self {
            RevertPhase::Idle => None,
            RevertPhase::PendingConfirmation(request) => Some(request),
        }
    }
}
