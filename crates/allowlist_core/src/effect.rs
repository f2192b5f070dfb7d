use crate::{AllowListError, EditCursor, SiteId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Move input focus to the cell that just entered edit mode.
    FocusCell(EditCursor),
    /// These sites followed an org default change.
    SitesSynced { site_ids: Vec<SiteId> },
    ShowRevertConfirmation { site_id: SiteId, site_name: String },
    CloseRevertConfirmation,
    SiteReverted { site_id: SiteId },
    CommandRejected(AllowListError),
}
