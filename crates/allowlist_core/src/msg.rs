use crate::{EditCursor, InheritanceStatus, SiteId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked "add" under the org default list.
    AddOrgUrl,
    /// Add a finished org URL; accepted or rejected as a whole.
    AppendOrgUrl { value: String },
    EditOrgUrl { index: usize, value: String },
    DeleteOrgUrl { index: usize },
    /// User clicked "add" under a site's list.
    AddSiteUrl { site_id: SiteId },
    /// Add a finished URL to a site's list; accepted or rejected as a whole.
    AppendSiteUrl { site_id: SiteId, value: String },
    EditSiteUrl {
        site_id: SiteId,
        index: usize,
        value: String,
    },
    DeleteSiteUrl { site_id: SiteId, index: usize },
    /// User flipped the inherited/custom toggle on a site row.
    SetSiteStatus {
        site_id: SiteId,
        status: InheritanceStatus,
    },
    /// User clicked "revert to default"; opens the confirmation dialog.
    RevertRequested { site_id: SiteId },
    RevertConfirmed,
    RevertCancelled,
    /// User clicked a URL cell.
    BeginEdit(EditCursor),
    /// Text typed into the cell under the edit cursor.
    CursorInput(String),
    /// Blur or Enter.
    CommitEdit,
    /// Escape.
    CancelEdit,
    NoOp,
}
