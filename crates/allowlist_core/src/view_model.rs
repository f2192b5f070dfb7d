use crate::{EditCursor, InheritanceStatus, Product, SiteActivity, SiteId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminViewModel {
    pub org_urls: Vec<UrlCellView>,
    pub sites: Vec<SiteRowView>,
    pub edit_cursor: Option<EditCursor>,
    pub pending_revert: Option<RevertPromptView>,
    pub dirty: bool,
}

/// One URL cell. `looks_valid` and `duplicate` are hints only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlCellView {
    pub index: usize,
    pub value: String,
    pub editing: bool,
    pub looks_valid: bool,
    pub duplicate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRowView {
    pub site_id: SiteId,
    pub name: String,
    pub url: String,
    pub product: Product,
    pub server_count: u32,
    pub activity: SiteActivity,
    pub status: InheritanceStatus,
    /// The status comes from a user choice rather than from comparing lists.
    pub explicit_status: bool,
    pub urls: Vec<UrlCellView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevertPromptView {
    pub site_id: SiteId,
    pub site_name: String,
    pub org_url_count: usize,
}
