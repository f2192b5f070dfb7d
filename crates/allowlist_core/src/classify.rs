use std::fmt;

use crate::UrlList;

/// Whether a site follows the org default list or maintains its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InheritanceStatus {
    Inherited,
    Custom,
}

impl fmt::Display for InheritanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InheritanceStatus::Inherited => f.write_str("inherited"),
            InheritanceStatus::Custom => f.write_str("custom"),
        }
    }
}

/// Classify a site's list against the org defaults.
///
/// An explicit status chosen by the user wins; otherwise the site is inherited
/// exactly when its list equals `org_defaults` element for element.
pub fn classify(
    explicit: Option<InheritanceStatus>,
    site_urls: &UrlList,
    org_defaults: &UrlList,
) -> InheritanceStatus {
    if let Some(status) = explicit {
        return status;
    }
    if site_urls.matches(org_defaults) {
        InheritanceStatus::Inherited
    } else {
        InheritanceStatus::Custom
    }
}
