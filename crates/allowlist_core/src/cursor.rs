use crate::SiteId;

/// Which list a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    Org,
    Site(SiteId),
}

/// The single URL cell currently in edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditCursor {
    pub scope: ListScope,
    pub url_index: usize,
}

impl EditCursor {
    pub fn org(url_index: usize) -> Self {
        Self {
            scope: ListScope::Org,
            url_index,
        }
    }

    pub fn site(site_id: SiteId, url_index: usize) -> Self {
        Self {
            scope: ListScope::Site(site_id),
            url_index,
        }
    }

    /// Where the cursor should point after `removed` is deleted from its list.
    /// `None` when the cursor was on the removed entry.
    pub(crate) fn after_removal(self, removed: usize) -> Option<Self> {
        match self.url_index.cmp(&removed) {
            std::cmp::Ordering::Less => Some(self),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(Self {
                url_index: self.url_index - 1,
                ..self
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_before_cursor_shifts_it_left() {
        assert_eq!(EditCursor::org(3).after_removal(1), Some(EditCursor::org(2)));
        assert_eq!(EditCursor::site(4, 1).after_removal(1), None);
        assert_eq!(EditCursor::site(4, 0).after_removal(1), Some(EditCursor::site(4, 0)));
    }
}
