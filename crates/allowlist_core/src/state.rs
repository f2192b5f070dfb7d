use std::collections::BTreeMap;

use allowlist_logging::{allowlist_debug, allowlist_info};

use crate::classify::classify;
use crate::view_model::{AdminViewModel, RevertPromptView, SiteRowView, UrlCellView};
use crate::{
    looks_like_url, normalize_url_for_compare, AllowListError, EditCursor, InheritanceStatus,
    ListScope, RevertPhase, RevertRequest, Seed, Site, SiteId, UrlList,
};

static EMPTY_URL_LIST: UrlList = UrlList::new();

/// The allow-list engine: org defaults, per-site overrides, explicit status
/// choices, the edit cursor and the revert workflow.
///
/// All writes go through the methods below so that an org change and the
/// sync of inherited sites happen as one step. `Default` is an empty engine
/// with no sites; [`AllowListState::new`] loads the built-in seed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllowListState {
    sites: Vec<Site>,
    org_defaults: UrlList,
    site_urls: BTreeMap<SiteId, UrlList>,
    status_overrides: BTreeMap<SiteId, InheritanceStatus>,
    edit_cursor: Option<EditCursor>,
    revert: RevertPhase,
    dirty: bool,
}

impl AllowListState {
    pub fn new() -> Self {
        Self::from_seed(Seed::default())
    }

    /// Every site starts with its own copy of the org defaults.
    pub fn from_seed(seed: Seed) -> Self {
        let site_urls = (0..seed.sites.len())
            .map(|site_id| (site_id, seed.org_defaults.clone()))
            .collect();
        Self {
            sites: seed.sites,
            org_defaults: seed.org_defaults,
            site_urls,
            ..Self::default()
        }
    }

    // --- queries -------------------------------------------------------

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn site(&self, site_id: SiteId) -> Result<&Site, AllowListError> {
        self.sites
            .get(site_id)
            .ok_or(AllowListError::UnknownSite(site_id))
    }

    pub fn org_default_list(&self) -> &UrlList {
        &self.org_defaults
    }

    /// A registered site without a stored list reads as empty.
    pub fn site_url_list(&self, site_id: SiteId) -> Result<&UrlList, AllowListError> {
        self.site(site_id)?;
        Ok(self.stored_list(site_id))
    }

    /// Recomputed on every call; nothing is cached.
    pub fn site_status(&self, site_id: SiteId) -> Result<InheritanceStatus, AllowListError> {
        self.site(site_id)?;
        Ok(self.classify_against(site_id, &self.org_defaults))
    }

    pub fn status_override(&self, site_id: SiteId) -> Option<InheritanceStatus> {
        self.status_overrides.get(&site_id).copied()
    }

    pub fn edit_cursor(&self) -> Option<EditCursor> {
        self.edit_cursor
    }

    pub fn revert_phase(&self) -> RevertPhase {
        self.revert
    }

    pub fn pending_revert(&self) -> Option<RevertRequest> {
        self.revert.pending()
    }

    // --- org default list ----------------------------------------------

    /// Appends a blank org URL and puts it in edit mode.
    /// Returns the sites that followed the change.
    pub fn add_org_url(&mut self) -> Vec<SiteId> {
        let previous = self.org_defaults.clone();
        let new_index = self.org_defaults.push_blank();
        self.edit_cursor = Some(EditCursor::org(new_index));
        self.sync_inherited_sites(&previous, None)
    }

    /// Appends a finished org URL in one step: the active edit cell, if any,
    /// is left where it is. Returns the sites that followed the change.
    pub fn append_org_url(&mut self, value: impl Into<String>) -> Vec<SiteId> {
        let previous = self.org_defaults.clone();
        self.org_defaults.push(value);
        self.sync_inherited_sites(&previous, None)
    }

    pub fn edit_org_url(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<Vec<SiteId>, AllowListError> {
        let previous = self.org_defaults.clone();
        self.org_defaults.update(index, value)?;
        Ok(self.sync_inherited_sites(&previous, None))
    }

    pub fn delete_org_url(&mut self, index: usize) -> Result<Vec<SiteId>, AllowListError> {
        let previous = self.org_defaults.clone();
        self.org_defaults.remove(index)?;
        self.shift_cursor_after_removal(ListScope::Org, index);
        Ok(self.sync_inherited_sites(&previous, Some(index)))
    }

    // --- site override lists -------------------------------------------

    /// Appends a blank URL to a site's list and puts it in edit mode.
    pub fn add_site_url(&mut self, site_id: SiteId) -> Result<usize, AllowListError> {
        self.site(site_id)?;
        let new_index = self.site_urls.entry(site_id).or_default().push_blank();
        self.edit_cursor = Some(EditCursor::site(site_id, new_index));
        self.mark_dirty();
        Ok(new_index)
    }

    /// Appends a finished URL to a site's list in one step, leaving the
    /// active edit cell alone. Nothing changes if the site is unknown.
    pub fn append_site_url(
        &mut self,
        site_id: SiteId,
        value: impl Into<String>,
    ) -> Result<usize, AllowListError> {
        self.site(site_id)?;
        let new_index = self.site_urls.entry(site_id).or_default().push(value);
        self.mark_dirty();
        Ok(new_index)
    }

    pub fn edit_site_url(
        &mut self,
        site_id: SiteId,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), AllowListError> {
        self.site_url_list(site_id)?.check_index(index)?;
        self.site_urls.entry(site_id).or_default().update(index, value)?;
        self.mark_dirty();
        Ok(())
    }

    pub fn delete_site_url(&mut self, site_id: SiteId, index: usize) -> Result<(), AllowListError> {
        self.site_url_list(site_id)?.check_index(index)?;
        self.site_urls.entry(site_id).or_default().remove(index)?;
        self.shift_cursor_after_removal(ListScope::Site(site_id), index);
        self.mark_dirty();
        Ok(())
    }

    // --- status toggle -------------------------------------------------

    /// Records an explicit status for a site.
    ///
    /// `Inherited` immediately replaces the site's list with the org defaults.
    /// `Custom` keeps a diverged list as it is and gives a matching list its
    /// own copy, which stops following org changes from here on.
    pub fn set_site_status(
        &mut self,
        site_id: SiteId,
        status: InheritanceStatus,
    ) -> Result<(), AllowListError> {
        self.site(site_id)?;
        let matches_org = self.stored_list(site_id).matches(&self.org_defaults);
        self.status_overrides.insert(site_id, status);
        match status {
            InheritanceStatus::Inherited => self.reset_to_org_defaults(site_id),
            InheritanceStatus::Custom if matches_org => self.reset_to_org_defaults(site_id),
            InheritanceStatus::Custom => {}
        }
        allowlist_info!("Site {} status set to {}", site_id, status);
        self.mark_dirty();
        Ok(())
    }

    // --- revert workflow -----------------------------------------------

    /// Opens the confirmation step. Nothing is changed until it is confirmed.
    /// A second request while one is pending retargets the prompt.
    pub fn request_revert(&mut self, site_id: SiteId) -> Result<(), AllowListError> {
        self.site(site_id)?;
        if let Some(previous) = self.revert.pending() {
            allowlist_debug!(
                "Revert request for site {} replaces pending request for site {}",
                site_id,
                previous.site_id
            );
        }
        self.revert = RevertPhase::PendingConfirmation(RevertRequest { site_id });
        self.mark_dirty();
        Ok(())
    }

    /// Overwrites the pending site's list with the org defaults, whatever its
    /// status. Explicit status choices are left alone.
    pub fn confirm_revert(&mut self) -> Result<SiteId, AllowListError> {
        let request = self
            .revert
            .pending()
            .ok_or(AllowListError::InvalidStateTransition {
                action: "confirm revert while idle",
            })?;
        self.revert = RevertPhase::Idle;
        self.reset_to_org_defaults(request.site_id);
        allowlist_info!("Site {} reverted to org defaults", request.site_id);
        self.mark_dirty();
        Ok(request.site_id)
    }

    pub fn cancel_revert(&mut self) -> Result<SiteId, AllowListError> {
        let request = self
            .revert
            .pending()
            .ok_or(AllowListError::InvalidStateTransition {
                action: "cancel revert while idle",
            })?;
        self.revert = RevertPhase::Idle;
        self.mark_dirty();
        Ok(request.site_id)
    }

    // --- edit cursor ---------------------------------------------------

    /// Puts an existing cell in edit mode. Any other active cell leaves edit mode.
    pub fn begin_edit(&mut self, cursor: EditCursor) -> Result<(), AllowListError> {
        self.list_for_scope(cursor.scope)?.check_index(cursor.url_index)?;
        self.edit_cursor = Some(cursor);
        self.mark_dirty();
        Ok(())
    }

    /// Writes `value` into the cell under the edit cursor. Returns the sites
    /// that followed when the cell is an org default.
    pub fn edit_at_cursor(
        &mut self,
        value: impl Into<String>,
    ) -> Result<Vec<SiteId>, AllowListError> {
        let cursor = self
            .edit_cursor
            .ok_or(AllowListError::InvalidStateTransition {
                action: "edit without an active cell",
            })?;
        match cursor.scope {
            ListScope::Org => self.edit_org_url(cursor.url_index, value),
            ListScope::Site(site_id) => self
                .edit_site_url(site_id, cursor.url_index, value)
                .map(|()| Vec::new()),
        }
    }

    /// Leaves edit mode, keeping what was typed. Returns the cell that was active.
    pub fn commit_edit(&mut self) -> Option<EditCursor> {
        self.clear_cursor()
    }

    /// Leaves edit mode without touching any list.
    pub fn cancel_edit(&mut self) -> Option<EditCursor> {
        self.clear_cursor()
    }

    // --- rendering -----------------------------------------------------

    pub fn view(&self) -> AdminViewModel {
        let sites = self
            .sites
            .iter()
            .enumerate()
            .map(|(site_id, site)| SiteRowView {
                site_id,
                name: site.name.clone(),
                url: site.url.clone(),
                product: site.product,
                server_count: site.server_count,
                activity: site.activity,
                status: self.classify_against(site_id, &self.org_defaults),
                explicit_status: self.status_overrides.contains_key(&site_id),
                urls: self.cells(ListScope::Site(site_id), self.stored_list(site_id)),
            })
            .collect();

        let pending_revert = self.revert.pending().and_then(|request| {
            self.sites.get(request.site_id).map(|site| RevertPromptView {
                site_id: request.site_id,
                site_name: site.name.clone(),
                org_url_count: self.org_defaults.len(),
            })
        });

        AdminViewModel {
            org_urls: self.cells(ListScope::Org, &self.org_defaults),
            sites,
            edit_cursor: self.edit_cursor,
            pending_revert,
            dirty: self.dirty,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // --- internals -----------------------------------------------------

    fn stored_list(&self, site_id: SiteId) -> &UrlList {
        self.site_urls.get(&site_id).unwrap_or(&EMPTY_URL_LIST)
    }

    fn list_for_scope(&self, scope: ListScope) -> Result<&UrlList, AllowListError> {
        match scope {
            ListScope::Org => Ok(&self.org_defaults),
            ListScope::Site(site_id) => self.site_url_list(site_id),
        }
    }

    fn classify_against(&self, site_id: SiteId, org_defaults: &UrlList) -> InheritanceStatus {
        classify(
            self.status_override(site_id),
            self.stored_list(site_id),
            org_defaults,
        )
    }

    /// Runs right after every org default change: each site that was inherited
    /// under `previous` gets a fresh copy of the new defaults. Sites classified
    /// custom keep their lists. When the change removed entry `removed`, an
    /// edit cell in a following site moves with its entry.
    fn sync_inherited_sites(&mut self, previous: &UrlList, removed: Option<usize>) -> Vec<SiteId> {
        let synced: Vec<SiteId> = (0..self.sites.len())
            .filter(|&site_id| {
                self.classify_against(site_id, previous) == InheritanceStatus::Inherited
            })
            .collect();
        for &site_id in &synced {
            self.site_urls.insert(site_id, self.org_defaults.clone());
            if let Some(removed) = removed {
                self.shift_cursor_after_removal(ListScope::Site(site_id), removed);
            }
        }
        self.drop_dangling_cursor();
        self.mark_dirty();

        allowlist_info!(
            "Org defaults now hold {} url(s); {} of {} site(s) followed",
            self.org_defaults.len(),
            synced.len(),
            self.sites.len()
        );
        synced
    }

    fn reset_to_org_defaults(&mut self, site_id: SiteId) {
        self.site_urls.insert(site_id, self.org_defaults.clone());
        self.drop_dangling_cursor();
    }

    fn shift_cursor_after_removal(&mut self, scope: ListScope, removed: usize) {
        if let Some(cursor) = self.edit_cursor.filter(|cursor| cursor.scope == scope) {
            self.edit_cursor = cursor.after_removal(removed);
        }
    }

    /// Clears the cursor if the cell it points at no longer exists.
    fn drop_dangling_cursor(&mut self) {
        if let Some(cursor) = self.edit_cursor {
            let still_valid = self
                .list_for_scope(cursor.scope)
                .map(|list| cursor.url_index < list.len())
                .unwrap_or(false);
            if !still_valid {
                allowlist_debug!("Edit cursor {:?} no longer points at a cell", cursor);
                self.edit_cursor = None;
            }
        }
    }

    fn clear_cursor(&mut self) -> Option<EditCursor> {
        let previous = self.edit_cursor.take();
        if previous.is_some() {
            self.mark_dirty();
        }
        previous
    }

    fn cells(&self, scope: ListScope, list: &UrlList) -> Vec<UrlCellView> {
        let normalized: Vec<String> = list.iter().map(normalize_url_for_compare).collect();
        list.iter()
            .enumerate()
            .map(|(index, value)| UrlCellView {
                index,
                value: value.to_string(),
                editing: self.edit_cursor == Some(EditCursor { scope, url_index: index }),
                looks_valid: looks_like_url(value),
                duplicate: !normalized[index].is_empty()
                    && normalized[..index].contains(&normalized[index]),
            })
            .collect()
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
