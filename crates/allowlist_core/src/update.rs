use allowlist_logging::{allowlist_debug, allowlist_warn};

use crate::{AllowListError, AllowListState, EditCursor, Effect, Msg, SiteId};

/// Pure update function: applies a message to state and returns any effects.
///
/// A rejected message leaves the state untouched and reports the error as
/// [`Effect::CommandRejected`]. Confirm/cancel with no pending revert and
/// typing with no active cell are benign repeats and produce nothing.
pub fn update(mut state: AllowListState, msg: Msg) -> (AllowListState, Vec<Effect>) {
    let effects = match apply(&mut state, msg) {
        Ok(effects) => effects,
        Err(AllowListError::InvalidStateTransition { action }) => {
            allowlist_debug!("Ignoring {}", action);
            Vec::new()
        }
        Err(err) => {
            allowlist_warn!("Rejected command: {}", err);
            vec![Effect::CommandRejected(err)]
        }
    };

    (state, effects)
}

fn apply(state: &mut AllowListState, msg: Msg) -> Result<Vec<Effect>, AllowListError> {
    let effects = match msg {
        Msg::AddOrgUrl => {
            let synced = state.add_org_url();
            let mut effects = synced_effect(synced);
            effects.extend(state.edit_cursor().map(Effect::FocusCell));
            effects
        }
        Msg::AppendOrgUrl { value } => synced_effect(state.append_org_url(value)),
        Msg::EditOrgUrl { index, value } => synced_effect(state.edit_org_url(index, value)?),
        Msg::DeleteOrgUrl { index } => synced_effect(state.delete_org_url(index)?),
        Msg::AddSiteUrl { site_id } => {
            let index = state.add_site_url(site_id)?;
            vec![Effect::FocusCell(EditCursor::site(site_id, index))]
        }
        Msg::AppendSiteUrl { site_id, value } => {
            state.append_site_url(site_id, value)?;
            Vec::new()
        }
        Msg::EditSiteUrl {
            site_id,
            index,
            value,
        } => {
            state.edit_site_url(site_id, index, value)?;
            Vec::new()
        }
        Msg::DeleteSiteUrl { site_id, index } => {
            state.delete_site_url(site_id, index)?;
            Vec::new()
        }
        Msg::SetSiteStatus { site_id, status } => {
            state.set_site_status(site_id, status)?;
            Vec::new()
        }
        Msg::RevertRequested { site_id } => {
            state.request_revert(site_id)?;
            let site_name = state.site(site_id)?.name.clone();
            vec![Effect::ShowRevertConfirmation { site_id, site_name }]
        }
        Msg::RevertConfirmed => {
            let site_id = state.confirm_revert()?;
            vec![
                Effect::CloseRevertConfirmation,
                Effect::SiteReverted { site_id },
            ]
        }
        Msg::RevertCancelled => {
            state.cancel_revert()?;
            vec![Effect::CloseRevertConfirmation]
        }
        Msg::BeginEdit(cursor) => {
            state.begin_edit(cursor)?;
            vec![Effect::FocusCell(cursor)]
        }
        Msg::CursorInput(value) => synced_effect(state.edit_at_cursor(value)?),
        Msg::CommitEdit => {
            state.commit_edit();
            Vec::new()
        }
        Msg::CancelEdit => {
            state.cancel_edit();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };
    Ok(effects)
}

fn synced_effect(site_ids: Vec<SiteId>) -> Vec<Effect> {
    if site_ids.is_empty() {
        Vec::new()
    } else {
        vec![Effect::SitesSynced { site_ids }]
    }
}
