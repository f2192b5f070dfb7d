use allowlist_core::{AllowListState, Effect, ListScope, SiteId};
use allowlist_logging::allowlist_info;

/// Turns effects into one-line notices for the console. The revert dialog
/// itself is the prompt, which `render::prompt` derives from the view.
pub fn run_effects(effects: &[Effect], state: &AllowListState) -> Vec<String> {
    effects
        .iter()
        .filter_map(|effect| describe(effect, state))
        .collect()
}

fn describe(effect: &Effect, state: &AllowListState) -> Option<String> {
    match effect {
        Effect::FocusCell(cursor) => Some(match cursor.scope {
            ListScope::Org => format!("Editing org default URL #{}", cursor.url_index),
            ListScope::Site(site_id) => format!(
                "Editing URL #{} of {}",
                cursor.url_index,
                site_name(state, site_id)
            ),
        }),
        Effect::SitesSynced { site_ids } => {
            allowlist_info!("Org change followed by sites {:?}", site_ids);
            let names: Vec<String> = site_ids.iter().map(|&id| site_name(state, id)).collect();
            Some(format!("Updated inherited sites: {}", names.join(", ")))
        }
        Effect::ShowRevertConfirmation { site_id, site_name } => {
            allowlist_info!("Asking to revert site {} ({})", site_id, site_name);
            None
        }
        Effect::CloseRevertConfirmation => None,
        Effect::SiteReverted { site_id } => Some(format!(
            "{} now uses the org default URLs",
            site_name(state, *site_id)
        )),
        Effect::CommandRejected(err) => Some(format!("error: {err}")),
    }
}

fn site_name(state: &AllowListState, site_id: SiteId) -> String {
    state
        .site(site_id)
        .map(|site| site.name.clone())
        .unwrap_or_else(|_| format!("site #{site_id}"))
}
