mod common;

use allowlist_core::{AllowListError, AllowListState, InheritanceStatus};
use common::{list, two_sites, X, Y};
use pretty_assertions::assert_eq;

#[test]
fn seeded_sites_start_as_inherited_copies() {
    common::init_logging();
    let state = AllowListState::new();
    assert!(!state.sites().is_empty());
    for site_id in 0..state.sites().len() {
        assert_eq!(state.site_url_list(site_id).unwrap(), state.org_default_list());
        assert_eq!(state.site_status(site_id).unwrap(), InheritanceStatus::Inherited);
        assert_eq!(state.status_override(site_id), None);
    }
}

#[test]
fn classifier_tracks_content_without_explicit_status() {
    let mut state = two_sites(&["a", "b"]);
    assert_eq!(state.site_status(X).unwrap(), InheritanceStatus::Inherited);

    state.edit_site_url(X, 1, "z").unwrap();
    assert_eq!(state.site_url_list(X).unwrap(), &list(&["a", "z"]));
    assert_eq!(state.site_status(X).unwrap(), InheritanceStatus::Custom);

    state.edit_site_url(X, 1, "b").unwrap();
    assert_eq!(state.site_status(X).unwrap(), InheritanceStatus::Inherited);
}

#[test]
fn appending_to_org_defaults_reaches_inherited_sites() {
    let mut state = two_sites(&["a", "b"]);

    let synced = state.add_org_url();
    assert_eq!(synced, vec![X, Y]);
    let synced = state.edit_org_url(2, "c").unwrap();
    assert_eq!(synced, vec![X, Y]);

    assert_eq!(state.org_default_list(), &list(&["a", "b", "c"]));
    assert_eq!(state.site_url_list(X).unwrap(), &list(&["a", "b", "c"]));
    assert_eq!(state.site_url_list(Y).unwrap(), &list(&["a", "b", "c"]));
}

#[test]
fn deleting_an_org_default_removes_it_from_inherited_sites() {
    let mut state = two_sites(&["a", "b"]);

    state.delete_org_url(0).unwrap();

    assert_eq!(state.org_default_list(), &list(&["b"]));
    assert_eq!(state.site_url_list(X).unwrap(), &list(&["b"]));
    assert_eq!(state.site_url_list(Y).unwrap(), &list(&["b"]));
    assert_eq!(state.site_status(X).unwrap(), InheritanceStatus::Inherited);
}

#[test]
fn diverged_site_is_frozen_across_org_changes() {
    let mut state = two_sites(&["a", "b"]);
    state.edit_site_url(X, 0, "mine").unwrap();

    let synced = state.add_org_url();
    assert_eq!(synced, vec![Y]);
    state.edit_org_url(2, "c").unwrap();
    state.delete_org_url(0).unwrap();

    assert_eq!(state.site_url_list(X).unwrap(), &list(&["mine", "b"]));
    assert_eq!(state.site_url_list(Y).unwrap(), &list(&["b", "c"]));
    assert_eq!(state.site_status(X).unwrap(), InheritanceStatus::Custom);
}

#[test]
fn site_edits_never_touch_org_or_other_sites() {
    let mut state = two_sites(&["a", "b"]);

    let index = state.add_site_url(X).unwrap();
    state.edit_site_url(X, index, "extra").unwrap();

    assert_eq!(state.org_default_list(), &list(&["a", "b"]));
    assert_eq!(state.site_url_list(Y).unwrap(), &list(&["a", "b"]));
    assert_eq!(state.site_url_list(X).unwrap(), &list(&["a", "b", "extra"]));
}

#[test]
fn deleting_shifts_later_entries_left() {
    let mut state = two_sites(&["a", "b", "c", "d"]);

    state.delete_site_url(X, 1).unwrap();

    assert_eq!(state.site_url_list(X).unwrap(), &list(&["a", "c", "d"]));
}

#[test]
fn out_of_range_and_unknown_site_are_rejected_without_change() {
    let mut state = two_sites(&["a", "b"]);
    let before = state.clone();

    assert_eq!(
        state.edit_org_url(2, "x"),
        Err(AllowListError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(
        state.delete_site_url(X, 7),
        Err(AllowListError::IndexOutOfRange { index: 7, len: 2 })
    );
    assert_eq!(state.add_site_url(9), Err(AllowListError::UnknownSite(9)));
    assert_eq!(
        state.set_site_status(9, InheritanceStatus::Custom),
        Err(AllowListError::UnknownSite(9))
    );
    assert_eq!(state.site_status(9), Err(AllowListError::UnknownSite(9)));

    assert_eq!(state, before);
}

#[test]
fn org_edit_to_empty_string_is_kept() {
    let mut state = two_sites(&["a", "b"]);

    state.edit_org_url(0, "").unwrap();

    assert_eq!(state.org_default_list(), &list(&["", "b"]));
    assert_eq!(state.site_url_list(X).unwrap(), &list(&["", "b"]));
}
