#![allow(dead_code)]

use std::sync::Once;

use allowlist_core::{AllowListState, Product, Seed, Site, UrlList};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(allowlist_logging::initialize_for_tests);
}

pub fn list(entries: &[&str]) -> UrlList {
    entries.iter().copied().collect()
}

/// Two sites, both starting as copies of `org`.
pub fn two_sites(org: &[&str]) -> AllowListState {
    init_logging();
    AllowListState::from_seed(Seed {
        org_defaults: list(org),
        sites: vec![
            Site::new("Alpha", "https://alpha.example.net", Product::Jira),
            Site::new("Beta", "https://beta.example.net", Product::Confluence),
        ],
    })
}

pub const X: usize = 0;
pub const Y: usize = 1;
