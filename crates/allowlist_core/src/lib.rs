//! Allow-list core: the inheritance engine behind the admin console.
//!
//! Holds the org default URL list, per-site override lists and explicit status
//! choices, and keeps them consistent. Pure state; rendering and input live
//! in the console crate.
mod classify;
mod cursor;
mod effect;
mod error;
mod msg;
mod revert;
mod seed;
mod site;
mod state;
mod update;
mod url_list;
mod view_model;

pub use classify::{classify, InheritanceStatus};
pub use cursor::{EditCursor, ListScope};
pub use effect::Effect;
pub use error::AllowListError;
pub use msg::Msg;
pub use revert::{RevertPhase, RevertRequest};
pub use seed::{Seed, DEFAULT_ORG_URLS};
pub use site::{Product, Site, SiteActivity, SiteId};
pub use state::AllowListState;
pub use update::update;
pub use url_list::{looks_like_url, normalize_url_for_compare, UrlList};
pub use view_model::{AdminViewModel, RevertPromptView, SiteRowView, UrlCellView};
