use crate::{Product, Site, SiteActivity, UrlList};

/// URLs every organization starts with.
pub const DEFAULT_ORG_URLS: &[&str] = &[
    "https://api.example.com",
    "https://auth.example.com",
    "https://cdn.example.com",
];

/// Initial contents of the engine: the org default list and the site registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub org_defaults: UrlList,
    pub sites: Vec<Site>,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            org_defaults: DEFAULT_ORG_URLS.iter().copied().collect(),
            sites: vec![
                Site::new("Engineering Wiki", "https://eng-wiki.example.net", Product::Confluence)
                    .with_server_count(3),
                Site::new("Platform Issues", "https://issues.example.net", Product::Jira)
                    .with_server_count(5),
                Site::new("Source Hosting", "https://code.example.net", Product::Bitbucket)
                    .with_server_count(2),
                Site::new("Marketing Boards", "https://boards.example.net", Product::Trello)
                    .with_activity(SiteActivity::Inactive),
            ],
        }
    }
}
