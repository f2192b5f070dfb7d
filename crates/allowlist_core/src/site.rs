use std::fmt;

/// Index of a site in the registry. Stable for the lifetime of the session.
pub type SiteId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    Confluence,
    Jira,
    Bitbucket,
    Trello,
}

impl Product {
    pub fn label(self) -> &'static str {
        match self {
            Product::Confluence => "Confluence",
            Product::Jira => "Jira",
            Product::Bitbucket => "Bitbucket",
            Product::Trello => "Trello",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Operational state of a site as reported by the registry (display only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiteActivity {
    #[default]
    Active,
    Inactive,
}

impl fmt::Display for SiteActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteActivity::Active => f.write_str("Active"),
            SiteActivity::Inactive => f.write_str("Inactive"),
        }
    }
}

/// A managed site. The engine passes these fields through to the view untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub name: String,
    pub url: String,
    pub product: Product,
    pub server_count: u32,
    pub activity: SiteActivity,
}

impl Site {
    pub fn new(name: impl Into<String>, url: impl Into<String>, product: Product) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            product,
            server_count: 1,
            activity: SiteActivity::Active,
        }
    }

    pub fn with_server_count(mut self, server_count: u32) -> Self {
        self.server_count = server_count;
        self
    }

    pub fn with_activity(mut self, activity: SiteActivity) -> Self {
        self.activity = activity;
        self
    }
}
