use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use allowlist_core::{Product, Seed, Site, SiteActivity};
use allowlist_logging::allowlist_info;
use ron::error::SpannedError;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse seed file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: SpannedError,
    },
}

#[derive(Debug, Clone, Deserialize)]
struct SeedFile {
    org_defaults: Vec<String>,
    #[serde(default)]
    sites: Vec<SeedSite>,
}

#[derive(Debug, Clone, Deserialize)]
struct SeedSite {
    name: String,
    url: String,
    product: SeedProduct,
    #[serde(default = "default_server_count")]
    server_count: u32,
    #[serde(default)]
    activity: SeedActivity,
}

#[derive(Debug, Clone, Copy, Deserialize)]
enum SeedProduct {
    Confluence,
    Jira,
    Bitbucket,
    Trello,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
enum SeedActivity {
    #[default]
    Active,
    Inactive,
}

fn default_server_count() -> u32 {
    1
}

/// Reads the startup seed. Nothing is ever written back.
pub(crate) fn load_seed(path: &Path) -> Result<Seed, SeedError> {
    let content = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let seed = parse_seed(&content).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    allowlist_info!(
        "Loaded seed from {:?}: {} org url(s), {} site(s)",
        path,
        seed.org_defaults.len(),
        seed.sites.len()
    );
    Ok(seed)
}

fn parse_seed(content: &str) -> Result<Seed, SpannedError> {
    let file: SeedFile = ron::from_str(content)?;
    Ok(Seed {
        org_defaults: file.org_defaults.into_iter().collect(),
        sites: file.sites.into_iter().map(map_site).collect(),
    })
}

fn map_site(site: SeedSite) -> Site {
    Site::new(site.name, site.url, map_product(site.product))
        .with_server_count(site.server_count)
        .with_activity(match site.activity {
            SeedActivity::Active => SiteActivity::Active,
            SeedActivity::Inactive => SiteActivity::Inactive,
        })
}

fn map_product(product: SeedProduct) -> Product {
    match product {
        SeedProduct::Confluence => Product::Confluence,
        SeedProduct::Jira => Product::Jira,
        SeedProduct::Bitbucket => Product::Bitbucket,
        SeedProduct::Trello => Product::Trello,
    }
}
