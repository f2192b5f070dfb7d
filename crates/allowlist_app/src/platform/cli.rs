use std::path::PathBuf;

use clap::Parser;

use super::logging::LogDestination;

/// Interactive console for org default and per-site URL allow-lists.
#[derive(Debug, Parser)]
#[command(name = "allowlist-console", version, about)]
pub struct CliArgs {
    /// RON file with the org default URLs and the site registry.
    #[arg(long, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_builtin_seed_and_file_logging() {
        let args = CliArgs::try_parse_from(["allowlist-console"]).unwrap();
        assert!(args.seed.is_none());
        assert_eq!(args.log, LogDestination::File);
    }

    #[test]
    fn accepts_seed_path_and_log_destination() {
        let args =
            CliArgs::try_parse_from(["allowlist-console", "--seed", "sites.ron", "--log", "both"])
                .unwrap();
        assert_eq!(args.seed, Some(PathBuf::from("sites.ron")));
        assert_eq!(args.log, LogDestination::Both);
    }
}
