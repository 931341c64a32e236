mod check;
mod features;
mod generate;

use buildr_codegen::feature::{CompilerEnvironment, FeatureRegistry};
use buildr_core::SourceVersion;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use features::FeaturesCommand;
use generate::GenerateCommand;
use tracing::debug;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for buildr_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Resolve features for one run.
///
/// A source version given on the command line wins over the manifest's;
/// with neither, every feature takes its test default.
pub(crate) fn resolve_features(
    flag: Option<SourceVersion>,
    manifest: Option<SourceVersion>,
) -> FeatureRegistry {
    match flag.or(manifest) {
        Some(version) => {
            debug!(%version, "resolving features against source version");
            FeatureRegistry::standard(&CompilerEnvironment::new(version))
        }
        None => {
            debug!("no source version configured, using test defaults");
            FeatureRegistry::standard_test_defaults()
        }
    }
}

#[derive(Parser)]
#[command(name = "buildr")]
#[command(version)]
#[command(about = "Generate Java builder accessors from TOML value type descriptions")]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Features(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate buildr.toml without generating code
    Check(CheckCommand),

    /// Print generated accessors for each value type
    Generate(GenerateCommand),

    /// Show the capability level generation would target
    Features(FeaturesCommand),
}

#[cfg(test)]
mod tests {
    use buildr_codegen::feature::{Origin, SOURCE_LEVEL, SourceLevel};

    use super::*;

    fn version(s: &str) -> SourceVersion {
        s.parse().unwrap()
    }

    #[test]
    fn test_flag_wins_over_manifest() {
        let features = resolve_features(Some(version("8")), Some(version("1.6")));
        assert_eq!(*features.get(&SOURCE_LEVEL), SourceLevel::Java8);
    }

    #[test]
    fn test_manifest_used_without_flag() {
        let features = resolve_features(None, Some(version("1.7")));
        assert_eq!(features.origin(), Origin::Environment);
        assert_eq!(*features.get(&SOURCE_LEVEL), SourceLevel::Java7);
    }

    #[test]
    fn test_test_defaults_without_environment() {
        let features = resolve_features(None, None);
        assert_eq!(features.origin(), Origin::TestDefaults);
        assert_eq!(*features.get(&SOURCE_LEVEL), SourceLevel::Java6);
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["buildr", "-v", "generate", "--source", "1.7"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }
}
