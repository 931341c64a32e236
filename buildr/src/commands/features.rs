use std::path::PathBuf;

use buildr_codegen::feature::{Capability, Origin, SOURCE_LEVEL};
use buildr_core::SourceVersion;
use buildr_manifest::Manifest;
use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, resolve_features};

#[derive(Args)]
pub struct FeaturesCommand {
    /// Read [environment] from this buildr.toml
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Java source level to resolve against
    #[arg(long)]
    pub source: Option<SourceVersion>,
}

impl FeaturesCommand {
    pub fn run(&self) -> Result<()> {
        let configured = match &self.manifest {
            Some(path) => Manifest::from_file(path).unwrap_or_exit().source_version(),
            None => None,
        };
        let features = resolve_features(self.source, configured);

        match features.origin() {
            Origin::Environment => println!("Features (resolved from environment):"),
            Origin::TestDefaults => println!("Features (test defaults):"),
        }
        for (name, value) in features.iter() {
            println!("  {}: {}", name, value);
        }

        println!();
        println!("Capabilities:");
        let level = features.get(&SOURCE_LEVEL);
        for capability in Capability::ALL {
            let mark = if level.supports(capability) { "✓" } else { "✗" };
            println!(
                "  {} {} (from {})",
                mark,
                capability.name(),
                capability.introduced_in()
            );
        }

        Ok(())
    }
}
