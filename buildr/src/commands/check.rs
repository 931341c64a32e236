use std::path::PathBuf;

use buildr_codegen::jackson::JacksonSupport;
use buildr_manifest::Manifest;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to buildr.toml (defaults to ./buildr.toml)
    #[arg(short, long, default_value = "buildr.toml")]
    pub manifest: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.manifest).unwrap_or_exit();

        println!("✓ {} is valid\n", self.manifest.display());

        match manifest.source_version() {
            Some(version) => println!("  source level: {}\n", version),
            None => println!("  source level: not configured (test defaults)\n"),
        }

        let count = manifest.declarations().len();
        println!(
            "  {} value type{}:",
            count,
            if count == 1 { "" } else { "s" }
        );
        for ty in manifest.declarations() {
            let jackson = if JacksonSupport::create(ty).is_some() {
                ", jackson"
            } else {
                ""
            };
            println!(
                "    {} ({} accessor{}{})",
                ty.name,
                ty.accessors.len(),
                if ty.accessors.len() == 1 { "" } else { "s" },
                jackson
            );
        }

        Ok(())
    }
}
