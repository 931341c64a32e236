use std::path::PathBuf;

use buildr_codegen::{analysis::analyze, metadata::Metadata, render::ValueTypeRenderer};
use buildr_core::SourceVersion;
use buildr_manifest::Manifest;
use clap::Args;
use eyre::{Result, WrapErr, bail};

use super::{UnwrapOrExit, resolve_features};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to buildr.toml (defaults to ./buildr.toml)
    #[arg(short, long, default_value = "buildr.toml")]
    pub manifest: PathBuf,

    /// Java source level to target (overrides [environment] in the manifest)
    #[arg(long)]
    pub source: Option<SourceVersion>,

    /// Only generate for this type (qualified or simple name)
    #[arg(long = "type")]
    pub type_name: Option<String>,

    /// Print analysis metadata as JSON instead of Java source
    #[arg(long)]
    pub json: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.manifest).unwrap_or_exit();

        let types = match &self.type_name {
            Some(name) => match manifest.find(name) {
                Some(ty) => vec![ty],
                None => bail!("no value type named '{}' in {}", name, self.manifest.display()),
            },
            None => manifest.declarations().iter().collect(),
        };

        let metadata: Vec<Metadata> = types.into_iter().map(analyze).collect();

        if self.json {
            let json = serde_json::to_string_pretty(&metadata)
                .wrap_err("Failed to serialize metadata")?;
            println!("{}", json);
            return Ok(());
        }

        let features = resolve_features(self.source, manifest.source_version());
        for (i, metadata) in metadata.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("// {}", metadata.type_name);
            print!("{}", ValueTypeRenderer::new(metadata, &features).render());
        }

        Ok(())
    }
}
