//! Manifest types and parsing for buildr.toml files.

use std::{collections::HashMap, ops::Range, path::Path, str::FromStr};

use buildr_core::{QualifiedName, SourceVersion};
use buildr_model::{AccessorDeclaration, AnnotationOccurrence, TypeDeclaration};
use serde::Deserialize;
use toml::Spanned;
use tracing::debug;

use crate::{Error, Result, error::SourceContext, validate::validate_identifier};

/// Filename used when none is given.
pub const DEFAULT_FILENAME: &str = "buildr.toml";

/// A validated buildr.toml.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    source_version: Option<SourceVersion>,
    types: Vec<TypeDeclaration>,
}

impl Manifest {
    /// Parse a buildr.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a buildr.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }

    /// The compiler source version from `[environment]`, if configured.
    ///
    /// `None` means no environment was described; callers fall back to
    /// feature test defaults.
    pub fn source_version(&self) -> Option<SourceVersion> {
        self.source_version
    }

    /// Value types in declaration order.
    pub fn declarations(&self) -> &[TypeDeclaration] {
        &self.types
    }

    /// Find a value type by its qualified or simple name.
    pub fn find(&self, name: &str) -> Option<&TypeDeclaration> {
        self.types
            .iter()
            .find(|t| t.name.to_string() == name || t.name.simple_name() == name)
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, DEFAULT_FILENAME)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    environment: Option<RawEnvironment>,
    #[serde(default)]
    types: Vec<RawType>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEnvironment {
    source: Spanned<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawType {
    name: Spanned<String>,
    #[serde(default)]
    annotations: Vec<Spanned<String>>,
    #[serde(default)]
    accessors: Vec<RawAccessor>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAccessor {
    name: Spanned<String>,
    #[serde(rename = "type")]
    return_type: Spanned<String>,
    #[serde(default)]
    annotations: Vec<Spanned<String>>,
}

/// Parse and validate a manifest, using `filename` for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let raw: RawManifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    let source_version = raw
        .environment
        .map(|env| {
            env.source
                .get_ref()
                .parse::<SourceVersion>()
                .map_err(|e| ctx.invalid_source_version(e.to_string(), env.source.span()))
        })
        .transpose()?;

    let mut seen: HashMap<QualifiedName, Range<usize>> = HashMap::new();
    let mut types = Vec::with_capacity(raw.types.len());
    for raw_type in raw.types {
        let ty = lower_type(&ctx, raw_type, &mut seen)?;
        types.push(ty);
    }

    debug!(
        filename,
        types = types.len(),
        source = ?source_version,
        "parsed manifest"
    );
    Ok(Manifest {
        source_version,
        types,
    })
}

fn lower_type(
    ctx: &SourceContext,
    raw: RawType,
    seen: &mut HashMap<QualifiedName, Range<usize>>,
) -> Result<TypeDeclaration> {
    let span = raw.name.span();
    let name: QualifiedName = raw
        .name
        .get_ref()
        .parse()
        .map_err(|e: buildr_core::ParseQualifiedNameError| {
            ctx.invalid_type_name(raw.name.get_ref(), e.to_string(), span.clone())
        })?;
    if let Some(first) = seen.get(&name) {
        return Err(ctx.duplicate_type(name.to_string(), first.clone(), span));
    }
    seen.insert(name.clone(), span);

    let mut ty = TypeDeclaration::new(name);
    for annotation in &raw.annotations {
        ty = ty.with_annotation(lower_annotation(ctx, annotation)?);
    }

    let mut accessors: HashMap<String, Range<usize>> = HashMap::new();
    let mut accessor_spans = Vec::with_capacity(raw.accessors.len());
    for raw_accessor in raw.accessors {
        let accessor_span = raw_accessor.name.span();
        let accessor_name = raw_accessor.name.into_inner();
        if let Some(reason) = validate_identifier(&accessor_name) {
            return Err(ctx.invalid_identifier(
                accessor_name,
                "accessor",
                reason,
                accessor_span,
            ));
        }
        if let Some(first) = accessors.get(&accessor_name) {
            return Err(ctx.duplicate_accessor(
                accessor_name,
                ty.name.to_string(),
                first.clone(),
                accessor_span,
            ));
        }
        if raw_accessor.return_type.get_ref().trim().is_empty() {
            return Err(ctx.validation_error_at(
                "accessor type must not be empty",
                raw_accessor.return_type.span(),
            ));
        }

        let mut accessor =
            AccessorDeclaration::new(accessor_name.clone(), raw_accessor.return_type.into_inner());
        for annotation in &raw_accessor.annotations {
            accessor = accessor.with_annotation(lower_annotation(ctx, annotation)?);
        }
        accessors.insert(accessor_name, accessor_span.clone());
        accessor_spans.push(accessor_span);
        ty = ty.with_accessor(accessor);
    }

    let mut properties: HashMap<String, Range<usize>> = HashMap::new();
    for (property, span) in ty.property_names().into_iter().zip(accessor_spans) {
        if let Some(first) = properties.get(&property) {
            return Err(ctx.duplicate_property(property, ty.name.to_string(), first.clone(), span));
        }
        properties.insert(property, span);
    }

    Ok(ty)
}

fn lower_annotation(ctx: &SourceContext, raw: &Spanned<String>) -> Result<AnnotationOccurrence> {
    AnnotationOccurrence::parse(raw.get_ref())
        .map_err(|e| ctx.invalid_annotation(e.to_string(), raw.span()))
}
