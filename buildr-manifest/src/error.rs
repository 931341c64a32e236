use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content and filename for error reporting.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn invalid_type_name(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidTypeName {
            src: self.named_source(),
            span: span.into(),
            name: name.into(),
            reason: reason.into(),
        })
    }

    pub fn invalid_annotation(
        &self,
        reason: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidAnnotation {
            src: self.named_source(),
            span: span.into(),
            reason: reason.into(),
        })
    }

    pub fn invalid_source_version(
        &self,
        reason: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidSourceVersion {
            src: self.named_source(),
            span: span.into(),
            reason: reason.into(),
        })
    }

    pub fn invalid_identifier(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span: span.into(),
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    pub fn duplicate_type(
        &self,
        name: impl Into<String>,
        first_span: impl Into<SourceSpan>,
        second_span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateType {
            src: self.named_source(),
            first_span: first_span.into(),
            second_span: second_span.into(),
            name: name.into(),
        })
    }

    pub fn duplicate_accessor(
        &self,
        name: impl Into<String>,
        type_name: impl Into<String>,
        first_span: impl Into<SourceSpan>,
        second_span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateAccessor {
            src: self.named_source(),
            first_span: first_span.into(),
            second_span: second_span.into(),
            name: name.into(),
            type_name: type_name.into(),
        })
    }

    pub fn duplicate_property(
        &self,
        name: impl Into<String>,
        type_name: impl Into<String>,
        first_span: impl Into<SourceSpan>,
        second_span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateProperty {
            src: self.named_source(),
            first_span: first_span.into(),
            second_span: second_span.into(),
            name: name.into(),
            type_name: type_name.into(),
        })
    }

    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: span.into(),
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(buildr::io),
        help("pass the manifest path with --manifest, or create ./buildr.toml")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest")]
    #[diagnostic(code(buildr::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid type name '{name}'")]
    #[diagnostic(
        code(buildr::invalid_type_name),
        help("{reason}. Write the fully qualified name, e.g. 'com.example.Person'")
    )]
    InvalidTypeName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid type name")]
        span: SourceSpan,
        name: String,
        reason: String,
    },

    #[error("invalid annotation")]
    #[diagnostic(
        code(buildr::invalid_annotation),
        help("write annotations fully qualified, e.g. '@com.fasterxml.jackson.annotation.JsonIgnore'")
    )]
    InvalidAnnotation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        reason: String,
    },

    #[error("invalid source version")]
    #[diagnostic(
        code(buildr::invalid_source_version),
        help("use a javac -source value such as '1.6', '1.7' or '8'")
    )]
    InvalidSourceVersion {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        reason: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(buildr::invalid_identifier),
        help("{reason}. Use only letters, digits, '_' and '$', not starting with a digit.")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: SourceSpan,
        name: String,
        context: String,
        reason: String,
    },

    #[error("type '{name}' is declared more than once")]
    #[diagnostic(code(buildr::duplicate_type))]
    DuplicateType {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        name: String,
    },

    #[error("accessor '{name}' is declared more than once on '{type_name}'")]
    #[diagnostic(
        code(buildr::duplicate_accessor),
        help("each accessor of a value type must have a distinct name")
    )]
    DuplicateAccessor {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        name: String,
        type_name: String,
    },

    #[error("accessors on '{type_name}' both map to property '{name}'")]
    #[diagnostic(
        code(buildr::duplicate_property),
        help("rename one accessor so every property name is distinct")
    )]
    DuplicateProperty {
        #[source_code]
        src: NamedSource<String>,
        #[label("property '{name}' derived here")]
        first_span: SourceSpan,
        #[label("and again here")]
        second_span: SourceSpan,
        name: String,
        type_name: String,
    },

    #[error("{message}")]
    #[diagnostic(code(buildr::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },
}
