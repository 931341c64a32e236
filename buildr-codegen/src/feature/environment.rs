use buildr_core::SourceVersion;

/// The live compilation environment features are resolved against.
pub trait Environment {
    /// The `-source` level the compiler was invoked with.
    fn source_version(&self) -> SourceVersion;
}

/// An environment described by plain values, e.g. from `buildr.toml` or
/// command-line flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompilerEnvironment {
    source_version: SourceVersion,
}

impl CompilerEnvironment {
    pub fn new(source_version: SourceVersion) -> Self {
        Self { source_version }
    }
}

impl Environment for CompilerEnvironment {
    fn source_version(&self) -> SourceVersion {
        self.source_version
    }
}
