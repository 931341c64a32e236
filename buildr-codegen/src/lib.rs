//! Java builder code generation for buildr.
//!
//! # Module Organization
//!
//! - [`builder`] - Source building blocks (CodeBuilder, CodeFragment, Indent)
//! - [`excerpt`] - Self-rendering fragments attached to generated accessors
//! - [`feature`] - Capability detection for the target compiler (SourceLevel, FeatureRegistry)
//! - [`jackson`] - Jackson annotation policy for generated accessors
//! - [`metadata`] - Per-type and per-property generation metadata
//! - [`analysis`] - Turns a declaration into [`Metadata`](metadata::Metadata)
//! - [`render`] - Renders value-type accessors from metadata

pub mod analysis;
pub mod builder;
pub mod excerpt;
pub mod feature;
pub mod jackson;
pub mod metadata;
pub mod render;

#[cfg(test)]
mod testing;
