//! Source building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building indented source
//! - [`CodeFragment`] - Intermediate representation for source pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
