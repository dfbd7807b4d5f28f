//! A minimal print-template language.
//!
//! Templates are HTML strings carrying three constructs, and nothing more:
//!
//! - `{{ path.to.value }}`: plain interpolation against the data context,
//!   with parent-frame fallback inside loops;
//! - `{{ helper arg1 arg2 }}`: invocation of one of the fixed helpers
//!   (`currency`, `uppercase`, `lowercase`, `inc`, `datetime`);
//! - `{{#each collectionPath}} ... {{/each}}`: loop over a sequence, with
//!   `this` bound to the current element and `@index` to its 0-based
//!   position.
//!
//! There are no conditionals and no expression evaluation. Every lookup or
//! coercion failure degrades to an empty string or a zero-like default: a
//! print template must never crash mid-render because one optional field
//! is absent.

pub mod ast;
pub mod helpers;
mod parser;
mod renderer;

// --- Public API ---
pub use ast::{Argument, Expression};
pub use helpers::{HelperFn, HelperRegistry};
pub use parser::parse_expression;
pub use renderer::Renderer;
