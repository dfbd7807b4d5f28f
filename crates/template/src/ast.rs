//! Defines the parsed form of a `{{ }}` token expression.

use serde_json::Value;

/// A parsed template expression.
///
/// The grammar is intentionally tiny: an expression is either a single
/// dotted path, or a helper name followed by one or more arguments.
/// Whether the head of a multi-token expression actually names a helper is
/// decided at render time against the registry; an unknown name falls back
/// to a plain path lookup of the whole expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A path to resolve against the context, e.g. `totals.khachCanTra`.
    Path(String),
    /// A helper invocation, e.g. `currency totals.khachCanTra`.
    HelperCall { name: String, args: Vec<Argument> },
}

/// One helper argument.
///
/// Arguments are whitespace-delimited, so a literal cannot contain spaces.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// A literal value: a bare number, or a quoted string.
    Literal(Value),
    /// A path resolved against the context, e.g. `@index` or `this.sku`.
    Path(String),
}
