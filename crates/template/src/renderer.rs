//! Two-pass template expansion: loop blocks first, then tokens.

use crate::ast::{Argument, Expression};
use crate::helpers::HelperRegistry;
use crate::parser::parse_expression;
use hoadon_context::{Frame, display};
use serde_json::Value;

const EACH_OPEN: &str = "{{#each";
const EACH_CLOSE: &str = "{{/each}}";

/// Expands a template string against a data context.
///
/// Rendering is a pure, in-memory string transformation. Loop expansion
/// always happens before token expansion, so tokens inside a loop body are
/// evaluated per-iteration against the iteration's child frame, and tokens
/// outside any loop exactly once against the root frame.
pub struct Renderer {
    helpers: HelperRegistry,
}

impl Renderer {
    /// Creates a renderer with the built-in helper set.
    pub fn new() -> Self {
        Self { helpers: HelperRegistry::default() }
    }

    /// Creates a renderer over a specific helper registry.
    pub fn with_helpers(helpers: HelperRegistry) -> Self {
        Self { helpers }
    }

    /// Renders `template` against `data` as the root context.
    pub fn render(&self, template: &str, data: &Value) -> String {
        let root = Frame::root(data);
        self.render_frame(template, &root)
    }

    fn render_frame(&self, template: &str, frame: &Frame) -> String {
        let expanded = self.expand_loops(template, frame);
        self.expand_tokens(&expanded, frame)
    }

    /// Replaces each `{{#each path}}...{{/each}}` block with the
    /// concatenated per-element rendering of its body.
    ///
    /// Matching is outer-first and non-greedy: the first `{{/each}}` after
    /// an open tag closes it. A path that does not resolve to a sequence
    /// replaces the whole block with the empty string. Markers without a
    /// counterpart are left for the token pass, where they degrade to
    /// unresolvable paths.
    fn expand_loops(&self, input: &str, frame: &Frame) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        while let Some(start) = rest.find(EACH_OPEN) {
            let after_open = &rest[start + EACH_OPEN.len()..];
            let Some(path_len) = after_open.find("}}") else { break };
            let body_and_tail = &after_open[path_len + 2..];
            let Some(body_len) = body_and_tail.find(EACH_CLOSE) else { break };

            let path = after_open[..path_len].trim();
            let body = &body_and_tail[..body_len];

            out.push_str(&rest[..start]);
            if let Value::Array(items) = frame.resolve(path) {
                for (index, item) in items.iter().enumerate() {
                    let child = Frame::child(item, frame, index);
                    out.push_str(&self.render_frame(body, &child));
                }
            }
            rest = &body_and_tail[body_len + EACH_CLOSE.len()..];
        }
        out.push_str(rest);
        out
    }

    /// Substitutes every remaining `{{ expression }}` token.
    fn expand_tokens(&self, input: &str, frame: &Frame) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            let Some(expr_len) = after.find("}}") else { break };
            out.push_str(&rest[..start]);
            out.push_str(&self.eval_token(after[..expr_len].trim(), frame));
            rest = &after[expr_len + 2..];
        }
        out.push_str(rest);
        out
    }

    fn eval_token(&self, expr: &str, frame: &Frame) -> String {
        match parse_expression(expr) {
            Expression::HelperCall { name, args } => match self.helpers.get(&name) {
                Some(helper) => {
                    let resolved = args
                        .iter()
                        .map(|arg| match arg {
                            Argument::Literal(value) => value.clone(),
                            Argument::Path(path) => frame.resolve(path),
                        })
                        .collect();
                    display(&helper(resolved))
                }
                // Unknown helper name: the whole expression is one path.
                None => display(&frame.resolve(expr)),
            },
            Expression::Path(path) => display(&frame.resolve(&path)),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
