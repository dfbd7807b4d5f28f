//! Nested context frames and path resolution for print templates.
//!
//! A [`Frame`] is the data visible at one point during a render: a JSON
//! mapping, an optional parent frame, and loop metadata for frames created
//! by `{{#each}}` iterations. Resolution is an explicit iterative walk over
//! the frame chain (self, then parent, then grandparent) rather than any
//! form of language-level inheritance.
//!
//! Resolution is total: a path that cannot be resolved anywhere in the
//! chain yields [`serde_json::Value::Null`], which displays as the empty
//! string. A print template must never fail mid-render because one
//! optional field is absent.

use serde_json::Value;

/// The data context seen by one level of template rendering.
///
/// Frames borrow their data and their parent; parent frames outlive their
/// children only for the duration of a single render pass.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    data: &'a Value,
    parent: Option<&'a Frame<'a>>,
    loop_index: Option<usize>,
}

impl<'a> Frame<'a> {
    /// Creates the root frame for a render call.
    pub fn root(data: &'a Value) -> Self {
        Self { data, parent: None, loop_index: None }
    }

    /// Creates a loop-iteration child frame.
    ///
    /// `data` is the current element, `index` its 0-based position in the
    /// collection being iterated.
    pub fn child(data: &'a Value, parent: &'a Frame<'a>, index: usize) -> Self {
        Self { data, parent: Some(parent), loop_index: Some(index) }
    }

    /// The frame's own data mapping.
    pub fn data(&self) -> &'a Value {
        self.data
    }

    /// The loop index for frames created by `{{#each}}`, if any.
    pub fn loop_index(&self) -> Option<usize> {
        self.loop_index
    }

    /// Resolves a dotted path expression against this frame.
    ///
    /// - `this` returns the frame's own data (the current loop item).
    /// - `@index` returns the loop index of this frame, or `0` outside a
    ///   loop.
    /// - Any other path is split on `.` and walked by key lookup, first
    ///   against this frame, then retried from scratch against each
    ///   ancestor until a frame resolves every segment.
    ///
    /// Returns `Value::Null` when no frame in the chain can resolve the
    /// path. Never fails.
    pub fn resolve(&self, path: &str) -> Value {
        if path == "this" {
            return self.data.clone();
        }
        if path == "@index" {
            return Value::from(self.loop_index.unwrap_or(0));
        }

        let segments: Vec<&str> = path.split('.').collect();
        let mut current = Some(self);
        while let Some(frame) = current {
            if let Some(value) = frame.walk(&segments) {
                return value.clone();
            }
            current = frame.parent;
        }
        Value::Null
    }

    /// Attempts to resolve every segment against this frame alone.
    ///
    /// A key that is present with a `null` value counts as resolved; only
    /// a missing key aborts the walk so the caller can fall back to the
    /// parent frame.
    fn walk(&self, segments: &[&str]) -> Option<&'a Value> {
        let mut segments = segments;
        if segments.first() == Some(&"this") {
            // `this` aliases the frame's own data inside a path.
            segments = &segments[1..];
        }
        let mut value = self.data;
        for segment in segments {
            value = value.get(segment)?;
        }
        Some(value)
    }
}

/// Converts a resolved value into template output text.
///
/// Null renders empty, arrays render as their length (the "show item
/// count" affordance), and integral numbers render without a trailing
/// fraction. Objects have no direct textual form and render empty.
pub fn display(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                let f = n.as_f64().unwrap_or(0.0);
                // Whole-valued floats (computed sums) print without ".0".
                if f.is_finite() && f.fract() == 0.0 && f.abs() < 9e15 {
                    (f as i64).to_string()
                } else {
                    n.to_string()
                }
            }
        }
        Value::Array(items) => items.len().to_string(),
        Value::Object(_) => String::new(),
    }
}
