//! # hoadon
//!
//! Print-template rendering engine for retail documents (invoices,
//! shipping slips, receipts).
//!
//! A stored template (an HTML body carrying `{{ }}` expressions and
//! `{{#each}}` loops) is expanded against a canonical data context,
//! wrapped in a paper-sized document shell, and either returned as a
//! preview string or handed to a pluggable print target with an audit-log
//! entry.
//!
//! ## Crates
//!
//! - **hoadon-context**: nested context frames and path resolution
//! - **hoadon-template**: expression parsing, helpers, two-pass rendering
//! - **hoadon-compose**: paper presets, margins, document shell
//! - **hoadon-store**: template repository and print log
//! - **hoadon-source**: raw order/shipment → canonical context
//!
//! ## Design principle
//!
//! The engine has no persistence and no host-environment dependency:
//! templates and data flow in as parameters, and the only
//! platform-specific step, actually opening a print surface, sits
//! behind the [`PrintTarget`] trait.

// Re-export member crates
pub use hoadon_compose as compose_types;
pub use hoadon_context as context;
pub use hoadon_source as source;
pub use hoadon_store as store;
pub use hoadon_template as template;

mod error;
mod pipeline;

// Re-export commonly used types
pub use error::{DispatchError, PipelineError};
pub use hoadon_compose::{ComposeOptions, Margins, PaperPreset, compose, preset};
pub use hoadon_context::Frame;
pub use hoadon_source::{StoreProfile, compose_print_context};
pub use hoadon_store::{
    InMemoryPrintLog, InMemoryTemplateStore, PRINT_LOG_CAP, PrintLogEntry, StoreError, Template,
    TemplateStore,
};
pub use hoadon_template::{HelperRegistry, Renderer};
pub use pipeline::{NullPrintTarget, PrintJob, PrintPipeline, PrintTarget, RecordingPrintTarget};
