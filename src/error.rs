//! Defines the unified error types for print pipeline operations.
//!
//! Only configuration and dispatch problems surface as errors. Rendering
//! itself is total: missing fields, non-numeric helper arguments and
//! unparseable dates all degrade to empty or zero-like output instead of
//! failing, so a print never dies mid-render over one absent field.

use hoadon_store::StoreError;
use thiserror::Error;

/// Errors from the platform dispatch step.
#[derive(Error, Debug, Clone)]
pub enum DispatchError {
    /// The host refused to open the print window.
    #[error("the print window was blocked; allow popups for this site and print again")]
    PopupBlocked,

    /// The target accepted the document but failed to process it.
    #[error("print target failed: {0}")]
    TargetFailed(String),
}

/// The main error enum for all high-level print operations.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// No template was selected or found for the requested document type.
    #[error("no matching print template")]
    NoTemplate,

    #[error("print dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("template store error: {0}")]
    Store(#[from] StoreError),
}
