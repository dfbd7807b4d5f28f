//! The print pipeline: render, compose, dispatch, log.
//!
//! Printing is a two-step contract. The render step (template + context →
//! HTML document) is a pure in-memory transformation, fully testable in
//! isolation. The dispatch step hands the finished document to a
//! [`PrintTarget`], the only piece that touches a host environment; it is
//! fire-and-forget, and the pipeline never learns whether the user's print
//! dialog actually completed.

use crate::error::{DispatchError, PipelineError};
use hoadon_compose::{ComposeOptions, compose};
use hoadon_store::{InMemoryPrintLog, PrintLogEntry, Template};
use hoadon_template::Renderer;
use serde_json::{Map, Value, json};
use std::sync::{Arc, Mutex};

/// A host surface that can take a composed document and put it in front
/// of the user, e.g. a popup window in a browser shell.
pub trait PrintTarget: Send + Sync {
    /// Opens the document for printing.
    ///
    /// A host that refuses to open the surface (popup blocker) reports
    /// [`DispatchError::PopupBlocked`]; the caller gets actionable
    /// guidance text and nothing is logged.
    fn open_document(&self, html: &str) -> Result<(), DispatchError>;

    /// Human-readable target name, for logging.
    fn name(&self) -> &'static str;
}

impl<T: PrintTarget + ?Sized> PrintTarget for Arc<T> {
    fn open_document(&self, html: &str) -> Result<(), DispatchError> {
        (**self).open_document(html)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// A target for headless hosts: accepts and discards every document.
#[derive(Debug, Default)]
pub struct NullPrintTarget;

impl PrintTarget for NullPrintTarget {
    fn open_document(&self, _html: &str) -> Result<(), DispatchError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "NullPrintTarget"
    }
}

/// A target that captures every dispatched document, for tests.
#[derive(Debug, Default)]
pub struct RecordingPrintTarget {
    documents: Mutex<Vec<String>>,
}

impl RecordingPrintTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// The documents dispatched so far, oldest first.
    pub fn documents(&self) -> Vec<String> {
        self.documents.lock().map(|d| d.clone()).unwrap_or_default()
    }
}

impl PrintTarget for RecordingPrintTarget {
    fn open_document(&self, html: &str) -> Result<(), DispatchError> {
        self.documents
            .lock()
            .map_err(|_| DispatchError::TargetFailed("recording lock poisoned".to_string()))?
            .push(html.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "RecordingPrintTarget"
    }
}

/// One live print request.
pub struct PrintJob<'a> {
    /// The selected template; `None` raises
    /// [`PipelineError::NoTemplate`] before anything is rendered.
    pub template: Option<&'a Template>,
    /// The canonical data context (see `hoadon-source`).
    pub data: &'a Value,
    pub user_id: Option<&'a str>,
    pub order_id: Option<&'a str>,
}

/// Renders templates and dispatches the results to a print target.
pub struct PrintPipeline {
    renderer: Renderer,
    target: Box<dyn PrintTarget>,
    print_log: Arc<InMemoryPrintLog>,
}

impl PrintPipeline {
    pub fn new(target: Box<dyn PrintTarget>, print_log: Arc<InMemoryPrintLog>) -> Self {
        Self { renderer: Renderer::new(), target, print_log }
    }

    /// Renders a template into a full preview document.
    ///
    /// Pure: no window side effect, no log entry. The returned string is a
    /// complete HTML document suitable for an iframe's `srcDoc`.
    pub fn render_preview_html(&self, template: &Template, data: &Value) -> String {
        self.compose_document(template, data, false)
    }

    /// Renders, composes and dispatches one document, then records it in
    /// the print log.
    ///
    /// The log entry is appended as soon as the target accepts the
    /// document. Dispatch is fire-and-forget, so "printed" here means
    /// "handed to the host", not "ink on paper".
    pub fn print_document(&self, job: &PrintJob) -> Result<(), PipelineError> {
        let template = job.template.ok_or(PipelineError::NoTemplate)?;
        let html = self.compose_document(template, job.data, true);
        self.target.open_document(&html)?;

        let mut metadata = Map::new();
        metadata.insert("paperSize".to_string(), json!(template.paper_size));
        self.print_log.append(PrintLogEntry::new(
            &template.template_type,
            job.order_id,
            &template.id,
            job.user_id,
            metadata,
        ));
        log::debug!(
            "dispatched '{}' ({}) to {}",
            template.id,
            template.template_type,
            self.target.name()
        );
        Ok(())
    }

    /// The print log this pipeline appends to.
    pub fn print_log(&self) -> &InMemoryPrintLog {
        &self.print_log
    }

    fn compose_document(&self, template: &Template, data: &Value, auto_print: bool) -> String {
        let body = self.renderer.render(&template.content, data);
        compose(
            &body,
            &ComposeOptions {
                paper_size: &template.paper_size,
                margin: template.margin,
                auto_print,
            },
        )
    }
}
