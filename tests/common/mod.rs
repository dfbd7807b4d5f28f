//! Shared plumbing for the integration test suite.

pub mod fixtures;

use hoadon::{InMemoryPrintLog, PrintPipeline, RecordingPrintTarget};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A pipeline wired to a recording target so tests can inspect every
/// dispatched document alongside the log it produced.
pub struct TestRig {
    pub pipeline: PrintPipeline,
    pub target: Arc<RecordingPrintTarget>,
    pub log: Arc<InMemoryPrintLog>,
}

pub fn recording_rig() -> TestRig {
    let target = Arc::new(RecordingPrintTarget::new());
    let log = Arc::new(InMemoryPrintLog::new());
    let pipeline = PrintPipeline::new(Box::new(Arc::clone(&target)), Arc::clone(&log));
    TestRig { pipeline, target, log }
}
