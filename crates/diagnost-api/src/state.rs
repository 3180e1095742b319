use std::sync::Arc;

use diagnost_report::assemble::ReportAssembler;

/// Shared application state, injected into all route handlers via Axum state.
pub struct AppState<S> {
    pub summarizer: Arc<S>,
    pub assembler: Arc<ReportAssembler>,
}

impl<S> AppState<S> {
    pub fn new(summarizer: S) -> Self {
        Self::with_assembler(summarizer, ReportAssembler::new())
    }

    pub fn with_assembler(summarizer: S, assembler: ReportAssembler) -> Self {
        Self {
            summarizer: Arc::new(summarizer),
            assembler: Arc::new(assembler),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            summarizer: Arc::clone(&self.summarizer),
            assembler: Arc::clone(&self.assembler),
        }
    }
}
