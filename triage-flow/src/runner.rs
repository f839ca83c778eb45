//! PipelineRunner – convenience wrapper that takes a stored session, runs the
//! full pipeline over its context, and hands the consumed session back to the
//! caller.
//!
//! Session entries are single-use: the entry is removed from storage *before*
//! the pipeline runs, so a replay of the same id finds nothing. Callers that
//! need different persistence semantics can use [`Pipeline::run`] and a
//! [`SessionStorage`] directly.

use std::sync::Arc;

use crate::{
    error::Result,
    pipeline::{ExecutionResult, Pipeline},
    storage::{Session, SessionStorage},
};

/// High-level helper that orchestrates the _take → execute → discard_ pattern.
#[derive(Clone)]
pub struct PipelineRunner {
    pipeline: Arc<Pipeline>,
    storage: Arc<dyn SessionStorage>,
}

impl PipelineRunner {
    pub fn new(pipeline: Arc<Pipeline>, storage: Arc<dyn SessionStorage>) -> Self {
        Self { pipeline, storage }
    }

    /// Run the full pipeline for the given session id.
    ///
    /// Returns `Ok(None)` when no entry exists for the id (never stored,
    /// already consumed, or expired). On success the consumed session is
    /// returned alongside the execution result so the caller can read the
    /// final context.
    pub async fn run_once(&self, session_id: &str) -> Result<Option<(Session, ExecutionResult)>> {
        let Some(session) = self.storage.take(session_id).await? else {
            return Ok(None);
        };

        let result = self.pipeline.run(session.context.clone()).await?;

        Ok(Some((session, result)))
    }
}
