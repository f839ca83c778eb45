use std::sync::Arc;

use tracing::debug;

use crate::{
    context::Context,
    error::Result,
    task::{NextAction, Task},
};

/// An ordered list of tasks executed front to back over a shared context.
///
/// There is no branching: every task either continues to the next one or
/// ends the run early.
pub struct Pipeline {
    pub id: String,
    tasks: Vec<Arc<dyn Task>>,
}

impl Pipeline {
    /// Run every task in order. The first task error aborts the run and
    /// propagates to the caller.
    pub async fn run(&self, context: Context) -> Result<ExecutionResult> {
        let mut last_response = None;

        for task in &self.tasks {
            debug!(pipeline_id = %self.id, task_id = %task.id(), "running task");
            let result = task.run(context.clone()).await?;

            if result.response.is_some() {
                last_response = result.response;
            }
            if matches!(result.next_action, NextAction::End) {
                break;
            }
        }

        Ok(ExecutionResult {
            response: last_response,
        })
    }

    /// Number of tasks in the pipeline
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Builder for creating pipelines
pub struct PipelineBuilder {
    id: String,
    tasks: Vec<Arc<dyn Task>>,
}

impl PipelineBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tasks: Vec::new(),
        }
    }

    pub fn add_task(mut self, task: Arc<dyn Task>) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn build(self) -> Pipeline {
        Pipeline {
            id: self.id,
            tasks: self.tasks,
        }
    }
}

/// Outcome of a completed pipeline run
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// The last response produced by a task, if any
    pub response: Option<String>,
}
