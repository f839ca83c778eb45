pub mod context;
pub mod error;
pub mod pipeline;
pub mod runner;
pub mod storage;
pub mod task;

// Re-export commonly used types
pub use context::Context;
pub use error::{FlowError, Result};
pub use pipeline::{ExecutionResult, Pipeline, PipelineBuilder};
pub use runner::PipelineRunner;
pub use storage::{InMemorySessionStorage, Session, SessionStorage};
pub use task::{NextAction, Task, TaskResult};
