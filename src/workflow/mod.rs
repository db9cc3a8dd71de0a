pub mod generation_flow;
pub mod task;

pub use generation_flow::GenerationInvoker;
pub use task::{GenerationResult, Task, TaskFailure};
