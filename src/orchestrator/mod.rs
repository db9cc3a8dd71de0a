//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! api::routes (HTTP 请求)
//!     ↓
//! batch_processor (处理 Vec<Word> × Vec<Profession>)
//!     ↓
//! workflow::GenerationInvoker (处理单个 (分块, 职业) 任务)
//!     ↓
//! services (能力层：chunker / prompt_builder / llm / response_merger)
//! ```
//!
//! 编排层只做调度、合并和统计，不直接拼提示词或解析返回内容。

pub mod batch_processor;

pub use batch_processor::{build_tasks, BatchOutcome, BatchProcessor, BatchStats};
