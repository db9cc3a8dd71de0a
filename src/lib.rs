//! # Profession Sentences
//!
//! 为考试词表按"职业场景"批量生成英语例句的服务
//!
//! ## 架构设计
//!
//! ### ① 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个能力只处理一件事
//! - `Chunker` - 把单词列表切成固定大小的分块
//! - `prompt_builder` - 把 (分块, 职业) 渲染成提示词
//! - `LlmService` - 调用兼容 OpenAI 的接口生成 JSON
//! - `response_merger` - 校验返回结构并写回例句
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - 定义"一个任务"的完整处理流程
//! - `Task` - 上下文封装（分块 + 职业）
//! - `GenerationInvoker` - 提示词 → 生成 → 结果，失败只影响本任务
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 任务矩阵、并发执行、合并与失败汇总
//!
//! ### ④ 接口层（API）
//! - `api/` - axum 路由：批量生成、词典、章节、职业列表
//!
//! ## 模块结构

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult, RequestError, TaskError};
pub use models::{Profession, Word};
pub use orchestrator::{BatchOutcome, BatchProcessor};
pub use services::SentenceGenerator;
pub use workflow::{GenerationResult, Task, TaskFailure};
