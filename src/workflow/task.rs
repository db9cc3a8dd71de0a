//! 生成任务
//!
//! 封装"我正在为哪个分块、哪个职业生成例句"这一信息

use crate::error::TaskError;
use crate::models::Profession;
use crate::services::Chunk;
use std::fmt::Display;

/// 一个并发单元：(分块, 职业)
#[derive(Debug, Clone)]
pub struct Task {
    pub chunk: Chunk,
    pub profession: Profession,
}

impl Task {
    pub fn new(chunk: Chunk, profession: Profession) -> Self {
        Self { chunk, profession }
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} 职业#{}]", self.chunk, self.profession.id)
    }
}

/// 单个任务的失败记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFailure {
    pub chunk: Chunk,
    pub profession_id: String,
    pub error: TaskError,
}

impl TaskFailure {
    pub fn new(task: &Task, error: TaskError) -> Self {
        Self {
            chunk: task.chunk.clone(),
            profession_id: task.profession.id.clone(),
            error,
        }
    }
}

impl Display for TaskFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Error processing {} for {}: {}",
            self.chunk, self.profession_id, self.error
        )
    }
}

/// 单个任务的结果
#[derive(Debug, Clone)]
pub enum GenerationResult {
    /// 拿到了原始返回内容，尚未合并
    Success {
        task: Task,
        raw_response: String,
        /// 构建提示词时过滤掉的单词
        skipped: Vec<TaskError>,
    },
    Failure(TaskFailure),
}
