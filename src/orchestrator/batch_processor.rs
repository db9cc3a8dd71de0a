//! 批量例句处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **请求校验**：单词或职业为空时直接返回，不启动任何任务
//! 2. **任务矩阵**：分块 × 职业（分块在外层，职业在内层）
//! 3. **并发执行**：所有任务同时发出，等待全部结束（不限并发数）
//! 4. **结果合并**：每个成功任务只与自己分块的单词合并
//! 5. **失败汇总**：单个任务失败只记录，不影响其他任务
//!
//! ## 并发模型
//!
//! 所有任务在当前请求的 task 内通过 `join_all` 协作式并发，
//! 只在等待生成能力时交错；合并在全部任务结束后串行进行，
//! 不同职业写入不同的键，因此不需要加锁。

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use tracing::{error, info};

use crate::error::RequestError;
use crate::models::{Profession, Word};
use crate::services::{response_merger, Chunk, Chunker, SentenceGenerator};
use crate::utils::logging::{log_batch_complete, log_batch_start};
use crate::workflow::{GenerationInvoker, GenerationResult, Task, TaskFailure};

/// 批次统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// 批次处理结果
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// 合并了例句的单词（顺序与输入一致）
    pub words: Vec<Word>,
    /// 任务失败及被过滤掉的单词
    pub failures: Vec<TaskFailure>,
    pub stats: BatchStats,
}

/// 批量处理器
#[derive(Clone)]
pub struct BatchProcessor {
    chunker: Chunker,
    invoker: GenerationInvoker,
}

impl BatchProcessor {
    pub fn new(generator: Arc<dyn SentenceGenerator>, task_timeout: Option<Duration>) -> Self {
        Self {
            chunker: Chunker::default(),
            invoker: GenerationInvoker::new(generator, task_timeout),
        }
    }

    /// 处理一次批量请求
    pub async fn run(
        &self,
        mut words: Vec<Word>,
        professions: &[Profession],
    ) -> Result<BatchOutcome, RequestError> {
        if professions.is_empty() || words.is_empty() {
            return Err(RequestError::invalid(
                "professions and words must be non-empty arrays",
            ));
        }

        let started = Instant::now();

        // 只保留本次请求生成的例句
        for word in words.iter_mut() {
            word.clear_sentences();
        }

        let chunks = self.chunker.split(words.len());
        let tasks = build_tasks(&chunks, professions);
        log_batch_start(words.len(), chunks.len(), professions.len());

        let results = join_all(
            tasks
                .into_iter()
                .map(|task| self.invoker.invoke(&words, task)),
        )
        .await;

        let mut stats = BatchStats {
            total: results.len(),
            ..Default::default()
        };
        let mut failures = Vec::new();

        for result in results {
            match result {
                GenerationResult::Success {
                    task,
                    raw_response,
                    skipped,
                } => {
                    failures.extend(skipped.into_iter().map(|e| TaskFailure::new(&task, e)));

                    let target = task.chunk.words_mut(&mut words);
                    match response_merger::merge(target, &raw_response, &task.profession) {
                        Ok(merged) => {
                            info!("{} 合并 {} 个例句", task, merged);
                            stats.succeeded += 1;
                        }
                        Err(e) => {
                            failures.push(TaskFailure::new(&task, e));
                            stats.failed += 1;
                        }
                    }
                }
                GenerationResult::Failure(failure) => {
                    failures.push(failure);
                    stats.failed += 1;
                }
            }
        }

        if !failures.is_empty() {
            let messages: Vec<String> = failures.iter().map(ToString::to_string).collect();
            error!("Some chunks failed: {:#?}", messages);
        }

        log_batch_complete(stats.succeeded, stats.total, started.elapsed().as_millis());

        Ok(BatchOutcome {
            words,
            failures,
            stats,
        })
    }
}

/// 构建任务矩阵：分块 × 职业
pub fn build_tasks(chunks: &[Chunk], professions: &[Profession]) -> Vec<Task> {
    chunks
        .iter()
        .flat_map(|chunk| {
            professions
                .iter()
                .map(move |profession| Task::new(chunk.clone(), profession.clone()))
        })
        .collect()
}
