//! 单任务生成流程 - 流程层
//!
//! 流程顺序：构建提示词 → 调用生成能力 → 返回原始结果
//!
//! 任何错误都被包装成该任务自己的失败，不会越过任务边界

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::TaskError;
use crate::models::Word;
use crate::services::{build_prompt, SentenceGenerator};
use crate::utils::logging::truncate_text;
use crate::workflow::task::{GenerationResult, Task, TaskFailure};

/// 生成调用器
///
/// - 不持有任何单词数据
/// - 只依赖生成能力（`SentenceGenerator`）
#[derive(Clone)]
pub struct GenerationInvoker {
    generator: Arc<dyn SentenceGenerator>,
    timeout: Option<Duration>,
}

impl GenerationInvoker {
    pub fn new(generator: Arc<dyn SentenceGenerator>, timeout: Option<Duration>) -> Self {
        Self { generator, timeout }
    }

    /// 执行一个任务，`words` 是整个批次的单词列表
    pub async fn invoke(&self, words: &[Word], task: Task) -> GenerationResult {
        let start = Instant::now();

        match self.generate(task.chunk.words(words), &task).await {
            Ok((raw_response, skipped)) => {
                info!(
                    "{} ✓ 生成完成，耗时: {}ms",
                    task,
                    start.elapsed().as_millis()
                );
                GenerationResult::Success {
                    task,
                    raw_response,
                    skipped,
                }
            }
            Err(error) => {
                warn!(
                    "{} ❌ 生成失败 (耗时 {}ms): {}",
                    task,
                    start.elapsed().as_millis(),
                    error
                );
                GenerationResult::Failure(TaskFailure::new(&task, error))
            }
        }
    }

    async fn generate(&self, chunk_words: &[Word], task: &Task) -> Result<(String, Vec<TaskError>), TaskError> {
        let prompt = build_prompt(chunk_words, &task.profession)?;
        debug!("{} 提示词单词: {:?}", task, prompt.words);

        let call = self.generator.generate_json(&prompt.text);
        let response = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| TaskError::TaskTimeout {
                    secs: limit.as_secs(),
                })?,
            None => call.await,
        };

        let raw = response
            .map_err(TaskError::generation_failed)?
            .filter(|body| !body.trim().is_empty())
            .ok_or(TaskError::EmptyGenerationResponse)?;

        debug!("{} 原始返回: {}", task, truncate_text(&raw, 200));

        Ok((raw, prompt.skipped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Profession;
    use crate::services::Chunker;
    use async_trait::async_trait;

    struct FixedGenerator(anyhow::Result<Option<String>>);

    #[async_trait]
    impl SentenceGenerator for FixedGenerator {
        async fn generate_json(&self, _prompt: &str) -> anyhow::Result<Option<String>> {
            match &self.0 {
                Ok(body) => Ok(body.clone()),
                Err(e) => Err(anyhow::anyhow!("{}", e)),
            }
        }
    }

    struct HangingGenerator;

    #[async_trait]
    impl SentenceGenerator for HangingGenerator {
        async fn generate_json(&self, _prompt: &str) -> anyhow::Result<Option<String>> {
            futures::future::pending().await
        }
    }

    fn first_task(words: &[Word], profession: Profession) -> Task {
        let chunk = Chunker::default().split(words.len()).remove(0);
        Task::new(chunk, profession)
    }

    fn invoke(generator: impl SentenceGenerator + 'static, words: &[Word], profession: Profession) -> GenerationResult {
        let invoker = GenerationInvoker::new(Arc::new(generator), None);
        tokio_test::block_on(invoker.invoke(words, first_task(words, profession)))
    }

    fn failure_error(result: GenerationResult) -> TaskError {
        match result {
            GenerationResult::Failure(f) => f.error,
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_success_keeps_raw_response() {
        let words = vec![Word::new("apple"), Word::new("")];
        let body = r#"{"data":[]}"#.to_string();
        let result = invoke(
            FixedGenerator(Ok(Some(body.clone()))),
            &words,
            Profession::predefined("doctor").unwrap(),
        );

        match result {
            GenerationResult::Success {
                raw_response,
                skipped,
                task,
            } => {
                assert_eq!(raw_response, body);
                assert_eq!(skipped, vec![TaskError::InvalidWord { position: 1 }]);
                assert_eq!(task.profession.id, "doctor");
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_generator_error_is_task_scoped() {
        let words = vec![Word::new("apple")];
        let result = invoke(
            FixedGenerator(Err(anyhow::anyhow!("quota exceeded"))),
            &words,
            Profession::predefined("doctor").unwrap(),
        );

        match result {
            GenerationResult::Failure(failure) => {
                assert_eq!(failure.profession_id, "doctor");
                assert_eq!(failure.chunk.range, 0..1);
                assert!(matches!(failure.error, TaskError::GenerationFailed { ref message } if message.contains("quota")));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_body_is_empty_generation_response() {
        let words = vec![Word::new("apple")];
        for body in [None, Some("   ".to_string())] {
            let result = invoke(
                FixedGenerator(Ok(body)),
                &words,
                Profession::predefined("lawyer").unwrap(),
            );
            assert_eq!(failure_error(result), TaskError::EmptyGenerationResponse);
        }
    }

    #[test]
    fn test_prompt_errors_skip_the_call() {
        let words = vec![Word::new("apple")];
        let result = invoke(HangingGenerator, &words, Profession::default());
        assert!(matches!(failure_error(result), TaskError::InvalidProfession { .. }));

        let blank = vec![Word::new("")];
        let result = invoke(HangingGenerator, &blank, Profession::predefined("teacher").unwrap());
        assert_eq!(failure_error(result), TaskError::EmptyWordSet);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_becomes_task_failure() {
        let words = vec![Word::new("apple")];
        let invoker = GenerationInvoker::new(Arc::new(HangingGenerator), Some(Duration::from_secs(3)));
        let task = first_task(&words, Profession::predefined("designer").unwrap());

        let result = invoker.invoke(&words, task).await;
        assert_eq!(failure_error(result), TaskError::TaskTimeout { secs: 3 });
    }
}
