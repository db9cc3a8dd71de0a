//! 提示词构建 - 业务能力层
//!
//! 把 (分块单词, 职业) 渲染成一次生成请求的提示词。
//! 返回格式 `{"data":[{"word":..,"sentences":..}]}` 由 `response_merger` 解析，两边必须保持一致。

use crate::error::TaskError;
use crate::models::{Profession, Word};
use serde_json::Value as JsonValue;
use tracing::warn;

/// 构建完成的提示词
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPrompt {
    /// 提示词正文
    pub text: String,
    /// 实际写入提示词的单词（已去重）
    pub words: Vec<String>,
    /// 被过滤掉的无效单词
    pub skipped: Vec<TaskError>,
}

/// 构建提示词
///
/// 校验顺序：
/// 1. 职业 id 非空，否则 `InvalidProfession`
/// 2. 逐个检查单词，空单词记为 `InvalidWord` 并从提示词中去掉
/// 3. 过滤后至少剩一个单词，否则 `EmptyWordSet`
pub fn build_prompt(words: &[Word], profession: &Profession) -> Result<BuiltPrompt, TaskError> {
    if !profession.is_valid() {
        return Err(TaskError::InvalidProfession {
            detail: format!(
                "id is required, got {}",
                serde_json::to_string(profession).unwrap_or_default()
            ),
        });
    }

    let mut skipped = Vec::new();
    let mut word_strings: Vec<String> = Vec::with_capacity(words.len());

    for (position, word) in words.iter().enumerate() {
        if !word.is_valid() {
            warn!("提示词中跳过无效单词 (位置 {}, 职业 {})", position, profession.id);
            skipped.push(TaskError::InvalidWord { position });
            continue;
        }
        if !word_strings.contains(&word.word) {
            word_strings.push(word.word.clone());
        }
    }

    if word_strings.is_empty() {
        return Err(TaskError::EmptyWordSet);
    }

    let text = render(&word_strings, profession);

    Ok(BuiltPrompt {
        text,
        words: word_strings,
        skipped,
    })
}

fn render(word_strings: &[String], profession: &Profession) -> String {
    let description = if profession.description.trim().is_empty() {
        profession.label.as_str()
    } else {
        profession.description.as_str()
    };

    // JSON 字符串字面量，单词里的引号和反斜杠会被转义
    let word_list = word_strings
        .iter()
        .map(|w| JsonValue::String(w.clone()).to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You are a language learning assistant. I need you to create memorable example sentences for English vocabulary words.

Professional Context:
{id} ({description})

Requirements:
1. For each word, create one sentence that naturally incorporates the word in the context of {id}'s work environment
2. Make sentences moderately difficult - not too simple, not too complex
3. Use everyday expressions and relatable scenarios that professionals encounter
4. Create sentences that help learners remember the word through practical usage
5. Connect the sentences to common workplace situations or daily professional activities
6. Focus on practical language that would actually be used in this professional context
7. Ensure sentences feel natural and conversational, not academic or textbook-like

Words to create sentences for:
{word_list}

Format the response as a JSON object with exactly this structure, one entry per word, using the word exactly as given:
{{
  "data": [
    {{
      "word": "<word>",
      "sentences": "<one example sentence>"
    }}
  ]
}}
"#,
        id = profession.id,
        description = description,
        word_list = word_list,
    )
}
