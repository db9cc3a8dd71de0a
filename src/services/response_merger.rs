//! 结果合并 - 业务能力层
//!
//! 校验 AI 返回的 `{"data":[{"word":..,"sentences":..}]}` 结构，
//! 并把例句写入目标单词中对应职业的位置。
//!
//! 调用方只传入产生该结果的分块单词，不同分块里同名单词不会互相串写。

use crate::error::TaskError;
use crate::models::{Profession, Word};
use regex::Regex;
use serde_json::Value as JsonValue;
use std::sync::LazyLock;
use tracing::debug;

/// 匹配 Markdown 代码块包裹的 JSON
static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*```[a-zA-Z]*\s*\n?(.*?)\n?\s*```\s*$").expect("code fence pattern is valid")
});

/// `data` 数组中的一项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceEntry {
    pub word: String,
    pub sentences: Option<String>,
}

/// 校验通过的返回内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPayload {
    pub data: Vec<SentenceEntry>,
}

impl GenerationPayload {
    /// 第一条 word 完全相同（区分大小写）的记录
    pub fn find(&self, word: &str) -> Option<&SentenceEntry> {
        self.data.iter().find(|entry| entry.word == word)
    }
}

/// 解析并校验返回内容
///
/// 非法 JSON、缺少 `data` 或 `data` 不是数组都返回 `MalformedAIResponse`；
/// 数组内结构不符的单项直接跳过
pub fn parse_payload(raw: &str) -> Result<GenerationPayload, TaskError> {
    let body = CODE_FENCE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map_or(raw, |m| m.as_str());

    let value: JsonValue = serde_json::from_str(body)
        .map_err(|e| TaskError::malformed(format!("invalid JSON: {}", e)))?;

    let items = value
        .get("data")
        .and_then(JsonValue::as_array)
        .ok_or_else(|| TaskError::malformed("data array is missing"))?;

    let data = items
        .iter()
        .filter_map(|item| {
            let word = item.get("word")?.as_str()?.to_string();
            let sentences = item
                .get("sentences")
                .and_then(JsonValue::as_str)
                .map(str::to_string);
            Some(SentenceEntry { word, sentences })
        })
        .collect::<Vec<_>>();

    if data.len() < items.len() {
        debug!("跳过 {} 条结构不符的记录", items.len() - data.len());
    }

    Ok(GenerationPayload { data })
}

/// 把返回内容合并到单词中，返回实际写入的单词数量
///
/// 找不到匹配或例句为空时保持原样；无效单词不参与匹配；解析失败时不修改任何单词
pub fn merge(words: &mut [Word], raw: &str, profession: &Profession) -> Result<usize, TaskError> {
    if !profession.is_valid() {
        return Err(TaskError::InvalidProfession {
            detail: "id is required".to_string(),
        });
    }

    let payload = parse_payload(raw)?;
    let mut merged = 0;

    for word in words.iter_mut().filter(|w| w.is_valid()) {
        let Some(entry) = payload.find(&word.word) else {
            continue;
        };
        match entry.sentences.as_deref() {
            Some(sentence) if !sentence.is_empty() => {
                word.set_sentence(&profession.id, sentence);
                merged += 1;
            }
            _ => {}
        }
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn programmer() -> Profession {
        Profession::new("programmer", "程序员", "程序员日常工作中常用的英语表达")
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w)).collect()
    }

    const APPLE: &str = r#"{"data":[{"word":"apple","sentences":"We shipped the apple build."}]}"#;

    #[test]
    fn test_merge_matching_word() {
        let mut target = words(&["apple", "banana"]);
        let merged = merge(&mut target, APPLE, &programmer()).unwrap();

        assert_eq!(merged, 1);
        assert_eq!(target[0].sentence_for("programmer"), Some("We shipped the apple build."));
        assert!(target[1].sentences.is_empty());
    }

    #[test]
    fn test_merge_without_match_changes_nothing() {
        let mut target = words(&["banana"]);
        let before = target.clone();

        assert_eq!(merge(&mut target, APPLE, &programmer()).unwrap(), 0);
        assert_eq!(target, before);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let mut target = words(&["Apple"]);
        assert_eq!(merge(&mut target, APPLE, &programmer()).unwrap(), 0);
    }

    #[test]
    fn test_first_entry_wins_and_empty_sentence_skipped() {
        let raw = r#"{"data":[
            {"word":"apple","sentences":"first"},
            {"word":"apple","sentences":"second"},
            {"word":"pear","sentences":""}
        ]}"#;
        let mut target = words(&["apple", "pear"]);

        assert_eq!(merge(&mut target, raw, &programmer()).unwrap(), 1);
        assert_eq!(target[0].sentence_for("programmer"), Some("first"));
        assert!(target[1].sentences.is_empty());
    }

    #[test]
    fn test_invalid_words_never_receive_sentences() {
        let raw = r#"{"data":[
            {"word":"apple","sentences":"We shipped the apple build."},
            {"word":"","sentences":"ghost"},
            {"word":"  ","sentences":"blank ghost"}
        ]}"#;
        let mut target = vec![Word::new("apple"), Word::new(""), Word::new("  ")];

        assert_eq!(merge(&mut target, raw, &programmer()).unwrap(), 1);
        assert_eq!(target[0].sentence_for("programmer"), Some("We shipped the apple build."));
        assert!(target[1].sentences.is_empty());
        assert!(target[2].sentences.is_empty());
    }

    #[test]
    fn test_malformed_response_leaves_words_untouched() {
        for raw in ["not json", r#"{"items":[]}"#, r#"{"data":"apple"}"#, "[]"] {
            let mut target = words(&["apple"]);
            let err = merge(&mut target, raw, &programmer()).unwrap_err();
            assert!(matches!(err, TaskError::MalformedAIResponse { .. }), "{}", raw);
            assert!(target[0].sentences.is_empty());
        }
    }

    #[test]
    fn test_bad_entries_are_skipped() {
        let raw = r#"{"data":[1, {"sentences":"orphan"}, {"word":"apple","sentences":42}, {"word":"kiwi","sentences":"ok"}]}"#;
        let payload = parse_payload(raw).unwrap();
        assert_eq!(payload.data.len(), 2);
        assert_eq!(payload.find("apple").unwrap().sentences, None);
        assert_eq!(payload.find("kiwi").unwrap().sentences.as_deref(), Some("ok"));
    }

    #[test]
    fn test_code_fence_is_stripped() {
        let raw = format!("```json\n{}\n```", APPLE);
        let mut target = words(&["apple"]);
        assert_eq!(merge(&mut target, &raw, &programmer()).unwrap(), 1);
    }

    #[test]
    fn test_merge_twice_is_idempotent() {
        let mut once = words(&["apple"]);
        merge(&mut once, APPLE, &programmer()).unwrap();

        let mut twice = words(&["apple"]);
        merge(&mut twice, APPLE, &programmer()).unwrap();
        merge(&mut twice, APPLE, &programmer()).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_professions_write_disjoint_keys() {
        let mut target = words(&["apple"]);
        let doctor = Profession::predefined("doctor").unwrap();
        merge(&mut target, APPLE, &programmer()).unwrap();
        merge(
            &mut target,
            r#"{"data":[{"word":"apple","sentences":"Eat an apple."}]}"#,
            &doctor,
        )
        .unwrap();

        assert_eq!(target[0].sentences.len(), 2);
        assert_eq!(target[0].sentence_for("doctor"), Some("Eat an apple."));
    }
}
