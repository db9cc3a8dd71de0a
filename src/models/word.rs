use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// 例句映射：职业 id → 例句
///
/// 每个职业最多一条，序列化后就是普通的 JSON 对象
pub type SentenceMap = BTreeMap<String, String>;

/// 单词
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// 单词本身，也是与 AI 返回结果匹配的键
    #[serde(default, deserialize_with = "null_as_default")]
    pub word: String,
    /// 释义
    #[serde(default, deserialize_with = "one_or_many")]
    pub trans: Vec<String>,
    /// 美式音标
    #[serde(default, deserialize_with = "null_as_default")]
    pub usphone: String,
    /// 英式音标
    #[serde(default, deserialize_with = "null_as_default")]
    pub ukphone: String,
    /// 各职业场景下的例句（批量请求开始时会被清空）
    #[serde(default, deserialize_with = "lenient_sentences")]
    pub sentences: SentenceMap,
    /// 调用方附带的其他字段，原样返回
    #[serde(flatten)]
    pub extra: serde_json::Map<String, JsonValue>,
}

impl Word {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Default::default()
        }
    }

    /// 单词字符串非空才算有效
    pub fn is_valid(&self) -> bool {
        !self.word.trim().is_empty()
    }

    /// 写入某个职业的例句（同一职业重复写入会覆盖）
    pub fn set_sentence(&mut self, profession_id: &str, sentence: impl Into<String>) {
        self.sentences
            .insert(profession_id.to_string(), sentence.into());
    }

    pub fn sentence_for(&self, profession_id: &str) -> Option<&str> {
        self.sentences.get(profession_id).map(String::as_str)
    }

    pub fn clear_sentences(&mut self) {
        self.sentences.clear();
    }
}

/// null 按默认值处理
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 例句只保留字符串值，null 或其他类型的值直接丢弃
fn lenient_sentences<'de, D>(deserializer: D) -> Result<SentenceMap, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, JsonValue>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| match value {
            JsonValue::String(s) => Some((key, s)),
            _ => None,
        })
        .collect())
}

/// 释义既可能是字符串数组，也可能是单个字符串
pub(crate) fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
        Null(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
        OneOrMany::Null(()) => Vec::new(),
    })
}
