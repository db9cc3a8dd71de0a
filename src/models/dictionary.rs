use crate::error::DictError;
use crate::models::word::{null_as_default, one_or_many, SentenceMap, Word};
use serde::{Deserialize, Serialize};

/// 每章固定单词数量
pub const WORDS_PER_CHAPTER: usize = 20;

/// 词典文件中的一条记录
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub trans: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub usphone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ukphone: String,
}

impl From<&DictionaryEntry> for Word {
    fn from(entry: &DictionaryEntry) -> Self {
        Word {
            word: entry.name.clone(),
            trans: entry.trans.clone(),
            usphone: entry.usphone.clone(),
            ukphone: entry.ukphone.clone(),
            sentences: SentenceMap::new(),
            extra: Default::default(),
        }
    }
}

/// 词典共有多少章
pub fn chapter_count(entry_count: usize) -> usize {
    entry_count.div_ceil(WORDS_PER_CHAPTER)
}

/// 取出指定章节（从 1 开始）的单词，例句为空
pub fn words_from_chapter(entries: &[DictionaryEntry], chapter: usize) -> Result<Vec<Word>, DictError> {
    let total = chapter_count(entries.len());
    if chapter == 0 || chapter > total {
        return Err(DictError::InvalidChapter { chapter, total });
    }

    let start = (chapter - 1) * WORDS_PER_CHAPTER;
    let end = (start + WORDS_PER_CHAPTER).min(entries.len());

    Ok(entries[start..end].iter().map(Word::from).collect())
}
