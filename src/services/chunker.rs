//! 单词分块
//!
//! 把有序单词列表切成连续、不重叠的固定大小分块，最后一块可以更小。
//! 分块只记录下标区间，合并时用同一区间取回该分块的单词。

use crate::models::Word;
use std::num::NonZeroUsize;
use std::ops::Range;

/// 每个生成请求处理的单词数量
pub const CHUNK_SIZE: usize = 5;

const DEFAULT_CHUNK_SIZE: NonZeroUsize = match NonZeroUsize::new(CHUNK_SIZE) {
    Some(size) => size,
    None => panic!("CHUNK_SIZE must be non-zero"),
};

/// 单词列表中的一个连续分块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 第几个分块（从 0 开始）
    pub index: usize,
    /// 在原列表中的下标区间
    pub range: Range<usize>,
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// 该分块对应的单词
    pub fn words<'a>(&self, words: &'a [Word]) -> &'a [Word] {
        &words[self.range.clone()]
    }

    pub fn words_mut<'a>(&self, words: &'a mut [Word]) -> &'a mut [Word] {
        &mut words[self.range.clone()]
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "分块 #{} (单词 {}-{})",
            self.index + 1,
            self.range.start + 1,
            self.range.end
        )
    }
}

/// 分块器
#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    size: NonZeroUsize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Chunker {
    pub fn with_size(size: NonZeroUsize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// 对长度为 `len` 的列表分块，结果数量为 ceil(len / size)
    pub fn split(&self, len: usize) -> Vec<Chunk> {
        (0..len)
            .step_by(self.size())
            .enumerate()
            .map(|(index, start)| Chunk {
                index,
                range: start..(start + self.size()).min(len),
            })
            .collect()
    }
}
