pub mod dictionary;
pub mod exam_type;
pub mod loaders;
pub mod profession;
pub mod word;

pub use dictionary::{chapter_count, words_from_chapter, DictionaryEntry, WORDS_PER_CHAPTER};
pub use exam_type::ExamType;
pub use loaders::load_dictionary;
pub use profession::Profession;
pub use word::{SentenceMap, Word};
