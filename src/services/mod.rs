pub mod chunker;
pub mod llm_service;
pub mod prompt_builder;
pub mod response_merger;

pub use chunker::{Chunk, Chunker, CHUNK_SIZE};
pub use llm_service::{LlmService, SentenceGenerator};
pub use prompt_builder::{build_prompt, BuiltPrompt};
pub use response_merger::{merge, parse_payload, GenerationPayload, SentenceEntry};
