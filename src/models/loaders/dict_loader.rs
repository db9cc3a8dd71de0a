use crate::error::DictError;
use crate::models::dictionary::DictionaryEntry;
use crate::models::exam_type::ExamType;
use std::path::Path;
use tokio::fs;

/// 读取考试类型对应的词典文件 `<folder>/<EXAM>_T.json`
pub async fn load_dictionary(folder: &Path, exam: ExamType) -> Result<Vec<DictionaryEntry>, DictError> {
    let path = folder.join(exam.file_name());

    let content = fs::read_to_string(&path).await.map_err(|source| {
        tracing::warn!("读取词典文件失败 {}: {}", path.display(), source);
        DictError::NotFound {
            exam: exam.to_string(),
            source,
        }
    })?;

    let entries: Vec<DictionaryEntry> = serde_json::from_str(&content).map_err(|source| {
        tracing::warn!("解析词典文件失败 {}: {}", path.display(), source);
        DictError::ParseFailed {
            exam: exam.to_string(),
            source,
        }
    })?;

    tracing::info!("成功加载词典 {}，共 {} 个单词", exam, entries.len());

    Ok(entries)
}
