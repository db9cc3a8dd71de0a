use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 默认配置文件路径（可通过 APP_CONFIG 覆盖）
const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 程序配置
///
/// 加载顺序：内置默认值 → TOML 配置文件（可选） → 环境变量
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务监听地址
    pub server_addr: String,
    /// 词典文件目录（存放 `<EXAM>_T.json`）
    pub dict_folder: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 单个生成任务的超时时间（秒），0 表示不限制
    pub task_timeout_secs: u64,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:3000".to_string(),
            dict_folder: "public/dicts".to_string(),
            verbose_logging: false,
            task_timeout_secs: 120,
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "o3-mini".to_string(),
        }
    }
}

impl Config {
    /// 加载完整配置
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("APP_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let base = Self::from_file(Path::new(&path))?.unwrap_or_default();
        Ok(base.with_env_overrides())
    }

    /// 只使用默认值和环境变量
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件读取配置，文件不存在时返回 None
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadFailed {
            path: path.display().to_string(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::FileParseFailed {
            path: path.display().to_string(),
            source,
        })?;

        Ok(Some(config))
    }

    /// 用环境变量覆盖已有配置
    pub fn with_env_overrides(self) -> Self {
        Self {
            server_addr: std::env::var("SERVER_ADDR").unwrap_or(self.server_addr),
            dict_folder: std::env::var("DICT_FOLDER").unwrap_or(self.dict_folder),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
            task_timeout_secs: std::env::var("TASK_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.task_timeout_secs),
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or(self.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(self.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(self.llm_model_name),
        }
    }

    /// 单任务超时，0 表示不设置
    pub fn task_timeout(&self) -> Option<Duration> {
        (self.task_timeout_secs > 0).then(|| Duration::from_secs(self.task_timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_file_missing_returns_none() {
        let result = Config::from_file(Path::new("definitely/not/here.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_from_file_partial_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "llm_model_name = \"gpt-4o-mini\"\ntask_timeout_secs = 0").unwrap();

        let config = Config::from_file(file.path()).unwrap().unwrap();
        assert_eq!(config.llm_model_name, "gpt-4o-mini");
        assert_eq!(config.task_timeout(), None);
        assert_eq!(config.dict_folder, "public/dicts");
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "task_timeout_secs = \"soon\"").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::FileParseFailed { .. }));
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(Config::default().task_timeout(), Some(Duration::from_secs(120)));
    }
}
