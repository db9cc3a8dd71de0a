use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 请求参数错误（不会启动任何任务）
    #[error("请求错误: {0}")]
    Request(#[from] RequestError),
    /// 单个生成任务的错误
    #[error("任务错误: {0}")]
    Task(#[from] TaskError),
    /// 词典加载错误
    #[error("词典错误: {0}")]
    Dict(#[from] DictError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 其他错误（用于包装第三方库错误）
    #[error("错误: {0}")]
    Other(String),
}

/// 请求级别错误
///
/// 在任何任务启动之前返回，整个批次不做任何处理
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },
}

/// 任务级别错误
///
/// 只影响一个 (分块, 职业) 任务，由编排层收集，不会中断其他任务
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// 职业缺失或 id 为空
    #[error("无效的职业: {detail}")]
    InvalidProfession { detail: String },
    /// 分块中某个单词为空（该单词会被过滤掉）
    #[error("无效的单词 (分块内位置: {position})")]
    InvalidWord { position: usize },
    /// 过滤后没有任何有效单词
    #[error("没有可用的有效单词")]
    EmptyWordSet,
    /// 生成能力调用失败（网络、配额、上游解析等）
    #[error("生成调用失败: {message}")]
    GenerationFailed { message: String },
    /// 生成能力返回空内容
    #[error("生成结果为空")]
    EmptyGenerationResponse,
    /// 返回内容不是合法的 {"data":[...]} 结构
    #[error("AI 返回格式错误: {reason}")]
    MalformedAIResponse { reason: String },
    /// 超过单任务超时时间
    #[error("任务超时 ({secs} 秒)")]
    TaskTimeout { secs: u64 },
}

/// 词典相关错误
#[derive(Debug, Error)]
pub enum DictError {
    /// 不支持的考试类型
    #[error("Invalid exam type: {value}")]
    InvalidExamType { value: String },
    /// 词典文件不存在或无法读取
    #[error("Dictionary for {exam} not found")]
    NotFound {
        exam: String,
        #[source]
        source: std::io::Error,
    },
    /// 词典文件解析失败
    #[error("Dictionary for {exam} could not be parsed: {source}")]
    ParseFailed {
        exam: String,
        #[source]
        source: serde_json::Error,
    },
    /// 章节超出范围
    #[error("章节 {chapter} 超出范围 [1, {total}]")]
    InvalidChapter { chapter: usize, total: usize },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    FileReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("配置文件解析失败 ({path}): {source}")]
    FileParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl RequestError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        RequestError::InvalidRequest {
            reason: reason.into(),
        }
    }
}

impl TaskError {
    /// 包装生成能力抛出的错误
    pub fn generation_failed(err: impl std::fmt::Display) -> Self {
        TaskError::GenerationFailed {
            message: err.to_string(),
        }
    }

    /// 创建返回格式错误
    pub fn malformed(reason: impl Into<String>) -> Self {
        TaskError::MalformedAIResponse {
            reason: reason.into(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
