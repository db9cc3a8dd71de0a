//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化全局日志
///
/// 优先使用 `RUST_LOG`，否则根据 `verbose` 选择 debug / info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 重复初始化（例如测试中）直接忽略
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 例句生成服务启动 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("🌐 监听地址: {}", config.server_addr);
    info!("🤖 模型: {} ({})", config.llm_model_name, config.llm_api_base_url);
    info!("📚 词典目录: {}", config.dict_folder);
    match config.task_timeout() {
        Some(timeout) => info!("⏱️ 单任务超时: {} 秒", timeout.as_secs()),
        None => info!("⏱️ 单任务超时: 不限制"),
    }
    info!("{}", "=".repeat(60));
}

/// 记录批次开始信息
///
/// # 参数
/// - `words`: 单词总数
/// - `chunks`: 分块数量
/// - `professions`: 职业数量
pub fn log_batch_start(words: usize, chunks: usize, professions: usize) {
    info!("{}", "=".repeat(60));
    info!("📦 开始生成例句: {} 个单词 / {} 个分块 / {} 个职业", words, chunks, professions);
    info!("📄 并发任务数: {}", chunks * professions);
    info!("{}", "=".repeat(60));
}

/// 记录批次完成信息
///
/// # 参数
/// - `success`: 成功任务数
/// - `total`: 任务总数
/// - `elapsed_ms`: 批次耗时
pub fn log_batch_complete(success: usize, total: usize, elapsed_ms: u128) {
    info!("{}", "─".repeat(60));
    info!("✓ 批次完成: 成功 {}/{}，耗时 {}ms", success, total, elapsed_ms);
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("例句生成服务", 2), "例句...");
    }
}
