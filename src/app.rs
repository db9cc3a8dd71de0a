use crate::api::{build_router, AppState};
use crate::config::Config;
use crate::orchestrator::BatchProcessor;
use crate::services::LlmService;
use crate::utils::logging::log_startup;
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    router: Router,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        if config.llm_api_key.is_empty() {
            warn!("⚠️ 未设置 LLM_API_KEY，生成请求将会失败");
        }

        // 创建生成能力和批量处理器
        let generator = Arc::new(LlmService::new(&config));
        let processor = BatchProcessor::new(generator, config.task_timeout());
        let state = AppState::new(processor, &config.dict_folder);

        Ok(Self {
            router: build_router(state),
            config,
        })
    }

    /// 运行 HTTP 服务
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.server_addr)
            .await
            .with_context(|| format!("无法监听地址: {}", self.config.server_addr))?;

        info!("✓ 服务已启动: http://{}", listener.local_addr()?);

        axum::serve(listener, self.router)
            .await
            .context("HTTP 服务异常退出")?;

        Ok(())
    }
}
