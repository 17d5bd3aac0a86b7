//! Welldoc患者登记服务主程序

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use welldoc_database::{DatabasePatientService, DatabasePool, DatabaseQueries};
use welldoc_web::WebServer;

use crate::config::WelldocConfig;

/// Welldoc服务器命令行参数
#[derive(Parser, Debug)]
#[command(name = "welldoc-server")]
#[command(about = "Welldoc patient registration API server")]
struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    config: Option<String>,

    /// 监听主机
    #[arg(long)]
    host: Option<String>,

    /// 服务器端口
    #[arg(short, long)]
    port: Option<u16>,

    /// 数据库连接字符串
    #[arg(short, long)]
    database_url: Option<String>,

    /// 日志级别
    #[arg(short, long)]
    log_level: Option<String>,
}

impl Args {
    /// 命令行参数覆盖配置文件和环境变量
    fn apply(self, config: &mut WelldocConfig) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = self.database_url {
            config.database.url = url;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone();
    let mut config = WelldocConfig::load(config_path.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    // 初始化日志，RUST_LOG 优先
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match config_path {
        Some(path) => info!("Configuration loaded from: {}", path),
        None => info!("Configuration loaded"),
    }

    info!("启动Welldoc服务器...");
    info!("  监听地址: {}:{}", config.server.host, config.server.port);
    info!("  最大连接数: {}", config.database.max_connections);

    let addr = config.socket_addr()?;

    let pool = DatabasePool::connect(
        &config.database.url,
        config.database.max_connections,
        config.database.acquire_timeout(),
    )
    .await
    .context("Failed to connect to database")?;

    DatabaseQueries::new(&pool)
        .create_tables()
        .await
        .context("Failed to create database tables")?;

    let patient_service = Arc::new(DatabasePatientService::new(pool.clone()));
    let server = WebServer::new(addr, patient_service);

    if let Err(e) = server.run_until(shutdown_signal()).await {
        error!("服务器运行失败: {}", e);
        pool.close().await;
        return Err(e.into());
    }

    pool.close().await;
    info!("Welldoc服务器已停止");
    Ok(())
}

/// 等待 Ctrl+C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
