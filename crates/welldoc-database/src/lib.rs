//! # Welldoc数据库模块
//!
//! 负责患者记录的持久化，提供SQLite连接池、建表以及患者创建网关。

pub mod connection;
pub mod models;
pub mod queries;
pub mod service;

// 重新导出主要类型
pub use connection::DatabasePool;
pub use models::*;
pub use queries::DatabaseQueries;
pub use service::{DatabasePatientService, PatientService};
