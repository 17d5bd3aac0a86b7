//! # Welldoc Web
//!
//! 患者登记HTTP接口：路由、请求处理以及错误到HTTP响应的映射。

pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use handlers::{AppState, CreatePatientRequest, CreatePatientResponse};
pub use server::{create_app, WebServer};
