//! # Welldoc Core
//!
//! 患者登记服务的核心模块，提供领域模型、姓名校验规则和统一错误定义。

pub mod error;
pub mod models;
pub mod utils;

pub use error::{Result, WelldocError};
pub use models::*;
