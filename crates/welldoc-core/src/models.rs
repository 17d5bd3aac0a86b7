//! 核心数据模型定义

use chrono::{DateTime, Utc};

/// 患者姓名字段的最大长度（字符数）
pub const PATIENT_NAME_MAX_LEN: usize = 200;

/// 姓名缺失时返回给调用方的提示
pub const REQUIRED_NAMES_MESSAGE: &str = "PatientFirstName and PatientLastName are required.";

/// 姓名超长时返回给调用方的提示
pub const NAME_TOO_LONG_MESSAGE: &str =
    "PatientFirstName and PatientLastName must be at most 200 characters.";

/// 姓名含控制字符时返回给调用方的提示
pub const NAME_CONTROL_CHARACTERS_MESSAGE: &str =
    "PatientFirstName and PatientLastName must not contain control characters.";

/// 患者记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub patient_id: i64,                       // 存储层生成的主键
    pub patient_first_name: String,            // 名（已去除首尾空白）
    pub patient_last_name: String,             // 姓（已去除首尾空白）
    pub registration_datetime: DateTime<Utc>, // 登记时间 (UTC)
}
