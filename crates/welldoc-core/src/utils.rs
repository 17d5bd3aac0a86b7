//! 通用工具函数

use crate::error::{Result, WelldocError};
use crate::models::{
    NAME_CONTROL_CHARACTERS_MESSAGE, NAME_TOO_LONG_MESSAGE, PATIENT_NAME_MAX_LEN,
    REQUIRED_NAMES_MESSAGE,
};

/// 去除姓名首尾空白，保留大小写和内部空格
pub fn normalize_name(name: &str) -> String {
    name.trim().to_string()
}

/// 判断字段是否缺失、为空或仅包含空白
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// 校验患者姓名，通过时返回两个姓名
pub fn validate_patient_names<'a>(
    first_name: Option<&'a str>,
    last_name: Option<&'a str>,
) -> Result<(&'a str, &'a str)> {
    let (first, last) = match (first_name, last_name) {
        (Some(first), Some(last)) if !is_blank(Some(first)) && !is_blank(Some(last)) => {
            (first, last)
        }
        _ => return Err(WelldocError::Validation(REQUIRED_NAMES_MESSAGE.to_string())),
    };

    // SQLite 的 length() 在 NUL 处截断，控制字符一律拒绝
    let has_control = |name: &str| name.trim().chars().any(char::is_control);
    if has_control(first) || has_control(last) {
        return Err(WelldocError::Validation(
            NAME_CONTROL_CHARACTERS_MESSAGE.to_string(),
        ));
    }

    // 按Unicode字符计数，与列约束 length() 一致
    let too_long = |name: &str| name.trim().chars().count() > PATIENT_NAME_MAX_LEN;
    if too_long(first) || too_long(last) {
        return Err(WelldocError::Validation(NAME_TOO_LONG_MESSAGE.to_string()));
    }

    Ok((first, last))
}
