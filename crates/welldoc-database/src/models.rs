//! 数据库模型

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use welldoc_core::utils::normalize_name;
use welldoc_core::Patient;

/// 数据库患者表
#[derive(Debug, FromRow)]
pub struct DbPatient {
    pub patient_id: i64,
    pub patient_first_name: String,
    pub patient_last_name: String,
    pub registration_datetime: DateTime<Utc>,
}

impl From<DbPatient> for Patient {
    fn from(db_patient: DbPatient) -> Self {
        Patient {
            patient_id: db_patient.patient_id,
            patient_first_name: db_patient.patient_first_name,
            patient_last_name: db_patient.patient_last_name,
            registration_datetime: db_patient.registration_datetime,
        }
    }
}

/// 新患者插入模型，主键由存储层生成
#[derive(Debug, Clone)]
pub struct NewPatient {
    pub patient_first_name: String,
    pub patient_last_name: String,
    pub registration_datetime: DateTime<Utc>,
}

impl NewPatient {
    /// 去除姓名首尾空白，并以当前UTC时间作为登记时间
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            patient_first_name: normalize_name(first_name),
            patient_last_name: normalize_name(last_name),
            registration_datetime: Utc::now(),
        }
    }
}
