//! 患者持久化网关

use async_trait::async_trait;
use welldoc_core::Result;

use crate::connection::DatabasePool;
use crate::models::NewPatient;
use crate::queries::DatabaseQueries;

/// 患者创建服务
///
/// 调用方负责校验姓名非空；实现负责去除首尾空白、写入并提交，
/// 返回存储层生成的主键。不做重试。
#[async_trait]
pub trait PatientService: Send + Sync {
    async fn create_patient(&self, first_name: &str, last_name: &str) -> Result<i64>;
}

/// 基于SQLite连接池的患者服务
#[derive(Debug, Clone)]
pub struct DatabasePatientService {
    pool: DatabasePool,
}

impl DatabasePatientService {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PatientService for DatabasePatientService {
    async fn create_patient(&self, first_name: &str, last_name: &str) -> Result<i64> {
        let new_patient = NewPatient::new(first_name, last_name);

        // 姓名属于敏感信息，日志只记录主键
        match DatabaseQueries::new(&self.pool).create_patient(&new_patient).await {
            Ok(patient_id) => {
                tracing::info!(patient_id, "Patient created");
                Ok(patient_id)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create patient");
                Err(e)
            }
        }
    }
}
