//! 数据库查询操作

use crate::connection::DatabasePool;
use crate::models::*;
use welldoc_core::{Patient, Result};

/// 数据库查询操作接口
pub struct DatabaseQueries<'a> {
    pool: &'a DatabasePool,
}

impl<'a> DatabaseQueries<'a> {
    pub fn new(pool: &'a DatabasePool) -> Self {
        Self { pool }
    }

    /// 创建数据库表
    ///
    /// SQLite不校验 VARCHAR(n)，长度和非空白约束由 CHECK 保证。
    pub async fn create_tables(&self) -> Result<()> {
        let pool = self.pool.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS patients (
                patient_id INTEGER PRIMARY KEY AUTOINCREMENT,
                patient_first_name VARCHAR(200) NOT NULL
                    CHECK (length(trim(patient_first_name)) > 0 AND length(patient_first_name) <= 200),
                patient_last_name VARCHAR(200) NOT NULL
                    CHECK (length(trim(patient_last_name)) > 0 AND length(patient_last_name) <= 200),
                registration_datetime DATETIME NOT NULL
            )
        "#,
        )
        .execute(pool)
        .await?;

        tracing::info!("Database tables created successfully");
        Ok(())
    }

    // ========== 患者相关操作 ==========

    /// 创建新患者，提交后返回存储层生成的主键
    ///
    /// 事务在出错时随 drop 回滚，连接随之归还连接池。
    pub async fn create_patient(&self, patient: &NewPatient) -> Result<i64> {
        let mut tx = self.pool.pool().begin().await?;

        let patient_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO patients (patient_first_name, patient_last_name, registration_datetime)
            VALUES (?1, ?2, ?3)
            RETURNING patient_id
        "#,
        )
        .bind(&patient.patient_first_name)
        .bind(&patient.patient_last_name)
        .bind(patient.registration_datetime)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(patient_id)
    }

    /// 根据ID查找患者
    pub async fn get_patient_by_id(&self, patient_id: i64) -> Result<Option<Patient>> {
        let pool = self.pool.pool();

        let result = sqlx::query_as::<_, DbPatient>(
            r#"
            SELECT patient_id, patient_first_name, patient_last_name, registration_datetime
            FROM patients
            WHERE patient_id = ?1
        "#,
        )
        .bind(patient_id)
        .fetch_optional(pool)
        .await?;

        Ok(result.map(Patient::from))
    }

    /// 患者总数
    pub async fn count_patients(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM patients")
            .fetch_one(self.pool.pool())
            .await?;

        Ok(count)
    }
}
