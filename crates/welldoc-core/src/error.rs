//! 错误定义模块

use thiserror::Error;

/// Welldoc系统统一错误类型
#[derive(Error, Debug)]
pub enum WelldocError {
    #[error("验证错误: {0}")]
    Validation(String),

    #[error("数据库错误: {0}")]
    Database(String),

    #[error("约束冲突: {0}")]
    Constraint(String),

    #[error("存储不可用: {0}")]
    Unavailable(String),

    #[error("网络错误: {0}")]
    Network(#[from] std::io::Error),
}

#[cfg(feature = "database")]
impl From<sqlx::Error> for WelldocError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        match err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => WelldocError::Constraint(db_err.to_string()),
                _ => WelldocError::Database(db_err.to_string()),
            },
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                WelldocError::Unavailable(err.to_string())
            }
            sqlx::Error::Io(e) => WelldocError::Unavailable(e.to_string()),
            sqlx::Error::Tls(e) => WelldocError::Unavailable(e.to_string()),
            other => WelldocError::Database(other.to_string()),
        }
    }
}

/// Welldoc系统统一结果类型
pub type Result<T> = std::result::Result<T, WelldocError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_to_network() {
        let err: WelldocError = std::io::Error::other("connection reset").into();
        assert!(matches!(err, WelldocError::Network(_)));
    }

    #[cfg(feature = "database")]
    #[test]
    fn test_sqlx_pool_errors_are_unavailable() {
        let err: WelldocError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, WelldocError::Unavailable(_)));

        let err: WelldocError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, WelldocError::Unavailable(_)));

        let err: WelldocError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, WelldocError::Database(_)));
    }
}
