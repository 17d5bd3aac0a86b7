//! Web服务器

use axum::{
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use welldoc_core::Result;
use welldoc_database::PatientService;

use crate::handlers::{api_root, create_patient, health, AppState};

pub struct WebServer {
    addr: SocketAddr,
    app: Router,
}

impl WebServer {
    pub fn new(addr: SocketAddr, patient_service: Arc<dyn PatientService>) -> Self {
        let app = create_app(patient_service);

        Self { addr, app }
    }

    /// 运行直到 `shutdown` 完成，已接收的请求会处理完毕再退出
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("Starting web server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Web server stopped");
        Ok(())
    }
}

/// 构建应用路由
pub fn create_app(patient_service: Arc<dyn PatientService>) -> Router {
    let state = AppState { patient_service };

    Router::new()
        // 根路径
        .route("/", get(api_root))
        // 健康检查
        .route("/health", get(health))
        // API路由
        .nest("/api", api_routes())
        .with_state(state)
        // 全局中间件
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
}

/// API 路由
fn api_routes() -> Router<AppState> {
    Router::new().route("/patient/create", post(create_patient))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::Utc;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use welldoc_database::{DatabasePatientService, DatabasePool, DatabaseQueries};

    async fn setup_app() -> (DatabasePool, Router) {
        let pool = DatabasePool::connect_in_memory().await.unwrap();
        DatabaseQueries::new(&pool).create_tables().await.unwrap();
        let app = create_app(Arc::new(DatabasePatientService::new(pool.clone())));
        (pool, app)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn create(app: &Router, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/patient/create")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    async fn count(pool: &DatabasePool) -> i64 {
        DatabaseQueries::new(pool).count_patients().await.unwrap()
    }

    #[tokio::test]
    async fn test_first_patient_gets_id_one() {
        let (pool, app) = setup_app().await;

        let (status, body) = create(
            &app,
            json!({ "patientFirstName": "Jane", "patientLastName": "Doe" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "patientID": 1 }));
        assert_eq!(count(&pool).await, 1);
    }

    #[tokio::test]
    async fn test_names_stored_trimmed() {
        let (pool, app) = setup_app().await;

        let before = Utc::now();
        let (status, body) = create(
            &app,
            json!({ "patientFirstName": "  Jane  ", "patientLastName": "Doe" }),
        )
        .await;
        let after = Utc::now();
        assert_eq!(status, StatusCode::OK);

        let id = body["patientID"].as_i64().unwrap();
        let stored = DatabaseQueries::new(&pool)
            .get_patient_by_id(id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.patient_first_name, "Jane");
        assert_eq!(stored.patient_last_name, "Doe");
        assert!(stored.registration_datetime >= before);
        assert!(stored.registration_datetime <= after);
    }

    #[tokio::test]
    async fn test_rejected_requests_leave_store_unchanged() {
        let (pool, app) = setup_app().await;

        let (status, _) = create(
            &app,
            json!({ "patientFirstName": "", "patientLastName": "Doe" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = create(
            &app,
            json!({ "patientFirstName": null, "patientLastName": null }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], welldoc_core::REQUIRED_NAMES_MESSAGE);

        assert_eq!(count(&pool).await, 0);
    }

    #[tokio::test]
    async fn test_control_characters_rejected_before_storage() {
        let (pool, app) = setup_app().await;

        for first_name in ["\u{0}Jane", "Ja\u{0}ne"] {
            let (status, body) = create(
                &app,
                json!({ "patientFirstName": first_name, "patientLastName": "Doe" }),
            )
            .await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "first name {:?}", first_name);
            assert_eq!(body["message"], welldoc_core::NAME_CONTROL_CHARACTERS_MESSAGE);
        }

        assert_eq!(count(&pool).await, 0);
    }

    #[tokio::test]
    async fn test_repeated_requests_create_distinct_rows() {
        let (pool, app) = setup_app().await;
        let payload = json!({ "patientFirstName": "Jane", "patientLastName": "Doe" });

        let (_, first) = create(&app, payload.clone()).await;
        let (_, second) = create(&app, payload).await;

        assert_eq!(first["patientID"], 1);
        assert_eq!(second["patientID"], 2);
        assert_eq!(count(&pool).await, 2);
    }

    #[tokio::test]
    async fn test_storage_failure_returns_server_error() {
        let (pool, app) = setup_app().await;
        pool.close().await;

        let (status, body) = create(
            &app,
            json!({ "patientFirstName": "Jane", "patientLastName": "Doe" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_health() {
        let (_pool, app) = setup_app().await;

        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (_pool, app) = setup_app().await;

        let request = Request::builder()
            .method("POST")
            .uri("/api/patients")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
