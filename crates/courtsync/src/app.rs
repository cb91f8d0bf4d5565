use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        availability::get_availability,
        events::receive_event,
        health::{healthz, livez},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/availability", get(get_availability))
        .route("/events", post(receive_event))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use courtsync_core::client::{CourtsClient, Result as ClientResult};
    use courtsync_core::courts::{Club, Court, Slot};

    use crate::config::Config;

    /// Upstream stub: one club with one court, one 10:00 slot on whatever
    /// date is asked for.
    struct StubUpstream {
        clubs_calls: AtomicUsize,
    }

    impl StubUpstream {
        fn new() -> Self {
            Self {
                clubs_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CourtsClient for StubUpstream {
        async fn clubs_by_place(&self, _place_id: &str) -> ClientResult<Vec<Club>> {
            self.clubs_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Club::new(1, "Center Club")])
        }

        async fn courts_by_club(&self, _club_id: i64) -> ClientResult<Vec<Court>> {
            Ok(vec![Court::new(10, "Court 1")])
        }

        async fn available_slots(
            &self,
            _club_id: i64,
            _court_id: i64,
            date: NaiveDate,
        ) -> ClientResult<Vec<Slot>> {
            Ok(vec![Slot {
                price: 1200.0,
                duration: 60,
                datetime: date.and_hms_opt(10, 0, 0).unwrap(),
                start: "10:00".to_string(),
                end: "11:00".to_string(),
                priority: 0,
            }])
        }
    }

    fn test_config() -> Config {
        Config {
            upstream_base_url: "http://localhost:4000".to_string(),
            cache_ttl_seconds: 60,
            index_max_entries: 10_000,
            invalidation_horizon_days: 7,
        }
    }

    fn test_app() -> (Router, Arc<StubUpstream>) {
        let upstream = Arc::new(StubUpstream::new());
        let state = AppState::with_client(upstream.clone(), &test_config());
        (create_app(state), upstream)
    }

    async fn get_availability_body(app: &Router) -> serde_json::Value {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/availability?placeId=downtown&date=2024-06-01")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let (app, _) = test_app();

        let response = app
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthz_reports_ok() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_availability_returns_assembled_structure() {
        let (app, _) = test_app();

        let json = get_availability_body(&app).await;

        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["name"], "Center Club");
        assert_eq!(json[0]["courts"][0]["id"], 10);
        assert_eq!(json[0]["courts"][0]["available"][0]["start"], "10:00");
    }

    #[tokio::test]
    async fn test_availability_missing_params_is_client_error() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/availability?placeId=downtown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_booking_event_forces_refetch() {
        let (app, upstream) = test_app();

        // First lookup fills the cache; a repeat is served from it.
        let _ = get_availability_body(&app).await;
        let _ = get_availability_body(&app).await;
        assert_eq!(upstream.clubs_calls.load(Ordering::SeqCst), 1);

        // A booking lands on the cached partition.
        let event = r#"{
            "type": "booking_created",
            "clubId": 1,
            "courtId": 10,
            "slot": {
                "price": 1200,
                "duration": 60,
                "datetime": "2024-06-01T10:00:00",
                "start": "10:00",
                "end": "11:00",
                "_priority": 1
            }
        }"#;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/events")
                    .header("Content-Type", "application/json")
                    .body(Body::from(event))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // The partition was invalidated, so the next lookup hits upstream.
        let _ = get_availability_body(&app).await;
        assert_eq!(upstream.clubs_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_event_for_unknown_club_is_accepted() {
        let (app, upstream) = test_app();

        let _ = get_availability_body(&app).await;

        // Club 999 has no index mapping; the event is a no-op but still 200.
        let event = r#"{
            "type": "club_updated",
            "clubId": 999,
            "fields": ["openhours"]
        }"#;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/events")
                    .header("Content-Type", "application/json")
                    .body(Body::from(event))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // The cached partition survived.
        let _ = get_availability_body(&app).await;
        assert_eq!(upstream.clubs_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_malformed_event_is_rejected() {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/events")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"type": "club_deleted", "clubId": 1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
