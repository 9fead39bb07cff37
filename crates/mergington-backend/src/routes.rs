use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    response::Redirect,
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::AppState;
use crate::handlers;

fn cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = if cfg!(debug_assertions) {
        let dev_ports = vec![3000, 8000, 8080, 8081, 5173];
        let mut allowed_origins = Vec::new();
        for port in dev_ports {
            allowed_origins.push(format!("http://localhost:{}", port));
            allowed_origins.push(format!("http://127.0.0.1:{}", port));
        }
        allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect()
    } else {
        // Production origins - add your domains here
        vec![]
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST])
}

async fn redirect_to_index() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// Setup the routes for the server and configure CORS and request tracing
pub fn setup_routes(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(redirect_to_index))
        .route("/health", get(handlers::health::get))
        .route("/activities", get(handlers::activities::list))
        .route("/activities/{activity_name}", get(handlers::activities::get))
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::activities::signup),
        )
        .route(
            "/activities/{activity_name}/unregister",
            post(handlers::activities::unregister),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use mergington::serde_json::{self, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::services::ActivityServiceInMemory;

    fn app() -> Router {
        let config = Config::from_lookup(|_| None).unwrap();
        app_with_static(config.static_dir)
    }

    fn app_with_static(static_dir: PathBuf) -> Router {
        let state = Arc::new(AppState::new(ActivityServiceInMemory::default()));
        setup_routes(state, &static_dir)
    }

    async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn root_redirects_to_index() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/static/index.html"
        );
    }

    #[tokio::test]
    async fn get_activities() {
        let (status, body) = send(&app(), Method::GET, "/activities").await;
        assert_eq!(status, StatusCode::OK);

        let activities = body.as_object().unwrap();
        assert!(!activities.is_empty());
        for activity in activities.values() {
            assert!(activity["description"].is_string());
            assert!(activity["schedule"].is_string());
            assert!(activity["max_participants"].as_u64().unwrap() > 0);
            assert!(activity["participants"].is_array());
        }
    }

    #[tokio::test]
    async fn get_single_activity() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/activities/Chess%20Club").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["max_participants"], 12);

        let (status, body) = send(&app, Method::GET, "/activities/NonexistentClub").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Activity not found");
    }

    #[tokio::test]
    async fn signup_for_activity() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/activities/Chess%20Club/signup?email=test@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            "Signed up test@mergington.edu for Chess Club"
        );

        let (_, activities) = send(&app, Method::GET, "/activities").await;
        let participants = activities["Chess Club"]["participants"].as_array().unwrap();
        assert!(participants.contains(&Value::from("test@mergington.edu")));
    }

    #[tokio::test]
    async fn signup_for_nonexistent_activity() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/activities/NonexistentClub/signup?email=test@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Activity not found");
    }

    #[tokio::test]
    async fn missing_email_is_rejected_with_detail() {
        let app = app();
        for uri in [
            "/activities/Chess%20Club/signup",
            "/activities/Chess%20Club/unregister",
        ] {
            let (status, body) = send(&app, Method::POST, uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body["detail"].as_str().unwrap().contains("email"));
        }

        let (_, chess) = send(&app, Method::GET, "/activities/Chess%20Club").await;
        assert_eq!(chess["participants"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unregister_from_activity() {
        let app = app();
        let uri = "/activities/Programming%20Class/unregister?email=test_unregister@mergington.edu";
        send(
            &app,
            Method::POST,
            "/activities/Programming%20Class/signup?email=test_unregister@mergington.edu",
        )
        .await;

        let (status, body) = send(&app, Method::POST, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            "Unregistered test_unregister@mergington.edu from Programming Class"
        );

        let (_, activities) = send(&app, Method::GET, "/activities").await;
        let participants = activities["Programming Class"]["participants"]
            .as_array()
            .unwrap();
        assert!(!participants.contains(&Value::from("test_unregister@mergington.edu")));
    }

    #[tokio::test]
    async fn unregister_from_nonexistent_activity() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/activities/NonexistentClub/unregister?email=test@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Activity not found");
    }

    #[tokio::test]
    async fn unregister_nonexistent_participant() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/activities/Chess%20Club/unregister?email=nonexistent@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Participant not found in this activity");
    }

    #[tokio::test]
    async fn max_participants_limit() {
        let app = app();
        let (_, activities) = send(&app, Method::GET, "/activities").await;
        let chess = &activities["Chess Club"];
        let max_participants = chess["max_participants"].as_u64().unwrap() as usize;
        let current_participants = chess["participants"].as_array().unwrap().len();
        let open = max_participants - current_participants;

        for i in 0..=open {
            let uri = format!("/activities/Chess%20Club/signup?email=test{i}@mergington.edu");
            let (status, body) = send(&app, Method::POST, &uri).await;

            if i < open {
                assert_eq!(status, StatusCode::OK);
            } else {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert!(body["detail"].as_str().unwrap().contains("Activity is full"));
            }
        }
    }

    #[tokio::test]
    async fn health_reports_catalog() {
        let (status, body) = send(&app(), Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["services"]["activities"], "up");
        assert!(body["services"]["activity_count"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn default_config_serves_bundled_ui() {
        let app = app();
        for (uri, marker) in [
            ("/static/index.html", "signup-form"),
            ("/static/app.js", "/activities"),
            ("/static/styles.css", ".activity-card"),
        ] {
            let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert!(String::from_utf8_lossy(&bytes).contains(marker), "{uri}");
        }
    }

    #[tokio::test]
    async fn serves_static_files() {
        let static_dir =
            std::env::temp_dir().join(format!("mergington-static-{}", std::process::id()));
        std::fs::create_dir_all(&static_dir).unwrap();
        std::fs::write(static_dir.join("index.html"), "<h1>Mergington</h1>").unwrap();

        let app = app_with_static(static_dir.clone());
        let request = Request::builder()
            .uri("/static/index.html")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"<h1>Mergington</h1>");

        let (status, _) = send(&app, Method::GET, "/static/missing.html").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        std::fs::remove_dir_all(&static_dir).unwrap();
    }
}
