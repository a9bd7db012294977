use axum::{
    body::Bytes,
    extract::Request,
    http::{header, HeaderMap, StatusCode, Uri},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::any::Any;
use tempconv_core::api::{self, ErrorResponse, HealthResponse, NotFoundResponse};
use tempconv_core::{page, ConversionSelector};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};

/// Full application router.
pub fn router() -> Router {
    with_layers(
        Router::new()
            .route("/", get(index_handler))
            .route("/convert", post(convert_handler))
            .route("/api/conversions", get(conversions_handler))
            .route("/health", get(health_handler))
            .route("/static/js/app.js", get(app_js_handler)),
    )
}

/// Attach the fallback and middleware shared by every route.
fn with_layers(routes: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    routes
        .fallback(not_found_handler)
        .layer(middleware::from_fn(log_request))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
}

async fn index_handler() -> Html<String> {
    Html(page::render_index(ConversionSelector::all()))
}

async fn convert_handler(headers: HeaderMap, body: Bytes) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    match api::process_convert_request(content_type, &body) {
        Ok(response) => {
            log::debug!(
                "Converted {} using {:?}: {}",
                response.input_temperature,
                response.conversion_type,
                response.formatted_result
            );
            Json(response).into_response()
        }
        Err(err) => {
            let status = StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            if status.is_server_error() {
                log::error!("Conversion failed: {err}");
            } else {
                log::debug!("Conversion rejected: {err}");
            }

            (status, Json(err.to_response())).into_response()
        }
    }
}

async fn conversions_handler() -> Json<Vec<&'static str>> {
    Json(api::conversion_options())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

async fn app_js_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        page::APP_JS,
    )
}

async fn not_found_handler(uri: Uri, headers: HeaderMap) -> Response {
    let wants_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(api::is_json_content_type);

    if wants_json {
        (StatusCode::NOT_FOUND, Json(NotFoundResponse::default())).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Html(page::render_not_found(uri.path())),
        )
            .into_response()
    }
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    log::info!("{method} {path} {}", response.status().as_u16());

    response
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    log::error!("Request handler panicked: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal server error")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    async fn spawn(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}")
    }

    async fn post_convert(base: &str, body: Value) -> (u16, Value) {
        let response = reqwest::Client::new()
            .post(format!("{base}/convert"))
            .json(&body)
            .send()
            .await
            .unwrap();

        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }

    // ============================================================================
    // POST /convert
    // ============================================================================

    #[tokio::test]
    async fn test_convert_success() {
        let base = spawn(router()).await;

        let (status, body) = post_convert(
            &base,
            json!({"temperature": "25", "conversion_type": "Celcius ke Fahrenheit"}),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(
            body,
            json!({
                "success": true,
                "result": 77.0,
                "formatted_result": "25.0°C = 77.00°F",
                "input_temperature": 25.0,
                "conversion_type": "Celcius ke Fahrenheit"
            })
        );
    }

    #[tokio::test]
    async fn test_convert_numeric_temperature() {
        let base = spawn(router()).await;

        let (status, body) = post_convert(
            &base,
            json!({"temperature": -273.15, "conversion_type": "Celcius ke Kelvin"}),
        )
        .await;

        assert_eq!(status, 200);
        assert!(body["result"].as_f64().unwrap().abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_convert_large_and_decimal_values() {
        let base = spawn(router()).await;

        let (status, body) = post_convert(
            &base,
            json!({"temperature": "1000000", "conversion_type": "Celcius ke Fahrenheit"}),
        )
        .await;
        assert_eq!(status, 200);
        assert!(body["result"].is_number());

        let (_, body) = post_convert(
            &base,
            json!({"temperature": "25.6789", "conversion_type": "Celcius ke Fahrenheit"}),
        )
        .await;
        let expected = 25.6789 * 9.0 / 5.0 + 32.0;
        assert!((body["result"].as_f64().unwrap() - expected).abs() < 1e-4);
    }

    #[tokio::test]
    async fn test_convert_invalid_input() {
        let base = spawn(router()).await;

        let (status, body) = post_convert(
            &base,
            json!({"temperature": "invalid", "conversion_type": "Celcius ke Fahrenheit"}),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(
            body,
            json!({"success": false, "error": "Masukkan angka yang valid"})
        );
    }

    #[tokio::test]
    async fn test_convert_empty_input() {
        let base = spawn(router()).await;

        let (status, body) = post_convert(
            &base,
            json!({"temperature": "", "conversion_type": "Celcius ke Fahrenheit"}),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Masukkan nilai temperatur"));
    }

    #[tokio::test]
    async fn test_convert_unsupported_conversion() {
        let base = spawn(router()).await;

        let (status, body) = post_convert(
            &base,
            json!({"temperature": "25", "conversion_type": "Invalid Conversion"}),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].as_str().unwrap().contains("not supported"));
    }

    #[tokio::test]
    async fn test_convert_malformed_body() {
        let base = spawn(router()).await;

        let response = reqwest::Client::new()
            .post(format!("{base}/convert"))
            .header("Content-Type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 500);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], json!(false));
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Error dalam konversi: "));
    }

    #[tokio::test]
    async fn test_convert_requires_json_content_type() {
        let base = spawn(router()).await;

        let response = reqwest::Client::new()
            .post(format!("{base}/convert"))
            .header("Content-Type", "text/plain")
            .body(r#"{"temperature": "25", "conversion_type": "Celcius ke Fahrenheit"}"#)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 500);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], json!(false));
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("Unsupported Media Type"));
    }

    #[tokio::test]
    async fn test_convert_overflowing_result() {
        let base = spawn(router()).await;

        let (status, body) = post_convert(
            &base,
            json!({"temperature": "1.7e308", "conversion_type": "Celcius ke Fahrenheit"}),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(
            body,
            json!({"success": false, "error": "Hasil konversi di luar jangkauan"})
        );
    }

    #[tokio::test]
    async fn test_convert_array_conversion_type() {
        let base = spawn(router()).await;

        let (status, body) = post_convert(
            &base,
            json!({"temperature": "25", "conversion_type": ["Celcius ke Fahrenheit"]}),
        )
        .await;

        assert_eq!(status, 500);
        assert_eq!(body["success"], json!(false));
    }

    // ============================================================================
    // GET endpoints
    // ============================================================================

    #[tokio::test]
    async fn test_conversions_endpoint() {
        let base = spawn(router()).await;

        let body: Value = reqwest::get(format!("{base}/api/conversions"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(
            body,
            json!([
                "Celcius ke Fahrenheit",
                "Celcius ke Kelvin",
                "Celcius ke Reamur",
                "Fahrenheit ke Celcius",
                "Kelvin ke Celcius",
                "Reamur ke Celcius"
            ])
        );
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let base = spawn(router()).await;

        let response = reqwest::get(format!("{base}/health")).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({
                "status": "healthy",
                "service": "Temperature Converter API",
                "version": "1.0.0"
            })
        );
    }

    #[tokio::test]
    async fn test_homepage() {
        let base = spawn(router()).await;

        let response = reqwest::get(format!("{base}/")).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);

        let html = response.text().await.unwrap();
        assert!(html.contains("Konversi Temperatur"));
        assert!(html.contains("Masukkan Temperatur"));
        assert!(html.contains("Reamur ke Celcius"));
    }

    #[tokio::test]
    async fn test_app_js_served() {
        let base = spawn(router()).await;

        let response = reqwest::get(format!("{base}/static/js/app.js"))
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);

        let content_type = response.headers()[reqwest::header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("application/javascript"));
        assert!(response.text().await.unwrap().contains("/convert"));
    }

    // ============================================================================
    // Errors
    // ============================================================================

    #[tokio::test]
    async fn test_not_found_html() {
        let base = spawn(router()).await;

        let response = reqwest::get(format!("{base}/nonexistent-page"))
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 404);
        assert!(response.text().await.unwrap().contains("404"));
    }

    #[tokio::test]
    async fn test_not_found_json() {
        let base = spawn(router()).await;

        let response = reqwest::Client::new()
            .get(format!("{base}/api/nonexistent"))
            .header("Content-Type", "application/json")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 404);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Endpoint not found"}));
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_500() {
        async fn boom() -> &'static str {
            panic!("boom")
        }

        let base = spawn(with_layers(Router::new().route("/boom", get(boom)))).await;

        let response = reqwest::get(format!("{base}/boom")).await.unwrap();
        assert_eq!(response.status().as_u16(), 500);

        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({"success": false, "error": "Internal server error"})
        );
    }
}
