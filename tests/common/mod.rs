#![allow(dead_code)]

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

/// TV spend that makes the stub answer `400 {"error": "bad input"}`.
pub const TV_BAD_INPUT: f64 = -1.0;
/// TV spend that makes the stub answer `500` with a non-JSON body.
pub const TV_PLAIN_FAILURE: f64 = -2.0;
/// TV spend that makes the stub answer slowly, with prediction 1.0.
pub const TV_SLOW: f64 = 999.0;

pub const RESULT_TOKEN: &str = "result_1.csv";
/// Upload name that makes the stub answer slowly, with its own token.
pub const SLOW_FILE: &str = "slow.csv";
pub const SLOW_TOKEN: &str = "result_slow.csv";

#[derive(Clone, Default)]
pub struct StubBackend {
    pub calls: Arc<AtomicUsize>,
}

impl StubBackend {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/predict", post(predict))
            .with_state(self.clone())
    }
}

/// Serves the stub on a random local port inside the current runtime.
pub async fn spawn_stub() -> (StubBackend, String) {
    let backend = StubBackend::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = backend.router();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (backend, format!("http://{addr}/"))
}

async fn predict(State(backend): State<StubBackend>, request: Request) -> Response {
    backend.calls.fetch_add(1, Ordering::SeqCst);

    let is_multipart = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"));

    if is_multipart {
        let multipart = Multipart::from_request(request, &()).await.unwrap();
        predict_file(multipart).await
    } else {
        let Json(body) = Json::<Value>::from_request(request, &()).await.unwrap();
        predict_value(body).await
    }
}

async fn predict_value(body: Value) -> Response {
    let tv = body["Телевиденье"].as_f64().unwrap_or(f64::NAN);
    if tv == TV_BAD_INPUT {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "bad input" }))).into_response();
    }
    if tv == TV_PLAIN_FAILURE {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    if tv == TV_SLOW {
        tokio::time::sleep(Duration::from_millis(300)).await;
        return Json(json!({ "prediction": 1.0, "exchange_rate": 90.0, "prediction_rub": 90.0 }))
            .into_response();
    }
    Json(json!({ "prediction": 20.5, "exchange_rate": 90.0, "prediction_rub": 1845.0 })).into_response()
}

async fn predict_file(mut multipart: Multipart) -> Response {
    let mut file_name = None;
    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() == Some("file") {
            file_name = field.file_name().map(str::to_string);
            let _ = field.bytes().await.unwrap();
        }
    }

    match file_name.as_deref() {
        Some("bad.csv") => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Файл должен содержать колонки: TV, Radio, Newspaper, Sales" })),
        )
            .into_response(),
        Some(SLOW_FILE) => {
            tokio::time::sleep(Duration::from_millis(300)).await;
            Json(json!({
                "actual": [5.0],
                "predictions": [5.5],
                "correlation_plot": "data:image/png;base64,SLOW",
                "prediction_plot": "data:image/png;base64,SLOW",
                "result_file": SLOW_TOKEN
            }))
            .into_response()
        }
        Some("mismatch.csv") => Json(json!({
            "actual": [1.0, 2.0, 3.0],
            "predictions": [1.1],
            "correlation_plot": "data:image/png;base64,AAA",
            "prediction_plot": "data:image/png;base64,BBB",
            "result_file": RESULT_TOKEN
        }))
        .into_response(),
        Some(_) => Json(json!({
            "actual": [1.0, 2.0],
            "predictions": [1.1, 2.2],
            "correlation_plot": "data:image/png;base64,AAA",
            "prediction_plot": "data:image/png;base64,BBB",
            "result_file": RESULT_TOKEN,
            "columns": ["TV", "Radio", "Newspaper", "Sales"]
        }))
        .into_response(),
        None => (StatusCode::BAD_REQUEST, Json(json!({ "error": "No selected file" }))).into_response(),
    }
}
