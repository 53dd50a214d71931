use super::docs;
use super::models::{
    FraudResponse, HealthResponse, LogResponse, RecommendationParams, RecommendationsResponse,
    RequestDetails,
};
use super::AppState;
use crate::errors::ApiError;
use crate::logging::panic_payload;
use crate::models::{RecommendationQuery, Transaction};
use axum::{
    body::{Body, Bytes},
    extract::{
        ConnectInfo, Query, Request, State,
        rejection::{BytesRejection, QueryRejection},
    },
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Json, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::any::Any;
use std::collections::BTreeMap;
use std::net::SocketAddr;

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 10;

/// Substituted for a `/log` POST body that is not valid JSON.
pub const UNPARSEABLE_BODY: &str = "Could not parse JSON body";

/// Largest `/log` body that will be echoed back.
const MAX_LOG_BODY_BYTES: usize = 1024 * 1024;

/// Request body limit applied to every route (axum's default).
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// GET / — API documentation
pub async fn index() -> Json<Value> {
    tracing::info!("API documentation accessed");
    Json(docs::api_docs())
}

/// GET /health — liveness check
pub async fn health() -> Json<HealthResponse> {
    tracing::info!("Health check endpoint accessed");
    Json(HealthResponse {
        status: "healthy",
        timestamp: utc_timestamp(),
    })
}

/// GET|POST /log — echoes back (and logs) what the server saw
pub async fn log_request(request: Request) -> Result<Json<LogResponse>, ApiError> {
    let (parts, body) = request.into_parts();

    let body = if parts.method == Method::POST {
        Some(read_json_or_placeholder(body).await)
    } else {
        None
    };

    let details = RequestDetails {
        method: parts.method.to_string(),
        url: absolute_url(&parts.headers, &parts.uri),
        headers: flatten_headers(&parts.headers),
        timestamp: utc_timestamp(),
        remote_addr: parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string()),
        body,
    };

    let rendered = serde_json::to_string(&details)
        .map_err(|e| ApiError::Internal(format!("could not render request details: {e}")))?;
    tracing::info!("Request logged: {}", rendered);

    Ok(Json(LogResponse {
        message: "Request logged successfully",
        request_details: details,
    }))
}

/// POST /fraud — scores a transaction
pub async fn analyze_fraud(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<FraudResponse>, ApiError> {
    let body = body.map_err(|rejection| match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge {
            limit: MAX_BODY_BYTES,
        },
        _ => ApiError::BadRequest("Request body must be valid JSON"),
    })?;

    let payload: Value = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("Request body must be valid JSON"))?;

    let raw = payload
        .get("transaction")
        .filter(|v| is_truthy(v))
        .ok_or(ApiError::BadRequest("Transaction data is required"))?;

    let transaction = Transaction::deserialize(raw)
        .map_err(|_| ApiError::BadRequest("Invalid transaction data"))?;

    let analysis = state.fraud.analyze(&transaction).await?;

    tracing::info!("Fraud analysis completed");
    Ok(Json(FraudResponse { analysis }))
}

/// GET /recommendations?userId=..&limit=..
pub async fn get_recommendations(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<RecommendationsResponse>, ApiError> {
    let Query(pairs) = pairs.map_err(|_| ApiError::BadRequest("Invalid query string"))?;
    let params = RecommendationParams::from_pairs(pairs);

    let user_id = params
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::BadRequest("User ID is required"))?;

    // a limit that isn't a non-negative integer is ignored, not rejected
    let limit = params
        .limit
        .as_deref()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_RECOMMENDATION_LIMIT);

    let query = RecommendationQuery { user_id, limit };
    let recommendations = state.recommender.recommend(&query).await?;

    tracing::info!("Recommendations retrieved");
    Ok(Json(RecommendationsResponse { recommendations }))
}

/// Fallback for paths with no route.
pub async fn not_found(headers: HeaderMap, uri: Uri) -> ApiError {
    ApiError::NotFound(absolute_url(&headers, &uri))
}

/// Fallback for a known path hit with the wrong method.
pub async fn method_not_allowed(method: Method, headers: HeaderMap, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        url: absolute_url(&headers, &uri),
    }
}

/// Turns a panic inside a handler into the generic 500 response.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::Internal(format!("handler panicked: {}", panic_payload(&*err))).into_response()
}

async fn read_json_or_placeholder(body: Body) -> Value {
    let Ok(bytes) = axum::body::to_bytes(body, MAX_LOG_BODY_BYTES).await else {
        return Value::String(UNPARSEABLE_BODY.to_string());
    };
    serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(UNPARSEABLE_BODY.to_string()))
}

fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Rebuilds the URL the client asked for, e.g. `http://localhost:5000/log?x=1`.
fn absolute_url(headers: &HeaderMap, uri: &Uri) -> String {
    if uri.scheme().is_some() {
        return uri.to_string();
    }
    let path = uri.path_and_query().map_or("/", |pq| pq.as_str());
    match headers.get(header::HOST).and_then(|h| h.to_str().ok()) {
        Some(host) => format!("http://{host}{path}"),
        None => path.to_string(),
    }
}

/// Repeated headers are joined with `, `.
fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut flat = BTreeMap::new();
    for name in headers.keys() {
        let value = headers
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        flat.insert(name.to_string(), value);
    }
    flat
}

/// Whether a JSON value counts as "provided": null, false, zero and empty
/// strings, arrays and objects do not.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
