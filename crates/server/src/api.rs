// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! HTTP routes for the cards collection.
use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        Path, Request, State,
        rejection::{BytesRejection, PathRejection},
    },
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use log::{error, info};
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue, json};
use std::{any::Any, sync::Arc};
use thiserror::Error;
use tower_http::catch_panic::CatchPanicLayer;

use cardstore_cards::{Card, CardCollection, CardError, CardId, Suit, Value};

/// The collection shared by all request handlers.
pub type SharedCollection = Arc<Mutex<CardCollection>>;

/// The card endpoints with their descriptions.
pub const CARD_ENDPOINTS: [(&str, &str); 4] = [
    ("GET /cards", "List all cards"),
    ("GET /cards/:id", "Get a specific card by ID"),
    ("POST /cards", "Add a new card"),
    ("DELETE /cards/:id", "Delete a card by ID"),
];

/// Error returned by a request handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A collection operation failed.
    #[error(transparent)]
    Card(#[from] CardError),
    /// The request body is not a JSON object.
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),
    /// The request path or body could not be extracted.
    #[error("{message}")]
    Rejected {
        /// The rejection status.
        status: StatusCode,
        /// The rejection reason.
        message: String,
    },
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl ApiError {
    /// The response status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Card(err) => match err {
                CardError::InvalidId
                | CardError::MissingField
                | CardError::InvalidSuit
                | CardError::InvalidValue => StatusCode::BAD_REQUEST,
                CardError::Duplicate { .. } => StatusCode::CONFLICT,
                CardError::NotFound(_) | CardError::UnknownId(_) => StatusCode::NOT_FOUND,
            },
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Serialize)]
struct CardList {
    count: usize,
    cards: Vec<Card>,
}

#[derive(Debug, Serialize)]
struct CardAdded {
    message: &'static str,
    card: Card,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CardDeleted {
    message: String,
    deleted_card: Card,
}

/// Creates the router that serves the given collection.
pub fn router(cards: CardCollection) -> Router {
    let state: SharedCollection = Arc::new(Mutex::new(cards));

    let routes = Router::new()
        .route("/", get(info))
        .route("/cards", get(list_cards).post(create_card))
        .route("/cards/", get(list_cards).post(create_card))
        .route("/cards/{id}", get(get_card).delete(delete_card))
        .route("/cards/{id}/", get(get_card).delete(delete_card))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state);

    with_layers(routes)
}

/// Adds panic recovery and request logging to a router.
fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(internal_error))
        .layer(middleware::from_fn(log_request))
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let res = next.run(req).await;
    info!("{method} {path} {}", res.status().as_u16());

    res
}

async fn info() -> Json<JsonValue> {
    let endpoints = CARD_ENDPOINTS
        .iter()
        .map(|(endpoint, desc)| (endpoint.to_string(), JsonValue::from(*desc)))
        .collect::<Map<_, _>>();

    Json(json!({
        "message": "Welcome to Playing Card Collection API",
        "endpoints": endpoints,
    }))
}

async fn list_cards(State(cards): State<SharedCollection>) -> Json<CardList> {
    let cards = cards.lock().cards().to_vec();
    Json(CardList {
        count: cards.len(),
        cards,
    })
}

async fn get_card(
    State(cards): State<SharedCollection>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Card>, ApiError> {
    let Path(id) = id?;
    let id = id.parse::<CardId>()?;
    let card = cards.lock().get(id)?;
    Ok(Json(card))
}

async fn create_card(
    State(cards): State<SharedCollection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<CardAdded>), ApiError> {
    let (suit, value) = new_card_fields(&body?)?;
    let card = cards.lock().create(suit, value)?;
    info!("Added card {card} with id {}", card.id);

    Ok((
        StatusCode::CREATED,
        Json(CardAdded {
            message: "Card added successfully",
            card,
        }),
    ))
}

async fn delete_card(
    State(cards): State<SharedCollection>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<CardDeleted>, ApiError> {
    let Path(id) = id?;
    let id = id.parse::<CardId>()?;
    let card = cards.lock().delete(id)?;
    info!("Deleted card {card} with id {id}");

    Ok(Json(CardDeleted {
        message: format!("Card with ID {id} deleted successfully"),
        deleted_card: card,
    }))
}

async fn not_found() -> (StatusCode, Json<JsonValue>) {
    let mut endpoints = Map::new();
    endpoints.insert("GET /".to_string(), JsonValue::from("API information"));
    for (endpoint, desc) in CARD_ENDPOINTS {
        endpoints.insert(endpoint.to_string(), JsonValue::from(desc));
    }

    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "availableEndpoints": endpoints,
        })),
    )
}

fn internal_error(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    error!("Request handler panicked: {message}");

    let body = json!({
        "error": "Something went wrong!",
        "message": message,
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Extracts the suit and value from a new card request body.
///
/// An empty body has no fields. A field is missing when it is absent, null,
/// false, zero or an empty string; any other field that is not a string
/// never matches a name.
fn new_card_fields(body: &[u8]) -> Result<(Suit, Value), ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(CardError::MissingField.into());
    }

    let json = serde_json::from_slice::<JsonValue>(body)
        .map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    let Some(fields) = json.as_object() else {
        return Err(ApiError::InvalidBody("expected a JSON object".to_string()));
    };

    let suit = fields.get("suit");
    let value = fields.get("value");

    let is_missing = |field: Option<&JsonValue>| match field {
        None | Some(JsonValue::Null) => true,
        Some(JsonValue::String(s)) => s.is_empty(),
        Some(JsonValue::Bool(b)) => !b,
        Some(JsonValue::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    };

    if is_missing(suit) || is_missing(value) {
        return Err(CardError::MissingField.into());
    }

    let suit = suit
        .and_then(JsonValue::as_str)
        .and_then(|s| s.parse::<Suit>().ok())
        .ok_or(CardError::InvalidSuit)?;
    let value = value
        .and_then(JsonValue::as_str)
        .and_then(|v| v.parse::<Value>().ok())
        .ok_or(CardError::InvalidValue)?;

    Ok((suit, value))
}
