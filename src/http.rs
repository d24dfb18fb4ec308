use crate::backend::BookingBackend;
use crate::configuration::Configuration;
use crate::error::BookingError;
use crate::types::{AvailabilityQuery, AvailabilityResponse, BookingConfirmation, BookingRequest};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, Request};
use axum::http::{header, HeaderValue, Method};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{extract::State, Json};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

const BOOKING_CONFIRMED: &str = "Booking confirmed!";

#[derive(Clone)]
struct AppState<B: BookingBackend> {
    booking_backend: B,
}

pub fn create_app<B: BookingBackend, C: Configuration>(booking_backend: B, configuration: C) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins(&configuration))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api = Router::new()
        .route("/availability", get(get_availability::<B>))
        .route("/booking", post(post_booking::<B>));

    Router::new()
        .route("/", get(get_homepage))
        .nest("/api", api)
        .with_state(AppState { booking_backend })
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn_with_state(
            configuration,
            origin_guard::<C>,
        ))
}

fn allowed_origins<C: Configuration>(configuration: &C) -> AllowOrigin {
    let origins: Vec<HeaderValue> = configuration
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(?err, %origin, "Ignoring allowed origin that is not a valid header value");
                None
            }
        })
        .collect();
    AllowOrigin::list(origins)
}

/// Rejects browser requests from origins outside the allowlist. Requests
/// without an `Origin` header (same-origin, curl) pass through.
async fn origin_guard<C: Configuration>(
    State(configuration): State<C>,
    request: Request,
    next: Next,
) -> Result<Response, BookingError> {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        let allowed = origin
            .to_str()
            .map(|origin| configuration.is_origin_allowed(origin))
            .unwrap_or(false);
        if !allowed {
            debug!(?origin, "Origin is not on the allowlist");
            return Err(BookingError::OriginNotAllowed);
        }
    }
    Ok(next.run(request).await)
}

async fn get_homepage() -> &'static str {
    "hello homepage"
}

async fn get_availability<B: BookingBackend>(
    State(state): State<AppState<B>>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> Result<Json<AvailabilityResponse>, BookingError> {
    let Query(query) =
        query.map_err(|rejection| BookingError::MalformedRequest(rejection.body_text()))?;
    let date = query
        .date
        .filter(|date| !date.is_empty())
        .ok_or(BookingError::MissingParameter)?;

    let times = state.booking_backend.available_times(&date)?;
    debug!(%date, available = times.len(), "Availability queried");
    Ok(Json(AvailabilityResponse { times }))
}

async fn post_booking<B: BookingBackend>(
    State(state): State<AppState<B>>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<Json<BookingConfirmation>, BookingError> {
    let Json(request) = match payload {
        Ok(request) => request,
        // A body that is not declared as JSON carries no fields
        Err(JsonRejection::MissingJsonContentType(_)) => return Err(BookingError::MissingFields),
        Err(rejection) => return Err(BookingError::MalformedRequest(rejection.body_text())),
    };

    let booking = request.into_booking()?;
    let booking = state.booking_backend.book(booking)?;
    info!(date = %booking.date, time = %booking.time, "Booking confirmed");

    Ok(Json(BookingConfirmation {
        message: BOOKING_CONFIRMED.into(),
        booking,
    }))
}
