use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, condominium, resident, spot, reservation};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Condominiums
        .route("/api/v1/condominiums", post(condominium::create_condominium).get(condominium::list_condominiums))
        .route("/api/v1/condominiums/{condominium_id}", get(condominium::get_condominium))

        // Residents
        .route("/api/v1/residents", post(resident::register_resident))
        .route("/api/v1/residents/pending", get(resident::list_pending))
        .route("/api/v1/residents/{user_id}/approve", post(resident::approve_resident))
        .route("/api/v1/residents/{user_id}/reject", post(resident::reject_resident))

        // Spots & availability
        .route("/api/v1/spots", post(spot::create_spot).get(spot::list_spots))
        .route("/api/v1/spots/mine", get(spot::list_my_spots))
        .route("/api/v1/spots/available", get(spot::list_available_spots))
        .route("/api/v1/spots/{spot_id}", get(spot::get_spot).put(spot::update_spot).delete(spot::delete_spot))
        .route("/api/v1/spots/{spot_id}/slots", post(spot::add_slot))
        .route("/api/v1/spots/{spot_id}/slots/{slot_id}", put(spot::update_slot).delete(spot::delete_slot))

        // Reservations
        .route("/api/v1/spots/{spot_id}/reservations", post(reservation::create_reservation).get(reservation::list_spot_reservations))
        .route("/api/v1/reservations", get(reservation::rental_history))
        .route("/api/v1/reservations/{reservation_id}", delete(reservation::cancel_reservation))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        condominium_id = tracing::field::Empty,
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
