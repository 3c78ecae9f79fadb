use axum::{
    Router,
    http::{HeaderName, Method},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    interface::http::{
        places_handler::{
            create_place, delete_place, get_place, list_places_by_user, update_place,
        },
        users_handler::{healthcheck, list_users, login, signup},
    },
    state::AppState,
};

pub fn build_router(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/health", get(healthcheck))
        .route("/api/places", post(create_place))
        .route(
            "/api/places/{id}",
            get(get_place).patch(update_place).delete(delete_place),
        )
        .route("/api/places/user/{uid}", get(list_places_by_user))
        .route("/api/users", get(list_users))
        .route("/api/users/signup", post(signup))
        .route("/api/users/login", post(login))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ]),
        )
        .with_state(state)
}
