use axum::{
    Router, middleware,
    routing::{delete, get, patch},
};

use super::controller::{check_role, create_user, delete_user, list_users, update_role};
use crate::middleware::auth::require_auth;
use crate::middleware::role::require_admin;
use crate::state::AppState;

/// `PATCH /{email}` and `DELETE /{id}` share one segment, so both are
/// registered under `{target}`.
pub fn init_users_router(state: AppState) -> Router<AppState> {
    let auth = || middleware::from_fn_with_state(state.clone(), require_auth);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{role}/{email}", get(check_role).route_layer(auth()))
        .route(
            "/{target}",
            patch(update_role)
                .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
                .route_layer(auth())
                .merge(delete(delete_user).route_layer(auth())),
        )
}
