//! Application router configuration.

use std::any::Any;

use axum::{
    Router,
    http::StatusCode,
    response::Response,
    routing::get,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::{
    AppState, endpoints,
    not_found::get_404_not_found,
    response,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_summary_endpoint, get_transaction_endpoint, get_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    // The summary route must be registered before the route with the
    // transaction ID so that "summary" is never parsed as an ID.
    let router = Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(endpoints::TRANSACTIONS_SUMMARY, get(get_summary_endpoint))
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(edit_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .fallback(get_404_not_found);

    add_panic_handler(router).with_state(state)
}

/// Answer requests whose handler panicked with a generic 500 response.
fn add_panic_handler<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(CatchPanicLayer::custom(handle_panic))
}

fn handle_panic(error: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = error.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = error.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic message"
    };
    tracing::error!("A request handler panicked: {details}");

    response::error(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong!")
}
