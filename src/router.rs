use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    controller::{categories, jobs, servers, services, submissions, waitlist, webhooks},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/search", get(servers::search_servers))
        .route("/api/categories", get(categories::get_categories))
        .route(
            "/api/acp/submit",
            post(submissions::submit_acp).get(submissions::get_submission),
        )
        .route("/api/jobs", post(jobs::post_job).get(jobs::list_jobs))
        .route("/api/jobs/search", get(jobs::search_jobs))
        .route("/api/jobs/checkout", post(jobs::checkout_job))
        .route("/api/jobs/verify-payment", get(jobs::verify_payment))
        .route(
            "/api/jobs/{id}",
            axum::routing::patch(jobs::update_job).delete(jobs::delete_job),
        )
        .route(
            "/api/servers/{id}",
            axum::routing::patch(servers::update_server).delete(servers::delete_server),
        )
        .route(
            "/api/waitlist",
            post(waitlist::join_waitlist).get(waitlist::list_waitlist),
        )
        .route(
            "/api/services",
            post(services::create_service_request).get(services::list_service_requests),
        )
        .route("/api/webhooks/payments", post(webhooks::payment_webhook))
}
