use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use campusfind_core::health::{healthz, readyz};
use campusfind_core::middleware::request_id_layer;

use crate::domain::types::{ItemKind, MAX_IMAGE_BYTES, MAX_IMAGES};
use crate::handlers::{
    claim::{claim_item, get_claimed_items},
    feedback::submit_feedback,
    item::{
        get_all_items, get_all_lost_items, get_item_details, upload_found_item, upload_lost_item,
    },
};
use crate::state::AppState;

/// Body cap for multipart intake: the full image budget plus headroom for
/// text fields and part boundaries.
const UPLOAD_BODY_LIMIT: usize = MAX_IMAGES * MAX_IMAGE_BYTES + 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    // Intake routes need a larger body limit than the default 2 MB.
    let uploads = Router::new()
        .route("/api/submitFoundItem", post(upload_found_item))
        .route("/api/submitLostItem", post(upload_lost_item))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT));

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz::<AppState>))
        // Listings & details
        .route("/getAllItems", get(get_all_items))
        .route("/getAllLostItems", get(get_all_lost_items))
        .route("/api/getItemDetails/{id}", get(get_item_details))
        // Claim workflow
        .route("/claimItem/{id}", post(claim_item))
        .route("/claimedItems", get(get_claimed_items))
        // Feedback
        .route("/api/feedback", post(submit_feedback))
        .merge(uploads)
        // Stored images, served under the same prefixes the responses use.
        .nest_service(
            "/foundItemImages",
            ServeDir::new(state.image_store.dir_for(ItemKind::Found)),
        )
        .nest_service(
            "/lostItemImages",
            ServeDir::new(state.image_store.dir_for(ItemKind::Lost)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
