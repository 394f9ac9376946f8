use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, InteractionKind,
    InteractionRecord, MutualLikeRequest, MutualLikeResponse, RecordInteractionRequest,
    RecordInteractionResponse,
};
use crate::services::{InteractionLog, ProfileStore};
use crate::core::{is_mutual_like, Matcher};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
    pub interactions: Arc<dyn InteractionLog>,
    pub matcher: Matcher,
    pub default_limit: u16,
    pub max_limit: u16,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/mutual", web::post().to(mutual_like))
        .route("/interactions", web::post().to(record_interaction));
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "user": { "email": "string", "age": 30, "interests": [], "location": {}, "preferences": {} },
///   "limit": 20
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {}", errors);
        return validation_failed(errors);
    }

    let reference = &req.user;
    let limit = req
        .limit
        .unwrap_or(state.default_limit)
        .min(state.max_limit) as usize;

    tracing::info!("Finding matches for user: {}, limit: {}", reference.email, limit);

    let mut outcome = state.matcher.find_matches(reference, &*state.store).await;
    outcome.matches.truncate(limit);

    let response = FindMatchesResponse {
        matches: outcome.matches,
        total_candidates: outcome.total_candidates,
        storage_available: outcome.lookup.is_complete(),
    };

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        response.matches.len(),
        reference.email,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Mutual like endpoint
///
/// POST /api/v1/matches/mutual
///
/// Request body:
/// ```json
/// { "userEmail": "string", "targetEmail": "string" }
/// ```
async fn mutual_like(
    state: web::Data<AppState>,
    req: web::Json<MutualLikeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let outcome = is_mutual_like(&req.user_email, &req.target_email, &*state.store).await;

    tracing::debug!(
        "Mutual like {} <-> {}: {} ({:?})",
        req.user_email,
        req.target_email,
        outcome.mutual,
        outcome.lookup
    );

    HttpResponse::Ok().json(MutualLikeResponse {
        mutual: outcome.mutual,
        storage_available: outcome.lookup.is_complete(),
    })
}

/// Record interaction endpoint
///
/// POST /api/v1/interactions
///
/// Request body:
/// ```json
/// {
///   "actorEmail": "string",
///   "targetEmail": "string",
///   "kind": "like|super_like|pass"
/// }
/// ```
async fn record_interaction(
    state: web::Data<AppState>,
    req: web::Json<RecordInteractionRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let kind: InteractionKind = match req.kind.parse() {
        Ok(kind) => kind,
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid interaction kind".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    let record = InteractionRecord::new(req.actor_email.clone(), req.target_email.clone(), kind);

    match state.interactions.append_interaction(record).await {
        Ok(interaction_id) => {
            tracing::debug!(
                "Recorded interaction {}: {} -> {} ({})",
                interaction_id,
                req.actor_email,
                req.target_email,
                kind
            );

            HttpResponse::Ok().json(RecordInteractionResponse {
                success: true,
                interaction_id,
            })
        }
        Err(e) => {
            tracing::error!("Failed to record interaction: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to record interaction".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
