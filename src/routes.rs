use axum::{
    Json,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use parking_lot::RwLock;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::models::{
    AddItemsRequest, GeneratedOutfits, GeneratedShopSuggestions, OutfitRequest, ShopRequest,
    WardrobeItem,
};
use crate::stylist::{Stylist, StylistError};

#[derive(Clone)]
pub struct AppState {
    pub wardrobe: Arc<RwLock<Vec<WardrobeItem>>>,
    pub stylist: Arc<Stylist>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            wardrobe: Arc::new(RwLock::new(Vec::new())),
            stylist: Arc::new(Stylist::from_config(config)),
        }
    }
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/wardrobe", post(add_items).get(list_wardrobe))
        .route("/api/outfits", post(generate_outfits))
        .route("/api/shop", post(shop_suggestions))
        .with_state(state)
}

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "error": message })))
}

pub async fn add_items(
    State(state): State<AppState>,
    Json(body): Json<AddItemsRequest>,
) -> Result<(StatusCode, Json<Vec<WardrobeItem>>), ApiError> {
    let AddItemsRequest { files, display_name, category, tags } = body;
    if files.is_empty() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Please select one or more image files.",
        ));
    }

    let created: Vec<WardrobeItem> = files
        .into_iter()
        .map(|file| {
            WardrobeItem::from_upload(file, display_name.as_deref(), category, tags.as_deref())
        })
        .collect();

    info!("🎯 Adding {} wardrobe item(s) in category {:?}", created.len(), category);
    state.wardrobe.write().extend(created.iter().cloned());
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_wardrobe(State(state): State<AppState>) -> Json<Vec<WardrobeItem>> {
    Json(state.wardrobe.read().clone())
}

#[axum::debug_handler]
pub async fn generate_outfits(
    State(state): State<AppState>,
    Json(body): Json<OutfitRequest>,
) -> Result<Json<GeneratedOutfits>, ApiError> {
    if body.count == 0 {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Requested outfit count must be at least 1.",
        ));
    }

    // Snapshot under the read guard; the synthesis call must not hold it.
    let wardrobe = state.wardrobe.read().clone();
    if wardrobe.is_empty() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Add some items to your wardrobe first so I can create outfits for you.",
        ));
    }

    info!(
        "🚀 Generating {} outfit(s) from {} wardrobe item(s) for occasion: {}",
        body.count,
        wardrobe.len(),
        body.occasion
    );

    let outfits = state
        .stylist
        .synthesize_outfits(
            &wardrobe,
            &body.mood,
            &body.occasion,
            &body.weather,
            body.count,
            &body.avoid,
        )
        .await
        .map_err(|e| api_error(StatusCode::BAD_GATEWAY, &e.to_string()))?;

    if outfits.is_empty() {
        error!(
            "❌ Outfit synthesis produced no outfits from {} wardrobe item(s)",
            wardrobe.len()
        );
        return Err(api_error(
            StatusCode::BAD_GATEWAY,
            &StylistError::OutfitGeneration.to_string(),
        ));
    }

    info!("✅ Generated {} outfit(s)", outfits.len());
    Ok(Json(GeneratedOutfits { outfits }))
}

pub async fn shop_suggestions(
    State(state): State<AppState>,
    Json(body): Json<ShopRequest>,
) -> Result<Json<GeneratedShopSuggestions>, ApiError> {
    let goal = body.goal.trim().to_string();
    if goal.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Please enter a shopping goal."));
    }

    let wardrobe = state.wardrobe.read().clone();
    if wardrobe.is_empty() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Add items to your wardrobe first for better shopping suggestions.",
        ));
    }

    info!("🚀 Fetching shop suggestions for goal: {}", goal);

    let suggestions = state
        .stylist
        .synthesize_shop_suggestions(&wardrobe, &goal)
        .await
        .map_err(|e| api_error(StatusCode::BAD_GATEWAY, &e.to_string()))?;

    if suggestions.is_empty() {
        error!("❌ Shop synthesis produced no suggestions");
        return Err(api_error(
            StatusCode::BAD_GATEWAY,
            &StylistError::ShopSuggestion.to_string(),
        ));
    }

    info!("✅ Returning {} shop suggestion(s)", suggestions.len());
    Ok(Json(GeneratedShopSuggestions { suggestions }))
}
