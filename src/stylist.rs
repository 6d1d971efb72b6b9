use std::sync::Arc;

use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::gemini::{ContentGenerator, GeminiClient};
use crate::mock;
use crate::models::{
    GeneratedOutfits, GeneratedShopSuggestions, Outfit, ShopSuggestion, WardrobeItem,
};
use crate::schema;

pub const SHOP_SUGGESTION_COUNT: usize = 3;

// Everything that can go wrong downstream of the caller contract collapses
// into one failure per pipeline; the cause is logged, not exposed.
#[derive(Debug, Error)]
pub enum StylistError {
    #[error("outfit generation failed")] OutfitGeneration,
    #[error("shop suggestion generation failed")] ShopSuggestion,
}

pub struct Stylist {
    generator: Option<Arc<dyn ContentGenerator>>,
}

impl Stylist {
    pub fn from_config(config: &AppConfig) -> Self {
        match GeminiClient::from_config(config) {
            Some(client) => Self::live(Arc::new(client)),
            None => Self::mock(),
        }
    }

    pub fn live(generator: Arc<dyn ContentGenerator>) -> Self {
        Self { generator: Some(generator) }
    }

    pub fn mock() -> Self {
        Self { generator: None }
    }

    pub async fn synthesize_outfits(
        &self,
        wardrobe: &[WardrobeItem],
        mood: &str,
        occasion: &str,
        weather: &str,
        count: usize,
        avoid: &[Outfit],
    ) -> Result<Vec<Outfit>, StylistError> {
        let Some(generator) = &self.generator else {
            info!("Using mock outfit generation response for {} outfit(s).", count);
            return Ok(mock::mock_outfits(wardrobe, count));
        };

        let prompt = build_outfit_prompt(wardrobe, mood, occasion, weather, count, avoid);
        let response_schema = schema::outfit_response_schema();

        let raw = generator
            .generate_structured(&prompt, &response_schema)
            .await
            .map_err(|e| {
                error!("❌ Gemini outfit call failed: {}", e);
                StylistError::OutfitGeneration
            })?;

        let mut result: GeneratedOutfits = schema::parse_structured(&raw).map_err(|e| {
            error!("❌ Outfit response failed schema validation: {}", e);
            StylistError::OutfitGeneration
        })?;

        // Ensure the model respects the count. Sometimes it gives more;
        // fewer is passed through, never padded.
        if result.outfits.len() > count {
            result.outfits.truncate(count);
        }
        Ok(result.outfits)
    }

    pub async fn synthesize_shop_suggestions(
        &self,
        wardrobe: &[WardrobeItem],
        goal: &str,
    ) -> Result<Vec<ShopSuggestion>, StylistError> {
        let Some(generator) = &self.generator else {
            info!("Using mock shop suggestions response.");
            return Ok(mock::mock_shop_suggestions());
        };

        let prompt = build_shop_prompt(wardrobe, goal);
        let response_schema = schema::shop_response_schema();

        let raw = generator
            .generate_structured(&prompt, &response_schema)
            .await
            .map_err(|e| {
                error!("❌ Gemini shop suggestion call failed: {}", e);
                StylistError::ShopSuggestion
            })?;

        let mut result: GeneratedShopSuggestions = schema::parse_structured(&raw).map_err(|e| {
            error!("❌ Shop suggestion response failed schema validation: {}", e);
            StylistError::ShopSuggestion
        })?;

        if result.suggestions.len() > SHOP_SUGGESTION_COUNT {
            result.suggestions.truncate(SHOP_SUGGESTION_COUNT);
        }
        Ok(result.suggestions)
    }
}

fn build_outfit_prompt(
    wardrobe: &[WardrobeItem],
    mood: &str,
    occasion: &str,
    weather: &str,
    count: usize,
    avoid: &[Outfit],
) -> String {
    let wardrobe_for_prompt: Vec<_> = wardrobe
        .iter()
        .map(|item| {
            json!({
                "id": item.id,
                "name": item.display_name,
                "category": item.category,
                "tags": item.tags.join(", "),
            })
        })
        .collect();
    let wardrobe_json = serde_json::to_string_pretty(&wardrobe_for_prompt).unwrap_or_default();

    let mut prompt = format!(
        "You are a fashion AI assistant. Using the provided wardrobe and context, create {count} outfit combination(s).\n"
    );
    if !avoid.is_empty() {
        prompt.push_str(
            "The new outfit(s) should be different from the existing ones provided below.\n",
        );
    }
    prompt.push_str(
        "Only use items from the provided wardrobe. Return a JSON object following the specified schema.\n\n",
    );
    prompt.push_str(&format!("Wardrobe:\n{wardrobe_json}\n\n"));
    prompt.push_str(&format!(
        "Context:\n- Mood: {mood}\n- Occasion: {occasion}\n- Weather: {weather}\n\n"
    ));
    if !avoid.is_empty() {
        let avoid_for_prompt: Vec<_> = avoid.iter().map(|outfit| outfit.items.clone()).collect();
        let avoid_json = serde_json::to_string_pretty(&avoid_for_prompt).unwrap_or_default();
        prompt.push_str(&format!("Existing outfits to avoid:\n{avoid_json}\n\n"));
    }
    prompt.push_str("For each outfit, provide an array of item IDs and a short, one-sentence explanation.");
    prompt
}

fn build_shop_prompt(wardrobe: &[WardrobeItem], goal: &str) -> String {
    // Suggestions reference no existing item, so ids stay out of the prompt.
    let wardrobe_for_prompt: Vec<_> = wardrobe
        .iter()
        .map(|item| {
            json!({
                "name": item.display_name,
                "category": item.category,
                "tags": item.tags.join(", "),
            })
        })
        .collect();
    let wardrobe_json = serde_json::to_string_pretty(&wardrobe_for_prompt).unwrap_or_default();

    format!(
        "You are a fashion shopping assistant. Based on the user's current wardrobe and their shopping goal, \
         suggest 3 new clothing items that would complement their style.\n\
         Return a JSON object following the specified schema.\n\n\
         Current Wardrobe:\n{wardrobe_json}\n\n\
         Shopping Goal: \"{goal}\"\n\n\
         For each suggestion, provide the item name, a short reason why it matches their wardrobe and goal, and a fake shopping URL."
    )
}
