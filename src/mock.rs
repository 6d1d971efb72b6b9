use crate::models::{Outfit, ShopSuggestion, WardrobeItem};

pub const REPLACEMENT_EXPLANATION: &str = "Here is a fresh alternative for you to consider.";
pub const FIRST_OUTFIT_EXPLANATION: &str = "A classic and comfortable look for a relaxed day.";
pub const SECOND_OUTFIT_EXPLANATION: &str = "This combination is perfect for a casual outing.";

// Deterministic stand-in for the live model so the UI stays exercisable
// without a credential. Selection is purely inventory-order based: sample
// the first four ids, then slice.
pub fn mock_outfits(wardrobe: &[WardrobeItem], count: usize) -> Vec<Outfit> {
    let sampled: Vec<&str> = wardrobe.iter().take(4).map(|item| item.id.as_str()).collect();
    if sampled.len() < 2 {
        return Vec::new();
    }

    if count == 1 {
        // Replacement semantics: skip the middle id so the pick differs from
        // a preceding first-two outfit.
        let items = if sampled.len() > 2 {
            vec![sampled[0].to_string(), sampled[2].to_string()]
        } else {
            sampled[..2].iter().map(|id| id.to_string()).collect()
        };
        return vec![Outfit {
            items,
            explanation: REPLACEMENT_EXPLANATION.to_string(),
        }];
    }

    let mut outfits = vec![
        Outfit {
            items: sampled[..2].iter().map(|id| id.to_string()).collect(),
            explanation: FIRST_OUTFIT_EXPLANATION.to_string(),
        },
        Outfit {
            items: sampled[sampled.len() - 2..]
                .iter()
                .map(|id| id.to_string())
                .collect(),
            explanation: SECOND_OUTFIT_EXPLANATION.to_string(),
        },
    ];
    outfits.truncate(count);
    outfits
}

pub fn mock_shop_suggestions() -> Vec<ShopSuggestion> {
    vec![
        ShopSuggestion {
            name: "Classic White Blazer".to_string(),
            reason: "Adds a professional touch to your tops and pants.".to_string(),
            url: "https://shop.example.com/blazer".to_string(),
        },
        ShopSuggestion {
            name: "Leather Loafers".to_string(),
            reason: "Comfortable yet polished, perfect for work.".to_string(),
            url: "https://shop.example.com/loafers".to_string(),
        },
        ShopSuggestion {
            name: "Structured Tote Bag".to_string(),
            reason: "A versatile bag that completes any professional outfit.".to_string(),
            url: "https://shop.example.com/tote".to_string(),
        },
    ]
}
