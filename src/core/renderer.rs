use crate::core::{Card, Pokemon, Result};
use crate::utils::error::DexError;

/// Turns a fetched record into its card: first listed form name (capitalized),
/// the default front sprite, and each type name capitalized in service order.
pub fn render(record: &Pokemon) -> Result<Card> {
    let name = record
        .forms
        .first()
        .map(|form| capitalize(&form.name))
        .ok_or_else(|| DexError::RenderError {
            message: "record has no form entries".to_string(),
        })?;

    let categories = record
        .types
        .iter()
        .map(|slot| capitalize(&slot.kind.name))
        .collect();

    Ok(Card {
        name,
        image_url: record.sprites.front_default.clone(),
        categories,
    })
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
