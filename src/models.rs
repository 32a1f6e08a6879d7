use crate::cart::{Cart, CartLine, LineId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SeedData {
    #[serde(default)]
    pub lines: Vec<SeedLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedLine {
    pub name: String,
    pub price: SeedPrice,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub liked: bool,
}

/// Seed prices come either as display text (`"$25.99"`) or as a plain number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedPrice {
    Text(String),
    Amount(f64),
}

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    pub value: QuantityValue,
}

/// A typed quantity as sent by API clients: raw input text or a JSON number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuantityValue {
    Text(String),
    Integer(i64),
    Amount(f64),
}

impl QuantityValue {
    /// The value as the text a user would have typed into the quantity field.
    pub fn into_input(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Integer(value) => value.to_string(),
            Self::Amount(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LineResponse {
    pub id: LineId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub subtotal: String,
    pub subtotal_cents: u64,
    pub liked: bool,
    pub like_color: String,
    pub selected: bool,
    pub fading: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CartResponse {
    pub lines: Vec<LineResponse>,
    pub total: String,
    pub total_cents: u64,
    pub empty_message_shown: bool,
}

impl From<&CartLine> for LineResponse {
    fn from(line: &CartLine) -> Self {
        let subtotal = line.subtotal();
        Self {
            id: line.id,
            name: line.name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price.to_string(),
            subtotal: subtotal.to_string(),
            subtotal_cents: subtotal.cents(),
            liked: line.liked,
            like_color: line.like_color().to_string(),
            selected: line.selected,
            fading: line.fading,
        }
    }
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        let total = cart.total();
        Self {
            lines: cart.lines().iter().map(LineResponse::from).collect(),
            total: total.to_string(),
            total_cents: total.cents(),
            empty_message_shown: cart.empty_message_shown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(json: &str) -> String {
        serde_json::from_str::<QuantityRequest>(json)
            .unwrap()
            .value
            .into_input()
    }

    #[test]
    fn quantity_value_accepts_text_and_numbers() {
        assert_eq!(input(r#"{"value": "7"}"#), "7");
        assert_eq!(input(r#"{"value": 5}"#), "5");
        assert_eq!(input(r#"{"value": -2}"#), "-2");
        assert_eq!(input(r#"{"value": 2.7}"#), "2.7");
    }

    #[test]
    fn quantity_value_rejects_other_shapes() {
        assert!(serde_json::from_str::<QuantityRequest>(r#"{"value": [1]}"#).is_err());
        assert!(serde_json::from_str::<QuantityRequest>(r#"{}"#).is_err());
    }
}
