use log::warn;
use serde::Deserialize;

use crate::catalogue::PriceCatalogue;

#[derive(Debug, Deserialize)]
struct DeserializedSale {
    #[serde(rename = "Product")]
    product: Option<String>,
    #[serde(rename = "Quantity")]
    quantity: Option<f64>,
}

/**
 * A sales line. Absent fields are filled in here, once, so a sale without a
 * product name is simply one that never matches the catalogue and a sale
 * without a quantity contributes nothing.
 */
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "DeserializedSale")]
pub struct Sale {
    pub product: String,
    pub quantity: u64,
}

// JSON numbers carry no integer/float distinction, so `3.0` is a valid quantity.
impl TryFrom<DeserializedSale> for Sale {
    type Error = &'static str;
    fn try_from(deserialized: DeserializedSale) -> Result<Self, Self::Error> {
        let quantity = deserialized.quantity.unwrap_or_default();
        if !quantity.is_finite() {
            return Err("Invalid quantity: not a finite number");
        }
        if quantity < 0.0 {
            return Err("Invalid quantity: negative");
        }
        if quantity.fract() != 0.0 {
            return Err("Invalid quantity: not a whole number");
        }
        if quantity >= u64::MAX as f64 {
            return Err("Invalid quantity: too large");
        }
        Ok(Sale {
            product: deserialized.product.unwrap_or_default(),
            quantity: quantity as u64,
        })
    }
}

pub fn compute_cost(catalogue: &PriceCatalogue, sales: &[Sale]) -> f64 {
    let mut total_cost = 0.0;
    for sale in sales {
        match catalogue.price_of(&sale.product) {
            Some(price) => total_cost += price * sale.quantity as f64,
            None => warn!("Product '{}' not found", sale.product),
        }
    }
    total_cost
}
