use std::collections::HashMap;

use log::debug;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DeserializedProduct {
    title: String,
    price: f64,
}

/**
 * Product as validated at load time: prices are finite and non-negative,
 * anything else is rejected before it can reach a catalogue.
 */
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "DeserializedProduct")]
pub struct Product {
    pub title: String,
    pub price: f64,
}

impl TryFrom<DeserializedProduct> for Product {
    type Error = &'static str;
    fn try_from(deserialized: DeserializedProduct) -> Result<Self, Self::Error> {
        if !deserialized.price.is_finite() {
            return Err("Invalid price: not a finite number");
        }
        if deserialized.price < 0.0 {
            return Err("Invalid price: negative");
        }
        Ok(Product {
            title: deserialized.title,
            price: deserialized.price,
        })
    }
}

/// Unit price by product title.
#[derive(Debug, Default)]
pub struct PriceCatalogue {
    prices: HashMap<String, f64>,
}

impl PriceCatalogue {
    pub fn price_of(&self, title: &str) -> Option<f64> {
        self.prices.get(title).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }
}

// Later titles overwrite earlier ones.
impl FromIterator<Product> for PriceCatalogue {
    fn from_iter<I: IntoIterator<Item = Product>>(products: I) -> Self {
        let prices = products
            .into_iter()
            .map(|product| (product.title, product.price))
            .collect();
        PriceCatalogue { prices }
    }
}

pub fn create_price_catalogue(products: Vec<Product>) -> PriceCatalogue {
    let catalogue: PriceCatalogue = products.into_iter().collect();
    debug!("Price catalogue holds {} products", catalogue.len());
    catalogue
}
