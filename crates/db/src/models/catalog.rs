//! Product catalog entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vendora_core::audit::{AssetSnapshot, ProductSnapshot};
use vendora_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub sku: String,
    pub name: String,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub vendor_id: Option<DbId>,
    pub cost: Option<f64>,
    pub msrp: Option<f64>,
    pub retail_price: Option<f64>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Product {
    /// Project the fields the audit sweeps consume.
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.id,
            sku: self.sku.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            cost: self.cost,
            msrp: self.msrp,
            retail_price: self.retail_price,
        }
    }
}

/// DTO for inserting a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub sku: String,
    pub name: String,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub vendor_id: Option<DbId>,
    pub cost: Option<f64>,
    pub msrp: Option<f64>,
    pub retail_price: Option<f64>,
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// Product asset
// ---------------------------------------------------------------------------

/// A row from the `product_assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductAsset {
    pub id: DbId,
    pub product_id: DbId,
    pub asset_type: String,
    pub url: String,
    pub alt_text: Option<String>,
    pub is_active: bool,
    pub last_checked_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProductAsset {
    /// Project the fields the asset health sweep consumes.
    pub fn snapshot(&self) -> AssetSnapshot {
        AssetSnapshot {
            id: self.id,
            product_id: self.product_id,
            asset_type: self.asset_type.clone(),
            url: self.url.clone(),
            alt_text: self.alt_text.clone(),
            is_active: self.is_active,
            last_checked_at: self.last_checked_at,
        }
    }
}

/// DTO for inserting a new product asset.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductAsset {
    pub product_id: DbId,
    pub asset_type: String,
    pub url: String,
    pub alt_text: Option<String>,
    pub is_active: Option<bool>,
    pub last_checked_at: Option<Timestamp>,
}
