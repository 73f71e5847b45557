use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductStatus;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
    pub status: String,
    pub category_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        let status = self.status.parse::<ProductStatus>().unwrap_or_else(|_| {
            tracing::warn!(
                product_id = %self.id,
                stored = %self.status,
                "unknown product status, reading it as draft"
            );
            ProductStatus::Draft
        });

        Product::from_repository(
            self.id,
            self.name,
            self.slug,
            self.description,
            self.price,
            self.stock,
            status,
            self.category_id,
            self.created_at,
            self.updated_at,
        )
    }
}
