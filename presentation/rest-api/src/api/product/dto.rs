use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductStatus;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum ProductStatusDto {
    #[oai(rename = "draft")]
    Draft,
    #[oai(rename = "published")]
    Published,
    #[oai(rename = "out_of_stock")]
    OutOfStock,
    #[oai(rename = "archived")]
    Archived,
}

impl From<ProductStatus> for ProductStatusDto {
    fn from(status: ProductStatus) -> Self {
        match status {
            ProductStatus::Draft => ProductStatusDto::Draft,
            ProductStatus::Published => ProductStatusDto::Published,
            ProductStatus::OutOfStock => ProductStatusDto::OutOfStock,
            ProductStatus::Archived => ProductStatusDto::Archived,
        }
    }
}

impl From<ProductStatusDto> for ProductStatus {
    fn from(dto: ProductStatusDto) -> Self {
        match dto {
            ProductStatusDto::Draft => ProductStatus::Draft,
            ProductStatusDto::Published => ProductStatus::Published,
            ProductStatusDto::OutOfStock => ProductStatus::OutOfStock,
            ProductStatusDto::Archived => ProductStatus::Archived,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// URL slug: lowercase letters, digits and hyphens; unique
    pub slug: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Decimal price as a string, e.g. "4.50"
    pub price: String,
    /// Units in stock
    pub stock: i32,
    /// Requested status; publishing with zero stock results in "out_of_stock"
    pub status: ProductStatusDto,
    /// Owning category ID
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<String>,
}

/// Request fields that need parsing before they reach a use case
pub struct ParsedProductFields {
    pub price: BigDecimal,
    pub category_id: Option<uuid::Uuid>,
}

impl ProductRequest {
    /// Returns the i18n key of the first field that fails to parse.
    pub fn parse_fields(&self) -> Result<ParsedProductFields, &'static str> {
        let price =
            BigDecimal::from_str(self.price.trim()).map_err(|_| "product.invalid_price")?;
        let category_id = self
            .category_id
            .as_deref()
            .map(uuid::Uuid::parse_str)
            .transpose()
            .map_err(|_| "product.invalid_category_id")?;

        Ok(ParsedProductFields { price, category_id })
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub price: String,
    pub stock: i32,
    pub status: ProductStatusDto,
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            slug: product.slug,
            description: product.description,
            price: product.price.to_string(),
            stock: product.stock,
            status: product.status.into(),
            category_id: product.category_id.map(|id| id.to_string()),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
