use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::ProductStatus;

/// Decimal places kept for prices, matching the `price` column.
pub const PRICE_SCALE: i64 = 2;
/// Exclusive upper bound for prices (eight integer digits).
const PRICE_LIMIT: i64 = 100_000_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
    pub status: ProductStatus,
    pub category_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
    pub status: ProductStatus,
    pub category_id: Option<Uuid>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        validate(&props)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name.trim().to_string(),
            slug: props.slug,
            description: props.description,
            status: ProductStatus::set_final_status(props.status, props.stock),
            price: props.price.with_scale(PRICE_SCALE),
            stock: props.stock,
            category_id: props.category_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        slug: String,
        description: Option<String>,
        price: BigDecimal,
        stock: i32,
        status: ProductStatus,
        category_id: Option<Uuid>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            slug,
            description,
            price,
            stock,
            status,
            category_id,
            created_at,
            updated_at,
        }
    }

    /// Replaces the editable fields, keeping identity and creation time.
    pub fn apply(&mut self, props: NewProductProps) -> Result<(), ProductError> {
        validate(&props)?;

        self.name = props.name.trim().to_string();
        self.slug = props.slug;
        self.description = props.description;
        self.status = ProductStatus::set_final_status(props.status, props.stock);
        self.price = props.price.with_scale(PRICE_SCALE);
        self.stock = props.stock;
        self.category_id = props.category_id;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn publish(&mut self) {
        self.status = ProductStatus::set_final_status(ProductStatus::Published, self.stock);
        self.updated_at = Utc::now();
    }
}

fn validate(props: &NewProductProps) -> Result<(), ProductError> {
    if props.name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }

    if !is_valid_slug(&props.slug) {
        return Err(ProductError::SlugInvalid);
    }

    if props.price < BigDecimal::from(0) {
        return Err(ProductError::NegativePrice);
    }

    let (_, scale) = props.price.normalized().as_bigint_and_exponent();
    if scale > PRICE_SCALE || props.price >= BigDecimal::from(PRICE_LIMIT) {
        return Err(ProductError::InvalidPrice);
    }

    if props.stock < 0 {
        return Err(ProductError::NegativeStock);
    }

    Ok(())
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn props() -> NewProductProps {
        NewProductProps {
            name: "Smoked Paprika".to_string(),
            slug: "smoked-paprika".to_string(),
            description: None,
            price: BigDecimal::from_str("4.50").unwrap(),
            stock: 12,
            status: ProductStatus::Published,
            category_id: None,
        }
    }

    #[test]
    fn should_create_published_product_with_stock() {
        let product = Product::new(props()).unwrap();

        assert_eq!(product.status, ProductStatus::Published);
        assert_eq!(product.slug, "smoked-paprika");
    }

    #[test]
    fn should_create_out_of_stock_product_when_publishing_empty_stock() {
        let product = Product::new(NewProductProps { stock: 0, ..props() }).unwrap();

        assert_eq!(product.status, ProductStatus::OutOfStock);
    }

    #[test]
    fn should_reject_invalid_input() {
        assert!(matches!(
            Product::new(NewProductProps { name: " ".to_string(), ..props() }),
            Err(ProductError::NameEmpty)
        ));
        assert!(matches!(
            Product::new(NewProductProps { slug: "Smoked Paprika".to_string(), ..props() }),
            Err(ProductError::SlugInvalid)
        ));
        assert!(matches!(
            Product::new(NewProductProps { price: BigDecimal::from(-1), ..props() }),
            Err(ProductError::NegativePrice)
        ));
        assert!(matches!(
            Product::new(NewProductProps { stock: -1, ..props() }),
            Err(ProductError::NegativeStock)
        ));
    }

    #[test]
    fn should_store_price_with_two_decimals() {
        let product = Product::new(NewProductProps {
            price: BigDecimal::from_str("4.5000").unwrap(),
            ..props()
        })
        .unwrap();

        assert_eq!(product.price.to_string(), "4.50");
    }

    #[test]
    fn should_reject_price_with_more_than_two_decimals() {
        let result = Product::new(NewProductProps {
            price: BigDecimal::from_str("4.999").unwrap(),
            ..props()
        });

        assert!(matches!(result, Err(ProductError::InvalidPrice)));
    }

    #[test]
    fn should_reject_price_above_column_range() {
        let at_limit = Product::new(NewProductProps {
            price: BigDecimal::from_str("100000000").unwrap(),
            ..props()
        });
        let largest = Product::new(NewProductProps {
            price: BigDecimal::from_str("99999999.99").unwrap(),
            ..props()
        });

        assert!(matches!(at_limit, Err(ProductError::InvalidPrice)));
        assert!(largest.is_ok());
    }

    #[test]
    fn should_reject_out_of_range_price_on_update() {
        let mut product = Product::new(props()).unwrap();

        let result = product.apply(NewProductProps {
            price: BigDecimal::from_str("0.001").unwrap(),
            ..props()
        });

        assert!(matches!(result, Err(ProductError::InvalidPrice)));
        assert_eq!(product.price.to_string(), "4.50");
    }

    #[test]
    fn should_keep_identity_when_applying_changes() {
        let mut product = Product::new(props()).unwrap();
        let id = product.id;
        let created_at = product.created_at;

        product
            .apply(NewProductProps {
                name: "Sweet Paprika".to_string(),
                slug: "sweet-paprika".to_string(),
                ..props()
            })
            .unwrap();

        assert_eq!(product.id, id);
        assert_eq!(product.created_at, created_at);
        assert_eq!(product.name, "Sweet Paprika");
    }

    #[test]
    fn should_publish_according_to_stock() {
        let mut product = Product::new(NewProductProps {
            status: ProductStatus::Draft,
            stock: 0,
            ..props()
        })
        .unwrap();

        product.publish();
        assert_eq!(product.status, ProductStatus::OutOfStock);

        product.stock = 5;
        product.publish();
        assert_eq!(product.status, ProductStatus::Published);
    }
}
