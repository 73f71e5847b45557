use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Draft,
    Published,
    OutOfStock,
    Archived,
}

impl ProductStatus {
    /// Status a product actually ends up in when `requested` is applied.
    /// Publishing without stock lands on `OutOfStock`.
    pub fn set_final_status(requested: ProductStatus, stock: i32) -> ProductStatus {
        if requested == ProductStatus::Published && stock <= 0 {
            return ProductStatus::OutOfStock;
        }
        requested
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductStatus::Draft => write!(f, "draft"),
            ProductStatus::Published => write!(f, "published"),
            ProductStatus::OutOfStock => write!(f, "out_of_stock"),
            ProductStatus::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ProductStatus::Draft),
            "published" => Ok(ProductStatus::Published),
            "out_of_stock" => Ok(ProductStatus::OutOfStock),
            "archived" => Ok(ProductStatus::Archived),
            _ => Err(format!("Invalid product status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_mark_out_of_stock_when_publishing_without_stock() {
        assert_eq!(
            ProductStatus::set_final_status(ProductStatus::Published, 0),
            ProductStatus::OutOfStock
        );
    }

    #[test]
    fn should_publish_when_stock_is_available() {
        assert_eq!(
            ProductStatus::set_final_status(ProductStatus::Published, 3),
            ProductStatus::Published
        );
    }

    #[test]
    fn should_keep_non_publish_requests() {
        for status in [ProductStatus::Draft, ProductStatus::Archived, ProductStatus::OutOfStock] {
            assert_eq!(ProductStatus::set_final_status(status, 0), status);
        }
    }

    #[test]
    fn should_round_trip_status_text() {
        assert_eq!("out_of_stock".parse::<ProductStatus>(), Ok(ProductStatus::OutOfStock));
        assert_eq!(ProductStatus::OutOfStock.to_string(), "out_of_stock");
        assert!("sold".parse::<ProductStatus>().is_err());
    }
}
