use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let previous_status = product.status;

        product.apply(NewProductProps {
            name: params.name,
            slug: params.slug,
            description: params.description,
            price: params.price,
            stock: params.stock,
            status: params.status,
            category_id: params.category_id,
        })?;

        self.repository.save(&product).await?;

        if previous_status != product.status {
            self.logger.info(&format!(
                "Product {} moved from {} to {}",
                product.id, previous_status, product.status
            ));
        }
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DriverError;
    use crate::domain::product::value_objects::ProductStatus;
    use crate::test_support::{MockProductRepo, mock_logger};
    use bigdecimal::BigDecimal;
    use uuid::Uuid;

    fn existing_product() -> Product {
        Product::new(NewProductProps {
            name: "Star Anise".to_string(),
            slug: "star-anise".to_string(),
            description: None,
            price: BigDecimal::from(5),
            stock: 10,
            status: ProductStatus::Draft,
            category_id: None,
        })
        .unwrap()
    }

    fn params(id: Uuid) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: "Star Anise".to_string(),
            slug: "star-anise".to_string(),
            description: Some("Whole pods".to_string()),
            price: BigDecimal::from(6),
            stock: 0,
            status: ProductStatus::Published,
            category_id: None,
        }
    }

    #[tokio::test]
    async fn should_apply_final_status_on_update() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(existing_product()));
        mock_repo
            .expect_save()
            .withf(|p| p.status == ProductStatus::OutOfStock && p.stock == 0)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case.execute(params(Uuid::new_v4())).await.unwrap();

        assert_eq!(product.status, ProductStatus::OutOfStock);
        assert_eq!(product.description.as_deref(), Some("Whole pods"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_save().times(0);

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Uuid::new_v4())).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_negative_stock_before_saving() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(existing_product()));
        mock_repo.expect_save().times(0);

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                stock: -4,
                ..params(Uuid::new_v4())
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NegativeStock));
    }

    #[tokio::test]
    async fn should_surface_slug_conflict_from_repository() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(existing_product()));
        mock_repo.expect_save().returning(|_| {
            Err(RepositoryError::from_driver(
                DriverError::new("23505", "duplicate key").with_constraint("products_slug_key"),
            ))
        });

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Uuid::new_v4())).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::UniqueViolation(_))
        ));
    }
}
