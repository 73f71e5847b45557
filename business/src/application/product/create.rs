use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.slug));

        let product = Product::new(NewProductProps {
            name: params.name,
            slug: params.slug,
            description: params.description,
            price: params.price,
            stock: params.stock,
            status: params.status,
            category_id: params.category_id,
        })?;

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{DriverError, RepositoryError};
    use crate::domain::product::value_objects::ProductStatus;
    use crate::test_support::{MockProductRepo, mock_logger};
    use bigdecimal::BigDecimal;
    use uuid::Uuid;

    fn params() -> CreateProductParams {
        CreateProductParams {
            name: "Saffron Threads".to_string(),
            slug: "saffron-threads".to_string(),
            description: Some("Grade I, 1g".to_string()),
            price: BigDecimal::from(12),
            stock: 0,
            status: ProductStatus::Published,
            category_id: Some(Uuid::new_v4()),
        }
    }

    #[tokio::test]
    async fn should_create_product_with_final_status() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .withf(|p| p.status == ProductStatus::OutOfStock)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case.execute(params()).await.unwrap();

        assert_eq!(product.slug, "saffron-threads");
        assert_eq!(product.status, ProductStatus::OutOfStock);
    }

    #[tokio::test]
    async fn should_reject_product_when_name_is_empty() {
        let mock_repo = MockProductRepo::new();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "".to_string(),
                ..params()
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_surface_missing_category_from_repository() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().returning(|_| {
            Err(RepositoryError::from_driver(
                DriverError::new("23503", "violates foreign key constraint")
                    .with_detail(r#"Key (category_id)=(1) is not present in table "categories"."#),
            ))
        });

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::ForeignKeyViolation(_))
        ));
    }
}
