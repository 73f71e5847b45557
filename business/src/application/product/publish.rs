use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::publish::{PublishProductParams, PublishProductUseCase};

pub struct PublishProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PublishProductUseCase for PublishProductUseCaseImpl {
    async fn execute(&self, params: PublishProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Publishing product: {}", params.id));

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        product.publish();
        self.repository.save(&product).await?;

        self.logger.info(&format!(
            "Product {} is now {}",
            product.id, product.status
        ));
        Ok(product)
    }
}
