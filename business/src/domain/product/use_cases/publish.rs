use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct PublishProductParams {
    pub id: Uuid,
}

#[async_trait]
pub trait PublishProductUseCase: Send + Sync {
    async fn execute(&self, params: PublishProductParams) -> Result<Product, ProductError>;
}
