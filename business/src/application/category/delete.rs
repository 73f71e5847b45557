use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCategoryUseCase for DeleteCategoryUseCaseImpl {
    async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CategoryError> {
        self.logger
            .info(&format!("Removing category {}", params.id));

        // The repository reports a missing row itself, so one statement is enough.
        match self.repository.delete(params.id).await {
            Ok(()) => {
                self.logger.info(&format!("Category {} removed", params.id));
                Ok(())
            }
            Err(RepositoryError::NotFound) => Err(CategoryError::NotFound),
            Err(err @ RepositoryError::ForeignKeyViolation(_)) => {
                self.logger.warn(&format!(
                    "Category {} still has products assigned, refusing to remove it",
                    params.id
                ));
                Err(CategoryError::Repository(err))
            }
            Err(err) => Err(CategoryError::Repository(err)),
        }
    }
}
