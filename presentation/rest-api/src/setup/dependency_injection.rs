use std::sync::Arc;

use logger::TracingLogger;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::category::get_by_id::GetCategoryByIdUseCaseImpl;
use business::application::category::update::UpdateCategoryUseCaseImpl;
use business::application::data_error::translator::DatabaseErrorTranslator;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::publish::PublishProductUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;

use crate::api::data_error::DataErrorRenderer;
use crate::config::error_config::ErrorConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub category_api: crate::api::category::routes::CategoryApi,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, errors: &ErrorConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new(pool.clone());

        // Infrastructure adapters
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));

        // One translator shared by every data-access route
        let translator = Arc::new(DatabaseErrorTranslator::new(logger.clone()));
        let renderer = DataErrorRenderer::new(translator, errors.scheme);

        // Category use cases
        let create_category_use_case = Arc::new(CreateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_categories_use_case = Arc::new(GetAllCategoriesUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let get_category_by_id_use_case = Arc::new(GetCategoryByIdUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let update_category_use_case = Arc::new(UpdateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let delete_category_use_case = Arc::new(DeleteCategoryUseCaseImpl {
            repository: category_repository,
            logger: logger.clone(),
        });

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let publish_use_case = Arc::new(PublishProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let category_api = crate::api::category::routes::CategoryApi::new(
            create_category_use_case,
            get_all_categories_use_case,
            get_category_by_id_use_case,
            update_category_use_case,
            delete_category_use_case,
            renderer.clone(),
        );

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            publish_use_case,
            renderer,
        );

        Self {
            health_api,
            category_api,
            product_api,
        }
    }
}
