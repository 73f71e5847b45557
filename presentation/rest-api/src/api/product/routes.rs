use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use business::domain::product::use_cases::publish::{PublishProductParams, PublishProductUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::data_error::DataErrorRenderer;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductRequest, ProductResponse};
use crate::api::security::AdminApiKey;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    publish_use_case: Arc<dyn PublishProductUseCase>,
    errors: DataErrorRenderer,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        publish_use_case: Arc<dyn PublishProductUseCase>,
        errors: DataErrorRenderer,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            publish_use_case,
            errors,
        }
    }
}

fn invalid_id() -> Json<ErrorResponse> {
    Json(ErrorResponse::validation("product.invalid_id"))
}

/// Product catalog API
#[OpenApi]
impl ProductApi {
    /// List products
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => GetAllProductsResponse::Ok(Json(
                products.into_iter().map(|p| p.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response(&self.errors);
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetProductByIdResponse::BadRequest(invalid_id());
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(&self.errors);
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product
    ///
    /// Requires the admin API key. A duplicate slug answers 409 and an
    /// unknown category answers 400.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        _auth: AdminApiKey,
        body: Json<ProductRequest>,
    ) -> CreateProductResponse {
        let fields = match body.0.parse_fields() {
            Ok(fields) => fields,
            Err(key) => {
                return CreateProductResponse::BadRequest(Json(ErrorResponse::validation(key)));
            }
        };

        let request = body.0;
        let params = CreateProductParams {
            name: request.name,
            slug: request.slug,
            description: request.description,
            price: fields.price,
            stock: request.stock,
            status: request.status.into(),
            category_id: fields.category_id,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(&self.errors);
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    409 => CreateProductResponse::Conflict(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Requires the admin API key.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        _auth: AdminApiKey,
        id: Path<String>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return UpdateProductResponse::BadRequest(invalid_id());
        };

        let fields = match body.0.parse_fields() {
            Ok(fields) => fields,
            Err(key) => {
                return UpdateProductResponse::BadRequest(Json(ErrorResponse::validation(key)));
            }
        };

        let request = body.0;
        let params = UpdateProductParams {
            id: uuid,
            name: request.name,
            slug: request.slug,
            description: request.description,
            price: fields.price,
            stock: request.stock,
            status: request.status.into(),
            category_id: fields.category_id,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(&self.errors);
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    409 => UpdateProductResponse::Conflict(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Requires the admin API key.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, _auth: AdminApiKey, id: Path<String>) -> DeleteProductResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteProductResponse::BadRequest(invalid_id());
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response(&self.errors);
                match status.as_u16() {
                    400 => DeleteProductResponse::BadRequest(json),
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Publish a product
    ///
    /// Requires the admin API key. Products without stock end up "out_of_stock".
    #[oai(path = "/products/:id/publish", method = "post", tag = "ApiTags::Products")]
    async fn publish_product(
        &self,
        _auth: AdminApiKey,
        id: Path<String>,
    ) -> PublishProductResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return PublishProductResponse::BadRequest(invalid_id());
        };

        match self
            .publish_use_case
            .execute(PublishProductParams { id: uuid })
            .await
        {
            Ok(product) => PublishProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(&self.errors);
                match status.as_u16() {
                    400 => PublishProductResponse::BadRequest(json),
                    404 => PublishProductResponse::NotFound(json),
                    _ => PublishProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum PublishProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
