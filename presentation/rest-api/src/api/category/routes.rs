use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use business::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use business::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use business::domain::category::use_cases::get_by_id::{
    GetCategoryByIdParams, GetCategoryByIdUseCase,
};
use business::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};

use crate::api::category::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use crate::api::data_error::DataErrorRenderer;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::AdminApiKey;
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    create_use_case: Arc<dyn CreateCategoryUseCase>,
    get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
    get_by_id_use_case: Arc<dyn GetCategoryByIdUseCase>,
    update_use_case: Arc<dyn UpdateCategoryUseCase>,
    delete_use_case: Arc<dyn DeleteCategoryUseCase>,
    errors: DataErrorRenderer,
}

impl CategoryApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCategoryUseCase>,
        get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
        get_by_id_use_case: Arc<dyn GetCategoryByIdUseCase>,
        update_use_case: Arc<dyn UpdateCategoryUseCase>,
        delete_use_case: Arc<dyn DeleteCategoryUseCase>,
        errors: DataErrorRenderer,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            errors,
        }
    }
}

fn invalid_id() -> Json<ErrorResponse> {
    Json(ErrorResponse::validation("category.invalid_id"))
}

/// Category management API
#[OpenApi]
impl CategoryApi {
    /// List categories
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn get_all_categories(&self) -> GetAllCategoriesResponse {
        match self.get_all_use_case.execute().await {
            Ok(categories) => GetAllCategoriesResponse::Ok(Json(
                categories.into_iter().map(|c| c.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response(&self.errors);
                GetAllCategoriesResponse::InternalError(json)
            }
        }
    }

    /// Get a category by ID
    #[oai(path = "/categories/:id", method = "get", tag = "ApiTags::Categories")]
    async fn get_category_by_id(&self, id: Path<String>) -> GetCategoryByIdResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetCategoryByIdResponse::BadRequest(invalid_id());
        };

        match self
            .get_by_id_use_case
            .execute(GetCategoryByIdParams { id: uuid })
            .await
        {
            Ok(category) => GetCategoryByIdResponse::Ok(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(&self.errors);
                match status.as_u16() {
                    404 => GetCategoryByIdResponse::NotFound(json),
                    _ => GetCategoryByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a category
    ///
    /// Requires the admin API key.
    #[oai(path = "/categories", method = "post", tag = "ApiTags::Categories")]
    async fn create_category(
        &self,
        _auth: AdminApiKey,
        body: Json<CreateCategoryRequest>,
    ) -> CreateCategoryResponse {
        let params = CreateCategoryParams {
            name: body.0.name,
            description: body.0.description,
        };

        match self.create_use_case.execute(params).await {
            Ok(category) => CreateCategoryResponse::Created(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(&self.errors);
                match status.as_u16() {
                    400 => CreateCategoryResponse::BadRequest(json),
                    409 => CreateCategoryResponse::Conflict(json),
                    _ => CreateCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a category
    ///
    /// Requires the admin API key.
    #[oai(path = "/categories/:id", method = "put", tag = "ApiTags::Categories")]
    async fn update_category(
        &self,
        _auth: AdminApiKey,
        id: Path<String>,
        body: Json<UpdateCategoryRequest>,
    ) -> UpdateCategoryResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return UpdateCategoryResponse::BadRequest(invalid_id());
        };

        let params = UpdateCategoryParams {
            id: uuid,
            name: body.0.name,
            description: body.0.description,
        };

        match self.update_use_case.execute(params).await {
            Ok(category) => UpdateCategoryResponse::Ok(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(&self.errors);
                match status.as_u16() {
                    400 => UpdateCategoryResponse::BadRequest(json),
                    404 => UpdateCategoryResponse::NotFound(json),
                    409 => UpdateCategoryResponse::Conflict(json),
                    _ => UpdateCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a category
    ///
    /// Requires the admin API key. Fails with 400 while products still
    /// reference the category.
    #[oai(path = "/categories/:id", method = "delete", tag = "ApiTags::Categories")]
    async fn delete_category(&self, _auth: AdminApiKey, id: Path<String>) -> DeleteCategoryResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteCategoryResponse::BadRequest(invalid_id());
        };

        match self
            .delete_use_case
            .execute(DeleteCategoryParams { id: uuid })
            .await
        {
            Ok(()) => DeleteCategoryResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response(&self.errors);
                match status.as_u16() {
                    400 => DeleteCategoryResponse::BadRequest(json),
                    404 => DeleteCategoryResponse::NotFound(json),
                    _ => DeleteCategoryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategoryByIdResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCategoryResponse {
    #[oai(status = 201)]
    Created(Json<CategoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryResponse>),
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
pub enum DeleteCategoryResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
