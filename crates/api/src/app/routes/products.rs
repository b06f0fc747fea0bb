use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};

use ecom_core::ProductId;
use ecom_products::Product;

use crate::app::errors;
use crate::app::routes::{product_location, Operation};
use crate::app::services::AppServices;

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    tracing::info!(operation = Operation::List.name(), "getting all products");

    match services.products().list().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(fault) => errors::read_fault_to_response(Operation::List, fault),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    tracing::info!(operation = Operation::GetById.name(), product_id = %id, "getting product by id");

    match services.products().get(&ProductId::from(id)).await {
        Ok(Some(product)) => (StatusCode::OK, Json(product)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(fault) => errors::read_fault_to_response(Operation::GetById, fault),
    }
}

pub async fn add_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(product): Json<Product>,
) -> axum::response::Response {
    tracing::info!(operation = Operation::Add.name(), product_name = %product.name, "adding new product");

    let id = match services.products().add(product).await {
        Ok(id) => id,
        Err(fault) => return errors::fault_to_response(Operation::Add, fault),
    };

    let mut response = (StatusCode::CREATED, Json(&id)).into_response();
    match HeaderValue::try_from(product_location(&id)) {
        Ok(location) => {
            response.headers_mut().insert(header::LOCATION, location);
        }
        Err(_) => tracing::warn!(product_id = %id, "product id is not a valid header value; omitting Location"),
    }
    response
}

pub async fn update_product_quantity(
    Extension(services): Extension<Arc<AppServices>>,
    Path((id, quantity)): Path<(String, i32)>,
) -> axum::response::Response {
    tracing::info!(
        operation = Operation::UpdateQuantity.name(),
        product_id = %id,
        quantity,
        "updating product quantity"
    );

    match services.products().update_quantity(&ProductId::from(id), quantity).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(fault) => errors::fault_to_response(Operation::UpdateQuantity, fault),
    }
}

pub async fn generate_product_description(
    Extension(services): Extension<Arc<AppServices>>,
    Json(product): Json<Product>,
) -> axum::response::Response {
    tracing::info!(
        operation = Operation::GenerateDescription.name(),
        product_name = %product.name,
        "generating product description"
    );

    match services.products().generate_description(product).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(fault) => errors::fault_to_response(Operation::GenerateDescription, fault),
    }
}
