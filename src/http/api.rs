//! Route handlers for the todo REST surface.

use super::error::{ApiError, ErrorBody};
use crate::todo::{
    domain::TodoId,
    services::{CreateTodoRequest, ListTodosQuery, TodoService, UpdateTodoRequest},
};
use actix_web::{HttpResponse, delete, error::InternalError, get, post, put, web};
use serde::Serialize;

/// Name reported by the root service-information endpoint.
const SERVICE_NAME: &str = "taskbook-api";

/// Maximum accepted JSON body size in bytes.
const JSON_BODY_LIMIT: usize = 1024 * 1024;

/// Parses a path segment as a todo identifier.
///
/// A non-numeric segment behaves as an unknown id: the storage layer
/// compares ids numerically, so such a request can never match a row.
fn parse_id(raw: &str) -> Result<TodoId, ApiError> {
    raw.parse::<i64>()
        .map(TodoId::new)
        .map_err(|_| ApiError::NotFound)
}

#[post("/todos")]
async fn create_todo(
    service: web::Data<TodoService>,
    payload: web::Json<CreateTodoRequest>,
) -> Result<HttpResponse, ApiError> {
    let todo = service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(todo))
}

#[get("/todos")]
async fn list_todos(
    service: web::Data<TodoService>,
    query: web::Query<ListTodosQuery>,
) -> Result<HttpResponse, ApiError> {
    let todos = service.list(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(todos))
}

#[get("/todos/{id}")]
async fn get_todo(
    service: web::Data<TodoService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(path.as_str())?;
    let todo = service.get(id).await?;
    Ok(HttpResponse::Ok().json(todo))
}

#[put("/todos/{id}")]
async fn update_todo(
    service: web::Data<TodoService>,
    path: web::Path<String>,
    payload: web::Json<UpdateTodoRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(path.as_str())?;
    let todo = service.update(id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(todo))
}

#[delete("/todos/{id}")]
async fn delete_todo(
    service: web::Data<TodoService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(path.as_str())?;
    service.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[derive(Debug, Serialize)]
struct ServiceInfo {
    ok: bool,
    service: &'static str,
}

/// Root service-information endpoint.
#[get("/")]
async fn service_info() -> HttpResponse {
    HttpResponse::Ok().json(ServiceInfo {
        ok: true,
        service: SERVICE_NAME,
    })
}

/// JSON body for unmatched routes; wire as the app's default service.
pub async fn fallback_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::from_message("Resource not found"))
}

/// JSON extractor configuration: body size cap and the unified error body
/// for malformed payloads.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            let response = HttpResponse::BadRequest().json(ErrorBody::from_message(
                "Invalid JSON body",
            ));
            InternalError::from_response(err, response).into()
        })
}

/// Registers the todo routes and the root endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_todo)
        .service(list_todos)
        .service(get_todo)
        .service(update_todo)
        .service(delete_todo)
        .service(service_info);
}
