use axum::{extract::{Path, State}, http::StatusCode, Json};
use tracing::{error, info};
use uuid::Uuid;

use service::employee::domain::{CreateEmployeeInput, Employee, UpdateEmployeeInput};
use service::errors::ServiceError;

use crate::errors::JsonApiError;
use crate::state::ServerState;

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Employee>>, JsonApiError> {
    match state.employees.list().await {
        Ok(list) => {
            info!(count = list.len(), "list employees");
            Ok(Json(list))
        }
        Err(e) => {
            error!(err = %e, "list employees failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "List Failed", None))
        }
    }
}

pub async fn get_by_id(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<Employee>, JsonApiError> {
    match state.employees.get(id).await {
        Ok(employee) => Ok(Json(employee)),
        Err(ServiceError::NotFound(_)) => Err(JsonApiError::status_only(StatusCode::NOT_FOUND)),
        Err(e) => {
            error!(err = %e, %id, "get employee failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Get Failed", None))
        }
    }
}

pub async fn create(State(state): State<ServerState>, Json(input): Json<CreateEmployeeInput>) -> Result<Json<Employee>, JsonApiError> {
    match state.employees.create(input).await {
        Ok(created) => {
            info!(id = %created.id, "created employee");
            Ok(Json(created))
        }
        Err(ServiceError::Validation(msg)) => {
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg)))
        }
        Err(e) => {
            error!(err = %e, "create employee failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Create Failed", None))
        }
    }
}

pub async fn update(State(state): State<ServerState>, Path(id): Path<Uuid>, Json(input): Json<UpdateEmployeeInput>) -> Result<Json<Employee>, JsonApiError> {
    match state.employees.update(id, input).await {
        Ok(updated) => {
            info!(id = %updated.id, "updated employee");
            Ok(Json(updated))
        }
        Err(ServiceError::Validation(msg)) => {
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg)))
        }
        Err(ServiceError::NotFound(_)) => Err(JsonApiError::status_only(StatusCode::NOT_FOUND)),
        Err(e) => {
            error!(err = %e, %id, "update employee failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Update Failed", None))
        }
    }
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<StatusCode, JsonApiError> {
    match state.employees.delete(id).await {
        Ok(()) => {
            info!(%id, "deleted employee");
            Ok(StatusCode::OK)
        }
        Err(ServiceError::NotFound(_)) => Err(JsonApiError::status_only(StatusCode::NOT_FOUND)),
        Err(e) => {
            error!(err = %e, %id, "delete employee failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Delete Failed", None))
        }
    }
}
