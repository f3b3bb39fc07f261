use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{NewSubmission, SubmissionId};
use super::export::ExportError;
use super::filter::decode_query;
use super::service::{SubmissionService, SubmissionServiceError};
use super::store::{StoreError, SubmissionStore};
use crate::catalog::catalog;

/// Body of the export endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    #[serde(default)]
    pub submission_ids: Vec<SubmissionId>,
}

/// Router builder exposing intake, review and export endpoints.
pub fn submission_router<S>(service: Arc<SubmissionService<S>>) -> Router
where
    S: SubmissionStore + ?Sized + 'static,
{
    Router::new()
        .route(
            "/api/v1/submissions",
            post(submit_handler::<S>).get(search_handler::<S>),
        )
        .route("/api/v1/submissions/:submission_id", get(get_handler::<S>))
        .route("/api/v1/tags", get(tags_handler::<S>))
        .route("/api/v1/catalog", get(catalog_handler))
        .route("/api/v1/exports/profiles", post(export_profiles_handler::<S>))
        .route(
            "/api/v1/exports/resumes/manifest",
            post(resume_manifest_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<SubmissionService<S>>>,
    axum::Json(submission): axum::Json<NewSubmission>,
) -> Response
where
    S: SubmissionStore + ?Sized + 'static,
{
    match service.submit(submission) {
        Ok(stored) => (StatusCode::CREATED, axum::Json(stored)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn search_handler<S>(
    State(service): State<Arc<SubmissionService<S>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response
where
    S: SubmissionStore + ?Sized + 'static,
{
    let result = decode_query(&params, service.search_config())
        .map_err(SubmissionServiceError::from)
        .and_then(|query| service.search(&query));
    match result {
        Ok(page) => (StatusCode::OK, axum::Json(page)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<S>(
    State(service): State<Arc<SubmissionService<S>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    S: SubmissionStore + ?Sized + 'static,
{
    match service.get(&SubmissionId(submission_id)) {
        Ok(submission) => (StatusCode::OK, axum::Json(submission)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn tags_handler<S>(State(service): State<Arc<SubmissionService<S>>>) -> Response
where
    S: SubmissionStore + ?Sized + 'static,
{
    match service.tags() {
        Ok(tags) => (StatusCode::OK, axum::Json(tags)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn catalog_handler() -> Response {
    (StatusCode::OK, axum::Json(catalog())).into_response()
}

pub(crate) async fn export_profiles_handler<S>(
    State(service): State<Arc<SubmissionService<S>>>,
    axum::Json(request): axum::Json<ExportRequest>,
) -> Response
where
    S: SubmissionStore + ?Sized + 'static,
{
    match service.export_profiles(&request.submission_ids) {
        Ok(artifact) => {
            let disposition = format!("attachment; filename=\"{}\"", artifact.file_name);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, artifact.content_type.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                artifact.bytes,
            )
                .into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn resume_manifest_handler<S>(
    State(service): State<Arc<SubmissionService<S>>>,
    axum::Json(request): axum::Json<ExportRequest>,
) -> Response
where
    S: SubmissionStore + ?Sized + 'static,
{
    match service.resume_manifest(&request.submission_ids) {
        Ok(manifest) => (StatusCode::OK, axum::Json(manifest)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: SubmissionServiceError) -> Response {
    let (status, payload) = match &error {
        SubmissionServiceError::Filter(filter) => (
            StatusCode::BAD_REQUEST,
            json!({ "error": filter.to_string(), "parameter": filter.parameter() }),
        ),
        SubmissionServiceError::Intake(intake) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({ "error": intake.to_string(), "field": intake.field() }),
        ),
        SubmissionServiceError::Store(store) => (store_status(store), json!({ "error": store.to_string() })),
        SubmissionServiceError::Export(export) => {
            let status = match export {
                ExportError::EmptySelection => StatusCode::BAD_REQUEST,
                ExportError::NoResumes => StatusCode::NOT_FOUND,
                ExportError::Csv(_) | ExportError::Buffer(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, json!({ "error": export.to_string() }))
        }
    };
    if status.is_server_error() {
        tracing::error!(error = %error, "submission request failed");
    }
    (status, axum::Json(payload)).into_response()
}

fn store_status(error: &StoreError) -> StatusCode {
    match error {
        StoreError::DuplicateEmail(_) => StatusCode::CONFLICT,
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        StoreError::UnsupportedPredicate(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
