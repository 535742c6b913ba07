use axum::{
	Json, Router,
	extract::{Path, Query, State},
	http::{StatusCode, header},
	response::{Html, IntoResponse, Response},
	routing::get,
};
use serde::Serialize;

use noted_service::{
	CreateNoteRequest, Error as ServiceError, ListQuery, NoteBody, UpdateNoteRequest,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/notes", get(list_notes).post(create_note))
		.route("/notes/{id}", get(get_note).put(update_note).delete(delete_note))
		.with_state(state)
}

/// Serves the embedded single-page UI. Stateless, so the document contract
/// can be exercised without a database.
pub fn ui_router() -> Router {
	Router::new()
		.route("/", get(index))
		.route("/app.js", get(app_js))
		.route("/style.css", get(style_css))
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn index() -> Html<&'static str> {
	Html(include_str!("../assets/index.html"))
}

async fn app_js() -> impl IntoResponse {
	([(header::CONTENT_TYPE, "application/javascript")], include_str!("../assets/app.js"))
}

async fn style_css() -> impl IntoResponse {
	([(header::CONTENT_TYPE, "text/css")], include_str!("../assets/style.css"))
}

async fn create_note(
	State(state): State<AppState>,
	Json(payload): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<NoteBody>), ApiError> {
	let note = state.service.create(payload).await?;

	Ok((StatusCode::CREATED, Json(note)))
}

async fn list_notes(
	State(state): State<AppState>,
	Query(query): Query<ListQuery>,
) -> Result<Json<Vec<NoteBody>>, ApiError> {
	let notes = state.service.list(query).await?;

	Ok(Json(notes))
}

async fn get_note(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<NoteBody>, ApiError> {
	let note = state.service.get(&id).await?;

	Ok(Json(note))
}

async fn update_note(
	State(state): State<AppState>,
	Path(id): Path<String>,
	Json(payload): Json<UpdateNoteRequest>,
) -> Result<Json<NoteBody>, ApiError> {
	let note = state.service.update(&id, payload).await?;

	Ok(Json(note))
}

async fn delete_note(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
	state.service.delete(&id).await?;

	Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::Validation { fields } => Self {
				status: StatusCode::BAD_REQUEST,
				error_code: "validation_error".to_string(),
				message: "Missing required fields.".to_string(),
				fields: Some(fields),
			},
			ServiceError::InvalidId { .. } | ServiceError::NotFound { .. } => Self {
				status: StatusCode::NOT_FOUND,
				error_code: "not_found".to_string(),
				message: "Note not found.".to_string(),
				fields: None,
			},
			ServiceError::Storage { message } => {
				tracing::error!(%message, "Storage error.");

				Self {
					status: StatusCode::INTERNAL_SERVER_ERROR,
					error_code: "storage_error".to_string(),
					message: "Storage error.".to_string(),
					fields: None,
				}
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody {
			error_code: self.error_code,
			message: self.message,
			fields: self.fields,
		};

		(self.status, Json(body)).into_response()
	}
}
