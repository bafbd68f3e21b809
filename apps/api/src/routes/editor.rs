use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::document::model::{
    CvDocument, Education, EducationField, EntryId, Experience, ExperienceField, ListField,
    TemplateKind, TextField,
};
use crate::document::{BlurOutcome, EditError, EditTracker, EditorSession, FieldBinding};
use crate::errors::AppError;
use crate::export::{prepare_export, ExportJob};
use crate::llm_client::prompts::SUMMARY_CONTEXT;
use crate::locale::Language;
use crate::persistence::Snapshot;
use crate::render::outline::{outline, OutlineGroup};
use crate::render::{render, RenderTree};
use crate::state::AppState;

fn parse_list_field(raw: &str) -> Result<ListField, EditError> {
    raw.parse()
        .map_err(|_| EditError::UnknownListField(raw.to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Reads
// ────────────────────────────────────────────────────────────────────────────

/// One entry of the language picker.
#[derive(Serialize)]
pub struct LanguageOption {
    pub code: Language,
    pub label: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CvStateResponse {
    pub document: CvDocument,
    pub modified_fields: EditTracker,
    pub language: Language,
    pub template: TemplateKind,
    pub languages: Vec<LanguageOption>,
}

impl CvStateResponse {
    fn of(session: &EditorSession) -> Self {
        Self {
            document: session.document().clone(),
            modified_fields: session.tracker().clone(),
            language: session.language(),
            template: session.template(),
            languages: Language::ALL
                .into_iter()
                .map(|code| LanguageOption {
                    code,
                    label: code.locale().label,
                })
                .collect(),
        }
    }
}

/// GET /api/v1/cv
pub async fn handle_get_cv(State(state): State<AppState>) -> Json<CvStateResponse> {
    let session = state.session.lock().await;
    Json(CvStateResponse::of(&session))
}

/// GET /api/v1/cv/render
pub async fn handle_render(State(state): State<AppState>) -> Json<RenderTree> {
    let session = state.session.lock().await;
    let tree = render(&session);
    debug!("Rendered template {}", tree.template.as_str());
    Json(tree)
}

#[derive(Serialize)]
pub struct OutlineResponse {
    pub language: Language,
    pub groups: Vec<OutlineGroup>,
}

/// GET /api/v1/cv/outline
pub async fn handle_outline(State(state): State<AppState>) -> Json<OutlineResponse> {
    let session = state.session.lock().await;
    Json(OutlineResponse {
        language: session.language(),
        groups: outline(session.document(), session.locale()),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// In-place editing
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct FocusRequest {
    pub binding: FieldBinding,
}

#[derive(Serialize)]
pub struct FocusResponse {
    pub binding: FieldBinding,
    pub text: String,
}

/// POST /api/v1/cv/focus
pub async fn handle_focus(
    State(state): State<AppState>,
    Json(req): Json<FocusRequest>,
) -> Result<Json<FocusResponse>, AppError> {
    let session = state.session.lock().await;
    let text = session.focus(&req.binding)?;
    Ok(Json(FocusResponse {
        binding: req.binding,
        text,
    }))
}

#[derive(Deserialize)]
pub struct BlurRequest {
    pub binding: FieldBinding,
    pub text: String,
}

#[derive(Serialize)]
pub struct BlurResponse {
    #[serde(flatten)]
    pub outcome: BlurOutcome,
    pub tree: RenderTree,
}

/// POST /api/v1/cv/blur
pub async fn handle_blur(
    State(state): State<AppState>,
    Json(req): Json<BlurRequest>,
) -> Result<Json<BlurResponse>, AppError> {
    let mut session = state.session.lock().await;
    let outcome = session.blur(&req.binding, &req.text)?;
    Ok(Json(BlurResponse {
        outcome,
        tree: render(&session),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Entry collections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CreatedEntry {
    pub id: EntryId,
}

#[derive(Deserialize)]
pub struct EntryUpdate<F> {
    pub field: F,
    pub value: String,
}

/// POST /api/v1/cv/experiences
pub async fn handle_add_experience(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreatedEntry>) {
    let id = state.session.lock().await.add_experience();
    (StatusCode::CREATED, Json(CreatedEntry { id }))
}

/// PATCH /api/v1/cv/experiences/:id
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
    Json(req): Json<EntryUpdate<ExperienceField>>,
) -> Result<StatusCode, AppError> {
    state
        .session
        .lock()
        .await
        .update_experience(&id, req.field, req.value)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/cv/experiences/:id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
) -> Result<Json<Experience>, AppError> {
    let removed = state.session.lock().await.remove_experience(&id)?;
    Ok(Json(removed))
}

/// POST /api/v1/cv/education
pub async fn handle_add_education(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreatedEntry>) {
    let id = state.session.lock().await.add_education();
    (StatusCode::CREATED, Json(CreatedEntry { id }))
}

/// PATCH /api/v1/cv/education/:id
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
    Json(req): Json<EntryUpdate<EducationField>>,
) -> Result<StatusCode, AppError> {
    state
        .session
        .lock()
        .await
        .update_education(&id, req.field, req.value)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/cv/education/:id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
) -> Result<Json<Education>, AppError> {
    let removed = state.session.lock().await.remove_education(&id)?;
    Ok(Json(removed))
}

// ────────────────────────────────────────────────────────────────────────────
// Positional lists
// ────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CreatedItem {
    pub index: usize,
}

#[derive(Deserialize)]
pub struct ItemUpdate {
    pub value: String,
}

#[derive(Serialize)]
pub struct RemovedItem {
    pub removed: String,
}

/// POST /api/v1/cv/lists/:field
pub async fn handle_add_list_item(
    State(state): State<AppState>,
    Path(field): Path<String>,
) -> Result<(StatusCode, Json<CreatedItem>), AppError> {
    let field = parse_list_field(&field)?;
    let index = state.session.lock().await.add_list_item(field);
    Ok((StatusCode::CREATED, Json(CreatedItem { index })))
}

/// PATCH /api/v1/cv/lists/:field/:index
pub async fn handle_update_list_item(
    State(state): State<AppState>,
    Path((field, index)): Path<(String, usize)>,
    Json(req): Json<ItemUpdate>,
) -> Result<StatusCode, AppError> {
    let field = parse_list_field(&field)?;
    state
        .session
        .lock()
        .await
        .update_list_item(field, index, req.value)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/cv/lists/:field/:index
pub async fn handle_remove_list_item(
    State(state): State<AppState>,
    Path((field, index)): Path<(String, usize)>,
) -> Result<Json<RemovedItem>, AppError> {
    let field = parse_list_field(&field)?;
    let removed = state.session.lock().await.remove_list_item(field, index)?;
    Ok(Json(RemovedItem { removed }))
}

// ────────────────────────────────────────────────────────────────────────────
// Template and locale
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct TemplateRequest {
    pub template: String,
}

/// PUT /api/v1/cv/template
pub async fn handle_set_template(
    State(state): State<AppState>,
    Json(req): Json<TemplateRequest>,
) -> Json<RenderTree> {
    let mut session = state.session.lock().await;
    session.set_template(TemplateKind::resolve(&req.template));
    Json(render(&session))
}

#[derive(Deserialize)]
pub struct LocaleRequest {
    pub language: String,
}

/// PUT /api/v1/cv/locale
pub async fn handle_set_locale(
    State(state): State<AppState>,
    Json(req): Json<LocaleRequest>,
) -> Result<Json<RenderTree>, AppError> {
    let language: Language = req.language.parse().map_err(AppError::Validation)?;
    let mut session = state.session.lock().await;
    session.set_language(language);
    Ok(Json(render(&session)))
}

// ────────────────────────────────────────────────────────────────────────────
// Photo
// ────────────────────────────────────────────────────────────────────────────

/// Upload size accepted by the photo route.
pub const PHOTO_BODY_LIMIT: usize = 10 * 1024 * 1024;

fn photo_data_uri(content_type: &str, data: &Bytes) -> String {
    format!("data:{content_type};base64,{}", STANDARD.encode(data))
}

#[derive(Serialize)]
pub struct OffsetResponse {
    pub offset: f64,
}

/// POST /api/v1/cv/photo
/// Multipart upload; the `file` part must carry an `image/*` content type.
pub async fn handle_upload_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<OffsetResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let content_type = field
            .content_type()
            .map(str::to_owned)
            .unwrap_or_default();
        if !content_type.starts_with("image/") {
            return Err(AppError::Validation(format!(
                "Photo must be an image, got '{content_type}'"
            )));
        }
        let data: Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if data.is_empty() {
            return Err(AppError::Validation("Photo file is empty".to_string()));
        }

        let mut session = state.session.lock().await;
        session.set_photo(photo_data_uri(&content_type, &data));
        info!("Stored {} byte photo", data.len());
        return Ok(Json(OffsetResponse {
            offset: session.document().profile_image_pos,
        }));
    }
    Err(AppError::Validation("Missing \"file\" part".to_string()))
}

/// DELETE /api/v1/cv/photo
pub async fn handle_remove_photo(State(state): State<AppState>) -> StatusCode {
    state.session.lock().await.remove_photo();
    StatusCode::NO_CONTENT
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragStart {
    pub pointer_y: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragMove {
    pub pointer_y: f64,
    pub container_height: f64,
}

/// POST /api/v1/cv/photo/drag/start
pub async fn handle_drag_start(
    State(state): State<AppState>,
    Json(req): Json<DragStart>,
) -> Result<StatusCode, AppError> {
    state.session.lock().await.begin_photo_drag(req.pointer_y)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/cv/photo/drag/move
pub async fn handle_drag_move(
    State(state): State<AppState>,
    Json(req): Json<DragMove>,
) -> Result<Json<OffsetResponse>, AppError> {
    let offset = state
        .session
        .lock()
        .await
        .drag_photo(req.pointer_y, req.container_height)?;
    Ok(Json(OffsetResponse { offset }))
}

/// POST /api/v1/cv/photo/drag/end
pub async fn handle_drag_end(State(state): State<AppState>) -> Json<OffsetResponse> {
    let offset = state.session.lock().await.end_photo_drag();
    Json(OffsetResponse { offset })
}

// ────────────────────────────────────────────────────────────────────────────
// Summary enhancement
// ────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SummaryResponse {
    pub text: String,
}

/// POST /api/v1/cv/summary/optimize
///
/// The lock is released while the enhancer runs, so an edit made in the
/// meantime is overwritten when the result is committed.
pub async fn handle_optimize_summary(
    State(state): State<AppState>,
) -> Json<SummaryResponse> {
    let summary = state.session.lock().await.document().summary.clone();
    let text = state
        .enhancer
        .optimize_or_original(&summary, SUMMARY_CONTEXT)
        .await;
    state
        .session
        .lock()
        .await
        .set_text(TextField::Summary, text.clone());
    Json(SummaryResponse { text })
}

// ────────────────────────────────────────────────────────────────────────────
// Snapshot persistence and export
// ────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub saved_at: Option<DateTime<Utc>>,
    pub path: String,
}

/// POST /api/v1/cv/save
pub async fn handle_save(State(state): State<AppState>) -> Result<Json<SaveResponse>, AppError> {
    let snapshot = Snapshot::capture(&*state.session.lock().await);
    state.snapshots.save(&snapshot).await?;
    Ok(Json(SaveResponse {
        saved_at: snapshot.saved_at,
        path: state.snapshots.path().display().to_string(),
    }))
}

/// POST /api/v1/cv/load
pub async fn handle_load(
    State(state): State<AppState>,
) -> Result<Json<CvStateResponse>, AppError> {
    let snapshot = state
        .snapshots
        .load(state.config.default_language)
        .await?
        .ok_or_else(|| AppError::NotFound("No saved CV".to_string()))?;
    let mut session = state.session.lock().await;
    *session = snapshot.into_session();
    info!("Session restored from snapshot");
    Ok(Json(CvStateResponse::of(&session)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportQuery {
    pub capture_width: Option<f64>,
    pub capture_height: Option<f64>,
}

/// GET /api/v1/cv/export
pub async fn handle_export(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Json<ExportJob> {
    let capture = query.capture_width.zip(query.capture_height);
    let session = state.session.lock().await;
    Json(prepare_export(&session, capture))
}
