use crate::errors::AppError;
use crate::flows::Session;
use crate::models::{Upload, ValueForm};
use crate::state::AppState;
use crate::ui::render_index;
use crate::view::Mode;
use axum::{
    extract::{Multipart, Path, Query, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub tab: Option<String>,
}

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, AppError> {
    let mode = match query.tab.as_deref() {
        Some(tab) => tab.parse::<Mode>().map_err(|err| AppError::bad_request(err.to_string()))?,
        None => Mode::default(),
    };
    let session = Session::new(state.client, Mode::default());
    session.switch_tab(mode).await;
    Ok(Html(render_index(&session.view().await)))
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn submit_value(State(state): State<AppState>, Form(form): Form<ValueForm>) -> Html<String> {
    let session = Session::new(state.client, Mode::Value);
    session.submit_value(form).await;
    Html(render_index(&session.view().await))
}

pub async fn submit_file(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let upload = read_upload(multipart).await?;
    let session = Session::new(state.client, Mode::File);
    session.submit_file(upload).await;
    Ok(Html(render_index(&session.view().await)))
}

pub async fn download(State(state): State<AppState>, Path(token): Path<String>) -> Redirect {
    let target = state.client.download_url(&token);
    info!(%token, %target, "redirecting result download");
    Redirect::to(target.as_str())
}

/// Pulls the `file` field out of the upload form. Browsers send an empty,
/// unnamed part when nothing was picked; that counts as no file.
async fn read_upload(mut multipart: Multipart) -> Result<Option<Upload>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        if file_name.is_empty() && bytes.is_empty() {
            continue;
        }
        upload = Some(Upload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }
    Ok(upload)
}
