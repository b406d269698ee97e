//! Value and file submission flows over a shared view-model.

use crate::client::PredictClient;
use crate::errors::FormError;
use crate::models::{Upload, ValueForm};
use crate::render::{download_path, render_error, render_file_result, render_value_result};
use crate::view::{Mode, ViewModel};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// What happened to a submission once it finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The result (or error) was written to the view.
    Rendered,
    /// A newer submission of the same form started first; this one was dropped.
    Discarded,
}

/// Request-generation counter for one form.
#[derive(Debug, Default)]
struct Generation(AtomicU64);

impl Generation {
    fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }
}

/// One page's worth of UI state plus the backend it talks to.
#[derive(Debug)]
pub struct Session {
    client: PredictClient,
    view: Mutex<ViewModel>,
    value_generation: Generation,
    file_generation: Generation,
}

impl Session {
    pub fn new(client: PredictClient, mode: Mode) -> Self {
        Self {
            client,
            view: Mutex::new(ViewModel::new(mode)),
            value_generation: Generation::default(),
            file_generation: Generation::default(),
        }
    }

    pub async fn view(&self) -> ViewModel {
        self.view.lock().await.clone()
    }

    pub async fn switch_tab(&self, mode: Mode) {
        self.view.lock().await.switch_tab(mode);
    }

    pub async fn submit_value(&self, form: ValueForm) -> Outcome {
        let ticket = self.value_generation.begin();
        let parsed = form.parse();
        self.view.lock().await.value_inputs = form;

        let result = match parsed {
            Ok(request) => {
                info!(tv = request.tv, radio = request.radio, newspaper = request.newspaper, "submitting value prediction");
                self.client.predict_values(&request).await
            }
            Err(err) => Err(err),
        };

        let mut view = self.view.lock().await;
        if !self.value_generation.is_current(ticket) {
            debug!(ticket, "discarding stale value prediction");
            return Outcome::Discarded;
        }
        view.value_result = match result {
            Ok(prediction) => render_value_result(&prediction),
            Err(err) => {
                log_failure("value", &err);
                render_error(&err)
            }
        };
        Outcome::Rendered
    }

    /// `None` means the user submitted without picking a file; no request is sent.
    pub async fn submit_file(&self, upload: Option<Upload>) -> Outcome {
        let ticket = self.file_generation.begin();

        let result = match upload {
            Some(upload) => {
                info!(file = %upload.file_name, bytes = upload.bytes.len(), "submitting file prediction");
                self.client.predict_file(&upload).await
            }
            None => Err(FormError::Validation("выберите файл для загрузки".to_string())),
        };

        let mut view = self.view.lock().await;
        if !self.file_generation.is_current(ticket) {
            debug!(ticket, "discarding stale file prediction");
            return Outcome::Discarded;
        }
        match result {
            Ok(prediction) => {
                view.file_result = render_file_result(&prediction);
                view.download_token = prediction.result_file;
            }
            Err(err) => {
                log_failure("file", &err);
                view.file_result = render_error(&err);
                view.download_token = None;
            }
        }
        Outcome::Rendered
    }

    /// Follows the download control, if one is on the page, and returns where it leads.
    pub async fn click_download(&self) -> Option<String> {
        let mut view = self.view.lock().await;
        let path = download_path(view.download_token.as_deref()?);
        view.location = Some(path.clone());
        Some(path)
    }
}

fn log_failure(form: &str, err: &FormError) {
    if err.is_validation() {
        info!(form, "rejected input: {err}");
    } else {
        warn!(form, "prediction failed: {err}");
    }
}
