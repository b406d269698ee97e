//! Thin client for the prediction backend.

use crate::errors::{FormError, SERVER_FALLBACK_MESSAGE};
use crate::models::{ErrorBody, FilePrediction, Upload, ValuePrediction, ValuePredictionRequest};
use reqwest::{multipart, Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

const PREDICT_PATH: &str = "api/predict";

#[derive(Debug, Clone)]
pub struct PredictClient {
    client: Client,
    base_url: Url,
}

impl PredictClient {
    /// `base_url` must end with a slash; `Config` guarantees that.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub async fn predict_values(&self, request: &ValuePredictionRequest) -> Result<ValuePrediction, FormError> {
        let response = self
            .client
            .post(self.endpoint(PREDICT_PATH)?)
            .json(request)
            .send()
            .await?;

        read_reply::<ValuePrediction>(response).await?.validate()
    }

    pub async fn predict_file(&self, upload: &Upload) -> Result<FilePrediction, FormError> {
        let mut part = multipart::Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
        if let Some(content_type) = &upload.content_type {
            part = part.mime_str(content_type).map_err(|_| {
                FormError::Validation(format!("недопустимый тип файла {content_type:?}"))
            })?;
        }
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint(PREDICT_PATH)?)
            .multipart(form)
            .send()
            .await?;

        read_reply::<FilePrediction>(response).await?.validate()
    }

    /// Backend URL that serves the result file named by `token`.
    pub fn download_url(&self, token: &str) -> Url {
        let mut url = self.base_url.clone();
        push_download_segments(&mut url, token);
        url
    }

    fn endpoint(&self, path: &str) -> Result<Url, FormError> {
        self.base_url
            .join(path)
            .map_err(|err| FormError::Schema(format!("cannot build backend URL: {err}")))
    }
}

/// Appends `download/<token>` to `url`; the token is encoded as a single path segment.
pub fn push_download_segments(url: &mut Url, token: &str) {
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push("download").push(token);
    }
}

async fn read_reply<T: DeserializeOwned>(response: Response) -> Result<T, FormError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| SERVER_FALLBACK_MESSAGE.to_string());
        return Err(FormError::Server {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_slice(&body)?)
}
