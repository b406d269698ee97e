use crate::client::PredictClient;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub client: PredictClient,
}

impl AppState {
    pub fn new(client: PredictClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let client = PredictClient::new(config.backend_url.clone(), config.request_timeout)?;
        Ok(Self::new(client))
    }
}
