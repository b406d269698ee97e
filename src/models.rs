use crate::errors::FormError;
use serde::{Deserialize, Serialize};

/// Raw text of the value form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueForm {
    #[serde(default)]
    pub tv: String,
    #[serde(default)]
    pub radio: String,
    #[serde(default)]
    pub newspaper: String,
}

impl ValueForm {
    pub fn new(tv: impl Into<String>, radio: impl Into<String>, newspaper: impl Into<String>) -> Self {
        Self {
            tv: tv.into(),
            radio: radio.into(),
            newspaper: newspaper.into(),
        }
    }

    pub fn parse(&self) -> Result<ValuePredictionRequest, FormError> {
        Ok(ValuePredictionRequest {
            tv: parse_channel("Телевидение", &self.tv)?,
            radio: parse_channel("Радио", &self.radio)?,
            newspaper: parse_channel("Газета", &self.newspaper)?,
        })
    }
}

fn parse_channel(label: &str, raw: &str) -> Result<f64, FormError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FormError::Validation(format!(
            "поле «{label}» должно быть числом, получено {:?}",
            raw.trim()
        ))),
    }
}

/// JSON body of a single-value prediction. Keys are the backend's channel names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValuePredictionRequest {
    #[serde(rename = "Телевиденье")]
    pub tv: f64,
    #[serde(rename = "Радио")]
    pub radio: f64,
    #[serde(rename = "Газета")]
    pub newspaper: f64,
}

/// A file picked in the upload form.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValuePrediction {
    pub prediction: f64,
    pub exchange_rate: f64,
    pub prediction_rub: f64,
}

impl ValuePrediction {
    pub fn validate(self) -> Result<Self, FormError> {
        let fields = [
            ("prediction", self.prediction),
            ("exchange_rate", self.exchange_rate),
            ("prediction_rub", self.prediction_rub),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(FormError::Schema(format!("{name} is not a finite number")));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilePrediction {
    #[serde(default)]
    pub actual: Option<Vec<f64>>,
    pub predictions: Vec<f64>,
    pub correlation_plot: String,
    pub prediction_plot: String,
    #[serde(default)]
    pub result_file: Option<String>,
}

impl FilePrediction {
    pub fn validate(self) -> Result<Self, FormError> {
        if let Some(actual) = &self.actual {
            if actual.len() != self.predictions.len() {
                return Err(FormError::Schema(format!(
                    "actual has {} values but predictions has {}",
                    actual.len(),
                    self.predictions.len()
                )));
            }
        }
        if matches!(&self.result_file, Some(token) if token.trim().is_empty()) {
            return Err(FormError::Schema("result_file is empty".to_string()));
        }
        Ok(self)
    }
}

/// Body of a non-success backend response.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
