//! Markup for the two result containers.
//!
//! Every function here is pure: response in, HTML fragment out. Callers own
//! the decision of where the fragment goes.

use crate::client::push_download_segments;
use crate::errors::FormError;
use crate::models::{FilePrediction, ValuePrediction};
use reqwest::Url;
use std::fmt::Write;

const PAGE_ORIGIN: &str = "http://localhost/";

pub fn render_value_result(result: &ValuePrediction) -> String {
    format!(
        "<h3>Результат прогноза:</h3>\n\
         <p>Прогнозируемый объем продаж: <strong>{:.2}$</strong></p>\n\
         <p>В рублях (курс {}): <strong>{:.2}₽</strong></p>",
        result.prediction, result.exchange_rate, result.prediction_rub
    )
}

pub fn render_error(err: &FormError) -> String {
    format!(r#"<div class="error">Ошибка: {}</div>"#, html_escape(&err.to_string()))
}

/// One row of the predictions table. `actual` is absent when the backend
/// did not send the actual series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    pub number: usize,
    pub actual: Option<f64>,
    pub predicted: f64,
}

impl TableRow {
    pub fn cells(&self) -> Vec<String> {
        let mut cells = vec![self.number.to_string()];
        if let Some(actual) = self.actual {
            cells.push(format!("{actual:.2}"));
        }
        cells.push(format!("{:.2}", self.predicted));
        cells
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionTable {
    pub with_actual: bool,
    pub rows: Vec<TableRow>,
}

impl PredictionTable {
    pub fn from_response(result: &FilePrediction) -> Self {
        let actual = result.actual.as_deref();
        let rows = result
            .predictions
            .iter()
            .enumerate()
            .map(|(index, predicted)| TableRow {
                number: index + 1,
                actual: actual.and_then(|values| values.get(index).copied()),
                predicted: *predicted,
            })
            .collect();

        Self {
            with_actual: actual.is_some(),
            rows,
        }
    }

    pub fn headers(&self) -> Vec<&'static str> {
        if self.with_actual {
            vec!["№", "Фактические продажи ($)", "Прогноз продаж ($)"]
        } else {
            vec!["№", "Прогноз продаж ($)"]
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from(
            "<h3>Результаты прогнозирования</h3>\n<div class=\"table-responsive\">\n<table class=\"predictions-table\">\n<thead><tr>",
        );
        for header in self.headers() {
            let _ = write!(html, "<th>{header}</th>");
        }
        html.push_str("</tr></thead>\n<tbody>\n");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row.cells() {
                let _ = write!(html, "<td>{cell}</td>");
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n</table>\n</div>");
        html
    }
}

pub fn render_file_result(result: &FilePrediction) -> String {
    let mut html = format!(
        "<div class=\"plots-container\">\n\
         <img class=\"plot-image\" alt=\"Матрица корреляции\" src=\"{}\">\n\
         <img class=\"plot-image\" alt=\"Фактические vs прогнозируемые продажи\" src=\"{}\">\n\
         </div>\n",
        html_escape(&result.correlation_plot),
        html_escape(&result.prediction_plot)
    );
    html.push_str(&PredictionTable::from_response(result).to_html());
    if let Some(token) = &result.result_file {
        let _ = write!(
            html,
            "\n<a class=\"download-btn\" href=\"{}\">Скачать результаты CSV</a>",
            html_escape(&download_path(token))
        );
    }
    html
}

/// Page-relative path of the download control for `token`.
pub fn download_path(token: &str) -> String {
    let Ok(mut url) = Url::parse(PAGE_ORIGIN) else {
        return String::from("/download/");
    };
    push_download_segments(&mut url, token);
    url.path().to_string()
}

pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
