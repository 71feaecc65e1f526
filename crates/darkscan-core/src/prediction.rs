//! Interpreting the analysis service's response.
//!
//! The service answers `{"prediction": ...}`. The value is opaque to
//! the client and only rendered for display. Besides plain strings the
//! service commonly returns a list of class labels (e.g. `[1]`), which
//! renders the way the page always showed it: elements joined by `,`.

use serde_json::{Number, Value};

use crate::types::{AnalysisError, HttpResponse};

/// A successfully parsed analysis response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// The prediction rendered as display text.
    pub prediction: String,
}

/// Turn a transport response into an [`AnalysisResult`].
///
/// The body of a non-2xx response is never looked at.
///
/// # Errors
///
/// Returns [`AnalysisError::Transport`] for a non-2xx status.
/// Returns [`AnalysisError::ResponseParse`] if the body is not a JSON
/// object, has no `prediction`, or the prediction is `null`, an object,
/// or a list containing objects.
pub fn interpret_response(response: &HttpResponse) -> Result<AnalysisResult, AnalysisError> {
    if !response.is_success() {
        return Err(AnalysisError::Transport {
            status: response.status,
        });
    }

    let body: Value = serde_json::from_str(&response.body)
        .map_err(|e| AnalysisError::ResponseParse(format!("malformed JSON body: {e}")))?;
    let Value::Object(fields) = body else {
        return Err(AnalysisError::ResponseParse(
            "response body is not a JSON object".into(),
        ));
    };

    let value = fields.get("prediction").ok_or_else(|| {
        AnalysisError::ResponseParse("response has no `prediction` field".into())
    })?;

    let prediction = render(value).ok_or_else(|| {
        AnalysisError::ResponseParse(format!("unsupported `prediction` value: {value}"))
    })?;

    Ok(AnalysisResult { prediction })
}

/// Render a top-level prediction value. `null` and objects are rejected.
fn render(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Object(_) => None,
        other => render_element(other),
    }
}

/// Render a value nested inside a list. `null` becomes empty, lists
/// flatten with `,`.
fn render_element(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(render_number(n)),
        Value::Array(items) => items
            .iter()
            .map(render_element)
            .collect::<Option<Vec<_>>>()
            .map(|parts| parts.join(",")),
        Value::Object(_) => None,
    }
}

/// Whole-valued floats drop their fraction (`1.0` -> `1`) and `-0`
/// becomes `0`, matching how the page has always displayed labels.
fn render_number(n: &Number) -> String {
    // f64's Display never uses exponent notation or a trailing `.0`.
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_owned(),
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}
