//! CLI response formatting and output.
//!
//! Provides JSON envelope, printing, and exit code mapping.

use rebrand::error::Hint;
use rebrand::{Error, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retryable: Option<bool>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
                retryable: err.retryable,
            }),
        }
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    use std::io::{self, Write};

    let payload = response.to_json()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", payload) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

fn print_result<T: Serialize>(result: Result<T>) -> Result<()> {
    match result {
        Ok(data) => print_response(&CliResponse::success(data)),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    }
}

pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(
                    err.to_string(),
                    Some("serialize command output".to_string()),
                )),
                1,
            ),
        },
        Err(err) => (Err(err), 1),
    }
}

pub fn print_json_result(result: Result<serde_json::Value>) {
    // Printing failures here have no further channel; ignore them.
    let _ = print_result(result);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_carries_code_and_hints() {
        let err = Error::validation_invalid_argument("file", "Path must not be empty")
            .with_hint("Pass a file path");

        let response = CliResponse::<()>::from_error(&err);
        assert!(!response.success);

        let error = response.error.unwrap();
        assert_eq!(error.code, "validation.invalid_argument");
        assert_eq!(error.hints.unwrap().len(), 1);
    }

    #[test]
    fn success_envelope_serializes_data() {
        let response = CliResponse::success(serde_json::json!({ "ok": true }));
        let json = response.to_json().unwrap();

        assert!(json.contains("\"success\": true"));
        assert!(json.contains("\"ok\": true"));
    }

    #[test]
    fn map_cmd_result_preserves_exit_code() {
        let result: Result<(serde_json::Value, i32)> = Ok((serde_json::json!({}), 0));
        let (value, exit_code) = map_cmd_result_to_json(result);
        assert!(value.is_ok());
        assert_eq!(exit_code, 0);

        let failed: Result<(serde_json::Value, i32)> =
            Err(Error::internal_io("boom", None));
        let (value, exit_code) = map_cmd_result_to_json(failed);
        assert!(value.is_err());
        assert_eq!(exit_code, 1);
    }
}
