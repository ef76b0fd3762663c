//! CLI response formatting and output.
//!
//! Provides JSON envelope, text error printing, and exit code mapping.

use propfix::error::Hint;
use propfix::{Error, ErrorCode, Result};
use serde::Serialize;
use std::io::{self, Write};

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
            }),
        }
    }
}

fn write_output<W: Write>(out: &mut W, text: &str) -> Result<()> {
    match out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()), // Exit gracefully on SIGPIPE
        Err(e) => Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        )),
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    let payload = response.to_json()?;
    print_text(&format!("{}\n", payload))
}

/// Plain text on stdout; a closed pipe is not an error.
pub fn print_text(text: &str) -> Result<()> {
    write_output(&mut io::stdout().lock(), text)
}

pub fn print_json_result(result: Result<serde_json::Value>) -> Result<()> {
    match result {
        Ok(data) => print_response(&CliResponse::success(data)),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    }
}

/// Human-readable error on stderr for text mode.
pub fn print_text_error(err: &Error) {
    let problem = err
        .details
        .get("problem")
        .or_else(|| err.details.get("error"))
        .and_then(serde_json::Value::as_str);

    match problem {
        Some(problem) => eprintln!("Error: {}: {}", err.message, problem),
        None => eprintln!("Error: {}", err.message),
    }
    for hint in &err.hints {
        eprintln!("Hint: {}", hint.message);
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
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ConfigInvalidJson
        | ErrorCode::ConfigInvalidValue
        | ErrorCode::ValidationInvalidArgument => 2,

        ErrorCode::InternalIoError | ErrorCode::InternalJsonError => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_includes_code_and_hints() {
        let err = Error::validation_invalid_argument("root", "Directory 'x' does not exist", None)
            .with_hint("Pass the directory that contains the component sources");

        let json = CliResponse::<()>::from_error(&err).to_json().unwrap();

        assert!(json.contains("\"success\": false"));
        assert!(json.contains("\"code\": \"validation.invalid_argument\""));
        assert!(json.contains("\"field\": \"root\""));
        assert!(json.contains("Pass the directory"));
    }

    #[test]
    fn validation_errors_map_to_exit_code_2() {
        let err = Error::validation_invalid_argument("root", "bad", None);
        let (value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
        assert!(value.is_err());
        assert_eq!(exit_code, 2);
    }

    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(self.0, "write failed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn broken_pipe_is_not_an_error() {
        let mut out = FailingWriter(io::ErrorKind::BrokenPipe);
        assert!(write_output(&mut out, "Fixed 1 files\n").is_ok());
    }

    #[test]
    fn other_write_failures_are_io_errors() {
        let mut out = FailingWriter(io::ErrorKind::PermissionDenied);
        let err = write_output(&mut out, "Fixed 1 files\n").unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalIoError);
    }

    #[test]
    fn write_output_passes_text_through() {
        let mut out = Vec::new();
        write_output(&mut out, "Fixed: a.tsx\n").unwrap();
        assert_eq!(out, b"Fixed: a.tsx\n");
    }

    #[test]
    fn io_errors_map_to_exit_code_1() {
        assert_eq!(exit_code_for_error(ErrorCode::InternalIoError), 1);
    }

    #[test]
    fn success_keeps_exit_code() {
        let (value, exit_code) = map_cmd_result_to_json(Ok((serde_json::json!({"n": 1}), 0)));
        assert_eq!(value.unwrap()["n"], 1);
        assert_eq!(exit_code, 0);
    }
}
