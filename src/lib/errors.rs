use std::fmt;

/// Message used when an error response carries no parseable JSON body.
pub const REQUEST_FAILED: &str = "Request failed";

/// Errors raised outside of local form validation. Validation failures are
/// reported per field through `FieldErrors` and never become an `AppError`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    AuthCallback(String),
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// Single-line message shown at the form level after a failed submit.
    ///
    /// Server-provided messages are shown verbatim; `fallback` replaces the
    /// placeholder the client produces when the server did not send one.
    pub fn form_message(&self, fallback: &str) -> String {
        match self {
            AppError::Http { status, message } => {
                if message.is_empty()
                    || message == REQUEST_FAILED
                    || *message == format!("HTTP {status}")
                {
                    fallback.to_string()
                } else {
                    message.clone()
                }
            }
            AppError::Network(message)
            | AppError::Timeout(message)
            | AppError::AuthCallback(message)
            | AppError::Config(message) => message.clone(),
            AppError::Parse(_) | AppError::Serialization(_) => "An error occurred".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::AuthCallback(message) => {
                write!(formatter, "Authentication failed: {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn form_message_prefers_server_message() {
        let err = AppError::Http {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.form_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn form_message_falls_back_without_server_message() {
        let err = AppError::Http {
            status: 500,
            message: "HTTP 500".to_string(),
        };
        assert_eq!(err.form_message("Login failed"), "Login failed");
    }

    #[test]
    fn form_message_falls_back_for_unparseable_body() {
        let err = AppError::Http {
            status: 502,
            message: super::REQUEST_FAILED.to_string(),
        };
        assert_eq!(err.form_message("Registration failed"), "Registration failed");
    }

    #[test]
    fn form_message_hides_decode_details() {
        let err = AppError::Parse("expected value at line 1".to_string());
        assert_eq!(err.form_message("Login failed"), "An error occurred");
    }

    #[test]
    fn transport_messages_are_shown_as_is() {
        let timeout = AppError::Timeout("Request timed out. Please try again.".to_string());
        assert_eq!(
            timeout.form_message("Login failed"),
            "Request timed out. Please try again."
        );

        let storage = AppError::Config("Local storage is unavailable.".to_string());
        assert_eq!(
            storage.form_message("Login failed"),
            "Local storage is unavailable."
        );
    }

    #[test]
    fn display_includes_status() {
        let err = AppError::Http {
            status: 404,
            message: "Not found".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (404): Not found");
    }
}
