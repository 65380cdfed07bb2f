use http::StatusCode;

/// Failure that can be reported to a browser or API caller
///
/// Feature crates implement this for their error enums. Each endpoint
/// picks its own body shape, so only the status and a safe message live
/// here.
pub trait HttpError: std::error::Error {
    fn status_code(&self) -> StatusCode;

    /// Short tag for logs, e.g. `validation_error`
    fn error_type(&self) -> &str;

    /// Message shown to the user; never carries upstream details
    fn client_message(&self) -> String;

    /// Whether the caller can fix this by changing the request
    fn is_user_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}
