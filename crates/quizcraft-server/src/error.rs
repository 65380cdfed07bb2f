use quizcraft_core::HttpError;

/// Log a failed request; user mistakes stay at debug
pub(crate) fn log_failure<E: HttpError + ?Sized>(endpoint: &'static str, error: &E) {
    let status = error.status_code();

    if error.is_user_error() {
        tracing::debug!(endpoint, %status, error_type = error.error_type(), error = %error, "request rejected");
    } else {
        tracing::error!(endpoint, %status, error_type = error.error_type(), error = %error, "request failed");
    }
}
