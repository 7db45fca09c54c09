//! Structured logging helpers for the CRM shell
//!
//! Every event carries an `operation` field so client and server logs can be
//! filtered the same way.

/// Operations that emit structured log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Bootstrap,
    Navigation,
    Placeholder,
    Booking,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Bootstrap => "bootstrap",
            LogOperation::Navigation => "navigation",
            LogOperation::Placeholder => "placeholder",
            LogOperation::Booking => "booking",
        }
    }
}

/// Log that the root tree is about to be mounted
pub fn log_bootstrap_start(mount_point: &str, color_scheme: &str) {
    tracing::info!(
        operation = LogOperation::Bootstrap.as_str(),
        mount_point = mount_point,
        color_scheme = color_scheme,
        "Mounting application"
    );
}

/// Log the unrecoverable startup fault
pub fn log_bootstrap_failure(error: &str) {
    tracing::error!(
        operation = LogOperation::Bootstrap.as_str(),
        error = error,
        "Startup aborted"
    );
}

/// Log a sidebar link click
pub fn log_navigation(label: &str, path: &str) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        label = label,
        path = path,
        "Navigation link followed"
    );
}

/// Log a navigation request that was refused
pub fn log_navigation_rejected(label: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Navigation.as_str(),
        label = label,
        error = error,
        "Navigation link rejected"
    );
}

/// Log an unmatched path rendered through the fallback route
pub fn log_unmatched_path(path: &str) {
    tracing::warn!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        "No route matches path, rendering fallback"
    );
}

/// Log a click on an account affordance that has no behavior yet
pub fn log_placeholder_action(action: &str) {
    tracing::debug!(
        operation = LogOperation::Placeholder.as_str(),
        action = action,
        "Account action is not implemented"
    );
}

/// Log a stored booking registration
pub fn log_booking_registered(id: u64, email: &str) {
    tracing::info!(
        operation = LogOperation::Booking.as_str(),
        person_id = id,
        email = email,
        "Booking registered"
    );
}

/// Log a rejected booking registration
pub fn log_booking_rejected(error: &str) {
    tracing::warn!(
        operation = LogOperation::Booking.as_str(),
        error = error,
        "Booking rejected"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Bootstrap.as_str(), "bootstrap");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::Placeholder.as_str(), "placeholder");
        assert_eq!(LogOperation::Booking.as_str(), "booking");
    }
}
