//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Main quadrant container missing from the page registry
    #[error("Main quadrant container not found")]
    #[allow(dead_code)]
    MainContainerMissing,

    /// Section detail container missing from the page registry
    #[error("Target container not found: {id}")]
    #[allow(dead_code)]
    SectionContainerMissing { id: String },

    /// View switch requested while another is in flight
    #[error("View switch already in flight")]
    #[allow(dead_code)]
    TransitionInFlight,

    /// Navigation disabled after a failed initialization
    #[error("Navigation is disabled")]
    #[allow(dead_code)]
    NavigationDisabled,

    /// Generic state error
    #[error("State error: {0}")]
    #[allow(dead_code)]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::MainContainerMissing;
        assert!(error.to_string().contains("Main quadrant container"));

        let error = StateError::SectionContainerMissing {
            id: "branding-sub".to_string(),
        };
        assert!(error.to_string().contains("Target container not found"));
        assert!(error.to_string().contains("branding-sub"));

        let error = StateError::TransitionInFlight;
        assert!(error.to_string().contains("already in flight"));

        let error = StateError::NavigationDisabled;
        assert!(error.to_string().contains("disabled"));

        let error = StateError::Other("Generic error".to_string());
        assert!(error.to_string().contains("Generic error"));
    }
}
