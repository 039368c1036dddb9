use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    /// A component could not produce its markup.
    #[error("failed to render {component}: {message}")]
    Render { component: String, message: String },

    #[error("dom error: {0}")]
    Dom(String),

    #[error("email delivery failed: {0}")]
    Email(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl SiteError {
    pub fn render(component: impl Into<String>, message: impl Into<String>) -> Self {
        SiteError::Render {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single problem found while validating build-time configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
    pub severity: Severity,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.severity, self.message, self.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_display() {
        let err = SiteError::render("RoiChart", "canvas context missing");
        assert_eq!(err.to_string(), "failed to render RoiChart: canvas context missing");
    }

    #[test]
    fn validation_issue_display() {
        let issue = ValidationIssue {
            field: "MARKWISE_EMAIL_PUBLIC_KEY",
            message: "missing".to_string(),
            severity: Severity::Error,
        };
        assert_eq!(issue.to_string(), "error: missing (MARKWISE_EMAIL_PUBLIC_KEY)");
    }
}
