use crate::error::{Severity, ValidationIssue};
use crate::interaction::visibility::ActivationPolicy;
use log::{error, info, warn};

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://markwise.app"
}

pub const EMAIL_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const CONTACT_ADDRESS: &str = "hello@markwise.app";

/// Email delivery settings baked in at build time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmailConfig {
    pub public_key: Option<&'static str>,
    pub service_id: Option<&'static str>,
    pub contact_template: Option<&'static str>,
    pub demo_template: Option<&'static str>,
}

impl EmailConfig {
    pub fn from_build_env() -> Self {
        Self {
            public_key: option_env!("MARKWISE_EMAIL_PUBLIC_KEY"),
            service_id: option_env!("MARKWISE_EMAIL_SERVICE_ID"),
            contact_template: option_env!("MARKWISE_EMAIL_TEMPLATE_CONTACT"),
            demo_template: option_env!("MARKWISE_EMAIL_TEMPLATE_DEMO"),
        }
    }

    /// Lists every problem with the configuration. Never fails.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        let required = [
            ("MARKWISE_EMAIL_PUBLIC_KEY", self.public_key),
            ("MARKWISE_EMAIL_SERVICE_ID", self.service_id),
            ("MARKWISE_EMAIL_TEMPLATE_CONTACT", self.contact_template),
        ];
        for (field, value) in required {
            match value.map(str::trim) {
                None => issues.push(ValidationIssue {
                    field,
                    message: "not set; contact form falls back to mailto".to_string(),
                    severity: Severity::Error,
                }),
                Some("") => issues.push(ValidationIssue {
                    field,
                    message: "set but empty".to_string(),
                    severity: Severity::Error,
                }),
                Some(_) => {}
            }
        }

        if self.demo_template.map(str::trim).unwrap_or("").is_empty() {
            issues.push(ValidationIssue {
                field: "MARKWISE_EMAIL_TEMPLATE_DEMO",
                message: "not set; demo requests use the contact template".to_string(),
                severity: Severity::Warning,
            });
        }

        if let Some(service) = self.service_id {
            if !service.trim().is_empty() && !service.starts_with("service_") {
                issues.push(ValidationIssue {
                    field: "MARKWISE_EMAIL_SERVICE_ID",
                    message: format!("'{}' does not look like a service id", service),
                    severity: Severity::Warning,
                });
            }
        }

        issues
    }

    /// True when messages can be sent through the email API.
    pub fn is_usable(&self) -> bool {
        !self.validate().iter().any(|i| i.severity == Severity::Error)
    }
}

/// Tie-break for the feature showcase, set with `MARKWISE_ACTIVATION_POLICY`.
pub fn activation_policy() -> ActivationPolicy {
    parse_activation_policy(option_env!("MARKWISE_ACTIVATION_POLICY"))
}

fn parse_activation_policy(value: Option<&str>) -> ActivationPolicy {
    match value.map(str::trim) {
        None | Some("") | Some("first-visible") => ActivationPolicy::FirstVisible,
        Some("last-entered") => ActivationPolicy::LastEntered,
        Some(other) => {
            warn!("unknown activation policy '{}', using first-visible", other);
            ActivationPolicy::FirstVisible
        }
    }
}

/// Logs configuration problems at startup instead of failing.
pub fn report_config(config: &EmailConfig) {
    let issues = config.validate();
    if issues.is_empty() {
        info!("Email configuration OK");
        return;
    }
    for issue in issues {
        match issue.severity {
            Severity::Error => error!("{}", issue),
            Severity::Warning => warn!("{}", issue),
        }
    }
}
