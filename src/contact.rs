use crate::config::{EmailConfig, CONTACT_ADDRESS};
use crate::error::SiteError;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryKind {
    #[default]
    General,
    Demo,
}

impl InquiryKind {
    pub fn label(self) -> &'static str {
        match self {
            InquiryKind::General => "General question",
            InquiryKind::Demo => "Book a demo",
        }
    }

    fn subject(self) -> &'static str {
        match self {
            InquiryKind::General => "Question about Markwise",
            InquiryKind::Demo => "Markwise demo request",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactParams {
    pub from_name: String,
    pub reply_to: String,
    pub school: String,
    pub message: String,
    pub kind: InquiryKind,
}

impl ContactParams {
    /// Blank form preset to `kind`.
    pub fn empty(kind: InquiryKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// First problem with the form, phrased for the user.
    pub fn validate(&self) -> Result<(), String> {
        if self.from_name.trim().is_empty() {
            return Err("Please tell us your name.".to_string());
        }
        let email = self.reply_to.trim();
        let valid_email = email
            .split_once('@')
            .map_or(false, |(user, domain)| !user.is_empty() && domain.contains('.') && !domain.ends_with('.'));
        if !valid_email {
            return Err("Please enter a valid email address.".to_string());
        }
        if self.kind == InquiryKind::General && self.message.trim().is_empty() {
            return Err("Please include a message.".to_string());
        }
        Ok(())
    }
}

/// Body of a send request to the email API.
#[derive(Debug, PartialEq, Serialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: ContactParams,
}

impl EmailRequest {
    pub fn build(config: &EmailConfig, params: ContactParams) -> Result<Self, SiteError> {
        let missing = |field: &str| SiteError::Config(format!("{} is not configured", field));

        let service_id = config.service_id.ok_or_else(|| missing("email service id"))?;
        let user_id = config.public_key.ok_or_else(|| missing("email public key"))?;
        let template_id = match params.kind {
            InquiryKind::Demo => config.demo_template.or(config.contact_template),
            InquiryKind::General => config.contact_template,
        }
        .ok_or_else(|| missing("email template"))?;

        Ok(Self {
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            user_id: user_id.to_string(),
            template_params: params,
        })
    }
}

/// `mailto:` fallback used when the email API is not configured.
pub fn mailto_link(params: &ContactParams) -> String {
    let mut body = format!("{}\n\n{}", params.message.trim(), params.from_name.trim());
    if !params.school.trim().is_empty() {
        body.push_str(&format!(", {}", params.school.trim()));
    }
    format!(
        "mailto:{}?subject={}&body={}",
        CONTACT_ADDRESS,
        urlencoding::encode(params.kind.subject()),
        urlencoding::encode(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(kind: InquiryKind) -> ContactParams {
        ContactParams {
            from_name: "Ada Park".to_string(),
            reply_to: "ada@school.edu".to_string(),
            school: "Lincoln High".to_string(),
            message: "Can we pilot this in English 10?".to_string(),
            kind,
        }
    }

    fn config() -> EmailConfig {
        EmailConfig {
            public_key: Some("pk_1"),
            service_id: Some("service_1"),
            contact_template: Some("template_contact"),
            demo_template: Some("template_demo"),
        }
    }

    #[test]
    fn form_validation() {
        assert_eq!(params(InquiryKind::General).validate(), Ok(()));

        let mut p = params(InquiryKind::General);
        p.from_name = "  ".into();
        assert!(p.validate().is_err());

        for bad in ["", "ada", "@school.edu", "ada@school", "ada@school."] {
            let mut p = params(InquiryKind::General);
            p.reply_to = bad.into();
            assert_eq!(p.validate(), Err("Please enter a valid email address.".to_string()), "{}", bad);
        }

        let mut p = params(InquiryKind::General);
        p.message.clear();
        assert!(p.validate().is_err());

        let mut p = params(InquiryKind::Demo);
        p.message.clear();
        assert_eq!(p.validate(), Ok(()));
    }

    #[test]
    fn emptied_form_keeps_its_inquiry_kind() {
        let cleared = ContactParams::empty(InquiryKind::Demo);
        assert_eq!(cleared.kind, InquiryKind::Demo);
        assert!(cleared.from_name.is_empty() && cleared.message.is_empty());

        let request = EmailRequest::build(
            &config(),
            ContactParams {
                from_name: "Ada Park".into(),
                reply_to: "ada@school.edu".into(),
                ..cleared
            },
        )
        .unwrap();
        assert_eq!(request.template_id, "template_demo");
    }

    #[test]
    fn request_uses_template_for_kind() {
        let general = EmailRequest::build(&config(), params(InquiryKind::General)).unwrap();
        assert_eq!(general.template_id, "template_contact");
        assert_eq!(general.user_id, "pk_1");

        let demo = EmailRequest::build(&config(), params(InquiryKind::Demo)).unwrap();
        assert_eq!(demo.template_id, "template_demo");
    }

    #[test]
    fn demo_falls_back_to_contact_template() {
        let config = EmailConfig {
            demo_template: None,
            ..config()
        };
        let demo = EmailRequest::build(&config, params(InquiryKind::Demo)).unwrap();
        assert_eq!(demo.template_id, "template_contact");
    }

    #[test]
    fn missing_config_is_reported() {
        let err = EmailRequest::build(&EmailConfig::default(), params(InquiryKind::General)).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn request_serializes_to_api_shape() {
        let request = EmailRequest::build(&config(), params(InquiryKind::Demo)).unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["service_id"], "service_1");
        assert_eq!(value["template_params"]["reply_to"], "ada@school.edu");
        assert_eq!(value["template_params"]["kind"], "demo");
    }

    #[test]
    fn mailto_link_is_encoded() {
        let link = mailto_link(&params(InquiryKind::Demo));
        assert!(link.starts_with("mailto:hello@markwise.app?subject=Markwise%20demo%20request&body="));
        assert!(!link.contains(' '));
        assert!(link.contains("Lincoln%20High"));
    }
}
