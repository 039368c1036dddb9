use crate::config;
use serde_json::{json, Value};
use yew::prelude::*;

const SCHEMA_CONTEXT: &str = "https://schema.org";

pub fn organization() -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "name": "Markwise",
        "url": config::get_site_url(),
        "logo": format!("{}/assets/logo.png", config::get_site_url()),
        "contactPoint": {
            "@type": "ContactPoint",
            "email": config::CONTACT_ADDRESS,
            "contactType": "sales"
        }
    })
}

pub fn software_application() -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "SoftwareApplication",
        "name": "Markwise",
        "applicationCategory": "EducationalApplication",
        "operatingSystem": "Web",
        "description": "AI essay grading with rubric-aligned feedback for teachers and schools",
        "url": config::get_site_url(),
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD",
            "description": "Free pilot for one department"
        },
        "featureList": [
            "Rubric-aligned scoring",
            "Inline feedback comments",
            "Plagiarism and AI-writing signals",
            "Gradebook export"
        ]
    })
}

pub fn faq_page(items: &[(&str, &str)]) -> Value {
    let entities: Vec<Value> = items
        .iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": answer
                }
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": entities
    })
}

#[derive(Properties, PartialEq)]
pub struct JsonLdProps {
    pub data: Value,
}

/// Emits a `<script type="application/ld+json">` block for crawlers.
#[function_component(JsonLd)]
pub fn json_ld(props: &JsonLdProps) -> Html {
    html! {
        <script type="application/ld+json">{ props.data.to_string() }</script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_schema_root(value: &Value, expected_type: &str) {
        assert_eq!(value["@context"], SCHEMA_CONTEXT);
        assert_eq!(value["@type"], expected_type);
        let text = value.to_string();
        let reparsed: Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(&reparsed, value);
    }

    #[test]
    fn organization_block() {
        let org = organization();
        assert_schema_root(&org, "Organization");
        assert_eq!(org["contactPoint"]["@type"], "ContactPoint");
    }

    #[test]
    fn software_application_block() {
        let app = software_application();
        assert_schema_root(&app, "SoftwareApplication");
        assert_eq!(app["offers"]["@type"], "Offer");
        assert!(app["featureList"].as_array().map_or(false, |f| !f.is_empty()));
    }

    #[test]
    fn faq_block_carries_questions_and_answers() {
        let faq = faq_page(&[("Is it \"fair\"?", "Yes </script> really")]);
        assert_schema_root(&faq, "FAQPage");
        let entity = &faq["mainEntity"][0];
        assert_eq!(entity["@type"], "Question");
        assert_eq!(entity["name"], "Is it \"fair\"?");
        assert_eq!(entity["acceptedAnswer"]["text"], "Yes </script> really");
    }
}
