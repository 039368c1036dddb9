use crate::config::{self, EmailConfig};
use crate::contact::{mailto_link, ContactParams, EmailRequest, InquiryKind};
use crate::error::SiteError;
use gloo_net::http::Request;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
enum SendStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

async fn send(request: EmailRequest) -> Result<(), SiteError> {
    let response = Request::post(config::EMAIL_API_URL)
        .json(&request)
        .map_err(|e| SiteError::Email(e.to_string()))?
        .send()
        .await
        .map_err(|e| SiteError::Email(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(SiteError::Email(format!("status {}: {}", response.status(), body)))
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub initial_kind: InquiryKind,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let initial_kind = props.initial_kind;
    let form = use_state(move || ContactParams::empty(initial_kind));
    let status = use_state(|| SendStatus::Idle);
    let email_config = use_memo(|_| EmailConfig::from_build_env(), ());

    let on_field = |apply: fn(&mut ContactParams, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let set_name = on_field(|f, v| f.from_name = v);
    let set_email = on_field(|f, v| f.reply_to = v);
    let set_school = on_field(|f, v| f.school = v);
    let set_message = on_field(|f, v| f.message = v);

    let input_value = |cb: Callback<String>| {
        Callback::from(move |e: InputEvent| cb.emit(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    let on_kind = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let kind = if select.value() == "demo" { InquiryKind::Demo } else { InquiryKind::General };
            form.set(ContactParams { kind, ..(*form).clone() });
        })
    };

    let on_message = {
        let set_message = set_message.clone();
        Callback::from(move |e: InputEvent| {
            set_message.emit(e.target_unchecked_into::<HtmlTextAreaElement>().value())
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        let email_config = email_config.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let params = (*form).clone();
            if let Err(message) = params.validate() {
                status.set(SendStatus::Failed(message));
                return;
            }

            if !email_config.is_usable() {
                let link = mailto_link(&params);
                info!("Email API not configured, opening mail client");
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&link);
                }
                return;
            }

            let request = match EmailRequest::build(&email_config, params) {
                Ok(request) => request,
                Err(e) => {
                    warn!("{}", e);
                    status.set(SendStatus::Failed("Sending is unavailable right now.".to_string()));
                    return;
                }
            };

            status.set(SendStatus::Sending);
            let status = status.clone();
            let form = form.clone();
            spawn_local(async move {
                match send(request).await {
                    Ok(()) => {
                        info!("Contact form sent");
                        form.set(ContactParams::empty(initial_kind));
                        status.set(SendStatus::Sent);
                    }
                    Err(e) => {
                        warn!("{}", e);
                        status.set(SendStatus::Failed(format!(
                            "We couldn't send that. Please email {} instead.",
                            config::CONTACT_ADDRESS
                        )));
                    }
                }
            });
        })
    };

    let sending = *status == SendStatus::Sending;

    html! {
        <form class="contact-form" {onsubmit} novalidate=true>
            <label>
                {"What can we help with?"}
                <select onchange={on_kind}>
                    {
                        [InquiryKind::General, InquiryKind::Demo].iter().map(|kind| {
                            let value = if *kind == InquiryKind::Demo { "demo" } else { "general" };
                            html! {
                                <option value={value} selected={form.kind == *kind}>{ kind.label() }</option>
                            }
                        }).collect::<Html>()
                    }
                </select>
            </label>
            <label>
                {"Name"}
                <input type="text" value={form.from_name.clone()} oninput={input_value(set_name)} />
            </label>
            <label>
                {"Work email"}
                <input type="email" value={form.reply_to.clone()} oninput={input_value(set_email)} />
            </label>
            <label>
                {"School or district"}
                <input type="text" value={form.school.clone()} oninput={input_value(set_school)} />
            </label>
            <label>
                { if form.kind == InquiryKind::Demo { "Anything we should know? (optional)" } else { "Message" } }
                <textarea rows="5" value={form.message.clone()} oninput={on_message} />
            </label>
            <button type="submit" class="hero-cta" disabled={sending}>
                { if sending { "Sending..." } else { "Send" } }
            </button>
            {
                match &*status {
                    SendStatus::Sent => html! { <p class="form-success">{"Thanks! We'll reply within one school day."}</p> },
                    SendStatus::Failed(message) => html! { <p class="form-error">{ message.clone() }</p> },
                    SendStatus::Idle | SendStatus::Sending => html! {},
                }
            }
            <style>
                {r#"
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.2rem;
                    max-width: 34rem;
                    color: #c7d0dc;
                }
                .contact-form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }
                .contact-form input, .contact-form select, .contact-form textarea {
                    padding: 0.7rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    background: rgba(20, 24, 33, 0.9);
                    color: #ffffff;
                }
                .form-success { color: #6fd49b; }
                .form-error { color: #ff7b7b; }
                "#}
            </style>
        </form>
    }
}
