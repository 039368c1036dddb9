use crate::components::contact_form::ContactForm;
use crate::contact::InquiryKind;
use yew::prelude::*;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <div class="contact-page">
            <section class="contact-intro">
                <h1>{"Talk to us"}</h1>
                <p>
                    {"Book a 20-minute demo with your own rubric and a few anonymised essays, or just ask a question. A former teacher on our team will reply."}
                </p>
            </section>
            <ContactForm initial_kind={InquiryKind::Demo} />
            <style>
                {r#"
                .contact-page {
                    min-height: 100vh;
                    padding: 120px 6vw 4rem;
                    background: #0b0d12;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .contact-intro {
                    color: #c7d0dc;
                }
                .contact-intro h1 {
                    color: #ffffff;
                }
                @media (max-width: 900px) {
                    .contact-page {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
