use yew::prelude::*;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{"Privacy"}</h1>
                <section>
                    <h2>{"This website"}</h2>
                    <p>{"The marketing site sets no tracking cookies. If you use the contact form, your name, email, school and message are sent to our email provider so we can reply, and nothing else."}</p>
                </section>
                <section>
                    <h2>{"Student work"}</h2>
                    <p>{"Essays submitted through the product are processed only to produce scores and feedback for the teacher who uploaded them. They are not used to train models and are deleted on the schedule your district sets."}</p>
                </section>
                <section>
                    <h2>{"Questions"}</h2>
                    <p>{"Email privacy@markwise.app and we'll answer within five school days."}</p>
                </section>
            </div>
            <style>
                {r#"
                .legal-content {
                    min-height: 100vh;
                    background: #0b0d12;
                    padding: 120px 2rem 4rem;
                    color: #ffffff;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .legal-content > div {
                    background: rgba(20, 24, 33, 0.7);
                    border: 1px solid rgba(120, 170, 255, 0.1);
                    border-radius: 16px;
                    padding: 3rem;
                    max-width: 800px;
                }
                .legal-content section {
                    margin: 1.5rem 0;
                    color: #c7d0dc;
                }
                "#}
            </style>
        </div>
    }
}
