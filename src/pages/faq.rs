use crate::seo::{faq_page, JsonLd};
use yew::prelude::*;
use web_sys::MouseEvent;

pub const FAQS: &[(&str, &str)] = &[
    (
        "Does Markwise replace the teacher's judgement?",
        "No. Every score and comment is a draft. Nothing reaches a student until you approve it, and you can change anything first.",
    ),
    (
        "How accurate are the scores?",
        "After calibrating on ten of your own graded essays, Markwise lands within one rubric point of the teacher on most criteria. You can see the agreement rate per criterion in your dashboard.",
    ),
    (
        "Which rubrics are supported?",
        "Analytic and holistic rubrics with up to twelve criteria. Paste one in, upload a PDF, or start from a state-standards template.",
    ),
    (
        "What happens to student writing?",
        "Essays are encrypted in transit and at rest, are never used to train models, and are deleted 90 days after the grading window closes unless your district sets a different policy.",
    ),
    (
        "Does it work with our LMS?",
        "Grades and feedback sync with Canvas, Google Classroom and Schoology. Everything else can import a CSV export.",
    ),
    (
        "How much does it cost?",
        "A full-term pilot for one department is free. District pricing is per teacher per year; book a demo and we'll send a quote.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle} aria-expanded={(*is_open).to_string()}>
                <span class="question-text">{ props.question.clone() }</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{ props.answer.clone() }</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-page">
            <JsonLd data={faq_page(FAQS)} />
            <section class="faq-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"What teachers and IT teams ask before a pilot"}</p>
            </section>

            <section class="faq-section">
                {
                    FAQS.iter().map(|(question, answer)| html! {
                        <FaqItem key={*question} question={*question} answer={*answer} />
                    }).collect::<Html>()
                }
            </section>

            <style>
                {r#"
                .faq-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    position: relative;
                    background: #0b0d12;
                }
                .faq-hero {
                    text-align: center;
                    padding: 4rem 2rem 2rem;
                }
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 0 2rem 4rem;
                }
                .faq-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    background: none;
                    border: none;
                    color: #ffffff;
                    font-size: 1.1rem;
                    padding: 1.2rem 0;
                    cursor: pointer;
                    text-align: left;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    color: #c7d0dc;
                    transition: max-height 0.3s ease;
                }
                .faq-item.open .faq-answer {
                    max-height: 400px;
                }
                "#}
            </style>
        </div>
    }
}
