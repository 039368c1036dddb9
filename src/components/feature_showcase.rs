use crate::interaction::hooks::use_scroll_tracker;
use yew::prelude::*;

pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub points: &'static [&'static str],
    /// Background hue (degrees) while this feature is in focus.
    pub hue: f64,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        id: "rubric-scoring",
        title: "Scores that follow your rubric",
        summary: "Upload the rubric you already use. Every criterion gets a score and a sentence explaining it.",
        points: &[
            "Analytic and holistic rubrics",
            "Weighting per criterion",
            "Calibrated on your first ten essays",
        ],
        hue: 210.0,
    },
    Feature {
        id: "inline-feedback",
        title: "Feedback written where it matters",
        summary: "Comments are anchored to the sentences they are about, in a tone you choose.",
        points: &[
            "Encouraging, neutral or direct tone",
            "Grammar notes kept separate from argument notes",
            "Edit any comment before it goes out",
        ],
        hue: 160.0,
    },
    Feature {
        id: "integrity-signals",
        title: "Integrity signals, not accusations",
        summary: "Passages that resemble known sources or generated text are flagged for you to look at.",
        points: &[
            "Source overlap with links",
            "Writing-style drift across a student's history",
            "Nothing is shown to students automatically",
        ],
        hue: 28.0,
    },
    Feature {
        id: "gradebook-sync",
        title: "Straight into your gradebook",
        summary: "Approved grades sync to the LMS you already run, with feedback attached.",
        points: &[
            "Canvas, Google Classroom and Schoology",
            "CSV export for everything else",
            "Per-section release dates",
        ],
        hue: 280.0,
    },
];

pub fn hue_for(feature_id: &str) -> Option<f64> {
    FEATURES.iter().find(|f| f.id == feature_id).map(|f| f.hue)
}

#[function_component(FeatureShowcase)]
pub fn feature_showcase() -> Html {
    let regions = use_memo(|_| FEATURES.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(), ());
    let labels = use_memo(|_| FEATURES.iter().map(|f| f.id.to_string()).collect::<Vec<_>>(), ());
    let active = use_scroll_tracker((*regions).clone(), (*labels).clone());

    html! {
        <section id="features" class="feature-showcase">
            <h2>{"Everything a grading weekend used to take"}</h2>
            <div class="feature-cards">
                {
                    FEATURES.iter().enumerate().map(|(index, feature)| {
                        let is_active = active == Some(index);
                        html! {
                            <article
                                key={feature.id}
                                ref={regions[index].clone()}
                                class={classes!("feature-card", is_active.then(|| "active"))}
                                data-feature={feature.id}
                            >
                                <span class="feature-index">{ format!("0{}", index + 1) }</span>
                                <h3>{ feature.title }</h3>
                                <p>{ feature.summary }</p>
                                <ul class="feature-list">
                                    { for feature.points.iter().map(|point| html! { <li>{ *point }</li> }) }
                                </ul>
                            </article>
                        }
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .feature-showcase {
                    position: relative;
                    z-index: 1;
                    padding: 6rem 6vw;
                }
                .feature-showcase h2 {
                    color: #ffffff;
                    font-size: 2.2rem;
                    margin-bottom: 3rem;
                }
                .feature-cards {
                    display: flex;
                    flex-direction: column;
                    gap: 30vh;
                    max-width: 40rem;
                }
                .feature-card {
                    padding: 2rem;
                    border-radius: 14px;
                    background: rgba(20, 24, 33, 0.7);
                    border: 1px solid rgba(255, 255, 255, 0.06);
                    color: #c7d0dc;
                    opacity: 0.45;
                    transform: translateY(12px);
                    transition: opacity 0.4s ease, transform 0.4s ease, border-color 0.4s ease;
                }
                .feature-card.active {
                    opacity: 1;
                    transform: none;
                    border-color: rgba(120, 170, 255, 0.45);
                }
                .feature-card h3 {
                    color: #ffffff;
                }
                .feature-index {
                    font-family: monospace;
                    color: #7aa7ff;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn feature_ids_are_unique() {
        let ids: HashSet<_> = FEATURES.iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), FEATURES.len());
    }

    #[test]
    fn hue_lookup() {
        assert_eq!(hue_for("inline-feedback"), Some(160.0));
        assert_eq!(hue_for("pricing"), None);
    }
}
