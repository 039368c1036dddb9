use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoStage {
    Essay,
    Highlights,
    Scores,
    Feedback,
    Reset,
}

impl DemoStage {
    /// How long the stage stays on screen before moving on.
    pub fn hold_ms(self) -> u32 {
        match self {
            DemoStage::Essay => 1_800,
            DemoStage::Highlights => 2_200,
            DemoStage::Scores => 2_400,
            DemoStage::Feedback => 5_000,
            DemoStage::Reset => 600,
        }
    }

    pub fn next(self) -> Self {
        match self {
            DemoStage::Essay => DemoStage::Highlights,
            DemoStage::Highlights => DemoStage::Scores,
            DemoStage::Scores => DemoStage::Feedback,
            DemoStage::Feedback => DemoStage::Reset,
            DemoStage::Reset => DemoStage::Essay,
        }
    }

    fn shows_highlights(self) -> bool {
        matches!(self, DemoStage::Highlights | DemoStage::Scores | DemoStage::Feedback)
    }

    fn shows_scores(self) -> bool {
        matches!(self, DemoStage::Scores | DemoStage::Feedback)
    }
}

const ESSAY: &[(&str, Option<&str>)] = &[
    ("The Industrial Revolution changed how families lived. ", None),
    ("Factories was built near rivers ", Some("grammar")),
    ("so that machines could use water power. ", None),
    ("Because of this, many people moved to cities, which proves technology is always good. ", Some("argument")),
    ("Overall, the changes were very big.", Some("style")),
];

const SCORES: &[(&str, u8, u8)] = &[
    ("Thesis", 3, 4),
    ("Evidence", 2, 4),
    ("Organisation", 3, 4),
    ("Conventions", 2, 4),
];

const FEEDBACK: &str = "Clear opening and a sensible order of ideas. Your claim that technology is \"always good\" needs evidence from the sources; try comparing living conditions before and after the move to cities. Watch subject-verb agreement in sentence two.";

#[function_component(GradingDemo)]
pub fn grading_demo() -> Html {
    let stage = use_state(|| DemoStage::Essay);

    {
        let setter = stage.setter();
        use_effect_with_deps(
            move |stage: &DemoStage| {
                let next = stage.next();
                let timeout = Timeout::new(stage.hold_ms(), move || setter.set(next));
                move || drop(timeout)
            },
            *stage,
        );
    }

    let current = *stage;

    html! {
        <section class="grading-demo" aria-label="Grading walkthrough">
            <h2>{"Watch one essay go from inbox to graded"}</h2>
            <div class={classes!("demo-window", (current == DemoStage::Reset).then(|| "fading"))}>
                <div class="demo-essay">
                    {
                        ESSAY.iter().map(|(text, mark)| {
                            let class = match mark {
                                Some(kind) if current.shows_highlights() => classes!("mark", format!("mark-{}", kind)),
                                _ => classes!(),
                            };
                            html! { <span class={class}>{ *text }</span> }
                        }).collect::<Html>()
                    }
                </div>
                <div class={classes!("demo-scores", current.shows_scores().then(|| "visible"))}>
                    {
                        SCORES.iter().map(|(criterion, score, out_of)| html! {
                            <div class="score-row">
                                <span>{ *criterion }</span>
                                <span class="score">{ format!("{}/{}", score, out_of) }</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class={classes!("demo-feedback", (current == DemoStage::Feedback).then(|| "visible"))}>
                    <p>{ FEEDBACK }</p>
                </div>
            </div>
            <style>
                {r#"
                .grading-demo {
                    position: relative;
                    z-index: 1;
                    padding: 6rem 6vw;
                    color: #c7d0dc;
                }
                .grading-demo h2 {
                    color: #ffffff;
                }
                .demo-window {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 1.5rem;
                    background: rgba(15, 18, 26, 0.85);
                    border-radius: 16px;
                    padding: 2rem;
                    transition: opacity 0.5s ease;
                }
                .demo-window.fading {
                    opacity: 0;
                }
                .demo-essay {
                    line-height: 1.8;
                    font-family: Georgia, serif;
                }
                .mark {
                    border-bottom: 2px solid transparent;
                    animation: fadeIn 0.6s ease forwards;
                }
                .mark-grammar { border-color: #ffb347; }
                .mark-argument { border-color: #ff6b6b; }
                .mark-style { border-color: #7aa7ff; }
                .demo-scores, .demo-feedback {
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .demo-scores.visible, .demo-feedback.visible {
                    opacity: 1;
                }
                .demo-feedback {
                    grid-column: 1 / -1;
                    border-left: 3px solid #7aa7ff;
                    padding-left: 1rem;
                }
                .score-row {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.4rem 0;
                }
                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                "#}
            </style>
        </section>
    }
}
