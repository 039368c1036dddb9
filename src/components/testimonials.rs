use gloo_timers::callback::Interval;
use std::rc::Rc;
use yew::prelude::*;

const ROTATE_EVERY_MS: u32 = 6_000;

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "I got my Sunday afternoons back. The rubric scores match mine closely enough that I mostly just tweak the comments.",
        name: "Priya N.",
        role: "English teacher, grades 9-10",
    },
    Testimonial {
        quote: "Our department finally grades the same essay the same way. Moderation meetings went from two hours to twenty minutes.",
        name: "Marcus O.",
        role: "Head of Humanities",
    },
    Testimonial {
        quote: "Students get feedback while they still remember writing the essay, and the revisions are noticeably better.",
        name: "Elena R.",
        role: "AP History teacher",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Carousel {
    pub index: usize,
    pub len: usize,
}

pub enum CarouselAction {
    Next,
    Previous,
    GoTo(usize),
}

impl Carousel {
    pub fn apply(self, action: CarouselAction) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = match action {
            CarouselAction::Next => (self.index + 1) % self.len,
            CarouselAction::Previous => (self.index + self.len - 1) % self.len,
            CarouselAction::GoTo(i) if i < self.len => i,
            CarouselAction::GoTo(_) => self.index,
        };
        Self { index, ..self }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_reducer(|| Carousel { index: 0, len: TESTIMONIALS.len() });
    let paused = use_state(|| false);

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |paused: &bool| {
                let interval = (!*paused).then(|| {
                    Interval::new(ROTATE_EVERY_MS, move || dispatcher.dispatch(CarouselAction::Next))
                });
                move || drop(interval)
            },
            *paused,
        );
    }

    let on_enter = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(true))
    };
    let on_leave = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(false))
    };
    let previous = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Previous))
    };
    let next = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Next))
    };

    let current = &TESTIMONIALS[carousel.index];

    html! {
        <section class="testimonials" onmouseenter={on_enter} onmouseleave={on_leave}>
            <h2>{"Teachers who stopped grading at midnight"}</h2>
            <blockquote class="testimonial" key={carousel.index.to_string()}>
                <p>{ format!("\u{201c}{}\u{201d}", current.quote) }</p>
                <footer>
                    <strong>{ current.name }</strong>
                    <span>{ current.role }</span>
                </footer>
            </blockquote>
            <div class="testimonial-controls">
                <button onclick={previous} aria-label="Previous testimonial">{"‹"}</button>
                {
                    (0..TESTIMONIALS.len()).map(|i| {
                        let dispatcher = carousel.dispatcher();
                        let onclick = Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::GoTo(i)));
                        html! {
                            <button
                                class={classes!("dot", (i == carousel.index).then(|| "active"))}
                                {onclick}
                                aria-label={format!("Show testimonial {}", i + 1)}
                            />
                        }
                    }).collect::<Html>()
                }
                <button onclick={next} aria-label="Next testimonial">{"›"}</button>
            </div>
            <style>
                {r#"
                .testimonials {
                    position: relative;
                    z-index: 1;
                    padding: 6rem 6vw;
                    text-align: center;
                    color: #c7d0dc;
                }
                .testimonials h2 {
                    color: #ffffff;
                }
                .testimonial {
                    max-width: 42rem;
                    margin: 2rem auto;
                    font-size: 1.3rem;
                    animation: fadeIn 0.6s ease;
                }
                .testimonial footer {
                    display: flex;
                    flex-direction: column;
                    margin-top: 1rem;
                    font-size: 1rem;
                }
                .testimonial-controls {
                    display: flex;
                    justify-content: center;
                    gap: 0.6rem;
                }
                .testimonial-controls button {
                    background: none;
                    border: none;
                    color: #c7d0dc;
                    cursor: pointer;
                }
                .dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.25) !important;
                }
                .dot.active {
                    background: #7aa7ff !important;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_wrap() {
        let c = Carousel { index: 2, len: 3 };
        assert_eq!(c.apply(CarouselAction::Next).index, 0);
        assert_eq!(Carousel { index: 0, len: 3 }.apply(CarouselAction::Previous).index, 2);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let c = Carousel { index: 1, len: 3 };
        assert_eq!(c.apply(CarouselAction::GoTo(2)).index, 2);
        assert_eq!(c.apply(CarouselAction::GoTo(9)).index, 1);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let c = Carousel { index: 0, len: 0 };
        assert_eq!(c.apply(CarouselAction::Next), c);
    }
}
