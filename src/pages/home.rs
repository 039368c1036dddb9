use crate::components::{
    background::DecorativeBackground,
    feature_showcase::FeatureShowcase,
    grading_demo::GradingDemo,
    hero::Hero,
    roi_calculator::RoiCalculator,
    testimonials::Testimonials,
};
use crate::interaction::bus::{ActiveFeature, EventBus};
use crate::seo::{organization, software_application, JsonLd};
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    // One bus per page view; dropped with the page.
    let bus = use_memo(|_| EventBus::<ActiveFeature>::new(), ());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<EventBus<ActiveFeature>> context={(*bus).clone()}>
            <div class="landing-page">
                <JsonLd data={organization()} />
                <JsonLd data={software_application()} />
                <DecorativeBackground />
                <Hero />
                <FeatureShowcase />
                <GradingDemo />
                <Testimonials />
                <RoiCalculator />
                <section class="footer-cta">
                    <h2>{"Try it on next week's essays"}</h2>
                    <p class="subtitle">
                        {"Free for one department for a full term. No credit card, no IT ticket."}
                    </p>
                    <Link<Route> to={Route::Contact} classes="forward-link">
                        <button class="hero-cta">{"Book a demo"}</button>
                    </Link<Route>>
                </section>
            </div>
            <style>
                {r#"
                .landing-page {
                    position: relative;
                    min-height: 100vh;
                    background: #0b0d12;
                }
                .hero-cta {
                    background: #4678eb;
                    color: #ffffff;
                    border: none;
                    border-radius: 999px;
                    padding: 0.9rem 1.8rem;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .footer-cta {
                    position: relative;
                    z-index: 1;
                    text-align: center;
                    padding: 6rem 6vw;
                    color: #c7d0dc;
                }
                .footer-cta h2 {
                    color: #ffffff;
                }
                "#}
            </style>
        </ContextProvider<EventBus<ActiveFeature>>>
    }
}
