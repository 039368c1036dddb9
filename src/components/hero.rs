use crate::Route;
use log::debug;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Best effort: browsers may refuse autoplay, in which case the poster stays.
fn try_autoplay(video: &HtmlVideoElement) {
    video.set_muted(true);
    video.set_loop(true);
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                debug!("hero video autoplay rejected: {:?}", e);
            }
        }),
        Err(e) => debug!("hero video play() threw: {:?}", e),
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let video_ref = use_node_ref();

    {
        use_effect_with_deps(
            move |video_ref: &NodeRef| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    try_autoplay(&video);
                }
                || ()
            },
            video_ref.clone(),
        );
    }

    html! {
        <header class="hero">
            <div class="hero-content">
                <div class="hero-header">
                    <h1>{"Grade a stack of essays before your coffee cools"}</h1>
                    <p class="hero-subtitle">
                        {"Markwise scores essays against your own rubric and drafts feedback in your voice. You review, adjust and return work days sooner."}
                    </p>
                </div>
                <div class="hero-cta-group">
                    <Link<Route> to={Route::Contact} classes="forward-link">
                        <button class="hero-cta">{"Book a demo"}</button>
                    </Link<Route>>
                    <a href="#roi" class="faq-link">
                        {"See what you'd save"}
                    </a>
                </div>
            </div>
            <div class="hero-media">
                <video
                    ref={video_ref}
                    class="hero-video"
                    src="/assets/grading-walkthrough.mp4"
                    poster="/assets/grading-walkthrough.jpg"
                    playsinline=true
                    preload="metadata"
                />
            </div>
            <style>
                {r#"
                .hero {
                    min-height: 90vh;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    padding: 120px 6vw 60px;
                    position: relative;
                    z-index: 1;
                }
                .hero h1 {
                    font-size: clamp(2.2rem, 4vw, 3.6rem);
                    line-height: 1.1;
                    color: #ffffff;
                    margin-bottom: 1.2rem;
                }
                .hero-subtitle {
                    font-size: 1.2rem;
                    color: #c7d0dc;
                    max-width: 34rem;
                }
                .hero-cta-group {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                    margin-top: 2rem;
                }
                .hero-video {
                    width: 100%;
                    border-radius: 16px;
                    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.45);
                }
                @media (max-width: 900px) {
                    .hero {
                        grid-template-columns: 1fr;
                        padding-top: 100px;
                    }
                }
                "#}
            </style>
        </header>
    }
}
