use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="legal-content not-found">
            <h1>{"This page wandered off"}</h1>
            <p>{"The link may be old, or the page may have moved."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                <button class="hero-cta">{"Back to the homepage"}</button>
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 70vh;
                    padding-top: 140px;
                    text-align: center;
                    color: #c7d0dc;
                }
                "#}
            </style>
        </div>
    }
}
