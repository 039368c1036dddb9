use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod contact;
mod error;
mod roi;
mod seo;
mod interaction {
    pub mod bus;
    pub mod debounce;
    pub mod hooks;
    pub mod observer;
    pub mod scheduler;
    pub mod tracker;
    pub mod visibility;
}
mod components {
    pub mod background;
    pub mod contact_form;
    pub mod error_boundary;
    pub mod feature_showcase;
    pub mod footer;
    pub mod grading_demo;
    pub mod hero;
    pub mod roi_calculator;
    pub mod testimonials;
}
mod pages {
    pub mod contact;
    pub mod faq;
    pub mod home;
    pub mod not_found;
    pub mod privacy;
}

use components::{error_boundary::ErrorBoundary, footer::Footer};
use pages::{
    contact::ContactPage,
    faq::Faq,
    home::Home,
    not_found::NotFound,
    privacy::PrivacyPolicy,
};

/// Scroll offset after which the nav switches to its solid style.
const NAV_SOLID_AFTER_PX: f64 = 80.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/faq")]
    Faq,
    #[at("/contact")]
    Contact,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_SOLID_AFTER_PX;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"markwise"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <a href="/#features" class="nav-link">{"Features"}</a>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <a href="/#roi" class="nav-link">{"Savings"}</a>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Faq} classes="nav-link">
                            {"FAQ"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="nav-login-button">
                            {"Book a demo"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <ErrorBoundary>
                <Switch<Route> render={switch} />
            </ErrorBoundary>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }
    tracing_wasm::set_as_global_default();

    config::report_config(&config::EmailConfig::from_build_env());

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
