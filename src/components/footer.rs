use crate::config;
use crate::Route;
use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-links">
                <Link<Route> to={Route::Faq} classes="footer-link">{"FAQ"}</Link<Route>>
                <Link<Route> to={Route::Privacy} classes="footer-link">{"Privacy"}</Link<Route>>
                <Link<Route> to={Route::Contact} classes="footer-link">{"Contact"}</Link<Route>>
                <a class="footer-link" href={format!("mailto:{}", config::CONTACT_ADDRESS)}>
                    { config::CONTACT_ADDRESS }
                </a>
            </div>
            <p class="footer-copy">{ format!("© {} Markwise. Built for teachers who would rather be teaching.", year) }</p>
            <style>
                {r#"
                .site-footer {
                    position: relative;
                    z-index: 1;
                    padding: 3rem 6vw;
                    border-top: 1px solid rgba(255, 255, 255, 0.06);
                    color: #7d8794;
                }
                .footer-links {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    margin-bottom: 1rem;
                }
                .footer-link {
                    color: #c7d0dc;
                    text-decoration: none;
                }
                "#}
            </style>
        </footer>
    }
}
