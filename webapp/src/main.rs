#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, error, info};

mod common;
use common::{style, theme::ThemeContext, use_site};

mod components;
use components::navigation::NavBar;

mod home;
use home::{PageNotFound, Portfolio};

mod about;
mod contact;
mod credentials;
mod hero;
mod projects;
mod resume;
mod skills;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    // the site document is compiled in, so a parse failure here is a build problem; there is
    // nothing sensible to render without it
    let site = match portfolio_common::config::embedded_site() {
        Ok(site) => site,
        Err(err) => {
            error!("failed to load site document: {err:#}");
            return;
        }
    };

    info!("launching portfolio for {}", site.profile.name);
    dioxus::LaunchBuilder::new().with_context(site).launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Portfolio {},
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let site = use_site();

    // the theme is loaded (and applied to the document) once, then shared with every
    // component through the context api
    use_context_provider(|| ThemeContext::load(&site.config.storage));

    rsx! {
        style { "{style::PORTFOLIO_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
