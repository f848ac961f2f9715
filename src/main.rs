use dioxus::prelude::*;

mod components;
mod config;
mod error;
mod paths;
mod playlist;
mod sticky;

use components::Route;
use config::NAV_CONFIG;

const APP_CSS: Asset = asset!("/assets/styling/app.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(|| NAV_CONFIG.clone());
    use_hook(|| {
        tracing::info!(
            grid_homepage = config.grid_homepage_enabled,
            caption = config.nav_caption.is_some(),
            title = %config.nav_title,
            "gallery nav configured"
        );
    });

    let title = config.nav_title.clone();

    rsx! {
        document::Meta { name: "theme-color", content: "#0a0a0a" }
        document::Title { "{title}" }

        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: APP_CSS }

        Router::<Route> {}
    }
}
