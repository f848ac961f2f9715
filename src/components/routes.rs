//! Gallery routes. Every page renders below the sticky nav.

use crate::components::pages::{Admin, Feed, Grid, Home, NotFound, SignIn};
use crate::components::Nav;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/grid")]
        Grid {},
        #[route("/feed")]
        Feed {},
        #[route("/admin/:..segments")]
        Admin { segments: Vec<String> },
        #[route("/sign-in")]
        SignIn {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
fn Shell() -> Element {
    rsx! {
        Nav {}
        main { class: "px-3 md:px-6 pb-12", Outlet::<Route> {} }
    }
}
