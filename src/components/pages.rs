//! Placeholder pages for the gallery views the nav links to.

use dioxus::prelude::*;

#[component]
fn Page(title: String, note: Option<String>) -> Element {
    rsx! {
        section { class: "pt-8",
            h1 { class: "text-sm uppercase tracking-wider text-dim", "{title}" }
            if let Some(note) = note {
                p { class: "mt-2 text-xs text-dim", "{note}" }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        Page { title: "Home".to_string() }
    }
}

#[component]
pub fn Grid() -> Element {
    rsx! {
        Page { title: "Grid".to_string() }
    }
}

#[component]
pub fn Feed() -> Element {
    rsx! {
        Page { title: "Feed".to_string() }
    }
}

#[component]
pub fn Admin(segments: Vec<String>) -> Element {
    let section = if segments.is_empty() {
        "Admin".to_string()
    } else {
        format!("Admin / {}", segments.join(" / "))
    };

    rsx! {
        Page { title: section }
    }
}

#[component]
pub fn SignIn() -> Element {
    rsx! {
        Page { title: "Sign in".to_string() }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Page { title: "Not found".to_string(), note: format!("Nothing lives at {path}") }
    }
}
