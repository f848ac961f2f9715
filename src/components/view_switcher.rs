use crate::components::{Icon, Route};
use crate::paths::SwitcherSelection;
use dioxus::prelude::*;

#[component]
pub fn ViewSwitcher(current_selection: Option<SwitcherSelection>) -> Element {
    rsx! {
        div { class: "flex items-center gap-0.5 rounded-md border border-zinc-800 p-0.5",
            SwitcherItem {
                icon: "grid",
                label: "Grid",
                to: Route::Grid {},
                active: current_selection == Some(SwitcherSelection::Grid),
            }
            SwitcherItem {
                icon: "feed",
                label: "Feed",
                to: Route::Feed {},
                active: current_selection == Some(SwitcherSelection::Feed),
            }
            SwitcherItem {
                icon: "admin",
                label: "Admin",
                to: Route::Admin { segments: Vec::new() },
                active: current_selection == Some(SwitcherSelection::Admin),
            }
        }
    }
}

#[component]
fn SwitcherItem(icon: String, label: String, to: Route, active: bool) -> Element {
    let base_class = "flex items-center justify-center w-9 h-8 rounded transition-colors duration-150";
    let active_class = if active {
        "bg-zinc-800 text-white"
    } else {
        "text-zinc-500 hover:text-zinc-200"
    };

    rsx! {
        Link { class: "{base_class} {active_class}", to,
            Icon { name: icon.clone(), class: "w-4 h-4".to_string() }
            span { class: "sr-only", "{label}" }
        }
    }
}
