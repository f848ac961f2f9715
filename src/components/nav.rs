use crate::components::{MusicPlayer, Route, ViewSwitcher};
use crate::config::NavConfig;
use crate::paths::{show_nav, switcher_selection_for_path, NavEntrance};
use crate::sticky::StickyNav;
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

#[cfg(target_arch = "wasm32")]
type ScrollListener = Rc<RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>>>;

#[cfg(target_arch = "wasm32")]
fn detach_scroll_listener(listener: &ScrollListener) {
    let Some(callback) = listener.borrow_mut().take() else {
        return;
    };
    if let Some(win) = window() {
        let _ = win.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
    }
}

#[component]
pub fn Nav() -> Element {
    let route = use_route::<Route>();
    let config = use_context::<NavConfig>();
    let sticky = use_signal(StickyNav::default);
    let initial_path = route.to_string();
    let mut entrance = use_signal(move || NavEntrance::for_initial_path(&initial_path));

    // Window-level scroll listener drives the stuck styling.
    #[cfg(target_arch = "wasm32")]
    let scroll_listener: ScrollListener = use_hook(|| Rc::new(RefCell::new(None)));

    #[cfg(target_arch = "wasm32")]
    {
        let scroll_listener = scroll_listener.clone();
        use_effect(move || {
            detach_scroll_listener(&scroll_listener);
            let Some(win) = window() else {
                return;
            };

            let runtime = Runtime::current();
            let mut sticky = sticky.clone();
            let scroll_win = win.clone();
            let scroll_cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                let _guard = RuntimeGuard::new(runtime.clone());
                let scroll_y = scroll_win.scroll_y().unwrap_or(0.0);
                let mut next = *sticky.peek();
                if next.update(scroll_y) {
                    sticky.set(next);
                }
            }) as Box<dyn FnMut(_)>);

            let _ = win.add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
            *scroll_listener.borrow_mut() = Some(scroll_cb);
        });
    }

    #[cfg(target_arch = "wasm32")]
    use_drop(move || detach_scroll_listener(&scroll_listener));

    let path = route.to_string();
    if !show_nav(&path) {
        return rsx! {};
    }

    let sticky_state = sticky();
    let selection = switcher_selection_for_path(&path, config.grid_homepage_enabled);
    let animate_class = entrance.read().class();
    let height_class = config.nav_height_class();
    let nav_class = sticky_state.nav_class();
    let container_class = sticky_state.container_class();
    let title = config.nav_title.clone();
    let caption = config.nav_caption.clone();

    rsx! {
        div { class: "{container_class} grid grid-cols-1 md:grid-cols-12 px-3 md:px-6",
            div {
                class: "md:col-span-9 pointer-events-auto {animate_class}",
                onanimationend: move |_| entrance.write().finish(),
                nav { class: "w-full flex items-center {height_class} md:w-[calc(100%+8px)] md:translate-x-[-4px] md:px-[4px] {nav_class}",
                    ViewSwitcher { current_selection: selection }
                    MusicPlayer {}
                    div { class: "grow text-right min-w-0 hidden xs:block translate-y-[-1px]",
                        div { class: "truncate overflow-hidden select-none",
                            Link { to: Route::Home {}, "{title}" }
                        }
                        if let Some(caption) = caption {
                            div { class: "hidden sm:block truncate overflow-hidden leading-tight text-dim lowercase",
                                "{caption}"
                            }
                        }
                    }
                }
            }
            div { class: "hidden md:block md:col-span-3" }
        }
    }
}
