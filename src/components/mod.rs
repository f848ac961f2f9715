//! The components module contains all shared components for our app.

mod icons;
pub mod media;
mod music_player;
mod nav;
mod pages;
mod routes;
mod view_switcher;

pub use icons::*;
pub use music_player::*;
pub use nav::*;
pub use routes::*;
pub use view_switcher::*;
