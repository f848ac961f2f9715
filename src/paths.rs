//! Gallery route paths and the nav decisions derived from them.

pub const PATH_ROOT: &str = "/";
pub const PATH_GRID: &str = "/grid";
pub const PATH_FEED: &str = "/feed";
pub const PATH_ADMIN: &str = "/admin";
pub const PATH_SIGN_IN: &str = "/sign-in";
pub const PATH_OG: &str = "/og";

/// Which entry of the view switcher is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitcherSelection {
    Grid,
    Feed,
    Admin,
}

/// How the nav enters on first load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAnimation {
    Bottom,
    None,
}

fn has_prefix(path: &str, prefix: &str) -> bool {
    path.to_ascii_lowercase().starts_with(prefix)
}

pub fn is_path_grid(path: &str) -> bool {
    has_prefix(path, PATH_GRID)
}

pub fn is_path_feed(path: &str) -> bool {
    has_prefix(path, PATH_FEED)
}

pub fn is_path_admin(path: &str) -> bool {
    has_prefix(path, PATH_ADMIN)
}

pub fn is_path_sign_in(path: &str) -> bool {
    has_prefix(path, PATH_SIGN_IN)
}

pub fn is_path_protected(path: &str) -> bool {
    is_path_admin(path) || has_prefix(path, PATH_OG)
}

pub fn switcher_selection_for_path(
    path: &str,
    grid_homepage_enabled: bool,
) -> Option<SwitcherSelection> {
    if path == PATH_ROOT {
        Some(if grid_homepage_enabled {
            SwitcherSelection::Grid
        } else {
            SwitcherSelection::Feed
        })
    } else if is_path_grid(path) {
        Some(SwitcherSelection::Grid)
    } else if is_path_feed(path) {
        Some(SwitcherSelection::Feed)
    } else if is_path_protected(path) {
        Some(SwitcherSelection::Admin)
    } else {
        None
    }
}

pub fn show_nav(path: &str) -> bool {
    !is_path_sign_in(path)
}

pub fn nav_animation(path: &str) -> NavAnimation {
    if is_path_admin(path) {
        NavAnimation::None
    } else {
        NavAnimation::Bottom
    }
}

impl NavAnimation {
    pub fn class(self) -> &'static str {
        match self {
            NavAnimation::Bottom => "nav-animate-bottom",
            NavAnimation::None => "",
        }
    }
}

/// First-load entrance of the nav. Chosen from the path the nav first
/// appeared on and retired once it has played, so later route changes and
/// re-shows never replay it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntrance {
    animation: NavAnimation,
    finished: bool,
}

impl NavEntrance {
    pub fn for_initial_path(path: &str) -> Self {
        Self {
            animation: nav_animation(path),
            finished: false,
        }
    }

    pub fn class(&self) -> &'static str {
        if self.finished {
            ""
        } else {
            self.animation.class()
        }
    }

    pub fn finish(&mut self) {
        self.finished = true;
    }
}
