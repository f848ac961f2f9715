//! Sticky positioning for the nav bar.

const CONTAINER_CLASS: &str = "sticky top-0 z-10 pointer-events-none";
const NAV_BASE_CLASS: &str = "transition-colors duration-200";
const NAV_OPAQUE_CLASS: &str = "bg-main";
const NAV_STUCK_CLASS: &str = "bg-main/80 backdrop-blur-md";

/// Whether the nav is currently pinned over scrolled content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StickyNav {
    stuck: bool,
}

impl StickyNav {
    /// Returns true when the stuck flag changed.
    pub fn update(&mut self, scroll_y: f64) -> bool {
        let stuck = scroll_y.is_finite() && scroll_y > 0.0;
        let changed = stuck != self.stuck;
        self.stuck = stuck;
        changed
    }

    pub fn is_stuck(&self) -> bool {
        self.stuck
    }

    pub fn container_class(&self) -> &'static str {
        CONTAINER_CLASS
    }

    pub fn nav_class(&self) -> String {
        if self.is_stuck() {
            format!("{NAV_BASE_CLASS} {NAV_STUCK_CLASS}")
        } else {
            format!("{NAV_BASE_CLASS} {NAV_OPAQUE_CLASS}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sticks_after_scrolling() {
        let mut sticky = StickyNav::default();
        assert!(!sticky.is_stuck());
        assert!(sticky.update(120.0));
        assert!(sticky.is_stuck());
        assert!(sticky.nav_class().contains("backdrop-blur-md"));
    }

    #[test]
    fn test_stuck_nav_drops_opaque_background() {
        let mut sticky = StickyNav::default();
        assert!(sticky.nav_class().split_whitespace().any(|c| c == "bg-main"));

        sticky.update(10.0);
        let classes: Vec<String> = sticky
            .nav_class()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        assert!(!classes.iter().any(|c| c == "bg-main"));
        assert!(classes.iter().any(|c| c == "bg-main/80"));
    }

    #[test]
    fn test_update_reports_only_changes() {
        let mut sticky = StickyNav::default();
        assert!(!sticky.update(0.0));
        assert!(sticky.update(1.0));
        assert!(!sticky.update(40.0));
        assert!(sticky.update(0.0));
        assert!(!sticky.is_stuck());
    }

    #[test]
    fn test_non_finite_scroll_is_top() {
        let mut sticky = StickyNav::default();
        sticky.update(f64::NAN);
        assert!(!sticky.is_stuck());
        assert_eq!(sticky.container_class(), "sticky top-0 z-10 pointer-events-none");
    }
}
