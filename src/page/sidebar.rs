use tracing::debug;

/// Region names the sidebar logic recognizes in an activation path.
pub const SIDEBAR_REGION: &str = "sidebar";
pub const SIDEBAR_TOGGLE_BTN: &str = "sidebar-toggle-btn";
pub const SIDEBAR_HIDE_BTN: &str = "sidebar-hide-btn";

/// Mutually exclusive visibility pair. Starts hidden, matching the rendered
/// off-canvas position on narrow viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarState {
    Shown,
    #[default]
    Hidden,
}

#[derive(Debug, Default)]
pub struct Sidebar {
    state: SidebarState,
}

impl Sidebar {
    pub fn show(&mut self) {
        debug!("sidebar shown");
        self.state = SidebarState::Shown;
    }

    pub fn hide(&mut self) {
        debug!("sidebar hidden");
        self.state = SidebarState::Hidden;
    }

    pub fn is_shown(&self) -> bool {
        self.state == SidebarState::Shown
    }

    /// Route a page-level activation. `path` holds the region names from the
    /// activated element outward; the sidebar hides unless the activation
    /// landed on the sidebar itself or its designated toggle control.
    pub fn handle_page_activation(&mut self, path: &[&str]) {
        let inside = path
            .iter()
            .any(|region| *region == SIDEBAR_REGION || *region == SIDEBAR_TOGGLE_BTN);
        if !inside {
            self.hide();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_hide_are_mutually_exclusive() {
        let mut sidebar = Sidebar::default();
        assert!(!sidebar.is_shown());

        sidebar.show();
        assert!(sidebar.is_shown());

        sidebar.hide();
        assert!(!sidebar.is_shown());
    }

    #[test]
    fn test_outside_activation_hides() {
        let mut sidebar = Sidebar::default();
        sidebar.show();

        sidebar.handle_page_activation(&["approve-btn", "access-table", "body"]);
        assert!(!sidebar.is_shown());
    }

    #[test]
    fn test_activation_inside_sidebar_does_not_hide() {
        let mut sidebar = Sidebar::default();
        sidebar.show();

        sidebar.handle_page_activation(&["nav-link", SIDEBAR_REGION, "body"]);
        assert!(sidebar.is_shown());
    }

    #[test]
    fn test_activation_on_toggle_button_does_not_hide() {
        let mut sidebar = Sidebar::default();
        sidebar.show();

        sidebar.handle_page_activation(&[SIDEBAR_TOGGLE_BTN, "header", "body"]);
        assert!(sidebar.is_shown());
    }

    #[test]
    fn test_hide_button_closes_from_inside() {
        // The explicit close control sits inside the sidebar, so the
        // outside-activation rule never fires for it; it calls hide directly.
        let mut sidebar = Sidebar::default();
        sidebar.show();
        sidebar.handle_page_activation(&[SIDEBAR_HIDE_BTN, SIDEBAR_REGION, "body"]);
        assert!(sidebar.is_shown());

        sidebar.hide();
        assert!(!sidebar.is_shown());
    }
}
