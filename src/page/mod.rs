//! Typed stand-in for the server-rendered page.
//!
//! Every region the interaction layer touches lives here as owned state:
//! the sidebar, the modal set, the checkbox column, the loading indicator,
//! the pending-approval listing and the flash area. All mutation happens on
//! the single runtime task; none of these types need locks.

pub mod checkbox;
pub mod controls;
pub mod flash;
pub mod listing;
pub mod modal;
pub mod sidebar;

use checkbox::Checkbox;
use flash::FlashArea;
use listing::Listing;
use modal::ModalSet;
use sidebar::Sidebar;

/// The whole interactive surface of one rendered page.
#[derive(Debug, Default)]
pub struct PageState {
    pub sidebar: Sidebar,
    pub modals: ModalSet,
    pub checkboxes: Vec<Checkbox>,
    pub listing: Listing,
    pub flash: FlashArea,
    loading_visible: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one page-level activation the way the page wires it: the
    /// sidebar hides when the activation lands outside its designated
    /// regions, and a close control dismisses its enclosing modal. `path`
    /// holds the region names from the activated element outward.
    pub fn activate(&mut self, path: &[&str]) {
        self.sidebar.handle_page_activation(path);
        if path
            .iter()
            .any(|region| *region == modal::MODAL_CLOSE_BTN || *region == modal::MODAL_BACKDROP)
        {
            self.modals.close_containing(path);
        }
    }

    /// Any form submission reveals the loading indicator. There is no
    /// corresponding hide; navigation supersedes it.
    pub fn submit_form(&mut self) {
        tracing::debug!("form submitted, revealing loading indicator");
        self.loading_visible = true;
    }

    pub fn loading_visible(&self) -> bool {
        self.loading_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_outside_sidebar_hides_it() {
        let mut page = PageState::new();
        page.sidebar.show();

        page.activate(&["approve-btn", "access-table", "body"]);
        assert!(!page.sidebar.is_shown());
    }

    #[test]
    fn test_backdrop_activation_closes_only_the_enclosing_modal() {
        let mut page = PageState::new();
        page.modals.open_add_student();
        page.modals.open_add_admin();

        page.activate(&[
            modal::MODAL_BACKDROP,
            modal::ModalKind::AddStudent.region_name(),
            "body",
        ]);
        assert!(!page.modals.is_open(modal::ModalKind::AddStudent));
        assert!(page.modals.is_open(modal::ModalKind::AddAdmin));
    }

    #[test]
    fn test_plain_activation_inside_modal_leaves_it_open() {
        let mut page = PageState::new();
        page.modals.open_add_parent();

        page.activate(&[
            "name-input",
            modal::ModalKind::AddParent.region_name(),
            "body",
        ]);
        assert!(page.modals.is_open(modal::ModalKind::AddParent));
    }

    #[test]
    fn test_loading_indicator_stays_visible_after_submit() {
        let mut page = PageState::new();
        assert!(!page.loading_visible());

        page.submit_form();
        assert!(page.loading_visible());

        // A second submission does not flip it back.
        page.submit_form();
        assert!(page.loading_visible());
    }
}
