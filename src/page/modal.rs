use tracing::debug;

use crate::page::controls::{AccessInfoControl, RelationshipControl, RelationshipParentControl};

/// Close controls recognized inside a modal region.
pub const MODAL_CLOSE_BTN: &str = "modal-close-btn";
pub const MODAL_BACKDROP: &str = "modal-backdrop";

/// The six modals the page renders. Region names match the rendered markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    AddStudent,
    AddParent,
    AddAdmin,
    AddRelationship,
    AddRelationshipParent,
    AccessInfo,
}

impl ModalKind {
    pub fn region_name(&self) -> &'static str {
        match self {
            ModalKind::AddStudent => "add-student-modal",
            ModalKind::AddParent => "add-parent-modal",
            ModalKind::AddAdmin => "add-admin-modal",
            ModalKind::AddRelationship => "add-relationship-modal",
            ModalKind::AddRelationshipParent => "add-relationship-parent-modal",
            ModalKind::AccessInfo => "access-request-modal",
        }
    }

    pub fn from_region(region: &str) -> Option<Self> {
        [
            ModalKind::AddStudent,
            ModalKind::AddParent,
            ModalKind::AddAdmin,
            ModalKind::AddRelationship,
            ModalKind::AddRelationshipParent,
            ModalKind::AccessInfo,
        ]
        .into_iter()
        .find(|kind| kind.region_name() == region)
    }
}

/// Hidden-flag state shared by every modal. Modals start hidden.
#[derive(Debug)]
pub struct Modal {
    hidden: bool,
}

impl Default for Modal {
    fn default() -> Self {
        Self { hidden: true }
    }
}

impl Modal {
    fn open(&mut self) {
        self.hidden = false;
    }

    fn close(&mut self) {
        self.hidden = true;
    }

    pub fn is_open(&self) -> bool {
        !self.hidden
    }
}

/// Add-relationship modal; its form carries the subject user's id.
#[derive(Debug, Default)]
pub struct RelationshipModal {
    pub modal: Modal,
    pub user_id_field: String,
}

/// Parent-side relationship modal; its form carries the parent's id.
#[derive(Debug, Default)]
pub struct ParentRelationshipModal {
    pub modal: Modal,
    pub parent_id_field: String,
}

/// Access-request info modal; shows five fields copied from the triggering
/// control.
#[derive(Debug, Default)]
pub struct AccessInfoModal {
    pub modal: Modal,
    pub full_name: String,
    pub relationship: String,
    pub info: String,
    pub email: String,
    pub phone: String,
}

/// All modals on the page. Open copies control data where the modal needs
/// it; close only flips the hidden flag and leaves copied fields as they
/// were, exactly like the rendered markup.
#[derive(Debug, Default)]
pub struct ModalSet {
    pub add_student: Modal,
    pub add_parent: Modal,
    pub add_admin: Modal,
    pub add_relationship: RelationshipModal,
    pub add_relationship_parent: ParentRelationshipModal,
    pub access_info: AccessInfoModal,
}

impl ModalSet {
    pub fn open_add_student(&mut self) {
        debug!("add-student modal opened");
        self.add_student.open();
    }

    pub fn open_add_parent(&mut self) {
        debug!("add-parent modal opened");
        self.add_parent.open();
    }

    pub fn open_add_admin(&mut self) {
        debug!("add-admin modal opened");
        self.add_admin.open();
    }

    pub fn open_relationship(&mut self, control: &RelationshipControl) {
        debug!(user_id = %control.user_id, "add-relationship modal opened");
        self.add_relationship.user_id_field = control.user_id.clone();
        self.add_relationship.modal.open();
    }

    pub fn open_relationship_parent(&mut self, control: &RelationshipParentControl) {
        debug!(parent_id = %control.parent_id, "add-relationship-parent modal opened");
        self.add_relationship_parent.parent_id_field = control.parent_id.clone();
        self.add_relationship_parent.modal.open();
    }

    pub fn open_access_info(&mut self, control: &AccessInfoControl) {
        debug!(full_name = %control.full_name, "access-request modal opened");
        let modal = &mut self.access_info;
        modal.full_name = control.full_name.clone();
        modal.relationship = control.relationship.clone();
        modal.info = control.info.clone();
        modal.email = control.email.clone();
        modal.phone = control.phone.clone();
        modal.modal.open();
    }

    pub fn close(&mut self, kind: ModalKind) {
        debug!(region = kind.region_name(), "modal closed");
        self.modal_mut(kind).close();
    }

    /// Close the nearest enclosing modal of an activation: a close button or
    /// backdrop lives inside exactly one modal region, so the first modal
    /// region in the path (innermost first) is the one to close.
    pub fn close_containing(&mut self, path: &[&str]) {
        if let Some(kind) = path.iter().find_map(|region| ModalKind::from_region(region)) {
            self.close(kind);
        }
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.modal_ref(kind).is_open()
    }

    fn modal_mut(&mut self, kind: ModalKind) -> &mut Modal {
        match kind {
            ModalKind::AddStudent => &mut self.add_student,
            ModalKind::AddParent => &mut self.add_parent,
            ModalKind::AddAdmin => &mut self.add_admin,
            ModalKind::AddRelationship => &mut self.add_relationship.modal,
            ModalKind::AddRelationshipParent => &mut self.add_relationship_parent.modal,
            ModalKind::AccessInfo => &mut self.access_info.modal,
        }
    }

    fn modal_ref(&self, kind: ModalKind) -> &Modal {
        match kind {
            ModalKind::AddStudent => &self.add_student,
            ModalKind::AddParent => &self.add_parent,
            ModalKind::AddAdmin => &self.add_admin,
            ModalKind::AddRelationship => &self.add_relationship.modal,
            ModalKind::AddRelationshipParent => &self.add_relationship_parent.modal,
            ModalKind::AccessInfo => &self.access_info.modal,
        }
    }
}
