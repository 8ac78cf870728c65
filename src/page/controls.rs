//! Dataset contract for interactive controls.
//!
//! The server renders each control with a fixed set of `data-*` attributes.
//! Rather than free-form key access, every control kind has a typed struct
//! parsed from the attribute map at activation time, so the values are
//! always current and a missing attribute is an explicit error.

use std::collections::BTreeMap;

use thiserror::Error;

/// `data-*` attributes of one control, keyed without the `data-` prefix.
pub type Dataset = BTreeMap<String, String>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("control '{control}' is missing required attribute 'data-{attribute}'")]
    Missing {
        control: &'static str,
        attribute: &'static str,
    },
}

fn required(
    dataset: &Dataset,
    control: &'static str,
    attribute: &'static str,
) -> Result<String, DatasetError> {
    dataset
        .get(attribute)
        .cloned()
        .ok_or(DatasetError::Missing { control, attribute })
}

/// An approval/rejection control: `data-action`, `data-userid`,
/// `data-requestorid`. The action string is opaque and passed through to
/// the server unvalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalControl {
    pub action: String,
    pub user_id: String,
    pub requestor_id: String,
}

impl ApprovalControl {
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, DatasetError> {
        Ok(Self {
            action: required(dataset, "approval", "action")?,
            user_id: required(dataset, "approval", "userid")?,
            requestor_id: required(dataset, "approval", "requestorid")?,
        })
    }
}

/// Opens the add-relationship modal with the subject user pre-filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipControl {
    pub user_id: String,
}

impl RelationshipControl {
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, DatasetError> {
        Ok(Self {
            user_id: required(dataset, "relationship", "userid")?,
        })
    }
}

/// Opens the parent-side relationship modal with the parent pre-filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipParentControl {
    pub parent_id: String,
}

impl RelationshipParentControl {
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, DatasetError> {
        Ok(Self {
            parent_id: required(dataset, "relationship-parent", "parentid")?,
        })
    }
}

/// Info control in the access-request table; carries the five fields shown
/// in the access-request modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessInfoControl {
    pub full_name: String,
    pub relationship: String,
    pub info: String,
    pub email: String,
    pub phone: String,
}

impl AccessInfoControl {
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, DatasetError> {
        Ok(Self {
            full_name: required(dataset, "access-info", "fullname")?,
            relationship: required(dataset, "access-info", "relationship")?,
            info: required(dataset, "access-info", "info")?,
            email: required(dataset, "access-info", "email")?,
            phone: required(dataset, "access-info", "phone")?,
        })
    }
}
