use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub employee_reference: Option<String>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default = "default_has_person_info")]
    pub has_person_info: bool,
}

fn default_has_person_info() -> bool {
    true
}

impl StaffMember {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            employee_reference: None,
            deleted: false,
            has_person_info: true,
        }
    }

    pub fn with_employee_reference(mut self, reference: impl Into<String>) -> Self {
        self.employee_reference = Some(reference.into());
        self
    }

    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Marks the member as a template slot rather than a real person.
    pub fn template(mut self) -> Self {
        self.has_person_info = false;
        self
    }

    /// Row order in the grid: active before deleted, real person before
    /// template, then name (case-insensitive), then id.
    pub fn display_order(&self, other: &Self) -> Ordering {
        self.deleted
            .cmp(&other.deleted)
            .then_with(|| other.has_person_info.cmp(&self.has_person_info))
            .then_with(|| self.name.to_lowercase().cmp(&other.name.to_lowercase()))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.id.cmp(&other.id))
    }
}
