use crate::error::{HrDeskError, Result};
use crate::validate;
use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Storage keys the app itself relies on.
pub mod keys {
    pub const EMPLOYEES: &str = "employees";
    pub const CURRENT_USER: &str = "currentUser";
    pub const INITIALIZED: &str = "initialized";
}

/// A record kept in a collection, identified by a numeric id unique within it.
pub trait Record: Serialize + DeserializeOwned + Clone {
    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: u64,
    pub emp_code: String,
    pub name: String,
    pub email: String,
    pub pan: String,
    pub aadhaar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<NaiveDate>,
}

impl Employee {
    /// A new, unsaved employee. The id is assigned on insert.
    pub fn new(
        emp_code: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        pan: impl Into<String>,
        aadhaar: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            emp_code: emp_code.into(),
            name: name.into(),
            email: email.into(),
            pan: pan.into(),
            aadhaar: aadhaar.into(),
            department: None,
            salary: None,
            joining_date: None,
        }
    }

    /// Checks every field with a fixed format, reporting all failures at once.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("name is empty".to_string());
        }
        if !validate::is_valid_email(&self.email) {
            problems.push(format!("invalid email '{}'", self.email));
        }
        if !validate::is_valid_pan(&self.pan) {
            problems.push(format!("invalid PAN '{}'", self.pan));
        }
        if !validate::is_valid_aadhaar(&self.aadhaar) {
            problems.push("invalid Aadhaar number".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(HrDeskError::Validation(problems))
        }
    }
}

impl Record for Employee {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// The logged-in user, stored under [`keys::CURRENT_USER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub role: String,
}

impl SessionUser {
    pub fn new(username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: role.into(),
        }
    }

    /// Label shown in page headers, e.g. `admin (HR Manager)`.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.username, self.role)
    }
}
