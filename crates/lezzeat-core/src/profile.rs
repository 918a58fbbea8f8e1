//! Student profile
//!
//! The profile is mock data until accounts exist. Photo upload and logout are
//! stubs that only raise notices.

use crate::notice::Notice;
use serde::{Deserialize, Serialize};

/// Account holder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Full name
    pub name: String,
    /// Login name
    pub username: String,
    /// College roll number
    pub roll_number: String,
    /// College email
    pub email: String,
    /// Join date, preformatted
    pub joined_date: String,
    /// Account state text
    pub account_status: String,
}

/// Labelled profile field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileField<'a> {
    /// Field label
    pub label: &'static str,
    /// Value
    pub value: &'a str,
    /// Whether the user may change it
    pub editable: bool,
}

impl<'a> ProfileField<'a> {
    fn new(label: &'static str, value: &'a str, editable: bool) -> Self {
        Self {
            label,
            value,
            editable,
        }
    }
}

impl UserProfile {
    /// Sample signed-in student
    #[must_use]
    pub fn sample() -> Self {
        Self {
            name: "Rahul Sharma".into(),
            username: "rahul_cs21".into(),
            roll_number: "CS21B1234".into(),
            email: "rahul.sharma@college.edu".into(),
            joined_date: "Jul 31, 2025".into(),
            account_status: "Active".into(),
        }
    }

    /// Fields in display order
    #[must_use]
    pub fn fields(&self) -> [ProfileField<'_>; 6] {
        let field = ProfileField::new;
        [
            field("Full Name", &self.name, true),
            field("Username", &self.username, false),
            field("Roll Number", &self.roll_number, false),
            field("Email", &self.email, true),
            field("Joined Date", &self.joined_date, false),
            field("Account Status", &self.account_status, false),
        ]
    }

    /// Photo upload is not wired to a camera or gallery
    #[must_use]
    pub fn photo_upload_notice() -> Notice {
        Notice::new("Update Profile Photo", "Choose an option: Camera or Gallery")
    }

    /// Logout prompt
    #[must_use]
    pub fn logout_notice() -> Notice {
        Notice::new("Logout", "Are you sure you want to logout?")
    }
}
