use serde::{Deserialize, Serialize};

use crate::listing::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Admin,
}

/// The logged-in identity. Derived from an email string, not authenticated;
/// carried by the local mirror across reloads and destroyed on logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub hostel: String,
    pub room_no: String,
    pub phone: String,
    pub points: u32,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Trivial identity assignment: `admin@...` becomes the admin account,
    /// anything else becomes a student keyed by the sanitized local part.
    pub fn from_email(email: &str) -> Self {
        let is_admin = email.starts_with("admin@");
        let local_part = email.split('@').next().unwrap_or_default();
        let sanitized: String = local_part.chars().filter(|c| c.is_alphanumeric()).collect();
        Self {
            id: if is_admin {
                "admin1".to_string()
            } else {
                format!("user_{sanitized}")
            },
            name: if is_admin {
                "System Admin".to_string()
            } else {
                format!("Student {local_part}")
            },
            email: email.to_string(),
            hostel: "Nightingale Hall".to_string(),
            room_no: "302".to_string(),
            phone: "+91 9876543210".to_string(),
            points: 450,
            role: if is_admin {
                UserRole::Admin
            } else {
                UserRole::Student
            },
            location: None,
            avatar: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
