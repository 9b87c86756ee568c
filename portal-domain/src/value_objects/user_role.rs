// User role value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    CenterStaff,
    BranchStaff,
    Leader,
    Member,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::CenterStaff => "CenterStaff",
            UserRole::BranchStaff => "BranchStaff",
            UserRole::Leader => "Leader",
            UserRole::Member => "Member",
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(
            self,
            UserRole::Admin | UserRole::CenterStaff | UserRole::BranchStaff
        )
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Member
    }
}
