//! User roles as issued by the backend at login.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use serde::{Deserialize, Serialize};

/// Role attached to an authenticated identity.
///
/// Serialized with the backend's uppercase wire strings. The set is closed:
/// a login response carrying anything else fails to deserialize and is
/// treated as a malformed response, never as a guessed role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "ADOTANTE")]
    Adotante,
    #[serde(rename = "VOLUNTARIO")]
    Voluntario,
}

impl Role {
    /// All roles, in display order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Adotante, Role::Voluntario];

    /// The backend's wire string for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Adotante => "ADOTANTE",
            Role::Voluntario => "VOLUNTARIO",
        }
    }

    /// Portuguese label shown in profile and navigation chrome.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::Adotante => "Adotante",
            Role::Voluntario => "Voluntário",
        }
    }
}
