//! Wire DTOs for the MPet REST backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde stays a plain
//! mapping. Classification fields the backend stores as enums (`tipo`,
//! `porte`, `sexo`, `status`) arrive as open strings and stay open strings
//! here: old rows and new backend values must render, not fail the whole
//! listing. The one closed set is [`Role`]: access control never guesses.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::auth::role::Role;

/// The authenticated user, as returned by `POST /api/auth/login` and as
/// persisted by the session store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Login key: an 11-digit CPF, or the literal `admin`.
    pub cpf: String,
    /// Display name.
    pub nome: String,
    /// Role deciding which routes this identity may reach.
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    /// ONG the identity belongs to. Volunteers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_ong: Option<i32>,
    /// Position inside the ONG (`COORDENADOR`, ...). Volunteers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo: Option<String>,
    /// ISO-8601 instant of the last login, stamped client-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_at: Option<String>,
}

impl Identity {
    /// Merge the set fields of `patch` into `self`.
    pub fn apply(&mut self, patch: &IdentityPatch) {
        if let Some(nome) = &patch.nome {
            self.nome = nome.clone();
        }
        if let Some(email) = &patch.email {
            self.email = Some(email.clone());
        }
        if let Some(telefone) = &patch.telefone {
            self.telefone = Some(telefone.clone());
        }
    }
}

/// Partial profile update merged into the stored identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityPatch {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

/// Body of `POST /api/auth/login` responses.
///
/// Success and failure share this shape: failure bodies carry only `error`,
/// and the defaulted `success` field reads as false for them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user: Option<Identity>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of interest mutations (`POST`/`PUT`/`DELETE /api/interesses`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// An animal available for adoption (`GET /api/animais`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: i32,
    /// Owning ONG.
    pub id_ong: i32,
    pub nome: String,
    /// `CACHORRO` or `GATO`.
    pub tipo: String,
    /// `PEQUENO`, `MEDIO`, `GRANDE`, or empty when unset.
    #[serde(default)]
    pub porte: String,
    /// `M` or `F`.
    #[serde(default)]
    pub sexo: String,
    #[serde(default)]
    pub vacinado: bool,
    #[serde(default)]
    pub descricao: String,
    /// Photo URL; empty means "pick a placeholder".
    #[serde(default)]
    pub image_url: String,
}

/// ONG row (`GET /api/ongs`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ong {
    pub id: i32,
    pub nome: String,
    #[serde(default)]
    pub cnpj: String,
    #[serde(default)]
    pub endereco: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default)]
    pub ativo: bool,
}

/// Adopter row (`GET /api/adotantes`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adotante {
    pub cpf: String,
    pub nome: String,
    #[serde(default)]
    pub telefone: String,
}

/// Volunteer row (`GET /api/voluntarios`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voluntario {
    pub cpf: String,
    pub nome: String,
    #[serde(default)]
    pub telefone: String,
    pub id_ong: i32,
    #[serde(default)]
    pub cargo: String,
}

/// An adoption interest (`/api/interesses`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interesse {
    pub id: i32,
    pub cpf_adotante: String,
    pub id_animal: i32,
    /// `PENDENTE`, `APROVADO`, or `RECUSADO`.
    #[serde(default)]
    pub status: String,
}

impl Interesse {
    pub fn is_pendente(&self) -> bool {
        self.status == "PENDENTE"
    }

    pub fn is_aprovado(&self) -> bool {
        self.status == "APROVADO"
    }
}
