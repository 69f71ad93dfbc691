//! Organization (empresa) types
//!
//! One organization row is created when a user completes onboarding. The
//! field names mirror the `empresas` table columns; the CNPJ is stored
//! digits-only, the formatted form lives only in the submitted payload.

use serde::{Deserialize, Serialize};

/// Organization row as returned by the hosted backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Server-assigned id
    pub id: String,
    pub nome_fantasia: String,
    pub razao_social: String,
    pub email: String,
    pub telefone: String,
    /// Digits-only CNPJ; unique on the backend
    pub cnpj: String,
    pub cep: String,
    pub endereco: String,
    pub numero: String,
    #[serde(default)]
    pub complemento: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    /// Owning user (identity id)
    pub usuario_id: String,
    /// Role marker written by onboarding; always `gestor`
    pub tipo: String,
}

/// Insert payload for a new organization row
///
/// Same columns as [`Organization`] minus the server-assigned id. Built by
/// the onboarding service from a validated form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationDraft {
    pub nome_fantasia: String,
    pub razao_social: String,
    pub email: String,
    pub telefone: String,
    /// Digits-only CNPJ
    pub cnpj: String,
    pub cep: String,
    pub endereco: String,
    pub numero: String,
    #[serde(default)]
    pub complemento: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub usuario_id: String,
    pub tipo: String,
}
