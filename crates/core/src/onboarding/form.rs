//! Onboarding form payload and validation
//!
//! Field names mirror the source-of-record columns (pt-BR business entity
//! data). Validation messages are user-facing and therefore also pt-BR.

use once_cell::sync::Lazy;
use painel_domain::{OrganizationDraft, PainelError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Formatted CNPJ: `00.000.000/0000-00`
static CNPJ_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}$").expect("literal pattern")
});

/// Business-entity payload submitted by the onboarding form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingForm {
    pub nome_fantasia: String,
    pub razao_social: String,
    pub email: String,
    #[serde(default)]
    pub telefone: String,
    /// Formatted CNPJ as typed (`00.000.000/0000-00`)
    pub cnpj: String,
    #[serde(default)]
    pub cep: String,
    #[serde(default)]
    pub endereco: String,
    #[serde(default)]
    pub numero: String,
    #[serde(default)]
    pub complemento: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub cidade: String,
    #[serde(default)]
    pub estado: String,
}

impl OnboardingForm {
    /// Validate the payload before any network call
    ///
    /// # Errors
    /// Returns `PainelError::Validation` when a required field is empty or
    /// the CNPJ is not in the fixed `00.000.000/0000-00` format. A
    /// digits-only CNPJ fails: the form is expected to submit the formatted
    /// value.
    pub fn validate(&self) -> Result<()> {
        let required = [&self.nome_fantasia, &self.razao_social, &self.cnpj, &self.email];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(PainelError::Validation(
                "Por favor, preencha todos os campos obrigatórios".to_string(),
            ));
        }

        if !CNPJ_FORMAT.is_match(&self.cnpj) {
            return Err(PainelError::Validation(
                "CNPJ deve estar no formato 00.000.000/0000-00".to_string(),
            ));
        }

        Ok(())
    }

    /// The CNPJ with formatting punctuation removed, as stored
    #[must_use]
    pub fn cnpj_digits(&self) -> String {
        self.cnpj.chars().filter(char::is_ascii_digit).collect()
    }

    /// Build the organization insert payload for the owning user
    #[must_use]
    pub fn into_draft(self, usuario_id: &str) -> OrganizationDraft {
        let cnpj = self.cnpj_digits();
        OrganizationDraft {
            nome_fantasia: self.nome_fantasia,
            razao_social: self.razao_social,
            email: self.email,
            telefone: self.telefone,
            cnpj,
            cep: self.cep,
            endereco: self.endereco,
            numero: self.numero,
            complemento: self.complemento,
            bairro: self.bairro,
            cidade: self.cidade,
            estado: self.estado,
            usuario_id: usuario_id.to_string(),
            tipo: "gestor".to_string(),
        }
    }
}
