//! Admin-scoped entity models and the fixed PATCH allow-lists.
//!
//! The PATCH payloads deliberately cover a fixed subset of fields. Server
//! managed state (report history, counters, timestamps) is never echoed
//! back, so an admin save cannot clobber it.

use serde::{Deserialize, Serialize};

/// Full company record from `GET /verification/admin/company/{nip}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCompany {
    pub nip: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub trust_score: Option<u32>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub status_vat: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub reg_date: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub phones: Vec<LinkedPhone>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Phone number linked to a company record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedPhone {
    pub number: String,
    #[serde(default)]
    pub country_code: Option<String>,
}

/// Allow-listed editable subset of a company record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPatch {
    pub name: String,
    pub trust_score: u32,
    pub risk_level: String,
    pub status_vat: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&AdminCompany> for CompanyPatch {
    /// Seed an editable copy from the fetched record, applying the same
    /// fallbacks the edit form uses for unset fields.
    fn from(company: &AdminCompany) -> Self {
        Self {
            name: company.name.clone().unwrap_or_default(),
            trust_score: company.trust_score.unwrap_or(0),
            risk_level: company
                .risk_level
                .clone()
                .unwrap_or_else(|| "Sredni".to_string()),
            status_vat: company
                .status_vat
                .clone()
                .unwrap_or_else(|| "Nieznany".to_string()),
            address: company.address.clone(),
            reg_date: company.reg_date.clone(),
            source: company.source.clone(),
            notes: company.notes.clone(),
        }
    }
}

/// Full person record from `GET /verification/admin/person/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPerson {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bank_account: Option<String>,
    #[serde(default)]
    pub trust_score: Option<u32>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub reports: Vec<AdminReport>,
    #[serde(default, rename = "_count")]
    pub counts: Option<PersonCounts>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonCounts {
    #[serde(default)]
    pub reports: u32,
}

/// One report row as the admin person view receives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminReport {
    pub id: i64,
    pub rating: u8,
    pub reason: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub bank_account: Option<String>,
    #[serde(default)]
    pub reported_email: Option<String>,
    #[serde(default)]
    pub facebook_link: Option<String>,
}

/// Allow-listed editable subset of a person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPatch {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    pub trust_score: u32,
    pub risk_level: String,
}

impl From<&AdminPerson> for PersonPatch {
    fn from(person: &AdminPerson) -> Self {
        Self {
            name: person.name.clone().unwrap_or_default(),
            email: person.email.clone(),
            phone: person.phone.clone(),
            bank_account: person.bank_account.clone(),
            trust_score: person.trust_score.unwrap_or(0),
            risk_level: person
                .risk_level
                .clone()
                .unwrap_or_else(|| "Sredni".to_string()),
        }
    }
}
