//! Admin-scoped entity reads, PATCHes, and phone linking.

use serde::Serialize;
use tc_core::entities::admin::{AdminCompany, AdminPerson, CompanyPatch, PersonPatch};
use tc_core::query::normalize_link_phone;

use crate::error::ClientError;
use crate::http::check_response;
use crate::lookup::Lookup;
use crate::VerifyClient;

#[derive(Serialize)]
struct LinkPhoneRequest<'a> {
    nip: &'a str,
    phone: &'a str,
}

impl VerifyClient {
    /// Fetch a full company record by tax ID.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status
    /// other than 404.
    pub async fn admin_company(&self, nip: &str) -> Result<Lookup<AdminCompany>, ClientError> {
        let path = format!("/verification/admin/company/{}", urlencoding::encode(nip));
        let resp = self.get_fresh(&path).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Lookup::NotFound);
        }
        let resp = check_response(resp).await?;
        Ok(Lookup::Found(resp.json().await?))
    }

    /// PATCH the allow-listed subset of a company record.
    ///
    /// The payload type is the allow-list: server-managed fields (report
    /// history, counters) cannot be sent from here.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or any non-success
    /// status.
    pub async fn patch_company(
        &self,
        nip: &str,
        patch: &CompanyPatch,
        token: &str,
    ) -> Result<(), ClientError> {
        let path = format!("/verification/admin/company/{}", urlencoding::encode(nip));
        let resp = self
            .http
            .patch(self.url(&path))
            .bearer_auth(token)
            .json(patch)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }

    /// Link an additional phone number to a company, then re-fetch the
    /// record.
    ///
    /// The number is normalized to a leading `+` before sending. There is no
    /// optimistic update; the re-fetch is the only mechanism for reflecting
    /// the new association.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the link call or the re-fetch fails.
    pub async fn link_phone(
        &self,
        nip: &str,
        phone: &str,
        token: &str,
    ) -> Result<Lookup<AdminCompany>, ClientError> {
        let normalized = normalize_link_phone(phone);
        let resp = self
            .http
            .post(self.url("/verification/admin/link-phone"))
            .bearer_auth(token)
            .json(&LinkPhoneRequest {
                nip,
                phone: &normalized,
            })
            .send()
            .await?;
        check_response(resp).await?;

        self.admin_company(nip).await
    }

    /// Fetch a full person record by numeric ID.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::admin_company`].
    pub async fn admin_person(&self, id: i64) -> Result<Lookup<AdminPerson>, ClientError> {
        let path = format!("/verification/admin/person/{id}");
        let resp = self.get_fresh(&path).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Lookup::NotFound);
        }
        let resp = check_response(resp).await?;
        Ok(Lookup::Found(resp.json().await?))
    }

    /// PATCH the allow-listed subset of a person record.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or any non-success
    /// status.
    pub async fn patch_person(
        &self,
        id: i64,
        patch: &PersonPatch,
        token: &str,
    ) -> Result<(), ClientError> {
        let path = format!("/verification/admin/person/{id}");
        let resp = self
            .http
            .patch(self.url(&path))
            .bearer_auth(token)
            .json(patch)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }

    /// List all company records.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn admin_companies(&self) -> Result<Vec<AdminCompany>, ClientError> {
        let resp = self.get_fresh("/verification/admin/companies").send().await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }

    /// List all person records.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn admin_persons(&self) -> Result<Vec<AdminPerson>, ClientError> {
        let resp = self.get_fresh("/verification/admin/persons").send().await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn link_request_normalized_number_shape() {
        let json = serde_json::to_value(LinkPhoneRequest {
            nip: "5252525252",
            phone: &normalize_link_phone("48600700800"),
        })
        .unwrap();
        assert_eq!(json["nip"], "5252525252");
        assert_eq!(json["phone"], "+48600700800");
    }
}
