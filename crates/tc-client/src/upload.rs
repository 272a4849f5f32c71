//! Evidence (screenshot) upload.

use std::path::Path;

use reqwest::multipart;
use tc_core::entities::report::UploadedEvidence;

use crate::error::ClientError;
use crate::http::check_response;
use crate::VerifyClient;

impl VerifyClient {
    /// Upload a screenshot and receive the server-assigned reference.
    ///
    /// Fails loudly on any non-success status; the caller treats this as
    /// submission-blocking, never best-effort.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::File`] if the file cannot be read, and
    /// [`ClientError`] transport/API variants for everything past that.
    pub async fn upload_screenshot(
        &self,
        file: &Path,
        token: &str,
    ) -> Result<UploadedEvidence, ClientError> {
        let bytes = tokio::fs::read(file).await.map_err(|source| ClientError::File {
            path: file.display().to_string(),
            source,
        })?;

        let file_name = file
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("screenshot")
            .to_string();
        let mime = image_mime(&file_name);

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)?;
        let form = multipart::Form::new().part("file", part);

        let resp = self
            .http
            .post(self.url("/reports/upload-screenshot"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }
}

/// Content type from the file name extension; unknown extensions are sent as
/// opaque bytes and left for the server to reject.
fn image_mime(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn image_mime_from_extension() {
        assert_eq!(image_mime("scr.png"), "image/png");
        assert_eq!(image_mime("SCR.JPG"), "image/jpeg");
        assert_eq!(image_mime("photo.jpeg"), "image/jpeg");
        assert_eq!(image_mime("anim.gif"), "image/gif");
        assert_eq!(image_mime("no_extension"), "application/octet-stream");
    }

    #[test]
    fn evidence_response_parses() {
        let json = r#"{"path": "uploads/scr-7.png", "url": "http://localhost:3001/uploads/scr-7.png"}"#;
        let evidence: UploadedEvidence = serde_json::from_str(json).unwrap();
        assert_eq!(evidence.path, "uploads/scr-7.png");
        assert!(evidence.url.is_some());

        let bare: UploadedEvidence = serde_json::from_str(r#"{"path": "uploads/scr-8.png"}"#).unwrap();
        assert_eq!(bare.url, None);
    }
}
