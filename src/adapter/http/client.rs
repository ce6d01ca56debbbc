//! HTTP Upload Repository
//!
//! Streams a local file as the body of an HTTP PUT with basic auth.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};

use super::classify::classify_error;
use crate::application::dto::upload_settings::UploadSettings;
use crate::domain::entities::credentials::Credentials;
use crate::domain::entities::upload_outcome::UploadOutcome;
use crate::domain::entities::upload_task::UploadTask;
use crate::domain::repositories::upload_repository::UploadRepository;

/// Append `file_name` to `base` as a single, percent-encoded path segment
pub fn object_url(base: &Url, file_name: &str) -> Option<Url> {
    let mut url = base.clone();
    url.path_segments_mut().ok()?.pop_if_empty().push(file_name);
    Some(url)
}

/// UploadRepository backed by a shared reqwest client
pub struct HttpUploadRepository {
    client: Client,
    base_url: Url,
}

impl HttpUploadRepository {
    pub fn new(settings: &UploadSettings) -> Result<Self> {
        let base_url = Url::parse(&settings.base_url)
            .with_context(|| format!("Invalid upload base URL: {}", settings.base_url))?;

        let mut builder = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .read_timeout(settings.read_timeout);
        if !settings.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl UploadRepository for HttpUploadRepository {
    async fn put_file(&self, task: &UploadTask, credentials: &Credentials) -> UploadOutcome {
        let Some(file_name) = task.object_name() else {
            return UploadOutcome::LocalIo(format!(
                "file name is not valid UTF-8: {}",
                task.path().display()
            ));
        };
        let Some(url) = object_url(&self.base_url, file_name) else {
            return UploadOutcome::Transport(format!(
                "cannot build object URL from {}",
                self.base_url
            ));
        };

        let file = match tokio::fs::File::open(task.path()).await {
            Ok(file) => file,
            Err(e) => return UploadOutcome::LocalIo(e.to_string()),
        };

        debug!("PUT {}", url);
        let result = self
            .client
            .put(url)
            .basic_auth(credentials.case_id(), Some(credentials.token()))
            .body(file)
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!("{} -> HTTP {}", file_name, status);
                UploadOutcome::from_status(status)
            }
            Err(e) => classify_error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://cxd.cisco.com/home/").unwrap()
    }

    #[test]
    fn test_object_url_appends_basename() {
        let url = object_url(&base(), "show-tech.txt").unwrap();
        assert_eq!(url.as_str(), "https://cxd.cisco.com/home/show-tech.txt");
    }

    #[test]
    fn test_object_url_without_trailing_slash() {
        let base = Url::parse("https://cxd.cisco.com/home").unwrap();
        let url = object_url(&base, "core.gz").unwrap();
        assert_eq!(url.as_str(), "https://cxd.cisco.com/home/core.gz");
    }

    #[test]
    fn test_object_url_encodes_reserved_characters() {
        let url = object_url(&base(), "my file#1?.txt").unwrap();
        assert_eq!(
            url.as_str(),
            "https://cxd.cisco.com/home/my%20file%231%3F.txt"
        );
    }

    #[test]
    fn test_object_url_cannot_be_a_base() {
        let base = Url::parse("mailto:support@example.com").unwrap();
        assert!(object_url(&base, "a.txt").is_none());
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let settings = UploadSettings {
            base_url: "not a url".to_string(),
            ..UploadSettings::default()
        };
        assert!(HttpUploadRepository::new(&settings).is_err());
    }

    #[test]
    fn test_new_with_default_settings() {
        let repo = HttpUploadRepository::new(&UploadSettings::default()).unwrap();
        assert_eq!(repo.base_url.as_str(), "https://cxd.cisco.com/home/");
    }
}
