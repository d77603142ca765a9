pub mod repositories;

use eyre::{Result, WrapErr, eyre};
use mentorbook_core::errors::{MentorError, MentorResult};
use reqwest::{Response, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000/api";

/// HTTP handle on the external mentor/booking service.
///
/// Requests go out once: there is no retry and no client-side timeout.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

pub fn create_client(base_url: &str) -> Result<BackendClient> {
    let http = reqwest::Client::builder()
        .build()
        .wrap_err("Failed to build backend HTTP client")?;

    Ok(BackendClient {
        http,
        base_url: base_url.trim_end_matches('/').to_string(),
    })
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl BackendClient {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> MentorResult<T> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .wrap_err_with(|| format!("GET {} failed", url))?;

        decode(check_status(response).await?).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> MentorResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.post(path, body).await?;
        decode(response).await
    }

    /// POSTs `body` and only checks that the backend accepted it.
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> MentorResult<()> {
        self.post(path, body).await.map(|_| ())
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> MentorResult<Response> {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .wrap_err_with(|| format!("POST {} failed", url))?;

        check_status(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> MentorResult<T> {
    let url = response.url().to_string();
    let body = response
        .json::<T>()
        .await
        .wrap_err_with(|| format!("Unexpected response body from {}", url))?;
    Ok(body)
}

/// Passes successful responses through and turns the rest into [`MentorError`].
///
/// 404 and 409 keep their meaning. Other failures become `Rejected` when the
/// backend explained itself with a `message`, and `Transport` when it did not.
async fn check_status(response: Response) -> MentorResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty());

    warn!(%status, %url, ?message, "Backend request failed");

    let error = match status {
        StatusCode::NOT_FOUND => {
            MentorError::NotFound(message.unwrap_or_else(|| format!("Nothing found at {}", url)))
        }
        StatusCode::CONFLICT => {
            MentorError::Conflict(message.unwrap_or_else(|| "Resource already exists".to_string()))
        }
        _ => match message {
            Some(message) => MentorError::Rejected(message),
            None => MentorError::Transport(eyre!("Backend responded with status {} for {}", status, url)),
        },
    };
    Err(error)
}
