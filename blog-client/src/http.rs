use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::model::{Post, PostDraft};

/// Typed HTTP client for the post store's `/posts` contract. One method
/// per operation; each issues exactly one request and maps the response
/// into the client error taxonomy.
#[derive(Clone)]
pub struct PostApi {
    client: Client,
    base_url: String,
}

impl PostApi {
    /// `endpoint` is the store's base URL, the single configuration knob
    /// of the client.
    pub fn new(endpoint: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Reads the base URL from `BLOG_API_URL` (a `.env` file is honored),
    /// for callers that do not take the endpoint as an argument.
    pub fn from_env() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();
        let endpoint = std::env::var("BLOG_API_URL")
            .map_err(|_| ClientError::Validation("BLOG_API_URL must be set".into()))?;
        Self::new(&endpoint)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, ClientError> {
        let resp = self
            .client
            .get(format!("{}/posts", self.base_url))
            .send()
            .await?;

        if resp.status().is_success() {
            parse_body(resp).await
        } else {
            Err(ClientError::from_response(resp, false).await)
        }
    }

    pub async fn get_post(&self, post_id: &str) -> Result<Post, ClientError> {
        let resp = self
            .client
            .get(format!("{}/posts/{}", self.base_url, post_id))
            .send()
            .await?;

        if resp.status().is_success() {
            parse_body(resp).await
        } else {
            Err(ClientError::from_response(resp, true).await)
        }
    }

    pub async fn create_post(&self, draft: &PostDraft) -> Result<Post, ClientError> {
        draft.validate()?;

        let resp = self
            .client
            .post(format!("{}/posts", self.base_url))
            .json(draft)
            .send()
            .await?;

        if resp.status().is_success() {
            parse_body(resp).await
        } else {
            Err(ClientError::from_response(resp, false).await)
        }
    }

    /// Full replacement of the three writable fields.
    pub async fn update_post(&self, post_id: &str, draft: &PostDraft) -> Result<Post, ClientError> {
        draft.validate()?;

        let resp = self
            .client
            .put(format!("{}/posts/{}", self.base_url, post_id))
            .json(draft)
            .send()
            .await?;

        if resp.status().is_success() {
            parse_body(resp).await
        } else {
            Err(ClientError::from_response(resp, true).await)
        }
    }

    pub async fn delete_post(&self, post_id: &str) -> Result<(), ClientError> {
        let resp = self
            .client
            .delete(format!("{}/posts/{}", self.base_url, post_id))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(ClientError::from_response(resp, true).await)
        }
    }
}

/// Parses a 2xx body against the expected schema; a mismatch is an
/// `UnexpectedResponse`, never an unchecked field access downstream.
async fn parse_body<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::UnexpectedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_base_url_loses_its_trailing_slash() {
        let api = PostApi::new("http://localhost:8080/").unwrap();
        assert_eq!(api.base_url(), "http://localhost:8080");
    }

    #[test]
    fn from_env_reads_the_single_configuration_knob() {
        unsafe { std::env::set_var("BLOG_API_URL", "http://store.example:9090/") };
        let api = PostApi::from_env().unwrap();
        assert_eq!(api.base_url(), "http://store.example:9090");
        unsafe { std::env::remove_var("BLOG_API_URL") };
    }
}
