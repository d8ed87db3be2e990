//! Profiles API. A profile groups the settings of one website or app.

use crate::client::ClientCore;
use crate::errors::MollieResult;
use crate::pagination::ListLinks;
use crate::query::QueryBuilder;
use crate::transport::{ApiResponse, HttpResponse};
use crate::types::Mode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A website profile resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Always `profile`
    pub resource: String,
    /// Profile identifier, e.g. `pfl_v9hTwCvYqw`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Industry category code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_category: Option<String>,
    /// `unverified`, `verified` or `blocked`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body for creating or updating a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
}

/// Options for listing profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProfilesOptions {
    pub from: Option<String>,
    pub limit: Option<u32>,
}

impl ListProfilesOptions {
    pub(crate) fn to_query(&self) -> Option<String> {
        let mut q = QueryBuilder::new();
        q.push_opt("from", self.from.as_ref());
        q.push_opt("limit", self.limit.as_ref());
        q.finish()
    }
}

/// Paginated list of profiles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileList {
    pub count: u32,
    #[serde(rename = "_embedded")]
    pub embedded: ProfileListEmbed,
    #[serde(rename = "_links")]
    pub links: ListLinks,
}

/// Embedded collection of a profile list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileListEmbed {
    pub profiles: Vec<Profile>,
}

/// Operations on the Profiles API.
#[derive(Clone)]
pub struct ProfilesService {
    core: Arc<ClientCore>,
}

impl ProfilesService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Creates a profile (organization credentials only).
    pub async fn create(&self, profile: ProfileRequest) -> MollieResult<ApiResponse<Profile>> {
        self.core.post("profiles", &profile, None).await
    }

    /// Retrieves a single profile.
    pub async fn get(&self, id: &str) -> MollieResult<ApiResponse<Profile>> {
        self.core.get(&format!("profiles/{}", id), None).await
    }

    /// Retrieves the profile belonging to the API key in use.
    pub async fn current(&self) -> MollieResult<ApiResponse<Profile>> {
        self.core.get("profiles/me", None).await
    }

    /// Updates a profile.
    pub async fn update(&self, id: &str, profile: ProfileRequest) -> MollieResult<ApiResponse<Profile>> {
        self.core.patch(&format!("profiles/{}", id), &profile).await
    }

    /// Deletes a profile and its pending payments.
    pub async fn delete(&self, id: &str) -> MollieResult<HttpResponse> {
        self.core
            .delete_no_content(&format!("profiles/{}", id))
            .await
    }

    /// Lists the organization's profiles.
    pub async fn list(&self, options: Option<ListProfilesOptions>) -> MollieResult<ApiResponse<ProfileList>> {
        let query = options.as_ref().and_then(ListProfilesOptions::to_query);
        self.core.get("profiles", query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::mocks::MockTransport;
    use crate::Client;
    use pretty_assertions::assert_eq;

    fn test_client(transport: Arc<MockTransport>) -> Client {
        Client::builder(Config::live("test_abc"))
            .base_url("https://srv/")
            .transport(transport)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_current_profile_path() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_json(200, r#"{"resource":"profile","id":"pfl_v9hTwCvYqw"}"#);
        let client = test_client(transport.clone());

        let profile = client.profiles.current().await.unwrap();
        assert_eq!(profile.id, "pfl_v9hTwCvYqw");
        assert_eq!(transport.recorded()[0].url.path(), "/v2/profiles/me");
    }

    #[tokio::test]
    async fn test_update_profile() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_json(
            200,
            r#"{"resource":"profile","id":"pfl_v9hTwCvYqw","name":"New name"}"#,
        );
        let client = test_client(transport.clone());

        let updated = client
            .profiles
            .update(
                "pfl_v9hTwCvYqw",
                ProfileRequest {
                    name: Some("New name".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name.as_deref(), Some("New name"));
        assert_eq!(
            transport.recorded()[0].json_body(),
            serde_json::json!({"name": "New name"})
        );
    }
}
