//! Clients API. For partners: the merchant organizations linked to the
//! partner account. Requires an organization token or app access token.

use crate::client::ClientCore;
use crate::errors::MollieResult;
use crate::pagination::ListLinks;
use crate::query::{QueryBuilder, Separator};
use crate::transport::ApiResponse;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A linked merchant organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartnerClient {
    /// Always `client`
    pub resource: String,
    /// The client's organization identifier, e.g. `org_1337`
    pub id: String,
    /// How the client was linked: `oauth`, `invoice` or absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_created_at: Option<String>,
    /// Present when requested through `embed=organization`
    #[serde(rename = "_embedded", skip_serializing_if = "Option::is_none")]
    pub embedded: Option<PartnerClientEmbed>,
}

/// Embedded sub-resources of a partner client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PartnerClientEmbed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding: Option<serde_json::Value>,
}

/// Options for fetching and listing partner clients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartnerClientOptions {
    pub from: Option<String>,
    pub limit: Option<u32>,
    /// Sub-resources to embed: `organization` and/or `onboarding`
    pub embed: Vec<String>,
}

impl PartnerClientOptions {
    pub(crate) fn to_query(&self) -> Option<String> {
        let mut q = QueryBuilder::new();
        q.push_opt("from", self.from.as_ref());
        q.push_opt("limit", self.limit.as_ref());
        q.push_list("embed", &self.embed, Separator::Plus);
        q.finish()
    }
}

/// Paginated list of partner clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartnerClientList {
    pub count: u32,
    #[serde(rename = "_embedded")]
    pub embedded: PartnerClientListEmbed,
    #[serde(rename = "_links")]
    pub links: ListLinks,
}

/// Embedded collection of a partner client list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartnerClientListEmbed {
    pub clients: Vec<PartnerClient>,
}

/// Operations on the Clients API.
#[derive(Clone)]
pub struct PartnerClientsService {
    core: Arc<ClientCore>,
}

impl PartnerClientsService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Retrieves a single linked client.
    pub async fn get(
        &self,
        id: &str,
        options: Option<PartnerClientOptions>,
    ) -> MollieResult<ApiResponse<PartnerClient>> {
        let query = options.as_ref().and_then(PartnerClientOptions::to_query);
        self.core.get(&format!("clients/{}", id), query).await
    }

    /// Lists linked clients.
    pub async fn list(
        &self,
        options: Option<PartnerClientOptions>,
    ) -> MollieResult<ApiResponse<PartnerClientList>> {
        let query = options.as_ref().and_then(PartnerClientOptions::to_query);
        self.core.get("clients", query).await
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
        Client::builder(Config::live("org_token_abc"))
            .base_url("https://srv/")
            .transport(transport)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_with_embeds() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_json(
            200,
            r#"{"resource":"client","id":"org_1337",
                "_embedded":{"organization":{"id":"org_1337","name":"Acme"}}}"#,
        );
        let client = test_client(transport.clone());

        let options = PartnerClientOptions {
            embed: vec!["organization".to_string(), "onboarding".to_string()],
            ..Default::default()
        };
        let partner_client = client.clients.get("org_1337", Some(options)).await.unwrap();

        assert!(partner_client.embedded.as_ref().unwrap().organization.is_some());
        assert_eq!(
            transport.recorded()[0].url.as_str(),
            "https://srv/v2/clients/org_1337?embed=organization+onboarding"
        );
    }

    #[tokio::test]
    async fn test_list_clients() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_json(
            200,
            r#"{"count":1,
                "_embedded":{"clients":[{"resource":"client","id":"org_1337"}]},
                "_links":{"self":{"href":"https://srv/v2/clients","type":"application/hal+json"}}}"#,
        );
        let client = test_client(transport.clone());

        let list = client.clients.list(None).await.unwrap();
        assert_eq!(list.count, 1);
        assert_eq!(list.embedded.clients[0].id, "org_1337");
    }
}
