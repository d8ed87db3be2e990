//! Terminals API. Read-only: physical point-of-sale devices linked to a
//! profile.

use crate::client::ClientCore;
use crate::errors::MollieResult;
use crate::pagination::ListLinks;
use crate::query::QueryBuilder;
use crate::transport::ApiResponse;
use crate::types::Mode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A point-of-sale terminal resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Terminal {
    /// Always `terminal`
    pub resource: String,
    /// Terminal identifier, e.g. `term_7MgL4wea46qkRcoTZjWEH`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    /// `pending`, `active` or `inactive`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Options for listing terminals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTerminalsOptions {
    pub from: Option<String>,
    pub limit: Option<u32>,
    /// Required for organization credentials
    pub profile_id: Option<String>,
}

impl ListTerminalsOptions {
    pub(crate) fn to_query(&self) -> Option<String> {
        let mut q = QueryBuilder::new();
        q.push_opt("from", self.from.as_ref());
        q.push_opt("limit", self.limit.as_ref());
        q.push_opt("profileId", self.profile_id.as_ref());
        q.finish()
    }
}

/// Paginated list of terminals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TerminalList {
    pub count: u32,
    #[serde(rename = "_embedded")]
    pub embedded: TerminalListEmbed,
    #[serde(rename = "_links")]
    pub links: ListLinks,
}

/// Embedded collection of a terminal list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TerminalListEmbed {
    pub terminals: Vec<Terminal>,
}

/// Operations on the Terminals API.
#[derive(Clone)]
pub struct TerminalsService {
    core: Arc<ClientCore>,
}

impl TerminalsService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Retrieves a single terminal.
    pub async fn get(&self, id: &str) -> MollieResult<ApiResponse<Terminal>> {
        self.core.get(&format!("terminals/{}", id), None).await
    }

    /// Lists terminals.
    pub async fn list(&self, options: Option<ListTerminalsOptions>) -> MollieResult<ApiResponse<TerminalList>> {
        let query = options.as_ref().and_then(ListTerminalsOptions::to_query);
        self.core.get("terminals", query).await
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
    async fn test_get_terminal() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_json(
            200,
            r#"{"resource":"terminal","id":"term_7MgL4wea46qkRcoTZjWEH","status":"active"}"#,
        );
        let client = test_client(transport.clone());

        let terminal = client
            .terminals
            .get("term_7MgL4wea46qkRcoTZjWEH")
            .await
            .unwrap();

        assert_eq!(terminal.status.as_deref(), Some("active"));
        assert_eq!(
            transport.recorded()[0].url.path(),
            "/v2/terminals/term_7MgL4wea46qkRcoTZjWEH"
        );
    }

    #[tokio::test]
    async fn test_list_with_profile_filter() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_json(
            200,
            r#"{"count":0,"_embedded":{"terminals":[]},
                "_links":{"self":{"href":"https://srv/v2/terminals","type":"application/hal+json"}}}"#,
        );
        let client = test_client(transport.clone());

        let options = ListTerminalsOptions {
            profile_id: Some("pfl_v9hTwCvYqw".to_string()),
            limit: Some(10),
            ..Default::default()
        };
        client.terminals.list(Some(options)).await.unwrap();

        assert_eq!(
            transport.recorded()[0].url.query().unwrap(),
            "limit=10&profileId=pfl_v9hTwCvYqw"
        );
    }
}
