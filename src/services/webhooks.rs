//! Webhooks API. Manages webhook subscriptions and the event types they
//! listen to.

use crate::client::ClientCore;
use crate::errors::MollieResult;
use crate::pagination::ListLinks;
use crate::query::QueryBuilder;
use crate::transport::{ApiResponse, HttpResponse};
use crate::types::Mode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A webhook subscription resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Always `webhook`
    pub resource: String,
    /// Webhook identifier, e.g. `hook_B2EyhTH5N4KWUnoYPcgiH`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    /// URL Mollie delivers events to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Subscribed event types, e.g. `payment-link.paid`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_types: Option<Vec<String>>,
    /// `enabled`, `blocked` or `disabled`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body for creating or updating a webhook subscription.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

/// Options for listing webhooks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListWebhooksOptions {
    pub from: Option<String>,
    pub limit: Option<u32>,
    /// Filter on a subscribed event type
    pub event_types: Option<String>,
}

impl ListWebhooksOptions {
    pub(crate) fn to_query(&self) -> Option<String> {
        let mut q = QueryBuilder::new();
        q.push_opt("from", self.from.as_ref());
        q.push_opt("limit", self.limit.as_ref());
        q.push_opt("eventTypes", self.event_types.as_ref());
        q.finish()
    }
}

/// Paginated list of webhooks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookList {
    pub count: u32,
    #[serde(rename = "_embedded")]
    pub embedded: WebhookListEmbed,
    #[serde(rename = "_links")]
    pub links: ListLinks,
}

/// Embedded collection of a webhook list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookListEmbed {
    pub webhooks: Vec<Webhook>,
}

/// Operations on the Webhooks API.
#[derive(Clone)]
pub struct WebhooksService {
    core: Arc<ClientCore>,
}

impl WebhooksService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Creates a webhook subscription.
    pub async fn create(&self, mut webhook: WebhookRequest) -> MollieResult<ApiResponse<Webhook>> {
        if self.core.needs_testmode() {
            webhook.testmode = Some(true);
        }
        self.core.post("webhooks", &webhook, None).await
    }

    /// Retrieves a single webhook subscription.
    pub async fn get(&self, id: &str) -> MollieResult<ApiResponse<Webhook>> {
        self.core.get(&format!("webhooks/{}", id), None).await
    }

    /// Updates a webhook subscription.
    pub async fn update(&self, id: &str, mut webhook: WebhookRequest) -> MollieResult<ApiResponse<Webhook>> {
        if self.core.needs_testmode() {
            webhook.testmode = Some(true);
        }
        self.core.patch(&format!("webhooks/{}", id), &webhook).await
    }

    /// Deletes a webhook subscription.
    pub async fn delete(&self, id: &str) -> MollieResult<HttpResponse> {
        self.core
            .delete_no_content(&format!("webhooks/{}", id))
            .await
    }

    /// Lists webhook subscriptions.
    pub async fn list(&self, options: Option<ListWebhooksOptions>) -> MollieResult<ApiResponse<WebhookList>> {
        let query = options.as_ref().and_then(ListWebhooksOptions::to_query);
        self.core.get("webhooks", query).await
    }
}
