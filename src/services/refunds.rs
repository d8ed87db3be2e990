//! Refunds API. Refunds are created under a payment; listing works both
//! per payment and account-wide.

use crate::client::ClientCore;
use crate::errors::MollieResult;
use crate::pagination::ListLinks;
use crate::query::{QueryBuilder, Separator};
use crate::transport::{ApiResponse, HttpResponse};
use crate::types::{Amount, Mode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A refund resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    /// Always `refund`
    pub resource: String,
    /// Refund identifier, e.g. `re_4qqhO89gsT`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `queued`, `pending`, `processing`, `refunded` or `failed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body for creating a refund.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRefund {
    /// Amount to refund; omit to refund the remaining amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

/// Options for listing refunds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRefundsOptions {
    pub from: Option<String>,
    pub limit: Option<u32>,
    pub profile_id: Option<String>,
    /// Embed nested resources, e.g. `payment`
    pub embed: Vec<String>,
}

impl ListRefundsOptions {
    pub(crate) fn to_query(&self) -> Option<String> {
        let mut q = QueryBuilder::new();
        q.push_opt("from", self.from.as_ref());
        q.push_opt("limit", self.limit.as_ref());
        q.push_opt("profileId", self.profile_id.as_ref());
        q.push_list("embed", &self.embed, Separator::Plus);
        q.finish()
    }
}

/// Paginated list of refunds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefundList {
    pub count: u32,
    #[serde(rename = "_embedded")]
    pub embedded: RefundListEmbed,
    #[serde(rename = "_links")]
    pub links: ListLinks,
}

/// Embedded collection of a refund list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefundListEmbed {
    pub refunds: Vec<Refund>,
}

/// Operations on the Refunds API.
#[derive(Clone)]
pub struct RefundsService {
    core: Arc<ClientCore>,
}

impl RefundsService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Creates a refund for a payment.
    pub async fn create(&self, payment_id: &str, mut refund: CreateRefund) -> MollieResult<ApiResponse<Refund>> {
        if self.core.needs_testmode() {
            refund.testmode = Some(true);
        }
        self.core
            .post(&format!("payments/{}/refunds", payment_id), &refund, None)
            .await
    }

    /// Retrieves one refund of a payment.
    pub async fn get(&self, payment_id: &str, refund_id: &str) -> MollieResult<ApiResponse<Refund>> {
        self.core
            .get(&format!("payments/{}/refunds/{}", payment_id, refund_id), None)
            .await
    }

    /// Cancels a refund that has not been sent to the bank yet.
    pub async fn cancel(&self, payment_id: &str, refund_id: &str) -> MollieResult<HttpResponse> {
        self.core
            .delete_no_content(&format!("payments/{}/refunds/{}", payment_id, refund_id))
            .await
    }

    /// Lists refunds across the whole account.
    pub async fn list(&self, options: Option<ListRefundsOptions>) -> MollieResult<ApiResponse<RefundList>> {
        let query = options.as_ref().and_then(ListRefundsOptions::to_query);
        self.core.get("refunds", query).await
    }

    /// Lists refunds of one payment.
    pub async fn list_for_payment(
        &self,
        payment_id: &str,
        options: Option<ListRefundsOptions>,
    ) -> MollieResult<ApiResponse<RefundList>> {
        let query = options.as_ref().and_then(ListRefundsOptions::to_query);
        self.core
            .get(&format!("payments/{}/refunds", payment_id), query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::mocks::MockTransport;
    use crate::Client;
    use http::Method;
    use pretty_assertions::assert_eq;

    fn test_client(transport: Arc<MockTransport>) -> Client {
        Client::builder(Config::live("test_abc"))
            .base_url("https://srv/")
            .transport(transport)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_refund_path_and_body() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_json(201, r#"{"resource":"refund","id":"re_4qqhO89gsT"}"#);
        let client = test_client(transport.clone());

        let refund = CreateRefund {
            amount: Some(Amount::new("EUR", "5.95")),
            description: Some("Required quantity not in stock".to_string()),
            ..Default::default()
        };
        let created = client.refunds.create("tr_WDqYK6vllg", refund).await.unwrap();

        assert_eq!(created.id, "re_4qqhO89gsT");
        let request = &transport.recorded()[0];
        assert_eq!(request.url.path(), "/v2/payments/tr_WDqYK6vllg/refunds");
        assert_eq!(
            request.json_body()["amount"]["value"],
            serde_json::json!("5.95")
        );
    }

    #[tokio::test]
    async fn test_cancel_refund_tolerates_empty_body() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_empty(204);
        let client = test_client(transport.clone());

        client.refunds.cancel("tr_x", "re_y").await.unwrap();
        let request = &transport.recorded()[0];
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.url.path(), "/v2/payments/tr_x/refunds/re_y");
    }

    #[tokio::test]
    async fn test_list_all_refunds() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_json(
            200,
            r#"{"count":1,
                "_embedded":{"refunds":[{"resource":"refund","id":"re_a"}]},
                "_links":{"self":{"href":"https://srv/v2/refunds","type":"application/hal+json"}}}"#,
        );
        let client = test_client(transport.clone());

        let list = client.refunds.list(None).await.unwrap();
        assert_eq!(list.embedded.refunds[0].id, "re_a");
        assert_eq!(transport.recorded()[0].url.path(), "/v2/refunds");
    }
}
