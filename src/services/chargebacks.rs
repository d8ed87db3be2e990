//! Chargebacks API. Chargebacks are read-only; they exist under a payment
//! and in an account-wide listing.

use crate::client::ClientCore;
use crate::errors::MollieResult;
use crate::pagination::ListLinks;
use crate::query::{QueryBuilder, Separator};
use crate::transport::ApiResponse;
use crate::types::Amount;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A chargeback resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Chargeback {
    /// Always `chargeback`
    pub resource: String,
    /// Chargeback identifier, e.g. `chb_n9z0tp`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// Amount deducted from the settlement, negative
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ChargebackReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversed_at: Option<String>,
}

/// Why the customer's bank reversed the payment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChargebackReason {
    pub code: String,
    pub description: String,
}

/// Options for fetching or listing chargebacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChargebackOptions {
    pub from: Option<String>,
    pub limit: Option<u32>,
    pub profile_id: Option<String>,
    /// Embed nested resources, e.g. `payment`
    pub embed: Vec<String>,
}

impl ChargebackOptions {
    pub(crate) fn to_query(&self) -> Option<String> {
        let mut q = QueryBuilder::new();
        q.push_opt("from", self.from.as_ref());
        q.push_opt("limit", self.limit.as_ref());
        q.push_opt("profileId", self.profile_id.as_ref());
        q.push_list("embed", &self.embed, Separator::Plus);
        q.finish()
    }
}

/// Paginated list of chargebacks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChargebackList {
    pub count: u32,
    #[serde(rename = "_embedded")]
    pub embedded: ChargebackListEmbed,
    #[serde(rename = "_links")]
    pub links: ListLinks,
}

/// Embedded collection of a chargeback list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChargebackListEmbed {
    pub chargebacks: Vec<Chargeback>,
}

/// Operations on the Chargebacks API.
#[derive(Clone)]
pub struct ChargebacksService {
    core: Arc<ClientCore>,
}

impl ChargebacksService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Retrieves one chargeback of a payment.
    pub async fn get(
        &self,
        payment_id: &str,
        chargeback_id: &str,
        options: Option<ChargebackOptions>,
    ) -> MollieResult<ApiResponse<Chargeback>> {
        let query = options.as_ref().and_then(ChargebackOptions::to_query);
        self.core
            .get(
                &format!("payments/{}/chargebacks/{}", payment_id, chargeback_id),
                query,
            )
            .await
    }

    /// Lists chargebacks across the whole account.
    pub async fn list(&self, options: Option<ChargebackOptions>) -> MollieResult<ApiResponse<ChargebackList>> {
        let query = options.as_ref().and_then(ChargebackOptions::to_query);
        self.core.get("chargebacks", query).await
    }

    /// Lists chargebacks of one payment.
    pub async fn list_for_payment(
        &self,
        payment_id: &str,
        options: Option<ChargebackOptions>,
    ) -> MollieResult<ApiResponse<ChargebackList>> {
        let query = options.as_ref().and_then(ChargebackOptions::to_query);
        self.core
            .get(&format!("payments/{}/chargebacks", payment_id), query)
            .await
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
    async fn test_list_with_profile_filter_and_cursor() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_json(
            200,
            r#"{"count":1,
                "_embedded":{"chargebacks":[{"resource":"chargeback","id":"chb_n9z0tp"}]},
                "_links":{
                    "self":{"href":"https://srv/v2/chargebacks","type":"application/hal+json"},
                    "next":{"href":"https://srv/v2/chargebacks?from=chb_xyz&limit=50","type":"application/hal+json"}
                }}"#,
        );
        let client = test_client(transport.clone());

        let options = ChargebackOptions {
            profile_id: Some("pfl_QkEhN94Ba".to_string()),
            ..Default::default()
        };
        let list = client.chargebacks.list(Some(options)).await.unwrap();

        assert_eq!(list.count as usize, list.embedded.chargebacks.len());
        assert_eq!(list.links.next_cursor().unwrap(), Some("chb_xyz".to_string()));
        assert_eq!(
            transport.recorded()[0].url.as_str(),
            "https://srv/v2/chargebacks?profileId=pfl_QkEhN94Ba"
        );
    }

    #[tokio::test]
    async fn test_get_chargeback_under_payment() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_json(200, r#"{"resource":"chargeback","id":"chb_n9z0tp"}"#);
        let client = test_client(transport.clone());

        let chargeback = client
            .chargebacks
            .get("tr_WDqYK6vllg", "chb_n9z0tp", None)
            .await
            .unwrap();

        assert_eq!(chargeback.id, "chb_n9z0tp");
        assert_eq!(
            transport.recorded()[0].url.path(),
            "/v2/payments/tr_WDqYK6vllg/chargebacks/chb_n9z0tp"
        );
    }
}
