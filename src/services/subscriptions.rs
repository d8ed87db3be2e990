//! Subscriptions API. Subscriptions schedule recurring payments under a
//! customer.

use crate::client::ClientCore;
use crate::errors::MollieResult;
use crate::pagination::ListLinks;
use crate::query::QueryBuilder;
use crate::services::payments::PaymentList;
use crate::transport::ApiResponse;
use crate::types::{Amount, Mode, ShortDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A subscription resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Always `subscription`
    pub resource: String,
    /// Subscription identifier, e.g. `sub_rVKGtNd6s3`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// `pending`, `active`, `canceled`, `suspended` or `completed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// Total number of charges; absent means until canceled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times_remaining: Option<u32>,
    /// Charge interval, e.g. `1 month`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<ShortDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_payment_date: Option<ShortDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canceled_at: Option<String>,
}

/// Body for creating or updating a subscription.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<ShortDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

/// Options for listing subscriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSubscriptionsOptions {
    pub from: Option<String>,
    pub limit: Option<u32>,
    pub profile_id: Option<String>,
}

impl ListSubscriptionsOptions {
    pub(crate) fn to_query(&self) -> Option<String> {
        let mut q = QueryBuilder::new();
        q.push_opt("from", self.from.as_ref());
        q.push_opt("limit", self.limit.as_ref());
        q.push_opt("profileId", self.profile_id.as_ref());
        q.finish()
    }
}

/// Paginated list of subscriptions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionList {
    pub count: u32,
    #[serde(rename = "_embedded")]
    pub embedded: SubscriptionListEmbed,
    #[serde(rename = "_links")]
    pub links: ListLinks,
}

/// Embedded collection of a subscription list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionListEmbed {
    pub subscriptions: Vec<Subscription>,
}

/// Operations on the Subscriptions API.
#[derive(Clone)]
pub struct SubscriptionsService {
    core: Arc<ClientCore>,
}

impl SubscriptionsService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Creates a subscription for a customer with a valid mandate.
    pub async fn create(
        &self,
        customer_id: &str,
        mut subscription: SubscriptionRequest,
    ) -> MollieResult<ApiResponse<Subscription>> {
        if self.core.needs_testmode() {
            subscription.testmode = Some(true);
        }
        self.core
            .post(
                &format!("customers/{}/subscriptions", customer_id),
                &subscription,
                None,
            )
            .await
    }

    /// Retrieves one subscription of a customer.
    pub async fn get(&self, customer_id: &str, subscription_id: &str) -> MollieResult<ApiResponse<Subscription>> {
        self.core
            .get(
                &format!("customers/{}/subscriptions/{}", customer_id, subscription_id),
                None,
            )
            .await
    }

    /// Updates a subscription.
    pub async fn update(
        &self,
        customer_id: &str,
        subscription_id: &str,
        mut subscription: SubscriptionRequest,
    ) -> MollieResult<ApiResponse<Subscription>> {
        if self.core.needs_testmode() {
            subscription.testmode = Some(true);
        }
        self.core
            .patch(
                &format!("customers/{}/subscriptions/{}", customer_id, subscription_id),
                &subscription,
            )
            .await
    }

    /// Cancels a subscription; the canceled resource is returned.
    pub async fn cancel(
        &self,
        customer_id: &str,
        subscription_id: &str,
    ) -> MollieResult<ApiResponse<Subscription>> {
        self.core
            .delete(&format!(
                "customers/{}/subscriptions/{}",
                customer_id, subscription_id
            ))
            .await
    }

    /// Lists one customer's subscriptions.
    pub async fn list(
        &self,
        customer_id: &str,
        options: Option<ListSubscriptionsOptions>,
    ) -> MollieResult<ApiResponse<SubscriptionList>> {
        let query = options.as_ref().and_then(ListSubscriptionsOptions::to_query);
        self.core
            .get(&format!("customers/{}/subscriptions", customer_id), query)
            .await
    }

    /// Lists subscriptions across all customers.
    pub async fn all(
        &self,
        options: Option<ListSubscriptionsOptions>,
    ) -> MollieResult<ApiResponse<SubscriptionList>> {
        let query = options.as_ref().and_then(ListSubscriptionsOptions::to_query);
        self.core.get("subscriptions", query).await
    }

    /// Lists payments charged by a subscription.
    pub async fn list_payments(
        &self,
        customer_id: &str,
        subscription_id: &str,
    ) -> MollieResult<ApiResponse<PaymentList>> {
        self.core
            .get(
                &format!(
                    "customers/{}/subscriptions/{}/payments",
                    customer_id, subscription_id
                ),
                None,
            )
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
    async fn test_create_subscription() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_json(
            201,
            r#"{"resource":"subscription","id":"sub_rVKGtNd6s3","interval":"1 month"}"#,
        );
        let client = test_client(transport.clone());

        let request = SubscriptionRequest {
            amount: Some(Amount::new("EUR", "25.00")),
            interval: Some("1 month".to_string()),
            description: Some("Monthly subscription".to_string()),
            start_date: ShortDate::from_ymd(2024, 6, 1),
            ..Default::default()
        };
        let subscription = client
            .subscriptions
            .create("cst_8wmqcHMN4U", request)
            .await
            .unwrap();

        assert_eq!(subscription.interval.as_deref(), Some("1 month"));
        let body = transport.recorded()[0].json_body();
        assert_eq!(body["startDate"], serde_json::json!("2024-06-01"));
    }

    #[tokio::test]
    async fn test_cancel_returns_resource() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_json(
            200,
            r#"{"resource":"subscription","id":"sub_rVKGtNd6s3","status":"canceled"}"#,
        );
        let client = test_client(transport.clone());

        let subscription = client
            .subscriptions
            .cancel("cst_8wmqcHMN4U", "sub_rVKGtNd6s3")
            .await
            .unwrap();

        assert_eq!(subscription.status.as_deref(), Some("canceled"));
        assert_eq!(transport.recorded()[0].method, Method::DELETE);
    }

    #[tokio::test]
    async fn test_all_subscriptions_path() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_json(
            200,
            r#"{"count":0,"_embedded":{"subscriptions":[]},
                "_links":{"self":{"href":"https://srv/v2/subscriptions","type":"application/hal+json"}}}"#,
        );
        let client = test_client(transport.clone());

        client.subscriptions.all(None).await.unwrap();
        assert_eq!(transport.recorded()[0].url.path(), "/v2/subscriptions");
    }
}
