//! Payments API.

use crate::client::ClientCore;
use crate::errors::MollieResult;
use crate::pagination::{Link, ListLinks};
use crate::query::{QueryBuilder, Separator};
use crate::transport::ApiResponse;
use crate::types::{Address, Amount, Mode, SequenceType};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A payment resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Always `payment`
    pub resource: String,
    /// Payment identifier, e.g. `tr_WDqYK6vllg`
    pub id: String,
    /// Live or test environment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cancelable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_refunded: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_remaining: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Payment method, e.g. `ideal`, absent until the customer picked one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_type: Option<SequenceType>,
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<PaymentLinks>,
}

/// `_links` block of a single payment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLinks {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub current: Option<Link>,
    /// Hosted checkout the customer is redirected to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Link>,
}

/// Body for creating a payment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_type: Option<SequenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    /// Access-token only: run against the sandbox
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

/// Body for updating a payment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

/// Options for fetching a single payment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentOptions {
    /// Sub-resources to include, e.g. `details.qrCode`
    pub include: Vec<String>,
    /// Nested resources to embed, e.g. `refunds`
    pub embed: Vec<String>,
}

impl PaymentOptions {
    pub(crate) fn to_query(&self) -> Option<String> {
        let mut q = QueryBuilder::new();
        q.push_list("include", &self.include, Separator::Comma);
        q.push_list("embed", &self.embed, Separator::Plus);
        q.finish()
    }
}

/// Options for listing payments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPaymentsOptions {
    /// Cursor: offset the result set to the payment with this id
    pub from: Option<String>,
    /// Number of payments to return, at most 250
    pub limit: Option<u32>,
    /// Only payments for this profile (access token scope)
    pub profile_id: Option<String>,
    /// Nested resources to embed
    pub embed: Vec<String>,
}

impl ListPaymentsOptions {
    pub(crate) fn to_query(&self) -> Option<String> {
        let mut q = QueryBuilder::new();
        q.push_opt("from", self.from.as_ref());
        q.push_opt("limit", self.limit.as_ref());
        q.push_opt("profileId", self.profile_id.as_ref());
        q.push_list("embed", &self.embed, Separator::Plus);
        q.finish()
    }
}

/// Paginated list of payments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentList {
    /// Number of payments in this page
    pub count: u32,
    #[serde(rename = "_embedded")]
    pub embedded: PaymentListEmbed,
    #[serde(rename = "_links")]
    pub links: ListLinks,
}

/// Embedded collection of a payment list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentListEmbed {
    pub payments: Vec<Payment>,
}

/// Operations on the Payments API.
#[derive(Clone)]
pub struct PaymentsService {
    core: Arc<ClientCore>,
}

impl PaymentsService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Retrieves a single payment.
    pub async fn get(&self, id: &str, options: Option<PaymentOptions>) -> MollieResult<ApiResponse<Payment>> {
        let query = options.as_ref().and_then(PaymentOptions::to_query);
        self.core.get(&format!("payments/{}", id), query).await
    }

    /// Creates a payment.
    pub async fn create(&self, mut payment: CreatePayment) -> MollieResult<ApiResponse<Payment>> {
        if self.core.needs_testmode() {
            payment.testmode = Some(true);
        }
        self.core.post("payments", &payment, None).await
    }

    /// Creates a payment with a caller-chosen idempotency key instead of a
    /// generated one.
    pub async fn create_with_idempotency_key(
        &self,
        mut payment: CreatePayment,
        idempotency_key: &str,
    ) -> MollieResult<ApiResponse<Payment>> {
        if self.core.needs_testmode() {
            payment.testmode = Some(true);
        }
        self.core
            .post("payments", &payment, Some(idempotency_key))
            .await
    }

    /// Updates an open payment.
    pub async fn update(&self, id: &str, mut update: UpdatePayment) -> MollieResult<ApiResponse<Payment>> {
        if self.core.needs_testmode() {
            update.testmode = Some(true);
        }
        self.core.patch(&format!("payments/{}", id), &update).await
    }

    /// Cancels a payment that is still cancelable; the canceled payment is
    /// returned.
    pub async fn cancel(&self, id: &str) -> MollieResult<ApiResponse<Payment>> {
        self.core.delete(&format!("payments/{}", id)).await
    }

    /// Lists payments, newest first.
    pub async fn list(&self, options: Option<ListPaymentsOptions>) -> MollieResult<ApiResponse<PaymentList>> {
        let query = options.as_ref().and_then(ListPaymentsOptions::to_query);
        self.core.get("payments", query).await
    }
}
