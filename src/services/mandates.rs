//! Mandates API. Mandates authorize recurring charges and live under a
//! customer.

use crate::client::ClientCore;
use crate::errors::MollieResult;
use crate::pagination::ListLinks;
use crate::query::QueryBuilder;
use crate::transport::{ApiResponse, HttpResponse};
use crate::types::{Mode, ShortDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A mandate resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mandate {
    /// Always `mandate`
    pub resource: String,
    /// Mandate identifier, e.g. `mdt_h3gAaD5zP`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    /// `valid`, `pending` or `invalid`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Payment method the mandate charges through, e.g. `directdebit`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<MandateDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_reference: Option<String>,
    /// Signature date, day granularity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_date: Option<ShortDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Method-specific details of a mandate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MandateDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_holder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_expiry_date: Option<ShortDate>,
}

/// Body for creating a mandate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateMandate {
    /// Payment method, e.g. `directdebit` or `paypal`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_date: Option<ShortDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

/// Options for listing mandates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMandatesOptions {
    pub from: Option<String>,
    pub limit: Option<u32>,
}

impl ListMandatesOptions {
    pub(crate) fn to_query(&self) -> Option<String> {
        let mut q = QueryBuilder::new();
        q.push_opt("from", self.from.as_ref());
        q.push_opt("limit", self.limit.as_ref());
        q.finish()
    }
}

/// Paginated list of mandates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MandateList {
    pub count: u32,
    #[serde(rename = "_embedded")]
    pub embedded: MandateListEmbed,
    #[serde(rename = "_links")]
    pub links: ListLinks,
}

/// Embedded collection of a mandate list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MandateListEmbed {
    pub mandates: Vec<Mandate>,
}

/// Operations on the Mandates API.
#[derive(Clone)]
pub struct MandatesService {
    core: Arc<ClientCore>,
}

impl MandatesService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Creates a mandate for a customer.
    pub async fn create(
        &self,
        customer_id: &str,
        mut mandate: CreateMandate,
    ) -> MollieResult<ApiResponse<Mandate>> {
        if self.core.needs_testmode() {
            mandate.testmode = Some(true);
        }
        self.core
            .post(&format!("customers/{}/mandates", customer_id), &mandate, None)
            .await
    }

    /// Retrieves one mandate of a customer.
    pub async fn get(&self, customer_id: &str, mandate_id: &str) -> MollieResult<ApiResponse<Mandate>> {
        self.core
            .get(
                &format!("customers/{}/mandates/{}", customer_id, mandate_id),
                None,
            )
            .await
    }

    /// Revokes a mandate; pending recurring payments are aborted.
    pub async fn revoke(&self, customer_id: &str, mandate_id: &str) -> MollieResult<HttpResponse> {
        self.core
            .delete_no_content(&format!(
                "customers/{}/mandates/{}",
                customer_id, mandate_id
            ))
            .await
    }

    /// Lists the customer's mandates.
    pub async fn list(
        &self,
        customer_id: &str,
        options: Option<ListMandatesOptions>,
    ) -> MollieResult<ApiResponse<MandateList>> {
        let query = options.as_ref().and_then(ListMandatesOptions::to_query);
        self.core
            .get(&format!("customers/{}/mandates", customer_id), query)
            .await
    }
}
