//! Settlements API. Read-only: settlements bundle the amounts Mollie pays
//! out to the organization's bank account.

use crate::client::ClientCore;
use crate::errors::MollieResult;
use crate::pagination::ListLinks;
use crate::query::QueryBuilder;
use crate::services::payments::PaymentList;
use crate::transport::ApiResponse;
use crate::types::Amount;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A settlement resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    /// Always `settlement`
    pub resource: String,
    /// Settlement identifier, e.g. `stl_jDk30akdN`
    pub id: String,
    /// Bank statement reference, e.g. `1234567.1804.03`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// `open`, `pending`, `paidout` or `failed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled_at: Option<String>,
    /// Totals per period, keyed by year then month
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periods: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
}

/// Options for listing settlements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSettlementsOptions {
    pub from: Option<String>,
    pub limit: Option<u32>,
}

impl ListSettlementsOptions {
    pub(crate) fn to_query(&self) -> Option<String> {
        let mut q = QueryBuilder::new();
        q.push_opt("from", self.from.as_ref());
        q.push_opt("limit", self.limit.as_ref());
        q.finish()
    }
}

/// Paginated list of settlements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettlementList {
    pub count: u32,
    #[serde(rename = "_embedded")]
    pub embedded: SettlementListEmbed,
    #[serde(rename = "_links")]
    pub links: ListLinks,
}

/// Embedded collection of a settlement list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettlementListEmbed {
    pub settlements: Vec<Settlement>,
}

/// Operations on the Settlements API.
#[derive(Clone)]
pub struct SettlementsService {
    core: Arc<ClientCore>,
}

impl SettlementsService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Retrieves a settlement by id or bank reference.
    pub async fn get(&self, id: &str) -> MollieResult<ApiResponse<Settlement>> {
        self.core.get(&format!("settlements/{}", id), None).await
    }

    /// Retrieves the current open settlement.
    pub async fn open(&self) -> MollieResult<ApiResponse<Settlement>> {
        self.core.get("settlements/open", None).await
    }

    /// Retrieves the settlement scheduled next.
    pub async fn next(&self) -> MollieResult<ApiResponse<Settlement>> {
        self.core.get("settlements/next", None).await
    }

    /// Lists settlements, newest first.
    pub async fn list(
        &self,
        options: Option<ListSettlementsOptions>,
    ) -> MollieResult<ApiResponse<SettlementList>> {
        let query = options.as_ref().and_then(ListSettlementsOptions::to_query);
        self.core.get("settlements", query).await
    }

    /// Lists payments included in a settlement.
    pub async fn list_payments(&self, settlement_id: &str) -> MollieResult<ApiResponse<PaymentList>> {
        self.core
            .get(&format!("settlements/{}/payments", settlement_id), None)
            .await
    }
}
