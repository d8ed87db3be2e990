//! Invoices API. Read-only: the invoices Mollie issues to the organization.

use crate::client::ClientCore;
use crate::errors::MollieResult;
use crate::pagination::ListLinks;
use crate::query::QueryBuilder;
use crate::transport::ApiResponse;
use crate::types::{Amount, ShortDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An invoice resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Always `invoice`
    pub resource: String,
    /// Invoice identifier, e.g. `inv_xBEbP9rvAq`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    /// `open`, `paid` or `overdue`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<ShortDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<ShortDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<ShortDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<InvoiceLine>>,
}

/// One line of an invoice.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// VAT percentage applied to this line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
}

/// Options for listing invoices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListInvoicesOptions {
    /// Filter on the invoice reference, e.g. `2023.10000`
    pub reference: Option<String>,
    /// Filter on the invoice year
    pub year: Option<u16>,
    pub from: Option<String>,
    pub limit: Option<u32>,
}

impl ListInvoicesOptions {
    pub(crate) fn to_query(&self) -> Option<String> {
        let mut q = QueryBuilder::new();
        q.push_opt("reference", self.reference.as_ref());
        q.push_opt("year", self.year.as_ref());
        q.push_opt("from", self.from.as_ref());
        q.push_opt("limit", self.limit.as_ref());
        q.finish()
    }
}

/// Paginated list of invoices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceList {
    pub count: u32,
    #[serde(rename = "_embedded")]
    pub embedded: InvoiceListEmbed,
    #[serde(rename = "_links")]
    pub links: ListLinks,
}

/// Embedded collection of an invoice list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceListEmbed {
    pub invoices: Vec<Invoice>,
}

/// Operations on the Invoices API.
#[derive(Clone)]
pub struct InvoicesService {
    core: Arc<ClientCore>,
}

impl InvoicesService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Retrieves a single invoice.
    pub async fn get(&self, id: &str) -> MollieResult<ApiResponse<Invoice>> {
        self.core.get(&format!("invoices/{}", id), None).await
    }

    /// Lists invoices, newest first.
    pub async fn list(&self, options: Option<ListInvoicesOptions>) -> MollieResult<ApiResponse<InvoiceList>> {
        let query = options.as_ref().and_then(ListInvoicesOptions::to_query);
        self.core.get("invoices", query).await
    }
}
