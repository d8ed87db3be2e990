//! Customers API, including payments created on behalf of a customer.

use crate::client::ClientCore;
use crate::errors::MollieResult;
use crate::pagination::ListLinks;
use crate::query::QueryBuilder;
use crate::services::payments::{CreatePayment, Payment, PaymentList};
use crate::transport::{ApiResponse, HttpResponse};
use crate::types::Mode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A customer resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Always `customer`
    pub resource: String,
    /// Customer identifier, e.g. `cst_8wmqcHMN4U`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body for creating or updating a customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

/// Options for listing customers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCustomersOptions {
    pub from: Option<String>,
    pub limit: Option<u32>,
}

impl ListCustomersOptions {
    pub(crate) fn to_query(&self) -> Option<String> {
        let mut q = QueryBuilder::new();
        q.push_opt("from", self.from.as_ref());
        q.push_opt("limit", self.limit.as_ref());
        q.finish()
    }
}

/// Paginated list of customers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerList {
    pub count: u32,
    #[serde(rename = "_embedded")]
    pub embedded: CustomerListEmbed,
    #[serde(rename = "_links")]
    pub links: ListLinks,
}

/// Embedded collection of a customer list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerListEmbed {
    pub customers: Vec<Customer>,
}

/// Operations on the Customers API.
#[derive(Clone)]
pub struct CustomersService {
    core: Arc<ClientCore>,
}

impl CustomersService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Creates a customer.
    pub async fn create(&self, mut customer: CustomerRequest) -> MollieResult<ApiResponse<Customer>> {
        if self.core.needs_testmode() {
            customer.testmode = Some(true);
        }
        self.core.post("customers", &customer, None).await
    }

    /// Retrieves a single customer.
    pub async fn get(&self, id: &str) -> MollieResult<ApiResponse<Customer>> {
        self.core.get(&format!("customers/{}", id), None).await
    }

    /// Updates a customer.
    pub async fn update(&self, id: &str, mut customer: CustomerRequest) -> MollieResult<ApiResponse<Customer>> {
        if self.core.needs_testmode() {
            customer.testmode = Some(true);
        }
        self.core
            .patch(&format!("customers/{}", id), &customer)
            .await
    }

    /// Deletes a customer; linked mandates and subscriptions are revoked.
    pub async fn delete(&self, id: &str) -> MollieResult<HttpResponse> {
        self.core
            .delete_no_content(&format!("customers/{}", id))
            .await
    }

    /// Lists customers.
    pub async fn list(&self, options: Option<ListCustomersOptions>) -> MollieResult<ApiResponse<CustomerList>> {
        let query = options.as_ref().and_then(ListCustomersOptions::to_query);
        self.core.get("customers", query).await
    }

    /// Creates a payment linked to the customer.
    pub async fn create_payment(
        &self,
        customer_id: &str,
        mut payment: CreatePayment,
    ) -> MollieResult<ApiResponse<Payment>> {
        if self.core.needs_testmode() {
            payment.testmode = Some(true);
        }
        self.core
            .post(&format!("customers/{}/payments", customer_id), &payment, None)
            .await
    }

    /// Lists the customer's payments.
    pub async fn list_payments(&self, customer_id: &str) -> MollieResult<ApiResponse<PaymentList>> {
        self.core
            .get(&format!("customers/{}/payments", customer_id), None)
            .await
    }
}
