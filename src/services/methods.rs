//! Payment methods API. Read-only: which methods are enabled and their
//! amount constraints.

use crate::client::ClientCore;
use crate::errors::MollieResult;
use crate::pagination::ListLinks;
use crate::query::{QueryBuilder, Separator};
use crate::transport::ApiResponse;
use crate::types::Amount;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A payment method resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    /// Always `method`
    pub resource: String,
    /// Method identifier, e.g. `ideal`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<Amount>,
    /// Absent for methods with no upper bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<MethodImage>,
    /// `activated` or `pending-*`; only present on the `all` listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Issuer list, present when requested through `include=issuers`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuers: Option<Vec<MethodIssuer>>,
}

/// Logo URLs of a payment method.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MethodImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size1x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size2x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
}

/// A bank or card issuer for methods that have them (iDEAL, gift cards).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MethodIssuer {
    pub resource: String,
    pub id: String,
    pub name: String,
}

/// Options for fetching and listing methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodOptions {
    /// Locale used to translate descriptions
    pub locale: Option<String>,
    /// Restrict to methods supporting this amount
    pub amount: Option<Amount>,
    /// Sub-resources to include, e.g. `issuers`
    pub include: Vec<String>,
}

impl MethodOptions {
    pub(crate) fn to_query(&self) -> Option<String> {
        let mut q = QueryBuilder::new();
        q.push_opt("locale", self.locale.as_ref());
        q.push_amount("amount", self.amount.as_ref());
        q.push_list("include", &self.include, Separator::Comma);
        q.finish()
    }
}

/// List of methods. Not cursor-paginated upstream, but the envelope shape
/// is the same.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MethodList {
    pub count: u32,
    #[serde(rename = "_embedded")]
    pub embedded: MethodListEmbed,
    #[serde(rename = "_links")]
    pub links: ListLinks,
}

/// Embedded collection of a method list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MethodListEmbed {
    pub methods: Vec<PaymentMethod>,
}

/// Operations on the Methods API.
#[derive(Clone)]
pub struct MethodsService {
    core: Arc<ClientCore>,
}

impl MethodsService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Retrieves a single method.
    pub async fn get(&self, id: &str, options: Option<MethodOptions>) -> MollieResult<ApiResponse<PaymentMethod>> {
        let query = options.as_ref().and_then(MethodOptions::to_query);
        self.core.get(&format!("methods/{}", id), query).await
    }

    /// Lists methods enabled on the profile, filtered by the options.
    pub async fn list(&self, options: Option<MethodOptions>) -> MollieResult<ApiResponse<MethodList>> {
        let query = options.as_ref().and_then(MethodOptions::to_query);
        self.core.get("methods", query).await
    }

    /// Lists every method Mollie offers, enabled or not.
    pub async fn all(&self, options: Option<MethodOptions>) -> MollieResult<ApiResponse<MethodList>> {
        let query = options.as_ref().and_then(MethodOptions::to_query);
        self.core.get("methods/all", query).await
    }
}
