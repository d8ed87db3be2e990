//! Onboarding API. Reading and pre-filling the onboarding status of the
//! organization the credentials belong to.

use crate::client::ClientCore;
use crate::errors::MollieResult;
use crate::transport::{ApiResponse, HttpResponse};
use crate::types::Address;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The onboarding state of an organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Onboarding {
    /// Always `onboarding`
    pub resource: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `needs-data`, `in-review` or `completed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_up_at: Option<String>,
    /// Whether the organization may already receive payments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_receive_payments: Option<bool>,
    /// Whether Mollie may already pay out settlements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_receive_settlements: Option<bool>,
}

/// Data submitted to pre-fill the onboarding flow. Only unset fields are
/// taken over; Mollie ignores data for fields already provided.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<OnboardingOrganization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<OnboardingProfile>,
}

/// Organization details for onboarding submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingOrganization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_regulation: Option<String>,
}

/// Profile details for onboarding submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_category: Option<String>,
}

/// Operations on the Onboarding API.
#[derive(Clone)]
pub struct OnboardingService {
    core: Arc<ClientCore>,
}

impl OnboardingService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Retrieves the onboarding status of the current organization.
    pub async fn status(&self) -> MollieResult<ApiResponse<Onboarding>> {
        self.core.get("onboarding/me", None).await
    }

    /// Submits data to pre-fill the onboarding flow. The upstream responds
    /// with 204 No Content.
    pub async fn submit(&self, data: OnboardingData) -> MollieResult<HttpResponse> {
        self.core.post_no_content("onboarding/me", &data).await
    }
}
