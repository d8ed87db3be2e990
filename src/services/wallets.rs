//! Wallets API. Currently only the Apple Pay merchant session endpoint.

use crate::client::ClientCore;
use crate::errors::MollieResult;
use crate::transport::ApiResponse;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body for requesting an Apple Pay merchant session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApplePaySessionRequest {
    /// The `validationURL` Apple passes to the `onvalidatemerchant` callback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_url: Option<String>,
    /// Domain serving the Apple Pay button, without protocol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

/// An opaque Apple Pay merchant session, to be passed verbatim to
/// `completeMerchantValidation`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplePaySession {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epoch_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_session_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// Operations on the Wallets API.
#[derive(Clone)]
pub struct WalletsService {
    core: Arc<ClientCore>,
}

impl WalletsService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Requests an Apple Pay merchant session for a checkout page.
    pub async fn request_apple_pay_session(
        &self,
        request: ApplePaySessionRequest,
    ) -> MollieResult<ApiResponse<ApplePaySession>> {
        self.core
            .post("wallets/applepay/sessions", &request, None)
            .await
    }
}
