//! Client construction and the request primitives every service shares.

use crate::auth::Credential;
use crate::config::{Config, API_TOKEN_ENV, ORG_TOKEN_ENV};
use crate::errors::{ApiError, MollieError, MollieResult};
use crate::idempotency::{IdempotencyKeyGenerator, UuidKeyGenerator};
use crate::services::balances::BalancesService;
use crate::services::chargebacks::ChargebacksService;
use crate::services::clients::PartnerClientsService;
use crate::services::customers::CustomersService;
use crate::services::invoices::InvoicesService;
use crate::services::mandates::MandatesService;
use crate::services::methods::MethodsService;
use crate::services::onboarding::OnboardingService;
use crate::services::orders::OrdersService;
use crate::services::payments::PaymentsService;
use crate::services::profiles::ProfilesService;
use crate::services::refunds::RefundsService;
use crate::services::settlements::SettlementsService;
use crate::services::subscriptions::SubscriptionsService;
use crate::services::terminals::TerminalsService;
use crate::services::wallets::WalletsService;
use crate::services::webhooks::WebhooksService;
use crate::transport::{ApiResponse, HttpResponse, HttpTransport, ReqwestTransport};
use crate::{API_VERSION, BASE_URL};
use bytes::Bytes;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderValue, Method};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use url::Url;

/// Header carrying the client-chosen deduplication key.
const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// Shared core behind every service handle.
///
/// Owns URL composition, header assembly, body marshalling, execution and
/// status classification. Services layer path construction and DTO decoding
/// on top of the `get`/`post`/`patch`/`delete` primitives; every decoding
/// primitive yields the payload together with the captured response, so
/// headers stay reachable on success as well as on failure.
pub(crate) struct ClientCore {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    credential: RwLock<Credential>,
    config: Config,
    user_agent: String,
    idempotency: Arc<dyn IdempotencyKeyGenerator>,
}

impl ClientCore {
    /// True when request bodies that recognise `testmode` must carry it.
    /// Only access tokens honour the testing flag; API keys encode live/test
    /// upstream. Mirrors the upstream SDK, documented as a known limitation.
    pub(crate) fn needs_testmode(&self) -> bool {
        self.config.testing && self.credential.read().has_access_token()
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn has_access_token(&self) -> bool {
        self.credential.read().has_access_token()
    }

    fn set_credential(&self, raw: &str) -> MollieResult<()> {
        if raw.is_empty() {
            return Err(MollieError::Configuration {
                message: "authentication value cannot be empty".to_string(),
            });
        }
        *self.credential.write() = Credential::parse(raw);
        Ok(())
    }

    /// Composes `<base>/<version>/<path>[?query]`, rejecting base URLs that
    /// cannot anchor relative joins before any I/O happens.
    fn build_url(&self, path: &str, query: Option<&str>) -> MollieResult<Url> {
        if !self.base_url.ends_with('/') {
            return Err(MollieError::BadBaseUrl {
                url: self.base_url.clone(),
            });
        }
        let base = Url::parse(&self.base_url).map_err(|_| MollieError::BadBaseUrl {
            url: self.base_url.clone(),
        })?;
        if base.cannot_be_a_base() {
            return Err(MollieError::BadBaseUrl {
                url: self.base_url.clone(),
            });
        }

        let path = path.trim_start_matches('/');
        let mut url = base
            .join(&format!("{}/{}", API_VERSION, path))
            .map_err(MollieError::from)?;
        if let Some(query) = query {
            if !query.is_empty() {
                url.set_query(Some(query));
            }
        }
        Ok(url)
    }

    fn build_headers(
        &self,
        method: &Method,
        has_body: bool,
        idempotency_key: Option<&str>,
    ) -> MollieResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.user_agent).map_err(|e| MollieError::RequestBuild {
                message: format!("invalid user agent: {}", e),
            })?,
        );
        if has_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        if let Some(bearer) = self.credential.read().bearer() {
            let value = HeaderValue::from_str(&format!("Bearer {}", bearer)).map_err(|e| {
                MollieError::RequestBuild {
                    message: format!("invalid credential: {}", e),
                }
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        // Mutating methods always carry a deduplication key.
        if matches!(*method, Method::POST | Method::PATCH | Method::DELETE) {
            let key = match idempotency_key {
                Some(key) => key.to_string(),
                None => self.idempotency.generate(),
            };
            if !key.is_empty() {
                headers.insert(
                    IDEMPOTENCY_KEY_HEADER,
                    HeaderValue::from_str(&key).map_err(|e| MollieError::RequestBuild {
                        message: format!("invalid idempotency key: {}", e),
                    })?,
                );
            }
        }

        Ok(headers)
    }

    /// Builds, executes and classifies one request. 2xx yields the captured
    /// response; anything else decodes the structured error envelope and
    /// returns it alongside the response wrapper.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<String>,
        body: Option<Bytes>,
        idempotency_key: Option<&str>,
    ) -> MollieResult<HttpResponse> {
        let url = self.build_url(path, query.as_deref())?;
        let headers = self.build_headers(&method, body.is_some(), idempotency_key)?;

        let response = self.transport.execute(method, url, headers, body).await?;
        if response.is_success() {
            Ok(response)
        } else {
            let error = ApiError::from_response(response.status, &response.body);
            Err(MollieError::Api { error, response })
        }
    }

    fn marshal<B: Serialize>(body: &B) -> MollieResult<Bytes> {
        let bytes = serde_json::to_vec(body).map_err(|e| MollieError::RequestBuild {
            message: format!("failed to marshal request body: {}", e),
        })?;
        Ok(Bytes::from(bytes))
    }

    fn wrap<T: DeserializeOwned>(response: HttpResponse) -> MollieResult<ApiResponse<T>> {
        let data = response.decode()?;
        Ok(ApiResponse { response, data })
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<String>,
    ) -> MollieResult<ApiResponse<T>> {
        let response = self.send(Method::GET, path, query, None, None).await?;
        Self::wrap(response)
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        idempotency_key: Option<&str>,
    ) -> MollieResult<ApiResponse<T>> {
        let body = Self::marshal(body)?;
        let response = self
            .send(Method::POST, path, None, Some(body), idempotency_key)
            .await?;
        Self::wrap(response)
    }

    /// POST for endpoints answering 204 with an empty body.
    pub(crate) async fn post_no_content<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> MollieResult<HttpResponse> {
        let body = Self::marshal(body)?;
        self.send(Method::POST, path, None, Some(body), None).await
    }

    pub(crate) async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> MollieResult<ApiResponse<T>> {
        let body = Self::marshal(body)?;
        let response = self
            .send(Method::PATCH, path, None, Some(body), None)
            .await?;
        Self::wrap(response)
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> MollieResult<ApiResponse<T>> {
        let response = self.send(Method::DELETE, path, None, None, None).await?;
        Self::wrap(response)
    }

    /// DELETE for endpoints answering 204 with an empty body.
    pub(crate) async fn delete_no_content(&self, path: &str) -> MollieResult<HttpResponse> {
        self.send(Method::DELETE, path, None, None, None).await
    }
}

/// The Mollie API client.
///
/// Create one, share it for the lifetime of the application; all services
/// and the client itself are safe for concurrent use. The only mutable
/// state is the credential, replaced through
/// [`set_authentication_value`](Client::set_authentication_value) — do not
/// swap it while requests are in flight.
pub struct Client {
    core: Arc<ClientCore>,
    /// Payments API
    pub payments: PaymentsService,
    /// Orders and shipments API
    pub orders: OrdersService,
    /// Refunds API
    pub refunds: RefundsService,
    /// Chargebacks API
    pub chargebacks: ChargebacksService,
    /// Customers API
    pub customers: CustomersService,
    /// Mandates API
    pub mandates: MandatesService,
    /// Subscriptions API
    pub subscriptions: SubscriptionsService,
    /// Settlements API
    pub settlements: SettlementsService,
    /// Invoices API
    pub invoices: InvoicesService,
    /// Payment methods API
    pub methods: MethodsService,
    /// Profiles API
    pub profiles: ProfilesService,
    /// Webhooks API
    pub webhooks: WebhooksService,
    /// Balances API
    pub balances: BalancesService,
    /// Point-of-sale terminals API
    pub terminals: TerminalsService,
    /// Partner clients API (access token scope)
    pub clients: PartnerClientsService,
    /// Onboarding API
    pub onboarding: OnboardingService,
    /// Wallets API
    pub wallets: WalletsService,
}

impl Client {
    /// Creates a client with the default transport and base URL, resolving
    /// the credential from the configuration's auth source.
    pub fn new(config: Config) -> MollieResult<Self> {
        Self::builder(config).build()
    }

    /// Starts building a client with custom transport, base URL or
    /// idempotency generator.
    pub fn builder(config: Config) -> ClientBuilder {
        ClientBuilder::new(config)
    }

    /// Replaces the active credential. Fails on empty input.
    pub fn set_authentication_value(&self, raw: &str) -> MollieResult<()> {
        self.core.set_credential(raw)
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &Config {
        self.core.config()
    }

    /// Does the current credential grant partner-scope operations?
    pub fn has_access_token(&self) -> bool {
        self.core.has_access_token()
    }

    fn from_core(core: Arc<ClientCore>) -> Self {
        Self {
            payments: PaymentsService::new(core.clone()),
            orders: OrdersService::new(core.clone()),
            refunds: RefundsService::new(core.clone()),
            chargebacks: ChargebacksService::new(core.clone()),
            customers: CustomersService::new(core.clone()),
            mandates: MandatesService::new(core.clone()),
            subscriptions: SubscriptionsService::new(core.clone()),
            settlements: SettlementsService::new(core.clone()),
            invoices: InvoicesService::new(core.clone()),
            methods: MethodsService::new(core.clone()),
            profiles: ProfilesService::new(core.clone()),
            webhooks: WebhooksService::new(core.clone()),
            balances: BalancesService::new(core.clone()),
            terminals: TerminalsService::new(core.clone()),
            clients: PartnerClientsService::new(core.clone()),
            onboarding: OnboardingService::new(core.clone()),
            wallets: WalletsService::new(core.clone()),
            core,
        }
    }
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    config: Config,
    base_url: String,
    transport: Option<Arc<dyn HttpTransport>>,
    pre_authorized: bool,
    idempotency: Option<Arc<dyn IdempotencyKeyGenerator>>,
}

impl ClientBuilder {
    fn new(config: Config) -> Self {
        Self {
            config,
            base_url: BASE_URL.to_string(),
            transport: None,
            pre_authorized: false,
            idempotency: None,
        }
    }

    /// Overrides the base URL. It must end with a trailing slash; violations
    /// surface as [`MollieError::BadBaseUrl`] on the first call.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Injects a custom transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Injects a transport that authorizes requests itself (e.g. an OAuth2
    /// client-credentials transport). An empty auth source is then allowed
    /// and no `Authorization` header is set by the SDK.
    pub fn pre_authorized_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self.pre_authorized = true;
        self
    }

    /// Overrides the idempotency key generator.
    pub fn idempotency_generator(mut self, generator: Arc<dyn IdempotencyKeyGenerator>) -> Self {
        self.idempotency = Some(generator);
        self
    }

    /// Resolves the credential and assembles the client.
    pub fn build(self) -> MollieResult<Client> {
        let raw = resolve_auth_source(&self.config.auth_source)?;
        let credential = Credential::parse(&raw);
        if matches!(credential, Credential::None) && !self.pre_authorized {
            return Err(MollieError::Configuration {
                message: "no credential supplied and transport is not pre-authorized".to_string(),
            });
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };

        let core = Arc::new(ClientCore {
            base_url: self.base_url,
            transport,
            credential: RwLock::new(credential),
            config: self.config,
            user_agent: default_user_agent(),
            idempotency: self
                .idempotency
                .unwrap_or_else(|| Arc::new(UuidKeyGenerator)),
        });

        Ok(Client::from_core(core))
    }
}

/// Resolves the auth source: recognised env-var names are read from the
/// process environment, anything else is taken literally.
fn resolve_auth_source(auth_source: &str) -> MollieResult<String> {
    if auth_source == API_TOKEN_ENV || auth_source == ORG_TOKEN_ENV {
        std::env::var(auth_source).map_err(|_| MollieError::Configuration {
            message: format!("environment variable {} is not set", auth_source),
        })
    } else {
        Ok(auth_source.to_string())
    }
}

fn default_user_agent() -> String {
    format!(
        "mollie-rs/{} rust/{}",
        env!("CARGO_PKG_VERSION"),
        rustc_channel()
    )
}

fn rustc_channel() -> &'static str {
    // The runtime identifier the User-Agent contract asks for; the edition
    // is the closest stable, compile-time-known stand-in.
    "edition2021"
}
