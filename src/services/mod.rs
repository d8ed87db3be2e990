//! Service modules, one per Mollie resource.
//!
//! Every service is a thin handle over the shared client core: it composes
//! the resource path, serialises typed options into the query string,
//! marshals request bodies and decodes DTOs. Transport, headers, status
//! classification and error decoding live in the core.

pub mod balances;
pub mod chargebacks;
pub mod clients;
pub mod customers;
pub mod invoices;
pub mod mandates;
pub mod methods;
pub mod onboarding;
pub mod orders;
pub mod payments;
pub mod profiles;
pub mod refunds;
pub mod settlements;
pub mod subscriptions;
pub mod terminals;
pub mod wallets;
pub mod webhooks;
