//! Balances API. Read-only: current and available balances per currency,
//! plus aggregated balance reports.

use crate::client::ClientCore;
use crate::errors::MollieResult;
use crate::pagination::ListLinks;
use crate::query::QueryBuilder;
use crate::transport::ApiResponse;
use crate::types::{Amount, Mode, ShortDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A balance resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Always `balance`
    pub resource: String,
    /// Balance identifier, e.g. `bal_gVMhHKqSSRYJyPsuoPNFH`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// `active` or `inactive`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Frequency of settlements, e.g. `daily`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Options for listing balances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBalancesOptions {
    pub from: Option<String>,
    pub limit: Option<u32>,
    pub currency: Option<String>,
}

impl ListBalancesOptions {
    pub(crate) fn to_query(&self) -> Option<String> {
        let mut q = QueryBuilder::new();
        q.push_opt("from", self.from.as_ref());
        q.push_opt("limit", self.limit.as_ref());
        q.push_opt("currency", self.currency.as_ref());
        q.finish()
    }
}

/// Paginated list of balances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceList {
    pub count: u32,
    #[serde(rename = "_embedded")]
    pub embedded: BalanceListEmbed,
    #[serde(rename = "_links")]
    pub links: ListLinks,
}

/// Embedded collection of a balance list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceListEmbed {
    pub balances: Vec<Balance>,
}

/// How report figures are grouped. Typed deliberately; the wire format is
/// the upstream's kebab-case string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ReportGrouping {
    /// Group by opening/closing balance buckets
    StatusBalances,
    /// Group by transaction categories
    TransactionCategories,
}

impl fmt::Display for ReportGrouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportGrouping::StatusBalances => "status-balances",
            ReportGrouping::TransactionCategories => "transaction-categories",
        };
        f.write_str(s)
    }
}

/// Options for a balance report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceReportOptions {
    /// First day covered by the report
    pub from: Option<ShortDate>,
    /// Last day covered by the report
    pub until: Option<ShortDate>,
    pub grouping: Option<ReportGrouping>,
}

impl BalanceReportOptions {
    pub(crate) fn to_query(&self) -> Option<String> {
        let mut q = QueryBuilder::new();
        q.push_date("from", self.from.as_ref());
        q.push_date("until", self.until.as_ref());
        q.push_opt("grouping", self.grouping.as_ref());
        q.finish()
    }
}

/// A balance report resource. The `totals` tree varies with the grouping,
/// so it stays schemaless.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceReport {
    /// Always `balance-report`
    pub resource: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<ShortDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<ShortDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<ReportGrouping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<serde_json::Value>,
}

/// Operations on the Balances API.
#[derive(Clone)]
pub struct BalancesService {
    core: Arc<ClientCore>,
}

impl BalancesService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Retrieves a single balance.
    pub async fn get(&self, id: &str) -> MollieResult<ApiResponse<Balance>> {
        self.core.get(&format!("balances/{}", id), None).await
    }

    /// Retrieves the primary balance of the organization.
    pub async fn primary(&self) -> MollieResult<ApiResponse<Balance>> {
        self.core.get("balances/primary", None).await
    }

    /// Lists balances.
    pub async fn list(&self, options: Option<ListBalancesOptions>) -> MollieResult<ApiResponse<BalanceList>> {
        let query = options.as_ref().and_then(ListBalancesOptions::to_query);
        self.core.get("balances", query).await
    }

    /// Retrieves a report for one balance.
    pub async fn report(
        &self,
        balance_id: &str,
        options: Option<BalanceReportOptions>,
    ) -> MollieResult<ApiResponse<BalanceReport>> {
        let query = options.as_ref().and_then(BalanceReportOptions::to_query);
        self.core
            .get(&format!("balances/{}/report", balance_id), query)
            .await
    }

    /// Retrieves a report for the primary balance.
    pub async fn primary_report(
        &self,
        options: Option<BalanceReportOptions>,
    ) -> MollieResult<ApiResponse<BalanceReport>> {
        let query = options.as_ref().and_then(BalanceReportOptions::to_query);
        self.core.get("balances/primary/report", query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::mocks::MockTransport;
    use crate::Client;
    use pretty_assertions::assert_eq;

    fn test_client(transport: Arc<MockTransport>) -> Client {
        Client::builder(Config::live("access_token_123"))
            .base_url("https://srv/")
            .transport(transport)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_report_query_encodes_dates_and_grouping() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_json(
            200,
            r#"{"resource":"balance-report","balanceId":"bal_x","grouping":"status-balances"}"#,
        );
        let client = test_client(transport.clone());

        let options = BalanceReportOptions {
            from: ShortDate::from_ymd(2024, 1, 1),
            until: ShortDate::from_ymd(2024, 1, 31),
            grouping: Some(ReportGrouping::StatusBalances),
        };
        let report = client.balances.report("bal_x", Some(options)).await.unwrap();

        assert_eq!(report.grouping, Some(ReportGrouping::StatusBalances));
        assert_eq!(
            transport.recorded()[0].url.query().unwrap(),
            "from=2024-01-01&grouping=status-balances&until=2024-01-31"
        );
    }

    #[tokio::test]
    async fn test_primary_paths() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_json(200, r#"{"resource":"balance","id":"bal_primary"}"#);
        transport.enqueue_json(200, r#"{"resource":"balance-report"}"#);
        let client = test_client(transport.clone());

        client.balances.primary().await.unwrap();
        client.balances.primary_report(None).await.unwrap();

        let recorded = transport.recorded();
        assert_eq!(recorded[0].url.path(), "/v2/balances/primary");
        assert_eq!(recorded[1].url.path(), "/v2/balances/primary/report");
    }
}
