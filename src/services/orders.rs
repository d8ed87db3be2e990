//! Orders API, including shipments created under an order.

use crate::client::ClientCore;
use crate::errors::MollieResult;
use crate::pagination::{Link, ListLinks};
use crate::query::{QueryBuilder, Separator};
use crate::transport::ApiResponse;
use crate::types::{Address, Amount, Mode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An order resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Always `order`
    pub resource: String,
    /// Order identifier, e.g. `ord_kEn1PlbGa`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cancelable: Option<bool>,
    /// Merchant-side order reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<OrderLine>>,
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<OrderLinks>,
}

/// One line of an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Line type, e.g. `physical`, `digital`, `shipping_fee`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Amount>,
    /// VAT rate as a string percentage, e.g. `"21.00"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

/// `_links` block of a single order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLinks {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub current: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Link>,
}

/// Body for creating an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<OrderLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

/// Body for updating an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

/// Options for fetching or listing orders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderOptions {
    /// Nested resources to embed, e.g. `payments`, `refunds`, `shipments`
    pub embed: Vec<String>,
    pub from: Option<String>,
    pub limit: Option<u32>,
}

impl OrderOptions {
    pub(crate) fn to_query(&self) -> Option<String> {
        let mut q = QueryBuilder::new();
        q.push_list("embed", &self.embed, Separator::Plus);
        q.push_opt("from", self.from.as_ref());
        q.push_opt("limit", self.limit.as_ref());
        q.finish()
    }
}

/// Paginated list of orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderList {
    pub count: u32,
    #[serde(rename = "_embedded")]
    pub embedded: OrderListEmbed,
    #[serde(rename = "_links")]
    pub links: ListLinks,
}

/// Embedded collection of an order list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderListEmbed {
    pub orders: Vec<Order>,
}

/// A shipment of (part of) an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    /// Always `shipment`
    pub resource: String,
    /// Shipment identifier, e.g. `shp_3wmsgCJN4U`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<ShipmentTracking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<OrderLine>>,
}

/// Carrier tracking details of a shipment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentTracking {
    pub carrier: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Body for creating a shipment. Empty `lines` ships the whole order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<OrderLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<ShipmentTracking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

/// Paginated list of shipments of one order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShipmentList {
    pub count: u32,
    #[serde(rename = "_embedded")]
    pub embedded: ShipmentListEmbed,
    #[serde(rename = "_links")]
    pub links: ListLinks,
}

/// Embedded collection of a shipment list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShipmentListEmbed {
    pub shipments: Vec<Shipment>,
}

/// Operations on the Orders API.
#[derive(Clone)]
pub struct OrdersService {
    core: Arc<ClientCore>,
}

impl OrdersService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Retrieves a single order.
    pub async fn get(&self, id: &str, options: Option<OrderOptions>) -> MollieResult<ApiResponse<Order>> {
        let query = options.as_ref().and_then(OrderOptions::to_query);
        self.core.get(&format!("orders/{}", id), query).await
    }

    /// Creates an order.
    pub async fn create(&self, mut order: CreateOrder) -> MollieResult<ApiResponse<Order>> {
        if self.core.needs_testmode() {
            order.testmode = Some(true);
        }
        self.core.post("orders", &order, None).await
    }

    /// Updates an order's addresses or URLs.
    pub async fn update(&self, id: &str, mut update: UpdateOrder) -> MollieResult<ApiResponse<Order>> {
        if self.core.needs_testmode() {
            update.testmode = Some(true);
        }
        self.core.patch(&format!("orders/{}", id), &update).await
    }

    /// Cancels an order that is still cancelable.
    pub async fn cancel(&self, id: &str) -> MollieResult<ApiResponse<Order>> {
        self.core.delete(&format!("orders/{}", id)).await
    }

    /// Lists orders, newest first.
    pub async fn list(&self, options: Option<OrderOptions>) -> MollieResult<ApiResponse<OrderList>> {
        let query = options.as_ref().and_then(OrderOptions::to_query);
        self.core.get("orders", query).await
    }

    /// Ships (part of) an order.
    pub async fn create_shipment(
        &self,
        order_id: &str,
        mut shipment: CreateShipment,
    ) -> MollieResult<ApiResponse<Shipment>> {
        if self.core.needs_testmode() {
            shipment.testmode = Some(true);
        }
        self.core
            .post(&format!("orders/{}/shipments", order_id), &shipment, None)
            .await
    }

    /// Retrieves one shipment of an order.
    pub async fn get_shipment(&self, order_id: &str, shipment_id: &str) -> MollieResult<ApiResponse<Shipment>> {
        self.core
            .get(
                &format!("orders/{}/shipments/{}", order_id, shipment_id),
                None,
            )
            .await
    }

    /// Lists all shipments of an order.
    pub async fn list_shipments(&self, order_id: &str) -> MollieResult<ApiResponse<ShipmentList>> {
        self.core
            .get(&format!("orders/{}/shipments", order_id), None)
            .await
    }
}
