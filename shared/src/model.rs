use serde::{Deserialize, Serialize};

// =========================================================
// 类型安全 ID (Typed IDs)
// =========================================================

/// Defines a string-backed id newtype.
///
/// The backend hands out opaque string ids; wrapping them keeps a `ProductId`
/// from being passed where a `StoreId` is expected.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(StoreId);
define_id!(ProductId);
define_id!(CustomerId);
define_id!(OrderId);

/// Documents may carry `_id`, `id`, or both; `_id` wins when both are set.
mod document_id {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    struct Keys<I> {
        #[serde(rename = "_id")]
        mongo: Option<I>,
        id: Option<I>,
    }

    #[derive(Serialize)]
    struct Key<'a, I> {
        id: &'a I,
    }

    pub fn serialize<I: Serialize, S: Serializer>(id: &I, serializer: S) -> Result<S::Ok, S::Error> {
        Key { id }.serialize(serializer)
    }

    pub fn deserialize<'de, I, D>(deserializer: D) -> Result<I, D::Error>
    where
        I: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let keys = Keys::<I>::deserialize(deserializer)?;
        keys.mongo.or(keys.id).ok_or_else(|| D::Error::missing_field("_id"))
    }
}

// =========================================================
// 认证 (Auth)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Response of any create endpoint that only echoes the new id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedResource {
    #[serde(flatten, with = "document_id")]
    pub id: String,
}

// =========================================================
// 店铺 (Stores)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(flatten, with = "document_id")]
    pub id: StoreId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Store {
    pub fn summary(&self) -> StoreSummary {
        StoreSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            slug: self.slug.clone(),
        }
    }
}

/// Id, name and slug of a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSummary {
    pub id: StoreId,
    pub name: String,
    pub slug: String,
}

impl StoreSummary {
    /// Public storefront path of this store.
    pub fn storefront_path(&self) -> String {
        format!("{}{}", crate::STOREFRONT_PREFIX, self.slug)
    }

}

/// The store highlighted on the dashboard.
///
/// Highlighting the first listed store is only a default; the admin view opens
/// for a store the owner picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSelection {
    pub store: StoreSummary,
    chosen: bool,
}

impl StoreSelection {
    /// A store the owner clicked on or just created.
    pub fn chosen(store: StoreSummary) -> Self {
        Self {
            store,
            chosen: true,
        }
    }

    /// Keeps the current selection, or highlights the first listed store.
    pub fn default_for(current: Option<StoreSelection>, stores: &[Store]) -> Option<Self> {
        current.or_else(|| {
            stores.first().map(|store| Self {
                store: store.summary(),
                chosen: false,
            })
        })
    }

    pub fn is_chosen(&self) -> bool {
        self.chosen
    }

    /// Store the router may administer, if any.
    pub fn active_store(&self) -> Option<&StoreId> {
        self.chosen.then_some(&self.store.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStore {
    pub name: String,
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreMetrics {
    pub total_sales: f64,
    pub total_customers: u64,
    pub total_orders: u64,
}

impl StoreMetrics {
    pub fn formatted_sales(&self) -> String {
        format_money(self.total_sales)
    }
}

// =========================================================
// 商品 (Products)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten, with = "document_id")]
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub category: String,
    pub images: Vec<String>,
}

// =========================================================
// 顾客 (Customers)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(flatten, with = "document_id")]
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub tags: Vec<String>,
}

// =========================================================
// 订单 (Orders)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Fulfilled,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Fulfilled,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Fulfilled => "fulfilled",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("invalid order status: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(flatten, with = "document_id")]
    pub id: OrderId,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Last six characters of the id, used as the display number.
    pub fn short_id(&self) -> &str {
        let id = self.id.as_str();
        let start = id
            .char_indices()
            .rev()
            .nth(5)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        &id[start..]
    }
}

// =========================================================
// 结账 (Checkout)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    pub order_id: OrderId,
    pub total: f64,
}

impl CheckoutReceipt {
    pub fn confirmation_message(&self) -> String {
        format!(
            "Payment successful. Order {} · Total ${}",
            self.order_id, self.total
        )
    }
}

/// Formats an amount with a dollar sign and two decimals.
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}
