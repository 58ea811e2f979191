use crate::model::{
    CheckoutItem, CheckoutReceipt, CreatedResource, Customer, NewCustomer, NewProduct, NewStore,
    Order, OrderId, OrderStatus, Product, ProductId, Store, StoreId, StoreMetrics, TokenResponse,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Patch)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// For body-carrying methods the request itself is serialized as the JSON body,
/// so path parameters are marked `#[serde(skip)]`.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The URL path (appended to the base URL).
    fn path(&self) -> String;
}

// =========================================================
// Auth
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl ApiRequest for RegisterRequest {
    // The body is ignored; only success matters.
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/auth/register".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = TokenResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/auth/login".to_string()
    }
}

// =========================================================
// Stores
// =========================================================

/// List the stores owned by the current user
#[derive(Debug, Serialize, Deserialize)]
pub struct ListStoresRequest;

impl ApiRequest for ListStoresRequest {
    type Response = Vec<Store>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/stores".to_string()
    }
}

impl ApiRequest for NewStore {
    type Response = CreatedResource;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/stores".to_string()
    }
}

#[derive(Debug, Serialize)]
pub struct StoreMetricsRequest {
    #[serde(skip)]
    pub store_id: StoreId,
}

impl ApiRequest for StoreMetricsRequest {
    type Response = StoreMetrics;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/stores/{}/metrics", self.store_id)
    }
}

// =========================================================
// Products
// =========================================================

#[derive(Debug, Serialize)]
pub struct ListProductsRequest {
    #[serde(skip)]
    pub store_id: StoreId,
}

impl ApiRequest for ListProductsRequest {
    type Response = Vec<Product>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/stores/{}/products", self.store_id)
    }
}

#[derive(Debug, Serialize)]
pub struct CreateProductRequest {
    #[serde(skip)]
    pub store_id: StoreId,
    #[serde(flatten)]
    pub product: NewProduct,
}

impl ApiRequest for CreateProductRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("/stores/{}/products", self.store_id)
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteProductRequest {
    #[serde(skip)]
    pub product_id: ProductId,
}

impl ApiRequest for DeleteProductRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/products/{}", self.product_id)
    }
}

// =========================================================
// Customers
// =========================================================

#[derive(Debug, Serialize)]
pub struct ListCustomersRequest {
    #[serde(skip)]
    pub store_id: StoreId,
}

impl ApiRequest for ListCustomersRequest {
    type Response = Vec<Customer>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/stores/{}/customers", self.store_id)
    }
}

#[derive(Debug, Serialize)]
pub struct CreateCustomerRequest {
    #[serde(skip)]
    pub store_id: StoreId,
    #[serde(flatten)]
    pub customer: NewCustomer,
}

impl ApiRequest for CreateCustomerRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("/stores/{}/customers", self.store_id)
    }
}

// =========================================================
// Orders
// =========================================================

#[derive(Debug, Serialize)]
pub struct ListOrdersRequest {
    #[serde(skip)]
    pub store_id: StoreId,
    /// `None` lists every status.
    #[serde(skip)]
    pub status: Option<OrderStatus>,
}

impl ApiRequest for ListOrdersRequest {
    type Response = Vec<Order>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        match self.status {
            Some(status) => format!("/stores/{}/orders?status={}", self.store_id, status),
            None => format!("/stores/{}/orders", self.store_id),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateOrderStatusRequest {
    #[serde(skip)]
    pub order_id: OrderId,
    pub status: OrderStatus,
}

impl ApiRequest for UpdateOrderStatusRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/orders/{}/status", self.order_id)
    }
}

// =========================================================
// Public storefront
// =========================================================

#[derive(Debug, Serialize)]
pub struct StorefrontProductsRequest {
    #[serde(skip)]
    pub slug: String,
}

impl ApiRequest for StorefrontProductsRequest {
    type Response = Vec<Product>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/s/{}/products", self.slug)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckoutRequest {
    #[serde(skip)]
    pub slug: String,
    pub name: String,
    pub email: String,
    pub items: Vec<CheckoutItem>,
    pub simulate_payment: bool,
}

impl ApiRequest for CheckoutRequest {
    type Response = CheckoutReceipt;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("/s/{}/checkout", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_parameters_stay_out_of_body() {
        let request = UpdateOrderStatusRequest {
            order_id: OrderId::new("o1"),
            status: OrderStatus::Fulfilled,
        };
        assert_eq!(request.path(), "/orders/o1/status");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "status": "fulfilled" })
        );
    }

    #[test]
    fn test_orders_filter_query() {
        let all = ListOrdersRequest {
            store_id: StoreId::new("s1"),
            status: None,
        };
        let paid = ListOrdersRequest {
            store_id: StoreId::new("s1"),
            status: Some(OrderStatus::Paid),
        };
        assert_eq!(all.path(), "/stores/s1/orders");
        assert_eq!(paid.path(), "/stores/s1/orders?status=paid");
    }

    #[test]
    fn test_create_product_body_is_flattened() {
        let request = CreateProductRequest {
            store_id: StoreId::new("s1"),
            product: NewProduct {
                title: "Mug".into(),
                description: String::new(),
                price: 9.99,
                stock: 3,
                category: "kitchen".into(),
                images: vec![],
            },
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["title"], "Mug");
        assert!(body.get("store_id").is_none());
        assert_eq!(request.path(), "/stores/s1/products");
    }

    #[test]
    fn test_checkout_wire_shape() {
        let request = CheckoutRequest {
            slug: "my-store".into(),
            name: "Ann".into(),
            email: "ann@example.com".into(),
            items: vec![CheckoutItem {
                product_id: ProductId::new("p1"),
                quantity: 2,
            }],
            simulate_payment: true,
        };
        assert_eq!(request.path(), "/s/my-store/checkout");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "name": "Ann",
                "email": "ann@example.com",
                "items": [{ "product_id": "p1", "quantity": 2 }],
                "simulate_payment": true
            })
        );
    }

    #[test]
    fn test_method_body_rules() {
        assert!(HttpMethod::Post.has_body());
        assert!(HttpMethod::Patch.has_body());
        assert!(!HttpMethod::Get.has_body());
        assert!(!HttpMethod::Delete.has_body());
    }
}
