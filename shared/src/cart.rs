//! Storefront cart.
//!
//! Lives only in the storefront view; one line per product, adding a product
//! already in the cart bumps its quantity.

use crate::model::{CheckoutItem, Product, ProductId, format_money};
use crate::protocol::CheckoutRequest;

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub title: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn formatted_total(&self) -> String {
        format_money(self.line_total())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|line| line.product_id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product_id: product.id.clone(),
                title: product.title.clone(),
                price: product.price,
                quantity: 1,
            }),
        }
    }

    /// Drops a product line entirely.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.lines.retain(|line| &line.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Checkout payload for this cart; payment is always simulated.
    pub fn checkout_request(&self, slug: &str, name: &str, email: &str) -> CheckoutRequest {
        CheckoutRequest {
            slug: slug.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            items: self
                .lines
                .iter()
                .map(|line| CheckoutItem {
                    product_id: line.product_id.clone(),
                    quantity: line.quantity,
                })
                .collect(),
            simulate_payment: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use crate::session::Session;
    use futures::executor::block_on;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            description: String::new(),
            price,
            stock: 10,
            category: String::new(),
            images: Vec::new(),
        }
    }

    #[test]
    fn test_adding_twice_increments_quantity() {
        let mut cart = Cart::new();
        let mug = product("p1", 9.99);

        cart.add(&mug);
        cart.add(&mug);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[0].formatted_total(), "$19.98");
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&product("p1", 1.0));
        cart.add(&product("p2", 2.5));
        cart.add(&product("p1", 1.0));

        let ids: Vec<_> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2"]);
        assert_eq!(cart.item_count(), 3);
        assert!((cart.subtotal() - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add(&product("p1", 1.0));
        cart.add(&product("p2", 1.0));

        cart.remove(&ProductId::new("p1"));
        assert_eq!(cart.lines().len(), 1);

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_clears_cart_on_success() {
        let transport = MockTransport::new();
        transport.reply(200, r#"{"order_id":"o1","total":19.98}"#);
        let client = transport.client(Session::in_memory());

        let mut cart = Cart::new();
        let mug = product("p1", 9.99);
        cart.add(&mug);
        cart.add(&mug);

        let request = cart.checkout_request("my-store", "Ann", "ann@example.com");
        let receipt = block_on(client.send(&request)).unwrap();
        cart.clear();

        let message = receipt.confirmation_message();
        assert!(message.contains("o1"));
        assert!(message.contains("19.98"));
        assert!(cart.is_empty());

        let sent = transport.last_request();
        assert_eq!(sent.url, "http://localhost:8000/s/my-store/checkout");
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["items"][0]["quantity"], 2);
        assert_eq!(body["simulate_payment"], true);
    }
}
