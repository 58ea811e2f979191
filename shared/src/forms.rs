//! 表单模型
//!
//! Raw form input as typed by the user, and its conversion into request
//! payloads. Validation happens here so views only show the message.

use thiserror::Error;

use crate::model::{NewCustomer, NewProduct, NewStore};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} must be a number (got \"{value}\")")]
    InvalidNumber { field: &'static str, value: String },
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(value.to_string())
}

/// Splits a comma-separated list, trimming entries and dropping blanks.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

// =========================================================
// Store
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct StoreForm {
    pub name: String,
    pub slug: String,
    pub description: String,
}

impl Default for StoreForm {
    fn default() -> Self {
        Self {
            name: "My Store".to_string(),
            slug: "my-store".to_string(),
            description: String::new(),
        }
    }
}

impl StoreForm {
    pub fn to_request(&self) -> Result<NewStore, FormError> {
        Ok(NewStore {
            name: required("name", &self.name)?,
            slug: required("slug", &self.slug)?,
            description: self.description.trim().to_string(),
        })
    }
}

// =========================================================
// Product
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub category: String,
    /// Comma-separated image URLs.
    pub images: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: "0".to_string(),
            stock: "0".to_string(),
            category: String::new(),
            images: String::new(),
        }
    }
}

impl ProductForm {
    pub fn to_request(&self) -> Result<NewProduct, FormError> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| FormError::InvalidNumber {
                field: "price",
                value: self.price.clone(),
            })?;
        let stock = self
            .stock
            .trim()
            .parse::<i64>()
            .map_err(|_| FormError::InvalidNumber {
                field: "stock",
                value: self.stock.clone(),
            })?;

        Ok(NewProduct {
            title: required("title", &self.title)?,
            description: self.description.trim().to_string(),
            price,
            stock,
            category: self.category.trim().to_string(),
            images: split_list(&self.images),
        })
    }
}

// =========================================================
// Customer
// =========================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    /// Comma-separated tags.
    pub tags: String,
}

impl CustomerForm {
    pub fn to_request(&self) -> Result<NewCustomer, FormError> {
        Ok(NewCustomer {
            name: required("name", &self.name)?,
            email: required("email", &self.email)?,
            tags: split_list(&self.tags),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_form_defaults() {
        let request = StoreForm::default().to_request().unwrap();
        assert_eq!(request.name, "My Store");
        assert_eq!(request.slug, "my-store");
        assert_eq!(request.description, "");
    }

    #[test]
    fn test_store_form_requires_slug() {
        let form = StoreForm {
            slug: "  ".into(),
            ..StoreForm::default()
        };
        assert_eq!(form.to_request(), Err(FormError::Required("slug")));
    }

    #[test]
    fn test_product_form_parses_numbers_and_images() {
        let form = ProductForm {
            title: "Mug".into(),
            price: " 12.50 ".into(),
            stock: "7".into(),
            images: "a.png, b.png,,".into(),
            ..ProductForm::default()
        };
        let product = form.to_request().unwrap();
        assert!((product.price - 12.5).abs() < f64::EPSILON);
        assert_eq!(product.stock, 7);
        assert_eq!(product.images, vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_product_form_rejects_bad_numbers() {
        let form = ProductForm {
            title: "Mug".into(),
            price: "twelve".into(),
            ..ProductForm::default()
        };
        assert!(matches!(
            form.to_request(),
            Err(FormError::InvalidNumber { field: "price", .. })
        ));

        let form = ProductForm {
            title: "Mug".into(),
            stock: "1.5".into(),
            ..ProductForm::default()
        };
        assert!(matches!(
            form.to_request(),
            Err(FormError::InvalidNumber { field: "stock", .. })
        ));
    }

    #[test]
    fn test_customer_form_tags() {
        let form = CustomerForm {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            tags: "vip , wholesale".into(),
        };
        assert_eq!(form.to_request().unwrap().tags, vec!["vip", "wholesale"]);
        assert_eq!(CustomerForm::default().to_request(), Err(FormError::Required("name")));
    }
}
