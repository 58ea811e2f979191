//! ShopFlow client core.
//!
//! Everything the web frontend needs that does not touch the DOM:
//! - `model`: resource payloads rendered by the views
//! - `protocol`: one typed request per backend endpoint
//! - `client`: the HTTP client wrapper over an injectable `Transport`
//! - `session`: bearer-token session over an injectable `TokenStore`
//! - `route`: the declarative route table and resolver
//! - `cart`, `forms`, `load`: view-side state helpers

pub mod auth;
pub mod cart;
pub mod client;
pub mod config;
pub mod error;
pub mod forms;
pub mod load;
pub mod model;
pub mod protocol;
pub mod route;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// Storage key holding the bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Backend used when no base URL is configured at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
/// Path prefix of the public storefront routes.
pub const STOREFRONT_PREFIX: &str = "/store/";
/// Path of the store admin panel.
pub const ADMIN_PATH: &str = "/admin";

pub use auth::{AuthError, AuthMode, Credentials};
pub use cart::{Cart, CartLine};
pub use client::{ApiClient, HttpRequest, HttpResponse, Transport};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use forms::{CustomerForm, FormError, ProductForm, StoreForm};
pub use load::LoadState;
pub use model::*;
pub use protocol::{ApiRequest, HttpMethod};
pub use route::{AppRoute, RouteState};
pub use session::{MemoryTokenStore, Session, SessionError, TokenStore};
