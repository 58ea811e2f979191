//! 浏览器适配层
//!
//! 将 `shopflow_shared` 中的抽象（`Transport`、`TokenStore`）落到浏览器 API 上，
//! 并提供基于 History API 的路由服务。

mod http;
pub mod router;
mod storage;

pub use http::FetchTransport;
pub use storage::LocalTokenStore;
