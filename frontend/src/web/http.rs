//! HTTP 传输层
//!
//! 基于 `gloo-net` 的 fetch 实现，只负责一次请求/响应交换；
//! 鉴权头、状态码分类等逻辑都在 `shopflow_shared::client` 中。

use async_trait::async_trait;
use gloo_net::http::{Method, RequestBuilder};
use shopflow_shared::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};

/// 浏览器 fetch 传输
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn method_of(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = RequestBuilder::new(&request.url).method(method_of(request.method));
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        // 失败响应的原始文本会作为错误信息保留
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse::new(status, body))
    }
}
