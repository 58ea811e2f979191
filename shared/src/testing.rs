//! Test doubles shared by the unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::{ApiClient, HttpRequest, HttpResponse, Transport};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::Session;

#[derive(Default)]
struct MockState {
    /// Every request seen, in order.
    requests: Vec<HttpRequest>,
    /// Scripted replies, consumed front to back.
    replies: VecDeque<Result<HttpResponse, ApiError>>,
}

/// Transport that records requests and replays scripted responses.
///
/// Clones share state, so a test can keep one handle while the client owns
/// another.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(&self, status: u16, body: &str) -> &Self {
        self.state
            .lock()
            .unwrap()
            .replies
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub(crate) fn fail(&self, err: ApiError) -> &Self {
        self.state.lock().unwrap().replies.push_back(Err(err));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }

    /// Client against the default base URL.
    pub(crate) fn client(&self, session: Session) -> ApiClient {
        ApiClient::new(ClientConfig::default(), session, self.clone())
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        state
            .replies
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(404, r#"{"detail":"Not Found"}"#)))
    }
}
