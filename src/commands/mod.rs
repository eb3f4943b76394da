//! Quotes API Gateway
//!
//! Typed async wrappers over the dashboard's HTTP endpoints, organized by domain.
//! Read calls never fail: errors are logged and replaced by empty results.

mod csrf;
mod error;
mod folders;
mod quotes;
mod transport;

use std::cell::Cell;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::DashboardConfig;
use crate::models::Notice;

// Re-export all public items
pub use csrf::*;
pub use error::*;
pub use folders::*;
pub use quotes::*;
pub use transport::*;

/// UI side channels the gateway reports through
pub trait Feedback {
    fn set_loading(&self, loading: bool);
    fn notify(&self, notice: Notice);
}

/// Keeps the loading indicator on until the last overlapping guard drops
struct LoadingGuard<'a> {
    feedback: &'a dyn Feedback,
    in_flight: &'a Cell<usize>,
}

impl<'a> LoadingGuard<'a> {
    fn start(feedback: &'a dyn Feedback, in_flight: &'a Cell<usize>) -> Self {
        in_flight.set(in_flight.get() + 1);
        feedback.set_loading(true);
        Self { feedback, in_flight }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let remaining = self.in_flight.get().saturating_sub(1);
        self.in_flight.set(remaining);
        if remaining == 0 {
            self.feedback.set_loading(false);
        }
    }
}

/// Gateway to the quotes backend
#[derive(Clone)]
pub struct ApiClient {
    config: Rc<DashboardConfig>,
    transport: Rc<dyn Transport>,
    csrf: Rc<dyn CsrfSource>,
    feedback: Rc<dyn Feedback>,
    /// Searches awaiting a response
    searches_in_flight: Rc<Cell<usize>>,
}

impl ApiClient {
    pub fn new(
        config: Rc<DashboardConfig>,
        transport: Rc<dyn Transport>,
        csrf: Rc<dyn CsrfSource>,
        feedback: Rc<dyn Feedback>,
    ) -> Self {
        Self {
            config,
            transport,
            csrf,
            feedback,
            searches_in_flight: Rc::new(Cell::new(0)),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let response = self.transport.send(ApiRequest::get(url)).await?.into_success()?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send a JSON body with the CSRF header attached
    async fn send_json<B: Serialize>(
        &self,
        method: Method,
        url: String,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        let payload = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let mut request = ApiRequest::json(method, url, payload);
        match self.csrf.token() {
            Some(token) => request = request.with_header(CSRF_HEADER, token),
            None => tracing::warn!("no CSRF token available for {}", request.url),
        }
        self.transport.send(request).await?.into_success()
    }
}
