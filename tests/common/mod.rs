//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use quizadmin::api::{ApiClient, ApiError, Category, CategoryApi, CategoryId, NewCategory};
use quizadmin::config::ApiConfig;
use quizadmin::ui::categories::CategoryIntent;
use quizadmin::ui::mvi::Dispatch;
use std::collections::VecDeque;
use std::sync::Arc;

/// Build an `ApiClient` pointed at `base_url` with short timeouts.
pub fn client_for(base_url: &str, token: Option<&str>) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        token: token.map(str::to_string),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    };
    ApiClient::new(&config).expect("client")
}

pub fn service_error(status: u16, message: &str) -> ApiError {
    ApiError::Status {
        status,
        message: message.to_string(),
    }
}

// -- Dispatch spy -------------------------------------------------------------

/// Records every intent in order instead of reducing it.
#[derive(Default)]
pub struct RecordingDispatch {
    pub intents: Vec<CategoryIntent>,
}

impl Dispatch<CategoryIntent> for RecordingDispatch {
    fn dispatch(&mut self, intent: CategoryIntent) {
        self.intents.push(intent);
    }
}

// -- Category service stub ----------------------------------------------------

/// A call observed by [`StubCategoryApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List,
    Create(NewCategory),
    Update(CategoryId, Category),
    Delete(CategoryId),
}

/// In-memory `CategoryApi` with scripted results.
///
/// Each method pops the next scripted result for its kind; an unscripted
/// call fails with a 500.
#[derive(Default)]
pub struct StubCategoryApi {
    pub calls: Arc<Mutex<Vec<ApiCall>>>,
    lists: Mutex<VecDeque<Result<Vec<Category>, ApiError>>>,
    items: Mutex<VecDeque<Result<Category, ApiError>>>,
    deletes: Mutex<VecDeque<Result<(), ApiError>>>,
}

impl StubCategoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(self, result: Result<Vec<Category>, ApiError>) -> Self {
        self.lists.lock().push_back(result);
        self
    }

    pub fn with_item(self, result: Result<Category, ApiError>) -> Self {
        self.items.lock().push_back(result);
        self
    }

    pub fn with_delete(self, result: Result<(), ApiError>) -> Self {
        self.deletes.lock().push_back(result);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }
}

fn unscripted<T>() -> Result<T, ApiError> {
    Err(service_error(500, "unscripted call"))
}

#[async_trait]
impl CategoryApi for StubCategoryApi {
    async fn list(&self) -> Result<Vec<Category>, ApiError> {
        self.calls.lock().push(ApiCall::List);
        self.lists.lock().pop_front().unwrap_or_else(unscripted)
    }

    async fn create(&self, category: &NewCategory) -> Result<Category, ApiError> {
        self.calls.lock().push(ApiCall::Create(category.clone()));
        self.items.lock().pop_front().unwrap_or_else(unscripted)
    }

    async fn update(&self, id: &CategoryId, category: &Category) -> Result<Category, ApiError> {
        self.calls
            .lock()
            .push(ApiCall::Update(id.clone(), category.clone()));
        self.items.lock().pop_front().unwrap_or_else(unscripted)
    }

    async fn delete(&self, id: &CategoryId) -> Result<(), ApiError> {
        self.calls.lock().push(ApiCall::Delete(id.clone()));
        self.deletes.lock().pop_front().unwrap_or_else(unscripted)
    }
}
