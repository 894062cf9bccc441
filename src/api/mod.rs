//! HTTP client for the Quizzer service.

mod auth;
mod category;
mod client;
mod error;
mod types;

pub use auth::AuthApi;
pub use category::{CategoryApi, HttpCategoryApi};
pub use client::ApiClient;
pub use error::ApiError;
pub use types::{
    Category, CategoryId, LoginRequest, LoginResponse, NewCategory, RegisterRequest,
};
