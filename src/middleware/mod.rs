pub mod auth;
pub mod json;
pub mod response;

pub use auth::authorize;
pub use json::AppJson;
pub use response::{ApiResponse, ApiResult};
