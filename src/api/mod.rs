pub mod response;
pub mod routes;

pub use response::ErrorResponse;
pub use routes::{build_router, AppState};
