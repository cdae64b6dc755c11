//! Application wiring for Stratus: service construction and routes.

pub mod app;
pub mod route;

pub use app::App;
pub use route::Route;
