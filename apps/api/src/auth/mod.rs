pub mod accounts;
pub mod service;

pub use service::{AuthService, DemoAuthBackend};
