//! HTTP service handlers.
//!
//! One module per route group; each handler stays thin and pushes the real
//! work into `checkout-core` or a small pure helper next to it.

pub mod checkout_service;
pub mod docs_service;
pub mod health_service;
pub mod static_service;
