// src/api/http/mod.rs
// REST surface: route handlers and router composition

pub mod handlers;
pub mod router;

pub use router::{create_router, run};
