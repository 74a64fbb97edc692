pub mod api;
pub mod data;
pub mod security;
pub mod services;
