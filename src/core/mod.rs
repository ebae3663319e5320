pub mod cache;
pub mod client;
pub mod configuration;
pub mod scopes;
