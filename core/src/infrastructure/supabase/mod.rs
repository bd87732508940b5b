pub mod auth;
pub mod client;

pub use auth::SupabaseAuthProvider;
pub use client::SupabaseClient;
