pub mod handlers;
pub mod multipart;
pub mod router;
