pub mod message;
pub mod replies;
pub mod transcript;
