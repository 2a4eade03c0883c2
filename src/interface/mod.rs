pub mod error_log;
pub mod gateway;
pub mod responder;
pub mod router;
pub mod stdio;
