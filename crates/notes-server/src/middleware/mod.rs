//! Tower middleware used by the server.

pub mod request_id;
