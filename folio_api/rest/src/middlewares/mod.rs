pub mod client_ip;
pub mod panic_handler;
pub mod request_id;
pub mod security_headers;
pub mod trace;
