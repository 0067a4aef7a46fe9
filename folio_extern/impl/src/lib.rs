pub mod http;
pub mod mail;
