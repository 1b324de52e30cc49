//! HTTP API: catalog browsing, WhatsApp checkout links and printable quotes.

pub mod app;
pub mod config;
