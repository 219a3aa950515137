pub mod app;
pub mod cache;
pub mod extract;
pub mod webserver;

// vim: ts=4
