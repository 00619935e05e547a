pub mod action;
pub mod client;
pub mod config;
pub mod interactive;
