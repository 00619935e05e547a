pub mod client;
pub mod urls;
mod headers;

pub use client::*;
pub use urls::*;
