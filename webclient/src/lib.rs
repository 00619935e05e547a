// exported modules
pub mod error;
pub mod model;

// client impls
pub mod linkedin;

// re-exports
pub use error::*;
pub use linkedin::LinkedinClient;
pub use model::*;

pub fn new_client() -> Box<dyn Client> {
    Box::new(LinkedinClient::new())
}

// internal modules
mod http;
