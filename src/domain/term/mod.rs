pub mod dto;
pub mod entity;
pub mod handler;
pub mod parser;
pub mod prompt;
pub mod service;
pub mod store;

pub use dto::{TermRequest, TermResponse};
pub use handler::generate_term;
pub use service::TermService;
pub use store::{MySqlConnector, SeaOrmTermStore, SharedStoreConnector, StoreConnector, TermStore};
