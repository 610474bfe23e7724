pub mod middleware;

pub use middleware::request_id_middleware;
