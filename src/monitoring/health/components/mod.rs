//! Individual component probe implementations

mod cache;
mod database;
mod http;

pub use cache::CacheProbe;
pub use database::DatabaseProbe;
pub use http::HttpProbe;
