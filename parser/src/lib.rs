pub mod fetch;
pub mod listing;
pub mod mapper;
pub mod model;
pub mod parse_error;
pub mod parser;
pub mod plugin;
pub mod util;
pub use url::Url;

#[macro_use]
extern crate log;
