mod config;
pub use config::Config;

mod error;
pub use error::Error;

pub mod schema;
pub use schema::Schema;

mod value;
pub use value::Value;

/// A Result type alias that uses Freeform's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
