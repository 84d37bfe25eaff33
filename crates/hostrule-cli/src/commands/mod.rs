//! Command implementations.

pub mod convert;
pub mod settings;
pub mod template;

pub use self::convert::execute_convert;
pub use self::settings::execute_config;
pub use self::template::execute_template;
