pub mod config;
pub mod error;
pub mod icon;

pub use config::{BazaConfig, ChatConfig, GeneralConfig};
pub use error::{BazaError, Result};
pub use icon::Icon;
