//! Page behavior for the plant tracker front end.
//!
//! Everything here is written against small view traits so it runs
//! natively in tests; `verdant_web` supplies the DOM-backed
//! implementations.

pub mod config;
pub mod delete;
pub mod error;
pub mod fields;
pub mod flash;
pub mod locale;
pub mod notify;

pub use config::PageConfig;
pub use error::{
  ConfigError,
  FetchError
};
pub use locale::Locale;
pub use verdant_shared::{
  Category,
  FlashMessage,
  GrowthPhaseDto
};
