pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use core::printer::InstructionPrinter;
pub use domain::model::{default_accounts, AccountDescriptor, RecordTemplate};
pub use domain::ports::{AccountSource, BuiltinAccounts};
pub use utils::error::{GuideError, Result};
