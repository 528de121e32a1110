pub mod printer;

pub use crate::domain::model::{AccountDescriptor, RecordTemplate};
pub use crate::domain::ports::{AccountSource, BuiltinAccounts};
pub use crate::utils::error::Result;
