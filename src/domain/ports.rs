use crate::domain::model::{default_accounts, AccountDescriptor};

/// Where the printer gets its staff accounts from.
pub trait AccountSource {
    fn accounts(&self) -> &[AccountDescriptor];
}

/// The accounts compiled into the binary.
#[derive(Debug, Clone)]
pub struct BuiltinAccounts {
    accounts: Vec<AccountDescriptor>,
}

impl BuiltinAccounts {
    pub fn new() -> Self {
        Self {
            accounts: default_accounts(),
        }
    }
}

impl Default for BuiltinAccounts {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountSource for BuiltinAccounts {
    fn accounts(&self) -> &[AccountDescriptor] {
        &self.accounts
    }
}

impl AccountSource for Vec<AccountDescriptor> {
    fn accounts(&self) -> &[AccountDescriptor] {
        self
    }
}
