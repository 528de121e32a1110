use crate::domain::model::AccountDescriptor;
use crate::domain::ports::AccountSource;
use crate::utils::error::{GuideError, Result};
use crate::utils::validation::{
    validate_email, validate_non_empty_string, validate_not_empty, validate_unique_ids, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub accounts: Vec<AccountDescriptor>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Reading account file {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(GuideError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GuideError::TomlError {
            message: e.to_string(),
        })
    }

    /// 驗證每一筆帳號
    pub fn validate_config(&self) -> Result<()> {
        validate_not_empty("accounts", &self.accounts)?;

        for (index, account) in self.accounts.iter().enumerate() {
            validate_email(&format!("accounts[{}].email", index), &account.email)?;
            validate_non_empty_string(&format!("accounts[{}].password", index), &account.password)?;
            validate_non_empty_string(
                &format!("accounts[{}].display_name", index),
                &account.display_name,
            )?;
            validate_non_empty_string(&format!("accounts[{}].staff_id", index), &account.staff_id)?;
        }

        validate_unique_ids(
            "accounts.staff_id",
            self.accounts.iter().map(|a| a.staff_id.as_str()),
        )
    }
}

impl AccountSource for TomlConfig {
    fn accounts(&self) -> &[AccountDescriptor] {
        &self.accounts
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
