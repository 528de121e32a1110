use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDescriptor {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub staff_id: String,
}

impl AccountDescriptor {
    pub fn new(email: &str, password: &str, display_name: &str, staff_id: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            display_name: display_name.to_string(),
            staff_id: staff_id.to_string(),
        }
    }
}

/// 內建的兩組測試帳號，順序即輸出順序
pub fn default_accounts() -> Vec<AccountDescriptor> {
    vec![
        AccountDescriptor::new(
            "staff001@staff.tutgo.com",
            "staff123",
            "Admin Utama",
            "STAFF001",
        ),
        AccountDescriptor::new(
            "staff002@staff.tutgo.com",
            "staff123",
            "Operator 1",
            "STAFF002",
        ),
    ]
}

/// Example shape of a `users/{uid}` document in the document store.
///
/// Field order matters: it is the key order of the printed JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordTemplate {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub staff_id: String,
    pub user_type: String,
    pub created_at: String,
    pub updated_at: String,
}

impl RecordTemplate {
    pub const UID_PLACEHOLDER: &'static str = "firebase_user_uid";
    pub const TIMESTAMP_PLACEHOLDER: &'static str = "timestamp";
    pub const STAFF_USER_TYPE: &'static str = "staff";

    /// uid 與時間欄位是佔位字串，真正的值要等操作人員建立帳號後才知道
    pub fn example_for(account: &AccountDescriptor) -> Self {
        Self {
            uid: Self::UID_PLACEHOLDER.to_string(),
            name: account.display_name.clone(),
            email: account.email.clone(),
            staff_id: account.staff_id.clone(),
            user_type: Self::STAFF_USER_TYPE.to_string(),
            created_at: Self::TIMESTAMP_PLACEHOLDER.to_string(),
            updated_at: Self::TIMESTAMP_PLACEHOLDER.to_string(),
        }
    }

    /// 2 格縮排的 JSON
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
