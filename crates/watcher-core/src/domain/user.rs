use serde::{Deserialize, Serialize};
use serde_json::Value;

/// User entity - a Tautulli user as returned by `get_users`.
///
/// Fields are kept verbatim as JSON so an oddly typed value in one row (a
/// string `user_id`, a numeric `email`) cannot fail the whole list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub user_id: Option<Value>,
    #[serde(default)]
    pub username: Option<Value>,
    #[serde(default)]
    pub friendly_name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub is_active: Option<Value>,
    #[serde(default)]
    pub is_admin: Option<Value>,
}

impl User {
    /// Display name, falling back to the username when none is set.
    pub fn display_name(&self) -> Option<&Value> {
        self.friendly_name
            .as_ref()
            .filter(|name| is_present(name))
            .or(self.username.as_ref())
    }
}

// Null and "" count as unset.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
