//! Default identity parameters sent with every request.

use serde::{Deserialize, Serialize};

/// Identity defaults, editable at runtime from the chat surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentitySection {
    pub user_id: String,
    pub studio_id: String,
    /// When false the studio id is optional and omitted if blank.
    pub require_studio_id: bool,
}

impl Default for IdentitySection {
    fn default() -> Self {
        Self {
            user_id: "userA".into(),
            studio_id: "1001".into(),
            require_studio_id: true,
        }
    }
}
