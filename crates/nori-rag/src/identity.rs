//! Identity parameters attached to every outgoing request.

use crate::RagError;

/// Which identity fields a deployment requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentityPolicy {
    pub require_studio_id: bool,
}

impl IdentityPolicy {
    pub fn user_only() -> Self {
        Self {
            require_studio_id: false,
        }
    }

    pub fn user_and_studio() -> Self {
        Self {
            require_studio_id: true,
        }
    }
}

/// Identity as typed on the chat surface, possibly blank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdentityParams {
    pub user_id: String,
    pub studio_id: Option<String>,
}

impl IdentityParams {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            studio_id: None,
        }
    }

    pub fn with_studio_id(mut self, studio_id: impl Into<String>) -> Self {
        self.studio_id = Some(studio_id.into());
        self
    }

    /// Check the ids against `policy`, trimming surrounding whitespace.
    pub fn validate(&self, policy: IdentityPolicy) -> Result<ValidIdentity, RagError> {
        let user_id = self.user_id.trim();
        let studio_id = self
            .studio_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let missing_user = user_id.is_empty();
        let missing_studio = policy.require_studio_id && studio_id.is_none();

        if missing_user || missing_studio {
            let msg = if policy.require_studio_id {
                "Please provide a User ID and a Studio ID."
            } else {
                "Please provide a User ID."
            };
            return Err(RagError::Validation(msg.into()));
        }

        Ok(ValidIdentity {
            user_id: user_id.to_string(),
            studio_id: studio_id.map(String::from),
        })
    }
}

/// Identity that passed validation: trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidIdentity {
    user_id: String,
    studio_id: Option<String>,
}

impl ValidIdentity {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn studio_id(&self) -> Option<&str> {
        self.studio_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_ids() {
        let id = IdentityParams::new("  u1 ")
            .with_studio_id(" 1001\t")
            .validate(IdentityPolicy::user_and_studio())
            .unwrap();
        assert_eq!(id.user_id(), "u1");
        assert_eq!(id.studio_id(), Some("1001"));
    }

    #[test]
    fn blank_user_is_rejected() {
        let err = IdentityParams::new("   ")
            .validate(IdentityPolicy::user_only())
            .unwrap_err();
        assert!(matches!(err, RagError::Validation(_)));
        assert_eq!(err.to_string(), "Please provide a User ID.");
    }

    #[test]
    fn missing_studio_rejected_when_required() {
        let err = IdentityParams::new("u1")
            .validate(IdentityPolicy::user_and_studio())
            .unwrap_err();
        assert!(err.to_string().contains("Studio ID"));

        let err = IdentityParams::new("u1")
            .with_studio_id(" ")
            .validate(IdentityPolicy::user_and_studio())
            .unwrap_err();
        assert!(matches!(err, RagError::Validation(_)));
    }

    #[test]
    fn blank_optional_studio_is_dropped() {
        let id = IdentityParams::new("u1")
            .with_studio_id("  ")
            .validate(IdentityPolicy::user_only())
            .unwrap();
        assert_eq!(id.studio_id(), None);
    }
}
