pub mod errors;
pub mod id;
pub mod notifications;

pub use errors::{ConfigError, NoriError};
pub use id::{new_correlation_id, new_id, SessionId};
pub use notifications::{Notice, NoticeLevel};
