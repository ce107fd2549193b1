//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in market-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod contract;
mod error;
mod notification;
mod reaction;
mod user;

pub use comment::PgCommentRepository;
pub use contract::PgContractRepository;
pub use notification::PgNotificationRepository;
pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;
