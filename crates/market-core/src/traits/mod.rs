//! Repository traits (ports) for the persistence layer

mod repositories;

pub use repositories::{
    CommentRepository, ContractRepository, NotificationQuery, NotificationRepository,
    ReactionRepository, RepoResult, UserRepository,
};
