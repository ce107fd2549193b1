//! # market-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    HealthResponse, LikeCountResponse, LikedResponse, NotificationResponse, PaginatedResponse,
    PaginationMeta, ReactRequest, ReactionResponse, ReadinessResponse, UnseenCountResponse,
};
pub use services::{
    NotificationService, ReactionService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
