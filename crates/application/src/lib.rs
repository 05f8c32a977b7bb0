//! 应用层实现。
//!
//! 这里提供围绕领域模型的用例服务，串联请求校验、内容审核、凭据校验
//! 以及对持久化边界（仓储）的单次调用。

pub mod clock;
pub mod dto;
pub mod error;
pub mod password;
pub mod services;

pub use clock::{Clock, SystemClock};
pub use dto::{ChirpDto, UserDto};
pub use error::ApplicationError;
pub use password::{PasswordHasher, PasswordHasherError};
pub use services::{
    AdminService, AdminServiceDependencies, ChirpService, ChirpServiceDependencies, UserService,
    UserServiceDependencies,
};
