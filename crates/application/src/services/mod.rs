mod admin_service;
mod chirp_service;
mod user_service;

#[cfg(test)]
mod test_support;

pub use admin_service::{AdminService, AdminServiceDependencies};
pub use chirp_service::{ChirpService, ChirpServiceDependencies, CreateChirpRequest};
pub use user_service::{
    AuthenticateUserRequest, RegisterUserRequest, UserService, UserServiceDependencies,
};
