use std::{fmt, sync::Arc};

use domain::{Password, User, UserEmail, UserId, UserRepository};

use crate::{
    clock::Clock,
    dto::UserDto,
    error::ApplicationError,
    password::{PasswordHasher, PasswordHasherError},
};

#[derive(Clone)]
pub struct RegisterUserRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone)]
pub struct AuthenticateUserRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegisterUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUserRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

impl fmt::Debug for AuthenticateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticateUserRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

pub struct UserServiceDependencies {
    pub user_repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub clock: Arc<dyn Clock>,
}

pub struct UserService {
    deps: UserServiceDependencies,
}

impl UserService {
    pub fn new(deps: UserServiceDependencies) -> Self {
        Self { deps }
    }

    /// 校验邮箱 -> 校验密码 -> 哈希 -> 持久化
    pub async fn register(&self, request: RegisterUserRequest) -> Result<UserDto, ApplicationError> {
        let email = UserEmail::parse(request.email)?;
        let password = Password::parse(request.password)?;

        let password_hash = self.deps.password_hasher.hash(&password).await?;
        drop(password);

        let user = User::register(UserId::generate(), email, password_hash, self.deps.clock.now());
        let stored = self.deps.user_repository.create(user).await?;

        tracing::info!(user_id = %stored.id, "user registered");
        Ok(UserDto::from(&stored))
    }

    /// 账号不存在与密码错误返回同一个 [`ApplicationError::Authentication`]
    pub async fn authenticate(
        &self,
        request: AuthenticateUserRequest,
    ) -> Result<UserDto, ApplicationError> {
        let candidate = Password::candidate(request.password);

        // 不满足注册规则的邮箱不可能存在，按认证失败处理
        let Ok(email) = UserEmail::parse(request.email) else {
            tracing::info!("login rejected");
            return Err(ApplicationError::Authentication);
        };

        let Some(user) = self.deps.user_repository.find_by_email(email).await? else {
            tracing::info!("login rejected");
            return Err(ApplicationError::Authentication);
        };

        match self
            .deps
            .password_hasher
            .verify(&candidate, &user.password)
            .await
        {
            Ok(()) => {
                tracing::info!(user_id = %user.id, "login accepted");
                Ok(UserDto::from(&user))
            }
            Err(PasswordHasherError::Mismatch) => {
                tracing::info!("login rejected");
                Err(ApplicationError::Authentication)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn list(&self) -> Result<Vec<UserDto>, ApplicationError> {
        let users = self.deps.user_repository.list().await?;
        Ok(users.iter().map(UserDto::from).collect())
    }
}
