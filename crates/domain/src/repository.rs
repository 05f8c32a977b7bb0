//! 持久化边界（Store Adapter）接口
//!
//! 核心层每个逻辑操作最多调用一次仓储，失败直接向上返回，不做重试。

use futures::future::BoxFuture;

use crate::chirp::Chirp;
use crate::errors::RepositoryError;
use crate::user::User;
use crate::value_objects::{ChirpId, UserEmail};

pub type RepositoryResult<T> = Result<T, RepositoryError>;
pub type RepositoryFuture<T> = BoxFuture<'static, RepositoryResult<T>>;

#[cfg_attr(feature = "testing", mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// 邮箱重复时返回 [`RepositoryError::Conflict`]
    fn create(&self, user: User) -> RepositoryFuture<User>;
    fn find_by_email(&self, email: UserEmail) -> RepositoryFuture<Option<User>>;
    fn list(&self) -> RepositoryFuture<Vec<User>>;
    /// 删除全部用户（级联删除其 Chirp），返回删除的用户数
    fn delete_all(&self) -> RepositoryFuture<u64>;
}

#[cfg_attr(feature = "testing", mockall::automock)]
pub trait ChirpRepository: Send + Sync {
    fn create(&self, chirp: Chirp) -> RepositoryFuture<Chirp>;
    fn find_by_id(&self, id: ChirpId) -> RepositoryFuture<Option<Chirp>>;
    /// 按创建顺序（created_at 升序，id 升序）返回全部 Chirp
    fn list_all(&self) -> RepositoryFuture<Vec<Chirp>>;
}
