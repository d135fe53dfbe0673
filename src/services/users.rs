//! User management service

use crate::{
    error::{AppError, AppResult},
    models::{validate_record, Record, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.repository.users.list().await)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<User> {
        self.repository
            .users
            .find(id)
            .await
            .ok_or_else(|| AppError::not_found(User::ENTITY, id))
    }

    pub async fn create(&self, user: User) -> AppResult<User> {
        validate_record(&user)?;
        let created = self.repository.users.create(user).await;
        tracing::info!(user_id = %created.id, "User created");
        Ok(created)
    }

    pub async fn update(&self, id: &str, user: User) -> AppResult<User> {
        if !self.repository.users.exists(id).await {
            return Err(AppError::not_found(User::ENTITY, id));
        }
        validate_record(&user)?;
        let updated = self
            .repository
            .users
            .update(id, user)
            .await
            .ok_or_else(|| AppError::not_found(User::ENTITY, id))?;
        tracing::info!(user_id = %id, "User updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> AppResult<User> {
        let deleted = self
            .repository
            .users
            .delete(id)
            .await
            .ok_or_else(|| AppError::not_found(User::ENTITY, id))?;
        tracing::info!(user_id = %id, "User deleted");
        Ok(deleted)
    }
}
