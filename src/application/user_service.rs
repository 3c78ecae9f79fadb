use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::{
    application::dto::{LoginRequest, SignupRequest, UserResponse},
    domain::{errors::DomainError, user::User},
    infrastructure::UserRepository,
};

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<UserResponse, DomainError> {
        request.validate()?;

        let normalized_email = request.email.trim().to_lowercase();
        if self
            .users
            .find_by_email(&normalized_email)
            .await?
            .is_some()
        {
            return Err(DomainError::conflict(
                "could not create user, email already exists",
            ));
        }

        let created = self
            .users
            .save(User {
                id: Uuid::new_v4(),
                name: request.name.trim().to_string(),
                email: normalized_email,
                password: request.password,
                places: Vec::new(),
            })
            .await?;

        info!(user_id = %created.id, "user signed up");
        Ok(UserResponse::from(created))
    }

    /// Plain equality check against the stored credential. No sessions or
    /// tokens are issued.
    pub async fn login(&self, request: LoginRequest) -> Result<(), DomainError> {
        let normalized_email = request.email.trim().to_lowercase();
        let identified = self.users.find_by_email(&normalized_email).await?;

        match identified {
            Some(user) if user.password == request.password => Ok(()),
            _ => Err(DomainError::unauthorized(
                "could not identify user, credentials seem to be wrong",
            )),
        }
    }

    pub async fn list_users(&self) -> Result<Vec<UserResponse>, DomainError> {
        let users = self.users.list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_user(&self, id: Uuid) -> Result<UserResponse, DomainError> {
        let Some(user) = self.users.get_by_id(id).await? else {
            return Err(DomainError::owner_not_found(
                "could not find a user for the provided id",
            ));
        };
        Ok(UserResponse::from(user))
    }
}
