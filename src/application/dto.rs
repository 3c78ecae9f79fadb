use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    errors::DomainError,
    place::{GeoPoint, Place, UpdatePlacePatch},
    user::User,
};

#[derive(Debug, Deserialize)]
pub struct CreatePlaceRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub address: String,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    pub creator: Uuid,
}

impl CreatePlaceRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("title must not be blank"));
        }
        if self.description.trim().len() < 5 {
            return Err(DomainError::validation(
                "description must be at least 5 characters",
            ));
        }
        if self.address.trim().is_empty() {
            return Err(DomainError::validation("address must not be blank"));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePlaceRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl UpdatePlaceRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(title) = self.title.as_ref()
            && title.trim().is_empty()
        {
            return Err(DomainError::validation("title must not be blank"));
        }
        if let Some(description) = self.description.as_ref()
            && description.trim().len() < 5
        {
            return Err(DomainError::validation(
                "description must be at least 5 characters",
            ));
        }
        Ok(())
    }

    pub fn into_patch(self) -> UpdatePlacePatch {
        UpdatePlacePatch {
            title: self.title.map(|value| value.trim().to_string()),
            description: self.description.map(|value| value.trim().to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlaceResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub address: String,
    pub location: GeoPoint,
    pub creator: Uuid,
}

impl From<Place> for PlaceResponse {
    fn from(value: Place) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            image_url: value.image_url,
            address: value.address,
            location: value.location,
            creator: value.creator,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name must not be blank"));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(DomainError::validation("email must be a valid address"));
        }
        if self.password.len() < 6 {
            return Err(DomainError::validation(
                "password must be at least 6 characters",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User payload without the password credential.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub places: Vec<Uuid>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            places: value.places,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
        return false;
    }

    !value.contains(' ')
}
