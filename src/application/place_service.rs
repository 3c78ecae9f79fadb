use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    application::{
        dto::{CreatePlaceRequest, PlaceResponse, UpdatePlaceRequest},
        geocode,
    },
    domain::{errors::DomainError, place::Place},
    infrastructure::{PlaceRepository, UserRepository},
    transaction::{Change, TransactionError, TransactionId, TransactionManager},
};

/// Keeps places and their owners consistent.
///
/// A place and the owner's reference to it are written in one unit of work:
/// creation inserts the place and appends its id to the owner, deletion
/// removes the place and drops the id. Either both writes land or neither
/// does, so no reader ever sees an orphaned place or a dangling reference.
#[derive(Clone)]
pub struct PlaceService {
    places: Arc<dyn PlaceRepository>,
    users: Arc<dyn UserRepository>,
    transactions: Arc<TransactionManager>,
}

impl PlaceService {
    pub fn new(
        places: Arc<dyn PlaceRepository>,
        users: Arc<dyn UserRepository>,
        transactions: Arc<TransactionManager>,
    ) -> Self {
        Self {
            places,
            users,
            transactions,
        }
    }

    pub async fn create_place(
        &self,
        request: CreatePlaceRequest,
    ) -> Result<PlaceResponse, DomainError> {
        request.validate()?;

        let Some(owner) = self.users.get_by_id(request.creator).await? else {
            return Err(DomainError::owner_not_found(
                "could not find a user for the provided id",
            ));
        };

        let location = request
            .location
            .unwrap_or_else(|| geocode::lookup_coordinates(&request.address));

        let place = Place {
            id: Uuid::new_v4(),
            title: request.title.trim().to_string(),
            description: request.description.trim().to_string(),
            image_url: request.image_url.unwrap_or_default(),
            address: request.address.trim().to_string(),
            location,
            creator: owner.id,
        };

        let txn = self.transactions.begin().await;
        if let Err(err) = self.stage_create(txn, &place).await {
            let _ = self.transactions.rollback(txn).await;
            warn!(place_id = %place.id, owner_id = %owner.id, error = %err, "place creation rolled back");
            return Err(DomainError::linkage_failure(
                "creating the place failed, nothing was saved",
            ));
        }

        info!(place_id = %place.id, owner_id = %owner.id, "place created and linked");
        Ok(PlaceResponse::from(place))
    }

    pub async fn delete_place(&self, place_id: Uuid) -> Result<(), DomainError> {
        let Some(place) = self.places.get_by_id(place_id).await? else {
            return Err(DomainError::place_not_found(
                "could not find a place for the provided id",
            ));
        };

        let txn = self.transactions.begin().await;
        if let Err(err) = self.stage_delete(txn, &place).await {
            let _ = self.transactions.rollback(txn).await;
            warn!(place_id = %place.id, owner_id = %place.creator, error = %err, "place deletion rolled back");
            return Err(DomainError::unlinkage_failure(
                "deleting the place failed, nothing was changed",
            ));
        }

        info!(place_id = %place.id, owner_id = %place.creator, "place deleted and unlinked");
        Ok(())
    }

    pub async fn get_place(&self, place_id: Uuid) -> Result<PlaceResponse, DomainError> {
        let Some(place) = self.places.get_by_id(place_id).await? else {
            return Err(DomainError::place_not_found(
                "could not find a place for the provided id",
            ));
        };
        Ok(PlaceResponse::from(place))
    }

    pub async fn list_places_by_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<PlaceResponse>, DomainError> {
        let places = self.places.find_by_owner(owner_id).await?;
        if places.is_empty() {
            return Err(DomainError::place_not_found(
                "could not find places for the provided user id",
            ));
        }
        Ok(places.into_iter().map(PlaceResponse::from).collect())
    }

    /// Single-document update; the owner linkage is never touched here.
    pub async fn update_place(
        &self,
        place_id: Uuid,
        request: UpdatePlaceRequest,
    ) -> Result<PlaceResponse, DomainError> {
        request.validate()?;

        let Some(mut place) = self.places.get_by_id(place_id).await? else {
            return Err(DomainError::place_not_found(
                "could not find a place for the provided id",
            ));
        };

        let patch = request.into_patch();
        if let Some(title) = patch.title {
            place.title = title;
        }
        if let Some(description) = patch.description {
            place.description = description;
        }

        let saved = self.places.save(place).await?;
        Ok(PlaceResponse::from(saved))
    }

    async fn stage_create(
        &self,
        txn: TransactionId,
        place: &Place,
    ) -> Result<(), TransactionError> {
        self.transactions
            .record(txn, Change::PutPlace(place.clone()))
            .await?;
        self.transactions
            .record(
                txn,
                Change::LinkPlace {
                    owner_id: place.creator,
                    place_id: place.id,
                },
            )
            .await?;
        self.transactions.commit(txn).await
    }

    async fn stage_delete(
        &self,
        txn: TransactionId,
        place: &Place,
    ) -> Result<(), TransactionError> {
        self.transactions
            .record(txn, Change::RemovePlace(place.id))
            .await?;
        self.transactions
            .record(
                txn,
                Change::UnlinkPlace {
                    owner_id: place.creator,
                    place_id: place.id,
                },
            )
            .await?;
        self.transactions.commit(txn).await
    }
}
