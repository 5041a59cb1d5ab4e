use std::sync::Arc;

use shared::{domain::RestaurantId, protocol::ReviewRequest};
use tracing::info;

use crate::action::{Action, ReviewField};
use crate::api::Api;
use crate::error::ClientError;
use crate::store::Store;

/// A single restaurant's detail, its reviews, and the review draft.
pub struct RestaurantController {
    store: Arc<Store>,
    api: Arc<dyn Api>,
}

impl RestaurantController {
    pub fn new(store: Arc<Store>, api: Arc<dyn Api>) -> Self {
        Self { store, api }
    }

    /// Loads one restaurant's detail. The previous detail is dropped before
    /// the fetch starts, so readers see a loading marker for the new id
    /// rather than another restaurant's stale data. After a failed fetch
    /// the marker stays until the next attempt.
    pub async fn load_restaurant(&self, restaurant_id: RestaurantId) -> Result<(), ClientError> {
        self.store.dispatch(Action::ClearRestaurant);
        let restaurant = self.api.fetch_restaurant(restaurant_id).await?;
        self.store.dispatch(Action::SetRestaurant { restaurant });
        info!(restaurant_id = restaurant_id.0, "restaurant: detail loaded");
        Ok(())
    }

    /// Refreshes the review list. An empty or absent list is a valid
    /// resolution, not a failure.
    pub async fn load_review(&self, restaurant_id: RestaurantId) -> Result<(), ClientError> {
        let reviews = self.api.fetch_reviews(restaurant_id).await?;
        self.store.dispatch(Action::SetReviews { reviews });
        Ok(())
    }

    pub fn set_review_field(&self, field: ReviewField) {
        self.store.dispatch(Action::SetReviewField(field));
    }

    /// Submits the drafted review. Requires a bearer token in state before
    /// any network traffic. On success the draft is cleared and nothing
    /// else changes; callers wanting the fresh list invoke `load_review`
    /// themselves. On failure the draft survives for a retry.
    pub async fn send_review(&self, restaurant_id: RestaurantId) -> Result<(), ClientError> {
        let (access_token, fields) = {
            let state = self.store.state();
            (state.auth.access_token, state.restaurant.review_fields)
        };
        let access_token = access_token.ok_or_else(|| {
            ClientError::Unauthorized("no access token; log in before reviewing".to_string())
        })?;
        let review = ReviewRequest {
            score: fields.score,
            description: fields.description,
        };
        self.api
            .post_review(&access_token, restaurant_id, &review)
            .await?;
        self.store.dispatch(Action::ClearReviewFields);
        info!(
            restaurant_id = restaurant_id.0,
            score = review.score,
            "restaurant: review submitted"
        );
        Ok(())
    }
}
