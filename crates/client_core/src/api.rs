use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use shared::{
    domain::{Category, Region, RestaurantDetail, RestaurantId, RestaurantSummary, Review},
    protocol::{ReviewRequest, SessionRequest, SessionResponse},
};

use crate::error::ClientError;

/// Remote operations the orchestrators depend on. Production traffic goes
/// through [`HttpApi`]; tests substitute in-memory fakes.
#[async_trait]
pub trait Api: Send + Sync {
    async fn list_regions(&self) -> Result<Vec<Region>, ClientError>;
    async fn list_categories(&self) -> Result<Vec<Category>, ClientError>;
    async fn list_restaurants(
        &self,
        region: &Region,
        category: &Category,
    ) -> Result<Vec<RestaurantSummary>, ClientError>;
    async fn fetch_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<RestaurantDetail, ClientError>;
    async fn fetch_reviews(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Option<Vec<Review>>, ClientError>;
    async fn login(&self, email: &str, password: &str) -> Result<String, ClientError>;
    async fn post_review(
        &self,
        access_token: &str,
        restaurant_id: RestaurantId,
        review: &ReviewRequest,
    ) -> Result<(), ClientError>;
}

#[derive(Serialize)]
struct RestaurantsQuery<'a> {
    region: &'a str,
    category: i64,
}

/// JSON client for the customer API.
pub struct HttpApi {
    http: Client,
    server_url: String,
}

impl HttpApi {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            server_url: server_url.into(),
        }
    }
}

fn transport(err: reqwest::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}

fn classify_failure(status: StatusCode, body: String) -> ClientError {
    let detail = if body.is_empty() {
        status.to_string()
    } else {
        body
    };
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        ClientError::Unauthorized(detail)
    } else if status.is_client_error() {
        ClientError::Rejected(detail)
    } else {
        ClientError::Transport(detail)
    }
}

async fn read_failure(response: Response) -> ClientError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    classify_failure(status, body)
}

#[async_trait]
impl Api for HttpApi {
    async fn list_regions(&self) -> Result<Vec<Region>, ClientError> {
        let response = self
            .http
            .get(format!("{}/regions", self.server_url))
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(read_failure(response).await);
        }
        response.json().await.map_err(transport)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let response = self
            .http
            .get(format!("{}/categories", self.server_url))
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(read_failure(response).await);
        }
        response.json().await.map_err(transport)
    }

    async fn list_restaurants(
        &self,
        region: &Region,
        category: &Category,
    ) -> Result<Vec<RestaurantSummary>, ClientError> {
        let response = self
            .http
            .get(format!("{}/restaurants", self.server_url))
            .query(&RestaurantsQuery {
                region: &region.name,
                category: category.id.0,
            })
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(read_failure(response).await);
        }
        response.json().await.map_err(transport)
    }

    async fn fetch_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<RestaurantDetail, ClientError> {
        let response = self
            .http
            .get(format!("{}/restaurants/{}", self.server_url, restaurant_id.0))
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(read_failure(response).await);
        }
        response.json().await.map_err(transport)
    }

    async fn fetch_reviews(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Option<Vec<Review>>, ClientError> {
        // The API exposes reviews only inside the restaurant detail
        // payload, where the field may be missing entirely.
        let detail = self.fetch_restaurant(restaurant_id).await?;
        Ok(detail.reviews)
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(format!("{}/session", self.server_url))
            .json(&SessionRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(read_failure(response).await);
        }
        let body: SessionResponse = response.json().await.map_err(transport)?;
        if body.access_token.is_empty() {
            return Err(ClientError::Rejected(
                "login response carried an empty access token".to_string(),
            ));
        }
        Ok(body.access_token)
    }

    async fn post_review(
        &self,
        access_token: &str,
        restaurant_id: RestaurantId,
        review: &ReviewRequest,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .post(format!(
                "{}/restaurants/{}/reviews",
                self.server_url, restaurant_id.0
            ))
            .bearer_auth(access_token)
            .json(review)
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(read_failure(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
