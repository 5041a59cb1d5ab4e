use shared::domain::{Category, Region, RestaurantDetail, RestaurantSummary, Review};

use crate::state::{AppState, Load, LoginFields, ReviewFields};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginField {
    Email(String),
    Password(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewField {
    Score(u32),
    Description(String),
}

/// One state transition. Every mutation of [`AppState`] flows through the
/// store as one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetLoginField(LoginField),
    SetAccessToken { access_token: String },
    SetRegions { regions: Vec<Region> },
    SetCategories { categories: Vec<Category> },
    SelectRegion { region: Region },
    SelectCategory { category: Category },
    SetRestaurants { restaurants: Vec<RestaurantSummary> },
    ClearRestaurant,
    SetRestaurant { restaurant: RestaurantDetail },
    SetReviews { reviews: Option<Vec<Review>> },
    SetReviewField(ReviewField),
    ClearReviewFields,
}

/// Pure reducer: applies one transition to the state. No I/O happens here;
/// workflows do all of theirs before or after the dispatch.
pub(crate) fn update(state: &mut AppState, action: &Action) {
    match action {
        Action::SetLoginField(field) => match field {
            LoginField::Email(email) => state.auth.login_fields.email = email.clone(),
            LoginField::Password(password) => {
                state.auth.login_fields.password = password.clone()
            }
        },
        Action::SetAccessToken { access_token } => {
            // A fresh token also retires the draft credentials that
            // produced it.
            state.auth.access_token = Some(access_token.clone());
            state.auth.login_fields = LoginFields::default();
        }
        Action::SetRegions { regions } => state.restaurants.regions = regions.clone(),
        Action::SetCategories { categories } => {
            state.restaurants.categories = categories.clone()
        }
        Action::SelectRegion { region } => {
            state.restaurants.selected_region = Some(region.clone())
        }
        Action::SelectCategory { category } => {
            state.restaurants.selected_category = Some(category.clone())
        }
        Action::SetRestaurants { restaurants } => {
            state.restaurants.restaurants = restaurants.clone()
        }
        Action::ClearRestaurant => {
            state.restaurant.restaurant = Load::Loading;
            state.restaurant.reviews = None;
        }
        Action::SetRestaurant { restaurant } => {
            state.restaurant.restaurant = Load::Loaded(restaurant.clone())
        }
        Action::SetReviews { reviews } => state.restaurant.reviews = reviews.clone(),
        Action::SetReviewField(field) => match field {
            ReviewField::Score(score) => state.restaurant.review_fields.score = *score,
            ReviewField::Description(description) => {
                state.restaurant.review_fields.description = description.clone()
            }
        },
        Action::ClearReviewFields => state.restaurant.review_fields = ReviewFields::default(),
    }
}
