use shared::domain::{Category, Region, RestaurantDetail, RestaurantSummary, Review};

/// Lifecycle of a remotely fetched resource.
///
/// `Loading` doubles as the cleared state: starting a new fetch drops the
/// previous value before the next one resolves, so readers never see one
/// restaurant's data under another restaurant's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Load<T> {
    NotRequested,
    Loading,
    Loaded(T),
}

impl<T> Load<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Load::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for Load<T> {
    fn default() -> Self {
        Load::NotRequested
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFields {
    pub score: u32,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub login_fields: LoginFields,
    /// Bearer token for authenticated requests. `None` means
    /// unauthenticated; a present token is always non-empty and comes from
    /// a successful login or from persisted storage.
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantsState {
    pub regions: Vec<Region>,
    pub categories: Vec<Category>,
    pub selected_region: Option<Region>,
    pub selected_category: Option<Category>,
    /// The list for `(selected_region, selected_category)` as of the last
    /// completed fetch. Selection changes leave it untouched until the
    /// fetch workflow runs again.
    pub restaurants: Vec<RestaurantSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantState {
    pub restaurant: Load<RestaurantDetail>,
    pub reviews: Option<Vec<Review>>,
    pub review_fields: ReviewFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub auth: AuthState,
    pub restaurants: RestaurantsState,
    pub restaurant: RestaurantState,
}
