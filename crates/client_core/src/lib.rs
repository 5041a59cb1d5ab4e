pub mod action;
pub mod api;
pub mod auth;
pub mod error;
pub mod restaurant;
pub mod restaurants;
pub mod session;
pub mod state;
pub mod store;

pub use action::{Action, LoginField, ReviewField};
pub use api::{Api, HttpApi};
pub use auth::AuthController;
pub use error::ClientError;
pub use restaurant::RestaurantController;
pub use restaurants::{InitialDataReport, RestaurantsController};
pub use session::{DurableSessionStore, SessionStore, ACCESS_TOKEN_KEY};
pub use state::{
    AppState, AuthState, Load, LoginFields, RestaurantState, RestaurantsState, ReviewFields,
};
pub use store::Store;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
