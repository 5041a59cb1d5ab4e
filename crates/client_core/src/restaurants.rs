use std::sync::Arc;

use shared::domain::{Category, Region};
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::api::Api;
use crate::error::ClientError;
use crate::state::AppState;
use crate::store::Store;

/// Region/category catalogs, the current selection, and the filtered
/// restaurant list.
pub struct RestaurantsController {
    store: Arc<Store>,
    api: Arc<dyn Api>,
}

/// Per-catalog outcome of [`RestaurantsController::load_initial_data`].
/// One catalog failing never blocks the other from being published.
#[derive(Debug)]
pub struct InitialDataReport {
    pub regions: Result<(), ClientError>,
    pub categories: Result<(), ClientError>,
}

impl InitialDataReport {
    pub fn fully_loaded(&self) -> bool {
        self.regions.is_ok() && self.categories.is_ok()
    }
}

impl RestaurantsController {
    pub fn new(store: Arc<Store>, api: Arc<dyn Api>) -> Self {
        Self { store, api }
    }

    /// Fetches both catalogs concurrently. Region results are always
    /// dispatched before category results, regardless of which fetch
    /// settles first.
    pub async fn load_initial_data(&self) -> InitialDataReport {
        let (regions, categories) =
            futures::join!(self.api.list_regions(), self.api.list_categories());

        let regions = match regions {
            Ok(regions) => {
                self.store.dispatch(Action::SetRegions { regions });
                Ok(())
            }
            Err(err) => {
                warn!("catalog: region fetch failed: {err}");
                Err(err)
            }
        };
        let categories = match categories {
            Ok(categories) => {
                self.store.dispatch(Action::SetCategories { categories });
                Ok(())
            }
            Err(err) => {
                warn!("catalog: category fetch failed: {err}");
                Err(err)
            }
        };

        InitialDataReport {
            regions,
            categories,
        }
    }

    pub fn select_region(&self, region: Region) {
        self.store.dispatch(Action::SelectRegion { region });
    }

    pub fn select_category(&self, category: Category) {
        self.store.dispatch(Action::SelectCategory { category });
    }

    /// Fetches the restaurant list for the current selection and replaces
    /// the stored list wholesale. Returns `Ok(false)` without touching
    /// state or the network while either half of the selection is missing.
    pub async fn load_restaurants(&self) -> Result<bool, ClientError> {
        let Some((region, category)) = selection(&self.store.state()) else {
            debug!("catalog: selection incomplete; restaurant fetch skipped");
            return Ok(false);
        };
        let restaurants = self.api.list_restaurants(&region, &category).await?;
        let count = restaurants.len();
        self.store.dispatch(Action::SetRestaurants { restaurants });
        info!(
            region = %region.name,
            category = %category.name,
            count,
            "catalog: restaurant list replaced"
        );
        Ok(true)
    }
}

/// The complete selection pair, or `None` while either half is missing.
fn selection(state: &AppState) -> Option<(Region, Category)> {
    let region = state.restaurants.selected_region.clone()?;
    let category = state.restaurants.selected_category.clone()?;
    Some((region, category))
}
