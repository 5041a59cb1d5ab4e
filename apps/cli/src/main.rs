mod config;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    AuthController, DurableSessionStore, HttpApi, LoginField, RestaurantController,
    RestaurantsController, ReviewField, Store,
};
use shared::domain::{CategoryId, RegionId, RestaurantId};

#[derive(Parser, Debug)]
#[command(name = "goeat")]
struct Args {
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long)]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every region and category.
    Browse,
    /// List restaurants for a region and category.
    Restaurants {
        #[arg(long)]
        region_id: i64,
        #[arg(long)]
        category_id: i64,
    },
    /// Show one restaurant with its menu and reviews.
    Show {
        restaurant_id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Log in and persist the session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Post a review for a restaurant.
    Review {
        restaurant_id: i64,
        #[arg(long)]
        score: u32,
        #[arg(long)]
        description: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    if let Some(database_url) = args.database_url {
        settings.database_url = database_url;
    }
    let server_url = config::prepare_server_url(&settings.server_url)?;
    let database_url = config::normalize_database_url(&settings.database_url);

    let store = Store::new();
    let api = Arc::new(HttpApi::new(server_url));
    let session = DurableSessionStore::initialize(&database_url).await?;
    let auth = AuthController::new(store.clone(), api.clone(), session);
    let restaurants = RestaurantsController::new(store.clone(), api.clone());
    let restaurant = RestaurantController::new(store.clone(), api);

    auth.restore_session().await?;

    match args.command {
        Command::Browse => run_browse(&store, &restaurants).await,
        Command::Restaurants {
            region_id,
            category_id,
        } => run_restaurants(&store, &restaurants, region_id, category_id).await,
        Command::Show {
            restaurant_id,
            json,
        } => run_show(&store, &restaurant, restaurant_id, json).await,
        Command::Login { email, password } => run_login(&store, &auth, email, password).await,
        Command::Review {
            restaurant_id,
            score,
            description,
        } => run_review(&store, &restaurant, restaurant_id, score, description).await,
    }
}

async fn run_browse(store: &Store, restaurants: &RestaurantsController) -> Result<()> {
    let report = restaurants.load_initial_data().await;

    let state = store.state();
    println!("Regions:");
    for region in &state.restaurants.regions {
        println!("  {}  {}", region.id.0, region.name);
    }
    println!("Categories:");
    for category in &state.restaurants.categories {
        println!("  {}  {}", category.id.0, category.name);
    }

    report.regions?;
    report.categories?;
    Ok(())
}

async fn run_restaurants(
    store: &Store,
    restaurants: &RestaurantsController,
    region_id: i64,
    category_id: i64,
) -> Result<()> {
    let report = restaurants.load_initial_data().await;
    report.regions?;
    report.categories?;

    let state = store.state();
    let region = state
        .restaurants
        .regions
        .iter()
        .find(|region| region.id == RegionId(region_id))
        .cloned()
        .with_context(|| format!("unknown region id {region_id}"))?;
    let category = state
        .restaurants
        .categories
        .iter()
        .find(|category| category.id == CategoryId(category_id))
        .cloned()
        .with_context(|| format!("unknown category id {category_id}"))?;

    restaurants.select_region(region);
    restaurants.select_category(category);
    if !restaurants.load_restaurants().await? {
        println!("Select both a region and a category first.");
        return Ok(());
    }

    let state = store.state();
    if state.restaurants.restaurants.is_empty() {
        println!("No restaurants for this selection.");
        return Ok(());
    }
    for summary in &state.restaurants.restaurants {
        let address = summary.address.as_deref().unwrap_or("-");
        println!("  {}  {} ({address})", summary.id.0, summary.name);
    }
    Ok(())
}

async fn run_show(
    store: &Store,
    restaurant: &RestaurantController,
    restaurant_id: i64,
    json: bool,
) -> Result<()> {
    restaurant
        .load_restaurant(RestaurantId(restaurant_id))
        .await?;

    let state = store.state();
    let Some(detail) = state.restaurant.restaurant.loaded() else {
        bail!("restaurant {restaurant_id} did not load");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(detail)?);
        return Ok(());
    }

    println!("{} (#{})", detail.name, detail.id.0);
    if let Some(address) = &detail.address {
        println!("  {address}");
    }
    if !detail.menu_items.is_empty() {
        println!("Menu:");
        for item in &detail.menu_items {
            println!("  {}", item.name);
        }
    }
    match &detail.reviews {
        Some(reviews) if !reviews.is_empty() => {
            println!("Reviews:");
            for review in reviews {
                println!(
                    "  {} ({}/5): {}",
                    review.name, review.score, review.description
                );
            }
        }
        _ => println!("No reviews yet."),
    }
    Ok(())
}

async fn run_login(
    store: &Store,
    auth: &AuthController,
    email: String,
    password: String,
) -> Result<()> {
    auth.set_login_field(LoginField::Email(email));
    auth.set_login_field(LoginField::Password(password));
    auth.login().await?;

    if store.state().auth.access_token.is_some() {
        println!("Logged in; session saved for later commands.");
    }
    Ok(())
}

async fn run_review(
    store: &Store,
    restaurant: &RestaurantController,
    restaurant_id: i64,
    score: u32,
    description: String,
) -> Result<()> {
    let restaurant_id = RestaurantId(restaurant_id);
    restaurant.set_review_field(ReviewField::Score(score));
    restaurant.set_review_field(ReviewField::Description(description));
    restaurant.send_review(restaurant_id).await?;
    println!("Review submitted.");

    // Submission does not refresh anything; fetch the fresh list explicitly.
    restaurant.load_review(restaurant_id).await?;
    match store.state().restaurant.reviews {
        Some(reviews) => {
            for review in &reviews {
                println!(
                    "  {} ({}/5): {}",
                    review.name, review.score, review.description
                );
            }
        }
        None => println!("Reviews are not available yet."),
    }
    Ok(())
}
