//! # Seed Data Generator
//!
//! Populates the database with bicycle-shop test data for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p velo-db --bin seed
//!
//! # Specify database path
//! cargo run -p velo-db --bin seed -- --db ./data/velo.db
//! ```
//!
//! ## Generated Data
//! - Categories: Helmets, Wheels & Tyres, Saddles, Drivetrain, Accessories
//! - Bike models a shop around here actually services
//! - A spread of products per category with realistic prices and stock

use std::env;

use velo_db::{Database, DbConfig, ProductInput};

const CATEGORIES: &[&str] = &[
    "Helmets",
    "Wheels & Tyres",
    "Saddles",
    "Drivetrain",
    "Accessories",
];

const BIKE_MODELS: &[&str] = &[
    "Hero Sprint Pro",
    "Hercules Roadeo A75",
    "Firefox Bad Attitude",
    "BTWIN Rockrider ST100",
    "Giant Escape 3",
    "Trek Marlin 5",
];

// (sku, name, category, stock, price in cents)
const PRODUCTS: &[(&str, &str, &str, i64, i64)] = &[
    ("HELM-STD", "Standard Helmet", "Helmets", 25, 85_000),
    ("HELM-KIDS", "Kids Helmet", "Helmets", 18, 60_000),
    ("HELM-PRO", "Pro Aero Helmet", "Helmets", 6, 320_000),
    ("WHEEL-26", "26in Alloy Wheel", "Wheels & Tyres", 12, 120_000),
    ("WHEEL-700C", "700c Road Wheel", "Wheels & Tyres", 8, 180_000),
    ("TYRE-26-MTB", "26in MTB Tyre", "Wheels & Tyres", 40, 45_000),
    ("TUBE-26", "26in Inner Tube", "Wheels & Tyres", 80, 12_000),
    ("SEAT-GEL", "Gel Comfort Saddle", "Saddles", 15, 50_000),
    ("SEAT-SPORT", "Sport Saddle", "Saddles", 10, 75_000),
    ("CHAIN-8SP", "8-Speed Chain", "Drivetrain", 30, 55_000),
    ("CASS-8SP", "8-Speed Cassette", "Drivetrain", 14, 95_000),
    ("PEDAL-FLAT", "Flat Pedals (pair)", "Drivetrain", 22, 40_000),
    ("BELL-BRASS", "Brass Bell", "Accessories", 50, 15_000),
    ("LIGHT-SET", "LED Light Set", "Accessories", 35, 65_000),
    ("LOCK-CHAIN", "Chain Lock", "Accessories", 28, 48_000),
    ("BOTTLE-CAGE", "Bottle Cage", "Accessories", 60, 18_000),
];

#[tokio::main]
async fn main() {
    let db_path = parse_db_path().unwrap_or_else(|| "./velo.db".to_string());

    println!("Seeding database at {}", db_path);

    let db = Database::new(DbConfig::new(&db_path))
        .await
        .expect("failed to open database");

    for name in CATEGORIES {
        match db.catalog().add_category(name).await {
            Ok(_) => println!("  category: {}", name),
            Err(velo_db::DbError::UniqueViolation { .. }) => {
                println!("  category: {} (already present)", name)
            }
            Err(e) => panic!("seeding category {}: {}", name, e),
        }
    }

    for name in BIKE_MODELS {
        match db.catalog().add_bike_model(name).await {
            Ok(_) => println!("  bike model: {}", name),
            Err(velo_db::DbError::UniqueViolation { .. }) => {
                println!("  bike model: {} (already present)", name)
            }
            Err(e) => panic!("seeding bike model {}: {}", name, e),
        }
    }

    let mut created = 0;
    for (sku, name, category, stock, price_cents) in PRODUCTS {
        let input = ProductInput {
            sku: sku.to_string(),
            name: name.to_string(),
            category: Some(category.to_string()),
            quantity_on_hand: *stock,
            price_cents: *price_cents,
        };

        match db.products().create(&input).await {
            Ok(_) => created += 1,
            Err(velo_db::DbError::UniqueViolation { .. }) => {}
            Err(e) => panic!("seeding product {}: {}", sku, e),
        }
    }

    println!("Done: {} products created", created);

    db.close().await;
}

/// Parses `--db <path>` from the command line.
fn parse_db_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|a| a == "--db")
        .and_then(|i| args.get(i + 1).cloned())
}
