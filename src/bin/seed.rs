//! Replace all rows with a fixed sample set of bakeries and baked goods.

use bakery_api::model::{NewBakedGood, NewBakery};
use bakery_api::store::{clear_all, insert_baked_good, insert_bakery};
use bakery_api::{connect, ensure_tables, ServerConfig};
use tracing_subscriber::EnvFilter;

const SAMPLE: &[(&str, &[(&str, f64)])] = &[
    (
        "Sweet Surrender",
        &[("Croissant", 3.50), ("Pain au Chocolat", 4.25), ("Baguette", 2.75)],
    ),
    ("Flour Power", &[("Sourdough Loaf", 8.00), ("Cinnamon Roll", 4.50)]),
    (
        "The Rolling Pin",
        &[("Lemon Tart", 5.75), ("Eclair", 4.00), ("Opera Cake", 36.00)],
    ),
    ("Crumbs & Co", &[]),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bakery_api=info,seed=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let pool = connect(&config).await?;
    ensure_tables(&pool).await?;

    tracing::info!("deleting existing rows");
    clear_all(&pool).await?;

    let mut goods = 0usize;
    for (bakery_name, items) in SAMPLE {
        let bakery_id = insert_bakery(
            &pool,
            &NewBakery {
                name: (*bakery_name).to_string(),
            },
        )
        .await?;
        for (name, price) in items.iter() {
            insert_baked_good(
                &pool,
                &NewBakedGood {
                    name: (*name).to_string(),
                    price: *price,
                    bakery_id,
                },
            )
            .await?;
            goods += 1;
        }
    }

    tracing::info!(bakeries = SAMPLE.len(), baked_goods = goods, "seeded");
    pool.close().await;
    Ok(())
}
