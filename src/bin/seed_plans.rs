//! Seeds the membership plan catalog.
//!
//! Idempotent: upserts keyed by plan type, so re-running updates the three
//! default entries in place. Run after migrations, before first launch:
//!
//! ```text
//! cargo run --bin seed-plans
//! ```

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use skillaid_backend::adapters::postgres::PostgresPlanRepository;
use skillaid_backend::config::AppConfig;
use skillaid_backend::domain::membership::default_plans;
use skillaid_backend::ports::{PlanRepository, PlanUpsert};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.database.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database.url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let plans: Arc<dyn PlanRepository> = Arc::new(PostgresPlanRepository::new(pool));

    for seed in default_plans() {
        let plan = plans
            .upsert(PlanUpsert {
                plan_type: seed.plan_type,
                name: seed.name.to_string(),
                price: seed.price,
                duration_months: seed.duration_months,
                features: seed.features.iter().map(|f| f.to_string()).collect(),
                is_popular: seed.is_popular,
                is_active: true,
            })
            .await?;
        tracing::info!(plan = %plan.name, "Plan initialized");
    }

    tracing::info!("All membership plans initialized");
    Ok(())
}
