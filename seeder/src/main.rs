use crate::seed::{Seeder, run_seeder};
use crate::seeds::metric::MetricSeeder;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let db = db::connect().await.expect("Failed to connect to database");

    for (seeder, name) in [(Box::new(MetricSeeder) as Box<dyn Seeder + Send + Sync>, "Metric")] {
        run_seeder(&*seeder, name, &db).await;
    }

    if let Err(e) = db.close().await {
        tracing::warn!("Failed to close database connection: {e}");
    }
}
