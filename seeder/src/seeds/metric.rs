use crate::seed::Seeder;
use chrono::{DateTime, Duration, Utc};
use db::models::metric::{Model as Metric, NewMetric};
use sea_orm::{DatabaseConnection, DbErr};
use std::future::Future;
use std::pin::Pin;

const COMPANY: &str = "Lumopath";

/// `(name, value, unit, description, category, status)`
type Sample = (&'static str, f64, &'static str, &'static str, &'static str, &'static str);

const CURRENT: [Sample; 10] = [
    (
        "Annual Recurring Revenue (ARR)",
        2_850_000.0,
        "USD",
        "Total annual recurring revenue from all active subscriptions",
        "revenue",
        "The status of the metric is Enabled for June 2025",
    ),
    (
        "Monthly Recurring Revenue (MRR)",
        237_500.0,
        "USD",
        "Monthly recurring revenue normalized from all subscriptions",
        "revenue",
        "The status of the metric is Active for June 2025",
    ),
    (
        "Active Accounts",
        1_847.0,
        "count",
        "Number of accounts with active subscriptions",
        "customers",
        "The status of the metric is Active for June 2025",
    ),
    (
        "Customer Acquisition Cost (CAC)",
        485.0,
        "USD",
        "Average cost to acquire a new customer",
        "financial",
        "The status of the metric is Active for June 2025",
    ),
    (
        "Monthly Churn Rate",
        3.2,
        "percentage",
        "Percentage of customers who canceled their subscription this month",
        "customers",
        "The status of the metric is Active for June 2025",
    ),
    (
        "Customer Lifetime Value (LTV)",
        4_250.0,
        "USD",
        "Average revenue expected from a customer over their lifetime",
        "financial",
        "The status of the metric is Active for June 2025",
    ),
    (
        "Net Revenue Retention (NRR)",
        112.8,
        "percentage",
        "Revenue retention rate including expansion revenue",
        "growth",
        "The status of the metric is Active for June 2025",
    ),
    (
        "Daily Active Users",
        12_450.0,
        "count",
        "Number of unique users active in the last 24 hours",
        "engagement",
        "The status of the metric is Enabled for June 2025",
    ),
    (
        "Gross Margin",
        78.5,
        "percentage",
        "Gross profit margin after direct costs",
        "financial",
        "The status of the metric is Active for June 2025",
    ),
    (
        "Monthly Growth Rate",
        8.3,
        "percentage",
        "Month-over-month growth rate in revenue",
        "growth",
        "The status of the metric is active for June 2025",
    ),
];

/// Older and switched-off snapshots, as `(sample, hours before now)`.
///
/// The disabled MRR row is the newest MRR row on purpose: readers must skip
/// it and keep showing the current enabled value.
const HISTORY: [(Sample, i64); 3] = [
    (
        (
            "Annual Recurring Revenue (ARR)",
            2_610_000.0,
            "USD",
            "Total annual recurring revenue from all active subscriptions",
            "revenue",
            "The status of the metric is Enabled for May 2025",
        ),
        30 * 24,
    ),
    (
        (
            "Annual Recurring Revenue (ARR)",
            2_400_000.0,
            "USD",
            "Total annual recurring revenue from all active subscriptions",
            "revenue",
            "The status of the metric is Enabled for April 2025",
        ),
        61 * 24,
    ),
    (
        (
            "Monthly Recurring Revenue (MRR)",
            0.0,
            "USD",
            "Monthly recurring revenue normalized from all subscriptions",
            "revenue",
            "The status of the metric is Disabled pending restatement",
        ),
        0,
    ),
];

fn to_new_metric(sample: &Sample, recorded_at: DateTime<Utc>) -> NewMetric {
    let (name, value, unit, description, category, status) = *sample;
    NewMetric {
        company_name: COMPANY.into(),
        name: name.into(),
        category: category.into(),
        value,
        unit: Some(unit.into()),
        description: Some(description.into()),
        status: status.into(),
        recorded_at,
    }
}

/// Sample Lumopath metrics. Rows have fixed ids, so reseeding overwrites
/// instead of piling up duplicates.
pub struct MetricSeeder;

impl Seeder for MetricSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<usize, DbErr>> + Send + 'a>> {
        Box::pin(async move {
            let now = Utc::now();
            let current_at = now - Duration::hours(1);
            let mut id = 0_i64;

            for sample in CURRENT.iter() {
                id += 1;
                Metric::upsert(db, id, to_new_metric(sample, current_at)).await?;
            }

            for (sample, hours_ago) in HISTORY.iter() {
                id += 1;
                let recorded_at = now - Duration::hours(*hours_ago);
                Metric::upsert(db, id, to_new_metric(sample, recorded_at)).await?;
            }

            Ok(id as usize)
        })
    }
}
