use chrono::{DateTime, SecondsFormat, Utc};
use db::models::metric::Model as Metric;
use serde::Serialize;

/// Renders a metric value for display according to its unit hint.
///
/// Units are matched case-insensitively:
/// - `currency`, `usd`, `$` give `$1234.50`
/// - `percentage`, `%` give `3.20%`
/// - anything else, or no unit, gives `1847.00`
pub fn format_value(value: f64, unit: Option<&str>) -> String {
    let unit = unit.map(str::to_lowercase);
    let fixed = two_decimals(value);

    match unit.as_deref() {
        Some("currency" | "usd" | "$") => format!("${fixed}"),
        Some("percentage" | "%") => format!("{fixed}%"),
        _ => fixed,
    }
}

/// Two-decimal rendering where a value exactly halfway between two cents
/// rounds away from zero (`0.125` gives `0.13`) and `-0.0` prints as `0.00`.
fn two_decimals(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let value = if value == 0.0 { 0.0 } else { value };

    // Exact cent midpoints are odd multiples of 1/8; scaling by 8 is exact.
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        let cents = (value.abs() * 100.0 + 0.5) as u64;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{}.{:02}", cents / 100, cents % 100);
    }

    format!("{value:.2}")
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2025-06-01T12:00:00.000Z`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Read-side shape of a metric, as returned to API clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricView {
    pub id: i64,
    pub company_name: String,
    pub name: String,
    pub category: String,
    pub value: f64,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub status: String,
    pub recorded_at: String,
    pub created_at: String,
    pub updated_at: String,
    pub formatted_value: String,
}

impl From<Metric> for MetricView {
    fn from(m: Metric) -> Self {
        let formatted_value = format_value(m.value, m.unit.as_deref());

        Self {
            id: m.id,
            recorded_at: format_timestamp(&m.recorded_at),
            created_at: format_timestamp(&m.created_at),
            updated_at: format_timestamp(&m.updated_at),
            company_name: m.company_name,
            name: m.name,
            category: m.category,
            value: m.value,
            unit: m.unit,
            description: m.description,
            status: m.status,
            formatted_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn currency_units_get_dollar_prefix() {
        assert_eq!(format_value(2_850_000.0, Some("USD")), "$2850000.00");
        assert_eq!(format_value(485.0, Some("currency")), "$485.00");
        assert_eq!(format_value(12.5, Some("$")), "$12.50");
    }

    #[test]
    fn percentage_units_get_percent_suffix() {
        assert_eq!(format_value(3.2, Some("percentage")), "3.20%");
        assert_eq!(format_value(112.8, Some("Percentage")), "112.80%");
        assert_eq!(format_value(78.5, Some("%")), "78.50%");
    }

    #[test]
    fn other_or_missing_units_are_bare_numbers() {
        assert_eq!(format_value(1847.0, Some("count")), "1847.00");
        assert_eq!(format_value(12450.0, None), "12450.00");
        assert_eq!(format_value(0.0, Some("")), "0.00");
    }

    #[test]
    fn exact_midpoints_round_away_from_zero() {
        assert_eq!(format_value(0.125, Some("%")), "0.13%");
        assert_eq!(format_value(3.125, Some("percentage")), "3.13%");
        assert_eq!(format_value(2.375, Some("USD")), "$2.38");
        assert_eq!(format_value(-0.125, None), "-0.13");
        // 1.005 is stored just below the midpoint.
        assert_eq!(format_value(1.005, None), "1.00");
        assert_eq!(format_value(0.25, None), "0.25");
    }

    #[test]
    fn negative_zero_prints_unsigned() {
        assert_eq!(format_value(-0.0, None), "0.00");
        assert_eq!(format_value(-0.0, Some("USD")), "$0.00");
        assert_eq!(format_value(-1.5, None), "-1.50");
    }

    #[test]
    fn timestamps_render_as_utc_millis() {
        let ts = Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2025-06-01T12:30:00.000Z");
    }

    #[test]
    fn view_serializes_camel_case_with_formatted_value() {
        let ts = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let view = MetricView::from(Metric {
            id: 9,
            company_name: "Lumopath".into(),
            name: "Gross Margin".into(),
            category: "financial".into(),
            value: 78.5,
            unit: Some("percentage".into()),
            description: None,
            status: "The status of the metric is Active for June 2025".into(),
            recorded_at: ts,
            created_at: ts,
            updated_at: ts,
        });

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["companyName"], "Lumopath");
        assert_eq!(json["formattedValue"], "78.50%");
        assert_eq!(json["recordedAt"], "2025-06-01T00:00:00.000Z");
        assert!(json["description"].is_null());
    }
}
