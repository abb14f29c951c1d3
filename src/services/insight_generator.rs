use crate::models::{CycleAnalytics, CycleInsights, CycleStatus};

/// Average lengths outside this range trigger a health alert, in days
const HEALTHY_LENGTH_MIN: f64 = 21.0;
const HEALTHY_LENGTH_MAX: f64 = 35.0;

/// Regularity thresholds on the analytics engine's 0-100 scale
const IRREGULARITY_THRESHOLD: f64 = 70.0;
const EXCELLENT_THRESHOLD: f64 = 80.0;
const GOOD_THRESHOLD: f64 = 60.0;

/// Turn analytics output into qualitative insights, alerts and an overall
/// status label
pub fn cycle_insights(analytics: &CycleAnalytics) -> CycleInsights {
    let mut insights = Vec::new();
    let mut recommendations = Vec::new();
    let mut health_alerts = Vec::new();

    if analytics.regularity_score < IRREGULARITY_THRESHOLD {
        insights.push("Your cycles show noticeable irregularity".to_string());
        recommendations
            .push("Keep tracking consistently for a few more cycles to firm up the pattern".to_string());
    }

    let average = analytics.average_period_length;
    let average_in_range = (HEALTHY_LENGTH_MIN..=HEALTHY_LENGTH_MAX).contains(&average);
    // An average of zero just means no completed cycles yet, not a finding
    if average > 0.0 && !average_in_range {
        health_alerts.push(format!(
            "Average cycle length of {:.1} days falls outside the typical {}-{} day range",
            average, HEALTHY_LENGTH_MIN as i64, HEALTHY_LENGTH_MAX as i64
        ));
        recommendations.push(
            "Consider discussing your cycle pattern with a healthcare provider".to_string(),
        );
    }

    let overall_status = if analytics.regularity_score >= EXCELLENT_THRESHOLD && average_in_range {
        CycleStatus::Excellent
    } else if analytics.regularity_score >= GOOD_THRESHOLD {
        CycleStatus::Good
    } else {
        CycleStatus::NeedsAttention
    };

    CycleInsights {
        insights,
        recommendations,
        health_alerts,
        overall_status,
    }
}
