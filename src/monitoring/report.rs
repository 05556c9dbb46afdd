//! Human-readable health reports

use super::health::{HealthStatus, SystemHealth};

/// Report returned before the first cycle has completed
pub const NO_DATA_REPORT: &str = "No health check data available";

/// Render a snapshot as text, or [`NO_DATA_REPORT`] when there is none
pub fn generate_report(health: Option<&SystemHealth>) -> String {
    let Some(health) = health else {
        return NO_DATA_REPORT.to_string();
    };

    let mut report = format!(
        "\nPlatform Health Report\nGenerated: {}\nOverall Status: {}\n\nComponent Status:\n",
        health.timestamp.to_rfc3339(),
        health.overall_status.as_str().to_uppercase()
    );

    for component in &health.components {
        report.push_str(&format!(
            "  {}: {}\n",
            display_name(&component.name),
            component.status.as_str().to_uppercase()
        ));
        if component.status == HealthStatus::Unhealthy {
            if let Some(error) = &component.error {
                report.push_str(&format!("    Error: {}\n", error));
            }
        }
        if let Some(response_time) = component.response_time {
            report.push_str(&format!(
                "    Response Time: {:.3}s\n",
                response_time.as_secs_f64()
            ));
        }
    }

    if let Some(unhealthy) = &health.unhealthy_components {
        report.push_str(&format!(
            "\nUnhealthy Components: {}\n",
            unhealthy.join(", ")
        ));
    }

    report
}

/// `api_gateway` -> `Api Gateway`
fn display_name(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
