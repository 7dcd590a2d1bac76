use colored::Colorize;
use prettytable::{Table, format, row};

use crate::alerts::{Alert, Severity};
use crate::metrics::Metrics;

/// Render the full dashboard report to stdout: KPI cards, savings
/// distribution, provider leaderboard and the alert panel.
pub fn print_report(metrics: &Metrics, alerts: &[Alert]) {
    print_kpis(metrics);
    print_distribution(metrics);
    print_provider_leaderboard(metrics);
    print_alerts(metrics, alerts);
}

fn print_kpis(metrics: &Metrics) {
    println!("\n--- 📊 Claims Overview ---");
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.add_row(row!["Claims (invoices)", metrics.claim_count]);
    table.add_row(row!["Visits", metrics.visit_count]);
    table.add_row(row!["Duplicate invoices", metrics.duplicate_visits]);
    table.add_row(row![
        "Total requested",
        format!("${:.2}", metrics.totals.total_requested)
    ]);
    table.add_row(row![
        "Total allowed",
        format!("${:.2}", metrics.totals.total_allowed)
    ]);
    table.add_row(row![
        "Total savings",
        format!("${:.2}", metrics.totals.total_savings)
    ]);
    table.add_row(row![
        "Extraction rate",
        format!("{:.1}%", metrics.extraction_rate)
    ]);
    table.add_row(row![
        "Adjudication rate",
        format!("{:.1}%", metrics.adjudication_rate)
    ]);
    table.add_row(row![
        "Rejection rate",
        format!("{:.1}%", metrics.rejection_rate)
    ]);
    table.add_row(row!["Pending adjudication", metrics.pending_adjudication]);
    table.printstd();
}

fn print_distribution(metrics: &Metrics) {
    println!("\n--- 🧾 Savings Distribution ---");
    let d = &metrics.distribution;
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.add_row(row!["Bucket", "Visits"]);
    table.add_row(row!["No savings (0%)", d.zero_savings]);
    table.add_row(row!["Low (<10%)", d.low]);
    table.add_row(row!["Medium (10-20%)", d.medium]);
    table.add_row(row!["High (20-50%)", d.high]);
    table.add_row(row!["Very high (50%+)", d.very_high]);
    table.add_row(row!["Fully rejected (100%)", d.rejected]);
    table.printstd();
}

fn print_provider_leaderboard(metrics: &Metrics) {
    println!("\n--- 🏥 Provider Leaderboard ---");
    if metrics.provider_stats.is_empty() {
        println!("No provider-coded visits in this period");
        return;
    }

    // Display order only; Metrics keeps first-seen order
    let mut ranked: Vec<_> = metrics.provider_stats.iter().collect();
    ranked.sort_by(|a, b| b.total_savings.total_cmp(&a.total_savings));

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.add_row(row![
        "Provider", "Visits", "Invoices", "Requested", "Savings", "Avg sav%", "Extract%",
        "Adjud%", "Reject%"
    ]);
    for stat in ranked {
        table.add_row(row![
            format!("{} ({})", stat.provider_name, stat.provider_code),
            stat.visit_count,
            stat.invoice_count,
            format!("${:.2}", stat.total_requested),
            format!("${:.2}", stat.total_savings),
            format!("{:.1}%", stat.avg_savings_percent),
            format!("{:.1}%", stat.extraction_success_rate),
            format!("{:.1}%", stat.adjudication_rate),
            format!("{:.1}%", stat.rejection_rate)
        ]);
    }
    table.printstd();
}

fn print_alerts(metrics: &Metrics, alerts: &[Alert]) {
    println!("\n--- 🚨 Alerts ---");
    if alerts.is_empty() {
        // Empty means healthy, not "not yet computed"
        let note = if metrics.claim_count == 0 {
            Alert::no_data()
        } else {
            Alert::healthy()
        };
        println!("{}", render_alert(&note));
        return;
    }
    for alert in alerts {
        println!("{}", render_alert(alert));
    }
}

fn render_alert(alert: &Alert) -> String {
    let tag = match alert.severity {
        Severity::High => "HIGH".red().bold(),
        Severity::Medium => "MEDIUM".yellow(),
        Severity::Low => "LOW".green(),
    };
    format!("[{}] {}: {}", tag, alert.id, alert.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::derive_alerts;
    use crate::metrics::calculate_metrics;
    use crate::schema::mock_raw_claim;

    #[test]
    fn test_render_alert_includes_id_and_message() {
        let rendered = render_alert(&Alert::healthy());
        assert!(rendered.contains("all-clear"));
        assert!(rendered.contains("All metrics within normal thresholds"));
    }

    #[test]
    fn test_full_report_does_not_panic_on_empty_and_populated_input() {
        let empty = calculate_metrics(&[]);
        print_report(&empty, &derive_alerts(&empty));

        let populated = calculate_metrics(&[mock_raw_claim()]);
        print_report(&populated, &derive_alerts(&populated));
    }
}
