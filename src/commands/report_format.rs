use crate::services::report_types::{
    BreakevenReport, MarginReport, PlateauReport, ProjectionReport,
};

pub fn format_margin_report(report: &MarginReport) -> String {
    let mut lines = Vec::new();
    lines.push("Margin Report".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Queries: {}", report.query_count));
    lines.push(format!("Gross revenue: {:.2}", report.gross_revenue));
    lines.push(format!("Variable costs: {:.2}", report.variable_costs));
    lines.push(format!("Unit margin: {:.2}", report.unit_margin));
    lines.join("\n")
}

pub fn format_breakeven_report(report: &BreakevenReport) -> String {
    let mut lines = Vec::new();
    lines.push("Breakeven Report".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    match &report.breakeven {
        Some(limit) => {
            lines.push(format!("Max queries: {}", limit.max_queries));
            lines.push(format!("Margin at limit: {:.2}", limit.margin_at_limit));
            lines.push(format!(
                "The margin turns negative at {} queries",
                limit.max_queries + 1
            ));
        }
        None => {
            lines.push("No breakeven: fixed variable costs exhaust the gross revenue".to_string());
        }
    }
    lines.join("\n")
}

pub fn format_projection_report(report: &ProjectionReport) -> String {
    let mut lines = Vec::new();
    lines.push("Projection Report".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Approval rate: {:.4}", report.approval_rate));
    lines.push(format!(
        "Profit per approval: {:.2}",
        report.profit_per_approval
    ));
    lines.push(format!("Samples: {}", report.points.len()));
    if let Some(last) = report.points.last() {
        lines.push(format!(
            "At {:.0} queries: gross profit {:.2}, total cost {:.2}",
            last.query_volume, last.gross_profit, last.total_cost
        ));
        if last.total_cost > last.gross_profit {
            lines.push(format!(
                "Query costs exceed gross profit by {:.2} at the top of the range",
                last.total_cost - last.gross_profit
            ));
        }
    }
    lines.join("\n")
}

pub fn format_plateau_report(report: &PlateauReport) -> String {
    let mut lines = Vec::new();
    lines.push("Plateau Report".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Unit MCU: {:.2}", report.unit_mcu));
    lines.push(format!("Threshold: {}", report.threshold));
    lines.push(format!("Samples: {}", report.points.len()));
    match &report.plateau {
        Some(plateau) => {
            lines.push(format!(
                "{} plateau from {:.0} queries (diff {:.2})",
                capitalize(&plateau.classification),
                plateau.volume,
                plateau.diff_at_plateau
            ));
        }
        None => {
            lines.push("No plateau crossed the threshold".to_string());
        }
    }
    lines.join("\n")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
