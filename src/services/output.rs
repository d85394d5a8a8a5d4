use crate::domain::models::{
    DerivedMetrics, ErrorBody, JsonErr, JsonOut, MetricsDisplay, PaceStatus,
};
use colored::Colorize;
use serde::Serialize;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    text: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", text(&data));
    }
    Ok(())
}

pub fn print_err(json: bool, code: &str, message: &str) {
    if json {
        let body = JsonErr {
            ok: false,
            error: ErrorBody {
                code: code.to_string(),
                message: message.to_string(),
            },
        };
        match serde_json::to_string_pretty(&body) {
            Ok(s) => println!("{}", s),
            Err(_) => eprintln!("error: {}", message),
        }
    } else {
        eprintln!("{} {}", "error:".red().bold(), message);
    }
}

/// Inserts `,` every three digits: `-1234567` becomes `-1,234,567`.
pub fn group_thousands(n: i128) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Truncates toward zero before grouping.
pub fn format_miles(value: f64) -> String {
    group_thousands(value.trunc() as i128)
}

/// The sign follows the raw value, so it always agrees with [`pace_status`]:
/// `-0.4` renders as `-0`. Only an exact zero is unsigned.
pub fn format_delta(value: f64) -> String {
    let whole = group_thousands(value.trunc().abs() as i128);
    if value > 0.0 {
        format!("+{}", whole)
    } else if value < 0.0 {
        format!("-{}", whole)
    } else {
        whole
    }
}

pub fn pace_status(delta: f64) -> PaceStatus {
    if delta > 0.0 {
        PaceStatus::Over
    } else {
        PaceStatus::Under
    }
}

fn verdict(status: PaceStatus) -> &'static str {
    match status {
        PaceStatus::Over => "ahead of allowance",
        PaceStatus::Under => "under allowance",
    }
}

pub fn display_metrics(m: &DerivedMetrics) -> MetricsDisplay {
    let status = pace_status(m.miles_delta);
    MetricsDisplay {
        projected_miles: format_miles(m.projected_miles),
        actual_miles: format_miles(m.actual_miles),
        avg_daily_miles: format_miles(m.avg_daily_miles),
        miles_delta: format_delta(m.miles_delta),
        status,
        verdict: verdict(status).to_string(),
    }
}

/// Higher is worse here, so an overage is red and a margin is green.
pub fn render_metrics(d: &MetricsDisplay) -> String {
    let cue = match d.status {
        PaceStatus::Over => format!("{} ({})", d.miles_delta, d.verdict).red(),
        PaceStatus::Under => format!("{} ({})", d.miles_delta, d.verdict).green(),
    };
    format!(
        "projected miles:   {}\nactual miles:      {}\navg. daily miles:  {}\nmiles over/under:  {}",
        d.projected_miles, d.actual_miles, d.avg_daily_miles, cue
    )
}
