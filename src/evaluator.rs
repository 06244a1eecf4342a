//! Credential weakness evaluator - main scoring logic.

use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};

use crate::checks::{Check, DEFAULT_MIN_LENGTH, build_checks};
use crate::template::render;
use crate::types::{ScoreResult, Severity};

/// Evaluates a credential pair against the fixed check set with the
/// default minimum length of 8.
///
/// Absent username or password are treated as empty strings; the
/// evaluation never fails for any input.
///
/// # Example
///
/// ```rust
/// use pwd_toolkit::evaluate;
/// use secrecy::SecretString;
///
/// let password = SecretString::new("Tr0ub4dor&3".to_string().into());
/// let result = evaluate(Some("newuser"), Some(&password));
/// assert_eq!(result.score, result.total_weight);
/// ```
pub fn evaluate(username: Option<&str>, password: Option<&SecretString>) -> ScoreResult {
    evaluate_with_min_length(username, password, DEFAULT_MIN_LENGTH)
}

/// Evaluates a credential pair with an explicit minimum-length threshold.
pub fn evaluate_with_min_length(
    username: Option<&str>,
    password: Option<&SecretString>,
    min_length: usize,
) -> ScoreResult {
    let username = username.unwrap_or("");
    let password = password.map(|p| p.expose_secret()).unwrap_or("");

    let checks = build_checks(min_length);
    let total_weight: u32 = checks.iter().map(|c| c.weight).sum();

    let mut score = 0u32;
    let mut lines: Vec<String> = Vec::with_capacity(checks.len());
    let mut tips: HashMap<Severity, Vec<String>> = HashMap::new();

    for check in &checks {
        let ctx = template_context(check, username, password);
        if (check.predicate)(username, password) {
            score += check.weight;
            lines.push(render(check.pass_msg, &ctx));
        } else {
            lines.push(render(check.fail_msg, &ctx));
            if let Some(tip) = check.tip {
                let rendered = render(tip, &ctx);
                let bucket = tips.entry(check.severity).or_default();
                // First occurrence wins; duplicate tip text is dropped.
                if !bucket.contains(&rendered) {
                    bucket.push(rendered);
                }
            }
        }
    }

    let percent = if total_weight == 0 {
        0
    } else {
        score * 100 / total_weight
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(score, total_weight, percent, "credential evaluated");

    let report = build_report(score, total_weight, percent, &lines, &tips);

    ScoreResult {
        score,
        total_weight,
        percent,
        report,
    }
}

fn template_context<'a>(
    check: &'a Check,
    username: &'a str,
    password: &'a str,
) -> HashMap<&'a str, String> {
    let mut ctx: HashMap<&str, String> = HashMap::new();
    ctx.insert("username", username.to_string());
    ctx.insert("password", password.to_string());
    for (key, value) in &check.context {
        ctx.insert(key, value.clone());
    }
    ctx
}

fn build_report(
    score: u32,
    total_weight: u32,
    percent: u32,
    lines: &[String],
    tips: &HashMap<Severity, Vec<String>>,
) -> String {
    let mut report = format!("Score: {}/{} = {}%\n", score, total_weight, percent);
    for line in lines {
        report.push_str(line);
        report.push('\n');
    }

    if score < total_weight {
        report.push_str("\nRecommended fixes:\n");
        for severity in Severity::ALL {
            let Some(bucket) = tips.get(&severity) else {
                continue;
            };
            if bucket.is_empty() {
                continue;
            }
            report.push_str(severity.label());
            report.push_str(":\n");
            for tip in bucket {
                report.push_str("  - ");
                report.push_str(tip);
                report.push('\n');
            }
        }
    }

    report
}
