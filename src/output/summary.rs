//! One-line-per-repository rendering for `repos --summary`

use super::json::render_json;
use colored::*;
use serde::Deserialize;
use serde_json::Value;

/// Fields of a repository object shown in the summary
#[derive(Debug, Deserialize)]
struct RepoSummary {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    updated_at: Option<String>,
}

/// Render a repository listing as one line per repository.
///
/// Anything that is not an array of objects is pretty-printed as JSON instead.
pub fn render_repo_summary(value: &Value, color: bool) -> String {
    let Some(items) = value.as_array() else {
        return render_json(value, color);
    };
    if items.is_empty() {
        return "No repositories found".to_string();
    }

    let mut lines = Vec::with_capacity(items.len() * 2 + 1);
    for item in items {
        let Ok(repo) = serde_json::from_value::<RepoSummary>(item.clone()) else {
            lines.push(render_json(item, color));
            continue;
        };
        let name = repo
            .full_name
            .or(repo.name)
            .unwrap_or_else(|| "<unnamed>".to_string());
        let stars = format!("★ {}", repo.stargazers_count);
        let language = repo.language.unwrap_or_else(|| "-".to_string());
        let updated = repo.updated_at.unwrap_or_else(|| "-".to_string());

        if color {
            lines.push(format!(
                "{} {}  {}  {}  {}",
                "•".blue(),
                name.bold(),
                stars.yellow(),
                language.cyan(),
                updated.dimmed()
            ));
        } else {
            lines.push(format!("• {}  {}  {}  {}", name, stars, language, updated));
        }

        if let Some(description) = repo.description.filter(|d| !d.is_empty()) {
            lines.push(format!("  {}", description));
        }
    }

    let total = format!("Total: {} repositories", items.len());
    lines.push(if color {
        total.green().to_string()
    } else {
        total
    });
    lines.join("\n")
}
