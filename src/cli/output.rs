//! CLI output formatting

use crate::core::{config::ScenarioConfig, Pipeline, Status};
use crate::registry::Registry;
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static SPINNER: Emoji<'_, '_> = Emoji("⏳ ", "~ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");

/// Format a status for display
pub fn format_status(status: Status) -> String {
    match status {
        Status::Success => style("SUCCESS").green().to_string(),
        Status::Failed => style("FAILED").red().to_string(),
        Status::InProgress => style("IN PROGRESS").yellow().to_string(),
    }
}

/// One-line summary of a pipeline
pub fn format_pipeline_summary(pipeline: &Pipeline) -> String {
    let status = pipeline.status();
    let icon = match status {
        Status::Success => CHECK,
        Status::Failed => CROSS,
        Status::InProgress => SPINNER,
    };

    format!(
        "{} {} - {} - {} ({} stages)",
        icon,
        style(&pipeline.id.to_string()[..8]).dim(),
        style(&pipeline.name).bold(),
        format_status(status),
        pipeline.stages.len()
    )
}

/// Plain-text reports for every pipeline, separated by blank lines
pub fn format_reports(registry: &Registry) -> String {
    registry
        .iter()
        .map(Pipeline::report)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty JSON array of pipeline snapshots
pub fn format_json(registry: &Registry) -> serde_json::Result<String> {
    let snapshots: Vec<_> = registry.iter().map(Pipeline::snapshot).collect();
    serde_json::to_string_pretty(&snapshots)
}

/// Short description of a validated scenario
pub fn format_scenario_summary(config: &ScenarioConfig) -> String {
    let mut lines = vec![
        format!("  Pipelines: {}", style(config.pipelines.len()).cyan()),
        format!("  Updates: {}", style(config.update_count()).cyan()),
        format!("  Strict: {}", config.strict),
    ];
    for pipeline in &config.pipelines {
        let kinds: Vec<_> = pipeline.stages.iter().map(|k| k.as_str()).collect();
        lines.push(format!(
            "    {} [{}]",
            style(&pipeline.name).bold(),
            kinds.join(", ")
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StageKind;

    #[test]
    fn test_format_reports_separates_pipelines() {
        let mut registry = Registry::new();
        registry.create_pipeline("a", &[StageKind::Build]);
        registry.create_pipeline("b", &[]);

        assert_eq!(
            format_reports(&registry),
            "Pipeline a Status: in-progress\n  build: in-progress\n\nPipeline b Status: in-progress\n"
        );
    }

    #[test]
    fn test_format_json_array() {
        let mut registry = Registry::new();
        let id = registry.create_pipeline("a", &[StageKind::Build]).id;
        registry.update_stage_status(id, StageKind::Build, Status::Success);

        let json: serde_json::Value = serde_json::from_str(&format_json(&registry).unwrap()).unwrap();
        assert_eq!(json[0]["status"], "success");
        assert_eq!(json[0]["id"], id.to_string());
    }

    #[test]
    fn test_summary_mentions_name() {
        let mut registry = Registry::new();
        let pipeline = registry.create_pipeline("Nightly", &[StageKind::Test]);
        assert!(format_pipeline_summary(pipeline).contains("Nightly"));
    }
}
