//! Console dashboard rendering.
//!
//! Read-only: rendering never mutates the manager.

use prd_core::{DashboardConfig, PrdCategory, PrdManager, PrdRepository, PrdStatus};

const TITLE: &str = "PRD MANAGEMENT SYSTEM - DASHBOARD";

/// Renders totals, status/category distribution and the most recent PRDs.
pub fn render_dashboard<R: PrdRepository>(
    manager: &PrdManager<R>,
    config: &DashboardConfig,
) -> String {
    let stats = manager.statistics();
    let rule = banner(config);
    let mut out = String::new();

    out.push_str(&format!("\n{rule}\n{TITLE}\n{rule}\n"));
    out.push_str(&format!("Total PRDs: {}\n", stats.total_prds));
    out.push_str(&format!(
        "Average Completion: {:.1}%\n",
        stats.average_completion
    ));

    out.push_str("\nStatus Distribution:\n");
    for status in PrdStatus::ALL {
        if let Some(count) = stats.by_status.get(status.label()) {
            out.push_str(&format!("  {}: {}\n", status.label(), count));
        }
    }

    out.push_str("\nCategory Distribution:\n");
    for category in PrdCategory::ALL {
        if let Some(count) = stats.by_category.get(category.label()) {
            out.push_str(&format!("  {}: {}\n", category.label(), count));
        }
    }

    out.push_str("\nRecent PRDs:\n");
    for prd in manager.recent(config.recent_limit) {
        out.push_str(&format!("  {prd}\n"));
    }
    out
}

/// Renders the search/filter/statistics walkthrough printed after the dashboard.
pub fn render_demo<R: PrdRepository>(manager: &PrdManager<R>, config: &DashboardConfig) -> String {
    let rule = banner(config);
    let mut out = String::new();
    out.push_str(&format!("\n{rule}\nDEMO OPERATIONS\n{rule}\n"));

    out.push_str("\nSearching for 'login' related PRDs:\n");
    for prd in manager.search("login") {
        out.push_str(&format!("  Found: {prd}\n"));
    }

    let drafts = manager.get_by_status(PrdStatus::Draft);
    out.push_str(&format!("\nDraft PRDs ({}):\n", drafts.len()));
    for prd in &drafts {
        out.push_str(&format!("  {prd}\n"));
    }

    let completion = manager.completion_stats();
    out.push_str("\nCompletion Statistics:\n");
    out.push_str(&format!("  Minimum: {}%\n", completion.min));
    out.push_str(&format!("  Maximum: {}%\n", completion.max));
    out.push_str(&format!("  Average: {:.1}%\n", completion.average));
    out
}

fn banner(config: &DashboardConfig) -> String {
    "=".repeat(config.banner_width)
}

#[cfg(test)]
mod tests {
    use super::{render_dashboard, render_demo};
    use prd_core::{load_demo_data, DashboardConfig, PrdManager};

    #[test]
    fn dashboard_lists_distribution_in_declaration_order() {
        let mut manager = PrdManager::in_memory();
        load_demo_data(&mut manager).unwrap();

        let rendered = render_dashboard(&manager, &DashboardConfig::default());
        assert!(rendered.contains(&"=".repeat(60)));
        assert!(rendered.contains("Total PRDs: 5"));
        assert!(rendered.contains("Average Completion: 15.0%"));

        let draft = rendered.find("  Draft: 2").unwrap();
        let review = rendered.find("  In Review: 1").unwrap();
        let implemented = rendered.find("  Implemented: 1").unwrap();
        assert!(draft < review && review < implemented);
        assert!(rendered.contains("  Feature: 2"));
        assert_eq!(rendered.matches("  PRD{id='PRD-").count(), 5);
    }

    #[test]
    fn recent_section_respects_configured_limit() {
        let mut manager = PrdManager::in_memory();
        load_demo_data(&mut manager).unwrap();
        let config = DashboardConfig {
            banner_width: 10,
            recent_limit: 2,
        };

        let rendered = render_dashboard(&manager, &config);
        assert_eq!(rendered.matches("  PRD{id='PRD-").count(), 2);
        assert!(!rendered.contains(&"=".repeat(11)));
    }

    #[test]
    fn demo_finds_login_prds_and_drafts() {
        let mut manager = PrdManager::in_memory();
        load_demo_data(&mut manager).unwrap();

        let rendered = render_demo(&manager, &DashboardConfig::default());
        assert_eq!(rendered.matches("  Found: ").count(), 2);
        assert!(rendered.contains("Draft PRDs (2):"));
        assert!(rendered.contains("  Maximum: 75%"));
        assert!(rendered.contains("  Average: 15.0%"));
    }
}
