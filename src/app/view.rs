//! Terminal rendering of the log book
//!
//! Stateless: every function turns the controller state (or a piece of it)
//! into a block of text. Empty fields are replaced by the placeholder here
//! and nowhere else.

use chrono::{DateTime, Datelike, Local};
use colored::*;
use tracing::debug;

use crate::app::models::{DiveEntry, GeminiInsight};
use crate::app::services::selection::SessionSelection;
use crate::app::state::{LoadState, LogbookController};
use crate::constants::{
    EMPTY_FIELD_PLACEHOLDER, FOOTER_OWNER, LOGBOOK_VERSION_LABEL, PHOTOS_URL, REGION_LABEL,
    REVIEW_URL, SOCIAL_LINKS,
};

const RULE_WIDTH: usize = 60;

/// Value as displayed, with the placeholder standing in for empty text
pub fn display_value(value: &str) -> &str {
    if value.trim().is_empty() {
        EMPTY_FIELD_PLACEHOLDER
    } else {
        value
    }
}

/// Full page for the current controller state
///
/// `insights` lines up with the dives of the current selection; missing or
/// `None` entries render nothing.
pub fn render_page(controller: &LogbookController, insights: &[Option<GeminiInsight>]) -> String {
    let mut sections = vec![render_header(controller.last_synced())];

    match controller.selection() {
        None => sections.push(render_loading()),
        Some(selection) => {
            sections.push(render_selector(&selection));
            if selection.is_empty() {
                sections.push(render_no_data());
            } else {
                for (index, dive) in selection.dives.iter().enumerate() {
                    let insight = insights.get(index).and_then(Option::as_ref);
                    sections.push(render_dive_card(dive, insight));
                }
            }
        }
    }

    if let LoadState::Failed { reason } = controller.state() {
        debug!("Rendering empty log book after failure: {}", reason);
    }

    sections.push(render_footer(Local::now().year()));
    sections.join("\n\n")
}

/// Title block with the photo and review links
pub fn render_header(last_synced: Option<DateTime<Local>>) -> String {
    let mut lines = vec![
        "DIVE LOG BOOK".bright_blue().bold().to_string(),
        format!("{} {}", "Get Your Dive Photos:".bright_cyan(), PHOTOS_URL),
        format!("{} {}", "Write a Review:".bright_cyan(), REVIEW_URL),
    ];
    if let Some(synced) = last_synced {
        lines.push(
            format!("Last synced {}", synced.format("%Y-%m-%d %H:%M"))
                .bright_black()
                .to_string(),
        );
    }
    lines.join("\n")
}

/// Shown while a fetch is in flight
pub fn render_loading() -> String {
    "Syncing Log Book...".bright_cyan().bold().to_string()
}

/// Session list with the chosen date marked
pub fn render_selector(selection: &SessionSelection<'_>) -> String {
    let mut lines = vec!["Choose Dive Session".bright_blue().bold().to_string()];

    if selection.dates.is_empty() {
        lines.push(format!("  {}", "No Dives Found".bright_black()));
        return lines.join("\n");
    }

    for date in &selection.dates {
        if selection.selected_date.as_deref() == Some(date.as_str()) {
            lines.push(format!(
                "{} {}",
                ">".bright_yellow().bold(),
                date.bright_white().bold()
            ));
        } else {
            lines.push(format!("  {}", date));
        }
    }
    lines.join("\n")
}

/// One card: site banner, headline figures, then the detail grid
pub fn render_dive_card(dive: &DiveEntry, insight: Option<&GeminiInsight>) -> String {
    let rule = "=".repeat(RULE_WIDTH).blue().to_string();
    let mut lines = vec![
        rule.clone(),
        REGION_LABEL.to_uppercase().bright_cyan().to_string(),
        dive.dive_site.to_uppercase().bright_white().bold().to_string(),
        format!(
            "{} {}    {} {}",
            "Depth (Max):".bright_cyan(),
            display_value(&dive.max_depth).bold(),
            "Bottom Time:".bright_cyan(),
            display_value(&dive.total_time).bold()
        ),
        "-".repeat(RULE_WIDTH).blue().to_string(),
    ];

    let details = [
        ("Avg Depth", &dive.avg_depth),
        ("Water Temp", &dive.water_temp),
        ("Visibility", &dive.visibility),
        ("Current", &dive.current),
        ("Wave Action", &dive.waves),
        ("Dive Guide", &dive.guide),
        ("Gas Mix", &dive.type_of_air),
        ("Log Date", &dive.date),
    ];
    for (label, value) in details {
        lines.push(format!("  {:<12} {}", label.bright_black(), display_value(value)));
    }

    if let Some(insight) = insight {
        lines.push(String::new());
        lines.push(format!(
            "  {} {}",
            "Pro Diver Insight:".bright_magenta().bold(),
            insight.title.bold()
        ));
        lines.push(format!("  {}", insight.content));
        lines.push(format!("  {} {}", "Advice:".bright_magenta(), insight.advice));
    }

    lines.push(rule);
    lines.join("\n")
}

/// Panel shown when the chosen session has no dives
pub fn render_no_data() -> String {
    [
        "No Dive Log Data".bright_blue().bold().to_string(),
        "Please check your internet connection or verify the selected date."
            .bright_black()
            .to_string(),
    ]
    .join("\n")
}

pub fn render_footer(year: i32) -> String {
    let mut lines = vec!["FOLLOW THE BUDDIES".bright_blue().bold().to_string()];
    for (name, url) in SOCIAL_LINKS {
        lines.push(format!("  {:<10} {}", name.bright_cyan(), url));
    }
    lines.push(format!("© {} {}", year, FOOTER_OWNER).bright_black().to_string());
    lines.push(
        format!("{} · Verified Data", LOGBOOK_VERSION_LABEL)
            .bright_black()
            .to_string(),
    );
    lines.join("\n")
}
