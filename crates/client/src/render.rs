//! Terminal rendering of the dashboard views.
//!
//! Pure string builders: the caller decides where the output goes. Badge
//! colours are ANSI escapes picked from [`BadgeTone`], and only emitted
//! when the renderer is created with colour enabled.

use raildash_core::report::{BadgeTone, TrainReport};
use raildash_core::reports::{fault_count_label, filter, recent, summarize, RECENT_REPORTS_LIMIT};
use raildash_core::view::ViewState;

pub const LIST_LOADING: &str = "Loading train data...";
pub const DETAIL_LOADING: &str = "Loading train details...";
pub const NO_MATCHES: &str = "No trains found matching your search.";

/// User-facing line for a report that does not exist.
pub fn not_found_message(train_id: &str) -> String {
    format!("The train with ID {train_id} could not be found.")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render the list view: summary counters over the whole collection,
    /// then up to [`RECENT_REPORTS_LIMIT`] rows matching `query`.
    pub fn list(&self, state: &ViewState<Vec<TrainReport>>, query: &str) -> String {
        let trains: &[TrainReport] = match state {
            ViewState::Loading => return format!("{LIST_LOADING}\n"),
            ViewState::Error(msg) => {
                return format!("Dashboard\n\nCould not load train data. {msg}\n");
            }
            ViewState::Empty => &[],
            ViewState::Ready(trains) => trains,
        };

        let summary = summarize(trains);
        let mut out = String::from("Dashboard\nHere's a quick overview of your Dashboard\n\n");
        for (label, count) in [
            ("Total Reports", summary.total),
            ("Active Trains", summary.active),
            ("Under Process", summary.under_process),
            ("High Priority", summary.high_priority),
        ] {
            out.push_str(&format!("  {label:<16}{count}\n"));
        }
        out.push('\n');

        if query.is_empty() {
            out.push_str("Recent Fault Reports\n");
        } else {
            out.push_str(&format!("Recent Fault Reports (search: \"{query}\")\n"));
        }

        let matches = filter(trains, query);
        if matches.is_empty() {
            out.push_str(&format!("  {NO_MATCHES}\n"));
            return out;
        }

        for report in recent(&matches, RECENT_REPORTS_LIMIT) {
            out.push_str(&format!(
                "  Train {:<8} {:<36} {} {}",
                report.train_id,
                report.train_route,
                self.badge(report.priority.label(), report.priority.tone()),
                self.badge(report.status.label(), report.status.tone()),
            ));
            if let Some(faults) = fault_count_label(report.fault_locations.len()) {
                out.push_str(&format!("  {faults}"));
            }
            out.push('\n');
        }
        if matches.len() > RECENT_REPORTS_LIMIT {
            out.push_str(&format!(
                "  ... {} more, refine the search to narrow down\n",
                matches.len() - RECENT_REPORTS_LIMIT
            ));
        }
        out
    }

    /// Render the detail view of `train_id`.
    pub fn detail(&self, train_id: &str, state: &ViewState<TrainReport>) -> String {
        let report = match state {
            ViewState::Loading => return format!("{DETAIL_LOADING}\n"),
            ViewState::Empty => {
                return format!(
                    "Train Not Found\n{}\n\nBack to List: raildash list\n",
                    not_found_message(train_id)
                );
            }
            ViewState::Error(msg) => {
                return format!(
                    "Could not load train {train_id}. {msg}\n\nBack to List: raildash list\n"
                );
            }
            ViewState::Ready(report) => report,
        };

        let mut out = format!(
            "Train {}\nRoute: {}\n{} {}\n",
            report.train_id,
            report.train_route,
            self.badge(report.priority.label(), report.priority.tone()),
            self.badge(report.status.label(), report.status.tone()),
        );

        numbered_section(&mut out, "Fault Locations", &report.fault_locations);
        numbered_section(&mut out, "Crack Description", &report.crack_descriptions);

        if !report.media_links.images.is_empty() {
            link_section(&mut out, "Inspection Images", &report.media_links.images);
        }
        if !report.media_links.videos.is_empty() {
            link_section(&mut out, "Inspection Videos", &report.media_links.videos);
        }

        out.push_str("\nBack to Train List: raildash list\n");
        out
    }

    fn badge(&self, label: &str, tone: BadgeTone) -> String {
        if !self.color {
            return format!("[{label}]");
        }
        let code = match tone {
            BadgeTone::Critical => "31",
            BadgeTone::Warning => "33",
            BadgeTone::Calm => "32",
        };
        format!("\x1b[{code}m[{label}]\x1b[0m")
    }
}

fn numbered_section(out: &mut String, title: &str, items: &[String]) {
    out.push_str(&format!("\n{title}\n"));
    for (idx, item) in items.iter().enumerate() {
        out.push_str(&format!("  {:>2}. {item}\n", idx + 1));
    }
}

fn link_section(out: &mut String, title: &str, links: &[String]) {
    out.push_str(&format!("\n{title}\n"));
    for link in links {
        out.push_str(&format!("  - {link}\n"));
    }
}
