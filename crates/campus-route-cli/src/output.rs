//! Output formatting for route rendering.
//!
//! Every renderer writes into a caller-supplied [`Write`] so the interactive
//! session and the one-shot `route` command share the same formatting.

use std::io::Write;

use anyhow::Result;
use campus_route_lib::{LocationDirectory, RouteSummary, SearchHistory};
use clap::ValueEnum;

/// Supported route output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Path, turn-by-turn directions, and total distance.
    #[default]
    Text,
    /// Pretty-printed JSON summary.
    Json,
}

impl OutputFormat {
    /// Render a route summary in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization or writing fails.
    pub fn render_route(self, summary: &RouteSummary, out: &mut dyn Write) -> Result<()> {
        match self {
            OutputFormat::Text => write!(out, "{}", summary.render())?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, summary)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Render the search history in this format.
    pub fn render_history(self, history: &SearchHistory, out: &mut dyn Write) -> Result<()> {
        match self {
            OutputFormat::Json => {
                let entries: Vec<_> = history.iter().collect();
                serde_json::to_writer_pretty(&mut *out, &entries)?;
                writeln!(out)?;
            }
            OutputFormat::Text => {
                writeln!(out)?;
                write!(out, "{}", history.render())?;
            }
        }
        Ok(())
    }
}

/// Print the numbered location menu, ordered by vertex id.
pub fn render_menu(directory: &LocationDirectory, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Menu:")?;
    for (id, name) in directory.names() {
        writeln!(out, "{}. {}", id, name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::abc_summary;

    #[test]
    fn text_output_lists_path_directions_and_total() {
        let summary = abc_summary();
        let mut buffer = Vec::new();
        OutputFormat::Text
            .render_route(&summary, &mut buffer)
            .expect("render text");

        assert_eq!(
            String::from_utf8(buffer).expect("utf8"),
            "The shortest path from A to C is: A -> B -> C\n\
             Go east for 5 meters from A to B.\n\
             Go north for 3 meters from B to C.\n\
             Total cost: 8 meters.\n"
        );
    }

    #[test]
    fn json_output_contains_directions() {
        let summary = abc_summary();
        let mut buffer = Vec::new();
        OutputFormat::Json
            .render_route(&summary, &mut buffer)
            .expect("render json");

        let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid json");
        assert_eq!(value["directions"][1]["heading"], "north");
        assert_eq!(value["total_distance"], 8);
    }

    #[test]
    fn json_history_is_most_recent_first() {
        let mut history = SearchHistory::default();
        history.record("A", "B");
        history.record("B", "C");
        let mut buffer = Vec::new();
        OutputFormat::Json
            .render_history(&history, &mut buffer)
            .expect("render history");

        let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid json");
        assert_eq!(value[0]["from"], "B");
        assert_eq!(value[1]["to"], "B");
    }

    #[test]
    fn menu_is_ordered_by_id() {
        let mut directory = LocationDirectory::new();
        directory.add_location("library", 1);
        directory.add_location("gate", 0);
        let mut buffer = Vec::new();
        render_menu(&directory, &mut buffer).expect("render menu");

        assert_eq!(
            String::from_utf8(buffer).expect("utf8"),
            "Menu:\n0. gate\n1. library\n"
        );
    }
}
