//! Interactive route session.
//!
//! The session prints the location menu, then repeatedly asks for a start and
//! a destination. Unknown names are answered with a suggestion from the
//! campus map's suggestion tree, which the user may accept or replace. After
//! each route the user can review the most recent searches.
//!
//! The loop ends at end of input, when `quit` or `exit` is entered at a
//! location prompt, or once the configured number of searches is reached.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use campus_route_lib::{
    plan_route, CampusMap, Error as RouteError, RouteRequest, RouteSummary, SearchHistory,
};
use tracing::{debug, info};

use crate::output::{render_menu, OutputFormat};

/// Words that end the session when typed at a location prompt.
const QUIT_WORDS: [&str; 2] = ["quit", "exit"];

/// Which endpoint a location prompt is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Start,
    Destination,
}

impl Endpoint {
    fn prompt(self) -> &'static str {
        match self {
            Endpoint::Start => "ENTER START LOCATION: ",
            Endpoint::Destination => "ENTER DESTINATION: ",
        }
    }

    fn retry_prompt(self) -> &'static str {
        match self {
            Endpoint::Start => "Please enter a valid start location: ",
            Endpoint::Destination => "Please enter a valid destination: ",
        }
    }
}

/// Options controlling an interactive session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Stop after this many completed searches.
    pub max_searches: Option<usize>,
    pub format: OutputFormat,
}

/// Interactive session over arbitrary input and output streams.
pub struct Session<'a, R, W> {
    map: &'a mut CampusMap,
    input: R,
    output: W,
    options: SessionOptions,
    history: SearchHistory,
    /// Tokens left over from the last input line.
    pending: VecDeque<String>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(map: &'a mut CampusMap, input: R, output: W, options: SessionOptions) -> Self {
        Self {
            map,
            input,
            output,
            options,
            history: SearchHistory::default(),
            pending: VecDeque::new(),
        }
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Run the session until input ends, the user quits, or the search limit
    /// is reached. Returns the number of searches performed.
    pub fn run(&mut self) -> Result<usize> {
        render_menu(&self.map.directory, &mut self.output)?;

        let mut searches = 0usize;
        loop {
            if self
                .options
                .max_searches
                .is_some_and(|limit| searches >= limit)
            {
                debug!(searches, "search limit reached");
                break;
            }

            let Some(start) = self.prompt_location(Endpoint::Start)? else {
                break;
            };
            let Some(goal) = self.prompt_location(Endpoint::Destination)? else {
                break;
            };

            self.show_route(&start, &goal)?;
            self.history.record(start, goal);
            searches += 1;

            self.write("Do you want to see the search history? (y/n): ")?;
            let Some(answer) = self.read_token()? else {
                break;
            };
            if is_yes(&answer) {
                self.options
                    .format
                    .render_history(&self.history, &mut self.output)?;
            }
        }

        info!(searches, "interactive session finished");
        Ok(searches)
    }

    /// Ask for a location until a known name is entered or a suggestion is
    /// accepted. `None` means the user asked to stop or input ended.
    fn prompt_location(&mut self, endpoint: Endpoint) -> Result<Option<String>> {
        self.write(endpoint.prompt())?;
        let Some(mut name) = self.read_location()? else {
            return Ok(None);
        };

        while !self.map.directory.contains(&name) {
            let suggestion = self
                .map
                .suggest(&name)
                .context("cannot suggest a location")?;
            debug!(input = %name, suggestion = %suggestion, "unknown location");

            self.write(&format!("DID YOU MEAN THIS? {suggestion} (y/n): "))?;
            let Some(answer) = self.read_token()? else {
                return Ok(None);
            };
            if is_yes(&answer) {
                name = suggestion;
            } else {
                self.write(endpoint.retry_prompt())?;
                match self.read_location()? {
                    Some(next) => name = next,
                    None => return Ok(None),
                }
            }
        }

        Ok(Some(name))
    }

    fn show_route(&mut self, start: &str, goal: &str) -> Result<()> {
        let request = RouteRequest::new(start, goal);
        let plan = match plan_route(self.map, &request) {
            Ok(plan) => plan,
            Err(RouteError::RouteNotFound { start, goal }) => {
                writeln!(self.output, "No path exists between {start} and {goal}.")?;
                return Ok(());
            }
            Err(other) => return Err(other).context("failed to plan route"),
        };

        let summary = RouteSummary::from_plan(self.map, &plan)
            .context("failed to build route summary for display")?;
        self.options
            .format
            .render_route(&summary, &mut self.output)
    }

    /// Read a location name; quit words end the session unless they name a
    /// real location.
    fn read_location(&mut self) -> Result<Option<String>> {
        let Some(token) = self.read_token()? else {
            return Ok(None);
        };
        if QUIT_WORDS.contains(&token.as_str()) && !self.map.directory.contains(&token) {
            return Ok(None);
        }
        Ok(Some(token))
    }

    /// Next whitespace-delimited input token. Several answers may share one
    /// line; the rest are kept for the following prompts.
    fn read_token(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        while self.pending.is_empty() {
            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read from input")?;
            if read == 0 {
                // Keep the transcript tidy when input ends mid-prompt.
                writeln!(self.output)?;
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.chars().next(), Some('y') | Some('Y'))
}
