use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use directories::ProjectDirs;
use tracing::debug;

use crate::directory::LocationDirectory;
use crate::error::{Error, Result};
use crate::graph::{RouteGraph, VertexId};
use crate::suggest::SuggestTree;

/// Default filename for the campus map inside the platform data directory.
const MAP_FILENAME: &str = "campus_map.txt";

/// Loaded campus: walking graph, name directory, and suggestion tree.
#[derive(Debug, Clone, Default)]
pub struct CampusMap {
    pub graph: RouteGraph,
    pub directory: LocationDirectory,
    pub suggestions: SuggestTree,
}

impl CampusMap {
    /// Lookup a vertex identifier by exact location name.
    pub fn location_id(&self, name: &str) -> Option<VertexId> {
        self.directory.index(name)
    }

    /// Lookup a location name by vertex identifier.
    pub fn location_name(&self, id: VertexId) -> Option<&str> {
        self.directory.name(id)
    }

    /// Propose a known name for `name` using the suggestion tree.
    pub fn suggest(&mut self, name: &str) -> Result<String> {
        self.suggestions.search(name)
    }

    /// Resolve a location name, attaching a suggestion when it is unknown.
    pub fn resolve(&mut self, name: &str) -> Result<VertexId> {
        if let Some(id) = self.directory.index(name) {
            return Ok(id);
        }
        let suggestion = match self.suggest(name) {
            Ok(suggestion) => Some(suggestion),
            Err(Error::EmptySuggestTree) => None,
            Err(other) => return Err(other),
        };
        Err(Error::UnknownLocation {
            name: name.to_string(),
            suggestion,
        })
    }
}

impl FromStr for CampusMap {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        parse_campus_map(text)
    }
}

/// Resolve the default map location using platform-specific project directories.
pub fn default_map_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "campus-route", "campus-route")
        .ok_or(Error::MapPathUnavailable)?;
    Ok(dirs.data_dir().join(MAP_FILENAME))
}

/// Load a campus map description from disk.
///
/// See [`parse_campus_map`] for the accepted format.
pub fn load_campus_map(path: &Path) -> Result<CampusMap> {
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), "loading campus map");
    parse_campus_map(&text)
}

/// Parse a campus map description.
///
/// The description is a stream of whitespace-separated tokens:
///
/// ```text
/// <vertex count> <edge count>
/// <src> <dest> <weight> <direction src->dest> <direction dest->src>   (edge count times)
/// <location name> <vertex id>                                          (vertex count times)
/// ```
///
/// Every id must lie in `[0, vertex count)`, weights must be non-negative
/// integers, and location ids must be a permutation of the vertex range with
/// unique names. Any violation is reported as [`Error::MalformedMap`] with the
/// offending line, before a partial graph can be observed.
pub fn parse_campus_map(text: &str) -> Result<CampusMap> {
    let mut tokens = Tokens::new(text);

    let vertex_count: usize = tokens.parse("vertex count")?;
    let edge_count: usize = tokens.parse("edge count")?;

    let mut graph = RouteGraph::new(vertex_count);
    for _ in 0..edge_count {
        let src = tokens.vertex("edge source", vertex_count)?;
        let dest = tokens.vertex("edge destination", vertex_count)?;
        let weight: u32 = tokens.parse("edge weight")?;
        let forward = tokens.word("direction from source to destination")?;
        let backward = tokens.word("direction from destination to source")?;
        graph.add_edge(src, dest, weight, forward, backward);
    }

    let mut directory = LocationDirectory::new();
    let mut suggestions = SuggestTree::new();
    for _ in 0..vertex_count {
        let (line, name) = tokens.next("location name")?;
        let id = tokens.vertex("location vertex id", vertex_count)?;
        if directory.contains(name) {
            return Err(Error::malformed(
                line,
                format!("location name {name} is listed more than once"),
            ));
        }
        if let Some(existing) = directory.name(id) {
            return Err(Error::malformed(
                line,
                format!("vertex {id} is already assigned to {existing}"),
            ));
        }
        directory.add_location(name, id);
        suggestions.insert(name);
    }

    if let Some((line, token)) = tokens.peek() {
        return Err(Error::malformed(
            line,
            format!("unexpected trailing token {token:?}"),
        ));
    }

    debug!(
        vertices = vertex_count,
        edges = graph.edge_count(),
        "parsed campus map"
    );

    Ok(CampusMap {
        graph,
        directory,
        suggestions,
    })
}

/// Whitespace tokenizer that remembers the 1-based line of every token.
struct Tokens<'a> {
    inner: std::iter::Peekable<Box<dyn Iterator<Item = (usize, &'a str)> + 'a>>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let iter: Box<dyn Iterator<Item = (usize, &'a str)> + 'a> = Box::new(
            text.lines()
                .enumerate()
                .flat_map(|(index, line)| line.split_whitespace().map(move |tok| (index + 1, tok))),
        );
        Self {
            inner: iter.peekable(),
            last_line: text.lines().count().max(1),
        }
    }

    fn peek(&mut self) -> Option<(usize, &'a str)> {
        self.inner.peek().copied()
    }

    fn next(&mut self, what: &str) -> Result<(usize, &'a str)> {
        self.inner.next().ok_or_else(|| {
            Error::malformed(
                self.last_line,
                format!("unexpected end of input, expected {what}"),
            )
        })
    }

    fn word(&mut self, what: &str) -> Result<&'a str> {
        self.next(what).map(|(_, token)| token)
    }

    fn parse<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let (line, token) = self.next(what)?;
        token
            .parse()
            .map_err(|_| Error::malformed(line, format!("invalid {what} {token:?}")))
    }

    fn vertex(&mut self, what: &str, vertex_count: usize) -> Result<VertexId> {
        let (line, token) = self.next(what)?;
        let id: VertexId = token
            .parse()
            .map_err(|_| Error::malformed(line, format!("invalid {what} {token:?}")))?;
        if id >= vertex_count {
            return Err(Error::malformed(
                line,
                format!("{what} {id} is outside 0..{vertex_count}"),
            ));
        }
        Ok(id)
    }
}
