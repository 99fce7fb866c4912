use std::collections::HashMap;

use finclub_types::{PanelId, RouteId};
use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use super::normalize::ALIAS_GROUPS;

/// Route table shipped with the site.
const BUILTIN_ROUTES: &str = include_str!("../../data/routes.json");

/// Deepest route accepted: flat routes and one level of nesting.
const MAX_ROUTE_SEGMENTS: usize = 2;

/// Reasons a route table document is rejected.
#[derive(Debug, Error)]
pub enum RouteTableError {
    #[error("route table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("route table has no `{home}` entry", home = RouteId::HOME)]
    MissingHome,
    #[error("route table contains an empty route id or segment: {0:?}")]
    EmptyRoute(String),
    #[error("route `{0}` is nested deeper than {max} segments", max = MAX_ROUTE_SEGMENTS)]
    TooDeep(RouteId),
    #[error("route `{0}` is declared more than once")]
    DuplicateRoute(RouteId),
    #[error("panel `{panel}` is shared by routes `{first}` and `{second}`")]
    DuplicatePanel { panel: PanelId, first: RouteId, second: RouteId },
    #[error("alias target `{0}` has no route table entry")]
    UnresolvedAlias(RouteId),
}

/// Panel and document title for one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub panel: PanelId,
    pub title: String,
}

#[derive(Deserialize)]
struct RouteFile {
    routes: Vec<RouteRecord>,
}

#[derive(Deserialize)]
struct RouteRecord {
    id: RouteId,
    panel: PanelId,
    title: String,
}

/// Immutable mapping from canonical routes to panels and titles.
///
/// Construction validates that `home` exists, so [`RouteTable::home`] is
/// total.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: IndexMap<RouteId, RouteEntry>,
    home: RouteEntry,
}

impl RouteTable {
    /// Loads the embedded site route table.
    pub fn builtin() -> Result<Self, RouteTableError> {
        Self::from_json_str(BUILTIN_ROUTES)
    }

    /// Parses and validates a route table document.
    pub fn from_json_str(json: &str) -> Result<Self, RouteTableError> {
        let file: RouteFile = serde_json::from_str(json)?;
        Self::from_entries(file.routes.into_iter().map(|record| {
            (
                record.id,
                RouteEntry {
                    panel: record.panel,
                    title: record.title,
                },
            )
        }))
    }

    /// Builds a table from `(route, entry)` pairs in declaration order.
    pub fn from_entries(pairs: impl IntoIterator<Item = (RouteId, RouteEntry)>) -> Result<Self, RouteTableError> {
        let mut entries = IndexMap::new();
        let mut panel_owners: HashMap<PanelId, RouteId> = HashMap::new();

        for (route, entry) in pairs {
            validate_shape(&route)?;
            if let Some(first) = panel_owners.insert(entry.panel.clone(), route.clone()) {
                return Err(RouteTableError::DuplicatePanel {
                    panel: entry.panel,
                    first,
                    second: route,
                });
            }
            if entries.contains_key(&route) {
                return Err(RouteTableError::DuplicateRoute(route));
            }
            entries.insert(route, entry);
        }

        let home = entries.get(RouteId::HOME).cloned().ok_or(RouteTableError::MissingHome)?;

        for target in ALIAS_GROUPS.iter().flat_map(|group| group.targets()) {
            if !entries.contains_key(&target) {
                return Err(RouteTableError::UnresolvedAlias(target));
            }
        }

        Ok(Self { entries, home })
    }

    pub fn get(&self, route: &str) -> Option<&RouteEntry> {
        self.entries.get(route)
    }

    pub fn contains(&self, route: &str) -> bool {
        self.entries.contains_key(route)
    }

    /// Entry of the universal fallback route.
    pub fn home(&self) -> &RouteEntry {
        &self.home
    }

    /// Title for `route`, or the home title when the route is absent.
    pub fn title_or_home(&self, route: &str) -> &str {
        self.get(route).map_or(self.home.title.as_str(), |entry| entry.title.as_str())
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = (&RouteId, &RouteEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_shape(route: &RouteId) -> Result<(), RouteTableError> {
    if route.segments().any(str::is_empty) {
        return Err(RouteTableError::EmptyRoute(route.to_string()));
    }
    if route.segments().count() > MAX_ROUTE_SEGMENTS {
        return Err(RouteTableError::TooDeep(route.clone()));
    }
    Ok(())
}
