//! The static route table consumed by the presentation layer.
//!
//! Pure data plus a plain segment matcher. No guards, no redirects, no
//! conditional logic; `:name` segments capture the raw path value as a
//! string parameter.

use serde::{Deserialize, Serialize};

/// Views the presentation layer can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    Home,
    PokemonList,
    PokemonDetail,
    ItemList,
    MoveList,
    Stats,
}

/// One route binding: path pattern → view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteDef {
    /// Path pattern; segments starting with `:` capture a parameter.
    pub pattern: &'static str,
    pub view: View,
    /// Whether captured parameters are passed through to the view.
    pub passes_params: bool,
}

/// The declared routes, in match order.
pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        pattern: "/",
        view: View::Home,
        passes_params: false,
    },
    RouteDef {
        pattern: "/pokemon",
        view: View::PokemonList,
        passes_params: false,
    },
    RouteDef {
        pattern: "/pokemon/:id",
        view: View::PokemonDetail,
        passes_params: true,
    },
    RouteDef {
        pattern: "/items",
        view: View::ItemList,
        passes_params: false,
    },
    RouteDef {
        pattern: "/moves",
        view: View::MoveList,
        passes_params: false,
    },
    RouteDef {
        pattern: "/stats",
        view: View::Stats,
        passes_params: false,
    },
];

/// A resolved route: the matched view plus any captured parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMatch {
    pub view: View,
    pub params: Vec<(String, String)>,
}

/// Resolve a path against the route table. First match wins; `None`
/// means no declared route matches.
pub fn resolve(path: &str) -> Option<RouteMatch> {
    ROUTES.iter().find_map(|route| match_route(route, path))
}

fn match_route(route: &RouteDef, path: &str) -> Option<RouteMatch> {
    let pattern_segs: Vec<&str> = route
        .pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();
    let path_segs: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if pattern_segs.len() != path_segs.len() {
        return None;
    }

    let mut params = Vec::new();
    for (pat, seg) in pattern_segs.iter().zip(&path_segs) {
        if let Some(name) = pat.strip_prefix(':') {
            params.push((name.to_string(), (*seg).to_string()));
        } else if pat != seg {
            return None;
        }
    }

    if !route.passes_params {
        params.clear();
    }

    Some(RouteMatch {
        view: route.view,
        params,
    })
}
