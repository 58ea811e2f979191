//! 路由定义模块 - 领域模型
//!
//! Pure routing logic with no DOM dependency. The view to mount is derived
//! from (path, authenticated, active store) through an ordered route table;
//! the first rule whose pattern and requirements both hold wins.

use std::fmt::Display;

use crate::model::StoreId;
use crate::{ADMIN_PATH, STOREFRONT_PREFIX};

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Public storefront for a store slug.
    Storefront { slug: String },
    /// Landing page with the auth form (default).
    #[default]
    Landing,
    /// Admin panel of the active store.
    Admin { store_id: StoreId },
    /// Store list, creation and metrics.
    Dashboard,
}

impl AppRoute {
    /// Canonical path of this route.
    pub fn to_path(&self) -> String {
        match self {
            Self::Storefront { slug } => format!("{STOREFRONT_PREFIX}{slug}"),
            Self::Landing | Self::Dashboard => "/".to_string(),
            Self::Admin { .. } => ADMIN_PATH.to_string(),
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// Route table
// =========================================================

/// Everything the resolver looks at.
#[derive(Debug, Clone, Copy)]
pub struct RouteState<'a> {
    pub path: &'a str,
    pub authenticated: bool,
    pub active_store: Option<&'a StoreId>,
}

impl<'a> RouteState<'a> {
    pub fn new(path: &'a str, authenticated: bool, active_store: Option<&'a StoreId>) -> Self {
        Self {
            path,
            authenticated,
            active_store,
        }
    }

    /// Resolves the route for this state.
    pub fn resolve(&self) -> AppRoute {
        ROUTE_TABLE
            .iter()
            .find(|rule| rule.matches(self))
            .and_then(|rule| rule.view.build(self))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPattern {
    /// Path starts with the given prefix.
    Prefix(&'static str),
    /// Path equals the given string.
    Exact(&'static str),
    /// Any path.
    Any,
}

impl PathPattern {
    fn matches(&self, path: &str) -> bool {
        match self {
            Self::Prefix(prefix) => path.starts_with(prefix),
            Self::Exact(exact) => path == *exact,
            Self::Any => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// No session.
    Anonymous,
    /// A session token is present.
    Authenticated,
    /// A store has been selected for administration.
    ActiveStore,
}

impl Requirement {
    fn holds(&self, state: &RouteState<'_>) -> bool {
        match self {
            Self::Anonymous => !state.authenticated,
            Self::Authenticated => state.authenticated,
            Self::ActiveStore => state.active_store.is_some(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Storefront,
    Landing,
    Admin,
    Dashboard,
}

impl ViewId {
    fn build(&self, state: &RouteState<'_>) -> Option<AppRoute> {
        Some(match self {
            Self::Storefront => AppRoute::Storefront {
                slug: state.path.strip_prefix(STOREFRONT_PREFIX)?.to_string(),
            },
            Self::Landing => AppRoute::Landing,
            Self::Admin => AppRoute::Admin {
                store_id: state.active_store?.clone(),
            },
            Self::Dashboard => AppRoute::Dashboard,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RouteRule {
    pub pattern: PathPattern,
    pub requires: &'static [Requirement],
    pub view: ViewId,
}

impl RouteRule {
    fn matches(&self, state: &RouteState<'_>) -> bool {
        self.pattern.matches(state.path) && self.requires.iter().all(|req| req.holds(state))
    }
}

/// Ordered route table; order encodes precedence.
pub const ROUTE_TABLE: &[RouteRule] = &[
    RouteRule {
        pattern: PathPattern::Prefix(STOREFRONT_PREFIX),
        requires: &[],
        view: ViewId::Storefront,
    },
    RouteRule {
        pattern: PathPattern::Any,
        requires: &[Requirement::Anonymous],
        view: ViewId::Landing,
    },
    RouteRule {
        pattern: PathPattern::Exact(ADMIN_PATH),
        requires: &[Requirement::Authenticated, Requirement::ActiveStore],
        view: ViewId::Admin,
    },
    RouteRule {
        pattern: PathPattern::Any,
        requires: &[Requirement::Authenticated],
        view: ViewId::Dashboard,
    },
];
