//! Access-gated view selection.
//! Reachability and render-variant decisions live here so the surrounding
//! shell never branches on role directly.

use serde::Serialize;

use crate::content::{Article, DashboardStats, Game, StudioContent, TeamMember};

use super::user::SessionUser;

/// View-model handed to the presentational layer for a gated surface.
/// Authorization is expressed as the single `can_mutate` capability instead
/// of leaking the role into every consumer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ViewContext {
    pub user: SessionUser,
    pub can_mutate: bool,
}

/// Outcome of gating a route that requires authentication. Protected content
/// is never produced for an anonymous session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    RedirectToLogin,
    Granted(ViewContext),
}

impl Access {
    /// Gate on the current session: absent redirects to login, present maps
    /// the role to its capability set.
    pub fn of(current: Option<SessionUser>) -> Self {
        match current {
            None => Access::RedirectToLogin,
            Some(user) => {
                let can_mutate = user.role.can_mutate();
                Access::Granted(ViewContext { user, can_mutate })
            }
        }
    }

    pub fn granted(&self) -> Option<&ViewContext> {
        match self {
            Access::Granted(ctx) => Some(ctx),
            Access::RedirectToLogin => None,
        }
    }
}

/// Render variant of the dashboard. Admins get the full management surface;
/// members get the same team data with every mutating affordance removed.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DashboardView {
    Admin {
        stats: DashboardStats,
        games: Vec<Game>,
        articles: Vec<Article>,
        members: Vec<TeamMember>,
    },
    Member {
        members: Vec<TeamMember>,
    },
}

/// Pick the dashboard variant for an authenticated session. This is a pure
/// rendering decision over the same underlying collections, not a separate
/// data path.
pub fn select_dashboard(ctx: &ViewContext, content: &StudioContent) -> DashboardView {
    if ctx.can_mutate {
        DashboardView::Admin {
            stats: content.stats(),
            games: content.games.list(),
            articles: content.news.list(),
            members: content.team.list(),
        }
    } else {
        DashboardView::Member { members: content.team.list() }
    }
}
