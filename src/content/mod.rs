//! In-memory content collections backing the public site and the dashboard.
//! Everything here is mock data seeded at startup; the collections are
//! plain locally-mutable lists keyed by a generated timestamp id, with no
//! uniqueness enforcement beyond the clock.

mod games;
mod news;
mod team;

pub use games::{Game, GameCatalog, GameDraft, GameStatus, CATEGORIES};
pub use news::{Article, ArticleDraft, NewsDesk};
pub use team::{TeamMember, TeamMemberDraft, TeamRoster};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Timestamp-based id in the style of the seeded records.
pub(crate) fn next_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

/// The three managed collections bundled for injection into the shell.
pub struct StudioContent {
    pub games: GameCatalog,
    pub news: NewsDesk,
    pub team: TeamRoster,
}

impl StudioContent {
    pub fn seeded() -> Self {
        Self {
            games: GameCatalog::seeded(),
            news: NewsDesk::seeded(),
            team: TeamRoster::seeded(),
        }
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            games: self.games.len(),
            articles: self.news.len(),
            members: self.team.len(),
            monthly_views: "24.5k".to_string(),
        }
    }
}

/// Headline figures for the dashboard landing tab. Counts are derived from
/// the live collections; monthly views stay a static figure since there is
/// no analytics backend.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub games: usize,
    pub articles: usize,
    pub members: usize,
    pub monthly_views: String,
}

/// Contact-form intake. Nothing is stored; the submission is validated and
/// acknowledged.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> AppResult<()> {
        let filled = [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|f| !f.trim().is_empty());
        if filled {
            Ok(())
        } else {
            Err(AppError::user("missing_fields", "name, email, subject and message are required"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_follow_the_collections() {
        let content = StudioContent::seeded();
        let before = content.stats();
        assert_eq!(before.games, 6);
        assert_eq!(before.articles, 6);
        assert_eq!(before.members, 4);

        content
            .games
            .add(GameDraft { title: "Test".into(), description: "d".into(), ..Default::default() })
            .unwrap();
        assert_eq!(content.stats().games, before.games + 1);
    }

    #[test]
    fn contact_requires_every_field() {
        let ok = ContactMessage {
            name: "Jean".into(),
            email: "jean@example.com".into(),
            subject: "Coucou".into(),
            message: "Bonjour !".into(),
        };
        assert!(ok.validate().is_ok());

        let missing = ContactMessage { subject: " ".into(), ..ok };
        assert!(missing.validate().is_err());
    }
}
