use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

use super::next_id;

/// Publication state shown on the catalog cards. Serialized with the labels
/// the site displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameStatus {
    #[default]
    #[serde(rename = "En développement")]
    InDevelopment,
    #[serde(rename = "Publié")]
    Published,
    #[serde(rename = "Bêta")]
    Beta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub release_date: String,
    pub players: String,
    pub status: GameStatus,
}

/// Form payload for creating or updating a catalog entry. Only title and
/// description are required; the rest defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GameDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub players: String,
    #[serde(default)]
    pub status: GameStatus,
}

impl GameDraft {
    fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(AppError::user("missing_fields", "title and description are required"));
        }
        Ok(())
    }

    fn into_game(self, id: String) -> Game {
        Game {
            id,
            title: self.title,
            description: self.description,
            image: self.image,
            technologies: self.technologies,
            release_date: self.release_date,
            players: self.players,
            status: self.status,
        }
    }
}

/// Category chips offered by the catalog page. `Tous` selects everything;
/// the others match against the technology list.
pub const CATEGORIES: [&str; 6] = ["Tous", "RPG", "Course", "Stratégie", "Puzzle", "VR"];

pub struct GameCatalog {
    items: RwLock<Vec<Game>>,
}

impl GameCatalog {
    pub fn new(items: Vec<Game>) -> Self {
        Self { items: RwLock::new(items) }
    }

    /// The six catalog entries of the public site.
    pub fn seeded() -> Self {
        let mk = |id: &str, title: &str, description: &str, image: &str, technologies: &[&str], release_date: &str, players: &str, status: GameStatus| Game {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            release_date: release_date.to_string(),
            players: players.to_string(),
            status,
        };
        Self::new(vec![
            mk(
                "1",
                "Cyber Legends",
                "Un RPG futuriste dans un monde cyberpunk immersif avec des mécaniques de combat innovantes.",
                "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?w=400",
                &["Unity", "C#", "Blender"],
                "2024",
                "Solo / Multi",
                GameStatus::InDevelopment,
            ),
            mk(
                "2",
                "Mystic Realms",
                "Aventure fantastique en monde ouvert avec des quêtes épiques et un système de magie unique.",
                "https://images.unsplash.com/photo-1605810230434-7631ac76ec81?w=400",
                &["Unreal Engine", "Blueprint", "Maya"],
                "2023",
                "Solo",
                GameStatus::Published,
            ),
            mk(
                "3",
                "Racing Thunder",
                "Jeu de course arcade avec des voitures personnalisables et des circuits spectaculaires.",
                "https://images.unsplash.com/photo-1487058792275-0ad4aaf24ca7?w=400",
                &["Unity", "C#", "Photon"],
                "2024",
                "Multi",
                GameStatus::Beta,
            ),
            mk(
                "4",
                "Space Odyssey",
                "Exploration spatiale en réalité virtuelle avec des combats épiques et des planètes à découvrir.",
                "https://images.unsplash.com/photo-1500673922987-e212871fec22?w=400",
                &["Unity VR", "C#", "OpenXR"],
                "2023",
                "Solo",
                GameStatus::Published,
            ),
            mk(
                "5",
                "Medieval Conquest",
                "Stratégie en temps réel dans un univers médiéval avec gestion de royaume et batailles massives.",
                "https://images.unsplash.com/photo-1472396961693-142e6e269027?w=400",
                &["Unreal Engine", "C++", "MySQL"],
                "2024",
                "Multi",
                GameStatus::InDevelopment,
            ),
            mk(
                "6",
                "Puzzle Master",
                "Jeu de réflexion innovant avec des mécaniques de puzzle en 3D et des défis créatifs.",
                "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?w=400",
                &["Unity", "C#", "ProBuilder"],
                "2023",
                "Solo",
                GameStatus::Published,
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    pub fn list(&self) -> Vec<Game> {
        self.items.read().clone()
    }

    /// Catalog filtering as the public page does it: case-insensitive
    /// substring search over title and description, and a category chip that
    /// matches against the technology list. `Tous` (or no category) passes
    /// everything.
    pub fn filter(&self, search: Option<&str>, category: Option<&str>) -> Vec<Game> {
        let needle = search.unwrap_or("").to_lowercase();
        let category = category.unwrap_or(CATEGORIES[0]);
        self.items
            .read()
            .iter()
            .filter(|g| {
                let matches_search = needle.is_empty()
                    || g.title.to_lowercase().contains(&needle)
                    || g.description.to_lowercase().contains(&needle);
                let matches_category = category == CATEGORIES[0]
                    || g.technologies
                        .iter()
                        .any(|t| t.to_lowercase().contains(&category.to_lowercase()));
                matches_search && matches_category
            })
            .cloned()
            .collect()
    }

    pub fn add(&self, draft: GameDraft) -> AppResult<Game> {
        draft.validate()?;
        let game = draft.into_game(next_id());
        self.items.write().push(game.clone());
        Ok(game)
    }

    pub fn update(&self, id: &str, draft: GameDraft) -> AppResult<Game> {
        draft.validate()?;
        let mut items = self.items.write();
        let slot = items
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| AppError::not_found("unknown_game", "no game with that id"))?;
        *slot = draft.into_game(id.to_string());
        Ok(slot.clone())
    }

    pub fn remove(&self, id: &str) -> AppResult<()> {
        let mut items = self.items.write();
        let before = items.len();
        items.retain(|g| g.id != id);
        if items.len() == before {
            return Err(AppError::not_found("unknown_game", "no game with that id"));
        }
        Ok(())
    }
}
