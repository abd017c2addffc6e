use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

use super::next_id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub author: String,
    pub published_at: String,
    pub category: String,
}

/// Form payload for publishing or editing an article. Title and excerpt are
/// required; author defaults to the back-office byline and the publication
/// date is stamped at creation.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ArticleDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
}

impl ArticleDraft {
    fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() || self.excerpt.trim().is_empty() {
            return Err(AppError::user("missing_fields", "title and excerpt are required"));
        }
        Ok(())
    }
}

pub struct NewsDesk {
    items: RwLock<Vec<Article>>,
}

impl NewsDesk {
    pub fn new(items: Vec<Article>) -> Self {
        Self { items: RwLock::new(items) }
    }

    /// The six newsroom entries of the public site.
    pub fn seeded() -> Self {
        let mk = |id: &str, title: &str, excerpt: &str, image: &str, author: &str, published_at: &str, category: &str| Article {
            id: id.to_string(),
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            image: image.to_string(),
            author: author.to_string(),
            published_at: published_at.to_string(),
            category: category.to_string(),
        };
        Self::new(vec![
            mk(
                "1",
                "Cyber Legends : Nouvelle bande-annonce révélée",
                "Découvrez les dernières fonctionnalités de notre RPG cyberpunk avec des séquences de gameplay inédites.",
                "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?w=400",
                "Marie Dubois",
                "15 Jan 2024",
                "Actualités",
            ),
            mk(
                "2",
                "GameStudio remporte le prix de l'innovation",
                "Notre studio a été récompensé lors de la cérémonie des Game Awards pour nos avancées technologiques.",
                "https://images.unsplash.com/photo-1605810230434-7631ac76ec81?w=400",
                "Pierre Martin",
                "12 Jan 2024",
                "Récompenses",
            ),
            mk(
                "3",
                "Mise à jour majeure pour Mystic Realms",
                "La version 2.0 apporte de nouveaux sorts, quêtes et un système de compagnons révolutionnaire.",
                "https://images.unsplash.com/photo-1487058792275-0ad4aaf24ca7?w=400",
                "Sophie Laurent",
                "08 Jan 2024",
                "Mises à jour",
            ),
            mk(
                "4",
                "Interview : L'avenir du gaming en VR",
                "Notre directeur technique partage sa vision sur les technologies immersives et l'avenir du jeu vidéo.",
                "https://images.unsplash.com/photo-1500673922987-e212871fec22?w=400",
                "Alex Bernard",
                "05 Jan 2024",
                "Interviews",
            ),
            mk(
                "5",
                "Recrutement : Rejoignez notre équipe",
                "Nous recherchons des développeurs passionnés pour renforcer notre équipe créative et talentueuse.",
                "https://images.unsplash.com/photo-1472396961693-142e6e269027?w=400",
                "Julie Moreau",
                "03 Jan 2024",
                "Carrières",
            ),
            mk(
                "6",
                "Beta ouverte pour Racing Thunder",
                "Testez notre nouveau jeu de course en avant-première et donnez-nous vos retours pour améliorer l'expérience.",
                "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?w=400",
                "Thomas Petit",
                "01 Jan 2024",
                "Bêta",
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    pub fn list(&self) -> Vec<Article> {
        self.items.read().clone()
    }

    /// Case-insensitive substring search over title and excerpt.
    pub fn search(&self, term: Option<&str>) -> Vec<Article> {
        let needle = term.unwrap_or("").to_lowercase();
        self.items
            .read()
            .iter()
            .filter(|a| {
                needle.is_empty()
                    || a.title.to_lowercase().contains(&needle)
                    || a.excerpt.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub fn add(&self, draft: ArticleDraft) -> AppResult<Article> {
        draft.validate()?;
        let article = Article {
            id: next_id(),
            title: draft.title,
            excerpt: draft.excerpt,
            image: draft.image,
            author: if draft.author.trim().is_empty() { "Admin".to_string() } else { draft.author },
            published_at: chrono::Utc::now().format("%Y-%m-%d").to_string(),
            category: if draft.category.trim().is_empty() { "Actualités".to_string() } else { draft.category },
        };
        self.items.write().push(article.clone());
        Ok(article)
    }

    pub fn update(&self, id: &str, draft: ArticleDraft) -> AppResult<Article> {
        draft.validate()?;
        let mut items = self.items.write();
        let slot = items
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::not_found("unknown_article", "no article with that id"))?;
        slot.title = draft.title;
        slot.excerpt = draft.excerpt;
        if !draft.image.trim().is_empty() {
            slot.image = draft.image;
        }
        if !draft.author.trim().is_empty() {
            slot.author = draft.author;
        }
        if !draft.category.trim().is_empty() {
            slot.category = draft.category;
        }
        Ok(slot.clone())
    }

    pub fn remove(&self, id: &str) -> AppResult<()> {
        let mut items = self.items.write();
        let before = items.len();
        items.retain(|a| a.id != id);
        if items.len() == before {
            return Err(AppError::not_found("unknown_article", "no article with that id"));
        }
        Ok(())
    }
}
