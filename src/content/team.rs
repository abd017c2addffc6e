use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

use super::next_id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub email: String,
    pub location: String,
    pub experience: String,
    pub skills: Vec<String>,
}

/// Form payload for the roster. Name and role are required.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TeamMemberDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl TeamMemberDraft {
    fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() || self.role.trim().is_empty() {
            return Err(AppError::user("missing_fields", "name and role are required"));
        }
        Ok(())
    }

    fn into_member(self, id: String) -> TeamMember {
        TeamMember {
            id,
            name: self.name,
            role: self.role,
            bio: self.bio,
            email: self.email,
            location: self.location,
            experience: self.experience,
            skills: self.skills,
        }
    }
}

pub struct TeamRoster {
    items: RwLock<Vec<TeamMember>>,
}

impl TeamRoster {
    pub fn new(items: Vec<TeamMember>) -> Self {
        Self { items: RwLock::new(items) }
    }

    /// The four studio members of the public site.
    pub fn seeded() -> Self {
        let mk = |id: &str, name: &str, role: &str, bio: &str, email: &str, location: &str, experience: &str, skills: &[&str]| TeamMember {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            bio: bio.to_string(),
            email: email.to_string(),
            location: location.to_string(),
            experience: experience.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        };
        Self::new(vec![
            mk(
                "1",
                "Alex Martin",
                "Lead Developer",
                "Développeur passionné avec 8 ans d'expérience dans le développement de jeux vidéo. Spécialisé en Unity et Unreal Engine.",
                "alex@gamestudio.com",
                "Paris, France",
                "8 ans",
                &["Unity", "C#", "Unreal Engine", "C++"],
            ),
            mk(
                "2",
                "Sarah Johnson",
                "Game Designer",
                "Créatrice d'expériences ludiques innovantes avec un focus sur l'UX et le gameplay. Expert en conception de niveaux.",
                "sarah@gamestudio.com",
                "Lyon, France",
                "6 ans",
                &["Game Design", "Level Design", "UX/UI", "Prototyping"],
            ),
            mk(
                "3",
                "David Chen",
                "Technical Artist",
                "Artiste technique spécialisé dans l'optimisation graphique et les shaders. Pont entre l'art et la technique.",
                "david@gamestudio.com",
                "Toulouse, France",
                "5 ans",
                &["Blender", "Maya", "Shaders", "Optimization"],
            ),
            mk(
                "4",
                "Emma Rodriguez",
                "Marketing Manager",
                "Responsable marketing digital avec une expertise en community management et stratégie de contenu gaming.",
                "emma@gamestudio.com",
                "Marseille, France",
                "4 ans",
                &["Marketing Digital", "Community Management", "Analytics", "Content Strategy"],
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    pub fn list(&self) -> Vec<TeamMember> {
        self.items.read().clone()
    }

    pub fn add(&self, draft: TeamMemberDraft) -> AppResult<TeamMember> {
        draft.validate()?;
        let member = draft.into_member(next_id());
        self.items.write().push(member.clone());
        Ok(member)
    }

    pub fn update(&self, id: &str, draft: TeamMemberDraft) -> AppResult<TeamMember> {
        draft.validate()?;
        let mut items = self.items.write();
        let slot = items
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::not_found("unknown_member", "no team member with that id"))?;
        *slot = draft.into_member(id.to_string());
        Ok(slot.clone())
    }

    pub fn remove(&self, id: &str) -> AppResult<()> {
        let mut items = self.items.write();
        let before = items.len();
        items.retain(|m| m.id != id);
        if items.len() == before {
            return Err(AppError::not_found("unknown_member", "no team member with that id"));
        }
        Ok(())
    }
}
