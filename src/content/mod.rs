// src/content/mod.rs - STATIC CONTENT RECORDS
use crate::core::error::Result;
use crate::i18n::Locale;
use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(RustEmbed)]
#[folder = "src/content/data/"]
pub struct ContentFiles;

#[derive(Debug)]
pub enum ContentError {
    MissingFile(String),
    Parse(String),
    DuplicateId { collection: String, id: String },
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFile(name) => write!(f, "Content file not found: {}", name),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::DuplicateId { collection, id } => {
                write!(f, "Duplicate id '{}' in {}", id, collection)
            }
        }
    }
}

/// Text carried in both site languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub de: String,
    pub en: String,
}

impl LocalizedText {
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::De => &self.de,
            Locale::En => &self.en,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub title: LocalizedText,
    pub body: LocalizedText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub slug: String,
    pub name: String,
    pub short_description: LocalizedText,
    pub long_description: LocalizedText,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub slug: String,
    pub name: String,
    pub short_description: LocalizedText,
    pub long_description: LocalizedText,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub platform: Vec<String>,
    pub genre: LocalizedText,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub trailer_url: Option<String>,
    #[serde(default)]
    pub play_url: Option<String>,
    #[serde(default)]
    pub difficulty: Option<LocalizedText>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: LocalizedText,
    pub answer: LocalizedText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoadmapStatus {
    Planned,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    #[serde(rename = "Thesis Focus")]
    ThesisFocus,
}

impl RoadmapStatus {
    /// Translation key of the status badge.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Planned => "roadmap.status.planned",
            Self::InProgress => "roadmap.status.inProgress",
            Self::Completed => "roadmap.status.completed",
            Self::ThesisFocus => "roadmap.status.thesisFocus",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Planned => "status-planned",
            Self::InProgress => "status-in-progress",
            Self::Completed => "status-completed",
            Self::ThesisFocus => "status-thesis-focus",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub id: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub status: RoadmapStatus,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: LocalizedText,
    pub bio: LocalizedText,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

/// All content records, loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct ContentStore {
    projects: Vec<Project>,
    games: Vec<Game>,
    faq: Vec<FaqEntry>,
    roadmap: Vec<RoadmapItem>,
    team: Vec<TeamMember>,
}

impl ContentStore {
    pub fn load() -> Result<Self> {
        let store = Self {
            projects: load_collection("projects.json")?,
            games: load_collection("games.json")?,
            faq: load_collection("faq.json")?,
            roadmap: load_collection("roadmap.json")?,
            team: load_collection("team.json")?,
        };
        store.validate()?;

        log::info!(
            "Content loaded: {} projects, {} games, {} faq, {} roadmap, {} team",
            store.projects.len(),
            store.games.len(),
            store.faq.len(),
            store.roadmap.len(),
            store.team.len()
        );
        Ok(store)
    }

    pub fn new(
        projects: Vec<Project>,
        games: Vec<Game>,
        faq: Vec<FaqEntry>,
        roadmap: Vec<RoadmapItem>,
        team: Vec<TeamMember>,
    ) -> Result<Self> {
        let store = Self {
            projects,
            games,
            faq,
            roadmap,
            team,
        };
        store.validate()?;
        Ok(store)
    }

    fn validate(&self) -> Result<()> {
        ensure_unique("projects", self.projects.iter().map(|p| p.slug.as_str()))?;
        ensure_unique("games", self.games.iter().map(|g| g.slug.as_str()))?;
        ensure_unique("roadmap", self.roadmap.iter().map(|r| r.id.as_str()))?;
        ensure_unique("team", self.team.iter().map(|m| m.id.as_str()))?;
        Ok(())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn faq(&self) -> &[FaqEntry] {
        &self.faq
    }

    pub fn roadmap(&self) -> &[RoadmapItem] {
        &self.roadmap
    }

    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    pub fn project(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    pub fn game(&self, slug: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.slug == slug)
    }

    pub fn team_member(&self, id: &str) -> Option<&TeamMember> {
        self.team.iter().find(|m| m.id == id)
    }
}

fn load_collection<T: DeserializeOwned>(filename: &str) -> Result<Vec<T>> {
    let file = ContentFiles::get(filename)
        .ok_or_else(|| ContentError::MissingFile(filename.to_string()))?;

    serde_json::from_slice(file.data.as_ref())
        .map_err(|e| ContentError::Parse(format!("{}: {}", filename, e)).into())
}

fn ensure_unique<'a>(collection: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                collection: collection.to_string(),
                id: id.to_string(),
            }
            .into());
        }
    }
    Ok(())
}
