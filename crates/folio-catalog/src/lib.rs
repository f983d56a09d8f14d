//! Project catalog for the portfolio page.
//!
//! The catalog is read-only reference data: it is built once at start-up and
//! never mutated. Filtering lives in [`filter`], card view-models and the
//! rendering seam in [`card`].

pub mod card;
pub mod filter;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

pub use card::{CardImage, CardLink, CardSurface, LinkKind, ProjectCard, render};
pub use filter::{FilterKey, filter_projects};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Python,
    Web,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Python => "python",
            Category::Web => "web",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub tech: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub learned: Option<Vec<String>>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("project id must be positive (title: {title:?})")]
    NonPositiveId { title: String },
    #[error("duplicate project id {0}")]
    DuplicateId(u32),
    #[error("invalid catalog json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable, ordered list of projects.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if project.id == 0 {
                return Err(CatalogError::NonPositiveId {
                    title: project.title.clone(),
                });
            }
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateId(project.id));
            }
        }
        Ok(Self { projects })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let projects: Vec<Project> = serde_json::from_str(raw)?;
        Self::new(projects)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// The student projects shipped with the page.
    pub fn builtin() -> Self {
        Self {
            projects: builtin_projects(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn builtin_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Snake Game".to_owned(),
            description: "A classic Snake game built with Python and Pygame. Control the snake to eat food and grow while avoiding walls and collisions.".to_owned(),
            category: Category::Python,
            tech: strings(&["Python", "Pygame", "Game Development"]),
            github: Some("https://github.com/khush3707/snake-game".to_owned()),
            live: None,
            featured: true,
            learned: Some(strings(&[
                "Game loop implementation",
                "Collision detection algorithms",
                "Keyboard event handling",
                "Score tracking system",
            ])),
        },
        Project {
            id: 2,
            title: "Smart Payment Tracker".to_owned(),
            description: "A web-based expense tracking system with HTML, CSS, JavaScript, and n8n workflow automation.".to_owned(),
            category: Category::Web,
            tech: strings(&["HTML", "CSS", "JavaScript", "n8n_Automation"]),
            github: Some("https://github.com/khush3707/payment-tracker".to_owned()),
            live: None,
            featured: true,
            learned: Some(strings(&[
                "Web form development and validation",
                "Workflow automation with n8n",
                "Data management in web applications",
                "UI/UX design for financial tools",
            ])),
        },
        Project {
            id: 3,
            title: "FarmSetu Platform".to_owned(),
            description: "A web platform connecting farmers with consumers, built with HTML, CSS, and JavaScript.".to_owned(),
            category: Category::Web,
            tech: strings(&["HTML", "CSS", "JavaScript", "Responsive Design"]),
            github: Some("https://github.com/khush3707/farmsetu".to_owned()),
            live: Some("https://khush3707.github.io/farmsetu".to_owned()),
            featured: true,
            learned: Some(strings(&[
                "Responsive web design principles",
                "DOM manipulation techniques",
                "Form validation",
                "User interface design",
            ])),
        },
        Project {
            id: 4,
            title: "Weather CLI App".to_owned(),
            description: "Command-line weather application that fetches data from a public API.".to_owned(),
            category: Category::Python,
            tech: strings(&["Python", "Requests", "API Integration", "CLI"]),
            github: Some("https://github.com/khush3707/weather-cli".to_owned()),
            live: None,
            featured: false,
            learned: Some(strings(&[
                "Working with REST APIs",
                "JSON data parsing",
                "Error handling in API calls",
                "Command-line argument parsing",
            ])),
        },
    ]
}
