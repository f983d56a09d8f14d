//! Project card view-model and the surface it is rendered onto.
//!
//! A [`ProjectCard`] carries everything the grid shows for one project. The
//! browser grid and the test grid both implement [`CardSurface`]; [`render`]
//! always clears the surface before appending, so re-rendering the same input
//! never accumulates cards.

use crate::Project;
use std::borrow::Borrow;
use std::fmt::Write as _;

pub const CARD_CLASS: &str = "project-card";
pub const CARD_ANIMATION: &str = "fade-up";

const GRADIENTS: [&str; 4] = [
    "linear-gradient(135deg, #4f46e5 0%, #7c3aed 100%)",
    "linear-gradient(135deg, #0ea5e9 0%, #06b6d4 100%)",
    "linear-gradient(135deg, #10b981 0%, #059669 100%)",
    "linear-gradient(135deg, #f59e0b 0%, #d97706 100%)",
];

const ICONS: [&str; 4] = ["fa-gamepad", "fa-chart-line", "fa-leaf", "fa-cloud-sun"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardImage {
    pub gradient: &'static str,
    pub icon: &'static str,
}

impl CardImage {
    /// Palette entry for a project id, cycling every four ids.
    pub fn for_id(id: u32) -> Self {
        let idx = (id.saturating_sub(1) as usize) % GRADIENTS.len();
        Self {
            gradient: GRADIENTS[idx],
            icon: ICONS[idx % ICONS.len()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Code,
    Live,
}

impl LinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Code => "View Code",
            LinkKind::Live => "Live Demo",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            LinkKind::Code => "fab fa-github",
            LinkKind::Live => "fas fa-external-link-alt",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub kind: LinkKind,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: u32,
    pub image: CardImage,
    pub title: String,
    pub category: String,
    pub description: String,
    pub learned: Option<Vec<String>>,
    pub tech: Vec<String>,
    pub links: Vec<CardLink>,
}

impl ProjectCard {
    pub fn from_project(project: &Project) -> Self {
        let mut links = Vec::with_capacity(2);
        if let Some(href) = project.github.as_deref().filter(|h| !h.is_empty()) {
            links.push(CardLink {
                kind: LinkKind::Code,
                href: href.to_owned(),
            });
        }
        if let Some(href) = project.live.as_deref().filter(|h| !h.is_empty()) {
            links.push(CardLink {
                kind: LinkKind::Live,
                href: href.to_owned(),
            });
        }

        Self {
            id: project.id,
            image: CardImage::for_id(project.id),
            title: project.title.clone(),
            category: project.category.to_string(),
            description: project.description.clone(),
            learned: project.learned.clone(),
            tech: project.tech.clone(),
            links,
        }
    }

    /// Inner markup of the card element (the element itself is created by the surface).
    pub fn inner_html(&self) -> String {
        let mut html = String::with_capacity(1024);

        let _ = write!(
            html,
            r#"<div class="project-image"><div class="project-image-content" style="background: {}; width: 100%; height: 100%; display: flex; align-items: center; justify-content: center; color: white; font-size: 3rem;"><i class="fas {}"></i></div></div>"#,
            self.image.gradient, self.image.icon,
        );

        html.push_str(r#"<div class="project-content">"#);
        let _ = write!(
            html,
            r#"<div class="project-header"><h3 class="project-title">{}</h3><span class="project-category">{}</span></div>"#,
            escape_html(&self.title),
            escape_html(&self.category),
        );
        let _ = write!(
            html,
            r#"<p class="project-description">{}</p>"#,
            escape_html(&self.description)
        );

        if let Some(learned) = &self.learned {
            html.push_str(r#"<div class="project-learned"><h5><i class="fas fa-graduation-cap"></i> What I Learned</h5><ul role="list">"#);
            for item in learned {
                let _ = write!(html, "<li>{}</li>", escape_html(item));
            }
            html.push_str("</ul></div>");
        }

        html.push_str(r#"<div class="project-tech">"#);
        for tech in &self.tech {
            let _ = write!(html, r#"<span class="tech-tag">{}</span>"#, escape_html(tech));
        }
        html.push_str("</div>");

        html.push_str(r#"<div class="project-links">"#);
        for link in &self.links {
            let _ = write!(
                html,
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="project-link"><i class="{}"></i><span>{}</span></a>"#,
                escape_html(&link.href),
                link.kind.icon(),
                link.kind.label(),
            );
        }
        html.push_str("</div></div>");

        html
    }
}

/// Anything project cards can be drawn onto.
pub trait CardSurface {
    fn clear(&mut self);
    fn append(&mut self, card: &ProjectCard);
}

/// Replace everything on `surface` with one card per project, in order.
pub fn render<S, I, P>(surface: &mut S, projects: I)
where
    S: CardSurface + ?Sized,
    I: IntoIterator<Item = P>,
    P: Borrow<Project>,
{
    surface.clear();
    let mut count = 0usize;
    for project in projects {
        surface.append(&ProjectCard::from_project(project.borrow()));
        count += 1;
    }
    tracing::debug!(count, "rendered project cards");
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, Category, FilterKey, filter_projects};

    #[derive(Default)]
    struct MemoryGrid {
        cards: Vec<ProjectCard>,
        clears: usize,
    }

    impl CardSurface for MemoryGrid {
        fn clear(&mut self) {
            self.cards.clear();
            self.clears += 1;
        }

        fn append(&mut self, card: &ProjectCard) {
            self.cards.push(card.clone());
        }
    }

    fn bare_project(github: Option<&str>, live: Option<&str>) -> Project {
        Project {
            id: 9,
            title: "Bare".to_owned(),
            description: "no links".to_owned(),
            category: Category::Web,
            tech: vec!["HTML".to_owned()],
            github: github.map(str::to_owned),
            live: live.map(str::to_owned),
            featured: true,
            learned: None,
        }
    }

    #[test]
    fn rendered_count_and_order_follow_filter() {
        let catalog = Catalog::builtin();
        for key in FilterKey::known() {
            let selected = filter_projects(&catalog, &key);
            let mut grid = MemoryGrid::default();
            render(&mut grid, selected.iter().copied());
            let rendered: Vec<u32> = grid.cards.iter().map(|c| c.id).collect();
            let expected: Vec<u32> = selected.iter().map(|p| p.id).collect();
            assert_eq!(rendered, expected, "key {key}");
        }
    }

    #[test]
    fn rendering_twice_does_not_duplicate() {
        let catalog = Catalog::builtin();
        let selected = filter_projects(&catalog, &FilterKey::All);
        let mut grid = MemoryGrid::default();
        render(&mut grid, selected.iter().copied());
        let first = grid.cards.clone();
        render(&mut grid, selected.iter().copied());
        assert_eq!(grid.cards.len(), selected.len());
        assert_eq!(grid.cards, first);
        assert_eq!(grid.clears, 2);
    }

    #[test]
    fn link_count_follows_url_presence() {
        assert!(ProjectCard::from_project(&bare_project(None, None)).links.is_empty());

        let one = ProjectCard::from_project(&bare_project(None, Some("https://example.org")));
        assert_eq!(one.links.len(), 1);
        assert_eq!(one.links[0].kind, LinkKind::Live);
        assert_eq!(one.inner_html().matches("class=\"project-link\"").count(), 1);

        let both = ProjectCard::from_project(&bare_project(Some("https://g"), Some("https://l")));
        let kinds: Vec<LinkKind> = both.links.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LinkKind::Code, LinkKind::Live]);
    }

    #[test]
    fn image_palette_cycles_by_id() {
        assert_eq!(CardImage::for_id(1), CardImage::for_id(5));
        assert_eq!(CardImage::for_id(3).icon, "fa-leaf");
        assert_ne!(CardImage::for_id(1), CardImage::for_id(2));
    }

    #[test]
    fn learned_section_only_when_present() {
        let without = ProjectCard::from_project(&bare_project(None, None)).inner_html();
        assert!(!without.contains("What I Learned"));

        let catalog = Catalog::builtin();
        let with = ProjectCard::from_project(&catalog.projects()[0]).inner_html();
        assert!(with.contains("What I Learned"));
        assert!(with.contains("<li>Game loop implementation</li>"));
    }

    #[test]
    fn text_is_escaped() {
        let mut project = bare_project(None, None);
        project.title = "<b>Tom & Jerry</b>".to_owned();
        let html = ProjectCard::from_project(&project).inner_html();
        assert!(html.contains("&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"));
    }
}
