//! Project grid rendering and the filter bar.

use crate::dom::{self, Elements};
use crate::state;
use folio_catalog::card::{CARD_ANIMATION, CARD_CLASS};
use folio_catalog::{CardSurface, FilterKey, Project, ProjectCard, filter_projects, render};
use web_sys::Element;

/// `#projectsGrid` as a card surface.
pub struct GridSurface<'a> {
    grid: &'a Element,
}

impl<'a> GridSurface<'a> {
    pub fn new(grid: &'a Element) -> Self {
        Self { grid }
    }
}

impl CardSurface for GridSurface<'_> {
    fn clear(&mut self) {
        self.grid.set_inner_html("");
    }

    fn append(&mut self, card: &ProjectCard) {
        let el = match dom::create_element("div") {
            Ok(el) => el,
            Err(e) => {
                tracing::warn!(id = card.id, error = ?e, "could not create project card");
                return;
            }
        };
        el.set_class_name(CARD_CLASS);
        let _ = el.set_attribute("data-aos", CARD_ANIMATION);
        el.set_inner_html(&card.inner_html());
        if let Err(e) = self.grid.append_child(&el) {
            tracing::warn!(id = card.id, error = ?e, "could not append project card");
        }
    }
}

/// Re-render the grid for `key`.
pub fn show(els: &Elements, key: FilterKey) {
    let selected: Vec<Project> = state::with(|s| {
        filter_projects(&s.catalog, &key)
            .into_iter()
            .cloned()
            .collect()
    });
    render(&mut GridSurface::new(&els.projects_grid), &selected);
    state::set_active_filter(key);
}

/// Initial view: featured projects only.
pub fn init(els: &Elements) {
    show(els, FilterKey::All);
}

/// Filter button click: move the `active` marker, then re-render.
pub fn on_filter_click(els: &Elements, button: &Element) {
    for b in &els.filter_buttons {
        dom::toggle_class(b, "active", dom::same_node(b, button));
    }
    let raw = button.get_attribute("data-filter").unwrap_or_default();
    let key = FilterKey::parse(&raw);
    if let FilterKey::Unknown(_) = key {
        tracing::debug!(filter = %raw, "unknown filter key, showing all featured projects");
    }
    show(els, key);
}
