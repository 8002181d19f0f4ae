//! The host page: named containers that sheets are rendered into.

use log::{debug, info, warn};

use crate::error::{GridpadError, Result};
use crate::settings::Settings;
use crate::sheet::Sheet;

/// Id of the container the startup routine renders into.
pub const DEFAULT_CONTAINER: &str = "spreadsheet";

/// A named element that can hold rendered sheets.
#[derive(Debug)]
pub struct Container {
    id: String,
    children: Vec<Sheet>,
}

impl Container {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn children(&self) -> &[Sheet] {
        &self.children
    }
}

/// A page holding containers in insertion order.
#[derive(Debug, Default)]
pub struct Page {
    containers: Vec<Container>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty container. An existing container with the same id is kept as is.
    pub fn add_container(&mut self, id: &str) -> &mut Container {
        let index = match self.containers.iter().position(|c| c.id == id) {
            Some(index) => index,
            None => {
                self.containers.push(Container {
                    id: id.to_string(),
                    children: Vec::new(),
                });
                self.containers.len() - 1
            }
        };
        &mut self.containers[index]
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.id == id)
    }

    /// The first sheet rendered into container `id`.
    pub fn sheet(&self, id: &str) -> Option<&Sheet> {
        self.container(id).and_then(|c| c.children.first())
    }

    pub fn sheet_mut(&mut self, id: &str) -> Option<&mut Sheet> {
        self.container_mut(id).and_then(|c| c.children.first_mut())
    }
}

impl Sheet {
    /// Append this sheet to the container named `container_id`.
    pub fn render(self, page: &mut Page, container_id: &str) -> Result<()> {
        let Some(container) = page.container_mut(container_id) else {
            warn!("render: no container {:?}", container_id);
            return Err(GridpadError::ContainerNotFound(container_id.to_string()));
        };
        container.children.push(self);
        debug!("rendered sheet into {:?}", container_id);
        Ok(())
    }
}

/// Build the default sheet and render it into a fresh page.
pub fn startup() -> Page {
    startup_with(&Settings::default())
}

/// Build a sheet from `settings` and render it into a fresh page.
pub fn startup_with(settings: &Settings) -> Page {
    info!(
        "starting {}x{} sheet, unresolved references: {:?}",
        settings.dimensions.columns, settings.dimensions.rows, settings.unresolved
    );
    let mut page = Page::new();
    page.add_container(DEFAULT_CONTAINER);
    if let Err(e) = Sheet::from_settings(settings).render(&mut page, DEFAULT_CONTAINER) {
        warn!("startup: {}", e);
    }
    page
}
