//! Template records and the repository interface.
//!
//! The rendering engine never touches persistence: templates flow into it
//! purely as parameters. This module is the explicit repository boundary
//! its callers inject, with an in-memory implementation that works in any
//! environment.

use crate::error::StoreError;
use hoadon_compose::Margins;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

/// A named, typed print document definition.
///
/// `content` is the template body in the engine's expression syntax.
/// Every `{{#each X}}` is expected to have a matching `{{/each}}`;
/// unmatched markers degrade to empty output rather than erroring.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    /// Document type, e.g. `"invoice"` or `"shipping"`. Open set.
    #[serde(rename = "type")]
    pub template_type: String,
    /// Key into the paper preset table; unknown keys render on A4.
    pub paper_size: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margins>,
    pub content: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Repository interface for stored templates.
///
/// No versioning: `update` replaces in place, last write wins.
pub trait TemplateStore: Send + Sync {
    fn get(&self, id: &str) -> Result<Template, StoreError>;
    fn list(&self) -> Result<Vec<Template>, StoreError>;
    /// Templates of one document type, for "which invoice layouts exist"
    /// queries.
    fn list_by_type(&self, template_type: &str) -> Result<Vec<Template>, StoreError>;
    fn create(&self, template: Template) -> Result<(), StoreError>;
    fn update(&self, template: Template) -> Result<(), StoreError>;
    fn delete(&self, id: &str) -> Result<(), StoreError>;
    /// Copies an existing template under a caller-supplied fresh id.
    fn duplicate(&self, id: &str, new_id: &str) -> Result<Template, StoreError>;
}

/// An in-memory template store.
///
/// The simplest store; works in any environment including WASM hosts.
#[derive(Debug, Default)]
pub struct InMemoryTemplateStore {
    templates: RwLock<HashMap<String, Template>>,
}

impl InMemoryTemplateStore {
    pub fn new() -> Self {
        Self { templates: RwLock::new(HashMap::new()) }
    }

    pub fn len(&self) -> usize {
        self.templates.read().map(|t| t.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.templates.read().map(|t| t.is_empty()).unwrap_or(true)
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn get(&self, id: &str) -> Result<Template, StoreError> {
        let templates = self
            .templates
            .read()
            .map_err(|_| StoreError::Unavailable("template store lock poisoned".to_string()))?;
        templates
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<Template>, StoreError> {
        let templates = self
            .templates
            .read()
            .map_err(|_| StoreError::Unavailable("template store lock poisoned".to_string()))?;
        let mut all: Vec<Template> = templates.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    fn list_by_type(&self, template_type: &str) -> Result<Vec<Template>, StoreError> {
        let mut matching = self.list()?;
        matching.retain(|t| t.template_type == template_type);
        Ok(matching)
    }

    fn create(&self, template: Template) -> Result<(), StoreError> {
        let mut templates = self
            .templates
            .write()
            .map_err(|_| StoreError::Unavailable("template store lock poisoned".to_string()))?;
        if templates.contains_key(&template.id) {
            return Err(StoreError::Duplicate(template.id));
        }
        log::debug!("template '{}' created", template.id);
        templates.insert(template.id.clone(), template);
        Ok(())
    }

    fn update(&self, template: Template) -> Result<(), StoreError> {
        let mut templates = self
            .templates
            .write()
            .map_err(|_| StoreError::Unavailable("template store lock poisoned".to_string()))?;
        if !templates.contains_key(&template.id) {
            return Err(StoreError::NotFound(template.id));
        }
        templates.insert(template.id.clone(), template);
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut templates = self
            .templates
            .write()
            .map_err(|_| StoreError::Unavailable("template store lock poisoned".to_string()))?;
        templates
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn duplicate(&self, id: &str, new_id: &str) -> Result<Template, StoreError> {
        let mut copy = self.get(id)?;
        copy.id = new_id.to_string();
        copy.name = format!("{} (copy)", copy.name);
        self.create(copy.clone())?;
        Ok(copy)
    }
}
