//! Permission selection editing
//!
//! A user's grants are a set of opaque permission ids. The editor changes
//! that set in three ways, each a pure `(selected, edit) -> selected'`
//! transform:
//!
//! - [`toggle_one`]: flip a single id
//! - [`toggle_category`]: tri-state checkbox over every id in a category
//! - [`apply_template`]: replace the selection with a predefined grant
//!
//! None of these can fail. Whether an empty selection may be saved is the
//! caller's business.
//!
//! Templates are tagged: [`Template::AllPermissions`] grants the whole
//! catalog, [`Template::Explicit`] grants exactly its ids, even when that
//! list is empty. [`apply_template_ids`] keeps the older array form, where
//! an empty array meant "everything".

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A selection of permission ids
pub type PermissionSet = BTreeSet<String>;

/// Flip `id`: remove it if present, add it otherwise
pub fn toggle_one(selected: &PermissionSet, id: &str) -> PermissionSet {
    let mut next = selected.clone();
    if !next.remove(id) {
        next.insert(id.to_string());
    }
    next
}

/// How much of a category is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Coverage {
    None,
    Partial,
    Full,
}

impl Coverage {
    /// Checkbox glyph for terminal output
    pub fn symbol(self) -> &'static str {
        match self {
            Coverage::None => "[ ]",
            Coverage::Partial => "[-]",
            Coverage::Full => "[x]",
        }
    }
}

/// Coverage of `ids_in_category` by `selected`; an empty category is `None`
pub fn category_coverage<S: AsRef<str>>(
    selected: &PermissionSet,
    ids_in_category: &[S],
) -> Coverage {
    let present = ids_in_category
        .iter()
        .filter(|id| selected.contains(id.as_ref()))
        .count();

    if present == 0 {
        Coverage::None
    } else if present == ids_in_category.len() {
        Coverage::Full
    } else {
        Coverage::Partial
    }
}

/// Toggle a whole category at once
///
/// Decided on the coverage *before* the edit: a fully selected category is
/// cleared, a partially selected or unselected one is filled. Ids outside
/// the category are untouched.
pub fn toggle_category<S: AsRef<str>>(
    selected: &PermissionSet,
    ids_in_category: &[S],
) -> PermissionSet {
    let mut next = selected.clone();
    let coverage = category_coverage(selected, ids_in_category);

    if coverage == Coverage::Full {
        for id in ids_in_category {
            next.remove(id.as_ref());
        }
    } else {
        next.extend(ids_in_category.iter().map(|id| id.as_ref().to_string()));
    }

    tracing::trace!(
        ?coverage,
        category_size = ids_in_category.len(),
        before = selected.len(),
        after = next.len(),
        "toggled permission category"
    );
    next
}

/// What a template grants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "ids", rename_all = "snake_case")]
pub enum Template {
    /// Every id in the catalog
    AllPermissions,
    /// Exactly these ids
    Explicit(Vec<String>),
}

impl Template {
    /// Read the legacy array form, where `[]` meant "all permissions"
    pub fn from_legacy_ids<S: AsRef<str>>(ids: &[S]) -> Self {
        if ids.is_empty() {
            Template::AllPermissions
        } else {
            Template::Explicit(ids.iter().map(|id| id.as_ref().to_string()).collect())
        }
    }
}

/// Replace the selection with what `template` grants
///
/// The previous selection does not leak into the result.
pub fn apply_template<S: AsRef<str>>(
    selected: &PermissionSet,
    template: &Template,
    full_catalog_ids: &[S],
) -> PermissionSet {
    let next: PermissionSet = match template {
        Template::AllPermissions => full_catalog_ids
            .iter()
            .map(|id| id.as_ref().to_string())
            .collect(),
        Template::Explicit(ids) => ids.iter().cloned().collect(),
    };

    tracing::debug!(
        all = matches!(template, Template::AllPermissions),
        before = selected.len(),
        after = next.len(),
        "applied permission template"
    );
    next
}

/// [`apply_template`] over the legacy array form; `[]` grants the catalog
pub fn apply_template_ids<S: AsRef<str>, T: AsRef<str>>(
    selected: &PermissionSet,
    template_ids: &[S],
    full_catalog_ids: &[T],
) -> PermissionSet {
    apply_template(
        selected,
        &Template::from_legacy_ids(template_ids),
        full_catalog_ids,
    )
}

/// One grantable capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Permission {
    /// Stable identifier, e.g. `eventos.create`
    pub id: String,

    /// Label shown next to the checkbox
    #[serde(default)]
    pub name: String,

    /// Group toggled together by the category checkbox
    pub category: String,

    /// Application module the permission belongs to
    #[serde(default)]
    pub module: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The full list of grantable permissions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PermissionCatalog {
    permissions: Vec<Permission>,
}

/// Coverage of one category, as shown in the editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CategoryCoverage {
    pub category: String,
    pub coverage: Coverage,
    pub selected: usize,
    pub total: usize,
}

impl PermissionCatalog {
    pub fn new(permissions: Vec<Permission>) -> Self {
        Self { permissions }
    }

    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Every id, in catalog order
    pub fn ids(&self) -> Vec<String> {
        self.permissions.iter().map(|p| p.id.clone()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.permissions.iter().any(|p| p.id == id)
    }

    pub fn ids_in_category(&self, category: &str) -> Vec<String> {
        self.permissions
            .iter()
            .filter(|p| p.category == category)
            .map(|p| p.id.clone())
            .collect()
    }

    /// Category names in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        first_seen(self.permissions.iter().map(|p| p.category.as_str()))
    }

    /// Module names in first-seen order, blanks skipped
    pub fn modules(&self) -> Vec<&str> {
        first_seen(
            self.permissions
                .iter()
                .map(|p| p.module.as_str())
                .filter(|m| !m.is_empty()),
        )
    }

    /// Selected ids the catalog does not know about
    pub fn unknown_ids(&self, selected: &PermissionSet) -> Vec<String> {
        selected
            .iter()
            .filter(|id| !self.contains(id))
            .cloned()
            .collect()
    }

    pub fn coverage_by_category(&self, selected: &PermissionSet) -> Vec<CategoryCoverage> {
        self.categories()
            .into_iter()
            .map(|category| {
                let ids = self.ids_in_category(category);
                CategoryCoverage {
                    category: category.to_string(),
                    coverage: category_coverage(selected, &ids),
                    selected: ids.iter().filter(|id| selected.contains(*id)).count(),
                    total: ids.len(),
                }
            })
            .collect()
    }
}

fn first_seen<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = BTreeSet::new();
    items.filter(|item| seen.insert(*item)).collect()
}

/// A named template as stored in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PermissionTemplate {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub grant: Template,
}

impl PermissionTemplate {
    pub fn apply(&self, selected: &PermissionSet, catalog: &PermissionCatalog) -> PermissionSet {
        apply_template(selected, &self.grant, &catalog.ids())
    }
}

/// One edit made in the permission editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEdit {
    Toggle(String),
    ToggleCategory(String),
    ApplyTemplate(Template),
}

/// Apply one edit against `catalog`
///
/// Toggling a category the catalog does not have changes nothing.
pub fn reduce(
    selected: &PermissionSet,
    edit: &SelectionEdit,
    catalog: &PermissionCatalog,
) -> PermissionSet {
    match edit {
        SelectionEdit::Toggle(id) => toggle_one(selected, id),
        SelectionEdit::ToggleCategory(category) => {
            toggle_category(selected, &catalog.ids_in_category(category))
        }
        SelectionEdit::ApplyTemplate(template) => {
            apply_template(selected, template, &catalog.ids())
        }
    }
}

/// Apply edits in order
pub fn reduce_all<'a>(
    selected: &PermissionSet,
    edits: impl IntoIterator<Item = &'a SelectionEdit>,
    catalog: &PermissionCatalog,
) -> PermissionSet {
    edits
        .into_iter()
        .fold(selected.clone(), |acc, edit| reduce(&acc, edit, catalog))
}
