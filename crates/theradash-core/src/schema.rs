//! Category schema: the ordered category configuration for stacked charts.

use crate::color::AccentColor;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// One stacked-chart category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    /// Key identifying the category inside a bucket's value map
    pub key: String,
    /// Display label
    pub label: String,
    /// Segment color token
    pub color: AccentColor,
}

impl CategoryDescriptor {
    /// Create a new category descriptor.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>, color: AccentColor) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            color,
        }
    }
}

/// Ordered category configuration for a stacked series.
///
/// Sequence order is the stacking order: the first category renders at the
/// bottom of the stack, the last at the top. Keys are unique and the schema
/// is never empty; both invariants are enforced at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<CategoryDescriptor>",
    into = "Vec<CategoryDescriptor>"
)]
pub struct CategorySchema {
    categories: Vec<CategoryDescriptor>,
}

impl CategorySchema {
    /// Create a schema from an ordered list of descriptors.
    ///
    /// Fails on an empty list or a duplicate key.
    pub fn new(categories: Vec<CategoryDescriptor>) -> Result<Self, ValidationError> {
        if categories.is_empty() {
            return Err(ValidationError::EmptySchema);
        }
        for (i, descriptor) in categories.iter().enumerate() {
            if categories[..i].iter().any(|d| d.key == descriptor.key) {
                return Err(ValidationError::DuplicateCategory(descriptor.key.clone()));
            }
        }
        Ok(Self { categories })
    }

    /// Get the categories in stacking order (bottom first).
    #[must_use]
    pub fn categories(&self) -> &[CategoryDescriptor] {
        &self.categories
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the schema is empty (never true for a constructed schema).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Look up a descriptor by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CategoryDescriptor> {
        self.categories.iter().find(|d| d.key == key)
    }

    /// Stacking position of a key (0 = bottom).
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.categories.iter().position(|d| d.key == key)
    }

    /// Whether the schema defines a key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Iterate over category keys in stacking order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|d| d.key.as_str())
    }
}

impl Default for CategorySchema {
    /// The platform revenue schema: therapists (bottom), sessions, gaming,
    /// enterprise (top).
    fn default() -> Self {
        Self {
            categories: vec![
                CategoryDescriptor::new("therapists", "Therapists", AccentColor::Blue),
                CategoryDescriptor::new("sessions", "Sessions", AccentColor::Green),
                CategoryDescriptor::new("gaming", "Gaming", AccentColor::Purple),
                CategoryDescriptor::new("enterprise", "Enterprise", AccentColor::Orange),
            ],
        }
    }
}

impl TryFrom<Vec<CategoryDescriptor>> for CategorySchema {
    type Error = ValidationError;

    fn try_from(categories: Vec<CategoryDescriptor>) -> Result<Self, Self::Error> {
        Self::new(categories)
    }
}

impl From<CategorySchema> for Vec<CategoryDescriptor> {
    fn from(schema: CategorySchema) -> Self {
        schema.categories
    }
}
