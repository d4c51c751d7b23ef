use chrono::{DateTime, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, DomainResult, Entity, EntityId, Timestamps};

/// Category identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub EntityId);

impl CategoryId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for CategoryId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Derive a URL slug from a display name.
///
/// Lowercase, alphanumeric runs joined by single hyphens; everything else is
/// treated as a separator.
pub(crate) fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_sep = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_sep = true;
        }
    }
    slug
}

/// Catalog category: a named grouping of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    slug: String,
    #[serde(flatten)]
    timestamps: Timestamps,
}

impl Category {
    /// Create a category, deriving the slug from the name.
    pub fn create(id: CategoryId, name: &str, now: DateTime<Utc>) -> DomainResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("category name is required"));
        }

        Ok(Category {
            id,
            name: name.to_string(),
            slug: slugify(name),
            timestamps: Timestamps::now(now),
        })
    }

    pub fn id_typed(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.timestamps.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.timestamps.updated_at
    }

    /// Rename the category. Re-derives the slug and touches `updated_at`.
    pub fn rename(&mut self, name: &str, now: DateTime<Utc>) -> DomainResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("category name is required"));
        }
        self.name = name.to_string();
        self.slug = slugify(name);
        self.timestamps.touch(now);
        Ok(())
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_category_id() -> CategoryId {
        CategoryId::new(EntityId::new())
    }

    #[test]
    fn create_derives_slug_from_name() {
        let cat = Category::create(test_category_id(), "Office Chairs", Utc::now()).unwrap();
        assert_eq!(cat.name(), "Office Chairs");
        assert_eq!(cat.slug(), "office-chairs");
    }

    #[test]
    fn create_rejects_blank_name() {
        let err = Category::create(test_category_id(), "   ", Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rename_reslugs_and_touches_updated_at() {
        let t0 = Utc::now();
        let mut cat = Category::create(test_category_id(), "Books", t0).unwrap();
        let t1 = t0 + chrono::Duration::seconds(3);

        cat.rename("E-Books & Audio", t1).unwrap();
        assert_eq!(cat.slug(), "e-books-audio");
        assert_eq!(cat.created_at(), t0);
        assert_eq!(cat.updated_at(), t1);
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Home --  Garden!  "), "home-garden");
        assert_eq!(slugify("Déjà Vu"), "déjà-vu");
    }
}
