//! Content types served to the public site and the traits that let the
//! generic content service handle all of them uniformly.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

pub mod about_page;
pub mod client;
pub mod contact;
pub mod footer;
pub mod our_work;
pub mod privacy_policy;
pub mod services;

pub use about_page::AboutPageContent;
pub use client::ClientContent;
pub use contact::ContactContent;
pub use footer::FooterContent;
pub use our_work::OurWorkContent;
pub use privacy_policy::PrivacyPolicy;
pub use services::ServicesContent;

/// A page-section schema with many stored versions, exactly one of which is
/// served to the public site.
///
/// `Default` must produce the fully-populated default payload for the section.
pub trait ContentKind:
    Serialize + DeserializeOwned + Default + Clone + fmt::Debug + Send + Sync + Unpin + 'static
{
    /// MongoDB collection holding every version of this content type.
    const COLLECTION: &'static str;

    /// Human-readable name used in responses (e.g. "About page content").
    const LABEL: &'static str;

    /// Defaulting applied only when a version is first created.
    fn apply_create_defaults(&mut self) {}

    /// Normalization applied on every save (ids, ordering, cardinality).
    fn normalize(&mut self);

    /// Required-field checks, run after normalization on every save.
    fn validate(&self) -> Vec<FieldError>;
}

/// An element of an embedded sub-list, addressed by a stable id.
pub trait SubItem: Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

/// A sub-list element with a display position.
pub trait Ordered: SubItem {
    fn order(&self) -> i32;
    fn set_order(&mut self, order: i32);
}

/// An embedded list of a content type that is editable item by item through
/// its own sub-resource routes.
pub trait SubCollection<T: ContentKind>: Send + Sync + 'static {
    type Item: SubItem;

    /// Route segment under `/:id/` (e.g. `team-members`).
    const PATH: &'static str;

    /// Human-readable item name (e.g. "Team member").
    const LABEL: &'static str;

    fn items(content: &T) -> &Vec<Self::Item>;

    fn items_mut(content: &mut T) -> &mut Vec<Self::Item>;
}

macro_rules! impl_sub_item {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::models::SubItem for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn set_id(&mut self, id: String) {
                    self.id = id;
                }
            }
        )+
    };
}

macro_rules! impl_ordered {
    ($($ty:ty),+ $(,)?) => {
        $(
            $crate::models::impl_sub_item!($ty);

            impl $crate::models::Ordered for $ty {
                fn order(&self) -> i32 {
                    self.order
                }

                fn set_order(&mut self, order: i32) {
                    self.order = order;
                }
            }
        )+
    };
}

pub(crate) use impl_ordered;
pub(crate) use impl_sub_item;

/// Generate a fresh sub-list item id.
pub fn new_item_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Give every item without an id (or with a duplicate one) a fresh id.
pub fn assign_ids<I: SubItem>(items: &mut [I]) {
    let mut seen = HashSet::new();
    for item in items.iter_mut() {
        if item.id().is_empty() || !seen.insert(item.id().to_string()) {
            let id = new_item_id();
            seen.insert(id.clone());
            item.set_id(id);
        }
    }
}

/// Stable-sort by `order` and renumber positions `1..=N`.
///
/// Items without a positive order keep their relative input order and go last.
pub fn normalize_order<I: Ordered>(items: &mut [I]) {
    items.sort_by_key(|item| {
        if item.order() > 0 {
            (0, item.order())
        } else {
            (1, 0)
        }
    });
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index as i32 + 1);
    }
}

/// `assign_ids` followed by `normalize_order`.
pub fn normalize_items<I: Ordered>(items: &mut [I]) {
    assign_ids(items);
    normalize_order(items);
}

/// Push an error for `path` when `value` is blank.
pub fn require(errors: &mut Vec<FieldError>, path: impl Into<String>, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(path, format!("{} is required", label)));
    }
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// One stored version of a content type, as persisted in MongoDB.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredContent<T> {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub content: T,
    pub is_active: bool,
    pub version: String,
    #[serde(default)]
    pub last_updated_by: Option<String>,
    pub created_at: mongodb::bson::DateTime,
    pub updated_at: mongodb::bson::DateTime,
}

impl<T: ContentKind> StoredContent<T> {
    /// A new, not yet persisted version.
    pub fn new(content: T, is_active: bool, version: String, last_updated_by: Option<String>) -> Self {
        let now = mongodb::bson::DateTime::now();
        Self {
            id: ObjectId::new(),
            content,
            is_active,
            version,
            last_updated_by,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The JSON shape of a stored version: content fields flattened next to the
/// version metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentView<T: Serialize> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub content: T,
    pub is_active: bool,
    pub version: String,
    pub last_updated_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<T: ContentKind> From<StoredContent<T>> for ContentView<T> {
    fn from(doc: StoredContent<T>) -> Self {
        Self {
            id: doc.id.to_hex(),
            content: doc.content,
            is_active: doc.is_active,
            version: doc.version,
            last_updated_by: doc.last_updated_by,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Item {
        id: String,
        order: i32,
        name: String,
    }

    impl_ordered!(Item);

    fn item(id: &str, order: i32, name: &str) -> Item {
        Item {
            id: id.to_string(),
            order,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_assign_ids_fills_blanks_and_duplicates() {
        let mut items = vec![item("", 1, "a"), item("x", 2, "b"), item("x", 3, "c")];
        assign_ids(&mut items);

        assert!(!items[0].id.is_empty());
        assert_eq!(items[1].id, "x");
        assert_ne!(items[2].id, "x");
        let unique: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_normalize_order_sorts_and_renumbers() {
        let mut items = vec![
            item("a", 20, "second"),
            item("b", 0, "unset-1"),
            item("c", 10, "first"),
            item("d", 0, "unset-2"),
        ];
        normalize_order(&mut items);

        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "unset-1", "unset-2"]);
        let orders: Vec<i32> = items.iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);
    }

    mod ordered_only {
        use serde::{Deserialize, Serialize};

        use crate::models::impl_ordered;

        #[derive(Debug, Clone, Serialize, Deserialize)]
        pub struct Row {
            pub id: String,
            pub order: i32,
        }

        impl_ordered!(Row);
    }

    #[test]
    fn test_impl_ordered_alone_provides_sub_item() {
        let mut row = ordered_only::Row {
            id: String::new(),
            order: 3,
        };
        row.set_id("row-1".into());
        row.set_order(1);
        assert_eq!(SubItem::id(&row), "row-1");
        assert_eq!(Ordered::order(&row), 1);
    }

    #[test]
    fn test_require_blank() {
        let mut errors = Vec::new();
        require(&mut errors, "name", "  ", "Name");
        require(&mut errors, "role", "CEO", "Role");
        assert_eq!(errors, vec![FieldError::new("name", "Name is required")]);
    }
}
