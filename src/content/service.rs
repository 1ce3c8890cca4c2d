use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde_json::Value;

use crate::content::pagination::{Page, PageInfo, PageQuery};
use crate::content::payload::{deep_merge, from_json, into_object, to_json, ContentPayload};
use crate::db::repository::ContentRepository;
use crate::error::AppError;
use crate::models::{new_item_id, ContentKind, StoredContent, SubCollection, SubItem};

/// Version string given to new documents that do not name one.
pub const DEFAULT_VERSION: &str = "1.0";

/// Author recorded on defaults synthesized by the server itself.
pub const SYSTEM_AUTHOR: &str = "system";

/// Versioned content operations for one content type.
///
/// Every write that leaves a document active first deactivates all of its
/// siblings, so at most one version is served at a time.
#[derive(Clone)]
pub struct ContentService<T: ContentKind> {
    repo: Arc<dyn ContentRepository<T>>,
}

/// Parse a path id, reporting malformed ids distinctly from unknown ones.
pub fn parse_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::InvalidId(format!("Invalid id format '{}'", raw)))
}

impl<T: ContentKind> ContentService<T> {
    pub fn new(repo: Arc<dyn ContentRepository<T>>) -> Self {
        Self { repo }
    }

    fn not_found(id: &ObjectId) -> AppError {
        AppError::NotFound(format!("{} '{}' not found", T::LABEL, id))
    }

    async fn load(&self, id: &ObjectId) -> Result<StoredContent<T>, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    /// List stored versions, one page at a time.
    pub async fn list_versions(&self, query: PageQuery) -> Result<Page<StoredContent<T>>, AppError> {
        let (items, total) = self.repo.list(&query).await?;
        Ok(Page {
            items,
            info: PageInfo::new(&query, total),
        })
    }

    pub async fn get_by_id(&self, raw_id: &str) -> Result<StoredContent<T>, AppError> {
        let id = parse_id(raw_id)?;
        self.load(&id).await
    }

    /// The version served to the public site.
    ///
    /// With no active version, the default document is created, persisted and
    /// returned.
    pub async fn get_active(&self) -> Result<StoredContent<T>, AppError> {
        if let Some(doc) = self.repo.find_active().await? {
            return Ok(doc);
        }

        tracing::info!(
            collection = T::COLLECTION,
            "No active {} found, creating default",
            T::LABEL
        );

        let mut content = T::default();
        content.apply_create_defaults();
        let doc = StoredContent::new(
            content,
            true,
            DEFAULT_VERSION.to_string(),
            Some(SYSTEM_AUTHOR.to_string()),
        );
        self.save(doc, true).await
    }

    /// Create a new version from a (possibly empty) JSON body.
    ///
    /// Missing fields take their defaults. The new version is active unless
    /// the body says `isActive: false`.
    pub async fn create(&self, body: Value, author: &str) -> Result<StoredContent<T>, AppError> {
        // 1. Split and check the body
        let payload = ContentPayload::parse::<T>(body)?;

        // 2. Build the content, applying create-time defaults
        let mut content: T = from_json(Value::Object(payload.content))?;
        content.apply_create_defaults();

        let doc = StoredContent::new(
            content,
            payload.meta.is_active.unwrap_or(true),
            payload
                .meta
                .version
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            Some(payload.meta.last_updated_by.unwrap_or_else(|| author.to_string())),
        );

        // 3. Normalize, validate and persist
        let saved = self.save(doc, true).await?;
        tracing::info!(
            collection = T::COLLECTION,
            id = %saved.id,
            active = saved.is_active,
            "Created {}",
            T::LABEL
        );
        Ok(saved)
    }

    /// Merge a partial JSON body into an existing version.
    pub async fn update(&self, raw_id: &str, body: Value, author: &str) -> Result<StoredContent<T>, AppError> {
        let id = parse_id(raw_id)?;
        let mut doc = self.load(&id).await?;
        let payload = ContentPayload::parse::<T>(body)?;

        let mut merged = to_json(&doc.content)?;
        deep_merge(&mut merged, Value::Object(payload.content));
        doc.content = from_json(merged)?;

        if let Some(is_active) = payload.meta.is_active {
            doc.is_active = is_active;
        }
        if let Some(version) = payload.meta.version {
            doc.version = version;
        }
        doc.last_updated_by = Some(payload.meta.last_updated_by.unwrap_or_else(|| author.to_string()));

        let saved = self.save(doc, false).await?;
        tracing::info!(collection = T::COLLECTION, id = %saved.id, "Updated {}", T::LABEL);
        Ok(saved)
    }

    /// Make `raw_id` the only active version.
    pub async fn activate_version(&self, raw_id: &str) -> Result<StoredContent<T>, AppError> {
        let id = parse_id(raw_id)?;

        // Existence is checked before any write.
        self.load(&id).await?;

        self.repo.deactivate_others(&id).await?;
        if !self.repo.mark_active(&id, DateTime::now()).await? {
            return Err(Self::not_found(&id));
        }

        tracing::info!(collection = T::COLLECTION, id = %id, "Activated {}", T::LABEL);
        self.load(&id).await
    }

    /// Permanently delete an inactive version.
    pub async fn delete(&self, raw_id: &str) -> Result<(), AppError> {
        let id = parse_id(raw_id)?;
        let doc = self.load(&id).await?;

        if doc.is_active {
            return Err(AppError::Conflict(format!(
                "Cannot delete the active {}. Activate another version first.",
                T::LABEL.to_lowercase()
            )));
        }

        if !self.repo.delete(&id).await? {
            return Err(Self::not_found(&id));
        }

        tracing::info!(collection = T::COLLECTION, id = %id, "Deleted {}", T::LABEL);
        Ok(())
    }

    /// Append an item to a sub-list. The server assigns the item id.
    pub async fn add_item<S: SubCollection<T>>(
        &self,
        raw_id: &str,
        body: Value,
        author: &str,
    ) -> Result<(StoredContent<T>, S::Item), AppError> {
        let id = parse_id(raw_id)?;
        let mut doc = self.load(&id).await?;

        let mut fields = into_object(body)?;
        fields.remove("id");
        let mut item: S::Item = from_json(Value::Object(fields))?;
        let item_id = new_item_id();
        item.set_id(item_id.clone());

        S::items_mut(&mut doc.content).push(item);
        doc.last_updated_by = Some(author.to_string());

        let saved = self.save(doc, false).await?;
        let item = find_item::<T, S>(&saved.content, &item_id)?;
        tracing::info!(collection = T::COLLECTION, id = %id, item = %item_id, "Added {}", S::LABEL);
        Ok((saved, item))
    }

    /// Merge a partial JSON body into one sub-list item.
    pub async fn update_item<S: SubCollection<T>>(
        &self,
        raw_id: &str,
        item_id: &str,
        body: Value,
        author: &str,
    ) -> Result<(StoredContent<T>, S::Item), AppError> {
        let id = parse_id(raw_id)?;
        let mut doc = self.load(&id).await?;

        let mut fields = into_object(body)?;
        fields.remove("id");

        let items = S::items_mut(&mut doc.content);
        let slot = items
            .iter_mut()
            .find(|item| item.id() == item_id)
            .ok_or_else(|| item_not_found::<T, S>(item_id))?;

        let mut merged = to_json(&*slot)?;
        deep_merge(&mut merged, Value::Object(fields));
        let mut updated: S::Item = from_json(merged)?;
        updated.set_id(item_id.to_string());
        *slot = updated;

        doc.last_updated_by = Some(author.to_string());

        let saved = self.save(doc, false).await?;
        let item = find_item::<T, S>(&saved.content, item_id)?;
        tracing::info!(collection = T::COLLECTION, id = %id, item = %item_id, "Updated {}", S::LABEL);
        Ok((saved, item))
    }

    /// Remove one sub-list item by id.
    pub async fn remove_item<S: SubCollection<T>>(
        &self,
        raw_id: &str,
        item_id: &str,
        author: &str,
    ) -> Result<StoredContent<T>, AppError> {
        let id = parse_id(raw_id)?;
        let mut doc = self.load(&id).await?;

        let items = S::items_mut(&mut doc.content);
        let before = items.len();
        items.retain(|item| item.id() != item_id);
        if items.len() == before {
            return Err(item_not_found::<T, S>(item_id));
        }

        doc.last_updated_by = Some(author.to_string());

        let saved = self.save(doc, false).await?;
        tracing::info!(collection = T::COLLECTION, id = %id, item = %item_id, "Removed {}", S::LABEL);
        Ok(saved)
    }

    /// Normalize, validate and persist a version, keeping it the sole active
    /// one if it is flagged active.
    async fn save(&self, mut doc: StoredContent<T>, is_new: bool) -> Result<StoredContent<T>, AppError> {
        // 1. Normalize and validate
        doc.content.normalize();
        let errors = doc.content.validate();
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        doc.updated_at = DateTime::now();

        // 2. Deactivate siblings
        if doc.is_active {
            self.repo.deactivate_others(&doc.id).await?;
        }

        // 3. Persist
        if is_new {
            self.repo.insert(&doc).await?;
        } else if !self.repo.replace(&doc).await? {
            return Err(Self::not_found(&doc.id));
        }

        Ok(doc)
    }
}

fn item_not_found<T: ContentKind, S: SubCollection<T>>(item_id: &str) -> AppError {
    AppError::NotFound(format!("{} '{}' not found", S::LABEL, item_id))
}

fn find_item<T: ContentKind, S: SubCollection<T>>(content: &T, item_id: &str) -> Result<S::Item, AppError> {
    S::items(content)
        .iter()
        .find(|item| item.id() == item_id)
        .cloned()
        .ok_or_else(|| item_not_found::<T, S>(item_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::InMemoryContentRepository;
    use crate::error::FieldError;
    use crate::models::about_page::TeamMembers;
    use crate::models::footer::NavigationLinkItems;
    use crate::models::{AboutPageContent, FooterContent, ServicesContent};
    use serde_json::json;

    fn service<T: ContentKind>() -> ContentService<T> {
        ContentService::new(Arc::new(InMemoryContentRepository::<T>::new()))
    }

    #[tokio::test]
    async fn test_create_defaults_and_activates() {
        let svc = service::<ServicesContent>();

        let first = svc.create(Value::Null, "admin").await.unwrap();
        assert!(first.is_active);
        assert_eq!(first.version, "1.0");
        assert_eq!(first.last_updated_by.as_deref(), Some("admin"));
        assert_eq!(first.content.header_title, "Your 360° Growth Engine");

        let second = svc.create(json!({}), "admin").await.unwrap();
        let first = svc.get_by_id(&first.id.to_hex()).await.unwrap();
        assert!(!first.is_active);
        assert_eq!(svc.get_active().await.unwrap().id, second.id);
    }

    #[tokio::test]
    async fn test_create_inactive_keeps_current_active() {
        let svc = service::<ServicesContent>();
        let active = svc.create(Value::Null, "admin").await.unwrap();
        let draft = svc
            .create(json!({ "isActive": false, "version": "2.0-draft" }), "admin")
            .await
            .unwrap();

        assert!(!draft.is_active);
        assert_eq!(draft.version, "2.0-draft");
        assert_eq!(svc.get_active().await.unwrap().id, active.id);
    }

    #[tokio::test]
    async fn test_get_active_synthesizes_and_persists_default() {
        let svc = service::<AboutPageContent>();

        let active = svc.get_active().await.unwrap();
        assert!(active.is_active);
        assert_eq!(active.last_updated_by.as_deref(), Some(SYSTEM_AUTHOR));

        let again = svc.get_active().await.unwrap();
        assert_eq!(again.id, active.id);

        let page = svc.list_versions(PageQuery::default()).await.unwrap();
        assert_eq!(page.info.total_items, 1);
    }

    #[tokio::test]
    async fn test_update_merges_without_create_defaults() {
        let svc = service::<FooterContent>();
        let created = svc.create(Value::Null, "admin").await.unwrap();
        assert_eq!(created.content.social_links.links.len(), 5);

        let updated = svc
            .update(
                &created.id.to_hex(),
                json!({
                    "companyInfo": { "name": "VV Worx" },
                    "socialLinks": { "links": [] }
                }),
                "editor",
            )
            .await
            .unwrap();

        assert_eq!(updated.content.company_info.name, "VV Worx");
        assert_eq!(updated.content.company_info.logo, "default-logo.svg");
        assert_eq!(updated.content.social_links.follow_text, "Follow Us:");
        assert!(updated.content.social_links.links.is_empty());
        assert_eq!(updated.last_updated_by.as_deref(), Some("editor"));
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_to_active_deactivates_siblings() {
        let svc = service::<ServicesContent>();
        let old = svc.create(Value::Null, "admin").await.unwrap();
        let current = svc.create(Value::Null, "admin").await.unwrap();

        svc.update(&old.id.to_hex(), json!({ "isActive": true }), "admin")
            .await
            .unwrap();

        assert!(!svc.get_by_id(&current.id.to_hex()).await.unwrap().is_active);
        assert_eq!(svc.get_active().await.unwrap().id, old.id);
    }

    #[tokio::test]
    async fn test_update_rejects_unknown_field() {
        let svc = service::<ServicesContent>();
        let doc = svc.create(Value::Null, "admin").await.unwrap();

        let result = svc
            .update(&doc.id.to_hex(), json!({ "bogus": 1 }), "admin")
            .await;
        match result {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors, vec![FieldError::new("bogus", "Unknown field")]);
            }
            other => panic!("Expected Validation error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_activate_version() {
        let svc = service::<ServicesContent>();
        let old = svc.create(Value::Null, "admin").await.unwrap();
        let current = svc.create(Value::Null, "admin").await.unwrap();

        let activated = svc.activate_version(&old.id.to_hex()).await.unwrap();
        assert!(activated.is_active);
        assert!(!svc.get_by_id(&current.id.to_hex()).await.unwrap().is_active);
    }

    #[tokio::test]
    async fn test_activate_unknown_id_changes_nothing() {
        let svc = service::<ServicesContent>();
        let current = svc.create(Value::Null, "admin").await.unwrap();

        let result = svc.activate_version(&ObjectId::new().to_hex()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(svc.get_by_id(&current.id.to_hex()).await.unwrap().is_active);
    }

    #[tokio::test]
    async fn test_malformed_id() {
        let svc = service::<ServicesContent>();
        let result = svc.get_by_id("not-an-object-id").await;
        assert!(matches!(result, Err(AppError::InvalidId(_))));
    }

    #[tokio::test]
    async fn test_delete_rules() {
        let svc = service::<ServicesContent>();
        let old = svc.create(Value::Null, "admin").await.unwrap();
        let current = svc.create(Value::Null, "admin").await.unwrap();

        let result = svc.delete(&current.id.to_hex()).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));

        svc.delete(&old.id.to_hex()).await.unwrap();
        let result = svc.get_by_id(&old.id.to_hex()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_validation_error() {
        let svc = service::<AboutPageContent>();
        let result = svc
            .create(
                json!({ "teamSection": { "teamMembers": [{ "name": "", "role": "CEO", "image": "/a.png" }] } }),
                "admin",
            )
            .await;

        match result {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors[0].field, "teamSection.teamMembers[0].name");
            }
            other => panic!("Expected Validation error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_sub_item_lifecycle() {
        let svc = service::<AboutPageContent>();
        let doc = svc.create(Value::Null, "admin").await.unwrap();
        let id = doc.id.to_hex();

        // Add
        let (saved, member) = svc
            .add_item::<TeamMembers>(
                &id,
                json!({ "id": "client-chosen", "name": "Asha", "role": "Producer", "image": "/asha.png" }),
                "admin",
            )
            .await
            .unwrap();
        assert_ne!(member.id, "client-chosen");
        assert_eq!(member.order, 5);
        assert!(member.is_active);
        assert_eq!(saved.content.team_section.team_members.len(), 5);

        // Update
        let (_, updated) = svc
            .update_item::<TeamMembers>(&id, &member.id, json!({ "role": "Head of Production" }), "admin")
            .await
            .unwrap();
        assert_eq!(updated.name, "Asha");
        assert_eq!(updated.role, "Head of Production");
        assert_eq!(updated.id, member.id);

        // Remove
        let saved = svc
            .remove_item::<TeamMembers>(&id, &member.id, "admin")
            .await
            .unwrap();
        assert_eq!(saved.content.team_section.team_members.len(), 4);

        let result = svc
            .remove_item::<TeamMembers>(&id, &member.id, "admin")
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_item_ids_stable_after_removal() {
        let svc = service::<FooterContent>();
        let doc = svc.create(Value::Null, "admin").await.unwrap();
        let id = doc.id.to_hex();
        let links = doc.content.navigation_menu.links.clone();

        svc.remove_item::<NavigationLinkItems>(&id, &links[0].id, "admin")
            .await
            .unwrap();

        let (_, updated) = svc
            .update_item::<NavigationLinkItems>(&id, &links[2].id, json!({ "text": "About" }), "admin")
            .await
            .unwrap();
        assert_eq!(updated.text, "About");
        assert_eq!(updated.url, "/About");
        assert_eq!(updated.order, 2);
    }
}
