//! In-memory fakes shared by the flow tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use portal_core::error::AppError;
use portal_core::result::AppResult;
use portal_core::traits::storage::{ObjectEntry, ObjectStore};
use portal_database::repositories::portal::PortalStore;
use portal_entity::portal::{CreatePortal, Portal};

/// In-memory portal store enforcing slug uniqueness under a single lock.
#[derive(Debug, Default)]
pub(crate) struct InMemoryPortalStore {
    portals: Mutex<Vec<Portal>>,
    always_conflict: bool,
}

impl InMemoryPortalStore {
    /// A store whose every insert reports a uniqueness conflict.
    pub(crate) fn always_conflict() -> Self {
        Self {
            portals: Mutex::new(Vec::new()),
            always_conflict: true,
        }
    }

    pub(crate) fn insert(&self, portal: Portal) {
        self.portals.lock().unwrap().push(portal);
    }
}

#[async_trait]
impl PortalStore for InMemoryPortalStore {
    async fn create(&self, data: &CreatePortal) -> AppResult<Portal> {
        if self.always_conflict {
            return Err(AppError::conflict(format!(
                "Slug '{}' already exists",
                data.slug
            )));
        }

        let mut portals = self.portals.lock().unwrap();
        if portals.iter().any(|p| p.slug == data.slug) {
            return Err(AppError::conflict(format!(
                "Slug '{}' already exists",
                data.slug
            )));
        }

        let portal = Portal {
            id: Uuid::new_v4(),
            client_name: data.client_name.clone(),
            client_email: data.client_email.clone(),
            password_hash: data.password_hash.clone(),
            file_url: data.file_url.clone(),
            slug: data.slug.clone(),
            created_at: Utc::now(),
            expires_at: data.expires_at,
        };
        portals.push(portal.clone());
        Ok(portal)
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Portal>> {
        Ok(self
            .portals
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug == slug)
            .cloned())
    }
}

/// Object-store fake with switchable failure modes.
#[derive(Debug, Default)]
pub(crate) struct FakeObjectStore {
    pub(crate) fail_sign: bool,
    pub(crate) fail_list: bool,
    pub(crate) entries: Vec<ObjectEntry>,
}

#[async_trait]
impl ObjectStore for FakeObjectStore {
    async fn create_signed_url(
        &self,
        bucket: &str,
        path: &str,
        expires_in_secs: u64,
    ) -> AppResult<String> {
        if self.fail_sign {
            return Err(AppError::storage("sign backend down"));
        }
        Ok(format!(
            "https://x.supabase.co/storage/v1/object/sign/{bucket}/{path}?token=t{expires_in_secs}"
        ))
    }

    async fn list(&self, _bucket: &str, _prefix: &str) -> AppResult<Vec<ObjectEntry>> {
        if self.fail_list {
            return Err(AppError::storage("list backend down"));
        }
        Ok(self.entries.clone())
    }
}
