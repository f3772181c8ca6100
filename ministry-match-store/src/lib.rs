//! Organization-scoped storage for opportunities and member profiles.
//!
//! In-memory behind a `tokio::sync::RwLock`; the service keeps relational
//! persistence outside this repository, so this crate is the seam a
//! database-backed implementation would slot into. Referential validation
//! of catalog keys is the service layer's job, not the store's.

pub mod error;
pub mod models;

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

pub use error::StoreError;
pub use models::{MemberProfile, NewOpportunity, Opportunity};

#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    next_opportunity_id: u64,
    opportunities: BTreeMap<u64, Opportunity>,
    /// keyed by (organization, member)
    profiles: BTreeMap<(String, String), MemberProfile>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create_opportunity(
        &self,
        organization: &str,
        new: NewOpportunity,
    ) -> Opportunity {
        let mut inner = self.inner.write().await;
        inner.next_opportunity_id += 1;
        let opportunity = Opportunity {
            id: inner.next_opportunity_id,
            organization: organization.to_owned(),
            title: new.title,
            description: new.description,
            capacity: new.capacity,
            schedule: new.schedule,
            required_gifts: new.required_gifts,
            preferred_gifts: new.preferred_gifts,
            required_abilities: new.required_abilities,
            preferred_abilities: new.preferred_abilities,
        };
        inner.opportunities.insert(opportunity.id, opportunity.clone());
        opportunity
    }

    pub async fn update_opportunity(
        &self,
        organization: &str,
        id: u64,
        new: NewOpportunity,
    ) -> Result<Opportunity, StoreError> {
        let mut inner = self.inner.write().await;
        let existing = inner
            .opportunities
            .get_mut(&id)
            .filter(|opportunity| opportunity.organization == organization)
            .ok_or(StoreError::UnknownOpportunity(id))?;
        existing.title = new.title;
        existing.description = new.description;
        existing.capacity = new.capacity;
        existing.schedule = new.schedule;
        existing.required_gifts = new.required_gifts;
        existing.preferred_gifts = new.preferred_gifts;
        existing.required_abilities = new.required_abilities;
        existing.preferred_abilities = new.preferred_abilities;
        Ok(existing.clone())
    }

    pub async fn delete_opportunity(
        &self,
        organization: &str,
        id: u64,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if inner
            .opportunities
            .get(&id)
            .is_some_and(|opportunity| opportunity.organization == organization)
        {
            inner.opportunities.remove(&id);
            Ok(())
        } else {
            Err(StoreError::UnknownOpportunity(id))
        }
    }

    pub async fn opportunity(
        &self,
        organization: &str,
        id: u64,
    ) -> Result<Opportunity, StoreError> {
        self.inner
            .read()
            .await
            .opportunities
            .get(&id)
            .filter(|opportunity| opportunity.organization == organization)
            .cloned()
            .ok_or(StoreError::UnknownOpportunity(id))
    }

    /// All opportunities of one organization, in insertion (id) order.
    pub async fn opportunities(&self, organization: &str) -> Vec<Opportunity> {
        self.inner
            .read()
            .await
            .opportunities
            .values()
            .filter(|opportunity| opportunity.organization == organization)
            .cloned()
            .collect()
    }

    pub async fn put_profile(&self, organization: &str, member: &str, profile: MemberProfile) {
        self.inner
            .write()
            .await
            .profiles
            .insert((organization.to_owned(), member.to_owned()), profile);
    }

    pub async fn profile(
        &self,
        organization: &str,
        member: &str,
    ) -> Result<MemberProfile, StoreError> {
        self.inner
            .read()
            .await
            .profiles
            .get(&(organization.to_owned(), member.to_owned()))
            .cloned()
            .ok_or_else(|| StoreError::ProfileNotFound(member.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opportunity(title: &str) -> NewOpportunity {
        NewOpportunity {
            title: title.to_owned(),
            description: String::new(),
            capacity: None,
            schedule: None,
            required_gifts: vec!["TEACHING".to_owned()],
            preferred_gifts: vec![],
            required_abilities: vec![],
            preferred_abilities: vec![],
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let store = Store::new();
        let first = store.create_opportunity("grace", opportunity("Youth")).await;
        let second = store.create_opportunity("grace", opportunity("Choir")).await;
        assert!(second.id > first.id);
        assert_eq!(first.organization, "grace");
    }

    #[tokio::test]
    async fn listing_is_scoped_per_organization() {
        let store = Store::new();
        store.create_opportunity("grace", opportunity("Youth")).await;
        store.create_opportunity("hope", opportunity("Kitchen")).await;

        let grace = store.opportunities("grace").await;
        assert_eq!(grace.len(), 1);
        assert_eq!(grace[0].title, "Youth");
        assert_eq!(store.opportunities("hope").await.len(), 1);
        assert!(store.opportunities("other").await.is_empty());
    }

    #[tokio::test]
    async fn lookup_refuses_foreign_organizations() {
        let store = Store::new();
        let created = store.create_opportunity("grace", opportunity("Youth")).await;
        assert_eq!(
            store.opportunity("hope", created.id).await,
            Err(StoreError::UnknownOpportunity(created.id))
        );
        assert_eq!(store.opportunity("grace", created.id).await, Ok(created));
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_the_id() {
        let store = Store::new();
        let created = store.create_opportunity("grace", opportunity("Youth")).await;
        let mut replacement = opportunity("Youth Band");
        replacement.capacity = Some(8);
        let updated = store
            .update_opportunity("grace", created.id, replacement)
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Youth Band");
        assert_eq!(updated.capacity, Some(8));
    }

    #[tokio::test]
    async fn delete_removes_only_within_the_organization() {
        let store = Store::new();
        let created = store.create_opportunity("grace", opportunity("Youth")).await;
        assert_eq!(
            store.delete_opportunity("hope", created.id).await,
            Err(StoreError::UnknownOpportunity(created.id))
        );
        store.delete_opportunity("grace", created.id).await.unwrap();
        assert!(store.opportunities("grace").await.is_empty());
    }

    #[tokio::test]
    async fn put_profile_replaces_the_previous_profile() {
        let store = Store::new();
        store
            .put_profile(
                "grace",
                "ada",
                MemberProfile {
                    gifts: vec!["MERCY".to_owned()],
                    abilities: vec!["COOKING".to_owned()],
                    gift_totals: vec![],
                },
            )
            .await;
        let replacement = MemberProfile {
            gifts: vec!["SHEPHERDING".to_owned()],
            abilities: vec!["DRIVING".to_owned()],
            gift_totals: vec![],
        };
        store.put_profile("grace", "ada", replacement.clone()).await;
        assert_eq!(store.profile("grace", "ada").await, Ok(replacement));
    }

    #[tokio::test]
    async fn profile_roundtrip_and_missing_profile() {
        let store = Store::new();
        let profile = MemberProfile {
            gifts: vec!["MERCY".to_owned()],
            abilities: vec!["COOKING".to_owned()],
            gift_totals: vec![],
        };
        store.put_profile("grace", "ada", profile.clone()).await;
        assert_eq!(store.profile("grace", "ada").await, Ok(profile));
        assert_eq!(
            store.profile("grace", "grace-lee").await,
            Err(StoreError::ProfileNotFound("grace-lee".to_owned()))
        );
        assert_eq!(
            store.profile("hope", "ada").await,
            Err(StoreError::ProfileNotFound("ada".to_owned()))
        );
    }
}
