//! In-memory repository adapter

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError, Record, Repository,
    SequenceId,
};

#[derive(Debug)]
struct State<R> {
    /// Newest first
    records: Vec<R>,
    /// Highest sequence number ever handed out or seeded
    high_water: u32,
}

/// A [`Repository`] holding its records in a shared `Vec`
///
/// Clones share the same records.
#[derive(Debug)]
pub struct InMemoryRepository<R: Record> {
    state: Arc<RwLock<State<R>>>,
}

impl<R: Record> Clone for InMemoryRepository<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<R: Record> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self::with_records(Vec::new())
    }
}

impl<R: Record> InMemoryRepository<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `records` in the given order
    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                records,
                high_water: 0,
            })),
        }
    }

    /// Counts the records accepted by `predicate`
    pub async fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&R) -> bool,
    {
        self.state.read().await.records.iter().filter(|r| predicate(r)).count()
    }

    /// Applies `change` to one record under a single write lock
    ///
    /// The record is only replaced when `change` succeeds.
    pub async fn modify<F, E>(&self, id: &R::Id, change: F) -> Result<R, E>
    where
        F: FnOnce(&mut R) -> Result<(), E>,
        E: From<PortError>,
    {
        let mut state = self.state.write().await;
        let slot = state
            .records
            .iter_mut()
            .find(|r| &r.id() == id)
            .ok_or_else(|| PortError::not_found(R::ENTITY, id))?;

        let mut updated = slot.clone();
        change(&mut updated)?;
        *slot = updated.clone();
        Ok(updated)
    }

    /// Runs `change` over every record under a single write lock
    pub async fn modify_all<F, T>(&self, change: F) -> T
    where
        F: FnOnce(&mut [R]) -> T,
    {
        let mut state = self.state.write().await;
        change(state.records.as_mut_slice())
    }
}

impl<R> InMemoryRepository<R>
where
    R: Record,
    R::Id: SequenceId,
{
    /// Creates a repository whose id sequence continues after the highest seeded id
    pub fn seeded(records: Vec<R>) -> Self {
        let high_water = records.iter().map(|r| r.id().sequence()).max().unwrap_or(0);
        Self {
            state: Arc::new(RwLock::new(State { records, high_water })),
        }
    }

    /// Allocates the next identifier
    ///
    /// Identifiers are never reused, even after the record holding the
    /// highest one is removed.
    pub async fn next_id(&self) -> R::Id {
        let mut state = self.state.write().await;
        let current_max = state.records.iter().map(|r| r.id().sequence()).max().unwrap_or(0);
        state.high_water = state.high_water.max(current_max) + 1;
        <R::Id as SequenceId>::from_sequence(state.high_water)
    }
}

impl<R: Record> DomainPort for InMemoryRepository<R> {}

#[async_trait]
impl<R: Record> Repository<R> for InMemoryRepository<R> {
    async fn list(&self) -> Result<Vec<R>, PortError> {
        Ok(self.state.read().await.records.clone())
    }

    async fn find(&self, predicate: &(dyn for<'x> Fn(&'x R) -> bool + Send + Sync)) -> Result<Vec<R>, PortError> {
        let state = self.state.read().await;
        Ok(state.records.iter().filter(|r| predicate(r)).cloned().collect())
    }

    async fn get(&self, id: &R::Id) -> Result<R, PortError> {
        self.state
            .read()
            .await
            .records
            .iter()
            .find(|r| &r.id() == id)
            .cloned()
            .ok_or_else(|| PortError::not_found(R::ENTITY, id))
    }

    async fn insert(&self, record: R) -> Result<R, PortError> {
        let mut state = self.state.write().await;
        let id = record.id();
        if state.records.iter().any(|r| r.id() == id) {
            return Err(PortError::conflict(format!("{} {} already exists", R::ENTITY, id)));
        }
        debug!(entity = R::ENTITY, id = %id, "Inserting record");
        state.records.insert(0, record.clone());
        Ok(record)
    }

    async fn update(&self, record: R) -> Result<R, PortError> {
        let mut state = self.state.write().await;
        let id = record.id();
        let slot = state
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| PortError::not_found(R::ENTITY, &id))?;
        *slot = record.clone();
        Ok(record)
    }

    async fn remove(&self, id: &R::Id) -> Result<R, PortError> {
        let mut state = self.state.write().await;
        let index = state
            .records
            .iter()
            .position(|r| &r.id() == id)
            .ok_or_else(|| PortError::not_found(R::ENTITY, id))?;
        debug!(entity = R::ENTITY, id = %id, "Removing record");
        Ok(state.records.remove(index))
    }

    async fn count(&self) -> Result<usize, PortError> {
        Ok(self.state.read().await.records.len())
    }
}

#[async_trait]
impl<R: Record> HealthCheckable for InMemoryRepository<R> {
    async fn health_check(&self) -> HealthCheckResult {
        let count = self.state.read().await.records.len();
        HealthCheckResult {
            adapter_id: format!("in-memory-{}", R::ENTITY.to_lowercase()),
            status: AdapterHealth::Healthy,
            message: Some(format!("{} records", count)),
            checked_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::UserId;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: UserId,
        text: &'static str,
    }

    impl Record for Note {
        type Id = UserId;
        const ENTITY: &'static str = "Note";

        fn id(&self) -> UserId {
            self.id
        }
    }

    fn note(seq: u32, text: &'static str) -> Note {
        Note { id: UserId::new(seq), text }
    }

    #[tokio::test]
    async fn test_insert_prepends() {
        let repo = InMemoryRepository::seeded(vec![note(1, "a")]);
        repo.insert(note(2, "b")).await.unwrap();
        let texts: Vec<_> = repo.list().await.unwrap().iter().map(|n| n.text).collect();
        assert_eq!(texts, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_duplicate_insert_conflicts() {
        let repo = InMemoryRepository::seeded(vec![note(1, "a")]);
        let err = repo.insert(note(1, "again")).await.unwrap_err();
        assert!(matches!(err, PortError::Conflict { .. }));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_remove() {
        let repo = InMemoryRepository::seeded(vec![note(2, "b"), note(1, "a")]);
        repo.remove(&UserId::new(2)).await.unwrap();
        assert_eq!(repo.next_id().await, UserId::new(3));
        assert_eq!(repo.next_id().await, UserId::new(4));
    }

    #[tokio::test]
    async fn test_modify_keeps_record_on_error() {
        let repo = InMemoryRepository::seeded(vec![note(1, "a")]);
        let result: Result<Note, PortError> = repo
            .modify(&UserId::new(1), |n| {
                n.text = "changed";
                Err(PortError::validation("nope"))
            })
            .await;
        assert!(result.is_err());
        assert_eq!(repo.get(&UserId::new(1)).await.unwrap().text, "a");
    }

    #[tokio::test]
    async fn test_find_filters_in_list_order() {
        let repo = InMemoryRepository::seeded(vec![note(3, "keep"), note(2, "drop"), note(1, "keep")]);
        let found = repo.find(&|n: &Note| n.text == "keep").await.unwrap();
        let ids: Vec<_> = found.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![UserId::new(3), UserId::new(1)]);
        assert!(repo.find(&|n: &Note| n.text == "none").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_record() {
        let repo: InMemoryRepository<Note> = InMemoryRepository::new();
        assert!(repo.get(&UserId::new(9)).await.unwrap_err().is_not_found());
        assert!(repo.update(note(9, "x")).await.unwrap_err().is_not_found());
        assert_eq!(repo.next_id().await, UserId::new(1));
    }
}
