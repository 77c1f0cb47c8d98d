//! Test repositories — mock `Repository` implementations for tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use questlog_core::error::DomainError;
use questlog_core::model::{Character, NewQuest, Quest};
use questlog_core::repository::{Repository, UnitOfWork};

/// Arena tables plus a per-character quest index.
#[derive(Debug, Clone, Default)]
struct Tables {
    characters: BTreeMap<i64, Character>,
    quests: BTreeMap<i64, Quest>,
    quests_by_character: HashMap<i64, Vec<i64>>,
    last_character_id: i64,
    last_quest_id: i64,
}

impl Tables {
    fn insert_character(&mut self, name: &str) -> Result<Character, DomainError> {
        if self.characters.values().any(|c| c.name == name) {
            return Err(DomainError::Conflict(name.to_owned()));
        }
        self.last_character_id += 1;
        let character = Character {
            id: self.last_character_id,
            name: name.to_owned(),
        };
        self.characters.insert(character.id, character.clone());
        Ok(character)
    }

    fn insert_quest(&mut self, quest: &NewQuest) -> Result<Quest, DomainError> {
        if !self.characters.contains_key(&quest.character_id) {
            return Err(DomainError::Infrastructure(
                "FOREIGN KEY constraint failed".into(),
            ));
        }
        self.last_quest_id += 1;
        let quest = Quest {
            id: self.last_quest_id,
            description: quest.description.clone(),
            xp: quest.xp,
            completed: false,
            character_id: quest.character_id,
        };
        self.quests_by_character
            .entry(quest.character_id)
            .or_default()
            .push(quest.id);
        self.quests.insert(quest.id, quest.clone());
        Ok(quest)
    }
}

/// An in-memory repository with `SQLite`-like semantics: duplicate names and
/// dangling character references are rejected, ids are assigned
/// monotonically, and a unit of work only becomes visible on commit.
///
/// Counts commits that carried writes so tests can assert that a rejected
/// request left the store untouched.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    tables: Arc<Mutex<Tables>>,
    write_commits: Arc<AtomicUsize>,
}

impl InMemoryRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character directly, bypassing units of work.
    ///
    /// # Panics
    ///
    /// Panics if the name is already taken or the internal mutex is poisoned.
    pub fn seed_character(&self, name: &str) -> Character {
        self.tables
            .lock()
            .unwrap()
            .insert_character(name)
            .expect("seed_character requires a unique name")
    }

    /// Insert a quest directly, bypassing units of work.
    ///
    /// # Panics
    ///
    /// Panics if the owning character does not exist or the internal mutex is
    /// poisoned.
    pub fn seed_quest(&self, quest: &NewQuest) -> Quest {
        self.tables
            .lock()
            .unwrap()
            .insert_quest(quest)
            .expect("seed_quest requires an existing character")
    }

    /// Number of committed characters.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn character_count(&self) -> usize {
        self.tables.lock().unwrap().characters.len()
    }

    /// Number of committed quests.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn quest_count(&self) -> usize {
        self.tables.lock().unwrap().quests.len()
    }

    /// Snapshot of a committed quest.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn quest(&self, quest_id: i64) -> Option<Quest> {
        self.tables.lock().unwrap().quests.get(&quest_id).cloned()
    }

    /// Number of commits that persisted at least one write.
    pub fn write_commits(&self) -> usize {
        self.write_commits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, DomainError> {
        let working = self.tables.lock().unwrap().clone();
        Ok(Box::new(InMemoryUnitOfWork {
            shared: Arc::clone(&self.tables),
            write_commits: Arc::clone(&self.write_commits),
            working,
            dirty: false,
        }))
    }
}

/// Works on a private copy of the tables and swaps it in on commit.
struct InMemoryUnitOfWork {
    shared: Arc<Mutex<Tables>>,
    write_commits: Arc<AtomicUsize>,
    working: Tables,
    dirty: bool,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn find_character_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<Character>, DomainError> {
        Ok(self
            .working
            .characters
            .values()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn find_character(
        &mut self,
        character_id: i64,
    ) -> Result<Option<Character>, DomainError> {
        Ok(self.working.characters.get(&character_id).cloned())
    }

    async fn find_quest(&mut self, quest_id: i64) -> Result<Option<Quest>, DomainError> {
        Ok(self.working.quests.get(&quest_id).cloned())
    }

    async fn quests_for_character(
        &mut self,
        character_id: i64,
    ) -> Result<Vec<Quest>, DomainError> {
        let quests = self
            .working
            .quests_by_character
            .get(&character_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.working.quests.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(quests)
    }

    async fn list_characters(&mut self) -> Result<Vec<Character>, DomainError> {
        Ok(self.working.characters.values().cloned().collect())
    }

    async fn insert_character(&mut self, name: &str) -> Result<Character, DomainError> {
        let character = self.working.insert_character(name)?;
        self.dirty = true;
        Ok(character)
    }

    async fn insert_quest(&mut self, quest: &NewQuest) -> Result<Quest, DomainError> {
        let quest = self.working.insert_quest(quest)?;
        self.dirty = true;
        Ok(quest)
    }

    async fn mark_quest_completed(&mut self, quest_id: i64) -> Result<Quest, DomainError> {
        let quest = self
            .working
            .quests
            .get_mut(&quest_id)
            .ok_or_else(|| DomainError::quest_not_found(quest_id))?;
        quest.completed = true;
        self.dirty = true;
        Ok(quest.clone())
    }

    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        let this = *self;
        if this.dirty {
            *this.shared.lock().unwrap() = this.working;
            this.write_commits.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }
}

/// A repository whose connections always fail. Useful for testing
/// error-handling paths.
#[derive(Debug)]
pub struct FailingRepository;

#[async_trait]
impl Repository for FailingRepository {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
