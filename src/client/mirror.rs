//! Gateway that keeps the task collection in a JSON document on disk.
//!
//! The document is a key/value object. Tasks live as one array under the
//! `tasks` key and the identifier high-water mark under `tasks.next_id`;
//! other keys are preserved untouched. Every mutation rewrites the whole
//! document through a temporary file and a rename.

use super::{GatewayError, GatewayResult, TaskGateway};
use crate::task::domain::{NewTask, Task, TaskDraft, TaskId, TaskStatus};
use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::sync::{Arc, Mutex};

/// File holding the mirror document inside the mirror directory.
pub const MIRROR_FILE_NAME: &str = "taskboard.json";

const STAGING_FILE_NAME: &str = "taskboard.json.tmp";

#[derive(Debug, Default, Serialize, Deserialize)]
struct MirrorDocument {
    #[serde(default)]
    tasks: Vec<Task>,
    #[serde(rename = "tasks.next_id", default)]
    next_id: i64,
    #[serde(flatten)]
    other: BTreeMap<String, serde_json::Value>,
}

impl MirrorDocument {
    fn allocate_id(&mut self) -> TaskId {
        let highest = self.tasks.iter().map(|task| task.id().value()).max();
        let id = highest.map_or(1, |value| value + 1).max(self.next_id).max(1);
        self.next_id = id + 1;
        TaskId::new(id)
    }

    fn task_mut(&mut self, id: TaskId) -> GatewayResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(GatewayError::NotFound(id))
    }
}

struct MirrorStore<C> {
    dir: Dir,
    write_lock: Mutex<()>,
    clock: Arc<C>,
}

impl<C> MirrorStore<C> {
    fn load(&self) -> GatewayResult<MirrorDocument> {
        match self.dir.read_to_string(MIRROR_FILE_NAME) {
            Ok(contents) => serde_json::from_str(&contents).map_err(GatewayError::unavailable),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(MirrorDocument::default()),
            Err(err) => Err(GatewayError::unavailable(err)),
        }
    }

    fn save(&self, document: &MirrorDocument) -> GatewayResult<()> {
        let contents = serde_json::to_vec_pretty(document).map_err(GatewayError::unavailable)?;
        self.dir
            .write(STAGING_FILE_NAME, contents)
            .map_err(GatewayError::unavailable)?;
        self.dir
            .rename(STAGING_FILE_NAME, &self.dir, MIRROR_FILE_NAME)
            .map_err(GatewayError::unavailable)
    }

    /// Loads the document, applies `change`, and writes the result back.
    ///
    /// Nothing is written when `change` fails.
    fn transact<T>(
        &self,
        change: impl FnOnce(&mut MirrorDocument, &C) -> GatewayResult<T>,
    ) -> GatewayResult<T> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|err| GatewayError::unavailable(std::io::Error::other(err.to_string())))?;
        let mut document = self.load()?;
        let value = change(&mut document, self.clock.as_ref())?;
        self.save(&document)?;
        Ok(value)
    }
}

/// Gateway storing tasks in a directory on local disk.
pub struct LocalMirrorGateway<C> {
    store: Arc<MirrorStore<C>>,
}

impl<C> Clone for LocalMirrorGateway<C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<C> LocalMirrorGateway<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Opens the mirror kept in `directory`, which must exist.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Unavailable`] when the directory cannot be
    /// opened.
    pub fn open(directory: &Utf8Path, clock: Arc<C>) -> GatewayResult<Self> {
        let dir = Dir::open_ambient_dir(directory, ambient_authority())
            .map_err(GatewayError::unavailable)?;
        Ok(Self::from_dir(dir, clock))
    }

    /// Uses an already opened directory.
    #[must_use]
    pub fn from_dir(dir: Dir, clock: Arc<C>) -> Self {
        Self {
            store: Arc::new(MirrorStore {
                dir,
                write_lock: Mutex::new(()),
                clock,
            }),
        }
    }

    async fn run_blocking<T, F>(&self, operation: F) -> GatewayResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&MirrorStore<C>) -> GatewayResult<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || operation(store.as_ref()))
            .await
            .map_err(GatewayError::unavailable)?
    }
}

#[async_trait]
impl<C> TaskGateway for LocalMirrorGateway<C>
where
    C: Clock + Send + Sync + 'static,
{
    async fn fetch_all(&self) -> GatewayResult<Vec<Task>> {
        self.run_blocking(|store| store.load().map(|document| document.tasks))
            .await
    }

    async fn create(&self, draft: &TaskDraft) -> GatewayResult<Task> {
        let owned = draft.clone();
        self.run_blocking(move |store| {
            store.transact(|document, clock| {
                let id = document.allocate_id();
                let task = NewTask::new(owned, clock).into_task(id);
                document.tasks.push(task.clone());
                Ok(task)
            })
        })
        .await
    }

    async fn update(&self, id: TaskId, draft: &TaskDraft) -> GatewayResult<Task> {
        let owned = draft.clone();
        self.run_blocking(move |store| {
            store.transact(|document, clock| {
                let task = document.task_mut(id)?;
                task.apply(owned, clock);
                Ok(task.clone())
            })
        })
        .await
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> GatewayResult<Task> {
        self.run_blocking(move |store| {
            store.transact(|document, clock| {
                let task = document.task_mut(id)?;
                task.move_to(status, clock);
                Ok(task.clone())
            })
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> GatewayResult<()> {
        self.run_blocking(move |store| {
            store.transact(|document, _| {
                let before = document.tasks.len();
                document.tasks.retain(|task| task.id() != id);
                if document.tasks.len() == before {
                    return Err(GatewayError::NotFound(id));
                }
                Ok(())
            })
        })
        .await
    }
}
