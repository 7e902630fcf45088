//! Application state shared by the menu handlers.

use crate::config::Config;
use crate::core::store::EntryStore;
use crate::core::timer::{StoppedTimer, TimerSession};
use crate::errors::AppResult;
use crate::utils::time::now;
use std::time::Duration;

pub struct App {
    pub cfg: Config,
    pub store: EntryStore,
    /// Present only while a timer is running.
    pub timer: Option<TimerSession>,
}

impl App {
    pub fn new(cfg: Config, store: EntryStore) -> Self {
        Self {
            cfg,
            store,
            timer: None,
        }
    }

    /// Open the database configured in `cfg`.
    pub fn open(cfg: Config) -> AppResult<Self> {
        let store = EntryStore::open(cfg.database_path())?.with_audit(cfg.audit_log);
        Ok(Self::new(cfg, store))
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.cfg.tick_ms.max(1))
    }

    pub fn is_timing(&self) -> bool {
        self.timer.is_some()
    }

    /// Stop the running timer (if any) and store the completed entry.
    /// Returns the new entry id together with the stopped timer.
    pub fn finish_timer(&mut self) -> AppResult<Option<(i64, StoppedTimer)>> {
        let Some(session) = self.timer.take() else {
            return Ok(None);
        };

        let stopped = session.stop(now());
        let id = self.store.add_entry(&stopped.entry)?;
        Ok(Some((id, stopped)))
    }
}
