use std::sync::{Arc, Mutex, MutexGuard};

use budget_core::Draft;

use super::{events::FormEvent, reducer::reduce};

#[derive(Clone, Default)]
pub struct DraftStore {
    inner: Arc<Mutex<Draft>>,
}

impl DraftStore {
    pub fn new(draft: Draft) -> Self {
        Self {
            inner: Arc::new(Mutex::new(draft)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Draft> {
        // `reduce` runs on a clone, so a poisoned draft is still consistent.
        self.inner.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn draft(&self) -> Draft {
        self.lock().clone()
    }

    pub fn apply(&self, ev: FormEvent) {
        let mut guard = self.lock();
        let next = reduce(guard.clone(), ev);
        *guard = next;
    }

    /// Decides on an event from the current draft and applies it under one lock.
    pub fn apply_with<R>(&self, decide: impl FnOnce(&Draft) -> (Option<FormEvent>, R)) -> R {
        let mut guard = self.lock();
        let (ev, out) = decide(&guard);
        if let Some(ev) = ev {
            let next = reduce(guard.clone(), ev);
            *guard = next;
        }
        out
    }
}
