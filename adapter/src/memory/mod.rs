//! Transient storage: mutex-guarded maps living for the life of the
//! process, with per-kind monotonically increasing id counters.
//!
//! Each repository is an explicitly constructed object (wired in by the
//! registry), so tests get isolated instances. The counter sits behind the
//! same mutex as the map, which makes id assignment atomic. State is
//! process-local: running more than one instance gives each its own
//! divergent copy, so this backing is single-instance only.

use std::sync::{Mutex, MutexGuard};

use shared::error::{AppError, AppResult};

pub mod booking;
pub mod contact;
pub mod health;
pub mod room;
pub mod user;

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> AppResult<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| AppError::ConversionEntityError("in-memory store mutex poisoned".into()))
}
