use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Shutdown flag paired with the lock that serializes presentation against
/// window destruction.
///
/// Invariants:
/// - the flag starts `false` and is only ever set to `true`
/// - every write to the flag happens with the lock held
/// - a present performed under [`lock_alive`](Self::lock_alive) can never
///   overlap or follow a destroy performed under [`destroy_with`](Self::destroy_with)
#[derive(Debug, Default)]
pub struct SwapGate {
    destroyed: AtomicBool,
    lock: Mutex<()>,
}

impl SwapGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock-free read used at the top of each render iteration.
    ///
    /// May briefly lag a concurrent [`close`](Self::close); the locked re-check in
    /// `lock_alive` covers that window.
    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::Acquire)
    }

    /// Acquires the lock and returns the guard only if shutdown has not begun.
    ///
    /// Hold the guard for the whole swap. `None` means the frame must be dropped
    /// without presenting.
    pub fn lock_alive(&self) -> Option<MutexGuard<'_, ()>> {
        let guard = self.guard();
        if self.destroyed.load(Ordering::Acquire) {
            return None;
        }
        Some(guard)
    }

    /// Sets the flag under the lock.
    ///
    /// Returns `true` for the call that performed the transition.
    pub fn close(&self) -> bool {
        let _guard = self.guard();
        !self.destroyed.swap(true, Ordering::AcqRel)
    }

    /// Sets the flag and runs `destroy` inside the same critical section.
    pub fn destroy_with<R>(&self, destroy: impl FnOnce() -> R) -> R {
        let _guard = self.guard();
        self.destroyed.store(true, Ordering::Release);
        destroy()
    }

    // A panic while holding the lock leaves no partial state behind: the
    // protected data is `()` and the flag is atomic.
    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    pub(crate) fn is_locked(&self) -> bool {
        matches!(self.lock.try_lock(), Err(std::sync::TryLockError::WouldBlock))
    }
}
