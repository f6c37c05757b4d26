//! Shared player state store
//!
//! One [`PlayerStore`] is created at startup and handed to every handler
//! through the router state. All access goes through [`PlayerStore::with_state`],
//! which holds the lock for exactly the duration of one closure call, so each
//! command's read-modify-write is atomic with respect to every other command.
//!
//! The closure is synchronous: handlers cannot `.await` while holding the
//! lock. Calls must not be nested (the mutex is not reentrant).

use std::sync::{Mutex, PoisonError};

use raudio_common::PlayerSnapshot;
use tracing::warn;

use crate::player::PlayerState;

/// Mutex-guarded owner of the player record
#[derive(Debug, Default)]
pub struct PlayerStore {
    state: Mutex<PlayerState>,
}

impl PlayerStore {
    /// Create a store holding a fresh [`PlayerState`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with exclusive access to the player state
    ///
    /// The guard is dropped when this returns, on success, on an `Err`
    /// result from `f`, and during unwinding.
    pub fn with_state<R>(&self, f: impl FnOnce(&mut PlayerState) -> R) -> R {
        let mut guard = self.state.lock().unwrap_or_else(|poisoned| {
            warn!("Player state lock poisoned by a panicked holder, recovering");
            self.state.clear_poison();
            PoisonError::into_inner(poisoned)
        });
        f(&mut guard)
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> PlayerSnapshot {
        self.with_state(|player| player.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::volume::Volume;
    use raudio_common::PlaybackStatus;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_with_state_returns_closure_result() {
        let store = PlayerStore::new();

        let added = store.with_state(|player| player.add_to_playlist("a.mp3".to_string()));

        assert!(added);
        assert_eq!(store.snapshot().playlist, vec!["a.mp3".to_string()]);
    }

    #[test]
    fn test_lock_released_after_error() {
        let store = PlayerStore::new();

        let result: Result<(), Error> = store.with_state(|player| player.pause());
        assert!(result.is_err());

        // A second acquisition would deadlock if the first guard leaked
        assert_eq!(store.snapshot().status, PlaybackStatus::Stopped);
    }

    #[test]
    fn test_recovers_from_poisoned_lock() {
        let store = Arc::new(PlayerStore::new());

        let panicking = Arc::clone(&store);
        let outcome = thread::spawn(move || {
            panicking.with_state(|_| panic!("handler bug"));
        })
        .join();
        assert!(outcome.is_err());

        store.with_state(|player| player.set_volume(Volume::new(10).unwrap()));
        assert_eq!(store.snapshot().volume, 10);
    }

    #[test]
    fn test_concurrent_volume_updates_keep_one_value() {
        let store = Arc::new(PlayerStore::new());

        let submitted: Vec<i64> = (0..=100).step_by(5).collect();

        let handles: Vec<_> = submitted
            .iter()
            .map(|&level| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let volume = Volume::new(level).unwrap();
                    store.with_state(|player| player.set_volume(volume));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let final_volume = i64::from(store.snapshot().volume);
        assert!(submitted.contains(&final_volume));
    }

    #[test]
    fn test_concurrent_read_modify_write_loses_no_updates() {
        let store = Arc::new(PlayerStore::new());
        let threads: usize = 16;
        let per_thread: usize = 50;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..per_thread {
                        store.with_state(|player| {
                            player.add_to_playlist(format!("track-{}-{}.mp3", t, i))
                        });
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.snapshot().playlist.len(), threads * per_thread);
    }

    #[test]
    fn test_concurrent_transitions_preserve_invariants() {
        let store = Arc::new(PlayerStore::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..200 {
                        store.with_state(|player| {
                            match (t + i) % 4 {
                                0 => {
                                    let _ = player.play(Some(format!("song-{}.mp3", t)));
                                }
                                1 => {
                                    let _ = player.pause();
                                }
                                2 => player.stop(),
                                _ => {
                                    let _ = player.play(None);
                                }
                            }

                            // Checked while still holding the lock
                            if player.status() != PlaybackStatus::Stopped {
                                assert!(player.current_file().is_some());
                            }
                        });
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = store.snapshot();
        assert!(snapshot.volume <= 100);
        if snapshot.status != PlaybackStatus::Stopped {
            assert!(snapshot.current_file.is_some());
        }
    }
}
