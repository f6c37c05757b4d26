//! Player state record and its transition rules
//!
//! ```text
//!            play(file?)               pause()
//!  Stopped ──────────────▶ Playing ──────────────▶ Paused
//!     ▲                     ▲   │                    │
//!     │       stop()        │   └────── play() ◀─────┘
//!     └─────────────────────┴──────── stop() ────────┘
//! ```
//!
//! Every method either validates and then mutates, or fails without touching
//! any field. Fields are private so `Playing`/`Paused` can never be reached
//! without a current file.

use crate::error::{Error, Result};
use crate::volume::Volume;
use raudio_common::{PlaybackStatus, PlayerSnapshot};

/// The single mutable player record owned by [`crate::state::PlayerStore`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerState {
    status: PlaybackStatus,
    current_file: Option<String>,
    volume: Volume,
    /// Placeholder offset; nothing advances it
    position: u64,
    /// Insertion-ordered, no duplicates
    playlist: Vec<String>,
}

impl PlayerState {
    /// Fresh state: stopped, no file, volume 50, empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            status: self.status,
            current_file: self.current_file.clone(),
            volume: self.volume.get(),
            position: self.position,
            playlist: self.playlist.clone(),
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn current_file(&self) -> Option<&str> {
        self.current_file.as_deref()
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn playlist(&self) -> &[String] {
        &self.playlist
    }

    /// Start or resume playback
    ///
    /// A given `file` always becomes the current file and restarts the
    /// position, even when it names the file already loaded. Without a file,
    /// playback resumes the current one. Returns the file now playing.
    pub fn play(&mut self, file: Option<String>) -> Result<&str> {
        if let Some(file) = file {
            self.current_file = Some(file);
            self.position = 0;
        }

        match self.current_file.as_deref() {
            Some(current) => {
                self.status = PlaybackStatus::Playing;
                Ok(current)
            }
            None => Err(Error::invalid_request("No audio file specified")),
        }
    }

    /// Pause playback; only valid while playing
    pub fn pause(&mut self) -> Result<()> {
        if self.status != PlaybackStatus::Playing {
            return Err(Error::invalid_state("Audio is not playing"));
        }
        self.status = PlaybackStatus::Paused;
        Ok(())
    }

    /// Stop from any status; the current file and playlist are kept
    pub fn stop(&mut self) {
        self.status = PlaybackStatus::Stopped;
        self.position = 0;
    }

    pub fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
    }

    /// Append `file` unless already present. Returns whether it was added.
    pub fn add_to_playlist(&mut self, file: String) -> bool {
        if self.playlist.contains(&file) {
            return false;
        }
        self.playlist.push(file);
        true
    }

    /// Empty the playlist. Returns the number of entries removed.
    pub fn clear_playlist(&mut self) -> usize {
        let removed = self.playlist.len();
        self.playlist.clear();
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(file: &str) -> PlayerState {
        let mut state = PlayerState::new();
        state.play(Some(file.to_string())).unwrap();
        state
    }

    #[test]
    fn test_initial_state() {
        let state = PlayerState::new();
        assert_eq!(state.status(), PlaybackStatus::Stopped);
        assert_eq!(state.current_file(), None);
        assert_eq!(state.volume().get(), 50);
        assert_eq!(state.position(), 0);
        assert!(state.playlist().is_empty());
    }

    #[test]
    fn test_play_without_any_file_fails_untouched() {
        let mut state = PlayerState::new();
        let before = state.clone();

        let err = state.play(None).unwrap_err();

        assert!(matches!(err, Error::InvalidRequest(_)));
        assert_eq!(err.to_string(), "No audio file specified");
        assert_eq!(state, before);
    }

    #[test]
    fn test_play_sets_file_and_resets_position() {
        let mut state = PlayerState::new();
        state.position = 4200;

        let current = state.play(Some("song.mp3".to_string())).unwrap().to_string();

        assert_eq!(current, "song.mp3");
        assert_eq!(state.status(), PlaybackStatus::Playing);
        assert_eq!(state.current_file(), Some("song.mp3"));
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_play_same_file_restarts_position() {
        let mut state = playing("song.mp3");
        state.position = 1234;

        state.play(Some("song.mp3".to_string())).unwrap();

        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_resume_keeps_file_and_position() {
        let mut state = playing("song.mp3");
        state.position = 900;
        state.pause().unwrap();

        let current = state.play(None).unwrap().to_string();

        assert_eq!(current, "song.mp3");
        assert_eq!(state.status(), PlaybackStatus::Playing);
        assert_eq!(state.position(), 900);
    }

    #[test]
    fn test_pause_only_from_playing() {
        let mut stopped = PlayerState::new();
        let err = stopped.pause().unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
        assert_eq!(err.to_string(), "Audio is not playing");
        assert_eq!(stopped.status(), PlaybackStatus::Stopped);

        let mut state = playing("song.mp3");
        state.pause().unwrap();
        assert_eq!(state.status(), PlaybackStatus::Paused);

        // Not idempotent
        assert!(state.pause().is_err());
        assert_eq!(state.status(), PlaybackStatus::Paused);
    }

    #[test]
    fn test_stop_from_every_status() {
        let mut from_stopped = PlayerState::new();
        from_stopped.stop();
        assert_eq!(from_stopped.status(), PlaybackStatus::Stopped);

        let mut from_playing = playing("a.mp3");
        from_playing.add_to_playlist("b.mp3".to_string());
        from_playing.position = 77;
        from_playing.stop();
        assert_eq!(from_playing.status(), PlaybackStatus::Stopped);
        assert_eq!(from_playing.position(), 0);
        assert_eq!(from_playing.current_file(), Some("a.mp3"));
        assert_eq!(from_playing.playlist(), ["b.mp3".to_string()]);

        let mut from_paused = playing("a.mp3");
        from_paused.pause().unwrap();
        from_paused.stop();
        assert_eq!(from_paused.status(), PlaybackStatus::Stopped);
        assert_eq!(from_paused.current_file(), Some("a.mp3"));
    }

    #[test]
    fn test_play_after_stop_resumes_current_file() {
        let mut state = playing("a.mp3");
        state.stop();

        state.play(None).unwrap();

        assert_eq!(state.status(), PlaybackStatus::Playing);
        assert_eq!(state.current_file(), Some("a.mp3"));
    }

    #[test]
    fn test_playlist_is_ordered_set() {
        let mut state = PlayerState::new();
        assert!(state.add_to_playlist("b.mp3".to_string()));
        assert!(state.add_to_playlist("a.mp3".to_string()));
        assert!(!state.add_to_playlist("b.mp3".to_string()));

        assert_eq!(state.playlist(), ["b.mp3".to_string(), "a.mp3".to_string()]);

        assert_eq!(state.clear_playlist(), 2);
        assert!(state.playlist().is_empty());
        assert_eq!(state.clear_playlist(), 0);
    }

    #[test]
    fn test_snapshot_copies_all_fields() {
        let mut state = playing("song.mp3");
        state.set_volume(Volume::new(80).unwrap());
        state.add_to_playlist("next.mp3".to_string());

        let snapshot = state.snapshot();

        assert_eq!(
            snapshot,
            PlayerSnapshot {
                status: PlaybackStatus::Playing,
                current_file: Some("song.mp3".to_string()),
                volume: 80,
                position: 0,
                playlist: vec!["next.mp3".to_string()],
            }
        );
    }
}
