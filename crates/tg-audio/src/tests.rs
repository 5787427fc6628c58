//! Unit tests for tg-audio.

use tg_core::NarrationId;

use crate::{AudioBackend, AudioError, AudioSyncCoordinator, NarrationStatus, NullAudio, ScriptedAudio};

fn id(s: &str) -> NarrationId {
    NarrationId::from(s)
}

fn scripted() -> AudioSyncCoordinator<ScriptedAudio> {
    AudioSyncCoordinator::new(
        ScriptedAudio::new()
            .with_track("intro", 1_000.0)
            .with_track("mona-lisa", 3_000.0),
    )
}

// ── ScriptedAudio ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod scripted_backend {
    use super::*;

    #[test]
    fn plays_for_its_duration() {
        let mut a = ScriptedAudio::new().with_track("intro", 100.0);
        let h = a.start(&id("intro")).unwrap();
        assert!(!a.is_finished(h));
        a.update(60.0);
        assert!(!a.is_finished(h));
        a.update(60.0);
        assert!(a.is_finished(h));
    }

    #[test]
    fn unknown_asset_fails() {
        let mut a = ScriptedAudio::new();
        assert_eq!(a.start(&id("ghost")), Err(AudioError::AssetNotFound(id("ghost"))));
        assert_eq!(a.started(), [id("ghost")]);
    }

    #[test]
    fn paused_tracks_do_not_advance() {
        let mut a = ScriptedAudio::new().with_track("intro", 100.0);
        let h = a.start(&id("intro")).unwrap();
        a.pause(h);
        assert!(a.is_paused(h));
        a.update(500.0);
        assert!(!a.is_finished(h));
        a.resume(h);
        a.update(500.0);
        assert!(a.is_finished(h));
    }

    #[test]
    fn stop_counts_interrupted_tracks() {
        let mut a = ScriptedAudio::new().with_track("intro", 100.0);
        let h = a.start(&id("intro")).unwrap();
        a.stop(h);
        assert_eq!(a.stopped_count(), 1);
        // Unknown handle reads as finished.
        assert!(a.is_finished(h));
    }
}

// ── AudioSyncCoordinator ──────────────────────────────────────────────────────

#[cfg(test)]
mod coordinator {
    use super::*;

    #[test]
    fn starts_idle() {
        let c = scripted();
        assert_eq!(c.status(), NarrationStatus::Idle);
        assert!(!c.is_playing());
        assert!(c.current().is_none());
    }

    #[test]
    fn finish_edge_fires_once() {
        let mut c = scripted();
        c.start(&id("intro")).unwrap();
        assert!(c.is_playing());

        c.advance(500.0);
        assert!(!c.take_finished());

        c.advance(600.0);
        assert!(c.is_finished());
        assert!(c.take_finished());
        // Level stays "finished" but the edge is gone.
        c.advance(16.0);
        assert!(c.is_finished());
        assert!(!c.take_finished());
    }

    #[test]
    fn single_active_narration() {
        let mut c = scripted();
        c.start(&id("intro")).unwrap();
        c.start(&id("mona-lisa")).unwrap();
        assert_eq!(c.current(), Some(&id("mona-lisa")));
        assert_eq!(c.backend().stopped_count(), 1);
        assert_eq!(c.backend().playing_count(), 1);
    }

    #[test]
    fn failed_start_reads_as_finished() {
        let mut c = scripted();
        let err = c.start(&id("missing")).unwrap_err();
        assert_eq!(err, AudioError::AssetNotFound(id("missing")));
        assert!(c.is_finished());
        assert!(c.current().is_none());
        assert!(c.take_finished());
    }

    #[test]
    fn stop_reports_whether_anything_played() {
        let mut c = scripted();
        assert!(!c.stop());
        c.start(&id("intro")).unwrap();
        assert!(c.stop());
        assert!(!c.stop());
        assert_eq!(c.status(), NarrationStatus::Idle);
    }

    #[test]
    fn stop_clears_pending_edge() {
        let mut c = scripted();
        c.start(&id("intro")).unwrap();
        c.advance(2_000.0);
        c.stop();
        assert!(!c.take_finished());
    }

    #[test]
    fn pause_and_resume_forward_to_backend() {
        let mut c = scripted();
        let h = c.start(&id("intro")).unwrap();
        c.pause();
        assert!(c.backend().is_paused(h));
        c.advance(5_000.0);
        assert!(c.is_paused());
        assert_eq!(c.status(), NarrationStatus::Paused);
        assert!(!c.is_playing());
        c.resume();
        assert!(!c.backend().is_paused(h));
        assert!(c.is_playing());
        c.advance(1_000.0);
        assert!(c.take_finished());
    }

    #[test]
    fn null_audio_finishes_on_first_poll() {
        let mut c = AudioSyncCoordinator::new(NullAudio::default());
        c.start(&id("anything")).unwrap();
        assert!(c.is_playing());
        c.advance(0.0);
        assert!(c.take_finished());
    }

    #[test]
    fn boxed_backend_is_a_backend() {
        let boxed: Box<dyn AudioBackend> = Box::new(ScriptedAudio::new().with_track("intro", 10.0));
        let mut c = AudioSyncCoordinator::new(boxed);
        c.start(&id("intro")).unwrap();
        c.advance(10.0);
        assert!(c.take_finished());
    }
}
