//! A backend that plays nothing.

use tg_core::{NarrationHandle, NarrationId};

use crate::{AudioBackend, AudioResult};

/// An [`AudioBackend`] whose narrations finish as soon as they start.
///
/// Useful for silent kiosks and for tests that only care about movement and
/// gating.  Narrations still gate the tour for one tick, because completion
/// is only observed on the next poll.
#[derive(Debug, Default)]
pub struct NullAudio {
    next_handle: u64,
}

impl AudioBackend for NullAudio {
    fn start(&mut self, _narration: &NarrationId) -> AudioResult<NarrationHandle> {
        self.next_handle += 1;
        Ok(NarrationHandle(self.next_handle))
    }

    fn stop(&mut self, _handle: NarrationHandle) {}

    fn is_finished(&self, _handle: NarrationHandle) -> bool {
        true
    }
}
