// nfctags/src/ultralight/emulation.rs

//! Emulation session lifecycle.
//!
//! One session manager owns at most one active listener. `start` while active
//! is a busy error and leaves the running handle untouched; `stop` while
//! inactive is a not-started error. The listener is halted before its handle
//! is released — the radio layer may still hold a reference until then.

use log::debug;

use crate::ultralight::{UltralightData, UltralightListener};
use crate::{Error, Result};

enum State {
    Inactive,
    Active(UltralightListener),
}

/// Two-state emulation handle owner.
pub struct EmulationSession {
    state: State,
}

impl Default for EmulationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EmulationSession {
    pub fn new() -> Self {
        Self {
            state: State::Inactive,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, State::Active(_))
    }

    /// Start emulating the given tag image.
    pub fn start(&mut self, data: UltralightData) -> Result<()> {
        if self.is_active() {
            return Err(Error::Busy);
        }
        debug!("emulation started ({:?})", data.tag_type);
        self.state = State::Active(UltralightListener::new(data));
        Ok(())
    }

    /// Access the running listener, e.g. to wire it to a radio layer.
    pub fn listener_mut(&mut self) -> Option<&mut UltralightListener> {
        match self.state {
            State::Active(ref mut listener) => Some(listener),
            State::Inactive => None,
        }
    }

    /// Stop emulating and hand back the final tag image.
    pub fn stop(&mut self) -> Result<UltralightData> {
        match std::mem::replace(&mut self.state, State::Inactive) {
            State::Active(mut listener) => {
                // Stop before free
                listener.halt();
                debug!("emulation stopped");
                Ok(listener.into_data())
            }
            State::Inactive => Err(Error::NotStarted),
        }
    }
}
