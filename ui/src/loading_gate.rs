//! The redirect decision behind the address loading screen.

/// Where the gate stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIs)]
pub enum GateState {
    /// The minimum dwell time has not passed yet.
    #[default]
    Waiting,
    /// Dwell time is over but addresses are still loading.
    ReadyNotLoaded,
    /// The redirect was issued. Terminal.
    Redirected,
}

/// Holds the screen until both the dwell timer has fired and address loading
/// has finished, then allows exactly one redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingGate {
    state: GateState,
}

impl LoadingGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Records that the dwell timer fired. Later calls are no-ops.
    pub fn dwell_elapsed(&mut self) {
        if self.state.is_waiting() {
            self.state = GateState::ReadyNotLoaded;
        }
    }

    /// Evaluates one render pass. Returns true exactly once: on the first
    /// pass where the timer has fired and loading is over.
    pub fn try_redirect(&mut self, loading_addresses: bool) -> bool {
        if self.state.is_ready_not_loaded() && !loading_addresses {
            self.state = GateState::Redirected;
            true
        } else {
            false
        }
    }
}
