//! Wallet-connect dialog gate.
//!
//! Decides, per user activation, whether the widget opens its own
//! wallet-connection dialog or defers to the embedding application. The
//! integrator callback is the only inversion-of-control surface: it may let
//! the default flow proceed, or take over and later report whether the
//! dialog should open at all.

use std::time::Duration;

use futures::future::BoxFuture;

/// Stable identifier of the trigger control, for automated UI tests.
pub const WALLET_TRIGGER_TEST_ID: &str = "wallet";

/// Visibility state of the wallet-connection dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

impl DialogState {
    pub fn is_open(self) -> bool {
        matches!(self, DialogState::Open)
    }
}

/// Integrator verdict on a connect-wallet activation.
pub enum ConnectDecision {
    /// No opinion; the gate opens its own dialog.
    Proceed,
    /// Synchronous verdict. Does not suppress the dialog: activation opens
    /// it regardless of the value. Only a deferred `false` keeps it closed.
    Immediate(bool),
    /// Verdict arrives later; the dialog opens iff the future resolves to
    /// `Ok(true)`.
    Deferred(BoxFuture<'static, anyhow::Result<bool>>),
}

type ConnectCallback = Box<dyn Fn() -> ConnectDecision + Send + Sync>;

/// Two-state gate in front of the wallet-connection dialog.
///
/// Owns the open/closed flag exclusively; `on_activate` takes `&mut self`,
/// so one activation resolves before the next can start.
pub struct WalletConnectGate {
    disabled: bool,
    state: DialogState,
    callback: Option<ConnectCallback>,
    decision_timeout: Option<Duration>,
}

impl WalletConnectGate {
    pub fn new(disabled: bool) -> Self {
        Self {
            disabled,
            state: DialogState::Closed,
            callback: None,
            decision_timeout: None,
        }
    }

    /// Installs the integrator callback consulted on every activation.
    pub fn with_callback(
        mut self,
        callback: impl Fn() -> ConnectDecision + Send + Sync + 'static,
    ) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Bounds the wait on a deferred verdict. Without a bound, a callback
    /// that never resolves leaves the activation pending forever.
    pub fn with_decision_timeout(mut self, timeout: Duration) -> Self {
        self.decision_timeout = Some(timeout);
        self
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The trigger control stays present but hidden while the gate is
    /// disabled; the rendering layer keys off this.
    pub fn trigger_hidden(&self) -> bool {
        self.disabled
    }

    /// Handles an activation of the trigger control.
    ///
    /// Without a callback the dialog opens unconditionally. With one, the
    /// deferred arm is the single suspension point; `Ok(false)`, an error,
    /// or a timeout all keep the dialog closed.
    pub async fn on_activate(&mut self) -> DialogState {
        let Some(callback) = &self.callback else {
            self.state = DialogState::Open;
            return self.state;
        };

        match callback() {
            ConnectDecision::Proceed | ConnectDecision::Immediate(_) => {
                self.state = DialogState::Open;
            }
            ConnectDecision::Deferred(verdict) => {
                let resolved = match self.decision_timeout {
                    Some(limit) => match tokio::time::timeout(limit, verdict).await {
                        Ok(resolved) => resolved,
                        Err(_) => {
                            tracing::warn!(
                                timeout_ms = limit.as_millis() as u64,
                                "integrator connect verdict timed out; keeping dialog closed"
                            );
                            return self.state;
                        }
                    },
                    None => verdict.await,
                };
                match resolved {
                    Ok(true) => self.state = DialogState::Open,
                    Ok(false) => {}
                    Err(e) => {
                        tracing::warn!(
                            error = %e,
                            "integrator connect verdict failed; keeping dialog closed"
                        );
                    }
                }
            }
        }
        self.state
    }

    /// Closes the dialog. No-op when already closed.
    pub fn on_close(&mut self) {
        self.state = DialogState::Closed;
    }
}
