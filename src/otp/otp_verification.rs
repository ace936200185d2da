use crate::{
    auth::{VerifyOtpParams, VerifyOtpResponse},
    config::OtpConfig,
    error::Error as PhotoQuestError,
    navigation::Route,
    notifications::Notification,
    otp::{OtpBackend, OtpCommand, OtpEvent, OtpSession, OtpState},
};
use std::time::Duration;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{Instant, interval_at, sleep_until},
};
use tracing::{debug, error, info, warn};

/// Capacity of the command channel, the view processes commands as fast as the user types.
const COMMANDS_CHANNEL_CAPACITY: usize = 32;

/// Responses of the network requests spawned by the view.
enum OtpResponse {
    Verified(anyhow::Result<VerifyOtpResponse>),
    CodeRequested(anyhow::Result<()>),
}

/// Handle of the OTP verification view running in the background.
pub struct OtpVerificationHandle {
    /// Sends user commands to the view.
    pub commands: mpsc::Sender<OtpCommand>,
    /// Receives events emitted by the view.
    pub events: mpsc::UnboundedReceiver<OtpEvent>,
    /// Resolves to the route the view navigated to, or `None` if the user left the view.
    pub task: JoinHandle<Option<Route>>,
}

/// OTP verification view: drives `OtpSession` with 1-second timers, user commands and
/// verification requests, all on a single task.
pub struct OtpVerification<B: OtpBackend> {
    session: OtpSession,
    backend: B,
    navigation_delay: Duration,
    state: OtpState,
}

impl<B: OtpBackend> OtpVerification<B> {
    /// Creates view for the code that has just been issued for the specified email.
    pub fn new(
        email: impl Into<String>,
        is_password_reset: bool,
        backend: B,
        config: &OtpConfig,
    ) -> Self {
        let session = OtpSession::new(email, is_password_reset, config);
        Self {
            state: session.state(),
            session,
            backend,
            navigation_delay: config.navigation_delay,
        }
    }

    /// Spawns view on a new task.
    pub fn spawn(self) -> OtpVerificationHandle {
        let (commands, commands_rx) = mpsc::channel(COMMANDS_CHANNEL_CAPACITY);
        let (events_tx, events) = mpsc::unbounded_channel();
        OtpVerificationHandle {
            commands,
            events,
            task: tokio::spawn(self.run(commands_rx, events_tx)),
        }
    }

    /// Runs view until it navigates away or the user leaves it. Responses that arrive after that
    /// are discarded.
    pub async fn run(
        mut self,
        mut commands: mpsc::Receiver<OtpCommand>,
        events: mpsc::UnboundedSender<OtpEvent>,
    ) -> Option<Route> {
        if self.session.email().trim().is_empty() {
            warn!("OTP verification requires an email, redirecting to login.");
            let route = Route::Login { email: None };
            events.send(OtpEvent::Navigate(route.clone())).ok();
            return Some(route);
        }

        info!(otp = ?self.session.log_context(), "OTP verification started.");
        self.emit_tick(&events);
        events.send(OtpEvent::StateChanged(self.state)).ok();

        let period = Duration::from_secs(1);
        let mut countdown = interval_at(Instant::now() + period, period);
        let mut resend_cooldown = interval_at(Instant::now() + period, period);
        let (responses_tx, mut responses) = mpsc::unbounded_channel::<OtpResponse>();
        let mut navigation: Option<(Instant, Route)> = None;

        loop {
            let navigation_deadline = navigation.as_ref().map(|(deadline, _)| *deadline);
            tokio::select! {
                _ = countdown.tick() => {
                    let remaining_seconds = self.session.remaining_seconds();
                    if self.session.tick() {
                        warn!(otp = ?self.session.log_context(), "OTP has expired.");
                        events
                            .send(OtpEvent::Notification(Notification::warning(
                                "OTP Expired",
                                "Your code has expired. Please request a new one.",
                            )))
                            .ok();
                    }

                    if remaining_seconds != self.session.remaining_seconds() {
                        self.emit_tick(&events);
                    }
                }
                _ = resend_cooldown.tick() => {
                    if self.session.resend_cooldown_seconds() > 0 {
                        self.session.tick_resend_cooldown();
                        self.emit_tick(&events);
                    }
                }
                command = commands.recv() => match command {
                    Some(OtpCommand::Leave) | None => {
                        debug!(otp = ?self.session.log_context(), "OTP verification left.");
                        return None;
                    }
                    Some(command) => self.handle_command(command, &events, &responses_tx),
                },
                Some(response) = responses.recv() => {
                    if let Some(route) = self.handle_response(response, &events) {
                        navigation = Some((Instant::now() + self.navigation_delay, route));
                    }
                }
                _ = sleep_until(navigation_deadline.unwrap_or_else(Instant::now)), if navigation_deadline.is_some() => {
                    if let Some((_, route)) = navigation.take() {
                        info!(otp = ?self.session.log_context(), route = %route, "OTP verification completed.");
                        events.send(OtpEvent::Navigate(route.clone())).ok();
                        return Some(route);
                    }
                }
            }

            self.sync_state(&events);
        }
    }

    fn handle_command(
        &mut self,
        command: OtpCommand,
        events: &mpsc::UnboundedSender<OtpEvent>,
        responses: &mpsc::UnboundedSender<OtpResponse>,
    ) {
        match command {
            OtpCommand::Key(key) => {
                if self.session.handle_key(key) {
                    self.emit_input(events);
                } else {
                    debug!(?key, state = ?self.session.state(), "OTP key rejected.");
                }
            }
            OtpCommand::Submit => match self.session.begin_submit() {
                Ok(code) => {
                    debug!(otp = ?self.session.log_context(), "Verifying OTP.");
                    let params = VerifyOtpParams {
                        email: self.session.email().to_string(),
                        code,
                        is_password_reset: self.session.is_password_reset(),
                    };
                    let backend = self.backend.clone();
                    let responses = responses.clone();
                    tokio::spawn(async move {
                        let response = backend.verify_otp(params).await;
                        responses.send(OtpResponse::Verified(response)).ok();
                    });
                }
                Err(err) => Self::emit_error(events, err),
            },
            OtpCommand::Resend => match self.session.begin_resend() {
                Ok(()) => {
                    info!(otp = ?self.session.log_context(), "Requesting a new OTP.");
                    self.emit_tick(events);
                    self.emit_input(events);

                    let backend = self.backend.clone();
                    let responses = responses.clone();
                    let email = self.session.email().to_string();
                    tokio::spawn(async move {
                        let response = backend.request_code(email).await;
                        responses.send(OtpResponse::CodeRequested(response)).ok();
                    });
                }
                Err(err) => Self::emit_error(events, err),
            },
            OtpCommand::Leave => {}
        }
    }

    /// Applies network response, returns the route to navigate to after a successful
    /// verification.
    fn handle_response(
        &mut self,
        response: OtpResponse,
        events: &mpsc::UnboundedSender<OtpEvent>,
    ) -> Option<Route> {
        match response {
            OtpResponse::Verified(Ok(response)) => match self.session.complete_submit(response) {
                Ok(route) => {
                    info!(otp = ?self.session.log_context(), "OTP verified.");
                    events
                        .send(OtpEvent::Notification(Notification::success(
                            "OTP Verified",
                            "Verification successful!",
                        )))
                        .ok();
                    Some(route)
                }
                Err(err) => {
                    error!(otp = ?self.session.log_context(), "Unexpected OTP verification response: {err:?}");
                    Self::emit_error(events, err);
                    None
                }
            },
            OtpResponse::Verified(Err(err)) => {
                self.session.fail_submit();
                error!(otp = ?self.session.log_context(), "Failed to verify OTP: {err:?}");
                Self::emit_error(events, err);
                None
            }
            OtpResponse::CodeRequested(Ok(())) => {
                events
                    .send(OtpEvent::Notification(Notification::info(
                        "OTP Sent",
                        format!("A new code has been sent to {}.", self.session.email()),
                    )))
                    .ok();
                None
            }
            OtpResponse::CodeRequested(Err(err)) => {
                error!(otp = ?self.session.log_context(), "Failed to request a new OTP: {err:?}");
                Self::emit_error(events, err);
                None
            }
        }
    }

    fn sync_state(&mut self, events: &mpsc::UnboundedSender<OtpEvent>) {
        let state = self.session.state();
        if state != self.state {
            self.state = state;
            events.send(OtpEvent::StateChanged(state)).ok();
        }
    }

    fn emit_tick(&self, events: &mpsc::UnboundedSender<OtpEvent>) {
        events
            .send(OtpEvent::Tick {
                remaining_seconds: self.session.remaining_seconds(),
                resend_cooldown_seconds: self.session.resend_cooldown_seconds(),
            })
            .ok();
    }

    fn emit_input(&self, events: &mpsc::UnboundedSender<OtpEvent>) {
        events
            .send(OtpEvent::InputChanged {
                digits: *self.session.digits(),
                focus: self.session.focus(),
            })
            .ok();
    }

    fn emit_error(events: &mpsc::UnboundedSender<OtpEvent>, err: anyhow::Error) {
        let err = PhotoQuestError::from(err);
        events
            .send(OtpEvent::Notification(Notification::from(&err)))
            .ok();
    }
}
