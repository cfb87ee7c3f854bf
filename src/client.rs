use crate::{
    api::ChatApi,
    audio::AudioPlayer,
    constants::RESET_ACK_STATUS,
    errors::{InterviewError, InterviewResult},
    models::{ChatMessage, ChatReply, ChatRequest, Role, SessionContext},
    session::SessionStorage,
    transcript::{Transcript, TranscriptView},
};
use log::{debug, info, warn};

/// Which screen the client is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Scenario and level selection.
    Root,
    Chat,
}

/// Result of a message submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The message was blank; nothing was sent.
    Ignored,
    Replied(ChatReply),
}

/// Result of a reset request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    Cleared,
    /// The server answered with some other status; session left as is.
    Declined(String),
}

/// Handlers behind the interview chat screen.
pub struct ChatClient {
    api: ChatApi,
    session: SessionStorage,
    transcript: Transcript,
    view: View,
    player: Box<dyn AudioPlayer>,
    display: Box<dyn TranscriptView>,
}

impl ChatClient {
    pub fn new(
        api: ChatApi,
        player: Box<dyn AudioPlayer>,
        display: Box<dyn TranscriptView>,
    ) -> Self {
        Self {
            api,
            session: SessionStorage::new(),
            transcript: Transcript::new(),
            view: View::Root,
            player,
            display,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn session(&self) -> &SessionStorage {
        &self.session
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Remembers the scenario and level for this session and opens a fresh
    /// chat view.
    pub fn submit_scenario(&mut self, scenario: &str, level: &str) {
        let context = SessionContext {
            scenario: scenario.to_string(),
            level: level.to_string(),
        };
        self.session.store_context(&context);
        info!("scenario selected: {} ({})", scenario, level);
        self.transcript = Transcript::new();
        self.view = View::Chat;
    }

    /// Sends `text` to the interviewer and records the reply.
    ///
    /// Blank input is ignored without touching the transcript or the network.
    /// On failure the user entry stays in the transcript and no assistant
    /// entry is added.
    pub async fn submit_message(&mut self, text: &str) -> InterviewResult<SubmitOutcome> {
        if text.trim().is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }

        let context = self
            .session
            .context()
            .ok_or_else(|| InterviewError::session_error("No scenario selected"))?;

        self.append_message(Role::User, text);

        let request = ChatRequest::new(&context, text);
        let reply = match self.api.post_chat(&request).await {
            Ok(reply) => reply,
            Err(e) => {
                self.display.settle();
                return Err(e);
            }
        };

        self.append_message(Role::Assistant, &reply.response);

        if let Some(audio) = reply.audio.as_deref() {
            // Playback problems never fail the exchange.
            if let Err(e) = self.player.play(audio) {
                warn!("Could not play {}: {}", audio, e);
            }
        }

        Ok(SubmitOutcome::Replied(reply))
    }

    /// Asks the server to reset; clears the session and transcript only on a
    /// `reset` ack.
    pub async fn reset_session(&mut self) -> InterviewResult<ResetOutcome> {
        let ack = self.api.post_reset().await?;

        if ack.status == RESET_ACK_STATUS {
            self.session.clear();
            self.transcript = Transcript::new();
            self.view = View::Root;
            info!("session reset");
            Ok(ResetOutcome::Cleared)
        } else {
            debug!("reset declined with status {:?}", ack.status);
            Ok(ResetOutcome::Declined(ack.status))
        }
    }

    /// Appends an entry to the transcript, shows it, and scrolls to the end.
    pub fn append_message(&mut self, role: Role, content: &str) {
        let message = self.transcript.push(ChatMessage::new(role, content));
        self.display.show(message);
    }
}
