//! One request/response cycle for ConversationManager.

use nori_common::{new_correlation_id, Notice};
use tracing::{debug, info, warn};

use crate::identity::IdentityParams;
use crate::request::{truncate_chars, OutgoingRequest};
use crate::response::Reply;
use crate::surface::{ChatSurface, TurnPhase};
use crate::{Message, RagError};

use super::manager::ConversationManager;
use super::types::{TransportFailurePolicy, TurnOutcome};

impl ConversationManager {
    /// Send `raw_input` to the backend and append the reply.
    ///
    /// Configuration and identity problems are reported before anything is
    /// appended. Otherwise the user's turn is appended and rendered first,
    /// then exactly one assistant turn for any HTTP reply. A transport
    /// failure appends an assistant turn only under
    /// [`TransportFailurePolicy::Record`].
    pub async fn submit(
        &mut self,
        raw_input: &str,
        identity: &IdentityParams,
        surface: &mut dyn ChatSurface,
    ) -> TurnOutcome {
        if raw_input.is_empty() {
            return TurnOutcome::Ignored;
        }
        let turn = new_correlation_id();
        let session = self.session.id().short().to_string();

        // Any input replaces the quick-start row.
        self.session.suggestions_used = true;

        enter(surface, TurnPhase::Validating);
        let Some(backend) = self.backend.clone() else {
            let err = RagError::Configuration(
                "backend URL is missing (set backend.url or NORI_API_URL)".into(),
            );
            warn!(%session, %turn, "submission blocked: {err}");
            surface.notify(Notice::error("Configuration invalid", err.to_string()));
            enter(surface, TurnPhase::Idle);
            return TurnOutcome::Rejected(err);
        };
        let identity = match identity.validate(self.settings.identity_policy) {
            Ok(identity) => identity,
            Err(err) => {
                debug!(%session, %turn, "submission blocked: {err}");
                surface.notify(Notice::error("Missing identity", err.to_string()));
                enter(surface, TurnPhase::Idle);
                return TurnOutcome::Rejected(err);
            }
        };

        let message = truncate_chars(raw_input, self.settings.max_message_chars);
        let user_turn = Message::user(message.clone());
        surface.render_message(&user_turn);
        self.session.push(user_turn);

        let request = OutgoingRequest::new(message, &identity, self.recent_history());
        info!(
            %session,
            %turn,
            chars = request.message.chars().count(),
            history = request.history.len(),
            "sending message"
        );

        enter(surface, TurnPhase::Sending);
        let reply = match backend.send(&request).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(%session, %turn, kind = err.kind(), "request failed: {err}");
                let detail = format!("{}: {err}", err.kind());
                surface.notify(Notice::error("Request failed", detail.clone()));
                if self.settings.transport_failure == TransportFailurePolicy::Record {
                    let failure = Message::assistant(format!("Request failed: {detail}"), None);
                    surface.render_message(&failure);
                    self.session.push(failure);
                }
                enter(surface, TurnPhase::Idle);
                return TurnOutcome::TransportFailed(err);
            }
        };

        enter(surface, TurnPhase::Parsing);
        let reply = Reply::interpret(reply.status, &reply.body);
        let outcome = match &reply {
            Reply::Answer { hits, .. } => {
                info!(%session, %turn, hits = hits.len(), "answer received");
                TurnOutcome::Answered
            }
            Reply::BackendError { status, .. } => {
                warn!(%session, %turn, status, "backend returned an error status");
                TurnOutcome::BackendError { status: *status }
            }
            Reply::Malformed { .. } => TurnOutcome::Malformed,
        };

        enter(surface, TurnPhase::AppendAssistantMessage);
        let assistant_turn = reply.into_message();
        surface.render_message(&assistant_turn);
        self.session.push(assistant_turn);

        enter(surface, TurnPhase::Idle);
        outcome
    }
}

fn enter(surface: &mut dyn ChatSurface, phase: TurnPhase) {
    debug!(%phase, "turn phase");
    surface.phase(phase);
}
