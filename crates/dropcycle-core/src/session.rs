//! The upload session: a single-owner actor over one ordered event
//! stream.
//!
//! Intents and upload responses are pushed into one channel in arrival
//! order. [`Session::run`] is its only consumer: it owns the
//! [`UploadState`], applies one modification per event, and writes every
//! new state and every outgoing request to one output sink. There is
//! exactly one writer, so no locking is involved.
//!
//! ```rust
//! # use dropcycle_core::{Session, SessionConfig, SessionEvent, SessionOutput, UploadState};
//! # use futures::channel::mpsc;
//! # use futures::{StreamExt, executor::block_on, stream};
//! let (tx, rx) = mpsc::unbounded::<SessionOutput>();
//! let session = Session::new(&SessionConfig::default(), UploadState::initial());
//! let events = stream::iter([SessionEvent::Intent(dropcycle_core::Intent::DragEnter)]);
//! let last = block_on(session.run(events, tx)).expect("output open");
//! assert!(last.has_new_file);
//! assert_eq!(block_on(rx.collect::<Vec<_>>()).len(), 2);
//! ```

use std::pin::pin;

use futures::{Sink, SinkExt, Stream, StreamExt};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::display::DisplayModel;
use crate::intent::Intent;
use crate::model::{Model, Modification, UploadState};
use crate::request::{HttpResponse, UploadRequest};

/// One input to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A decoded drag-and-drop intent.
    Intent(Intent),
    /// A completed HTTP response, for any URL.
    Response(HttpResponse),
}

impl From<Intent> for SessionEvent {
    fn from(intent: Intent) -> Self {
        Self::Intent(intent)
    }
}

impl From<HttpResponse> for SessionEvent {
    fn from(response: HttpResponse) -> Self {
        Self::Response(response)
    }
}

/// One output of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutput {
    /// The state after an event (or the initial state).
    State(UploadState),
    /// An upload request to hand to the HTTP transport.
    Request(UploadRequest),
}

impl SessionOutput {
    /// The display fields for a state output.
    #[must_use]
    pub fn display(&self) -> Option<DisplayModel> {
        match self {
            Self::State(state) => Some(DisplayModel::project(state)),
            Self::Request(_) => None,
        }
    }
}

/// Errors that stop a running session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The output sink stopped accepting items.
    #[error("session output closed")]
    OutputClosed,
}

/// What one event produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    /// Outgoing request, for drop intents.
    pub request: Option<UploadRequest>,
    /// The new state, unless the event was a response for another URL.
    pub state: Option<UploadState>,
}

impl Step {
    /// The outputs in emission order: the request first, then the state.
    pub fn into_outputs(self) -> impl Iterator<Item = SessionOutput> {
        self.request
            .into_iter()
            .map(SessionOutput::Request)
            .chain(self.state.into_iter().map(SessionOutput::State))
    }
}

/// Owner of one session's [`UploadState`].
#[derive(Debug, Clone)]
pub struct Session {
    model: Model,
    state: UploadState,
}

impl Session {
    /// Create a session starting from `initial`.
    #[must_use]
    pub fn new(config: &SessionConfig, initial: UploadState) -> Self {
        Self {
            model: Model::new(config),
            state: initial,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &UploadState {
        &self.state
    }

    /// The routing model.
    #[must_use]
    pub const fn model(&self) -> &Model {
        &self.model
    }

    /// Process one event.
    ///
    /// The request is derived from the event alone, never from the state.
    pub fn handle(&mut self, event: SessionEvent) -> Step {
        let (request, modification) = match event {
            SessionEvent::Intent(intent) => {
                (self.model.request(&intent), Some(Modification::from(intent)))
            }
            SessionEvent::Response(response) => {
                let modification = self.model.response_modification(&response);
                if modification.is_none() {
                    debug!(url = %response.request_url, "ignoring response for other url");
                }
                (None, modification)
            }
        };

        let state = modification.map(|modification| {
            self.state = modification.apply(std::mem::take(&mut self.state));
            self.state.clone()
        });

        Step { request, state }
    }

    /// Run the session until `events` ends.
    ///
    /// Emits the initial state first, then for every event its request
    /// (if any) followed by its new state. Returns the final state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::OutputClosed`] if `outputs` rejects an
    /// item.
    #[allow(clippy::future_not_send)] // file handles are `Rc`; the session runs on one thread
    pub async fn run<E, O>(mut self, events: E, mut outputs: O) -> Result<UploadState, SessionError>
    where
        E: Stream<Item = SessionEvent>,
        O: Sink<SessionOutput> + Unpin,
    {
        info!(upload_url = %self.model.upload_url(), "upload session started");

        let mut events = pin!(events);

        outputs
            .send(SessionOutput::State(self.state.clone()))
            .await
            .map_err(|_| SessionError::OutputClosed)?;

        while let Some(event) = events.next().await {
            for output in self.handle(event).into_outputs() {
                outputs
                    .send(output)
                    .await
                    .map_err(|_| SessionError::OutputClosed)?;
            }
        }

        info!("upload session ended");
        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use futures::channel::mpsc;
    use futures::executor::block_on;
    use futures::stream;

    use super::*;
    use crate::file::{FileDescriptor, FileHandle, InMemoryContents};
    use crate::outcome::Outcome;

    fn file(name: &str) -> FileDescriptor {
        FileDescriptor::new(name, None, FileHandle::new(InMemoryContents::default()))
    }

    fn session() -> Session {
        Session::new(&SessionConfig::default(), UploadState::initial())
    }

    #[test]
    fn drop_step_emits_request_then_state() {
        let mut session = session();
        let outputs: Vec<SessionOutput> = session
            .handle(Intent::Drop(file("a.txt")).into())
            .into_outputs()
            .collect();
        assert_eq!(outputs.len(), 2);
        assert!(matches!(&outputs[0], SessionOutput::Request(r) if r.send.name == "a.txt"));
        assert!(matches!(&outputs[1], SessionOutput::State(s) if s.maybe_current_file.is_some()));
    }

    #[test]
    fn foreign_response_produces_nothing() {
        let mut session = session();
        session.handle(Intent::Drop(file("a.txt")).into());
        let step = session.handle(HttpResponse::from_status("/other", 500).into());
        assert_eq!(step, Step::default());
        assert!(session.state().maybe_current_file.is_some());
    }

    #[test]
    fn run_emits_initial_state_first() {
        let (tx, rx) = mpsc::unbounded();
        let last = block_on(session().run(stream::empty(), tx));
        assert_eq!(last, Ok(UploadState::initial()));
        let outputs: Vec<SessionOutput> = block_on(rx.collect());
        assert_eq!(outputs, vec![SessionOutput::State(UploadState::initial())]);
    }

    #[test]
    fn run_folds_events_in_order() {
        let (tx, rx) = mpsc::unbounded();
        let events = stream::iter(vec![
            SessionEvent::from(Intent::DragEnter),
            Intent::Drop(file("a.txt")).into(),
            HttpResponse::from_status("/upload", 503).into(),
        ]);
        let last = block_on(session().run(events, tx));
        assert_eq!(
            last.map(|s| s.last_outcome),
            Ok(Outcome::Failed("503".into()))
        );

        let states: Vec<UploadState> = block_on(rx.collect::<Vec<_>>())
            .into_iter()
            .filter_map(|output| match output {
                SessionOutput::State(state) => Some(state),
                SessionOutput::Request(_) => None,
            })
            .collect();
        assert_eq!(states.len(), 4);
        assert!(states[1].has_new_file);
        assert!(!states[2].has_new_file);
        assert!(states[3].maybe_current_file.is_none());
    }

    #[test]
    fn run_stops_when_output_closes() {
        let (tx, rx) = mpsc::unbounded();
        drop(rx);
        let events = stream::iter([SessionEvent::from(Intent::DragEnter)]);
        let result = block_on(session().run(events, tx));
        assert_eq!(result, Err(SessionError::OutputClosed));
    }

    #[test]
    fn display_only_for_states() {
        let state = SessionOutput::State(UploadState::initial());
        assert_eq!(
            state.display().map(|d| d.status_message),
            Some("Waiting for file...".to_owned())
        );
        let request = session()
            .handle(Intent::Drop(file("a.txt")).into())
            .request
            .map(SessionOutput::Request);
        assert_eq!(request.and_then(|r| r.display()), None);
    }
}
