use dioxus::prelude::*;
use dropcycle_core::{
    DisplayModel, Intent, LatestUpload, Session, SessionConfig, SessionEvent, SessionOutput,
    UploadState,
};
use dropcycle_io::{UploadView, http};
use futures::StreamExt;
use futures::channel::mpsc::{self, UnboundedSender};

const STYLE: &str = include_str!("../assets/main.css");

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Starts the upload session once, forwards the drop zone's intents to
/// it, and renders whatever display model the session last produced.
fn app() -> Element {
    let display = use_signal(|| DisplayModel::project(&UploadState::initial()));
    let latest = use_signal(LatestUpload::default);

    let events = use_hook(move || run_session(&SessionConfig::default(), display, latest));

    let on_intent = move |intent: Intent| {
        if events.unbounded_send(intent.into()).is_err() {
            tracing::debug!("session closed, dropping drag intent");
        }
    };

    rsx! {
        style { dangerous_inner_html: STYLE }

        UploadView { display: display(), on_intent }
    }
}

/// Wire the session actor to the display and the HTTP transport.
///
/// ```text
/// drop-zone intents --+
///                     +--> session -> states   -> display
/// HTTP responses -----+            -> requests -> fetch
/// ```
///
/// Only the response to the most recent request is fed back; responses
/// to requests superseded by a later drop are discarded here.
///
/// Returns the sender intents are pushed into.
fn run_session(
    config: &SessionConfig,
    mut display: Signal<DisplayModel>,
    mut latest: Signal<LatestUpload>,
) -> UnboundedSender<SessionEvent> {
    let (events_tx, events_rx) = mpsc::unbounded::<SessionEvent>();
    let (outputs_tx, mut outputs_rx) = mpsc::unbounded::<SessionOutput>();

    let session = Session::new(config, UploadState::initial());
    spawn(async move {
        if let Err(e) = session.run(events_rx, outputs_tx).await {
            tracing::warn!(error = %e, "upload session stopped");
        }
    });

    let responses_tx = events_tx.clone();
    spawn(async move {
        while let Some(output) = outputs_rx.next().await {
            match output {
                SessionOutput::State(state) => display.set(DisplayModel::project(&state)),
                SessionOutput::Request(request) => {
                    // Any request still in flight is stale from here on.
                    let generation = latest.write().start();
                    let responses_tx = responses_tx.clone();
                    spawn(async move {
                        let response = http::send_or_fail(&request).await;
                        if !latest.peek().is_current(generation) {
                            tracing::debug!(
                                url = %response.request_url,
                                "discarding response to superseded upload"
                            );
                            return;
                        }
                        if responses_tx.unbounded_send(response.into()).is_err() {
                            tracing::debug!("session closed before upload response arrived");
                        }
                    });
                }
            }
        }
    });

    events_tx
}
