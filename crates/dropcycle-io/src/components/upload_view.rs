//! Upload view: heading, outcome and status lines, and the drop zone.

use dioxus::prelude::*;
use dropcycle_core::config::DROP_ZONE_CLASS;
use dropcycle_core::intent::{self, DragEventKind};
use dropcycle_core::{DisplayModel, Intent};

use crate::dom::{BrowserDragEvent, DRAG_OVER};

/// Props for the [`UploadView`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadViewProps {
    /// Text to show, projected from the current upload state.
    display: DisplayModel,
    /// Called with every intent decoded from a drag event on the drop
    /// zone. Malformed events (a drop without a file) never get here.
    on_intent: EventHandler<Intent>,
}

/// Renders a [`DisplayModel`] and turns drag events on the drop zone
/// into [`Intent`]s.
#[component]
pub fn UploadView(props: UploadViewProps) -> Element {
    let DisplayModel {
        outcome_message,
        status_message,
        drop_zone_label,
    } = props.display;
    let on_intent = props.on_intent;

    let forward = move |kind: DragEventKind, evt: DragEvent| {
        let event = BrowserDragEvent::new(kind.event_name(), evt);
        if let Some(intent) = intent::decode_or_skip(&event) {
            on_intent.call(intent);
        }
    };

    rsx! {
        div { class: "upload-view",
            h1 { "Drag and drop cycle" }
            p { class: "upload-outcome", "{outcome_message}" }
            p { class: "upload-status", "{status_message}" }

            div {
                class: "{DROP_ZONE_CLASS}",
                ondragenter: move |evt| forward(DragEventKind::Enter, evt),
                ondragleave: move |evt| forward(DragEventKind::Leave, evt),
                ondragover: move |evt| {
                    intent::suppress_default(&BrowserDragEvent::new(DRAG_OVER, evt));
                },
                ondrop: move |evt| forward(DragEventKind::Drop, evt),
                "{drop_zone_label}"
            }
        }
    }
}
