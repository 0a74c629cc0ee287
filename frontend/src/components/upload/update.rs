//! Update logic for the upload panel.
//!
//! The state machine itself lives in `state.rs`; this module wires it to the
//! component messages and owns the one side effect, spawning the upload
//! request. The request is started only after `validate` moved the machine
//! to `Submitting`, so a rejected filename never reaches the network.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::{UploadComponent, ViewMode};

pub fn update(component: &mut UploadComponent, ctx: &Context<UploadComponent>, msg: Msg) -> bool {
    match msg {
        Msg::FileSelected(file) => {
            component.drag_over = false;
            if !component.state.begin() {
                // Already submitting; the new pick is ignored.
                return true;
            }
            if component.state.validate(&file.name()) {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = api::upload_script(file).await.map_err(|e| e.to_string());
                    link.send_message(Msg::Finished(outcome));
                });
            }
            true
        }
        Msg::Finished(outcome) => {
            if let Err(message) = &outcome {
                gloo_console::error!(format!("upload failed: {}", message));
            }
            component.state.finish(outcome);
            // A fresh result always opens in table mode.
            component.view_mode = ViewMode::Table;
            true
        }
        Msg::DragState(hovering) => {
            if component.drag_over == hovering {
                return false;
            }
            component.drag_over = hovering;
            true
        }
        Msg::ToggleView => {
            component.view_mode = component.view_mode.toggled();
            true
        }
        Msg::Reset => {
            component.state.reset();
            component.view_mode = ViewMode::Table;
            true
        }
    }
}
