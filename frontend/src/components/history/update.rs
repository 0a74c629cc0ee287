//! Update logic for the history panel. The machines in `state.rs` decide
//! every transition; this module only dispatches requests and feeds their
//! completions back in.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::HistoryComponent;

pub fn update(component: &mut HistoryComponent, ctx: &Context<HistoryComponent>, msg: Msg) -> bool {
    match msg {
        Msg::ListLoaded(outcome) => {
            if let Err(message) = &outcome {
                gloo_console::error!(format!("history load failed: {}", message));
            }
            component.list.finish_load(outcome);
            true
        }
        Msg::Select(id) => {
            let seq = component.detail.begin_select(id);
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = api::get_result(id).await.map_err(|e| e.to_string());
                link.send_message(Msg::DetailLoaded { seq, outcome });
            });
            true
        }
        Msg::DetailLoaded { seq, outcome } => {
            if let Err(message) = &outcome {
                gloo_console::error!(format!("detail load failed: {}", message));
            }
            component.detail.finish_select(seq, outcome)
        }
    }
}
