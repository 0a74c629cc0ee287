//! View rendering for the upload panel: a drop zone with a file picker,
//! inline validation/request errors, and the result section with the
//! download link and the table/canvas switch.

use common::model::upload::UploadResult;
use web_sys::{DragEvent, Event, HtmlInputElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::api;
use crate::components::canvas::CanvasDisplay;
use crate::components::table::TableDisplay;

use super::messages::Msg;
use super::state::{UploadComponent, UploadState, ViewMode};

pub fn view(component: &UploadComponent, ctx: &Context<UploadComponent>) -> Html {
    let link = ctx.link();

    html! {
        <section class="upload-panel">
            <h1>{"Script upload"}</h1>
            { build_drop_zone(component, link) }
            { build_status(component, link) }
        </section>
    }
}

fn build_drop_zone(component: &UploadComponent, link: &Scope<UploadComponent>) -> Html {
    let submitting = matches!(component.state, UploadState::Submitting);

    let ondragover = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::DragState(true)
    });
    let ondragleave = link.callback(|_| Msg::DragState(false));
    let ondrop = link.batch_callback(|e: DragEvent| {
        e.prevent_default();
        let mut messages = vec![Msg::DragState(false)];
        if let Some(file) = e
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            messages.push(Msg::FileSelected(file));
        }
        messages
    });
    let onchange = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let picked = input.files().and_then(|files| files.get(0));
        // Allow re-picking the same file later.
        input.set_value("");
        picked.map(Msg::FileSelected)
    });

    let zone_class = classes!(
        "drop-zone",
        component.drag_over.then_some("hovering"),
        submitting.then_some("disabled"),
    );

    html! {
        <div class={zone_class} {ondragover} {ondragleave} {ondrop}>
            <p>{"Drop a zipped script here, or"}</p>
            <input
                ref={component.file_input_ref.clone()}
                type="file"
                accept=".zip"
                disabled={submitting}
                {onchange}
            />
            { if submitting { html! { <p class="submitting-note">{"Processing…"}</p> } } else { Html::default() } }
        </div>
    }
}

fn build_status(component: &UploadComponent, link: &Scope<UploadComponent>) -> Html {
    match &component.state {
        UploadState::Failed(message) => html! {
            <p class="error">{ message.clone() }</p>
        },
        UploadState::Succeeded(result) => build_result(result, component.view_mode, link),
        _ => Html::default(),
    }
}

fn build_result(result: &UploadResult, mode: ViewMode, link: &Scope<UploadComponent>) -> Html {
    let toggle_label = match mode {
        ViewMode::Table => "Canvas",
        ViewMode::Canvas => "Table",
    };

    html! {
        <div class="result">
            <h2>{"Result"}</h2>
            <div class="result-actions">
                <a class="btn-primary" href={api::download_url(result.id)}>{"Download table"}</a>
                <button class="btn-primary" onclick={link.callback(|_| Msg::ToggleView)}>
                    {toggle_label}
                </button>
                <button class="btn-secondary" onclick={link.callback(|_| Msg::Reset)}>
                    {"New upload"}
                </button>
            </div>
            {
                match mode {
                    ViewMode::Table => html! { <TableDisplay rows={result.data.clone()} /> },
                    ViewMode::Canvas => html! { <CanvasDisplay rows={result.data.clone()} /> },
                }
            }
        </div>
    }
}
