//! View rendering for the history panel: the upload list on one side, the
//! selected detail (table plus download link) on the other.

use common::model::upload::{HistoryDetail, HistoryEntry};
use wasm_bindgen::JsValue;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::table::TableDisplay;

use super::messages::Msg;
use super::state::{DetailState, HistoryComponent, ListState};

pub fn view(component: &HistoryComponent, ctx: &Context<HistoryComponent>) -> Html {
    let link = ctx.link();

    html! {
        <section class="history-panel">
            <h1>{"Upload history"}</h1>
            <div class="history-layout">
                <div class="history-list">{ build_list(&component.list, link) }</div>
                <div class="history-detail">{ build_detail(component.detail.state(), link) }</div>
            </div>
        </section>
    }
}

fn build_list(list: &ListState, link: &Scope<HistoryComponent>) -> Html {
    match list {
        ListState::NotLoaded | ListState::Loading => html! {
            <p class="loading-note">{"Loading…"}</p>
        },
        ListState::LoadFailed(message) => html! {
            <p class="error">{ message.clone() }</p>
        },
        ListState::Loaded(entries) if entries.is_empty() => html! {
            <p class="empty-notice">{"No uploads yet."}</p>
        },
        ListState::Loaded(entries) => html! {
            <ul class="history-entries">
                { for entries.iter().map(|entry| build_entry(entry, link)) }
            </ul>
        },
    }
}

fn build_entry(entry: &HistoryEntry, link: &Scope<HistoryComponent>) -> Html {
    let id = entry.id;
    html! {
        <li key={id}>
            <button class="entry-link" onclick={link.callback(move |_| Msg::Select(id))}>
                { entry.filename.clone() }
            </button>
            <span class="entry-date">{ format_timestamp(&entry.created_at) }</span>
        </li>
    }
}

fn build_detail(detail: &DetailState, _link: &Scope<HistoryComponent>) -> Html {
    match detail {
        DetailState::NoneSelected => html! {
            <p class="empty-notice">{"Select an upload to see its breakdown."}</p>
        },
        DetailState::Loading { .. } => html! {
            <p class="loading-note">{"Loading…"}</p>
        },
        DetailState::SelectFailed(message) => html! {
            <p class="error">{ message.clone() }</p>
        },
        DetailState::Selected(detail) => build_selected(detail),
    }
}

fn build_selected(detail: &HistoryDetail) -> Html {
    html! {
        <div class="detail">
            <div class="detail-header">
                <h2>{ detail.filename.clone() }</h2>
                <a class="btn-primary" href={detail.download_url.clone()}>{"Download table"}</a>
            </div>
            <TableDisplay rows={detail.data.clone()} />
        </div>
    }
}

/// Locale-formatted timestamp; falls back to the raw string when the browser
/// cannot parse it.
fn format_timestamp(iso: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    if date.get_time().is_nan() {
        iso.to_string()
    } else {
        String::from(date.to_locale_string("en-US", &JsValue::UNDEFINED))
    }
}
