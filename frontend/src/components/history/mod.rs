//! History panel: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, and view rendering. The list is
//! fetched once, on first render.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::HistoryComponent;

impl Component for HistoryComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        HistoryComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && self.list.begin_load() {
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = crate::api::get_history().await.map_err(|e| e.to_string());
                link.send_message(Msg::ListLoaded(outcome));
            });
        }
    }
}
