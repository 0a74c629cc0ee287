//! Header button flipping between the light and dark theme.

use yew::{html, Component, Context, Html};

use crate::theme::{Theme, ThemeStore};

pub enum Msg {
    Toggle,
}

pub struct ThemeToggle {
    store: ThemeStore,
}

impl Component for ThemeToggle {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ThemeToggle {
            store: ThemeStore::load(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle => {
                self.store.toggle();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let icon = match self.store.theme() {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        };
        html! {
            <button
                class="theme-toggle"
                title="Toggle theme"
                onclick={ctx.link().callback(|_| Msg::Toggle)}
            >
                {icon}
            </button>
        }
    }
}
