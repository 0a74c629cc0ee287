//! Application shell: header navigation between the upload page and the
//! history page, plus the theme toggle.

use yew::{classes, html, Component, Context, Html};

use crate::components::history::HistoryComponent;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::upload::UploadComponent;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    History,
}

pub enum Msg {
    Navigate(Page),
}

pub struct App {
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App { page: Page::Home }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                if self.page == page {
                    return false;
                }
                self.page = page;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let nav_button = |label: &str, page: Page| {
            html! {
                <button
                    class={classes!("nav-link", (self.page == page).then_some("active"))}
                    onclick={link.callback(move |_| Msg::Navigate(page))}
                >
                    {label}
                </button>
            }
        };

        html! {
            <div class="app">
                <header class="app-header">
                    <nav>
                        { nav_button("Upload", Page::Home) }
                        { nav_button("History", Page::History) }
                    </nav>
                    <ThemeToggle />
                </header>
                <main>
                    {
                        match self.page {
                            Page::Home => html! { <UploadComponent /> },
                            Page::History => html! { <HistoryComponent /> },
                        }
                    }
                </main>
            </div>
        }
    }
}
