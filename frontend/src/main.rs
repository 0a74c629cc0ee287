use crate::app::App;

mod api;
mod app;
mod components;
mod theme;

fn main() {
    yew::Renderer::<App>::new().render();
}
