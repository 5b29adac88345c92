use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod pacing;

fn main() {
    gloo_console::log!(format!("Catalogue API at {}", config::API_URL));
    yew::Renderer::<App>::new().render();
}
