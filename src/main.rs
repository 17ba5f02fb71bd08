mod components;
mod config;
mod editor;
mod model;
mod state;
mod surface;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
