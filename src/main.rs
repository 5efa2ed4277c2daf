use log::info;
use yew::prelude::*;

mod config;
mod relay;
mod components {
    pub mod carousel;
    pub mod contact_form;
    pub mod nav;
    pub mod reveal;
}
mod pages {
    pub mod home;
}

use components::nav::Nav;
use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
