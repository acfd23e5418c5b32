use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod particles;

mod components {
    pub mod particle_canvas;
}

mod sections {
    pub mod content_showcase;
    pub mod donation;
    pub mod download_app;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod how_it_works;
    pub mod navigation;
    pub mod testimonials;
}

mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

/// Scrolls the viewport to the section matching `selector` (e.g.
/// `"#features"`); the document's smooth scroll-behavior does the easing.
/// Missing sections are ignored.
pub fn scroll_to_section(selector: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(Some(element)) = document.query_selector(selector) {
        element.scroll_into_view();
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
