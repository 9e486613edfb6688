//! Sparkling Global Foundation landing page.

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod donation;
pub mod hooks;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod scroll;

pub mod components {
    pub mod donate;
    pub mod navbar;
    pub mod program_card;
}
pub mod pages {
    pub mod landing;
}

use hooks::SequencerHandle;
use pages::landing::Landing;
use scroll::{ScrollSignal, WindowHost};

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
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Landing /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    // One registry for the whole page; components reach it through context.
    let signal = use_state(|| ScrollSignal::new(WindowHost::default()));
    let sequencer = use_state(SequencerHandle::default);

    html! {
        <ContextProvider<ScrollSignal> context={(*signal).clone()}>
            <ContextProvider<SequencerHandle> context={(*sequencer).clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<SequencerHandle>>
        </ContextProvider<ScrollSignal>>
    }
}
