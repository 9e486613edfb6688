use yew::prelude::*;
use yew_router::prelude::*;

use crate::nav::{NavAction, NavBarController};
use crate::scroll::ScrollSignal;
use crate::Route;

const SECTIONS: [&str; 4] = ["Mission", "Impact", "Programs", "Stories"];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let nav = use_reducer(NavBarController::default);
    let signal = use_context::<ScrollSignal>();

    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |signal| {
                let subscription = signal.as_ref().map(|signal| {
                    dispatcher.dispatch(NavAction::Scrolled(signal.offset_y()));
                    signal.on_scroll(move |y| dispatcher.dispatch(NavAction::Scrolled(y)))
                });
                move || drop(subscription)
            },
            signal,
        );
    }

    let toggle_menu = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(NavAction::ToggleMenu);
        })
    };

    // Links keep their default action so the page jumps to the section.
    let link_activated = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::LinkActivated))
    };

    let scrolled = nav.is_scrolled();
    let menu_open = nav.mobile_menu_open();

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="logo-mark">{"S"}</span>
                    <span class="logo-text">
                        {"Sparkling Global Foundation"}<span class="accent">{"."}</span>
                    </span>
                </Link<Route>>

                <div class="nav-links">
                    { for SECTIONS.iter().map(|item| html! {
                        <a key={*item} href={format!("#{}", item.to_lowercase())} class="nav-link">{*item}</a>
                    }) }
                </div>

                <a href="#donate" class="nav-cta">{"Donate Now"}</a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if menu_open {
                <div class="mobile-menu">
                    { for SECTIONS.iter().map(|item| html! {
                        <a key={*item}
                            href={format!("#{}", item.to_lowercase())}
                            class="mobile-link"
                            onclick={link_activated.clone()}
                        >
                            {*item}
                        </a>
                    }) }
                    <a href="#donate" class="mobile-cta" onclick={link_activated.clone()}>
                        {"Donate Now"}
                    </a>
                </div>
            }
        </nav>
    }
}
