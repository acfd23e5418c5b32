use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::scroll_to_section;

const NAV_LINKS: [(&str, &str); 3] = [
    ("Features", "#features"),
    ("Popular", "#content"),
    ("Support", "#cta"),
];

/// Fixed top bar. Gets a solid backdrop once the page is scrolled past the
/// hero's first stretch; collapses into a burger menu on small screens.
#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with(
            (),
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 50.0);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
        );
    }

    let scroll_to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = {
        let menu_open = menu_open.clone();
        move |target: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |_: MouseEvent| {
                scroll_to_section(target);
                menu_open.set(false);
            })
        }
    };

    let nav_links = |class: &'static str| -> Html {
        NAV_LINKS
            .iter()
            .map(|&(name, target)| {
                html! {
                    <button key={name} class={class} onclick={go_to(target)}>
                        {name}
                    </button>
                }
            })
            .collect()
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={scroll_to_top}>
                    <img src="/assets/logo.png" alt="Zaitoon" />
                </a>

                <div class="nav-links">
                    { nav_links("nav-link") }
                </div>

                <button class="btn-primary nav-cta" onclick={go_to("#cta")}>
                    {"Get Started"}
                </button>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { nav_links("mobile-link") }
                <button class="btn-primary" onclick={go_to("#cta")}>
                    {"Get Started"}
                </button>
            </div>

            <style>
                {r#"
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    padding: 1.25rem 0;
    background: transparent;
    transition: all 0.5s var(--ease-expo-out);
}

.top-nav.scrolled {
    padding: 0.75rem 0;
    background: rgba(15, 5, 24, 0.75);
    backdrop-filter: blur(12px);
    box-shadow: 0 8px 24px rgba(76, 29, 149, 0.2);
}

.nav-content {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 2rem;
}

.nav-logo img {
    height: 4rem;
    width: auto;
    object-fit: contain;
    transition: transform 0.3s ease;
}

.nav-logo:hover img {
    transform: scale(1.05);
}

.nav-links {
    display: flex;
    align-items: center;
    gap: 2rem;
}

.nav-link {
    position: relative;
    background: none;
    border: none;
    cursor: pointer;
    color: #d1d5db;
    font-size: 0.875rem;
    font-weight: 500;
    transition: color 0.3s ease;
}

.nav-link:hover {
    color: #ffffff;
}

.nav-link::after {
    content: '';
    position: absolute;
    left: 0;
    bottom: -4px;
    width: 0;
    height: 2px;
    background: linear-gradient(to right, #a855f7, #ec4899);
    transition: width 0.3s ease;
}

.nav-link:hover::after {
    width: 100%;
}

.nav-cta {
    font-size: 0.875rem;
}

.burger-menu {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
    padding: 0.5rem;
}

.burger-menu span {
    width: 24px;
    height: 2px;
    background: #ffffff;
    border-radius: 1px;
}

.mobile-menu {
    display: none;
}

@media (max-width: 768px) {
    .nav-links, .nav-cta {
        display: none;
    }

    .burger-menu {
        display: flex;
    }

    .mobile-menu {
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
        margin: 0 1rem;
        padding: 0 1rem;
        max-height: 0;
        overflow: hidden;
        border-radius: 1rem;
        background: rgba(15, 5, 24, 0.9);
        backdrop-filter: blur(12px);
        transition: max-height 0.5s var(--ease-expo-out), padding 0.5s var(--ease-expo-out);
    }

    .mobile-menu.open {
        max-height: 24rem;
        padding: 1rem;
    }

    .mobile-link {
        background: none;
        border: none;
        cursor: pointer;
        text-align: left;
        color: #d1d5db;
        padding: 0.5rem 1rem;
        border-radius: 0.5rem;
        transition: background 0.3s ease, color 0.3s ease;
    }

    .mobile-link:hover {
        color: #ffffff;
        background: rgba(255, 255, 255, 0.05);
    }
}
                "#}
            </style>
        </nav>
    }
}
