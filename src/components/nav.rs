use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config;

/// (anchor, desktop label, overlay label)
pub const NAV_LINKS: &[(&str, &str, &str)] = &[
    ("#home", "HOME", "HOME"),
    ("#about", "ABOUT", "ABOUT"),
    ("#projects", "PROJECTS", "PROJECTS"),
    ("#founder", "FOUNDER", "FOUNDER"),
    ("#contact", "CONTACT", "CONTACT US"),
];

/// `Closing` keeps the overlay mounted while its exit animation runs; it
/// already counts as closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
    Closing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Open,
    Close,
    Toggle,
    ExitFinished,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        *self == MenuState::Open
    }

    pub fn overlay_mounted(&self) -> bool {
        *self != MenuState::Closed
    }

    pub fn next(self, action: MenuAction) -> MenuState {
        match (self, action) {
            (_, MenuAction::Open) => MenuState::Open,
            (MenuState::Open, MenuAction::Close) | (MenuState::Open, MenuAction::Toggle) => {
                MenuState::Closing
            }
            (_, MenuAction::Toggle) => MenuState::Open,
            (MenuState::Closing, MenuAction::ExitFinished) => MenuState::Closed,
            (state, _) => state,
        }
    }
}

fn transition(menu: &UseStateHandle<MenuState>, action: MenuAction) {
    let next = (**menu).next(action);
    if next != **menu {
        debug!("Menu {:?} -> {:?}", **menu, next);
        menu.set(next);
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(|| MenuState::Closed);

    // Unmount the overlay once its exit transition has played
    {
        let deps = *menu;
        let menu = menu.clone();
        use_effect_with_deps(
            move |state| {
                let timeout = (*state == MenuState::Closing).then(|| {
                    Timeout::new(config::MENU_EXIT_ANIMATION_MS, move || {
                        transition(&menu, MenuAction::ExitFinished);
                    })
                });
                move || drop(timeout)
            },
            deps,
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            transition(&menu, MenuAction::Toggle);
        })
    };

    // No prevent_default here so the anchor still scrolls to its section
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| transition(&menu, MenuAction::Close))
    };

    html! {
        <header class="site-header">
            <div class="header-content">
                <a href="#home" class="header-logo">
                    <img src="/justlogo.png" alt="Space-D" width="40" height="40" />
                </a>

                <nav class="desktop-nav">
                    { for NAV_LINKS.iter().map(|(href, label, _)| html! {
                        <a href={*href}>{*label}</a>
                    }) }
                </nav>

                <button
                    class="burger-menu"
                    aria-label="Toggle menu"
                    aria-expanded={menu.is_open().to_string()}
                    onclick={toggle_menu}
                >
                    {"☰"}
                </button>
            </div>

            if menu.overlay_mounted() {
                <div class={classes!("mobile-menu", (*menu == MenuState::Closing).then_some("closing"))}>
                    <button class="mobile-menu-close" aria-label="Close menu" onclick={close_menu.clone()}>
                        {"✕"}
                    </button>
                    <div class="mobile-menu-links">
                        { for NAV_LINKS.iter().map(|(href, _, label)| html! {
                            <a href={*href} onclick={close_menu.clone()}>{*label}</a>
                        }) }
                    </div>
                </div>
            }
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        background: rgba(0, 0, 0, 0.95);
                        z-index: 50;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .header-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0.5rem 1rem;
                    }
                    .desktop-nav {
                        display: none;
                        gap: 2rem;
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                    }
                    .desktop-nav a,
                    .mobile-menu-links a {
                        color: #fff;
                        text-decoration: none;
                    }
                    .burger-menu {
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        background: #000;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        animation: menuIn 0.3s ease-out;
                        transition: opacity 0.3s ease-in, transform 0.3s ease-in;
                    }
                    .mobile-menu.closing {
                        opacity: 0;
                        transform: translateY(-1rem);
                    }
                    .mobile-menu-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .mobile-menu-links {
                        display: flex;
                        flex-direction: column;
                        text-align: center;
                        gap: 1.5rem;
                        letter-spacing: 0.2em;
                    }
                    @keyframes menuIn {
                        from { opacity: 0; transform: translateY(-1rem); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @media (min-width: 768px) {
                        .desktop-nav {
                            display: flex;
                        }
                        .burger-menu,
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_close() {
        let opened = MenuState::Closed.next(MenuAction::Open);
        assert!(opened.is_open());
        let closing = opened.next(MenuAction::Close);
        assert!(!closing.is_open());
        assert_eq!(closing.next(MenuAction::ExitFinished), MenuState::Closed);
    }

    #[test]
    fn opening_twice_stays_open() {
        let state = MenuState::Closed.next(MenuAction::Open).next(MenuAction::Open);
        assert_eq!(state, MenuState::Open);
    }

    #[test]
    fn closing_keeps_overlay_until_exit_finishes() {
        let state = MenuState::Open.next(MenuAction::Close);
        assert_eq!(state, MenuState::Closing);
        assert!(state.overlay_mounted());
        assert!(!state.next(MenuAction::ExitFinished).overlay_mounted());
    }

    #[test]
    fn reopening_during_exit_cancels_close() {
        assert_eq!(MenuState::Closing.next(MenuAction::Open), MenuState::Open);
        assert_eq!(MenuState::Closing.next(MenuAction::Toggle), MenuState::Open);
    }

    #[test]
    fn burger_toggle_alternates_open_and_closed() {
        let mut state = MenuState::Closed;
        for i in 0..6 {
            state = state.next(MenuAction::Toggle);
            assert_eq!(state.is_open(), i % 2 == 0);
            if state == MenuState::Closing {
                assert!(state.overlay_mounted());
                state = state.next(MenuAction::ExitFinished);
            }
        }
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn stray_exit_or_close_is_ignored() {
        assert_eq!(MenuState::Open.next(MenuAction::ExitFinished), MenuState::Open);
        assert_eq!(MenuState::Closed.next(MenuAction::ExitFinished), MenuState::Closed);
        assert_eq!(MenuState::Closed.next(MenuAction::Close), MenuState::Closed);
    }

    #[test]
    fn open_and_closed_alternate() {
        let mut state = MenuState::Closed;
        for i in 0..6 {
            let action = if i % 2 == 0 { MenuAction::Open } else { MenuAction::Close };
            state = state.next(action);
            assert_eq!(state.is_open(), i % 2 == 0);
            if state == MenuState::Closing {
                state = state.next(MenuAction::ExitFinished);
            }
        }
    }
}
