use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// One-shot visibility flag: flips to revealed the first time enough of the
/// section is on screen and stays that way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealState {
    threshold: f64,
    revealed: bool,
}

impl RevealState {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns true only on the call that reveals the section.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if self.revealed || visible_ratio < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Watches a single element and fires `on_reveal` at most once, then stops
/// observing it. Dropping the handle disconnects the underlying observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe_once<F>(element: &Element, threshold: f64, on_reveal: F) -> Result<Self, JsValue>
    where
        F: FnOnce() + 'static,
    {
        let mut state = RevealState::new(threshold);
        let mut on_reveal = Some(on_reveal);

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let ratio = if entry.is_intersecting() {
                        entry.intersection_ratio()
                    } else {
                        0.0
                    };
                    if state.observe(ratio) {
                        observer.unobserve(&entry.target());
                        if let Some(on_reveal) = on_reveal.take() {
                            on_reveal();
                        }
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
pub struct RiseSectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A `<section>` that rises into place the first time it scrolls into view.
#[function_component(RiseSection)]
pub fn rise_section(props: &RiseSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let observer = match node.cast::<Element>() {
                    Some(element) => {
                        let setter = revealed.setter();
                        let on_reveal = move || {
                            debug!("Section revealed");
                            setter.set(true);
                        };
                        match RevealObserver::observe_once(&element, config::REVEAL_THRESHOLD, on_reveal) {
                            Ok(observer) => Some(observer),
                            Err(err) => {
                                warn!("IntersectionObserver unavailable, showing section: {:?}", err);
                                revealed.set(true);
                                None
                            }
                        }
                    }
                    None => {
                        revealed.set(true);
                        None
                    }
                };
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("rise-section", props.class.clone(), (*revealed).then_some("in-view"))}
        >
            { for props.children.iter() }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_hidden_below_threshold() {
        let mut state = RevealState::new(0.25);
        assert!(!state.observe(0.0));
        assert!(!state.observe(0.24));
        assert!(!state.is_revealed());
    }

    #[test]
    fn reveals_at_exact_threshold() {
        let mut state = RevealState::new(0.25);
        assert!(state.observe(0.25));
        assert!(state.is_revealed());
    }

    #[test]
    fn reveals_only_once_and_never_reverts() {
        let mut state = RevealState::new(0.25);
        let fired: Vec<bool> = [0.1, 0.6, 0.0, 1.0, 0.3, 0.0]
            .into_iter()
            .map(|ratio| state.observe(ratio))
            .collect();

        assert_eq!(fired.iter().filter(|f| **f).count(), 1);
        assert!(fired[1]);
        assert!(state.is_revealed());
    }
}
