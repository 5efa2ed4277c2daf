use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::config;

/// Cyclic position over a fixed, non-empty list of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    position: usize,
    len: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Advance,
    Retreat,
}

impl Carousel {
    /// An empty list is treated as a single slide so the position stays valid.
    pub fn new(len: usize) -> Self {
        Self {
            position: 0,
            len: len.max(1),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn advance(&mut self) {
        self.position = (self.position + 1) % self.len;
    }

    pub fn retreat(&mut self) {
        self.position = (self.position + self.len - 1) % self.len;
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Advance => self.advance(),
            CarouselAction::Retreat => self.retreat(),
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        if next == *self {
            return self;
        }
        debug!("Carousel {:?} -> slide {}", action, next.position);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCarouselProps {
    pub images: &'static [&'static str],
    #[prop_or(config::AUTOPLAY_INTERVAL_MS)]
    pub interval_ms: u32,
}

#[function_component(ProjectCarousel)]
pub fn project_carousel(props: &ProjectCarouselProps) -> Html {
    let len = props.images.len();
    let carousel = use_reducer(move || Carousel::new(len));

    // Autoplay keeps its own cadence; manual clicks neither pause nor reset it
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |interval_ms| {
                let interval = Interval::new(*interval_ms, move || {
                    dispatcher.dispatch(CarouselAction::Advance);
                });
                move || drop(interval)
            },
            props.interval_ms,
        );
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Retreat))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Advance))
    };

    let track_style = format!("transform: translateX(-{}%);", carousel.position() * 100);

    html! {
        <div class="carousel">
            <div class="carousel-badge">
                <img src="/justlogo.png" alt="Space-D Logo" width="50" height="50" />
            </div>
            <div class="carousel-track" style={track_style}>
                { for props.images.iter().enumerate().map(|(i, src)| html! {
                    <img
                        key={*src}
                        src={*src}
                        alt={format!("Project {}", i + 1)}
                        class="carousel-slide"
                        loading="lazy"
                    />
                }) }
            </div>
            <button class="carousel-control prev" aria-label="Previous project" onclick={on_prev}>{"‹"}</button>
            <button class="carousel-control next" aria-label="Next project" onclick={on_next}>{"›"}</button>
            <div class="carousel-dots">
                { for (0..carousel.len()).map(|i| html! {
                    <span class={classes!("carousel-dot", (i == carousel.position()).then_some("active"))}></span>
                }) }
            </div>
            <style>
                {r#"
                    .carousel {
                        position: relative;
                        width: 100%;
                        aspect-ratio: 4 / 3;
                        overflow: hidden;
                        border-radius: 0.75rem;
                        background: #000;
                    }
                    @media (min-width: 768px) {
                        .carousel {
                            aspect-ratio: 16 / 10;
                        }
                    }
                    .carousel-badge {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        z-index: 20;
                        opacity: 0.8;
                    }
                    .carousel-track {
                        display: flex;
                        height: 100%;
                        transition: transform 0.7s ease-in-out;
                    }
                    .carousel-slide {
                        min-width: 100%;
                        height: 100%;
                        object-fit: contain;
                        background: #000;
                    }
                    .carousel-control {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        background: rgba(0, 0, 0, 0.6);
                        color: #fff;
                        border: none;
                        border-radius: 9999px;
                        padding: 0.5rem 0.75rem;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .carousel-control.prev { left: 0.75rem; }
                    .carousel-control.next { right: 0.75rem; }
                    .carousel-dots {
                        position: absolute;
                        bottom: 0.75rem;
                        width: 100%;
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                    }
                    .carousel-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.4);
                    }
                    .carousel-dot.active {
                        background: #FDB614;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(len: usize, position: usize) -> Carousel {
        let mut carousel = Carousel::new(len);
        for _ in 0..position {
            carousel.advance();
        }
        carousel
    }

    #[test]
    fn starts_at_first_slide() {
        assert_eq!(Carousel::new(4).position(), 0);
    }

    #[test]
    fn advance_wraps_from_last_to_first() {
        let mut carousel = at(4, 3);
        carousel.advance();
        assert_eq!(carousel.position(), 0);
    }

    #[test]
    fn retreat_wraps_from_first_to_last() {
        let mut carousel = Carousel::new(4);
        carousel.retreat();
        assert_eq!(carousel.position(), 3);
    }

    #[test]
    fn advance_and_retreat_cancel_out() {
        for len in 1..=6 {
            for start in 0..len {
                let mut forward = at(len, start);
                forward.advance();
                forward.retreat();
                assert_eq!(forward.position(), start, "advance/retreat len={len}");

                let mut backward = at(len, start);
                backward.retreat();
                backward.advance();
                assert_eq!(backward.position(), start, "retreat/advance len={len}");
            }
        }
    }

    #[test]
    fn position_stays_in_range_over_mixed_moves() {
        let mut carousel = Carousel::new(4);
        let moves = [
            CarouselAction::Retreat,
            CarouselAction::Retreat,
            CarouselAction::Advance,
            CarouselAction::Retreat,
            CarouselAction::Retreat,
            CarouselAction::Retreat,
            CarouselAction::Advance,
            CarouselAction::Advance,
        ];
        for action in moves.iter().cycle().take(50) {
            carousel.apply(*action);
            assert!(carousel.position() < carousel.len());
        }
    }

    #[test]
    fn single_slide_never_moves() {
        let mut carousel = Carousel::new(1);
        carousel.advance();
        assert_eq!(carousel.position(), 0);
        carousel.retreat();
        assert_eq!(carousel.position(), 0);
    }

    #[test]
    fn empty_list_is_clamped_to_one_slide() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.len(), 1);
        carousel.retreat();
        assert_eq!(carousel.position(), 0);
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(Carousel::new(1));
        let next = state.clone().reduce(CarouselAction::Advance);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn reducer_advances() {
        let next = Rc::new(Carousel::new(4)).reduce(CarouselAction::Advance);
        assert_eq!(next.position(), 1);
    }
}
