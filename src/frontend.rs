use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, AddEventListenerOptions, ScrollBehavior, ScrollIntoViewOptions, Window};
use yew::prelude::*;

use crate::content::PROFILE;
use crate::logging::LogLevel;
use crate::navigation::{AnchorScroller, NavAction, NavigationState, Section, SectionNavigator};
use crate::scroll::{ScrollListener, ScrollTarget};
use crate::sections::{About, Contact, Footer, GithubStats, Projects, Skills, LOGGER};

impl Reducible for NavigationState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

struct DocumentScroller;

impl AnchorScroller for DocumentScroller {
    fn scroll_into_view(&self, anchor_id: &str) -> bool {
        let Some(element) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(anchor_id))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(if prefers_reduced_motion() {
            ScrollBehavior::Auto
        } else {
            ScrollBehavior::Smooth
        });
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

struct WindowScrollTarget {
    window: Window,
}

impl ScrollTarget for WindowScrollTarget {
    type Handle = Closure<dyn FnMut()>;

    fn add_passive_listener(&self, on_offset: Box<dyn Fn(f64)>) -> Option<Self::Handle> {
        let source = self.window.clone();
        let handler = Closure::<dyn FnMut()>::new(move || {
            on_offset(source.scroll_y().unwrap_or(0.0));
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        self.window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                handler.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

        Some(handler)
    }

    fn remove_listener(&self, handle: &Self::Handle) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", handle.as_ref().unchecked_ref());
    }
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    active: Section,
    scrolled: bool,
    on_navigate: Callback<Section>,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class={classes!("site-nav", props.scrolled.then_some("is-scrolled"))}>
            <div class="container nav-inner">
                <p class="brand gradient-text">{PROFILE.name}</p>
                <div class="nav-links">
                    { for Section::ALL.iter().map(|&section| {
                        let on_navigate = props.on_navigate.clone();
                        html! {
                            <button
                                key={section.anchor_id()}
                                type="button"
                                class={classes!("nav-link", (props.active == section).then_some("is-active"))}
                                aria-current={(props.active == section).then_some("true")}
                                onclick={Callback::from(move |_| on_navigate.emit(section))}
                            >
                                {section.label()}
                            </button>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    on_navigate: Callback<Section>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let on_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Section::Contact))
    };

    let on_next = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| {
            if let Some(next) = Section::Home.next() {
                on_navigate.emit(next);
            }
        })
    };

    html! {
        <section id={Section::Home.anchor_id()} class="section hero">
            <div class="hero-copy">
                <p class="eyebrow">{PROFILE.greeting}</p>
                <h1 class="hero-name gradient-text animate-gradient">{PROFILE.name}</h1>
                <h2 class="hero-role">{PROFILE.role}</h2>
                <p class="hero-tagline">{PROFILE.tagline}</p>
                <div class="hero-actions">
                    <a
                        class="button button-primary"
                        href={PROFILE.github_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <span aria-hidden="true">{"⌥"}</span>
                        {"GitHub"}
                    </a>
                    <button class="button button-outline" type="button" onclick={on_contact}>
                        <span aria-hidden="true">{"✉"}</span>
                        {"Contact Me"}
                    </button>
                </div>
            </div>
            <button
                class="scroll-hint"
                type="button"
                aria-label="Scroll to next section"
                onclick={on_next}
            >
                <span aria-hidden="true">{"⌄"}</span>
            </button>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let navigation = use_reducer_eq(NavigationState::default);

    {
        let navigation = navigation.clone();
        use_effect_with((), move |_| {
            let listener = window().and_then(|window| {
                ScrollListener::attach(WindowScrollTarget { window }, move |offset| {
                    navigation.dispatch(NavAction::Scrolled(offset));
                })
            });

            if listener.is_none() {
                LOGGER.event(LogLevel::Warn, "scroll_listener_unavailable", json!({}));
            }

            move || drop(listener)
        });
    }

    let on_navigate = {
        let navigation = navigation.clone();
        Callback::from(move |section: Section| {
            let navigator = SectionNavigator::new(DocumentScroller, LOGGER);
            navigation.dispatch(navigator.go_to(section));
        })
    };

    html! {
        <div class="page">
            <NavBar
                active={navigation.active}
                scrolled={navigation.scrolled}
                on_navigate={on_navigate.clone()}
            />
            <main>
                <Hero on_navigate={on_navigate} />
                <About />
                <Skills />
                <Projects />
                <GithubStats />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

pub fn run() {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        LOGGER.event(LogLevel::Warn, "mount_point_missing", json!({ "id": "app" }));
        return;
    };

    yew::Renderer::<App>::with_root(root).render();
    LOGGER.event(LogLevel::Debug, "app_mounted", json!({}));
}
