use js_sys::{Array, Date};
use std::{cell::Cell, rc::Rc, time::Duration};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    console, window, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};
use yew::prelude::*;

use crate::content::{
    contact_links, footer_notice, ContactLink, Education, Experience, SkillGroup,
    CONTACT_SECTION_ID, EDUCATION, EXPERIENCE, NAV_ITEMS, PROFILE, SKILL_GROUPS,
};
use crate::reveal::{
    observer_thresholds, Easing, RevealConfig, RevealOrigin, RevealState, RevealTracker,
};
use crate::scroll::{progress_bar_style, ScrollGeometry};
use crate::tilt::{BoundingRect, TiltController};

const SCROLL_EVENTS: [&str; 2] = ["scroll", "resize"];
const HERO_DURATION_MS: u64 = 800;
const HERO_TAGLINE_DELAY_MS: u64 = 300;
const EDUCATION_THRESHOLD: f64 = 0.3;

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

fn read_scroll_geometry() -> ScrollGeometry {
    let Some(win) = window() else {
        return ScrollGeometry::new(0.0, 0.0, 0.0);
    };

    let scroll_offset = win.scroll_y().unwrap_or(0.0);
    let viewport_height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let document_height = win
        .document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);

    ScrollGeometry::new(scroll_offset, document_height, viewport_height)
}

fn current_year() -> u32 {
    Date::new_0().get_full_year()
}

#[hook]
fn use_scroll_fraction() -> f64 {
    let fraction = use_state_eq(|| 0.0_f64);

    {
        let fraction = fraction.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                let update = move || fraction.set(read_scroll_geometry().fraction());
                update();

                let callback = Closure::<dyn Fn()>::new(update);
                for event in SCROLL_EVENTS {
                    let _ = win
                        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
                }
                (win, callback)
            });

            move || {
                if let Some((win, callback)) = listener {
                    for event in SCROLL_EVENTS {
                        let _ = win.remove_event_listener_with_callback(
                            event,
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            }
        });
    }

    *fraction
}

#[function_component(ScrollProgressBar)]
fn scroll_progress_bar() -> Html {
    let fraction = use_scroll_fraction();

    html! {
        <div class="scroll-progress" style={progress_bar_style(fraction)} aria-hidden="true"></div>
    }
}

#[derive(Properties, PartialEq)]
struct TiltPortraitProps {
    src: AttrValue,
    alt: AttrValue,
}

#[function_component(TiltPortrait)]
fn tilt_portrait(props: &TiltPortraitProps) -> Html {
    let image_ref = use_node_ref();
    let controller = use_state_eq(TiltController::new);
    let motion_enabled = use_memo((), |_| !prefers_reduced_motion());

    let onmousemove = {
        let image_ref = image_ref.clone();
        let controller = controller.clone();
        Callback::from(move |event: MouseEvent| {
            if !*motion_enabled {
                return;
            }
            let Some(image) = image_ref.cast::<Element>() else {
                return;
            };

            let bounds = image.get_bounding_client_rect();
            let rect = BoundingRect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height());
            let mut next = *controller;
            if next.pointer_moved(&rect, f64::from(event.client_x()), f64::from(event.client_y())) {
                controller.set(next);
            }
        })
    };

    let onmouseleave = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *controller;
            next.pointer_left();
            controller.set(next);
        })
    };

    let style = format!("transform: {};", controller.current().css_transform());

    html! {
        <div class="portrait">
            <div class="portrait-glow" aria-hidden="true"></div>
            <img
                ref={image_ref}
                class="portrait-image"
                src={props.src.clone()}
                alt={props.alt.clone()}
                style={style}
                {onmousemove}
                {onmouseleave}
            />
        </div>
    }
}

/// Keeps the observer and its JS callback alive together.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn watch(
        element: &Element,
        threshold: f64,
        tracker: Rc<Cell<RevealTracker>>,
        on_reveal: Callback<()>,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let reports = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| (entry.is_intersecting(), entry.intersection_ratio()));

                let mut current = tracker.get();
                let revealed = current.observe_batch(reports);
                tracker.set(current);

                if revealed {
                    observer.disconnect();
                    on_reveal.emit(());
                }
            },
        );

        let thresholds: Array = observer_thresholds(threshold)
            .into_iter()
            .map(JsValue::from_f64)
            .collect();
        let options = IntersectionObserverInit::new();
        options.set_threshold(&thresholds);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }

    fn disconnect(self) {
        self.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
struct RevealProps {
    #[prop_or_default]
    config: RevealConfig,
    #[prop_or_default]
    origin: RevealOrigin,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Html,
}

#[function_component(Reveal)]
fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_state_eq(RevealState::default);
    let config = *use_memo(props.config, |config| {
        if prefers_reduced_motion() {
            config.instant()
        } else {
            *config
        }
    });

    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with(config, move |config| {
            let on_reveal = {
                let state = state.clone();
                Callback::from(move |_| state.set(RevealState::Revealed))
            };

            let observer = if state.is_revealed() {
                None
            } else {
                let tracker = Rc::new(Cell::new(RevealTracker::new(config)));
                let watched = match node.cast::<Element>() {
                    Some(element) => {
                        let watched = RevealObserver::watch(
                            &element,
                            config.threshold(),
                            tracker.clone(),
                            on_reveal.clone(),
                        );
                        if watched.is_none() {
                            console::warn_1(&JsValue::from_str(
                                "IntersectionObserver unavailable; revealing element immediately",
                            ));
                        }
                        watched
                    }
                    None => {
                        console::warn_1(&JsValue::from_str(
                            "reveal target is not mounted; revealing element immediately",
                        ));
                        None
                    }
                };

                if watched.is_none() {
                    let mut current = tracker.get();
                    if current.reveal_unobserved() {
                        on_reveal.emit(());
                    }
                    tracker.set(current);
                }
                watched
            };

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
            }
        });
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone())}
            style={state.style(props.origin, &config)}
        >
            {props.children.clone()}
        </div>
    }
}

#[function_component(NavBar)]
fn nav_bar() -> Html {
    let mut brand = PROFILE.brand.chars();
    let initial: String = brand.next().into_iter().collect();
    let rest: String = brand.collect();

    html! {
        <nav class="site-nav">
            <a class="brand" href="#home">
                <span class="accent">{initial}</span>
                <span>{rest}</span>
            </a>
            <ul class="nav-links">
                { for NAV_ITEMS.iter().map(|item| html! {
                    <li key={item.section_id}>
                        <a href={item.href()}>{item.label}</a>
                    </li>
                }) }
            </ul>
            <a class="button nav-contact" href={PROFILE.mailto()}>{"Contact"}</a>
        </nav>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let heading = RevealConfig::default()
        .with_duration(Duration::from_millis(HERO_DURATION_MS))
        .with_easing(Easing::EaseInOut);
    let tagline = heading.with_delay(Duration::from_millis(HERO_TAGLINE_DELAY_MS));

    html! {
        <section id="home" class="hero">
            <TiltPortrait src={PROFILE.portrait_src} alt={PROFILE.name} />
            <div class="hero-copy">
                <Reveal config={heading}>
                    <h1>{"Hi, I'm "}<span class="accent">{PROFILE.name}</span></h1>
                </Reveal>
                <Reveal config={tagline}>
                    <p class="lead">{PROFILE.tagline}</p>
                </Reveal>
                <a class="button" href={format!("#{CONTACT_SECTION_ID}")}>{"Let's Connect"}</a>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TagListProps {
    tags: &'static [&'static str],
    #[prop_or_default]
    class: Classes,
}

#[function_component(TagList)]
fn tag_list(props: &TagListProps) -> Html {
    html! {
        <div class={classes!("tag-list", props.class.clone())}>
            { for props.tags.iter().map(|tag| html! { <span key={*tag} class="tag">{*tag}</span> }) }
        </div>
    }
}

fn experience_card(index: usize, entry: &Experience) -> Html {
    html! {
        <Reveal key={entry.position} config={RevealConfig::default().staggered(index)}>
            <article class="card experience-card">
                <header class="card-heading">
                    <h3>{entry.position}</h3>
                    <span class="muted">{entry.date_range}</span>
                </header>
                <p class="accent">{entry.company}</p>
                <p class="muted">{entry.summary}</p>
                <TagList tags={entry.skills} />
            </article>
        </Reveal>
    }
}

fn education_entry(index: usize, entry: &Education) -> Html {
    let config = RevealConfig::default()
        .with_threshold(EDUCATION_THRESHOLD)
        .staggered(index);
    let details = entry.details();

    html! {
        <Reveal key={entry.degree} class="timeline-entry" {config} origin={RevealOrigin::Left(20.0)}>
            <span class="timeline-dot" aria-hidden="true"></span>
            <h4>{entry.degree}</h4>
            <p class="accent">{entry.school}</p>
            <p class="muted">{entry.date_range}</p>
            if !details.is_empty() {
                <p class="muted">{details}</p>
            }
        </Reveal>
    }
}

fn skill_group(group: &SkillGroup) -> Html {
    html! {
        <Reveal key={group.title} config={RevealConfig::default().with_threshold(0.0)}>
            <div class="card">
                <h4>{group.title}</h4>
                <TagList tags={group.tags} class="pill-list" />
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct ContactIconLinkProps {
    link: ContactLink,
}

#[function_component(ContactIconLink)]
fn contact_icon_link(props: &ContactIconLinkProps) -> Html {
    let link = &props.link;
    let external = link.href.starts_with("http");

    html! {
        <a
            class="contact-link"
            href={link.href.clone()}
            aria-label={link.label}
            target={external.then_some("_blank")}
            rel={external.then_some("noopener noreferrer")}
        >
            <span aria-hidden="true">{link.kind.icon()}</span>
            if external {
                <span class="sr-only">{" (opens in a new tab)"}</span>
            }
        </a>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <NavBar />
            <ScrollProgressBar />
            <main id="content">
                <Hero />

                <section id="about" class="section-block centered">
                    <h2>{"About Me"}</h2>
                    { for PROFILE.about.iter().map(|paragraph| html! { <p class="muted">{*paragraph}</p> }) }
                </section>

                <section id="experience" class="section-block">
                    <h2>{"Experience"}</h2>
                    <div class="stack">
                        { for EXPERIENCE.iter().enumerate().map(|(index, entry)| experience_card(index, entry)) }
                    </div>
                </section>

                <section id="skills" class="section-block">
                    <h2>{"Education & Skills"}</h2>
                    <div class="two-column">
                        <div class="timeline">
                            <h3 class="accent">{"Education"}</h3>
                            <div class="timeline-rail" aria-hidden="true"></div>
                            { for EDUCATION.iter().enumerate().map(|(index, entry)| education_entry(index, entry)) }
                        </div>
                        <div class="stack">
                            <h3 class="accent">{"Skills"}</h3>
                            { for SKILL_GROUPS.iter().map(skill_group) }
                        </div>
                    </div>
                </section>

                <section id={CONTACT_SECTION_ID} class="section-block centered">
                    <h2>{"Get in Touch"}</h2>
                    <p class="muted">{PROFILE.contact_blurb}</p>
                    <div class="contact-links">
                        { for contact_links().into_iter().map(|link| {
                            let key = link.label;
                            html! { <ContactIconLink key={key} {link} /> }
                        }) }
                    </div>
                </section>
            </main>
            <footer class="site-footer">{footer_notice(current_year())}</footer>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
