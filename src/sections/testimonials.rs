use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_visible;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    content: &'static str,
    rating: u32,
    avatar: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Hasna Keyath",
        role: "Parent",
        content: "superb ❤️... this app is very useful for children.. they have the ability to \
                  read well.. the stories in this are very interesting, so children like it \
                  very so much ☺️♥️.....",
        rating: 5,
        avatar: "/assets/media3.png",
    },
    Testimonial {
        name: "Abdul Jabbar",
        role: "Parent",
        content: "This app is very useful to children. The stories are very funny and develop \
                  their moral and mental creativity.",
        rating: 5,
        avatar: "/assets/media4.png",
    },
    Testimonial {
        name: "Haniya_ag",
        role: "Reader",
        content: "mann!! this is all I need. this triggered my childhood memories of reading \
                  malarvaadi. and as a poocha police and pattaalam paili fan... Im done 😭🤯",
        rating: 5,
        avatar: "/assets/media5.png",
    },
];

/// Carousel cursor. The auto-rotate interval and the manual controls both
/// dispatch against the latest state, so they never fight each other.
#[derive(PartialEq)]
struct ActiveCard(usize);

enum CardAction {
    Next,
    Prev,
    Jump(usize),
}

impl Reducible for ActiveCard {
    type Action = CardAction;

    fn reduce(self: Rc<Self>, action: CardAction) -> Rc<Self> {
        let len = TESTIMONIALS.len();
        let next = match action {
            CardAction::Next => (self.0 + 1) % len,
            CardAction::Prev => (self.0 + len - 1) % len,
            CardAction::Jump(index) => index % len,
        };
        Rc::new(ActiveCard(next))
    }
}

fn testimonial_card(t: &Testimonial, active: bool) -> Html {
    let stars: Html = (0..5)
        .map(|i| {
            let class = if i < t.rating { "star lit" } else { "star" };
            html! { <span key={i} class={class}>{"★"}</span> }
        })
        .collect();

    html! {
        <div class={classes!("testimonial-card", active.then(|| "active"))}>
            <div class="testimonial-quote">{"❝"}</div>
            <div class="testimonial-stars">{ stars }</div>
            <p class="testimonial-content">{format!("\"{}\"", t.content)}</p>
            <div class="testimonial-author">
                <img src={t.avatar} alt={t.name} />
                <div>
                    <h4>{t.name}</h4>
                    <p>{t.role}</p>
                </div>
            </div>
        </div>
    }
}

/// Parent quotes. Desktop shows all three with the active one highlighted;
/// mobile shows one card with prev/next arrows and dots. The active card
/// advances every five seconds.
#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let header_ref = use_node_ref();
    let header_visible = use_visible(header_ref.clone(), true);
    let active = use_reducer(|| ActiveCard(0));

    {
        let dispatcher = active.dispatcher();
        use_effect_with(
            (),
            move |_| {
                let interval = Interval::new(5_000, move || dispatcher.dispatch(CardAction::Next));
                move || drop(interval)
            },
        );
    }

    let prev = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.dispatch(CardAction::Prev))
    };
    let next = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.dispatch(CardAction::Next))
    };

    let desktop_cards: Html = TESTIMONIALS
        .iter()
        .enumerate()
        .map(|(index, t)| {
            html! {
                <div
                    key={t.name}
                    class={classes!("testimonial-slot", "reveal", header_visible.then(|| "revealed"))}
                    style={format!("transition-delay: {}ms;", 400 + index * 150)}
                >
                    { testimonial_card(t, index == active.0) }
                </div>
            }
        })
        .collect();

    let dots: Html = (0..TESTIMONIALS.len())
        .map(|index| {
            let jump = {
                let active = active.clone();
                Callback::from(move |_: MouseEvent| active.dispatch(CardAction::Jump(index)))
            };
            html! {
                <button
                    key={index}
                    class={classes!("dot", (index == active.0).then(|| "active"))}
                    onclick={jump}
                />
            }
        })
        .collect();

    html! {
        <section id="testimonials" class="testimonials">
            <div class="testimonials-inner">
                <div
                    ref={header_ref}
                    class={classes!("section-header", "reveal", header_visible.then(|| "revealed"))}
                >
                    <h2 class="section-title">
                        {"What "}
                        <span class="gradient-text">{"Parents Say"}</span>
                    </h2>
                    <p class="section-subtitle">{"Trusted by families around the world"}</p>
                </div>

                <div class="testimonials-desktop">
                    { desktop_cards }
                </div>

                <div class="testimonials-mobile">
                    { testimonial_card(&TESTIMONIALS[active.0], true) }

                    <div class="carousel-controls">
                        <button class="carousel-arrow" onclick={prev}>{"‹"}</button>
                        <div class="carousel-dots">{ dots }</div>
                        <button class="carousel-arrow" onclick={next}>{"›"}</button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
.testimonials {
    position: relative;
    padding: 6rem 0;
    overflow: hidden;
    background: linear-gradient(to bottom, transparent, rgba(76, 29, 149, 0.05), transparent);
}

.testimonials-inner {
    position: relative;
    max-width: 72rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.testimonials-desktop {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
}

.testimonials-mobile {
    display: none;
}

.testimonial-card {
    position: relative;
    padding: 2rem;
    border-radius: 1.5rem;
    background: linear-gradient(135deg, rgba(76, 29, 149, 0.4), rgba(91, 33, 182, 0.2));
    border: 1px solid rgba(168, 85, 247, 0.2);
    backdrop-filter: blur(8px);
    opacity: 0.5;
    transform: scale(0.95);
    transition: opacity 0.5s ease, transform 0.5s ease, box-shadow 0.5s ease;
}

.testimonial-card.active {
    opacity: 1;
    transform: scale(1);
    box-shadow: 0 20px 40px rgba(168, 85, 247, 0.2);
}

.testimonial-quote {
    position: absolute;
    top: -1rem;
    left: -1rem;
    width: 3rem;
    height: 3rem;
    border-radius: 0.75rem;
    background: linear-gradient(135deg, #a855f7, #ec4899);
    display: flex;
    align-items: center;
    justify-content: center;
    color: #ffffff;
    font-size: 1.5rem;
}

.testimonial-stars {
    display: flex;
    gap: 0.25rem;
    margin-bottom: 1.5rem;
}

.star {
    color: #4b5563;
    font-size: 1.25rem;
}

.star.lit {
    color: #facc15;
}

.testimonial-content {
    color: #d1d5db;
    line-height: 1.7;
    font-size: 1.125rem;
    margin-bottom: 2rem;
}

.testimonial-author {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.testimonial-author img {
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 0.75rem;
    object-fit: cover;
    border: 2px solid rgba(168, 85, 247, 0.3);
}

.testimonial-author h4 {
    font-family: 'Exo', sans-serif;
    color: #ffffff;
    font-weight: 700;
}

.testimonial-author p {
    font-size: 0.875rem;
    color: #9ca3af;
}

.carousel-controls {
    display: flex;
    justify-content: center;
    align-items: center;
    gap: 1rem;
    margin-top: 2rem;
}

.carousel-arrow {
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    background: rgba(76, 29, 149, 0.5);
    border: 1px solid rgba(168, 85, 247, 0.2);
    color: #ffffff;
    font-size: 1.5rem;
    cursor: pointer;
    transition: background 0.3s ease, border-color 0.3s ease;
}

.carousel-arrow:hover {
    background: rgba(91, 33, 182, 0.8);
    border-color: rgba(168, 85, 247, 0.4);
}

.carousel-dots {
    display: flex;
    gap: 0.5rem;
}

.dot {
    width: 0.75rem;
    height: 0.75rem;
    border-radius: 9999px;
    border: none;
    background: rgba(168, 85, 247, 0.3);
    cursor: pointer;
    transition: background 0.3s ease, width 0.3s ease;
}

.dot:hover {
    background: rgba(168, 85, 247, 0.5);
}

.dot.active {
    background: #a855f7;
    width: 2rem;
}

@media (max-width: 768px) {
    .testimonials-desktop {
        display: none;
    }

    .testimonials-mobile {
        display: block;
    }
}
                "#}
            </style>
        </section>
    }
}
