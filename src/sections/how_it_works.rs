use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::use_visible;

use crate::config;

struct Step {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        icon: "⬇",
        title: "Download the App",
        description: "Available on App Store and Google Play. Get started in seconds.",
    },
    Step {
        icon: "👤",
        title: "Create a Profile",
        description: "Set up your child's age and preferences for personalized content.",
    },
    Step {
        icon: "📖",
        title: "Choose Content",
        description: "Browse thousands of stories, videos, and games tailored for your child.",
    },
    Step {
        icon: "🏆",
        title: "Start Learning",
        description: "Track progress, earn rewards, and watch your child grow.",
    },
];

#[derive(Properties, PartialEq)]
struct StepCardProps {
    number: usize,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    delay: u32,
    is_left: bool,
}

#[function_component(StepCard)]
fn step_card(props: &StepCardProps) -> Html {
    let step_ref = use_node_ref();
    let visible = use_visible(step_ref.clone(), true);

    let side = if props.is_left { "step-left" } else { "step-right" };

    html! {
        <div ref={step_ref} class={classes!("step", side, visible.then(|| "revealed"))}>
            <div class="step-card" style={format!("transition-delay: {}ms;", props.delay)}>
                <div class="step-number">{props.number}</div>
                <div class="step-icon">{props.icon}</div>
                <h3 class="step-title">{props.title}</h3>
                <p class="step-description">{props.description}</p>
                {
                    if props.number == 1 {
                        html! {
                            <div class="step-stores">
                                <a href={config::APP_STORE_URL} target="_blank" rel="noopener noreferrer">
                                    {"🍎 App Store"}
                                </a>
                                <a href={config::PLAY_STORE_URL} target="_blank" rel="noopener noreferrer">
                                    {"▶ Play Store"}
                                </a>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="step-dot" style={format!("transition-delay: {}ms;", props.delay + 200)}>
                <span></span>
            </div>
            <div class="step-spacer"></div>
        </div>
    }
}

/// Four-step walkthrough on an alternating timeline. The center line fills
/// as the section scrolls through the viewport.
#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let section_ref = use_node_ref();
    let header_ref = use_node_ref();
    let header_visible = use_visible(header_ref.clone(), true);
    let line_progress = use_state_eq(|| 0.0f64);

    {
        let section_ref = section_ref.clone();
        let line_progress = line_progress.clone();
        use_effect_with(
            (),
            move |_| {
                let window = web_sys::window().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let Some(section) = section_ref.cast::<HtmlElement>() else {
                        return;
                    };
                    let Some(window) = web_sys::window() else {
                        return;
                    };
                    let viewport = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    let rect = section.get_bounding_client_rect();
                    let top = rect.top();
                    let height = rect.height();

                    if top < viewport && top + height > 0.0 {
                        let progress = ((viewport - top) / (viewport + height * 0.5)).clamp(0.0, 1.0);
                        line_progress.set(progress);
                    }
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

    let steps: Html = STEPS
        .iter()
        .enumerate()
        .map(|(index, step)| {
            html! {
                <StepCard
                    key={step.title}
                    number={index + 1}
                    icon={step.icon}
                    title={step.title}
                    description={step.description}
                    delay={300 + index as u32 * 200}
                    is_left={index % 2 == 0}
                />
            }
        })
        .collect();

    html! {
        <section ref={section_ref} class="how-it-works">
            <div class="how-inner">
                <div
                    ref={header_ref}
                    class={classes!("section-header", "reveal", header_visible.then(|| "revealed"))}
                >
                    <h2 class="section-title">
                        {"How "}
                        <span class="gradient-text">{"Zaitoon"}</span>
                        {" Works"}
                    </h2>
                    <p class="section-subtitle">
                        {"Get started in four simple steps and unlock a world of learning"}
                    </p>
                </div>

                <div class="timeline">
                    <div class="timeline-line">
                        <div class="timeline-track"></div>
                        <div
                            class="timeline-fill"
                            style={format!("height: {}%;", *line_progress * 100.0)}
                        ></div>
                    </div>

                    <div class="timeline-steps">
                        { steps }
                    </div>
                </div>
            </div>

            <style>
                {r#"
.how-it-works {
    position: relative;
    padding: 6rem 0;
    overflow: hidden;
    background: linear-gradient(to bottom, transparent, rgba(76, 29, 149, 0.05), transparent);
}

.how-inner {
    position: relative;
    max-width: 64rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.timeline {
    position: relative;
}

.timeline-line {
    position: absolute;
    left: 50%;
    top: 0;
    bottom: 0;
    width: 4px;
    transform: translateX(-50%);
}

.timeline-track {
    position: absolute;
    inset: 0;
    background: rgba(168, 85, 247, 0.2);
    border-radius: 9999px;
}

.timeline-fill {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    background: linear-gradient(to bottom, #a855f7, #ec4899);
    border-radius: 9999px;
    transition: height 0.3s ease;
}

.timeline-steps {
    display: flex;
    flex-direction: column;
    gap: 6rem;
}

.step {
    display: flex;
    align-items: center;
    gap: 2rem;
}

.step-right {
    flex-direction: row-reverse;
}

.step-card {
    position: relative;
    flex: 1;
    padding: 2rem;
    border-radius: 1.5rem;
    background: linear-gradient(135deg, rgba(76, 29, 149, 0.4), rgba(91, 33, 182, 0.2));
    border: 1px solid rgba(168, 85, 247, 0.2);
    backdrop-filter: blur(8px);
    opacity: 0;
    transition: opacity 0.7s var(--ease-expo-out), transform 0.7s var(--ease-expo-out),
        border-color 0.3s ease;
}

.step-left .step-card {
    transform: translateX(-5rem);
}

.step-right .step-card {
    transform: translateX(5rem);
}

.step.revealed .step-card {
    opacity: 1;
    transform: translateX(0);
}

.step-card:hover {
    border-color: rgba(168, 85, 247, 0.4);
}

.step-number {
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
    font-weight: 700;
    font-size: 1.125rem;
    box-shadow: 0 10px 20px rgba(168, 85, 247, 0.3);
}

.step-icon {
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 0.75rem;
    background: linear-gradient(135deg, rgba(168, 85, 247, 0.2), rgba(236, 72, 153, 0.2));
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    margin-bottom: 1rem;
}

.step-title {
    font-family: 'Exo', sans-serif;
    font-size: 1.25rem;
    font-weight: 700;
    color: #ffffff;
    margin-bottom: 0.75rem;
}

.step-description {
    color: #9ca3af;
}

.step-stores {
    display: flex;
    gap: 0.75rem;
    margin-top: 1.5rem;
}

.step-stores a {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 0.75rem;
    background: rgba(255, 255, 255, 0.1);
    color: #ffffff;
    font-size: 0.875rem;
    text-decoration: none;
    transition: background 0.3s ease;
}

.step-stores a:hover {
    background: rgba(255, 255, 255, 0.2);
}

.step-dot {
    width: 1rem;
    height: 1rem;
    border-radius: 50%;
    background: linear-gradient(135deg, #a855f7, #ec4899);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 10;
    transform: scale(0);
    transition: transform 0.5s var(--ease-expo-out);
}

.step.revealed .step-dot {
    transform: scale(1);
}

.step-dot span {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 50%;
    background: #ffffff;
}

.step-spacer {
    flex: 1;
}

@media (max-width: 768px) {
    .timeline-line, .step-dot, .step-spacer {
        display: none;
    }

    .step, .step-right {
        flex-direction: column;
    }

    .timeline-steps {
        gap: 4rem;
    }
}
                "#}
            </style>
        </section>
    }
}
