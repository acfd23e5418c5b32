use yew::prelude::*;
use yew_hooks::use_visible;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    accent: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🧩",
        title: "Interactive Learning",
        description: "Children learn through quizzes, puzzles, and activity-driven lessons \
                      designed for better retention.",
        accent: "linear-gradient(135deg, #a855f7, #ec4899)",
    },
    Feature {
        icon: "🛡️",
        title: "Safe Kid-Friendly Content",
        description: "Age-appropriate stories and shows curated to help families build a \
                      healthy viewing routine.",
        accent: "linear-gradient(135deg, #06b6d4, #3b82f6)",
    },
    Feature {
        icon: "📈",
        title: "Progress Tracking",
        description: "Parents and admins can monitor participation, attempts, and growth \
                      through structured activity data.",
        accent: "linear-gradient(135deg, #22c55e, #10b981)",
    },
    Feature {
        icon: "📚",
        title: "Multiformat Library",
        description: "Watch, read, and play in one place with videos, stories, bright box \
                      modules, and quizzes.",
        accent: "linear-gradient(135deg, #f97316, #eab308)",
    },
];

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    accent: &'static str,
    delay: u32,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let card_ref = use_node_ref();
    let visible = use_visible(card_ref.clone(), true);

    html! {
        <div
            ref={card_ref}
            class={classes!("feature-card", "reveal", visible.then(|| "revealed"))}
            style={format!("transition-delay: {}ms;", props.delay)}
        >
            <div class="feature-card-inner">
                <div class="feature-card-glow" style={format!("background: {};", props.accent)}></div>
                <div class="feature-icon">{props.icon}</div>
                <h3 class="feature-title">{props.title}</h3>
                <p class="feature-description">{props.description}</p>
            </div>
        </div>
    }
}

/// "Why Zaitoon" grid: four cards, each fading up independently as it
/// scrolls into view.
#[function_component(Features)]
pub fn features() -> Html {
    let header_ref = use_node_ref();
    let header_visible = use_visible(header_ref.clone(), true);

    let cards: Html = FEATURES
        .iter()
        .enumerate()
        .map(|(index, feature)| {
            html! {
                <FeatureCard
                    key={feature.title}
                    icon={feature.icon}
                    title={feature.title}
                    description={feature.description}
                    accent={feature.accent}
                    delay={400 + index as u32 * 150}
                />
            }
        })
        .collect();

    html! {
        <section id="features" class="features">
            <div class="features-orb features-orb-left"></div>
            <div class="features-orb features-orb-right"></div>

            <div class="features-inner">
                <div
                    ref={header_ref}
                    class={classes!("section-header", "reveal", header_visible.then(|| "revealed"))}
                >
                    <span class="badge">{"Why Zaitoon"}</span>
                    <h2 class="section-title">
                        {"Powerful Features for "}
                        <span class="gradient-text">{"Growing Minds"}</span>
                    </h2>
                    <p class="section-subtitle">
                        {"Built to engage children, support parents, and simplify educational management."}
                    </p>
                </div>

                <div class="features-grid">
                    { cards }
                </div>
            </div>

            <style>
                {r#"
.features {
    position: relative;
    padding: 6rem 0;
    overflow: hidden;
}

.features-orb {
    position: absolute;
    border-radius: 50%;
    filter: blur(64px);
}

.features-orb-left {
    top: 50%;
    left: 0;
    width: 24rem;
    height: 24rem;
    transform: translateY(-50%);
    background: rgba(147, 51, 234, 0.1);
}

.features-orb-right {
    top: 33%;
    right: 0;
    width: 20rem;
    height: 20rem;
    background: rgba(219, 39, 119, 0.1);
}

.features-inner {
    position: relative;
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.features-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
}

.feature-card-inner {
    position: relative;
    height: 100%;
    padding: 1.75rem;
    border-radius: 1.5rem;
    background: linear-gradient(135deg, rgba(76, 29, 149, 0.45), rgba(91, 33, 182, 0.2));
    border: 1px solid rgba(168, 85, 247, 0.25);
    backdrop-filter: blur(12px);
    overflow: hidden;
    transition: transform 0.3s ease, border-color 0.3s ease, box-shadow 0.3s ease;
}

.feature-card:hover .feature-card-inner {
    transform: translateY(-6px);
    border-color: rgba(192, 132, 252, 0.4);
    box-shadow: 0 22px 40px rgba(124, 58, 237, 0.24);
}

.feature-card-glow {
    position: absolute;
    inset: 0 0 auto 0;
    height: 6rem;
    opacity: 0.35;
    filter: blur(24px);
}

.feature-icon {
    position: relative;
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 1rem;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.15);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.75rem;
    margin-bottom: 1.25rem;
    transition: transform 0.3s ease;
}

.feature-card:hover .feature-icon {
    transform: scale(1.05);
}

.feature-title {
    position: relative;
    font-family: 'Exo', sans-serif;
    font-size: 1.5rem;
    font-weight: 700;
    color: #ffffff;
    margin-bottom: 0.75rem;
}

.feature-description {
    position: relative;
    color: rgba(209, 213, 219, 0.9);
    line-height: 1.7;
}

@media (max-width: 768px) {
    .features-grid {
        grid-template-columns: 1fr;
    }
}
                "#}
            </style>
        </section>
    }
}
