use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::particle_canvas::ParticleCanvas;
use crate::scroll_to_section;

const STATS: [(&str, &str); 3] = [
    ("1000+", "Stories"),
    ("50K+", "Downloads"),
    ("4.9", "Rating"),
];

/// Full-height opening section. The particle canvas sits behind the copy
/// and the floating phone mockups; everything else is staggered CSS
/// transitions keyed off one `visible` flag flipped on mount.
#[function_component(Hero)]
pub fn hero() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with(
            (),
            move |_| {
                visible.set(true);
                || ()
            },
        );
    }

    let explore = Callback::from(|_: MouseEvent| scroll_to_section("#content"));
    let support = Callback::from(|_: MouseEvent| scroll_to_section("#cta"));

    let stats: Html = STATS
        .iter()
        .map(|(value, label)| {
            html! {
                <div key={*label} class="hero-stat">
                    <div class="hero-stat-value">{*value}</div>
                    <div class="hero-stat-label">{*label}</div>
                </div>
            }
        })
        .collect();

    html! {
        <section class={classes!("hero", (*visible).then(|| "visible"))}>
            <ParticleCanvas />

            <div class="hero-orb hero-orb-purple"></div>
            <div class="hero-orb hero-orb-pink"></div>
            <div class="hero-orb hero-orb-cyan"></div>

            <div class="hero-content">
                <div class="hero-copy">
                    <span class="hero-tagline">
                        <span class="hero-tagline-dot"></span>
                        {"Learn • Watch • Grow"}
                    </span>

                    <h1 class="hero-title">
                        {"Welcome to "}
                        <span class="gradient-text">{"Zaitoon"}</span>
                    </h1>

                    <p class="hero-description">
                        {"A joyful learning platform where kids discover values, stories, and \
                          creativity through shows, games, and interactive experiences."}
                    </p>

                    <div class="hero-actions">
                        <button class="btn-primary" onclick={explore}>
                            {"Explore Popular Content"}
                            <span class="btn-arrow">{"→"}</span>
                        </button>
                        <button class="btn-secondary" onclick={support}>
                            {"♥ Support the Mission"}
                        </button>
                    </div>

                    <div class="hero-stats">
                        { stats }
                    </div>
                </div>

                <div class="hero-phones">
                    <div class="hero-phone floating">
                        <img src="/assets/media1.png" alt="Zaitoon App Screen 1" />
                    </div>
                    <div class="hero-phone hero-phone-back floating-delayed">
                        <img src="/assets/media2.png" alt="Zaitoon App Screen 2" />
                    </div>
                </div>
            </div>

            <div class="hero-fade"></div>

            <style>
                {r#"
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    overflow: hidden;
    padding-top: 7rem;
}

.particle-canvas {
    position: absolute;
    inset: 0;
    z-index: 1;
    opacity: 0;
    transition: opacity 1.5s ease;
}

.hero.visible .particle-canvas {
    opacity: 1;
}

.hero-orb {
    position: absolute;
    border-radius: 50%;
    filter: blur(64px);
    z-index: 0;
}

.hero-orb-purple {
    top: 25%;
    left: 25%;
    width: 24rem;
    height: 24rem;
    opacity: 0.3;
    background: radial-gradient(circle, #7c3aed 0%, transparent 70%);
    animation: floating 8s ease-in-out infinite;
}

.hero-orb-pink {
    bottom: 25%;
    right: 25%;
    width: 20rem;
    height: 20rem;
    opacity: 0.2;
    background: radial-gradient(circle, #ec4899 0%, transparent 70%);
    animation: floating 6s ease-in-out infinite;
    animation-delay: 2s;
}

.hero-orb-cyan {
    top: 50%;
    right: 33%;
    width: 16rem;
    height: 16rem;
    opacity: 0.2;
    background: radial-gradient(circle, #06b6d4 0%, transparent 70%);
    animation: floating 7s ease-in-out infinite;
    animation-delay: 1s;
}

.hero-content {
    position: relative;
    z-index: 20;
    max-width: 80rem;
    margin: 0 auto;
    padding: 4rem 1.5rem;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: center;
}

.hero-copy > * {
    opacity: 0;
    transform: translateY(2.5rem);
    transition: opacity 0.7s var(--ease-expo-out), transform 0.7s var(--ease-expo-out);
}

.hero.visible .hero-copy > * {
    opacity: 1;
    transform: translateY(0);
}

.hero-copy .hero-tagline { transition-delay: 600ms; }
.hero-copy .hero-title { transition-delay: 800ms; transition-duration: 1s; }
.hero-copy .hero-description { transition-delay: 1000ms; }
.hero-copy .hero-actions { transition-delay: 1200ms; }
.hero-copy .hero-stats { transition-delay: 1400ms; }

.hero-tagline {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    background: rgba(168, 85, 247, 0.1);
    border: 1px solid rgba(168, 85, 247, 0.2);
    color: #d8b4fe;
    font-size: 0.875rem;
    font-weight: 500;
}

.hero-tagline-dot {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 50%;
    background: #a855f7;
    animation: pulse 2s ease-in-out infinite;
}

.hero-title {
    font-family: 'Exo', sans-serif;
    font-size: clamp(2.5rem, 6vw, 4.5rem);
    font-weight: 700;
    line-height: 1.1;
    color: #ffffff;
    margin: 1.5rem 0;
}

.hero-description {
    max-width: 36rem;
    color: #9ca3af;
    font-size: 1.125rem;
    line-height: 1.7;
    margin-bottom: 2rem;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    margin-bottom: 2rem;
}

.btn-arrow {
    display: inline-block;
    margin-left: 0.5rem;
    transition: transform 0.3s ease;
}

.btn-primary:hover .btn-arrow {
    transform: translateX(4px);
}

.hero-stats {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
    padding-top: 1rem;
}

.hero-stat-value {
    font-size: 1.5rem;
    font-weight: 700;
    color: #ffffff;
}

.hero-stat-label {
    font-size: 0.875rem;
    color: #6b7280;
}

.hero-phones {
    position: relative;
    height: 600px;
    perspective: 1500px;
    opacity: 0;
    transform: translateX(5rem);
    transition: opacity 1.4s var(--ease-expo-out), transform 1.4s var(--ease-expo-out);
    transition-delay: 600ms;
}

.hero.visible .hero-phones {
    opacity: 1;
    transform: translateX(0);
}

.hero-phone {
    position: absolute;
    top: 0;
    left: 2.5rem;
    width: 16rem;
    border-radius: 2.5rem;
    overflow: hidden;
    border: 4px solid #1f2937;
    background: #111827;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
    transform: rotateY(-5deg) rotateX(5deg);
}

.hero-phone img {
    display: block;
    width: 100%;
    height: auto;
}

.hero-phone-back {
    top: 5rem;
    left: auto;
    right: 0;
    transform: rotateY(5deg) rotateX(-5deg);
    animation-delay: 1s;
}

.hero-fade {
    position: absolute;
    bottom: 0;
    left: 0;
    right: 0;
    height: 8rem;
    background: linear-gradient(to top, #0f0518, transparent);
    z-index: 30;
}

@media (max-width: 1024px) {
    .hero-content {
        grid-template-columns: 1fr;
    }

    .hero-phones {
        display: none;
    }
}
                "#}
            </style>
        </section>
    }
}
