use yew::prelude::*;
use yew_hooks::use_visible;

use crate::config;

const TRUST_AVATARS: [&str; 4] = [
    "/assets/media2.png",
    "/assets/media3.png",
    "/assets/media4.png",
    "/assets/media5.png",
];

/// Closing call to action: store links, trust indicators and one phone
/// mockup, revealed as a block when scrolled into view.
#[function_component(DownloadApp)]
pub fn download_app() -> Html {
    let section_ref = use_node_ref();
    let visible = use_visible(section_ref.clone(), true);

    let avatars: Html = TRUST_AVATARS
        .iter()
        .enumerate()
        .map(|(index, avatar)| {
            html! {
                <img key={index} src={*avatar} alt={format!("Family {}", index + 1)} />
            }
        })
        .collect();

    html! {
        <section id="cta" ref={section_ref} class={classes!("download", visible.then(|| "revealed"))}>
            <div class="download-bg">
                <div class="download-orb download-orb-purple"></div>
                <div class="download-orb download-orb-pink"></div>
            </div>

            <div class="download-inner">
                <div class="download-copy">
                    <span class="badge download-badge">{"🚀 Support Zaitoon Mission"}</span>

                    <h2 class="download-title">
                        {"Help Us Create More "}
                        <span class="gradient-text">{"Stories & Shows"}</span>
                    </h2>

                    <p class="download-text">
                        {"Your support helps us produce better educational content, maintain the \
                          platform, and keep quality learning experiences available to every child."}
                    </p>

                    <div class="download-buttons">
                        <a
                            href={config::APP_STORE_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="store-button"
                        >
                            <span class="store-button-icon">{"🍎"}</span>
                            <span>
                                <small>{"Download from"}</small>
                                <strong>{"App Store"}</strong>
                            </span>
                        </a>

                        <a
                            href={config::PLAY_STORE_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="store-button"
                        >
                            <span class="store-button-icon">{"▶"}</span>
                            <span>
                                <small>{"Download from"}</small>
                                <strong>{"Play Store"}</strong>
                            </span>
                        </a>
                    </div>

                    <div class="download-trust">
                        <div class="trust-avatars">{ avatars }</div>
                        <div>
                            <div class="trust-count">{"50,000+"}</div>
                            <div class="trust-label">{"Happy Families"}</div>
                        </div>
                    </div>
                </div>

                <div class="download-phone">
                    <div class="download-phone-frame floating">
                        <img src="/assets/media1.png" alt="Zaitoon App" />
                    </div>
                </div>
            </div>

            <style>
                {r#"
.download {
    position: relative;
    padding: 6rem 0;
    overflow: hidden;
}

.download-bg {
    position: absolute;
    inset: 0;
    background: linear-gradient(135deg, rgba(76, 29, 149, 0.4), rgba(91, 33, 182, 0.2), rgba(131, 24, 67, 0.3));
}

.download-orb {
    position: absolute;
    border-radius: 50%;
    filter: blur(64px);
}

.download-orb-purple {
    top: 0;
    left: 25%;
    width: 24rem;
    height: 24rem;
    background: rgba(147, 51, 234, 0.2);
    animation: floating 8s ease-in-out infinite;
}

.download-orb-pink {
    bottom: 0;
    right: 25%;
    width: 20rem;
    height: 20rem;
    background: rgba(219, 39, 119, 0.2);
    animation: floating 6s ease-in-out infinite;
    animation-delay: 2s;
}

.download-inner {
    position: relative;
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: center;
}

.download-copy > * {
    opacity: 0;
    transform: translateY(2rem);
    transition: opacity 0.7s var(--ease-expo-out), transform 0.7s var(--ease-expo-out);
}

.download.revealed .download-copy > * {
    opacity: 1;
    transform: translateY(0);
}

.download-copy .download-badge { transition-delay: 200ms; }
.download-copy .download-title { transition-delay: 400ms; }
.download-copy .download-text { transition-delay: 600ms; }
.download-copy .download-buttons { transition-delay: 800ms; }
.download-copy .download-trust { transition-delay: 1000ms; }

.download-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
}

.download-title {
    font-family: 'Exo', sans-serif;
    font-size: clamp(2rem, 5vw, 3.5rem);
    font-weight: 700;
    color: #ffffff;
    line-height: 1.2;
    margin: 1.5rem 0;
}

.download-text {
    max-width: 36rem;
    color: #9ca3af;
    font-size: 1.125rem;
    line-height: 1.7;
    margin-bottom: 2rem;
}

.download-buttons {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    margin-bottom: 2rem;
}

.store-button {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1rem 1.5rem;
    border-radius: 1rem;
    background: #ffffff;
    color: #111827;
    text-decoration: none;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.store-button:hover {
    transform: scale(1.05);
    box-shadow: 0 20px 25px rgba(255, 255, 255, 0.2);
}

.store-button-icon {
    font-size: 1.75rem;
}

.store-button small {
    display: block;
    font-size: 0.75rem;
    color: #4b5563;
}

.store-button strong {
    display: block;
    font-size: 1.125rem;
    line-height: 1.2;
}

.download-trust {
    display: flex;
    align-items: center;
    gap: 1.5rem;
    padding-top: 1rem;
}

.trust-avatars {
    display: flex;
}

.trust-avatars img {
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 50%;
    border: 2px solid #0f0518;
    object-fit: cover;
}

.trust-avatars img + img {
    margin-left: -0.75rem;
}

.trust-count {
    color: #ffffff;
    font-weight: 700;
}

.trust-label {
    font-size: 0.875rem;
    color: #9ca3af;
}

.download-phone {
    display: flex;
    justify-content: center;
    opacity: 0;
    transform: translateX(5rem);
    transition: opacity 1s var(--ease-expo-out), transform 1s var(--ease-expo-out);
    transition-delay: 400ms;
}

.download.revealed .download-phone {
    opacity: 1;
    transform: translateX(0);
}

.download-phone-frame {
    width: 18rem;
    border-radius: 2.5rem;
    overflow: hidden;
    border: 4px solid #1f2937;
    background: #111827;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
    transform: rotateY(-10deg) rotateX(5deg);
}

.download-phone-frame img {
    display: block;
    width: 100%;
    height: auto;
}

@media (max-width: 1024px) {
    .download-inner {
        grid-template-columns: 1fr;
    }

    .download-phone {
        display: none;
    }
}
                "#}
            </style>
        </section>
    }
}
