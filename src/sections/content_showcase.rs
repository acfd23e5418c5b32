use yew::prelude::*;
use yew_hooks::use_visible;

const STORIES: [(&str, &str); 6] = [
    ("/assets/media3.png", "The First Fast of Little Yusuf"),
    ("/assets/media4.png", "The Boy Who Helped a Grandpa"),
    ("/assets/media5.png", "Freedom Stories"),
    ("/assets/media6.png", "Mayuram - The Rooster's Journey"),
    ("/assets/media7.png", "Ela - The Elephant's Adventure"),
    ("/assets/media8.png", "Bright Box Stories"),
];

#[derive(Properties, PartialEq)]
struct ContentCardProps {
    image: &'static str,
    title: &'static str,
    delay: u32,
}

#[function_component(ContentCard)]
fn content_card(props: &ContentCardProps) -> Html {
    let card_ref = use_node_ref();
    let visible = use_visible(card_ref.clone(), true);

    html! {
        <div
            ref={card_ref}
            class={classes!("content-card", "reveal", visible.then(|| "revealed"))}
            style={format!("transition-delay: {}ms;", props.delay)}
        >
            <img src={props.image} alt={props.title} />
        </div>
    }
}

/// Grid of story and show artwork from the app's library.
#[function_component(ContentShowcase)]
pub fn content_showcase() -> Html {
    let header_ref = use_node_ref();
    let header_visible = use_visible(header_ref.clone(), true);

    let cards: Html = STORIES
        .iter()
        .enumerate()
        .map(|(index, (image, title))| {
            html! {
                <ContentCard
                    key={*title}
                    image={*image}
                    title={*title}
                    delay={400 + index as u32 * 80}
                />
            }
        })
        .collect();

    html! {
        <section id="content" class="showcase">
            <div class="showcase-orb showcase-orb-top"></div>
            <div class="showcase-orb showcase-orb-bottom"></div>

            <div class="showcase-inner">
                <div
                    ref={header_ref}
                    class={classes!("section-header", "reveal", header_visible.then(|| "revealed"))}
                >
                    <h2 class="section-title">
                        {"Popular "}
                        <span class="gradient-text">{"Shows & Stories"}</span>
                    </h2>
                    <p class="section-subtitle">
                        {"A curated collection from Zaitoon with clean cards and consistent visuals."}
                    </p>
                </div>

                <div class={classes!("showcase-body", "reveal", header_visible.then(|| "revealed"))}>
                    <h3 class="showcase-heading">
                        <span class="showcase-heading-icon">{"📖"}</span>
                        {"All Content"}
                    </h3>

                    <div class="showcase-grid">
                        { cards }
                    </div>
                </div>
            </div>

            <style>
                {r#"
.showcase {
    position: relative;
    padding: 6rem 0;
    overflow: hidden;
}

.showcase-orb {
    position: absolute;
    border-radius: 50%;
    filter: blur(64px);
}

.showcase-orb-top {
    top: 0;
    right: 0;
    width: 24rem;
    height: 24rem;
    background: rgba(147, 51, 234, 0.1);
}

.showcase-orb-bottom {
    bottom: 0;
    left: 0;
    width: 20rem;
    height: 20rem;
    background: rgba(219, 39, 119, 0.1);
}

.showcase-inner {
    position: relative;
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.showcase-body {
    transition-delay: 200ms;
}

.showcase-heading {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    font-size: 1.5rem;
    font-weight: 700;
    color: #ffffff;
    margin-bottom: 1.5rem;
}

.showcase-heading-icon {
    width: 2rem;
    height: 2rem;
    border-radius: 0.5rem;
    background: linear-gradient(135deg, #a855f7, #ec4899);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1rem;
}

.showcase-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
}

.content-card {
    border-radius: 1.5rem;
    overflow: hidden;
    background: rgba(76, 29, 149, 0.2);
    border: 1px solid rgba(168, 85, 247, 0.2);
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
    transition: transform 0.3s ease, box-shadow 0.3s ease,
        opacity 0.7s var(--ease-expo-out);
}

.content-card:hover {
    transform: translateY(-6px) scale(1.01);
    box-shadow: 0 20px 38px rgba(124, 58, 237, 0.24);
}

.content-card img {
    display: block;
    width: 100%;
    height: auto;
    object-fit: contain;
}

@media (max-width: 1024px) {
    .showcase-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (max-width: 640px) {
    .showcase-grid {
        grid-template-columns: 1fr;
    }
}
                "#}
            </style>
        </section>
    }
}
