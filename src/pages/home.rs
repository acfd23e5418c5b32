use yew::prelude::*;

use crate::sections::content_showcase::ContentShowcase;
use crate::sections::donation::Donation;
use crate::sections::download_app::DownloadApp;
use crate::sections::features::Features;
use crate::sections::footer::Footer;
use crate::sections::hero::Hero;
use crate::sections::how_it_works::HowItWorks;
use crate::sections::navigation::Navigation;
use crate::sections::testimonials::Testimonials;

/// The whole site is this one page: fixed nav, marketing sections in
/// scroll order, footer.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="site">
            <img src="/assets/gradiant-left.png" alt="" aria-hidden="true" class="site-glow site-glow-left" />
            <img src="/assets/gradiant-right.png" alt="" aria-hidden="true" class="site-glow site-glow-right" />

            <Navigation />

            <main class="site-main">
                <Donation />
                <Hero />
                <Features />
                <HowItWorks />
                <ContentShowcase />
                <Testimonials />
                <DownloadApp />
            </main>

            <Footer />
        </div>
    }
}
