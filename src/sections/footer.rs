use yew::prelude::*;
use yew_hooks::use_visible;

use crate::config;

/// Site footer: blurb, contact block, policy links.
#[function_component(Footer)]
pub fn footer() -> Html {
    let footer_ref = use_node_ref();
    let visible = use_visible(footer_ref.clone(), true);

    html! {
        <footer ref={footer_ref} class="footer">
            <div class="footer-inner">
                <div class={classes!("footer-grid", "reveal", visible.then(|| "revealed"))}>
                    <div>
                        <a href="#" class="footer-logo">
                            <img src="/assets/logo.png" alt="Zaitoon" />
                        </a>
                        <p class="footer-blurb">
                            {"Empowering kids with meaningful stories, engaging shows, and \
                              interactive learning through the Zaitoon platform."}
                        </p>
                    </div>

                    <div class="footer-contact">
                        <p>
                            <span class="footer-contact-icon">{"📍"}</span>
                            <span>
                                {"D4DX Innovations LLP"}<br />
                                {"AMH Tower, First Floor, 63/3965 B,"}<br />
                                {"Mavoor Rd, Thiruthiyad, Kozhikode 673004"}
                            </span>
                        </p>
                        <p>
                            <span class="footer-contact-icon">{"📞"}</span>
                            <span>{"+91 98958 04006"}</span>
                        </p>
                    </div>
                </div>

                <div class={classes!("footer-bottom", "reveal", visible.then(|| "revealed"))}>
                    <div class="footer-legal">
                        <p>{"© 2025 Zaitoon Kids. All rights reserved."}</p>
                        <p>
                            {"Powered By "}
                            <a href={config::COMPANY_URL} target="_blank" rel="noopener noreferrer">
                                {"D4DX Innovations LLP"}
                            </a>
                        </p>
                    </div>
                    <div class="footer-links">
                        <a href={config::RAZORPAY_POLICY_URL} target="_blank" rel="noopener noreferrer">
                            {"Privacy Policy"}
                        </a>
                        <a href={config::RAZORPAY_POLICY_URL} target="_blank" rel="noopener noreferrer">
                            {"Terms of Service"}
                        </a>
                        <a href={config::CONTACT_URL} target="_blank" rel="noopener noreferrer">
                            {"Contact Us"}
                        </a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
.footer {
    position: relative;
    padding: 4rem 0 2rem;
    overflow: hidden;
    border-top: 1px solid rgba(168, 85, 247, 0.2);
    background: linear-gradient(to bottom, rgba(76, 29, 149, 0.3), #130a1f, #10071a);
}

.footer-inner {
    position: relative;
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.footer-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2.5rem;
    margin-bottom: 2.5rem;
    transition-delay: 200ms;
}

.footer-logo img {
    height: 3rem;
    width: auto;
    object-fit: contain;
    margin-bottom: 1.25rem;
}

.footer-blurb {
    max-width: 28rem;
    color: #d1d5db;
    line-height: 1.7;
}

.footer-contact p {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    color: #d1d5db;
    margin-bottom: 1rem;
}

.footer-contact-icon {
    color: #67e8f9;
    margin-top: 0.125rem;
}

.footer-bottom {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    padding-top: 1.5rem;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    transition-delay: 600ms;
}

.footer-legal {
    font-size: 0.875rem;
    color: #9ca3af;
}

.footer-legal a {
    color: #9ca3af;
    text-decoration: none;
}

.footer-legal a:hover {
    color: #ffffff;
}

.footer-links {
    display: flex;
    flex-wrap: wrap;
    gap: 1.25rem;
    font-size: 0.875rem;
}

.footer-links a {
    color: #d1d5db;
    text-decoration: none;
    transition: color 0.3s ease;
}

.footer-links a:hover {
    color: #ffffff;
}

@media (max-width: 768px) {
    .footer-grid {
        grid-template-columns: 1fr;
    }

    .footer-bottom {
        flex-direction: column;
        text-align: center;
    }
}
                "#}
            </style>
        </footer>
    }
}
