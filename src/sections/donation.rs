use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::JsFuture;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_visible;

use crate::config;

/// Support panel: Razorpay gateway on one side, direct UPI / bank transfer
/// details on the other, with a copy button for the UPI id.
#[function_component(Donation)]
pub fn donation() -> Html {
    let section_ref = use_node_ref();
    let visible = use_visible(section_ref.clone(), true);
    let copied = use_state(|| false);

    let copy_upi_id = {
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let clipboard = window.navigator().clipboard();
            let copied = copied.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if JsFuture::from(clipboard.write_text(config::UPI_ID)).await.is_ok() {
                    copied.set(true);
                    let copied = copied.clone();
                    Timeout::new(1_800, move || copied.set(false)).forget();
                }
            });
        })
    };

    let bank_rows = |rows: &[(&'static str, &'static str)]| -> Html {
        rows.iter()
            .map(|(label, value)| {
                html! {
                    <>
                        <div class="bank-label">{*label}</div>
                        <div class="bank-value">{*value}</div>
                    </>
                }
            })
            .collect()
    };

    html! {
        <section id="donate" ref={section_ref} class="donation">
            <div class="donation-bg">
                <div class="donation-orb donation-orb-purple"></div>
                <div class="donation-orb donation-orb-pink"></div>
            </div>

            <div class="donation-inner">
                <div class={classes!("donation-panel", "reveal", visible.then(|| "revealed"))}>
                    <div class="donation-grid">
                        <div>
                            <span class="badge">{"Support Us"}</span>

                            <h3 class="donation-title">
                                {"Support This "}
                                <span class="gradient-text">{"Noble Cause"}</span>
                            </h3>

                            <p class="donation-text">
                                {"Your Support helps us maintain and improve the app, add new \
                                  languages, and reach more Muslims worldwide. Every contribution, \
                                  no matter how small, makes a difference."}
                            </p>

                            <div class="donation-card">
                                <p class="donation-card-kicker">{"Razorpay Payment"}</p>
                                <h4>{"Quick support via gateway"}</h4>
                                <p class="donation-card-note">{"Use Razorpay for fast and secure online payment."}</p>
                                <a
                                    href={config::RAZORPAY_PAGE_URL}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="btn-primary donation-cta"
                                >
                                    {"Donate Now"}
                                </a>
                                <p class="donation-card-fine">{"Secure payment gateway"}</p>
                            </div>

                            <div class="donation-visual">
                                <img src="/assets/z-donate.png" alt="Donate visual" />
                            </div>
                        </div>

                        <div class="donation-card donation-upi">
                            <p class="donation-card-kicker">{"Direct UPI & Bank"}</p>
                            <h4 class="donation-upi-title">{"Scan QR or transfer directly"}</h4>

                            <div class="upi-qr">
                                <img src="/assets/upi-qr.png" alt={format!("UPI QR Code – {}", config::ACCOUNT_NAME)} />
                                <p class="upi-qr-caption">{format!("UPI QR Code – {}", config::ACCOUNT_NAME)}</p>
                                <p class="upi-qr-hint">{"Open any UPI app, tap Scan QR, and donate"}</p>
                            </div>

                            <div class="upi-id-row">
                                <span class="upi-id">{config::UPI_ID}</span>
                                <button type="button" class="upi-copy" onclick={copy_upi_id}>
                                    { if *copied { "✓ Copied" } else { "⧉ Copy" } }
                                </button>
                            </div>

                            <div class="bank-table">
                                { bank_rows(&[
                                    ("Account Name", config::ACCOUNT_NAME),
                                    ("TID", config::TERMINAL_ID),
                                    ("Bank", config::BANK_NAME),
                                ]) }
                            </div>

                            <div class="bank-table">
                                { bank_rows(&[
                                    ("Account Name", config::ACCOUNT_NAME),
                                    ("Account number", config::ACCOUNT_NUMBER),
                                    ("IFSC code", config::IFSC_CODE),
                                    ("Branch", config::BANK_BRANCH),
                                ]) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
.donation {
    position: relative;
    padding: 7rem 0 4rem;
    overflow: hidden;
}

.donation-bg {
    position: absolute;
    inset: 0;
    background: linear-gradient(135deg, rgba(76, 29, 149, 0.4), rgba(91, 33, 182, 0.2), rgba(131, 24, 67, 0.3));
}

.donation-orb {
    position: absolute;
    border-radius: 50%;
    filter: blur(64px);
}

.donation-orb-purple {
    top: 0;
    left: 25%;
    width: 24rem;
    height: 24rem;
    background: rgba(147, 51, 234, 0.2);
    animation: floating 8s ease-in-out infinite;
}

.donation-orb-pink {
    bottom: 0;
    right: 25%;
    width: 20rem;
    height: 20rem;
    background: rgba(219, 39, 119, 0.2);
    animation: floating 6s ease-in-out infinite;
    animation-delay: 2s;
}

.donation-inner {
    position: relative;
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.donation-panel {
    border-radius: 1.5rem;
    border: 1px solid rgba(168, 85, 247, 0.3);
    background: rgba(46, 16, 101, 0.4);
    padding: 2rem;
}

.donation-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2.5rem;
}

.donation-title {
    font-family: 'Exo', sans-serif;
    font-size: 2.25rem;
    font-weight: 700;
    color: #ffffff;
    line-height: 1.2;
    margin: 1rem 0;
}

.donation-text {
    color: #d1d5db;
    line-height: 1.7;
    margin-bottom: 1.5rem;
}

.donation-card {
    border-radius: 1rem;
    border: 1px solid rgba(168, 85, 247, 0.3);
    background: rgba(76, 29, 149, 0.25);
    padding: 1.25rem;
}

.donation-card h4 {
    color: #ffffff;
    font-size: 1.25rem;
    font-weight: 700;
    margin: 0.25rem 0 0.5rem;
}

.donation-card-kicker {
    font-size: 0.75rem;
    color: #d8b4fe;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    font-weight: 600;
}

.donation-card-note {
    font-size: 0.875rem;
    color: #d1d5db;
    margin-bottom: 1rem;
}

.donation-cta {
    display: flex;
    width: 100%;
    justify-content: center;
}

.donation-card-fine {
    font-size: 0.75rem;
    color: #9ca3af;
    margin-top: 0.75rem;
}

.donation-visual {
    margin-top: 1rem;
    border-radius: 1rem;
    overflow: hidden;
    border: 1px solid rgba(168, 85, 247, 0.2);
}

.donation-visual img {
    display: block;
    width: 100%;
    height: auto;
}

.donation-upi-title {
    font-family: 'Exo', sans-serif;
    font-size: 1.5rem;
}

.upi-qr {
    border-radius: 1rem;
    border: 1px solid rgba(168, 85, 247, 0.25);
    background: rgba(0, 0, 0, 0.2);
    padding: 1rem;
    margin: 1rem 0;
    text-align: center;
}

.upi-qr img {
    width: 100%;
    max-width: 220px;
    border-radius: 0.75rem;
}

.upi-qr-caption {
    font-size: 0.875rem;
    color: #d1d5db;
    margin-top: 0.75rem;
}

.upi-qr-hint {
    font-size: 0.75rem;
    color: #9ca3af;
    margin-top: 0.25rem;
}

.upi-id-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 0.5rem;
    border-radius: 0.75rem;
    border: 1px solid rgba(168, 85, 247, 0.25);
    background: rgba(46, 16, 101, 0.4);
    padding: 0.5rem 0.75rem;
    margin-bottom: 0.75rem;
}

.upi-id {
    font-size: 0.875rem;
    color: #e5e7eb;
    word-break: break-all;
}

.upi-copy {
    flex-shrink: 0;
    background: none;
    border: none;
    cursor: pointer;
    font-size: 0.75rem;
    font-weight: 600;
    color: #d8b4fe;
    transition: color 0.3s ease;
}

.upi-copy:hover {
    color: #ffffff;
}

.bank-table {
    display: grid;
    grid-template-columns: 1fr 1fr;
    font-size: 0.875rem;
    border-radius: 0.75rem;
    border: 1px solid rgba(168, 85, 247, 0.2);
    overflow: hidden;
    margin-bottom: 0.75rem;
}

.bank-label {
    padding: 0.5rem 0.75rem;
    background: rgba(46, 16, 101, 0.3);
    color: #d1d5db;
}

.bank-value {
    padding: 0.5rem 0.75rem;
    background: rgba(46, 16, 101, 0.15);
    color: #ffffff;
    font-weight: 500;
}

@media (max-width: 1024px) {
    .donation-grid {
        grid-template-columns: 1fr;
    }
}
                "#}
            </style>
        </section>
    }
}
