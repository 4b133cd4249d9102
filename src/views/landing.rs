//! 「準備中」ランディングページ

use leptos::*;
use super::ContactFormView;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            // 背景の放射状グロー
            <div class="radial-glow" aria-hidden="true"></div>

            <div class="landing-container">
                <header class="hero">
                    <img class="logo fade-in delay-300" src="./logo.svg" alt="Logo" />
                    <h1 class="fade-in delay-500">"We're building our new site!"</h1>
                    <p class="tagline fade-in delay-800">"Check back soon."</p>
                </header>

                <section class="fade-in delay-1200">
                    <ContactFormView />
                </section>
            </div>
        </div>
    }
}
