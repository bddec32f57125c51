//! Landing section: greeting, resume download and the rotating globe.

use leptos::prelude::*;

use crate::content::{HERO_ID, PROFILE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=HERO_ID class="hero">
            <div class="hero__globe" aria-hidden="true">
                <canvas data-scene="globe"></canvas>
            </div>
            <div class="hero__content">
                <p class="hero__eyebrow">"// Welcome to my portfolio"</p>
                <h1 class="hero__title">
                    "Hi, I'm " <span class="text-gradient">{PROFILE.short_name}</span>
                </h1>
                <p class="hero__lead">
                    "A passionate " <strong>{PROFILE.role}</strong> " and " <strong>{PROFILE.interest}</strong> ". "
                    {PROFILE.tagline}
                </p>
                <div class="hero__actions">
                    <a class="button button--primary" href=PROFILE.resume_path download="">
                        "Download Resume"
                    </a>
                    <a class="button button--ghost" href="#contact">
                        "Contact Me"
                    </a>
                </div>
            </div>
        </section>
    }
}
