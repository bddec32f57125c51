//! Server-rendered page.
//!
//! DESIGN
//! ======
//! The whole site is one document rendered per request with Leptos in SSR
//! mode. There is no hydration: the few interactive parts (contact form,
//! WebGL scenes, mobile menu) are plain scripts under `/assets`, and the page
//! works without them through the `POST /contact` fallback.

mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod nav;
mod projects;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::content::{PAGE_DESCRIPTION, PAGE_TITLE};
use crate::services::contact::ContactForm;

use about::About;
use contact::ContactSection;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use nav::Navbar;
use projects::Projects;

/// Render the full page document.
///
/// `form` drives the contact section (field values, status line, submit
/// control). `year` is printed in the footer copyright.
#[must_use]
pub fn render_home(form: &ContactForm, year: i32) -> String {
    let form = form.clone();
    let owner = Owner::new();
    owner.with(|| view! { <HomePage form=form year=year /> }.to_html())
}

#[component]
fn HomePage(form: ContactForm, year: i32) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{PAGE_TITLE}</title>
                <meta name="description" content=PAGE_DESCRIPTION />
                <link rel="stylesheet" href="/assets/site.css" />
            </head>
            <body>
                <canvas class="star-canvas" data-scene="stars" aria-hidden="true"></canvas>
                <Navbar />
                <main class="page">
                    <Hero />
                    <About />
                    <Experience />
                    <Projects />
                    <ContactSection form=form />
                    <Footer year=year />
                </main>
                <script src="/assets/nav.js"></script>
                <script src="/assets/contact.js"></script>
                <script src="/assets/scene.js"></script>
            </body>
        </html>
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
