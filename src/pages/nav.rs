//! Fixed top navigation bar with a collapsible mobile menu.

use leptos::prelude::*;

use crate::content::{HERO_ID, NAV_LINKS, PROFILE};

#[component]
pub fn Navbar() -> impl IntoView {
    let logo_href = format!("#{HERO_ID}");
    let initial = PROFILE.short_name.chars().next().map(String::from).unwrap_or_default();

    view! {
        <nav class="navbar" data-navbar="">
            <div class="navbar__glass">
                <a class="navbar__logo" href=logo_href>
                    <span class="navbar__mark">{initial}</span>
                    <span class="navbar__brand">
                        <span class="navbar__name">{PROFILE.short_name}</span>
                        <span class="navbar__role">"Developer"</span>
                    </span>
                </a>
                <ul class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a class="navbar__link" href=link.href() data-section=link.target>
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="navbar__social">
                    <SocialLinks />
                </div>
                <button
                    class="navbar__toggle"
                    type="button"
                    aria-label="Toggle menu"
                    aria-expanded="false"
                    data-nav-toggle=""
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div class="navbar__mobile" data-nav-menu="" hidden=true>
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a class="navbar__mobile-link" href=link.href()>
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
                <div class="navbar__mobile-social">
                    <SocialLinks />
                </div>
            </div>
        </nav>
    }
}

/// GitHub and LinkedIn profile links.
#[component]
pub fn SocialLinks() -> impl IntoView {
    view! {
        <a class="social-link" href=PROFILE.github_url target="_blank" rel="noopener noreferrer" aria-label="GitHub">
            "GitHub"
        </a>
        <a class="social-link" href=PROFILE.linkedin_url target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
            "LinkedIn"
        </a>
    }
}
