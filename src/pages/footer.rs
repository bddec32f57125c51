use leptos::prelude::*;

use crate::content::{HERO_ID, NAV_LINKS, PROFILE};

use super::nav::SocialLinks;

#[must_use]
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {}. All rights reserved.", PROFILE.name)
}

#[component]
pub fn Footer(year: i32) -> impl IntoView {
    let blurb = format!("{} & {} {}", PROFILE.role, PROFILE.interest, PROFILE.tagline.to_lowercase());
    let top_href = format!("#{HERO_ID}");

    view! {
        <footer class="footer">
            <div class="container">
                <div class="grid grid--3 footer__columns">
                    <div>
                        <h3 class="footer__brand">{PROFILE.short_name}</h3>
                        <p class="footer__blurb">{blurb}</p>
                    </div>
                    <div>
                        <h4 class="footer__heading">"Quick Links"</h4>
                        <ul class="footer__links">
                            {NAV_LINKS
                                .iter()
                                .map(|link| view! { <li><a href=link.href()>{link.label}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="footer__heading">"Connect"</h4>
                        <div class="footer__social">
                            <SocialLinks />
                        </div>
                    </div>
                </div>
                <div class="footer__bottom">
                    <p class="footer__copyright">{copyright_line(year)}</p>
                    <p class="footer__credit">"Built with Rust, Leptos & WebGL"</p>
                    <a class="footer__top" href=top_href aria-label="Back to top">
                        "↑"
                    </a>
                </div>
            </div>
        </footer>
    }
}
