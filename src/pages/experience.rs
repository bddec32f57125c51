//! Education and work timeline.

use leptos::prelude::*;

use crate::content::{TIMELINE, TimelineSide, timeline_side};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="section">
            <div class="container container--narrow">
                <h2 class="section__title">"Experience & Education"</h2>
                <p class="section__lead">"My journey through academics and professional roles."</p>
                <ol class="timeline">
                    {TIMELINE
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            let side = match timeline_side(index) {
                                TimelineSide::Left => "timeline__item timeline__item--left",
                                TimelineSide::Right => "timeline__item timeline__item--right",
                            };
                            view! {
                                <li class=side>
                                    <div class="glass-card timeline__card">
                                        <span class=format!("badge {}", entry.gradient)>{entry.kind.badge()}</span>
                                        <h3>{entry.title}</h3>
                                        <p class="timeline__org">{entry.org}</p>
                                        <p class="timeline__period">{entry.period}</p>
                                        <p class="timeline__description">{entry.description}</p>
                                    </div>
                                    <span class=format!("timeline__node {}", entry.gradient) aria-hidden="true"></span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
