//! Biography, AI interests and the skills grid.

use leptos::prelude::*;

use crate::content::{BIO, INTERESTS, SKILLS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section section--tinted">
            <div class="container">
                <h2 class="section__title">"About Me"</h2>
                <div class="glass-card about__bio">
                    <p>{BIO}</p>
                </div>

                <div class="grid grid--2 about__interests">
                    {INTERESTS
                        .iter()
                        .map(|interest| {
                            view! {
                                <article class=format!("interest-card {}", interest.gradient)>
                                    <h3>{interest.title}</h3>
                                    <p>{interest.description}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>

                <h3 class="section__subtitle">"Skills & Technologies"</h3>
                <div class="grid grid--3">
                    {SKILLS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="skill-card">
                                    <h3 class=group.accent>{group.name}</h3>
                                    <ul class="chips">
                                        {group.items.iter().map(|item| view! { <li class="chip">{*item}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
