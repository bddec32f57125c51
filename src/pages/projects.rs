//! Featured project cards.

use leptos::prelude::*;

use crate::content::{PROFILE, PROJECTS, Project};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="section">
            <div class="container">
                <h2 class="section__title">"Featured Projects"</h2>
                <p class="section__lead">
                    "A selection of projects I've built, from AI-powered tools to full-stack web & mobile apps."
                </p>
                <div class="grid grid--3">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project=*project /> }).collect_view()}
                </div>
                <div class="projects__more">
                    <a class="button button--ghost" href=PROFILE.github_url target="_blank" rel="noopener noreferrer">
                        "View All Projects on GitHub"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let live = project.live_link().map(|href| {
        view! {
            <a class="project-card__link" href=href target="_blank" rel="noopener noreferrer" aria-label="Live demo">
                "Live"
            </a>
        }
    });

    view! {
        <article class="project-card">
            <div class=format!("project-card__bar {}", project.color)></div>
            <div class="project-card__body">
                <div class="project-card__links">
                    <a
                        class="project-card__link"
                        href=project.github
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Source on GitHub"
                    >
                        "Code"
                    </a>
                    {live}
                </div>
                <span class=format!("badge {}", project.color)>{project.category}</span>
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
                <ul class="chips">
                    {project.tech.iter().map(|t| view! { <li class="chip chip--small">{*t}</li> }).collect_view()}
                </ul>
            </div>
        </article>
    }
}
