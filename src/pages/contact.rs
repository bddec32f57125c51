//! Contact section: direct channels plus the message form.
//!
//! The form posts to `/contact` so it works without scripts; `contact.js`
//! intercepts the submit and talks to `/api/send` instead. Both paths render
//! the same [`ContactForm`] states.

use leptos::prelude::*;

use crate::content::{CONTACT_CHANNELS, CONTACT_INTRO};
use crate::services::contact::{ContactForm, FormStatus};

use super::nav::SocialLinks;

#[component]
pub fn ContactSection(form: ContactForm) -> impl IntoView {
    view! {
        <section id="contact" class="section section--tinted">
            <div class="container grid grid--2 contact">
                <div>
                    <h2 class="section__title section__title--left">"Let's Connect"</h2>
                    <p class="contact__intro">{CONTACT_INTRO}</p>
                    <ul class="contact__channels">
                        {CONTACT_CHANNELS
                            .iter()
                            .map(|channel| {
                                let value = match channel.href {
                                    Some(href) => view! { <a href=href>{channel.value}</a> }.into_any(),
                                    None => view! { <span>{channel.value}</span> }.into_any(),
                                };
                                view! {
                                    <li class="contact__channel">
                                        <span class=format!("contact__icon {}", channel.accent) aria-hidden="true"></span>
                                        <div>
                                            <p class="contact__label">{channel.label}</p>
                                            {value}
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="contact__social">
                        <SocialLinks />
                    </div>
                    <canvas class="contact__network" data-scene="network" aria-hidden="true"></canvas>
                </div>
                <ContactFormView form=form />
            </div>
        </section>
    }
}

#[component]
fn ContactFormView(form: ContactForm) -> impl IntoView {
    let label = form.submit_label();
    let status = form.status.map(|status| view! { <p class=status_class(status) data-form-status="">{status.message()}</p> });

    view! {
        <form class="glass-card contact-form" method="post" action="/contact" data-contact-form="">
            <label class="contact-form__label" for="contact-name">
                "Name"
            </label>
            <input
                id="contact-name"
                class="contact-form__input"
                type="text"
                name="name"
                placeholder="Your Name"
                value=form.name
                required=true
            />
            <label class="contact-form__label" for="contact-email">
                "Email"
            </label>
            <input
                id="contact-email"
                class="contact-form__input"
                type="email"
                name="email"
                placeholder="your@email.com"
                value=form.email
                required=true
            />
            <label class="contact-form__label" for="contact-message">
                "Message"
            </label>
            <textarea
                id="contact-message"
                class="contact-form__input"
                name="message"
                rows="4"
                placeholder="Your message..."
                required=true
            >
                {form.message}
            </textarea>
            <button class="button button--primary contact-form__submit" type="submit" disabled=form.submitting>
                {label}
            </button>
            {status}
        </form>
    }
}

fn status_class(status: FormStatus) -> &'static str {
    if status.is_success() { "contact-form__status contact-form__status--ok" } else { "contact-form__status contact-form__status--error" }
}
