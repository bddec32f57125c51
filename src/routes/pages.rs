use axum::response::Html;

use crate::pages::render_home;
use crate::services::contact::ContactForm;

/// `GET /`: the whole site.
pub async fn home() -> Html<String> {
    Html(render_home(&ContactForm::default(), current_year()))
}

/// Calendar year in UTC, for the footer.
#[must_use]
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
