//! Inline banner for form errors and success notices.

use leptos::prelude::*;

/// Visual style of an [`Alert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

/// Inline banner shown above a form.
#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => "alert alert--error",
        AlertKind::Success => "alert alert--success",
    };

    view! {
        <div class=class>{message}</div>
    }
}
