//! Clickable card for one candidate in the school lists.

use leptos::prelude::*;

use crate::net::types::Candidate;

/// A candidate card; clicking it selects the candidate for confirmation.
#[component]
pub fn CandidateCard(candidate: Candidate, on_select: Callback<Candidate>) -> impl IntoView {
    let full_name = candidate.full_name.clone();
    let registration_number = candidate.registration_number.clone();

    view! {
        <div class="candidate-card" on:click=move |_| on_select.run(candidate.clone())>
            <h3 class="candidate-card__name">{full_name}</h3>
            <p class="candidate-card__reg">{registration_number}</p>
        </div>
    }
}
