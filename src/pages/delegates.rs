//! Voting page: candidates grouped by school, selection, and confirmation.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::alert::{Alert, AlertKind};
use crate::components::candidate_card::CandidateCard;
use crate::net::types::Candidate;
use crate::state::voting::{FetchStatus, VotingState};
#[cfg(feature = "csr")]
use crate::util::auth_token::SharedTokenStore;
use crate::util::timer::TimeoutHandle;

/// How long the thank-you banner stays up after a vote.
pub const SUCCESS_BANNER_MS: u32 = 3_000;

/// Voting page.
///
/// Fetches the candidate list once on mount, shows the schools while
/// browsing, and swaps to the confirmation form once a candidate is
/// selected. The banner timer is owned by the page and cancelled on
/// teardown.
#[component]
pub fn DelegatesPage() -> impl IntoView {
    let voting = RwSignal::new(VotingState::default());
    let banner_timer = StoredValue::new_local(TimeoutHandle::default());

    #[cfg(feature = "csr")]
    let tokens = expect_context::<SharedTokenStore>();

    on_cleanup(move || banner_timer.update_value(TimeoutHandle::cancel));

    // Single candidate fetch, on mount.
    #[cfg(feature = "csr")]
    {
        let tokens = tokens.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_candidates(tokens.get().as_deref()).await {
                Ok(candidates) => voting.update(|v| v.load_success(candidates)),
                Err(message) => voting.update(|v| v.load_failure(message)),
            }
        });
    }

    let on_select = Callback::new(move |candidate: Candidate| {
        voting.update(|v| v.select_candidate(candidate));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(submission) = voting.try_update(VotingState::build_submission).flatten() else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let tokens = tokens.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_vote(&submission, tokens.get().as_deref()).await {
                    Ok(()) => {
                        voting.update(VotingState::record_success);
                        banner_timer.set_value(crate::util::timer::schedule(
                            SUCCESS_BANNER_MS,
                            move || voting.update(VotingState::clear_success),
                        ));
                    }
                    Err(message) => voting.update(|v| v.record_failure(message)),
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        let _ = submission;
    };

    let heading = move || {
        if voting.get().is_confirming() {
            "Confirm Your Vote"
        } else {
            "Student Delegates Election"
        }
    };

    view! {
        <Title text="Student Delegates Election"/>

        <div class="vote-page">
            <div class="vote-page__card">
                <h1 class="vote-page__title">{heading}</h1>

                {move || {
                    voting
                        .get()
                        .error
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message/> })
                }}

                <Show when=move || voting.get().success>
                    <Alert
                        kind=AlertKind::Success
                        message="Thank you for voting! Your vote has been recorded."
                    />
                </Show>

                {move || {
                    let state = voting.get();
                    match state.status {
                        FetchStatus::Loading => {
                            view! { <p class="vote-page__loading">"Loading candidates..."</p> }
                                .into_any()
                        }
                        // The error banner above already covers a failed fetch.
                        FetchStatus::Failed => ().into_any(),
                        FetchStatus::Loaded => {
                            if let Some(candidate) = state.selected.clone() {
                                let on_submit = on_submit.clone();
                                confirm_form(voting, &candidate, on_submit).into_any()
                            } else {
                                school_lists(&state, on_select).into_any()
                            }
                        }
                    }
                }}
            </div>
        </div>
    }
}

/// Candidate lists grouped by school, in first-encounter order.
fn school_lists(state: &VotingState, on_select: Callback<Candidate>) -> impl IntoView {
    view! {
        <div class="vote-page__schools">
            {state
                .candidates_by_school()
                .into_iter()
                .map(|(school, candidates)| {
                    view! {
                        <section class="school-group">
                            <h2 class="school-group__name">{school}</h2>
                            <div class="school-group__grid">
                                {candidates
                                    .into_iter()
                                    .map(|candidate| {
                                        view! {
                                            <CandidateCard candidate=candidate on_select=on_select/>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </section>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Confirmation form for the selected candidate.
fn confirm_form(
    voting: RwSignal<VotingState>,
    candidate: &Candidate,
    on_submit: impl FnMut(leptos::ev::SubmitEvent) + 'static,
) -> impl IntoView {
    let name = candidate.full_name.clone();
    let school = candidate.school.clone();
    let registration_number = candidate.registration_number.clone();

    view! {
        <form class="vote-page__confirm" on:submit=on_submit>
            <div class="vote-page__selected">
                <h3 class="vote-page__selected-heading">"Selected Candidate"</h3>
                <p class="vote-page__selected-name">{name}</p>
                <p class="vote-page__selected-school">{school}</p>
                <p class="vote-page__selected-reg">"Reg: " {registration_number}</p>
            </div>

            <label class="form-page__label">
                "Your Full Name"
                <input
                    class="form-page__input"
                    type="text"
                    required=true
                    prop:value=move || voting.get().voter_full_name
                    on:input=move |ev| {
                        voting.update(|v| v.set_voter_full_name(event_target_value(&ev)));
                    }
                />
            </label>

            <label class="form-page__label">
                "Your Registration Number"
                <input
                    class="form-page__input"
                    type="text"
                    required=true
                    prop:value=move || voting.get().voter_reg_number
                    on:input=move |ev| {
                        voting.update(|v| v.set_voter_reg_number(event_target_value(&ev)));
                    }
                />
            </label>

            <div class="vote-page__actions">
                <button class="btn" type="button" on:click=move |_| {
                    voting.update(VotingState::back_to_list);
                }>
                    "Back"
                </button>
                <button class="btn btn--primary" type="submit">"Submit Vote"</button>
            </div>
        </form>
    }
}
