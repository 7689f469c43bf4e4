//! Delegate registration page.

use leptos::prelude::*;
use leptos_meta::Title;
#[cfg(feature = "csr")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::alert::{Alert, AlertKind};
use crate::state::register::{RegisterFormState, School};
use crate::util::timer::TimeoutHandle;

/// Delay before a successful registration redirects to sign-in.
pub const REDIRECT_DELAY_MS: u32 = 2_000;

/// Delegate registration form.
///
/// Password warnings recompute on every keystroke and keep the submit
/// control disabled while any rule is violated. A successful registration
/// shows a banner and redirects to `/signin` after a short delay; the
/// redirect timer is cancelled if the page is torn down first.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterFormState::default());
    let redirect_timer = StoredValue::new_local(TimeoutHandle::default());

    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    on_cleanup(move || redirect_timer.update_value(TimeoutHandle::cancel));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(request) = form.try_update(RegisterFormState::try_submit).flatten() else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&request).await {
                    Ok(()) => {
                        form.update(RegisterFormState::apply_success);
                        redirect_timer.set_value(crate::util::timer::schedule(
                            REDIRECT_DELAY_MS,
                            move || navigate("/signin", NavigateOptions::default()),
                        ));
                    }
                    Err(message) => form.update(|f| f.apply_failure(message)),
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        let _ = request;
    };

    view! {
        <Title text="Delegate Registration"/>

        <div class="form-page">
            <div class="form-page__card">
                <h2 class="form-page__title">"Delegate Register Form"</h2>

                {move || {
                    form.get()
                        .error
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message/> })
                }}

                <Show when=move || form.get().success>
                    <Alert
                        kind=AlertKind::Success
                        message="Registration successful! Redirecting to sign-in page..."
                    />
                </Show>

                <form class="form-page__form" on:submit=on_submit>
                    <label class="form-page__label">
                        "Full Name"
                        <input
                            class="form-page__input"
                            type="text"
                            required=true
                            placeholder="Enter your full name"
                            prop:value=move || form.get().full_name
                            on:input=move |ev| {
                                form.update(|f| f.set_full_name(event_target_value(&ev)));
                            }
                        />
                    </label>

                    <label class="form-page__label">
                        "Email or Phone"
                        <input
                            class="form-page__input"
                            type="text"
                            required=true
                            placeholder="Enter your email or phone"
                            prop:value=move || form.get().email_or_phone
                            on:input=move |ev| {
                                form.update(|f| f.set_email_or_phone(event_target_value(&ev)));
                            }
                        />
                    </label>

                    <label class="form-page__label">
                        "Registration Number"
                        <input
                            class="form-page__input"
                            type="text"
                            required=true
                            placeholder="Enter your registration number"
                            prop:value=move || form.get().registration_number
                            on:input=move |ev| {
                                form.update(|f| f.set_registration_number(event_target_value(&ev)));
                            }
                        />
                    </label>

                    <label class="form-page__label">
                        "School"
                        <select
                            class="form-page__select"
                            required=true
                            prop:value=move || form.get().school.map(School::label).unwrap_or_default()
                            on:change=move |ev| {
                                form.update(|f| {
                                    f.set_school(School::from_label(&event_target_value(&ev)));
                                });
                            }
                        >
                            <option value="">"Select your school"</option>
                            {School::ALL
                                .iter()
                                .map(|school| {
                                    view! {
                                        <option value=school.label()>{school.short_label()}</option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>

                    <label class="form-page__label">
                        "Password"
                        <input
                            class="form-page__input"
                            type="password"
                            required=true
                            placeholder="Enter your password"
                            prop:value=move || form.get().password
                            on:input=move |ev| {
                                form.update(|f| f.set_password(event_target_value(&ev)));
                            }
                        />
                    </label>

                    {move || {
                        let errors = form.get().password_errors;
                        (!errors.is_empty()).then(|| {
                            view! {
                                <ul class="form-page__warnings">
                                    {errors
                                        .into_iter()
                                        .map(|message| view! { <li>{message}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                        })
                    }}

                    <label class="form-page__label">
                        "Confirm Password"
                        <input
                            class="form-page__input"
                            type="password"
                            required=true
                            placeholder="Confirm your password"
                            prop:value=move || form.get().confirm_password
                            on:input=move |ev| {
                                form.update(|f| f.set_confirm_password(event_target_value(&ev)));
                            }
                        />
                    </label>

                    <label class="form-page__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().is_candidate
                            on:change=move |ev| {
                                form.update(|f| f.set_is_candidate(event_target_checked(&ev)));
                            }
                        />
                        "Register as a candidate"
                    </label>

                    <button
                        class="btn btn--primary form-page__submit"
                        type="submit"
                        disabled=move || !form.get().can_submit()
                    >
                        "Register"
                    </button>
                </form>
            </div>
        </div>
    }
}
