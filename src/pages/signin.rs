//! Delegate sign-in page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
#[cfg(feature = "csr")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::alert::{Alert, AlertKind};
use crate::state::signin::SigninState;
#[cfg(feature = "csr")]
use crate::util::auth_token::SharedTokenStore;

/// Delegate sign-in form.
///
/// Success persists the returned token through the injected store and
/// navigates to the voting page; failure surfaces the server message or
/// the fixed fallback.
#[component]
pub fn SigninPage() -> impl IntoView {
    let form = RwSignal::new(SigninState::default());

    #[cfg(feature = "csr")]
    let navigate = use_navigate();
    #[cfg(feature = "csr")]
    let tokens = expect_context::<SharedTokenStore>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(credentials) = form.try_update(SigninState::begin_submit) else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            let tokens = tokens.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&credentials).await {
                    Ok(response) => {
                        tokens.set(&response.token);
                        form.update(SigninState::finish_success);
                        navigate("/delegates-page", NavigateOptions::default());
                    }
                    Err(message) => form.update(|f| f.finish_failure(message)),
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        let _ = credentials;
    };

    view! {
        <Title text="Delegate Sign In"/>

        <div class="form-page">
            <div class="form-page__card">
                <h2 class="form-page__title">"Delegate Sign In"</h2>

                {move || {
                    form.get()
                        .error
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message/> })
                }}

                <form class="form-page__form" on:submit=on_submit>
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

                    <button
                        class="btn btn--primary form-page__submit"
                        type="submit"
                        disabled=move || form.get().loading
                    >
                        {move || form.get().submit_label()}
                    </button>
                </form>

                <p class="form-page__hint">
                    "Don't have an account? "
                    <A href="/register">"Register here"</A>
                </p>
            </div>
        </div>
    }
}
