//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{delegates::DelegatesPage, register::RegisterPage, signin::SigninPage};
use crate::util::auth_token::{BrowserTokens, SharedTokenStore};

/// Root application component.
///
/// Provides the token storage capability and sets up client-side routing.
/// Registration doubles as the landing page since a new delegate has no
/// account yet.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context::<SharedTokenStore>(Arc::new(BrowserTokens));

    view! {
        <Title text="Student Delegates Election"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RegisterPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("signin") view=SigninPage/>
                <Route path=StaticSegment("delegates-page") view=DelegatesPage/>
            </Routes>
        </Router>
    }
}
