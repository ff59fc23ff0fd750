//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::branding::BrandingBroadcaster;
use crate::components::nav_bar::NavBar;
use crate::pages::{
    admin::AdminPage, admin_branding::AdminBrandingPage, home::HomePage, listing_form::ListingFormPage,
    login::LoginPage, profile::ProfilePage,
};
use crate::state::session::provide_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, mounts branding sync, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session();

    view! {
        <Stylesheet id="leptos" href="/pkg/houser.css"/>
        <Title text="Houser"/>
        <BrandingBroadcaster/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=(StaticSegment("users"), ParamSegment("id")) view=ProfilePage/>
                <Route path=(StaticSegment("listings"), StaticSegment("new")) view=ListingFormPage/>
                <Route
                    path=(StaticSegment("listings"), ParamSegment("id"), StaticSegment("edit"))
                    view=ListingFormPage
                />
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("branding")) view=AdminBrandingPage/>
            </Routes>
        </Router>
    }
}
