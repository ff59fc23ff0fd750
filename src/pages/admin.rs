//! Admin dashboard shell, visible to superadmins only.

use leptos::prelude::*;

use crate::components::guard::RequireAdmin;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <main class="admin-page">
                <h1>"Administration"</h1>
                <ul class="admin-page__sections">
                    <li>
                        <a href="/admin/branding">"Branding"</a>
                        <p>"Colors applied to every page for every visitor."</p>
                    </li>
                </ul>
            </main>
        </RequireAdmin>
    }
}
