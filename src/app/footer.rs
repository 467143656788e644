use leptos::prelude::*;

use crate::content::{mailto, COPYRIGHT_YEAR, LINKEDIN_URL, NAME, PROFILE_EMAIL};
use crate::theme::Theme;

#[component]
pub fn Footer(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <footer class=move || {
            format!(
                "py-8 text-center {}",
                theme.get().pick("bg-black text-gray-400", "bg-white text-gray-600"),
            )
        }>
            <p>
                "© " {COPYRIGHT_YEAR} " "
                <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer">
                    {NAME} "."
                </a> " All rights reserved."
            </p>
            <p class="mt-2 text-sm">
                <a href=mailto(PROFILE_EMAIL)>{PROFILE_EMAIL}</a>
            </p>
        </footer>
    }
}
