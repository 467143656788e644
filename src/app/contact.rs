use leptos::prelude::*;

use super::animated_section::AnimatedSection;
use super::icons::{Icon, IconKind};
use crate::content::{mailto, Section, CONTACT_BLURB, CONTACT_EMAIL};
use crate::theme::Theme;

#[component]
pub fn Contact(theme: Signal<Theme>) -> impl IntoView {
    let class = Signal::derive(move || {
        theme
            .get()
            .pick(
                "py-20 bg-gradient-to-t from-black to-purple-900/20",
                "py-20 bg-gradient-to-t from-white to-purple-100/20",
            )
            .to_string()
    });

    view! {
        <AnimatedSection id=Section::Contact.id() class>
            <div class="container mx-auto px-4 text-center">
                <h2 class=move || {
                    format!(
                        "text-4xl font-bold mb-8 transition-transform duration-300 hover:scale-105 {}",
                        theme.get().heading_class(),
                    )
                }>"Let's Work Together"</h2>
                <p class=move || {
                    format!("mb-8 max-w-2xl mx-auto slide-up {}", theme.get().body_class())
                }>{CONTACT_BLURB}</p>
                <a
                    href=mailto(CONTACT_EMAIL)
                    class="inline-flex items-center gap-2 bg-purple-600 hover:bg-purple-700 px-8 py-4 rounded-full text-lg transition-all duration-300 text-white hover:scale-105 active:scale-95"
                >
                    <Icon kind=IconKind::Mail class="w-5 h-5" />
                    "Get In Touch"
                </a>
            </div>
        </AnimatedSection>
    }
}
