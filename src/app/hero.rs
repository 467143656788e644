use leptos::prelude::*;

use crate::content::{Section, NAME, TAGLINE};
use crate::theme::Theme;

#[component]
pub fn Hero(theme: Signal<Theme>) -> impl IntoView {
    let outline_button = move || {
        format!(
            "border px-6 py-3 rounded-full transition-all duration-300 hover:scale-105 active:scale-95 {}",
            theme.get().pick(
                "border-white/20 hover:border-white/40",
                "border-black/20 hover:border-black/40",
            ),
        )
    };

    view! {
        <section
            id=Section::Home.id()
            class="min-h-screen flex items-center justify-center relative overflow-hidden"
        >
            <div class=move || {
                theme
                    .get()
                    .pick(
                        "absolute inset-0 bg-gradient-to-b from-purple-900/20 to-black/50",
                        "absolute inset-0 bg-gradient-to-b from-purple-100/50 to-white/80",
                    )
            }></div>
            <div class="container mx-auto px-4 relative z-10 pt-16 hero-enter">
                <div class="text-center hero-pop">
                    <h1 class="text-6xl md:text-8xl font-bold mb-6">
                        "Hello, I'm"
                        <span class="gradient-text inline-block transition-transform duration-300 hover:scale-105">
                            " " {NAME}
                        </span>
                    </h1>
                    <p class=move || {
                        format!("text-xl md:text-2xl mb-8 {}", theme.get().body_class())
                    }>{TAGLINE}</p>
                    <div class="flex gap-4 justify-center hero-actions">
                        <a
                            href=format!("#{}", Section::Contact.id())
                            class="bg-purple-600 hover:bg-purple-700 px-6 py-3 rounded-full transition-all duration-300 text-white hover:scale-105 active:scale-95"
                        >
                            "Contact Me"
                        </a>
                        <a href=format!("#{}", Section::Projects.id()) class=outline_button>
                            "View Work"
                        </a>
                    </div>
                </div>
            </div>
            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 scroll-hint">
                <div class=move || {
                    format!(
                        "w-6 h-10 border-2 rounded-full p-1 {}",
                        theme.get().pick("border-white/30", "border-black/30"),
                    )
                }>
                    <div class=move || {
                        format!(
                            "w-2 h-2 rounded-full scroll-hint-dot {}",
                            theme.get().pick("bg-white/50", "bg-black/50"),
                        )
                    }></div>
                </div>
            </div>
        </section>
    }
}
