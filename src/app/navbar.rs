use leptos::prelude::*;
use leptos_use::use_window_scroll;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::theme_toggle::ThemeToggle;
use crate::content::{Section, INITIALS};
use crate::scroll::{navbar_background, section_id};
use crate::theme::Theme;

/// Smoothly scrolls the element with `id` to the top of the viewport.
///
/// Does nothing if no such element exists.
pub fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        log::debug!("no section with id {id} to scroll to");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[component]
pub fn Navbar(
    #[prop(into)] theme: Signal<Theme>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let background = move || navbar_background(theme.get(), scroll_y.get()).to_string();

    view! {
        <nav
            class="fixed top-0 left-0 right-0 z-50 backdrop-blur-sm"
            style:background-color=background
        >
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <a
                        class="cursor-pointer text-xl font-bold gradient-text transition-transform duration-200 hover:scale-105"
                        on:click=move |_| scroll_to_section(Section::Home.id())
                    >
                        {INITIALS}
                    </a>
                    <div class="flex items-center gap-8">
                        <div class="hidden md:flex gap-6">
                            {Section::ALL
                                .into_iter()
                                .map(|section| {
                                    view! {
                                        <button
                                            type="button"
                                            class=move || {
                                                format!(
                                                    "cursor-pointer transition-all duration-200 hover:-translate-y-0.5 {}",
                                                    theme.get().nav_item_class(),
                                                )
                                            }
                                            on:click=move |_| scroll_to_section(&section_id(section.label()))
                                        >
                                            {section.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <ThemeToggle theme on_toggle />
                    </div>
                </div>
            </div>
        </nav>
    }
}
