use leptos::prelude::*;

use super::animated_section::AnimatedSection;
use super::icons::{Icon, IconKind};
use crate::content::{experience_delay_style, Section, EXPERIENCE};
use crate::theme::Theme;

#[component]
pub fn ExperienceSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let class = Signal::derive(move || {
        theme
            .get()
            .pick("py-20 bg-black/90", "py-20 bg-white/90")
            .to_string()
    });

    view! {
        <AnimatedSection id=Section::Experience.id() class>
            <div class="container mx-auto px-4">
                <h2 class=move || {
                    format!(
                        "text-4xl font-bold mb-12 flex items-center gap-3 nudge-right {}",
                        theme.get().heading_class(),
                    )
                }>
                    <Icon kind=IconKind::Briefcase class="w-8 h-8" />
                    "Experience"
                </h2>
                <div class="space-y-8">
                    {EXPERIENCE
                        .into_iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            // rows slide in one after another once the section is revealed
                            view! {
                                <div
                                    class="slide-in flex flex-col md:flex-row gap-4 md:gap-8 items-start"
                                    style=experience_delay_style(i)
                                >
                                    <div class="text-purple-400 font-mono whitespace-nowrap">
                                        {entry.period}
                                    </div>
                                    <div>
                                        <h3 class=move || {
                                            format!("text-xl font-bold {}", theme.get().heading_class())
                                        }>{entry.title}</h3>
                                        <p class=move || {
                                            theme.get().muted_class()
                                        }>{entry.company}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </AnimatedSection>
    }
}
