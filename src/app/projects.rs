use leptos::prelude::*;

use super::animated_section::AnimatedSection;
use super::icons::{Icon, IconKind};
use crate::content::{projects, Project, Section};
use crate::hover::{HoverEvent, HoverSlot};
use crate::theme::Theme;

#[component]
pub fn ProjectsSection(
    #[prop(into)] theme: Signal<Theme>,
    #[prop(into)] hovered: Signal<HoverSlot>,
    #[prop(into)] on_hover: Callback<HoverEvent>,
) -> impl IntoView {
    let class = Signal::derive(move || {
        theme
            .get()
            .pick(
                "py-20 bg-gradient-to-b from-black to-purple-900/20",
                "py-20 bg-gradient-to-b from-white to-purple-100/20",
            )
            .to_string()
    });

    view! {
        <AnimatedSection id=Section::Projects.id() class>
            <div class="container mx-auto px-4">
                <h2 class=move || {
                    format!(
                        "text-4xl font-bold mb-12 flex items-center gap-3 nudge-right {}",
                        theme.get().heading_class(),
                    )
                }>
                    <Icon kind=IconKind::Code class="w-8 h-8" />
                    "My Projects"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {projects()
                        .into_iter()
                        .map(|project| view! { <ProjectCard project theme hovered on_hover /> })
                        .collect_view()}
                </div>
            </div>
        </AnimatedSection>
    }
}

/// Gallery card. Claims the shared hover slot on pointer-enter and releases it
/// on pointer-leave; the owning card bounces, scales and shows its overlay.
#[component]
fn ProjectCard(
    project: Project,
    theme: Signal<Theme>,
    hovered: Signal<HoverSlot>,
    on_hover: Callback<HoverEvent>,
) -> impl IntoView {
    let id = project.id;
    let is_hovered = move || hovered.get().is_owned_by(id);

    let card_class = move || {
        format!(
            "project-card rounded-xl overflow-hidden backdrop-blur-sm transform-gpu {}{}",
            theme.get().pick("bg-white/5", "bg-black/5"),
            if is_hovered() { " is-hovered" } else { "" },
        )
    };
    let overlay_class = move || {
        if is_hovered() {
            "absolute inset-0 bg-purple-600/20 backdrop-blur-sm transition-opacity duration-300 opacity-100"
        } else {
            "absolute inset-0 bg-purple-600/20 backdrop-blur-sm transition-opacity duration-300 opacity-0"
        }
    };
    let link_class = move || {
        format!(
            "flex items-center gap-2 transition-transform duration-200 hover:translate-x-1 {}",
            theme.get().link_class(),
        )
    };

    view! {
        <div
            class=card_class
            on:pointerenter=move |_| on_hover.run(HoverEvent::Enter(id))
            on:pointerleave=move |_| on_hover.run(HoverEvent::Leave(id))
        >
            <div class="relative overflow-hidden">
                <img
                    src=project.image
                    alt=format!("Project {id}")
                    class="project-image w-full h-48 object-cover"
                />
                <div class=overlay_class></div>
            </div>
            <div class="p-6">
                <h3 class=move || {
                    format!("text-xl font-bold mb-2 {}", theme.get().heading_class())
                }>{project.title}</h3>
                <p class=move || format!("mb-4 {}", theme.get().muted_class())>
                    {project.description}
                </p>
                <div class="flex gap-4">
                    <a href=project.code_url class=link_class>
                        <Icon kind=IconKind::Github class="w-4 h-4" />
                        "Code"
                    </a>
                    <a href=project.demo_url class=link_class>
                        <Icon kind=IconKind::ExternalLink class="w-4 h-4" />
                        "Demo"
                    </a>
                </div>
            </div>
        </div>
    }
}
