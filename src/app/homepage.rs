use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::contact::Contact;
use super::experience::ExperienceSection;
use super::footer::Footer;
use super::hero::Hero;
use super::projects::ProjectsSection;
use crate::hover::{HoverEvent, HoverSlot};
use crate::theme::Theme;

/// The whole portfolio: five sections in fixed order, then the footer.
#[component]
pub fn HomePage(
    #[prop(into)] theme: Signal<Theme>,
    #[prop(into)] hovered: Signal<HoverSlot>,
    #[prop(into)] on_hover: Callback<HoverEvent>,
) -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero theme />
        <About theme />
        <ProjectsSection theme hovered on_hover />
        <ExperienceSection theme />
        <Contact theme />
        <Footer theme />
    }
}
