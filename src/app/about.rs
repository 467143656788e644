use leptos::prelude::*;

use super::animated_section::AnimatedSection;
use super::icons::{Icon, IconKind};
use crate::content::{Section, SocialKind, BIO, PROFILE_IMAGE, SOCIAL_LINKS};
use crate::theme::Theme;

#[component]
pub fn About(theme: Signal<Theme>) -> impl IntoView {
    let class = Signal::derive(move || {
        theme
            .get()
            .pick("py-20 bg-black/90", "py-20 bg-white/90")
            .to_string()
    });
    let social_class = move || {
        format!(
            "transition-all duration-200 hover:-translate-y-1 active:scale-95 {}",
            theme.get().pick(
                "text-gray-400 hover:text-white",
                "text-gray-600 hover:text-black",
            ),
        )
    };

    view! {
        <AnimatedSection id=Section::About.id() class>
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row items-center gap-12">
                    <div class="md:w-1/2 transition-transform duration-300 hover:scale-[1.02]">
                        <img src=PROFILE_IMAGE alt="Profile" class="rounded-2xl shadow-2xl" />
                    </div>
                    <div class="md:w-1/2">
                        <h2 class=move || {
                            format!(
                                "text-4xl font-bold mb-6 flex items-center gap-3 nudge-right {}",
                                theme.get().heading_class(),
                            )
                        }>
                            <Icon kind=IconKind::User class="w-8 h-8" />
                            "About Me"
                        </h2>
                        <p class=move || {
                            format!("text-lg mb-6 {}", theme.get().body_class())
                        }>{BIO}</p>
                        <div class="flex gap-4 slide-up">
                            {SOCIAL_LINKS
                                .into_iter()
                                .map(|social| {
                                    let kind = match social.kind {
                                        SocialKind::Github => IconKind::Github,
                                        SocialKind::Linkedin => IconKind::Linkedin,
                                        SocialKind::Mail => IconKind::Mail,
                                    };
                                    view! {
                                        <a
                                            href=social.href()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=social.label
                                            class=social_class
                                        >
                                            <Icon kind />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </AnimatedSection>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{GITHUB_URL, PROFILE_EMAIL};

    #[test]
    fn test_social_links_point_at_profile() {
        let html = Owner::new().with(|| {
            view! { <About theme=Signal::stored(Theme::Dark) /> }.to_html()
        });
        assert!(html.contains(&format!("href=\"mailto:{PROFILE_EMAIL}\"")));
        assert!(html.contains(&format!("href=\"{GITHUB_URL}\"")));
        assert!(html.contains("aria-label=\"Email\""));
    }
}
