use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Sun,
    Moon,
    Github,
    Linkedin,
    Mail,
    ExternalLink,
    Code,
    Briefcase,
    User,
}

impl IconKind {
    fn paths(self) -> &'static str {
        match self {
            Self::Sun => concat!(
                r#"<circle cx="12" cy="12" r="4"/>"#,
                r#"<path d="M12 2v2"/><path d="M12 20v2"/>"#,
                r#"<path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/>"#,
                r#"<path d="M2 12h2"/><path d="M20 12h2"/>"#,
                r#"<path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#,
            ),
            Self::Moon => r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#,
            Self::Github => concat!(
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>"#,
                r#"<path d="M9 18c-4.51 2-5-2-7-2"/>"#,
            ),
            Self::Linkedin => concat!(
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>"#,
                r#"<rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
            ),
            Self::Mail => concat!(
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
                r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
            ),
            Self::ExternalLink => concat!(
                r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/>"#,
                r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#,
            ),
            Self::Code => {
                r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#
            }
            Self::Briefcase => concat!(
                r#"<rect width="20" height="14" x="2" y="7" rx="2" ry="2"/>"#,
                r#"<path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#,
            ),
            Self::User => concat!(
                r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/>"#,
                r#"<circle cx="12" cy="7" r="4"/>"#,
            ),
        }
    }
}

/// Stroke icon in the lucide style, sized by `class`.
#[component]
pub fn Icon(kind: IconKind, #[prop(default = "w-6 h-6")] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
            inner_html=kind.paths()
        ></svg>
    }
}
