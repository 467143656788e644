mod about;
mod animated_section;
mod contact;
mod cursor;
mod experience;
mod footer;
mod hero;
mod homepage;
mod icons;
mod navbar;
mod projects;
mod theme_toggle;

use cursor::CustomCursor;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use navbar::Navbar;

use crate::content::{person_json_ld, NAME, TAGLINE};
use crate::hover::{HoverEvent, HoverSlot};
use crate::reveal::SCRIPTED_CLASS;
use crate::theme::Theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // first paint uses the default palette, the effect in App takes over after hydration
    let root_class = Theme::default().root_class().unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en" class=root_class>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script type="application/ld+json" inner_html=person_json_ld()></script>
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

/// Sets or clears the dark class on the document root.
fn apply_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    root.set_class_name(&theme.root_class_name(&root.class_name()));
    log::debug!("theme switched to {theme}");
}

/// Marks the document root as running the client bundle.
///
/// Unseen sections start hidden only after this, see `reveal::SCRIPTED_CLASS`.
pub fn mark_scripted() {
    if let Some(root) = document().document_element() {
        let _ = root.class_list().add_1(SCRIPTED_CLASS);
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (theme, set_theme) = signal(Theme::default());
    let (hovered, set_hovered) = signal(HoverSlot::default());

    Effect::new(move |_| apply_theme(theme.get()));

    let toggle_theme = Callback::new(move |_: ()| set_theme.update(Theme::toggle));
    let on_hover = Callback::new(move |event: HoverEvent| {
        set_hovered.update(|slot| slot.apply(event));
    });

    view! {
        <Title formatter=|title| format!("{NAME} - {title}") />
        <Meta name="description" content=TAGLINE />

        <div class=move || theme.get().page_class()>
            <CustomCursor />
            <Navbar theme on_toggle=toggle_theme />
            <Router>
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route
                            path=path!("/")
                            view=move || view! { <HomePage theme hovered on_hover /> }
                        />
                    </Routes>
                </main>
            </Router>
        </div>
    }
}
