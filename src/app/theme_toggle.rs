use leptos::{either::Either, prelude::*};

use super::icons::{Icon, IconKind};
use crate::theme::Theme;

/// Click handler running `on_toggle` once per event, with no arguments.
fn toggle_on_click<E>(on_toggle: Callback<()>) -> impl Fn(E) + Copy {
    move |_| on_toggle.run(())
}

#[component]
pub fn ThemeToggle(
    #[prop(into)] theme: Signal<Theme>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    // sun while dark, moon while light; the wrapper turns half a circle on swap
    let rotation = move || {
        if theme.get().is_dark() {
            "transition-transform duration-300 rotate-0"
        } else {
            "transition-transform duration-300 rotate-180"
        }
    };

    view! {
        <button
            type="button"
            class="p-2 rounded-full bg-opacity-20 backdrop-blur-sm transition-transform duration-200 hover:scale-110 active:scale-90"
            aria-label=move || format!("Switch to {} theme", theme.get().toggled())
            on:click=toggle_on_click(on_toggle)
        >
            <div class=rotation>
                {move || {
                    if theme.get().is_dark() {
                        Either::Left(view! { <Icon kind=IconKind::Sun class="w-6 h-6 text-yellow-400" /> })
                    } else {
                        Either::Right(view! { <Icon kind=IconKind::Moon class="w-6 h-6 text-purple-400" /> })
                    }
                }}
            </div>
        </button>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    #[test]
    fn test_click_runs_callback_once() {
        Owner::new().with(|| {
            let clicks = Arc::new(AtomicUsize::new(0));
            let on_toggle = Callback::new({
                let clicks = Arc::clone(&clicks);
                move |_: ()| {
                    clicks.fetch_add(1, Ordering::SeqCst);
                }
            });
            let on_click = toggle_on_click::<()>(on_toggle);
            on_click(());
            assert_eq!(clicks.load(Ordering::SeqCst), 1);
            on_click(());
            assert_eq!(clicks.load(Ordering::SeqCst), 2);
        });
    }

    fn render(theme: Theme) -> String {
        Owner::new().with(|| {
            view! {
                <ThemeToggle theme=Signal::stored(theme) on_toggle=Callback::new(|_: ()| {}) />
            }
            .to_html()
        })
    }

    #[test]
    fn test_dark_renders_sun_unrotated() {
        let html = render(Theme::Dark);
        assert!(html.contains("Switch to light theme"));
        assert!(html.contains("rotate-0"));
        assert!(html.contains("text-yellow-400"));
    }

    #[test]
    fn test_light_renders_moon_rotated() {
        let html = render(Theme::Light);
        assert!(html.contains("Switch to dark theme"));
        assert!(html.contains("rotate-180"));
        assert!(html.contains("text-purple-400"));
    }
}
