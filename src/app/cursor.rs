use leptos::prelude::*;
use leptos_use::{use_media_query, use_mouse, UseMouseReturn, UseMouseSourceType};

const DOT_SIZE: f64 = 8.0;
const RING_SIZE: f64 = 32.0;

/// Devices on which the stylesheet hides the native pointer.
pub const FINE_POINTER_QUERY: &str = "(pointer: fine) and (min-width: 768px)";

/// Whether the replacement cursor is drawn. It must show wherever the native
/// pointer is hidden, including before the first mouse move.
fn cursor_visible(fine_pointer: bool, source: UseMouseSourceType) -> bool {
    fine_pointer && !matches!(source, UseMouseSourceType::Touch)
}

/// Pointer replacement: a dot pinned to the pointer and a ring easing after it.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let UseMouseReturn {
        x, y, source_type, ..
    } = use_mouse();
    let fine_pointer = use_media_query(FINE_POINTER_QUERY.to_string());

    let centered = move |size: f64| {
        format!(
            "translate3d({}px, {}px, 0)",
            x.get() - size / 2.0,
            y.get() - size / 2.0
        )
    };
    let visibility = move || {
        if cursor_visible(fine_pointer.get(), source_type.get()) {
            "custom-cursor pointer-events-none fixed inset-0 z-[100]"
        } else {
            "custom-cursor pointer-events-none fixed inset-0 z-[100] invisible"
        }
    };

    view! {
        <div aria-hidden="true" class=visibility>
            <div
                class="fixed top-0 left-0 w-2 h-2 rounded-full bg-purple-500"
                style:transform=move || centered(DOT_SIZE)
            ></div>
            <div
                class="fixed top-0 left-0 w-8 h-8 rounded-full border border-purple-400 transition-transform duration-150 ease-out"
                style:transform=move || centered(RING_SIZE)
            ></div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_shown_before_first_mouse_move() {
        assert!(cursor_visible(true, UseMouseSourceType::Unset));
        assert!(cursor_visible(true, UseMouseSourceType::Mouse));
    }

    #[test]
    fn test_hidden_for_touch_and_coarse_pointers() {
        assert!(!cursor_visible(true, UseMouseSourceType::Touch));
        assert!(!cursor_visible(false, UseMouseSourceType::Mouse));
        assert!(!cursor_visible(false, UseMouseSourceType::Unset));
    }

    #[test]
    fn test_query_matches_stylesheet() {
        let css = include_str!("../../input.css");
        let rule = format!("@media {FINE_POINTER_QUERY}");
        assert!(css.contains(&rule), "stylesheet should hide the pointer under {rule}");
    }
}
