use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::{Reveal, REVEAL_THRESHOLD};

/// Page section that latches into its revealed state the first time at least
/// `REVEAL_THRESHOLD` of it is on screen.
///
/// The entrance animation runs on an inner wrapper, never on the `<section>`:
/// the section is the scroll anchor and must keep an untransformed box.
#[component]
pub fn AnimatedSection(
    id: &'static str,
    #[prop(into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let (reveal, set_reveal) = signal(Reveal::default());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        section_ref,
        move |entries, _| {
            for entry in entries {
                let current = reveal.get_untracked();
                let next = current.observe(entry.is_intersecting(), entry.intersection_ratio());
                if next != current {
                    log::debug!("section {id} revealed");
                    set_reveal.set(next);
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    // nothing left to observe once latched
    Effect::new(move |_| {
        if reveal.get().is_revealed() {
            stop();
        }
    });

    view! {
        <section
            id=id
            node_ref=section_ref
            class=move || class.get()
        >
            <div class=move || reveal.get().class()>{children()}</div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_section_box_is_never_animated() {
        let html = Owner::new().with(|| {
            view! {
                <AnimatedSection id="experience" class=Signal::stored("py-20".to_string())>
                    <p>"row"</p>
                </AnimatedSection>
            }
            .to_html()
        });
        let open = html
            .find("<section")
            .and_then(|start| html[start..].find('>').map(|end| &html[start..start + end]))
            .expect("section tag should render");
        assert!(open.contains("id=\"experience\""));
        assert!(!open.contains("reveal"));
        assert!(html.contains("<div class=\"reveal\">"));
    }
}
