use crate::Screen;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ActionLinkProps {
    /// Screen to switch to when clicked.
    pub to: Screen,

    #[props(optional)]
    pub title: Option<String>,

    pub children: Element,
}

/// An anchor that switches the active screen instead of following an href.
#[component]
pub fn ActionLink(props: ActionLinkProps) -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();
    let target = props.to.clone();

    rsx! {
        a {
            href: "#",
            title: props.title.clone().unwrap_or_default(),
            onclick: move |evt: MouseEvent| {
                // keep the browser from following "#"
                evt.prevent_default();
                active_screen.set(target.clone());
            },
            {props.children}
        }
    }
}
