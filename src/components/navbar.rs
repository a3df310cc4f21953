//! Top navigation bar for the current frame.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entries come from `routing::nav::links_for`, keyed by the same role the
//! guard used to pick the frame, so visible links always match what the
//! guard grants.

use leptos::prelude::*;

use crate::routing::guard::Frame;
use crate::routing::nav::{NavKind, NavLink, links_for};
use crate::routing::table::HOME_PATH;

/// Split a link set into left-hand links and right-hand buttons, keeping order.
pub(crate) fn split_links(links: &'static [NavLink]) -> (Vec<&'static NavLink>, Vec<&'static NavLink>) {
    links.iter().partition(|l| l.kind == NavKind::Link)
}

#[component]
pub fn Navbar(frame: Frame) -> impl IntoView {
    let (links, buttons) = split_links(links_for(frame.role()));

    view! {
        <nav class="navbar navbar-expand-sm navbar-dark bg-dark mb-5">
            <a class="navbar-brand" href=HOME_PATH>"Outorga ANA"</a>
            <ul class="navbar-nav mr-auto">
                {links
                    .into_iter()
                    .map(|l| {
                        view! {
                            <li class="nav-item">
                                <a class="nav-link" href=l.path>{l.label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            {buttons
                .into_iter()
                .map(|l| view! { <a class="btn btn-outline-light ml-2" href=l.path>{l.label}</a> })
                .collect_view()}
        </nav>
    }
}
