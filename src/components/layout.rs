//! Page frame: navbar plus content container.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;

use super::navbar::Navbar;
use crate::routing::guard::Frame;

pub(crate) fn frame_class(frame: Frame) -> &'static str {
    match frame {
        Frame::Anonymous => "content container frame-anonymous",
        Frame::User => "content container frame-user",
        Frame::Admin => "content container frame-admin",
    }
}

#[component]
pub fn Layout(frame: Frame, children: Children) -> impl IntoView {
    view! {
        <Navbar frame=frame/>
        <div class=frame_class(frame)>{children()}</div>
    }
}
