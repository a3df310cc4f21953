use super::*;
use crate::components::navbar::split_links;
use crate::routing::nav::{NavKind, links_for};
use crate::state::session::Role;

#[test]
fn frame_class_differs_per_frame() {
    assert_eq!(frame_class(Frame::Anonymous), "content container frame-anonymous");
    assert_eq!(frame_class(Frame::User), "content container frame-user");
    assert_eq!(frame_class(Frame::Admin), "content container frame-admin");
}

#[test]
fn split_links_moves_buttons_right_and_keeps_order() {
    let (links, buttons) = split_links(links_for(Role::User));
    assert_eq!(links.iter().map(|l| l.path).collect::<Vec<_>>(), vec!["/register", "/sensors", "/profile"]);
    assert_eq!(buttons.len(), 1);
    assert_eq!(buttons[0].path, "/logout");
    assert!(buttons.iter().all(|l| l.kind == NavKind::Button));
}

#[test]
fn split_links_anonymous_has_no_left_links() {
    let (links, buttons) = split_links(links_for(Role::Anonymous));
    assert!(links.is_empty());
    assert_eq!(buttons[0].path, "/login");
}
