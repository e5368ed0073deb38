// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hoverable basics.
//!
//! Mounts a coordinator around a render-prop child, drives it with pointer, blur
//! and visibility events, and prints what the child renders after each step.
//!
//! Run:
//! - `cargo run -p understory_demos --example hoverable_basics`

use std::cell::RefCell;
use std::rc::Rc;

use understory_hoverable::visibility::{Visibility, VisibilityHub};
use understory_hoverable::{
    BlurEvent, Children, Environment, Handlers, HoverElement, HoverProps, Hoverable, ParentChain,
    ParentLookup, PointerEvent, RefHolder,
};

#[derive(Clone, Debug)]
struct Text {
    content: &'static str,
    handlers: Handlers<u32>,
}

impl HoverElement<u32> for Text {
    fn handlers(&self) -> &Handlers<u32> {
        &self.handlers
    }
    fn handlers_mut(&mut self) -> &mut Handlers<u32> {
        &mut self.handlers
    }
}

// 1 is the text node with an inner span 2; 5 is an unrelated input elsewhere.
struct Parents;
impl ParentLookup<u32> for Parents {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        match node {
            2 => Some(1),
            _ => None,
        }
    }
}

fn render(hoverable: &mut Hoverable<u32, Text>) -> Text {
    hoverable.render().unwrap().into_element()
}

fn main() {
    let hub = VisibilityHub::new();
    let env = Environment::new(true, hub.clone(), ParentChain(Parents));
    let log = Rc::new(RefCell::new(Vec::new()));
    let (i, o) = (log.clone(), log.clone());
    let text_ref = Rc::new(RefHolder::<u32>::new());

    let props = HoverProps::new(Children::render(|hovered| Text {
        content: if hovered { "on" } else { "off" },
        handlers: Handlers::default(),
    }))
    .on_hover_in(move || i.borrow_mut().push("hover in"))
    .on_hover_out(move || o.borrow_mut().push("hover out"))
    .with_ref(text_ref.clone());

    let mut hoverable: Hoverable<u32, Text> = Hoverable::mount(props, env);

    let text = render(&mut hoverable);
    hoverable.attach(Some(1));
    println!("== Mounted ==\n  renders {:?}, ref -> {:?}", text.content, text_ref.current());

    text.handlers.pointer_enter(&PointerEvent { target: 1 });
    let text = render(&mut hoverable);
    println!("== Pointer enter ==\n  renders {:?}", text.content);
    assert_eq!(text.content, "on");

    text.handlers.blur(&BlurEvent {
        target: Some(2),
        related_target: Some(5),
    });
    println!("== Blur from inner span ==\n  hovered: {}", hoverable.is_hovered());
    assert!(hoverable.is_hovered());

    hub.set_visibility(Visibility::Hidden);
    let text = render(&mut hoverable);
    println!("== Surface hidden ==\n  renders {:?}", text.content);
    assert_eq!(text.content, "off");

    hub.set_visibility(Visibility::Visible);
    text.handlers.pointer_enter(&PointerEvent { target: 1 });
    hoverable.set_disabled(true);
    println!("== Disabled while hovered ==\n  hovered: {}", hoverable.is_hovered());

    println!("== Callbacks ==\n  {:?}", log.borrow());
    assert_eq!(*log.borrow(), ["hover in", "hover out", "hover in"]);
}
