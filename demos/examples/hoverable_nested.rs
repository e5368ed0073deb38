// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested hoverables.
//!
//! A card and a button inside it each get their own coordinator. The button's own
//! enter handler is kept: the outer coordinator composes around the inner one, so
//! both hover flags stay observable.
//!
//! Run:
//! - `cargo run -p understory_demos --example hoverable_nested`

use understory_hoverable::visibility::NoVisibility;
use understory_hoverable::{
    Environment, Handlers, HoverElement, HoverProps, Hoverable, NoParent, ParentChain,
    PointerEvent,
};

#[derive(Clone, Debug, Default)]
struct Button {
    handlers: Handlers<u32>,
}

impl HoverElement<u32> for Button {
    fn handlers(&self) -> &Handlers<u32> {
        &self.handlers
    }
    fn handlers_mut(&mut self) -> &mut Handlers<u32> {
        &mut self.handlers
    }
}

fn main() {
    let env = Environment::new(true, NoVisibility, ParentChain(NoParent));

    // The button wraps its element first...
    let mut button: Hoverable<u32, Button> =
        Hoverable::mount(HoverProps::new(Button::default()), env.clone());
    let inner = button.render().unwrap().into_element();
    button.attach(Some(2));

    // ...and the card wraps the already-bound button, composing on top of its handlers.
    let mut card: Hoverable<u32, Button> = Hoverable::mount(
        HoverProps::new(inner).on_hover_in(|| println!("  card: hover in")),
        env,
    );
    let outer = card.render().unwrap().into_element();
    card.attach(Some(2));

    outer.handlers.pointer_enter(&PointerEvent { target: 2 });
    println!(
        "== Enter ==\n  card hovered: {}, button hovered: {}",
        card.is_hovered(),
        button.is_hovered()
    );
    assert!(card.is_hovered() && button.is_hovered());

    outer.handlers.pointer_leave(&PointerEvent { target: 2 });
    println!(
        "== Leave ==\n  card hovered: {}, button hovered: {}",
        card.is_hovered(),
        button.is_hovered()
    );
    assert!(!card.is_hovered() && !button.is_hovered());

    // Handlers survive the button's coordinator being torn down: they just delegate.
    button.unmount();
    outer.handlers.pointer_enter(&PointerEvent { target: 2 });
    assert!(card.is_hovered());
}
