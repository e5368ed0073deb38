// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_hoverable::visibility::{Visibility, VisibilityHub};
use understory_hoverable::{
    BlurEvent, Children, Environment, Handlers, HoverElement, HoverProps, Hoverable, ParentChain,
    ParentLookup, PointerEvent,
};

#[derive(Clone, Default)]
struct Tile {
    handlers: Handlers<u32>,
}

impl HoverElement<u32> for Tile {
    fn handlers(&self) -> &Handlers<u32> {
        &self.handlers
    }
    fn handlers_mut(&mut self) -> &mut Handlers<u32> {
        &mut self.handlers
    }
}

// Node n's parent is n - 1; node 0 is the root and the bound element.
struct Chain;
impl ParentLookup<u32> for Chain {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        node.checked_sub(1)
    }
}

fn mount(hub: &VisibilityHub, counter: Rc<Cell<u64>>) -> (Hoverable<u32, Tile>, Tile) {
    let env = Environment::new(true, hub.clone(), ParentChain(Chain));
    let (i, o) = (counter.clone(), counter);
    let props = HoverProps::new(Tile::default())
        .on_hover_in(move || i.set(i.get() + 1))
        .on_hover_out(move || o.set(o.get() + 1));
    let mut hoverable = Hoverable::mount(props, env);
    let tile = hoverable
        .render()
        .expect("single child always resolves")
        .into_element();
    hoverable.attach(Some(0));
    (hoverable, tile)
}

fn bench_pointer(c: &mut Criterion) {
    const EVENTS: u64 = 1024;
    let mut group = c.benchmark_group("pointer");
    group.throughput(Throughput::Elements(EVENTS));
    let hub = VisibilityHub::new();
    let counter = Rc::new(Cell::new(0));
    let (hoverable, tile) = mount(&hub, counter.clone());
    let at = PointerEvent { target: 0 };

    group.bench_function("enter_leave_alternating", |b| {
        b.iter(|| {
            for _ in 0..EVENTS / 2 {
                tile.handlers.pointer_enter(&at);
                tile.handlers.pointer_leave(&at);
            }
            black_box(hoverable.is_hovered());
        });
    });
    group.bench_function("enter_repeated", |b| {
        b.iter(|| {
            for _ in 0..EVENTS {
                tile.handlers.pointer_enter(&at);
            }
            black_box(hoverable.is_hovered());
        });
    });
    group.finish();
    black_box(counter.get());
}

fn bench_blur_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("blur");
    let hub = VisibilityHub::new();
    let (hoverable, tile) = mount(&hub, Rc::new(Cell::new(0)));
    for &depth in &[4_u32, 64, 1024] {
        let ev = BlurEvent {
            target: Some(depth),
            related_target: Some(depth / 2),
        };
        group.bench_function(format!("inside_depth_{depth}"), |b| {
            b.iter(|| {
                tile.handlers.pointer_enter(&PointerEvent { target: 0 });
                tile.handlers.blur(black_box(&ev));
                black_box(hoverable.is_hovered());
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let hub = VisibilityHub::new();
    group.bench_function("render_prop_x64", |b| {
        b.iter_batched(
            || {
                let env = Environment::new(true, hub.clone(), ParentChain(Chain));
                Hoverable::<u32, Tile>::mount(
                    HoverProps::new(Children::render(|_| Tile::default())),
                    env,
                )
            },
            |mut hoverable| {
                for _ in 0..64 {
                    black_box(hoverable.render().is_ok());
                }
            },
            BatchSize::SmallInput,
        );
    });
    let mounts: Vec<_> = (0..100)
        .map(|_| mount(&hub, Rc::new(Cell::new(0))))
        .collect();
    group.bench_function("visibility_toggle_100_mounts", |b| {
        b.iter(|| {
            for (_, tile) in &mounts {
                tile.handlers.pointer_enter(&PointerEvent { target: 0 });
            }
            hub.set_visibility(Visibility::Hidden);
            hub.set_visibility(Visibility::Visible);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_pointer, bench_blur_depth, bench_render);
criterion_main!(benches);
