use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_ecosim::core::{codec, palette, Engine, RenderSync};
use tui_ecosim::engine::{World, WorldConfig};

fn stepped_world() -> World {
    let mut world = World::new(&WorldConfig::default());
    for _ in 0..10 {
        world.advance();
    }
    world
}

fn bench_decode(c: &mut Criterion) {
    let world = stepped_world();
    let snapshot = world.current_state().unwrap_or_default().to_string();

    c.bench_function("decode_100x100", |b| {
        b.iter(|| codec::decode(black_box(&snapshot), 100, 100))
    });
}

fn bench_map_and_apply(c: &mut Criterion) {
    let mut world = stepped_world();
    let mut sync = RenderSync::new(world.size_x(), world.size_y());

    c.bench_function("step_decode_map_apply", |b| {
        b.iter(|| {
            world.advance();
            if let Some(snapshot) = world.current_state() {
                if let Ok(decoded) = codec::decode(snapshot, 100, 100) {
                    let visuals = palette::map_each(&decoded);
                    let _ = sync.apply(black_box(&visuals));
                }
            }
        })
    });
}

fn bench_world_step(c: &mut Criterion) {
    let mut world = stepped_world();

    c.bench_function("world_step", |b| b.iter(|| world.advance()));
}

criterion_group!(benches, bench_decode, bench_map_and_apply, bench_world_step);
criterion_main!(benches);
