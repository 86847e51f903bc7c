//! Integration tests for the per-frame update of a fully composed meadow

use crate::assets::{AssetError, TextureHandle, TextureProvider};
use crate::core::SceneConfig;
use crate::ecs::components::{BloomTarget, CloudComponent, FlowerComponent};
use crate::input::{InputError, KeyCode, SteeringMode};
use crate::Engine;
use rand::rngs::StdRng;
use rand::SeedableRng;

const DT: f32 = 1.0 / 60.0;

struct NoTextures;

impl TextureProvider for NoTextures {
    fn load(&mut self, id: &str) -> Result<TextureHandle, AssetError> {
        Err(AssetError::Unavailable {
            id: id.to_string(),
            reason: "headless test".to_string(),
        })
    }
}

fn engine_with(config: SceneConfig) -> Engine {
    Engine::with_rng(config, &mut NoTextures, StdRng::seed_from_u64(11)).unwrap()
}

fn engine() -> Engine {
    engine_with(SceneConfig::default())
}

fn butterfly_y(engine: &Engine) -> f32 {
    engine.world().transform(engine.butterfly()).unwrap().position.y
}

/// Drive `frames` frames at 60 Hz with explicit elapsed time
fn run(engine: &mut Engine, frames: u64) {
    let start = engine.frame_count();
    for frame in start + 1..=start + frames {
        engine.frame_at(frame as f32 * DT, DT);
    }
}

#[test]
fn test_single_arrow_up_raises_butterfly_by_one_step() {
    let mut engine = engine();
    let before = butterfly_y(&engine);

    engine.key_sender().press(KeyCode::ArrowUp).unwrap();
    engine.frame_at(DT, DT);

    assert_eq!(butterfly_y(&engine), before + 0.5);
}

#[test]
fn test_butterfly_never_sinks_below_platform() {
    let mut engine = engine();
    let keys = engine.key_sender();

    for _ in 0..20 {
        keys.press(KeyCode::ArrowDown).unwrap();
        run(&mut engine, 3);
        assert!(butterfly_y(&engine) >= 1.0);
    }
    assert_eq!(butterfly_y(&engine), 1.0);
}

#[test]
fn test_held_steering_stops_on_release() {
    let mut engine = engine_with(SceneConfig::default().with_steering(SteeringMode::Held));
    let keys = engine.key_sender();
    let x = |engine: &Engine| engine.world().transform(engine.butterfly()).unwrap().position.x;

    keys.press(KeyCode::ArrowRight).unwrap();
    run(&mut engine, 2);
    assert_eq!(x(&engine), 1.0);

    keys.release(KeyCode::ArrowRight).unwrap();
    run(&mut engine, 5);
    assert_eq!(x(&engine), 1.0);
}

#[test]
fn test_raindrops_stay_between_ground_and_spawn() {
    let mut engine = engine();

    for _ in 0..400 {
        run(&mut engine, 1);
        for cloud in engine.clouds() {
            let rain = &engine.world().get_component::<CloudComponent>(*cloud).unwrap().rain;
            assert!(rain.drops().iter().all(|drop| (0.0..=15.0).contains(&drop.y)));
        }
    }
}

#[test]
fn test_every_raindrop_recycles_after_slowest_fall() {
    let mut engine = engine();
    run(&mut engine, 151);

    let mut raining = 0;
    for cloud in engine.clouds() {
        let rain = &engine.world().get_component::<CloudComponent>(*cloud).unwrap().rain;
        if rain.is_empty() {
            continue;
        }
        raining += 1;
        assert_eq!(rain.len(), 100);
        assert!(rain.drops().iter().all(|drop| drop.cycles >= 1));
    }
    assert_eq!(raining, 14);
}

#[test]
fn test_flower_scale_stays_within_bloom_targets() {
    let mut engine = engine_with(SceneConfig::default().with_flower_count(20));

    for _ in 0..1_500 {
        run(&mut engine, 1);
        for flower in engine.flowers() {
            let scale = engine.world().transform(*flower).unwrap().scale.x;
            assert!((1.0..=3.0).contains(&scale), "scale {scale}");
        }
    }
}

#[test]
fn test_bloom_toggles_after_interval_regardless_of_frame_rate() {
    let targets = |engine: &Engine| -> Vec<BloomTarget> {
        engine
            .flowers()
            .iter()
            .map(|f| engine.world().get_component::<FlowerComponent>(*f).unwrap().bloom_target)
            .collect()
    };

    let mut smooth = engine();
    run(&mut smooth, 299);
    assert!(targets(&smooth).iter().all(|t| *t == BloomTarget::Small));
    smooth.frame_at(5.0, DT);
    assert!(targets(&smooth).iter().all(|t| *t == BloomTarget::Large));

    let mut choppy = engine();
    choppy.frame_at(2.5, 2.5);
    choppy.frame_at(5.0, 2.5);
    assert!(targets(&choppy).iter().all(|t| *t == BloomTarget::Large));
}

#[test]
fn test_far_future_frame_returns_promptly() {
    let mut engine = engine();
    run(&mut engine, 2);

    let snapshot = engine.frame_at(1.0e9, DT);
    assert_eq!(snapshot.frame, 3);
    assert_eq!(snapshot.instances.len(), 136);
    for flower in engine.flowers() {
        let scale = engine.world().transform(*flower).unwrap().scale.x;
        assert!((1.0..=3.0).contains(&scale), "scale {scale}");
    }

    engine.frame_at(f32::INFINITY, DT);
    assert_eq!(engine.frame_count(), 4);
}

#[test]
fn test_scrolling_clouds_wrap_to_exact_bound() {
    let mut engine = engine_with(
        SceneConfig::default()
            .with_flower_count(0)
            .with_raindrops_per_cloud(1),
    );
    let scrolling: Vec<_> = engine
        .clouds()
        .iter()
        .copied()
        .filter(|c| engine.world().get_component::<CloudComponent>(*c).unwrap().scrolls())
        .collect();
    assert_eq!(scrolling.len(), 3);

    let mut previous: Vec<f32> = scrolling
        .iter()
        .map(|c| engine.world().transform(*c).unwrap().position.x)
        .collect();
    let mut wraps = 0;

    for _ in 0..12_000 {
        run(&mut engine, 1);
        for (cloud, last) in scrolling.iter().zip(previous.iter_mut()) {
            let x = engine.world().transform(*cloud).unwrap().position.x;
            assert!((-10.0..=10.0).contains(&x), "x = {x}");
            if x < *last - 1.0 {
                assert_eq!(x, -10.0);
                wraps += 1;
            }
            *last = x;
        }
    }
    assert!(wraps >= 3);
}

#[test]
fn test_snapshot_covers_scene() {
    let mut engine = engine();
    let snapshot = engine.frame_at(DT, DT);

    // platform, sun, 3 mountains, 6 trunks, 6 canopies, 100 flowers,
    // 17 clouds, moon, butterfly
    assert_eq!(snapshot.instances.len(), 136);
    assert_eq!(snapshot.raindrops.len(), 1_400);
    assert_eq!(snapshot.frame, 1);
}

#[test]
fn test_moon_follows_orbit() {
    let mut engine = engine();
    let moon = engine.moon().unwrap();

    engine.frame_at(0.0, 0.0);
    let start = engine.world().transform(moon).unwrap().position;
    engine.frame_at(5.0, 5.0);
    let later = engine.world().transform(moon).unwrap().position;

    assert!((start.y - 5.0).abs() < 1e-5);
    assert!((later.x - 0.5f32.sin() * 10.0).abs() < 1e-4);
    assert_eq!(later.z, -30.0);
}

#[test]
fn test_shutdown_closes_input_and_freezes_frames() {
    let mut engine = engine();
    let keys = engine.key_sender();
    run(&mut engine, 3);

    engine.shutdown();
    assert!(!engine.is_running());
    assert_eq!(keys.press(KeyCode::W), Err(InputError::Disconnected));

    engine.frame_at(10.0, DT);
    assert_eq!(engine.frame_count(), 3);
    assert_eq!(engine.snapshot().frame, 3);
}

#[test]
fn test_same_seed_same_frames() {
    let mut a = engine();
    let mut b = engine();
    run(&mut a, 30);
    run(&mut b, 30);

    assert_eq!(a.snapshot().instances, b.snapshot().instances);
    assert_eq!(a.snapshot().raindrops, b.snapshot().raindrops);
}
