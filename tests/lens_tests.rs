use approx::assert_relative_eq;
use softlens::{ClosedBodyParams, Lens, LensConfig, NoOpStepObserver};

fn config() -> LensConfig<f64> {
    LensConfig::new()
        .with_segments(12, 8)
        .with_thickness(0.5)
        .with_body(ClosedBodyParams::new().with_pressure(1.0).with_drag(0.02).with_iterations(2))
}

fn radial(lens: &Lens<f64>, index: usize) -> f64 {
    let p = lens.vertex_object(index).pos;
    (p.x * p.x + p.z * p.z).sqrt()
}

#[test]
fn lens_is_flattened_along_the_axis() {
    let lens = Lens::new(&config()).unwrap();
    assert_relative_eq!(lens.axial_thickness(), 1.0, epsilon = 1e-12);
    let equator = lens.ring_start(lens.equator_ring());
    assert_relative_eq!(radial(&lens, equator), 1.0, epsilon = 1e-12);
}

#[test]
fn pinned_rim_follows_its_targets() {
    let mut lens = Lens::new(&config()).unwrap();
    let handles = lens.pin_rim(3).unwrap();
    assert_eq!(handles.len(), 3 * 12);

    let equator = lens.ring_start(lens.equator_ring());
    let before = radial(&lens, equator);

    lens.move_rim(0.1);
    for _ in 0..5 {
        lens.update(0.05);
    }

    assert_relative_eq!(radial(&lens, equator), before + 0.1, epsilon = 1e-9);
    assert_relative_eq!(lens.vertex_object(equator).pos.y, 0.0, epsilon = 1e-12);
}

#[test]
fn stretching_the_rim_thins_the_lens() {
    let mut lens = Lens::new(&config()).unwrap();
    lens.pin_rim(1).unwrap();
    lens.set_pressure(0.0);

    for _ in 0..200 {
        lens.update(0.05);
    }
    let relaxed = lens.axial_thickness();

    for _ in 0..3 {
        lens.move_rim(0.05);
    }
    for _ in 0..600 {
        lens.update(0.05);
    }
    let stretched = lens.axial_thickness();

    assert!(stretched.is_finite());
    assert!(stretched < relaxed, "stretched {} relaxed {}", stretched, relaxed);
}

#[test]
fn pressure_toggle_round_trips() {
    let mut lens = Lens::new(&config()).unwrap();
    assert_eq!(lens.pressure(), 1.0);
    lens.set_pressure(0.0);
    assert_eq!(lens.pressure(), 0.0);
    lens.set_pressure(1.0);
    for _ in 0..100 {
        lens.step(0.05, &mut NoOpStepObserver);
    }
    assert!(lens.body().volume() > 0.0);
    assert!(lens.simulation().particles().iter().all(|p| p.pos.is_finite()));
}
