use softlens::{Lens, LensConfig, Vec3};

fn run() -> Vec<Vec3<f32>> {
    let mut lens = Lens::new(&LensConfig::new()).unwrap();
    lens.pin_rim(2).unwrap();
    for i in 0..120 {
        if i % 30 == 0 {
            lens.move_rim(0.02);
        }
        lens.update(1.0 / 60.0);
    }
    lens.simulation().positions()
}

#[test]
fn lens_deterministic() {
    let results: Vec<_> = (0..5).map(|_| run()).collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
            assert_eq!(a.z, b.z);
        }
    }
}
