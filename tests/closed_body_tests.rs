use softlens::{
    ClosedBody, ClosedBodyParams, LocalForce, Particle, PressureForce, Simulation, TriMesh, Vec3,
    VerletIntegrator,
};

#[test]
fn pressure_without_springs_expands_every_particle() {
    let mesh = TriMesh::<f64>::uv_sphere(12, 8, 1.0).unwrap();

    let mut sim = Simulation::new();
    for &v in &mesh.vertices {
        sim.add_object(&Particle::new(v, 1.0));
    }
    sim.add_local_force(&LocalForce::Pressure(PressureForce::new(mesh.faces.clone(), 2.0)))
        .unwrap();
    sim.add_integrator(&VerletIntegrator::new(0.05).into());

    let distances = |sim: &Simulation<f64>| {
        let c = sim.centroid();
        sim.particles().iter().map(|p| p.pos.distance(c)).collect::<Vec<_>>()
    };

    let mut previous = distances(&sim);
    for step in 0..20 {
        sim.update(0.05);
        let current = distances(&sim);
        for (i, (before, after)) in previous.iter().zip(current.iter()).enumerate() {
            assert!(after > before, "step {} particle {}: {} -> {}", step, i, before, after);
        }
        previous = current;
    }
}

#[test]
fn pressure_keeps_centroid_in_place() {
    let mesh = TriMesh::<f64>::uv_sphere(10, 6, 1.0).unwrap();
    let mut body = ClosedBody::new(&mesh, &ClosedBodyParams::new().with_pressure(5.0)).unwrap();
    for _ in 0..50 {
        body.update(0.05);
    }
    assert!(body.simulation().centroid().length() < 1e-9);
}

#[test]
fn spring_tension_balances_pressure() {
    let mesh = TriMesh::<f64>::uv_sphere(12, 8, 1.0).unwrap();
    let params = ClosedBodyParams::new()
        .with_pressure(1.0)
        .with_spring(10.0, 0.2)
        .with_drag(0.02);
    let mut body = ClosedBody::new(&mesh, &params).unwrap();
    let initial = body.volume();

    let mut volumes = Vec::new();
    for _ in 0..600 {
        body.update(0.05);
        volumes.push(body.volume());
    }

    let last = *volumes.last().unwrap();
    assert!(last.is_finite());
    assert!(last > initial, "inflated volume {} should exceed {}", last, initial);
    assert!(last < initial * 1.5, "springs should hold volume near {}, got {}", initial, last);

    // Settled: the last hundred steps barely change the volume.
    let tail = &volumes[volumes.len() - 100..];
    let (lo, hi) = tail
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    assert!(hi - lo < 1e-3 * initial, "volume still moving: {}..{}", lo, hi);
}

#[test]
fn releasing_pressure_lets_the_body_relax() {
    let mesh = TriMesh::<f64>::uv_sphere(12, 8, 1.0).unwrap();
    let params = ClosedBodyParams::new()
        .with_pressure(3.0)
        .with_spring(10.0, 0.2)
        .with_drag(0.02);
    let mut body = ClosedBody::new(&mesh, &params).unwrap();
    let initial = body.volume();

    for _ in 0..400 {
        body.update(0.05);
    }
    let inflated = body.volume();

    body.set_pressure(0.0);
    for _ in 0..800 {
        body.update(0.05);
    }
    let relaxed = body.volume();

    assert!(inflated > initial);
    assert!((relaxed - initial).abs() < (inflated - initial) * 0.1);
}

#[test]
fn to_mesh_follows_particles() {
    let mesh = TriMesh::<f32>::uv_sphere(8, 4, 1.0).unwrap();
    let mut body = ClosedBody::new(&mesh, &ClosedBodyParams::new().with_pressure(4.0)).unwrap();
    body.update(0.05);
    let out = body.to_mesh();
    assert_eq!(out.faces, mesh.faces);
    assert_eq!(out.vertices.len(), mesh.vertices.len());
    assert_eq!(out.vertices[5], body.vertex_object(5).pos);
    assert_ne!(out.vertices[5], mesh.vertices[5]);
}

#[test]
fn gravity_moves_the_whole_body() {
    let mesh = TriMesh::<f64>::uv_sphere(8, 6, 1.0).unwrap();
    let params = ClosedBodyParams::new().with_gravity(Vec3::new(0.0, -9.80665, 0.0));
    let mut body = ClosedBody::new(&mesh, &params).unwrap();
    for _ in 0..10 {
        body.update(0.05);
    }
    assert!(body.simulation().centroid().y < -0.1);
}
