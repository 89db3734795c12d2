use approx::assert_relative_eq;
use growsim::core::{Atmosphere, Gas, Particle, Scenario};
use growsim::error::Result;

/// Reference run: 1.5 nm seed, unit vapor properties, 1 atm, 300 K.
fn golden() -> Result<Atmosphere> {
    Scenario::default().build()
}

/// Sulfuric acid condensing on a 2 nm seed: growth is visible within seconds.
fn sulfuric() -> Result<Atmosphere> {
    let particle = Particle::new("seed", 2e-9, 1830.0, 298.0)?;
    let vapor = Gas::new("h2so4", 0.098, 1830.0, 298.0, 51.96, 1e15)?;
    Atmosphere::new(particle, vapor, 1.0, 298.0, 0.0)
}

#[test]
fn advance_zero_is_a_no_op() -> Result<()> {
    let mut atm = sulfuric()?;
    let r0 = atm.radius();
    atm.advance(0.0)?;
    assert_eq!(atm.radius(), r0);
    assert_eq!(atm.time(), 0.0);
    Ok(())
}

#[test]
fn clock_accumulates_steps() -> Result<()> {
    let mut atm = Scenario::from_json(r#"{ "ambient": { "start_time": 10.0 } }"#)?.build()?;
    atm.advance(1.5)?;
    atm.advance(2.5)?;
    assert_relative_eq!(atm.time(), 14.0);
    Ok(())
}

/// Condensation only: a longer step never yields a smaller radius.
#[test]
fn growth_is_monotonic_in_dt() -> Result<()> {
    let base = sulfuric()?;
    let mut last = base.radius();
    for dt in [0.0, 0.1, 0.5, 1.0, 2.0, 10.0] {
        let mut atm = base.clone();
        atm.advance(dt)?;
        assert!(atm.radius() >= last, "dt={dt}: {} < {last}", atm.radius());
        last = atm.radius();
    }

    let mut atm = base;
    let mut prev = atm.radius();
    for _ in 0..100 {
        atm.advance(1.0)?;
        assert!(atm.radius() >= prev);
        prev = atm.radius();
    }
    assert!(prev > 2e-9);
    Ok(())
}

/// Forward Euler is first order: halving dt roughly halves the error against a fine reference.
#[test]
fn euler_error_shrinks_linearly() -> Result<()> {
    let horizon = 200.0;
    let integrate = |dt: f64| -> Result<f64> {
        let mut atm = sulfuric()?;
        let steps = (horizon / dt).round() as usize;
        atm.run(dt, steps)?;
        Ok(atm.radius())
    };

    let reference = integrate(0.05)?;
    let coarse = (integrate(20.0)? - reference).abs();
    let fine = (integrate(10.0)? - reference).abs();
    assert!(coarse > 0.0);
    let ratio = coarse / fine;
    assert!(
        ratio > 1.5 && ratio < 2.6,
        "error ratio {ratio} (coarse={coarse:e}, fine={fine:e})"
    );
    Ok(())
}

/// Two half steps land close to one full step but are not required to match it.
#[test]
fn half_steps_approximate_full_step() -> Result<()> {
    let mut full = sulfuric()?;
    let mut halves = full.clone();
    full.advance(1.0)?;
    halves.advance(0.5)?;
    halves.advance(0.5)?;
    assert_eq!(full.time(), halves.time());
    assert_relative_eq!(full.radius(), halves.radius(), max_relative = 1e-5);
    assert_ne!(full.radius(), halves.radius());
    Ok(())
}

/// Kn > 0 and 0 < β <= 1 across a sweep of sizes, temperatures and pressures.
#[test]
fn transport_quantities_stay_in_range() -> Result<()> {
    for radius in [1e-10, 1.5e-9, 1e-8, 1e-7, 1e-6, 1e-5] {
        for temperature in [200.0, 300.0, 400.0] {
            for pressure in [0.1, 1.0, 10.0] {
                let particle = Particle::new("p", radius, 1500.0, temperature)?;
                let vapor = Gas::new("v", 0.098, 1830.0, temperature, 51.96, 1e13)?;
                let atm = Atmosphere::new(particle, vapor, pressure, temperature, 0.0)?;
                let kn = atm.knudsen_number();
                let beta = atm.correction_factor();
                assert!(kn > 0.0 && kn.is_finite(), "Kn={kn} at r={radius}");
                assert!(beta > 0.0 && beta <= 1.0, "beta={beta} at r={radius}");
                assert!(atm.growth_rate() > 0.0);
            }
        }
    }
    Ok(())
}

/// Golden regression fixture: reproducible bit for bit, and close to the reference value.
#[test]
fn golden_scenario_is_deterministic() -> Result<()> {
    let mut a = golden()?;
    let mut b = golden()?;
    a.advance(1.0)?;
    b.advance(1.0)?;
    assert_eq!(a.radius().to_bits(), b.radius().to_bits());
    assert_eq!(a.time(), 1.0);

    // 1.5000000000123814e-9 m
    assert_eq!(a.radius().to_bits(), 0x3e19_c511_dc3b_2bc0);

    let r0 = 1.5e-9;
    let expected_rate = 2.4762942480494433e-20;
    assert!(a.radius() > r0);
    assert_relative_eq!(a.radius() - r0, expected_rate / 2.0, max_relative = 1e-4);
    Ok(())
}

#[test]
fn zero_concentration_means_no_growth() -> Result<()> {
    let particle = Particle::new("seed", 2e-9, 1830.0, 298.0)?;
    let vapor = Gas::new("h2so4", 0.098, 1830.0, 298.0, 51.96, 0.0)?;
    let mut atm = Atmosphere::new(particle, vapor, 1.0, 298.0, 0.0)?;
    atm.advance(100.0)?;
    assert_eq!(atm.radius(), 2e-9);
    Ok(())
}
