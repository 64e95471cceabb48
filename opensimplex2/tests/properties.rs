//! Behavioural properties of the generator across seeds and orientations.

use std::array;

use opensimplex2::{
    NoiseSettings, OpenSimplex2, Orientation2, Orientation3, Orientation4, PermutationTable,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Empirical bound every variant stays inside.
const ENVELOPE: f64 = 1.2;
const SAMPLES_PER_VARIANT: usize = 100_000;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("opensimplex2=debug")
        .try_init();
}

fn random_point<const N: usize>(rng: &mut StdRng, range: f64) -> [f64; N] {
    array::from_fn(|_| rng.random_range(-range..range))
}

#[test]
fn permutation_is_a_bijection_for_many_seeds() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..32 {
        let seed: i64 = rng.random();
        let table = PermutationTable::new(seed);
        let mut sorted = table.perm().to_vec();
        sorted.sort_unstable();
        assert!(
            sorted.iter().enumerate().all(|(i, &p)| usize::from(p) == i),
            "seed {seed} is not a permutation"
        );
    }
}

#[test]
#[allow(clippy::float_cmp)]
fn same_seed_same_output() {
    init_tracing();
    let a = OpenSimplex2::new(8_675_309);
    let b = opensimplex2::create(8_675_309);
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1000 {
        let [x, y, z, w] = random_point::<4>(&mut rng, 500.0);
        assert_eq!(a.noise2(x, y), b.noise2(x, y));
        assert_eq!(a.noise3_xz_before_y(x, y, z), b.noise3_xz_before_y(x, y, z));
        assert_eq!(a.noise4_xy_before_zw(x, y, z, w), b.noise4_xy_before_zw(x, y, z, w));
    }
}

#[test]
fn different_seeds_differ() {
    let a = OpenSimplex2::new(1);
    let b = OpenSimplex2::new(2);
    let mut rng = StdRng::seed_from_u64(2);
    let differing = (0..100)
        .filter(|_| {
            let [x, y, z] = random_point::<3>(&mut rng, 100.0);
            (a.noise3_classic(x, y, z) - b.noise3_classic(x, y, z)).abs() > 1e-9
        })
        .count();
    assert!(differing > 50, "only {differing} of 100 samples differ");
}

#[test]
fn output_stays_inside_the_envelope() {
    let noise = OpenSimplex2::new(-42);
    let mut rng = StdRng::seed_from_u64(3);

    for &o in Orientation2::ALL {
        let max = (0..SAMPLES_PER_VARIANT)
            .map(|_| {
                let [x, y] = random_point::<2>(&mut rng, 1000.0);
                noise.sample2(o, x, y).abs()
            })
            .fold(0.0, f64::max);
        assert!(max <= ENVELOPE, "2D {o}: max |value| {max}");
        assert!(max > 0.3, "2D {o}: suspiciously flat, max |value| {max}");
    }
    for &o in Orientation3::ALL {
        let max = (0..SAMPLES_PER_VARIANT)
            .map(|_| {
                let [x, y, z] = random_point::<3>(&mut rng, 1000.0);
                noise.sample3(o, x, y, z).abs()
            })
            .fold(0.0, f64::max);
        assert!(max <= ENVELOPE, "3D {o}: max |value| {max}");
        assert!(max > 0.3, "3D {o}: suspiciously flat, max |value| {max}");
    }
    for &o in Orientation4::ALL {
        let max = (0..SAMPLES_PER_VARIANT)
            .map(|_| {
                let [x, y, z, w] = random_point::<4>(&mut rng, 1000.0);
                noise.sample4(o, x, y, z, w).abs()
            })
            .fold(0.0, f64::max);
        assert!(max <= ENVELOPE, "4D {o}: max |value| {max}");
        assert!(max > 0.3, "4D {o}: suspiciously flat, max |value| {max}");
    }
}

#[test]
fn lattice_walks_stay_bounded() {
    let noise = OpenSimplex2::new(123);
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20_000 {
        let [x, y, z, w] = random_point::<4>(&mut rng, 200.0);

        let (_, trace) = noise.trace2(Orientation2::Classic, x, y);
        assert_eq!(trace.visited, 3);

        let (_, trace) = noise.trace3(Orientation3::Classic, x, y, z);
        assert!(trace.contributed <= 4, "{trace:?}");
        assert!(trace.visited <= 8, "{trace:?}");

        let (_, trace) = noise.trace4(Orientation4::Classic, x, y, z, w);
        assert_eq!(trace.visited, 5);
    }
}

#[test]
fn extreme_inputs_do_not_panic() {
    let noise = OpenSimplex2::new(i64::MIN);
    for v in [1e12, -1e12, 1e300, f64::MAX, f64::MIN, f64::INFINITY, f64::NAN] {
        let _ = noise.noise2(v, 0.5);
        let _ = noise.noise3_classic(0.5, v, -v);
        let _ = noise.noise4_xyz_before_w(v, v, 0.25, v);
    }
    // Large but in-range coordinates still produce finite values.
    assert!(noise.noise2(1.0e8 + 0.3, -2.0e8 + 0.7).is_finite());
    assert!(noise.noise4_classic(1.0e8, -1.0e8, 3.3, 0.1).is_finite());
}

#[test]
#[allow(clippy::float_cmp)]
fn concurrent_reads_match_serial_reads() {
    let noise = OpenSimplex2::new(2024);
    let points: Vec<[f64; 4]> = {
        let mut rng = StdRng::seed_from_u64(6);
        (0..10_000).map(|_| random_point::<4>(&mut rng, 300.0)).collect()
    };
    let eval = |&[x, y, z, w]: &[f64; 4]| {
        noise.noise2(x, y) + noise.noise3_xy_before_z(x, y, z) + noise.noise4_classic(x, y, z, w)
    };

    let serial: Vec<f64> = points.iter().map(eval).collect();
    let parallel: Vec<f64> = points.par_iter().map(eval).collect();
    assert_eq!(serial, parallel);
}

#[test]
#[allow(clippy::float_cmp)]
fn settings_load_from_json() {
    init_tracing();
    let json = r#"{
        "seed": -5,
        "orientation_2d": "x_before_y",
        "orientation_4d": "xyz_before_w"
    }"#;
    let settings: NoiseSettings = serde_json::from_str(json).expect("valid settings");
    assert_eq!(settings.seed, -5);
    assert_eq!(settings.orientation_2d, Orientation2::XBeforeY);
    assert_eq!(settings.orientation_3d, Orientation3::Classic);
    assert_eq!(settings.orientation_4d, Orientation4::XYZBeforeW);

    let oriented = settings.build();
    let plain = OpenSimplex2::new(-5);
    assert_eq!(oriented.sample2(3.5, 1.25), plain.noise2_x_before_y(3.5, 1.25));
    assert_eq!(oriented.sample3(3.5, 1.25, 0.5), plain.noise3_classic(3.5, 1.25, 0.5));

    let round_trip: NoiseSettings =
        serde_json::from_str(&serde_json::to_string(&settings).expect("serialize"))
            .expect("deserialize");
    assert_eq!(round_trip, settings);
}

#[test]
fn unknown_orientation_names_are_reported() {
    let err = "diagonal".parse::<Orientation2>().unwrap_err();
    assert!(err.to_string().contains("x_before_y"), "{err}");

    let json = r#"{ "orientation_4d": "wxyz" }"#;
    assert!(serde_json::from_str::<NoiseSettings>(json).is_err());
}
