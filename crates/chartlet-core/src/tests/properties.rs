use crate::generate::generate_categories;
use crate::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn pairs(points: &[(f64, f64)]) -> SeriesInput {
    SeriesInput::Pairs(points.iter().map(|&(x, y)| [x, y]).collect())
}

#[test]
fn one_path_per_series_each_starting_with_move() {
    let series = vec![
        pairs(&[(3.0, 1.0), (1.0, 2.0)]),
        pairs(&[(0.0, 9.0)]),
        pairs(&[(7.0, -4.0), (2.0, 0.5), (5.0, 5.0)]),
    ];
    let geom = compute_line_paths(Some(&series), 320.0, 200.0).unwrap();
    assert_eq!(geom.paths.len(), series.len());
    for path in &geom.paths {
        assert!(path.to_path_string().starts_with("M "));
    }
}

#[test]
fn building_twice_is_identical() {
    let series = vec![pairs(&[(2.0, 1.0), (2.0, 3.0), (0.0, 2.0), (1.0, 0.0)])];
    let a = compute_line_paths(Some(&series), 90.0, 30.0).unwrap();
    let b = compute_line_paths(Some(&series), 90.0, 30.0).unwrap();
    assert_eq!(a.paths, b.paths);
}

#[test]
fn x_ties_keep_input_order() {
    let series = vec![pairs(&[(1.0, 0.0), (0.0, 5.0), (1.0, 10.0), (1.0, 5.0)])];
    let geom = compute_line_paths(Some(&series), 10.0, 10.0).unwrap();
    let ys: Vec<f64> = geom.paths[0].points().iter().map(|p| p.y).collect();
    assert_eq!(ys, vec![5.0, 10.0, 0.0, 5.0]);
}

#[test]
fn x_is_monotonic_after_sorting() {
    let series = vec![pairs(&[(9.0, 1.0), (-3.0, 2.0), (4.5, 3.0), (0.0, 4.0)])];
    let geom = compute_line_paths(Some(&series), 500.0, 500.0).unwrap();
    let xs: Vec<f64> = geom.paths[0].points().iter().map(|p| p.x).collect();
    assert!(xs.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(xs.first(), Some(&0.0));
    assert_eq!(xs.last(), Some(&500.0));
}

#[test]
fn higher_values_are_drawn_higher() {
    let series = vec![pairs(&[(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)])];
    let geom = compute_line_paths(Some(&series), 100.0, 100.0).unwrap();
    let ys: Vec<f64> = geom.paths[0].points().iter().map(|p| p.y).collect();
    assert!(ys.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn degenerate_x_pool_maps_every_point_to_midpoint() {
    let series = vec![pairs(&[(4.0, 1.0), (4.0, 2.0)]), pairs(&[(4.0, 3.0)])];
    let geom = compute_line_paths(Some(&series), 60.0, 60.0).unwrap();
    for path in &geom.paths {
        assert!(path.points().iter().all(|p| p.x == 30.0));
    }
}

#[test]
fn categorical_ends_are_extent_apart() {
    let mut rng = StdRng::seed_from_u64(11);
    for n in 1..6 {
        let data = generate_categories(&mut rng, n);
        let series = vec![SeriesInput::Record(data)];
        let geom = compute_line_paths(Some(&series), 240.0, 100.0).unwrap();
        let points = geom.paths[0].points();
        assert_eq!(points.len(), n);
        let span = points[n - 1].x - points[0].x;
        if n == 1 {
            assert_eq!(span, 0.0);
            assert_eq!(points[0].x, 120.0);
        } else {
            assert_eq!(span, 240.0);
        }
    }
}
