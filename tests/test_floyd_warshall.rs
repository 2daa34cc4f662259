use anyhow::Result;
use dense_diameter::prelude::*;
use dsi_progress_logger::no_logging;

const S: i64 = DEFAULT_SENTINEL;

#[test]
fn test_empty_and_single() -> Result<()> {
    let mut empty = DistanceMatrix::<i64>::with_default_sentinel(0);
    floyd_warshall::run_in_place(&mut empty, no_logging![]);
    assert!(empty.is_empty());

    let mut single = DistanceMatrix::from_rows(vec![vec![0]], S)?;
    floyd_warshall::run_in_place(&mut single, no_logging![]);
    assert_eq!(single.to_rows(), vec![vec![0]]);
    Ok(())
}

#[test]
fn test_directed_weighted() -> Result<()> {
    let mut m = DistanceMatrix::from_rows(
        vec![
            [0, 4, S, 8, S],
            [S, 0, 1, S, 6],
            [2, S, 0, 3, S],
            [S, S, 1, 0, 2],
            [2, S, S, 5, 0],
        ],
        S,
    )?;
    floyd_warshall::run_in_place(&mut m, no_logging![]);
    assert_eq!(
        m.to_rows(),
        vec![
            vec![0, 4, 5, 8, 10],
            vec![3, 0, 1, 4, 6],
            vec![2, 6, 0, 3, 5],
            vec![3, 7, 1, 0, 2],
            vec![2, 6, 6, 5, 0],
        ]
    );
    assert_eq!(floyd_warshall::negative_cycle(&m), None);
    Ok(())
}

#[test]
fn test_unreachable_stays_sentinel() -> Result<()> {
    let mut m = DistanceMatrix::from_arcs(4, [(0, 1, 3), (1, 2, 4)], S)?;
    floyd_warshall::run_in_place(&mut m, no_logging![]);
    assert_eq!(m[(0, 2)], 7);
    assert_eq!(m[(2, 0)], S);
    assert_eq!(m[(0, 3)], S);
    assert_eq!(m[(3, 3)], 0);
    Ok(())
}

#[test]
fn test_two_sentinels_never_summed() -> Result<()> {
    // Three i32 sentinels overflow, so no sentinel may enter a sum.
    let s = i32::DEFAULT_SENTINEL;
    let mut m = DistanceMatrix::<i32>::with_default_sentinel(50);
    floyd_warshall::run_in_place(&mut m, no_logging![]);
    assert_eq!(m, DistanceMatrix::new(50, s));
    Ok(())
}

#[test]
fn test_pure_variant() -> Result<()> {
    let m = RandomDistanceMatrix::new(40, 0.2, 7).generate::<i64>();
    let original = m.clone();
    let distances = floyd_warshall::run(&m, no_logging![]);
    assert_eq!(m, original);

    let mut in_place = m.clone();
    floyd_warshall::run_in_place(&mut in_place, no_logging![]);
    assert_eq!(distances, in_place);
    Ok(())
}

#[test]
fn test_idempotent() -> Result<()> {
    for seed in 0..5 {
        let mut m = RandomDistanceMatrix::new(30, 0.1, seed).generate::<i64>();
        floyd_warshall::run_in_place(&mut m, no_logging![]);
        let once = m.clone();
        floyd_warshall::run_in_place(&mut m, no_logging![]);
        assert_eq!(m, once, "seed {}", seed);
    }
    Ok(())
}

#[test]
fn test_triangle_inequality_and_diagonal() -> Result<()> {
    for seed in 0..5 {
        let m = RandomDistanceMatrix::new(25, 0.15, seed).generate::<i64>();
        let d = floyd_warshall::run(&m, no_logging![]);
        let n = d.num_nodes();
        for i in 0..n {
            assert_eq!(d[(i, i)], 0);
            for k in 0..n {
                if !d.is_reachable(i, k) {
                    continue;
                }
                for j in 0..n {
                    if d.is_reachable(k, j) {
                        assert!(
                            d[(i, j)] <= d[(i, k)] + d[(k, j)],
                            "d({i}, {j}) > d({i}, {k}) + d({k}, {j})"
                        );
                    }
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_never_longer_than_arcs() -> Result<()> {
    let m = RandomDistanceMatrix::new(30, 0.5, 3).generate::<i64>();
    let d = floyd_warshall::run(&m, no_logging![]);
    for (direct, shortest) in m.as_slice().iter().zip(d.as_slice()) {
        assert!(shortest <= direct);
    }
    Ok(())
}

#[test]
fn test_zero_sum_cycle() -> Result<()> {
    let mut m = DistanceMatrix::from_rows(vec![[0, 5], [-5, 0]], S)?;
    floyd_warshall::run_in_place(&mut m, no_logging![]);
    assert_eq!(m.to_rows(), vec![vec![0, 5], vec![-5, 0]]);
    assert_eq!(floyd_warshall::negative_cycle(&m), None);
    Ok(())
}

#[test]
fn test_negative_cycle_detected() -> Result<()> {
    let mut m = DistanceMatrix::from_arcs(3, [(0, 1, 1), (1, 2, -3), (2, 0, 1)], S)?;
    floyd_warshall::run_in_place(&mut m, no_logging![]);
    assert_eq!(floyd_warshall::negative_cycle(&m), Some(0));
    Ok(())
}

#[test]
fn test_custom_sentinel() -> Result<()> {
    let s = 1_000;
    let mut m = DistanceMatrix::from_arcs(3, [(0, 1, 10), (1, 2, 20)], s)?;
    floyd_warshall::run_in_place(&mut m, no_logging![]);
    assert_eq!(m.sentinel(), s);
    assert_eq!(m[(0, 2)], 30);
    assert_eq!(m[(2, 1)], s);
    Ok(())
}

#[test]
fn test_float_weights() -> Result<()> {
    let s = f64::DEFAULT_SENTINEL;
    let mut m = DistanceMatrix::from_rows(
        vec![[0.0, 1.5, s], [s, 0.0, 0.25], [2.0, s, 0.0]],
        s,
    )?;
    floyd_warshall::run_in_place(&mut m, no_logging![]);
    assert_eq!(
        m.to_rows(),
        vec![
            vec![0.0, 1.5, 1.75],
            vec![2.25, 0.0, 0.25],
            vec![2.0, 3.5, 0.0]
        ]
    );
    Ok(())
}

#[test]
fn test_negative_cycle_does_not_overflow() -> Result<()> {
    // Every pair lies on a negative cycle: distances roughly double in
    // magnitude at each iteration and reach i64::MIN long before the end.
    let n = 80;
    let arcs = (0..n).flat_map(|i| (0..n).filter(move |&j| j != i).map(move |j| (i, j, -1)));
    let mut m = DistanceMatrix::from_arcs(n, arcs, S)?;
    floyd_warshall::run_in_place(&mut m, no_logging![]);
    assert_eq!(floyd_warshall::negative_cycle(&m), Some(0));
    assert!(m.as_slice().iter().all(|&d| d < 0));
    Ok(())
}

#[test]
fn test_i32_weights_near_the_sentinel() -> Result<()> {
    let s = i32::DEFAULT_SENTINEL;
    let w = s - 1;
    let mut m = DistanceMatrix::from_arcs(3, [(0, 1, w), (1, 2, w)], s)?;
    floyd_warshall::run_in_place(&mut m, no_logging![]);
    // 2w fits in an i32 but is beyond the sentinel
    assert_eq!(m[(0, 1)], w);
    assert_eq!(m[(0, 2)], s);

    let s = i32::MAX - 1;
    let w = 900_000_000;
    let mut m = DistanceMatrix::from_arcs(4, [(0, 1, w), (1, 2, w), (2, 3, w)], s)?;
    floyd_warshall::run_in_place(&mut m, no_logging![]);
    assert_eq!(m[(0, 2)], 2 * w);
    assert_eq!(m[(1, 3)], 2 * w);
    // 3w saturates, and is never shorter than the current entry
    assert_eq!(m[(0, 3)], s);
    assert_eq!(m[(3, 0)], s);
    Ok(())
}
