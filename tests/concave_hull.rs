mod concave_hull {
  use khull::data::*;
  use khull::*;

  use claims::{assert_err, assert_ok};

  fn init_tracing() {
    let _ = tracing_subscriber::fmt()
      .with_max_level(tracing::Level::DEBUG)
      .with_test_writer()
      .try_init();
  }

  fn pts(coords: &[(f64, f64)]) -> Vec<Point<f64>> {
    coords.iter().copied().map(Point::from).collect()
  }

  fn cloud() -> Vec<Point<f64>> {
    pts(&[
      (-0.2, -0.8),
      (0.1, -0.8),
      (0.5, -0.7),
      (0.6, -0.6),
      (-0.5, -0.5),
      (0.3, -0.4),
      (-0.6, -0.2),
      (-0.35, -0.18),
      (0.05, -0.2),
      (-0.1, 0.1),
      (-0.6, 0.2),
      (0.05, 0.4),
      (-0.5, 0.5),
      (0.5, 0.55),
      (-0.1, 0.7),
      (0.2, 0.8),
    ])
  }

  #[test]
  fn cloud_k3() -> Result<(), Error> {
    init_tracing();
    let hull = concave_hull(cloud(), 3)?;
    assert_eq!(
      hull.points(),
      &pts(&[
        (0.2, 0.8),
        (0.5, 0.55),
        (-0.1, 0.1),
        (0.05, -0.2),
        (0.3, -0.4),
        (0.6, -0.6),
        (0.5, -0.7),
        (0.1, -0.8),
        (-0.2, -0.8),
        (-0.5, -0.5),
        (-0.6, -0.2),
        (-0.6, 0.2),
        (-0.5, 0.5),
        (-0.1, 0.7),
        (0.2, 0.8),
      ])[..]
    );
    assert_ok!(hull.validate());
    assert!(hull.contains(&Point::new([-0.35, -0.18])));
    assert!(hull.contains(&Point::new([0.05, 0.4])));
    Ok(())
  }

  #[test]
  fn cloud_small_k_is_raised() -> Result<(), Error> {
    assert_eq!(concave_hull(cloud(), 0)?, concave_hull(cloud(), 3)?);
    Ok(())
  }

  #[test]
  fn cloud_k4_is_looser() -> Result<(), Error> {
    let hull = concave_hull(cloud(), 4)?;
    assert_eq!(
      hull.points(),
      &pts(&[
        (0.2, 0.8),
        (0.5, 0.55),
        (0.05, -0.2),
        (0.3, -0.4),
        (0.6, -0.6),
        (0.5, -0.7),
        (0.1, -0.8),
        (-0.2, -0.8),
        (-0.5, -0.5),
        (-0.6, -0.2),
        (-0.6, 0.2),
        (-0.5, 0.5),
        (-0.1, 0.7),
        (0.2, 0.8),
      ])[..]
    );
    assert!(hull.signed_area().abs() > concave_hull(cloud(), 3)?.signed_area().abs());
    Ok(())
  }

  #[test]
  fn cloud_large_k() {
    assert_eq!(concave_hull(cloud(), 13), Err(Error::NeighborCountTooLarge));
    assert_eq!(concave_hull(cloud(), 16), Err(Error::NeighborCountTooLarge));
  }

  #[test]
  fn square_with_centre() -> Result<(), Error> {
    init_tracing();
    let square = pts(&[(0., 0.), (0., 10.), (10., 10.), (10., 0.), (5., 5.)]);
    let hull = concave_hull(square.clone(), 3)?;
    assert_eq!(
      hull.points(),
      &pts(&[(0., 10.), (10., 10.), (10., 0.), (0., 0.), (0., 10.)])[..]
    );
    assert!(hull.contains(&Point::new([5., 5.])));
    assert_eq!(concave_hull(square, 4), Err(Error::NeighborCountTooLarge));
    Ok(())
  }

  #[test]
  fn three_points_unchanged() -> Result<(), Error> {
    let tri = pts(&[(0., 0.), (1., 0.), (0., 1.)]);
    let hull = concave_hull(tri.clone(), 3)?;
    assert_eq!(hull.into_points(), tri);
    Ok(())
  }

  #[test]
  fn three_distinct_after_dedup() -> Result<(), Error> {
    let input = pts(&[(0., 0.), (1., 0.), (0., 0.), (0., 1.), (1., 0.)]);
    let hull = concave_hull(input, 3)?;
    assert_eq!(hull.into_points(), pts(&[(0., 0.), (1., 0.), (0., 1.)]));
    Ok(())
  }

  #[test]
  fn too_few_points() {
    assert_eq!(concave_hull(pts(&[(0., 0.), (1., 1.)]), 3), Err(Error::InsufficientPoints));
    assert_eq!(concave_hull(Vec::<Point<f64>>::new(), 3), Err(Error::InsufficientPoints));
    let dups = pts(&[(0., 0.), (1., 1.), (0., 0.), (1., 1.)]);
    assert_eq!(concave_hull(dups, 3), Err(Error::InsufficientPoints));
  }

  #[test]
  fn grid() -> Result<(), Error> {
    let grid: Vec<Point<f64>> = (0..4)
      .flat_map(|x| (0..4).map(move |y| Point::new([f64::from(x), f64::from(y)])))
      .collect();
    let hull = concave_hull(grid, 3)?;
    assert_eq!(
      hull.points(),
      &pts(&[
        (0., 3.),
        (1., 3.),
        (2., 3.),
        (3., 3.),
        (3., 2.),
        (3., 1.),
        (3., 0.),
        (2., 0.),
        (1., 0.),
        (0., 0.),
        (0., 1.),
        (0., 2.),
        (0., 3.),
      ])[..]
    );
    assert!(hull.contains(&Point::new([1., 1.])));
    assert!(hull.contains(&Point::new([2., 2.])));
    Ok(())
  }

  #[test]
  fn collinear() -> Result<(), Error> {
    let line: Vec<Point<f64>> = (0..6).map(|x| Point::new([f64::from(x), 0.])).collect();
    let hull = concave_hull(line, 3)?;
    assert_eq!(
      hull.points(),
      &pts(&[(0., 0.), (1., 0.), (2., 0.), (3., 0.), (4., 0.), (5., 0.), (0., 0.)])[..]
    );
    assert_eq!(hull.signed_area(), 0.);
    Ok(())
  }

  #[test]
  fn u_shape() -> Result<(), Error> {
    let u = pts(&[
      (0., 0.),
      (4., 0.),
      (4., 4.),
      (3., 4.),
      (3., 1.),
      (1., 1.),
      (1., 4.),
      (0., 4.),
      (2., 0.),
      (4., 2.),
      (0., 2.),
    ]);
    let hull = concave_hull(u, 3)?;
    assert_eq!(
      hull.points(),
      &pts(&[
        (4., 4.),
        (4., 2.),
        (4., 0.),
        (2., 0.),
        (0., 0.),
        (0., 2.),
        (0., 4.),
        (1., 4.),
        (3., 4.),
        (4., 4.),
      ])[..]
    );
    // The inner corners of the U are left inside.
    assert!(hull.contains(&Point::new([3., 1.])) && hull.contains(&Point::new([1., 1.])));
    Ok(())
  }

  #[test]
  fn single_precision() -> Result<(), Error> {
    let square: Vec<Point<f32>> = vec![(0., 0.), (0., 10.), (10., 10.), (10., 0.), (5., 5.)]
      .into_iter()
      .map(Point::from)
      .collect();
    let hull = concave_hull(square, 3)?;
    assert!(hull.is_closed());
    assert_eq!(hull.len(), 5);
    assert_eq!(hull.points()[0], Point::new([0f32, 10.]));
    Ok(())
  }

  #[test]
  fn attempt_limit() {
    let params = KnnParams::new(3).with_max_attempts(0);
    assert_eq!(concave_hull_with(cloud(), params), Err(Error::AttemptsExhausted));
    assert_ok!(concave_hull_with(cloud(), KnnParams::new(3).with_max_attempts(1)));
  }

  #[test]
  fn non_finite() {
    let mut input = cloud();
    input[4] = Point::new([f64::NAN, 0.]);
    assert_err!(concave_hull(input, 3));
  }

  #[test]
  fn error_messages() {
    assert_eq!(Error::InsufficientPoints.to_string(), "Insufficient points");
    assert_eq!(
      Error::NeighborCountTooLarge.to_string(),
      "Neighbour count is not smaller than the number of distinct points"
    );
    let boxed: Box<dyn std::error::Error> = Box::new(Error::AttemptsExhausted);
    assert_eq!(boxed.to_string(), "Attempt limit reached without a valid hull");
  }
}
