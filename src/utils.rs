#[macro_export]
macro_rules! assert_float_eq {
  ($l : expr, $r : expr) => {
    $crate::assert_float_eq!($l, $r, 1e-9)
  };
  ($l : expr, $r : expr, $tol : expr) => {
    assert!(
      (($l) - ($r)).abs() < $tol,
      "{} != {} (tolerance {})",
      $l,
      $r,
      $tol
    );
  };
}

#[macro_export]
macro_rules! assert_vec_eq {
  ($l : expr, $r : expr) => {
    $crate::assert_vec_eq!($l, $r, 1e-9)
  };
  ($l : expr, $r : expr, $tol : expr) => {
    assert!(
      (($l) - ($r)).norm() < $tol,
      "{:?} != {:?} (tolerance {})",
      $l,
      $r,
      $tol
    );
  };
}
