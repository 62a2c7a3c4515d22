/// Asserts the rounded position of a flock.
#[macro_export]
macro_rules! assert_position {
    ($flock:expr, $x:expr, $y:expr) => {
        assert_eq!(
            ($flock.position_x(), $flock.position_y()),
            ($x, $y),
            "Flock position mismatch"
        );
    };
}

/// Asserts that every member of the flock faces the given direction.
#[macro_export]
macro_rules! assert_all_facing {
    ($flock:expr, $dir:expr) => {
        for (i, duck) in $flock.members().iter().enumerate() {
            assert_eq!(
                duck.direction,
                Some($dir),
                "Duck {} faces {:?}, expected {:?}",
                i,
                duck.direction,
                $dir
            );
        }
    };
}
