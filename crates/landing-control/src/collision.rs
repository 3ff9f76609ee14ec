use crate::Coordinate;

/// The 9-cell collision matrix around a reference coordinate: the cell itself
/// plus its 8 Chebyshev-adjacent neighbors (collision radius 1).
pub fn collision_matrix(center: Coordinate) -> [Coordinate; 9] {
    let Coordinate { x, y } = center;
    [
        Coordinate { x, y },
        Coordinate { x: x - 1, y },
        Coordinate { x: x - 1, y: y - 1 },
        Coordinate { x, y: y - 1 },
        Coordinate { x: x + 1, y: y - 1 },
        Coordinate { x: x + 1, y },
        Coordinate { x: x + 1, y: y + 1 },
        Coordinate { x, y: y + 1 },
        Coordinate { x: x - 1, y: y + 1 },
    ]
}

/// Whether a touchdown attempt falls inside a collision matrix.
pub fn is_colliding(matrix: &[Coordinate; 9], attempt: Coordinate) -> bool {
    matrix.contains(&attempt)
}
