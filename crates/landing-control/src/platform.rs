use serde::{Deserialize, Serialize};

/// An integer rectangle on the surveillance grid, inclusive on all four edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x_start: i32,
    pub y_start: i32,
    pub x_end: i32,
    pub y_end: i32,
}

impl Rect {
    /// Whether a point lies inside the rect. Both edges are inclusive, so a
    /// platform of size N covers (N+1) x (N+1) cells.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x_start && x <= self.x_end && y >= self.y_start && y <= self.y_end
    }
}

/// The overall surveillance area. Fixed; used only to validate platform size.
pub const AREA: Rect = Rect {
    x_start: 0,
    y_start: 0,
    x_end: 100,
    y_end: 100,
};

/// Fixed start corner of the landing platform within the area.
pub const PLATFORM_START: (i32, i32) = (5, 5);

/// Construction-time validation failure for the platform rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// Requested platform size was negative.
    NegativeSize(i32),
    /// Platform would extend past the surveillance area on the X or Y axis.
    OutOfBounds { size: i32, limit: i32 },
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeSize(size) => write!(f, "platform size cannot be negative: {size}"),
            Self::OutOfBounds { size, limit } => {
                write!(f, "platform size {size} out of bounds on X or Y (area ends at {limit})")
            },
        }
    }
}

impl std::error::Error for PlatformError {}

/// Compute the platform rect for a requested edge length, validated against
/// the fixed area bounds.
pub fn platform_rect(size: i32) -> Result<Rect, PlatformError> {
    if size < 0 {
        return Err(PlatformError::NegativeSize(size));
    }

    let (x_start, y_start) = PLATFORM_START;
    if x_start + size > AREA.x_end || y_start + size > AREA.y_end {
        return Err(PlatformError::OutOfBounds {
            size,
            limit: AREA.x_end,
        });
    }

    Ok(Rect {
        x_start,
        y_start,
        x_end: x_start + size,
        y_end: y_start + size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_size_platform_rect() {
        let rect = platform_rect(10).expect("size 10 fits the area");
        assert_eq!(
            rect,
            Rect {
                x_start: 5,
                y_start: 5,
                x_end: 15,
                y_end: 15
            }
        );
    }

    #[test]
    fn negative_size_rejected() {
        for size in [-10, -20, -1] {
            assert_eq!(
                platform_rect(size),
                Err(PlatformError::NegativeSize(size)),
                "size {size} should be rejected as negative"
            );
        }
    }

    #[test]
    fn oversized_platform_rejected() {
        for size in [96, 100, 120] {
            assert_eq!(
                platform_rect(size),
                Err(PlatformError::OutOfBounds { size, limit: 100 }),
                "size {size} should exceed the area (start corner is at 5)"
            );
        }
    }

    #[test]
    fn largest_fitting_platform_accepted() {
        // 5 + 95 = 100, exactly on the area edge
        let rect = platform_rect(95).expect("size 95 fits the area exactly");
        assert_eq!(rect.x_end, 100);
        assert_eq!(rect.y_end, 100);
    }

    #[test]
    fn contains_is_inclusive_on_all_edges() {
        let rect = platform_rect(10).expect("size 10 fits the area");
        for (x, y) in [(5, 5), (15, 15), (5, 15), (15, 5), (10, 10)] {
            assert!(rect.contains(x, y), "({x}, {y}) should be on the platform");
        }
        for (x, y) in [(4, 5), (5, 4), (16, 15), (15, 16), (0, 0), (100, 100)] {
            assert!(!rect.contains(x, y), "({x}, {y}) should be off the platform");
        }
    }

    #[test]
    fn error_messages_name_the_failure() {
        let err = platform_rect(-3).expect_err("negative size must fail");
        assert!(err.to_string().contains("negative"));
        let err = platform_rect(100).expect_err("oversized platform must fail");
        assert!(err.to_string().contains("out of bounds"));
    }
}
