use crate::foundation::core::Point;
use crate::foundation::error::{FlagError, FlagResult};

/// User-authored flags: parallel `points` / `directions` arrays.
///
/// `directions[i]` is a second point on the line through `points[i]`, not a direction vector.
/// Both arrays always have the same length (`count`), bounded by `max_flags`.
#[derive(Clone, Debug, PartialEq)]
pub struct FlagSet {
    points: Vec<Point>,
    directions: Vec<Point>,
    max_flags: usize,
}

impl FlagSet {
    /// Create an empty set accepting at most `max_flags` flags.
    pub fn new(max_flags: usize) -> Self {
        Self {
            points: Vec::with_capacity(max_flags),
            directions: Vec::with_capacity(max_flags),
            max_flags,
        }
    }

    /// Number of committed flags.
    pub fn count(&self) -> usize {
        self.points.len()
    }

    /// Return `true` when no flag is committed.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Configured upper bound.
    pub fn max_flags(&self) -> usize {
        self.max_flags
    }

    /// Return `true` when another commit would exceed the limit.
    pub fn is_full(&self) -> bool {
        self.count() >= self.max_flags
    }

    /// Flag points in commit order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Direction points, parallel to [`FlagSet::points`].
    pub fn directions(&self) -> &[Point] {
        &self.directions
    }

    /// Iterate `(point, direction)` pairs.
    pub fn flags(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.iter().copied().zip(self.directions.iter().copied())
    }

    /// Commit one flag and return the new count.
    ///
    /// Nothing is appended when the set is already full.
    pub fn push(&mut self, point: Point, direction: Point) -> FlagResult<usize> {
        if self.is_full() {
            return Err(FlagError::FlagLimit {
                max: self.max_flags,
            });
        }
        self.points.push(point);
        self.directions.push(direction);
        Ok(self.count())
    }

    /// Drop every committed flag.
    pub fn clear(&mut self) {
        self.points.clear();
        self.directions.clear();
    }

    /// Replace coordinates with a transformation frame's points, keeping `count`.
    ///
    /// The frame's secondary points serve as direction points from here on.
    pub fn adopt(&mut self, primary: &[Point], secondary: &[Point]) -> FlagResult<()> {
        let n = self.count();
        if primary.len() != n || secondary.len() != n {
            return Err(FlagError::cache(format!(
                "frame has {} primary / {} secondary points for {n} flags",
                primary.len(),
                secondary.len()
            )));
        }
        self.points.copy_from_slice(primary);
        self.directions.copy_from_slice(secondary);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/flags/model.rs"]
mod tests;
