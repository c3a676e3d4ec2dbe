//! Horizontal line generation within Y buckets.

use rayon::prelude::*;

use super::Execution;
use super::grouping::YBuckets;
use crate::core::{Line, Point};

/// Every unordered pair of points in one X-sorted row.
///
/// Produces `k * (k - 1) / 2` lines, each already left-to-right.
pub fn row_lines(row: &[Point]) -> Vec<Line> {
    let k = row.len();
    let mut lines = Vec::with_capacity(k * k.saturating_sub(1) / 2);
    for (i, &left) in row.iter().enumerate() {
        for &right in &row[i + 1..] {
            lines.push(Line::new(left, right));
        }
    }
    lines
}

/// Generate every horizontal line in every bucket with at least two points.
///
/// One task per bucket; each task builds its own list and the lists are
/// concatenated after all tasks finish. Output order is unspecified.
pub fn generate_lines(buckets: &YBuckets, execution: Execution) -> Vec<Line> {
    let rows: Vec<&[Point]> = buckets
        .values()
        .map(Vec::as_slice)
        .filter(|row| row.len() >= 2)
        .collect();

    let per_row: Vec<Vec<Line>> = match execution {
        Execution::Parallel => rows.par_iter().map(|&row| row_lines(row)).collect(),
        Execution::Sequential => rows.iter().map(|&row| row_lines(row)).collect(),
    };

    per_row.concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::grouping::group_by_y;

    #[test]
    fn test_row_lines_pairs() {
        let row = vec![Point::new(0, 2), Point::new(1, 2), Point::new(5, 2)];
        let lines = row_lines(&row);

        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.is_horizontal()));
        assert!(lines.iter().all(|l| l.start().x < l.end().x));
        assert!(lines.contains(&Line::new(Point::new(5, 2), Point::new(0, 2))));
    }

    #[test]
    fn test_row_lines_short_rows() {
        assert!(row_lines(&[]).is_empty());
        assert!(row_lines(&[Point::new(0, 0)]).is_empty());
    }

    #[test]
    fn test_generate_lines_counts() {
        // Row y=0 has 4 points (6 lines), y=1 has 3 (3 lines), y=2 has 1 (none)
        let points = vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(3, 0),
            Point::new(0, 1),
            Point::new(4, 1),
            Point::new(8, 1),
            Point::new(9, 2),
        ];
        let buckets = group_by_y(&points);

        for execution in [Execution::Parallel, Execution::Sequential] {
            let lines = generate_lines(&buckets, execution);
            assert_eq!(lines.len(), 9);
            assert_eq!(lines.iter().filter(|l| l.start().y == 0).count(), 6);
            assert_eq!(lines.iter().filter(|l| l.start().y == 2).count(), 0);
        }
    }

    #[test]
    fn test_generate_lines_empty() {
        assert!(generate_lines(&YBuckets::new(), Execution::Parallel).is_empty());
    }
}
