/// Fresh yeast (% of poolish flour) by maturation time in hours.
/// Ordered by hours; 3h is interpolated between its neighbours.
pub const POOLISH_YEAST_TABLE: [(u32, f64); 18] = [
    (1, 2.0),
    (2, 1.0),
    (3, 0.75),
    (4, 0.5),
    (5, 0.5),
    (6, 0.3),
    (7, 0.3),
    (8, 0.1),
    (9, 0.1),
    (10, 0.05),
    (11, 0.05),
    (12, 0.05),
    (13, 0.03),
    (14, 0.03),
    (15, 0.01),
    (16, 0.01),
    (17, 0.01),
    (18, 0.01),
];

/// Yeast percent for the table entry nearest to `hours`.
/// On equal distance the lower key wins.
pub fn poolish_yeast_percent(hours: f64) -> f64 {
    let mut best = POOLISH_YEAST_TABLE[0];
    for &(h, pct) in &POOLISH_YEAST_TABLE[1..] {
        if (h as f64 - hours).abs() < (best.0 as f64 - hours).abs() {
            best = (h, pct);
        }
    }
    best.1
}
