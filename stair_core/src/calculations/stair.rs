//! # Standard Stair Calculation
//!
//! Computes a stringer cut layout from total rise, an optional fixed total
//! run, and the carpenter's target step proportions.
//!
//! ## Conventions
//!
//! - Rise is the hard constraint: the step count comes from dividing total
//!   rise by the target riser height, and the actual riser height is the
//!   total rise distributed evenly over that count. The target is never
//!   used verbatim for the riser.
//! - A total run of `0.0` means "flexible": the tread depth is taken from
//!   the target and the total run falls out of it. A positive total run is
//!   fixed and the tread depth is derived instead.
//! - `stringer_length_in` is the classic tape-measure estimate, step
//!   hypotenuse times step count. It slightly overestimates the true board
//!   diagonal; cut lists want the generous figure, so it stays.
//!
//! ## Example
//!
//! ```rust
//! use stair_core::calculations::stair::{compute, StairInput};
//!
//! let input = StairInput {
//!     label: "Deck stairs".to_string(),
//!     total_rise_in: 108.0,
//!     ..StairInput::default()
//! };
//!
//! let result = compute(&input);
//! assert_eq!(result.number_of_steps, 14);
//! assert_eq!(result.number_of_treads, 13);
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{Degrees, Radians};

/// Input parameters for a standard stair calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Basement stairs",
///   "total_rise_in": 108.0,
///   "total_run_in": 0.0,
///   "target_step_rise_in": 7.5,
///   "target_step_run_in": 10.0,
///   "tread_thickness_in": 1.0,
///   "riser_thickness_in": 0.75,
///   "stringer_width_in": 11.25
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StairInput {
    /// User label for this stair (e.g., "Deck stairs", "S-1")
    pub label: String,

    /// Floor-to-floor rise in inches
    pub total_rise_in: f64,

    /// Horizontal run in inches; 0.0 means flexible (computed from the
    /// target tread depth)
    pub total_run_in: f64,

    /// Preferred riser height in inches
    pub target_step_rise_in: f64,

    /// Preferred tread depth in inches
    pub target_step_run_in: f64,

    /// Tread board thickness in inches (carried through for downstream
    /// material allowances)
    pub tread_thickness_in: f64,

    /// Riser board thickness in inches (carried through)
    pub riser_thickness_in: f64,

    /// Actual stringer board width in inches (11.25 for a 2x12)
    pub stringer_width_in: f64,
}

impl Default for StairInput {
    fn default() -> Self {
        StairInput {
            label: String::new(),
            total_rise_in: 0.0,
            total_run_in: 0.0,
            target_step_rise_in: 7.5,
            target_step_run_in: 10.0,
            tread_thickness_in: 1.0,
            riser_thickness_in: 0.75,
            stringer_width_in: 11.25,
        }
    }
}

impl StairInput {
    /// Validate input ranges.
    ///
    /// Returns a list of human-readable messages, one per violation; an
    /// empty list means the input is acceptable. The calculation itself
    /// never fails, so callers are expected to check this before calling
    /// [`compute`] and surface the messages to the user.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.total_rise_in <= 0.0 {
            issues.push("Total rise must be greater than 0\"".to_string());
        } else if self.total_rise_in > 300.0 {
            issues.push("Total rise exceeds 300\" - split into multiple flights".to_string());
        }
        if self.total_run_in < 0.0 {
            issues.push("Total run cannot be negative (use 0 for flexible run)".to_string());
        }
        if !(4.0..=12.0).contains(&self.target_step_rise_in) {
            issues.push("Target step rise should be between 4\" and 12\"".to_string());
        }
        if !(7.0..=14.0).contains(&self.target_step_run_in) {
            issues.push("Target step run should be between 7\" and 14\"".to_string());
        }
        if !(5.0..=15.0).contains(&self.stringer_width_in) {
            issues.push("Stringer width should be between 5\" and 15\"".to_string());
        }
        if !(0.0..=5.0).contains(&self.tread_thickness_in) {
            issues.push("Tread thickness should be between 0\" and 5\"".to_string());
        }
        if !(0.0..=5.0).contains(&self.riser_thickness_in) {
            issues.push("Riser thickness should be between 0\" and 5\"".to_string());
        }

        issues
    }

    /// True when the total run is fixed rather than derived from the
    /// target tread depth.
    pub fn has_fixed_run(&self) -> bool {
        self.total_run_in > 0.0
    }
}

/// Results from a standard stair calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "number_of_steps": 14,
///   "number_of_treads": 13,
///   "rise_per_step_in": 7.714,
///   "run_per_step_in": 10.0,
///   "total_rise_in": 108.0,
///   "total_run_in": 130.0,
///   "stringer_length_in": 176.84,
///   "step_hypotenuse_in": 12.63,
///   "angle_radians": 0.657,
///   "angle_degrees": 37.65,
///   "layout_marks_in": [12.63, 25.26]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StairResult {
    /// Number of riser cuts (always at least 1)
    pub number_of_steps: u32,

    /// Number of treads, one fewer than the risers for a standard stair
    /// where the top floor is the last step
    pub number_of_treads: u32,

    /// Actual riser height in inches after distributing the rise evenly
    pub rise_per_step_in: f64,

    /// Actual tread depth in inches
    pub run_per_step_in: f64,

    /// Total rise in inches, echoed from the input
    pub total_rise_in: f64,

    /// Total run in inches, echoed (fixed mode) or computed (flexible mode)
    pub total_run_in: f64,

    /// Board length estimate: step hypotenuse times step count
    pub stringer_length_in: f64,

    /// Hypotenuse of one step triangle in inches
    pub step_hypotenuse_in: f64,

    /// Rake angle in radians, atan(rise/run)
    pub angle_radians: f64,

    /// Rake angle in degrees, for the saw gauge
    pub angle_degrees: f64,

    /// Cumulative tape-measure distances along the stringer edge, one mark
    /// per step, strictly increasing
    pub layout_marks_in: Vec<f64>,
}

/// Calculate the stringer cut layout.
///
/// Pure and infallible for finite numeric input; see
/// [`StairInput::validate`] for range checking. A degenerate step count of
/// zero is clamped to 1 so nothing downstream divides by zero.
///
/// # Example
///
/// ```rust
/// use stair_core::calculations::stair::{compute, StairInput};
///
/// let input = StairInput {
///     total_rise_in: 3.0,
///     total_run_in: 4.0,
///     target_step_rise_in: 3.0,
///     target_step_run_in: 4.0,
///     ..StairInput::default()
/// };
///
/// let result = compute(&input);
/// assert_eq!(result.step_hypotenuse_in, 5.0);
/// assert_eq!(result.layout_marks_in, vec![5.0]);
/// ```
pub fn compute(input: &StairInput) -> StairResult {
    // Rise is the hard constraint: pick the count closest to the target,
    // then distribute the rise evenly over it.
    let number_of_steps = ((input.total_rise_in / input.target_step_rise_in).round() as u32).max(1);

    let rise_per_step_in = input.total_rise_in / number_of_steps as f64;

    let run_per_step_in;
    let total_run_in;
    if input.has_fixed_run() {
        // Fixed run: N risers carry N-1 treads, so the run divides over
        // one fewer step. A single-step stair takes the whole run.
        run_per_step_in = if number_of_steps > 1 {
            input.total_run_in / (number_of_steps - 1) as f64
        } else {
            input.total_run_in
        };
        total_run_in = input.total_run_in;
    } else {
        // Flexible run: the target tread depth is used verbatim.
        run_per_step_in = input.target_step_run_in;
        total_run_in = run_per_step_in * (number_of_steps.saturating_sub(1)).max(1) as f64;
    }

    let step_hypotenuse_in = rise_per_step_in.hypot(run_per_step_in);

    // Tape-measure convention: N stacked step triangles, not the true
    // bounding-box diagonal. Overestimates slightly, which is what a cut
    // list wants.
    let stringer_length_in = step_hypotenuse_in * number_of_steps as f64;

    let angle = Radians((rise_per_step_in / run_per_step_in).atan());
    let angle_degrees: Degrees = angle.into();

    let layout_marks_in = (1..=number_of_steps)
        .map(|i| step_hypotenuse_in * i as f64)
        .collect();

    StairResult {
        number_of_steps,
        number_of_treads: number_of_steps - 1,
        rise_per_step_in,
        run_per_step_in,
        total_rise_in: input.total_rise_in,
        total_run_in,
        stringer_length_in,
        step_hypotenuse_in,
        angle_radians: angle.0,
        angle_degrees: angle_degrees.0,
        layout_marks_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn input(total_rise: f64, total_run: f64, target_rise: f64, target_run: f64) -> StairInput {
        StairInput {
            label: "Test".to_string(),
            total_rise_in: total_rise,
            total_run_in: total_run,
            target_step_rise_in: target_rise,
            target_step_run_in: target_run,
            ..StairInput::default()
        }
    }

    #[test]
    fn test_flexible_run() {
        // 108" rise at a 7.5" target: 108 / 7.5 = 14.4 -> 14 steps
        let result = compute(&input(108.0, 0.0, 7.5, 10.0));

        assert_eq!(result.number_of_steps, 14);
        assert!((result.rise_per_step_in - 7.714).abs() < 0.001);
        assert_eq!(result.number_of_treads, 13);
        // Flexible run: 10 * 13 treads = 130
        assert!((result.total_run_in - 130.0).abs() < EPS);
    }

    #[test]
    fn test_fixed_run() {
        // Fixed 140" run over 13 treads: 140 / 13 = 10.769
        let result = compute(&input(108.0, 140.0, 7.5, 10.0));

        assert_eq!(result.number_of_steps, 14);
        assert!((result.run_per_step_in - 10.769).abs() < 0.001);
        assert!((result.total_run_in - 140.0).abs() < EPS);
    }

    #[test]
    fn test_rise_distributes_exactly() {
        let result = compute(&input(108.0, 0.0, 7.5, 10.0));
        assert!(
            (result.rise_per_step_in * result.number_of_steps as f64 - 108.0).abs() < EPS,
            "per-step rise times count must reproduce the total rise"
        );
    }

    #[test]
    fn test_angle_three_four_five() {
        // Single step, 3-4-5 triangle scaled x10: atan(3/4) = 36.87 deg
        let result = compute(&input(30.0, 40.0, 30.0, 40.0));
        assert_eq!(result.number_of_steps, 1);
        assert!((result.angle_degrees - 36.87).abs() < 0.005);
        assert!((result.angle_radians - 0.6435011).abs() < 1e-6);
    }

    #[test]
    fn test_single_step_takes_whole_run() {
        let result = compute(&input(30.0, 40.0, 30.0, 40.0));
        assert!((result.run_per_step_in - 40.0).abs() < EPS);
        assert_eq!(result.number_of_treads, 0);
    }

    #[test]
    fn test_layout_marks() {
        // 3-4-5 triangle: hypotenuse 5, one mark
        let result = compute(&input(3.0, 4.0, 3.0, 4.0));
        assert_eq!(result.step_hypotenuse_in, 5.0);
        assert_eq!(result.layout_marks_in, vec![5.0]);

        // Two steps: marks at 5 and 10
        let result2 = compute(&input(6.0, 4.0, 3.0, 4.0));
        assert_eq!(result2.number_of_steps, 2);
        assert_eq!(result2.step_hypotenuse_in, 5.0);
        assert_eq!(result2.layout_marks_in, vec![5.0, 10.0]);
    }

    #[test]
    fn test_layout_marks_strictly_increasing() {
        let result = compute(&input(108.0, 0.0, 7.5, 10.0));
        assert_eq!(result.layout_marks_in.len(), result.number_of_steps as usize);
        for pair in result.layout_marks_in.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        // mark[i] = hypotenuse * (i+1)
        for (i, mark) in result.layout_marks_in.iter().enumerate() {
            assert!((mark - result.step_hypotenuse_in * (i + 1) as f64).abs() < EPS);
        }
    }

    #[test]
    fn test_stringer_length_convention() {
        let result = compute(&input(6.0, 4.0, 3.0, 4.0));
        assert!((result.stringer_length_in - 10.0).abs() < EPS);
    }

    #[test]
    fn test_tiny_rise_clamps_to_one_step() {
        // 1" rise against a 7.5" target rounds to 0 steps; clamp to 1
        let result = compute(&input(1.0, 0.0, 7.5, 10.0));
        assert_eq!(result.number_of_steps, 1);
        assert!((result.rise_per_step_in - 1.0).abs() < EPS);
        // Flexible single-step run still spans one tread depth
        assert!((result.total_run_in - 10.0).abs() < EPS);
    }

    #[test]
    fn test_validate_accepts_reasonable_input() {
        let input = input(108.0, 0.0, 7.5, 10.0);
        assert!(input.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_all_violations() {
        let bad = StairInput {
            label: String::new(),
            total_rise_in: -1.0,
            total_run_in: -2.0,
            target_step_rise_in: 3.0,
            target_step_run_in: 20.0,
            tread_thickness_in: 6.0,
            riser_thickness_in: -0.5,
            stringer_width_in: 2.0,
        };
        let issues = bad.validate();
        // Every violation is reported, not just the first
        assert_eq!(issues.len(), 7);
        assert!(issues.iter().all(|m| !m.is_empty()));
    }

    #[test]
    fn test_validate_rise_upper_bound() {
        let mut i = input(301.0, 0.0, 7.5, 10.0);
        assert_eq!(i.validate().len(), 1);
        i.total_rise_in = 300.0;
        assert!(i.validate().is_empty());
    }

    #[test]
    fn test_serialization() {
        let input = input(108.0, 140.0, 7.5, 10.0);
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: StairInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.total_rise_in, roundtrip.total_rise_in);
        assert_eq!(input.total_run_in, roundtrip.total_run_in);

        let result = compute(&input);
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: StairResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.number_of_steps, roundtrip.number_of_steps);
        assert_eq!(result.layout_marks_in, roundtrip.layout_marks_in);
    }
}
