//! # Multi-Stringer Job Calculation
//!
//! Job-level variant of the stair calculator. Where [`super::stair`] works
//! from target step proportions, this one works the way a deck builder lays
//! out a job: a maximum riser height (code limit), a fixed tread depth,
//! landing-thickness adjustment at the top, kerf allowance on the blank,
//! and centerline spacing for several stringers across the stair width.
//!
//! The two calculators are deliberately separate policies, selected by the
//! caller, not merged into one parameterized function.
//!
//! ## Top-tread handling
//!
//! [`TopTreadMode`] controls what happens at the top of the flight:
//!
//! - `ExcludeLanding`: the landing surface is the top "tread", so its
//!   thickness is subtracted from the rise before steps are laid out and
//!   the stringer carries one fewer tread than risers.
//! - `IncludeTopTread`: the stringer carries a tread at the top step, the
//!   full rise is used, and tread count equals riser count.

use serde::{Deserialize, Serialize};

/// Overall stair width assumed when spacing stringer centerlines, inches.
pub const ASSUMED_STAIR_WIDTH_IN: f64 = 36.0;

/// Most stringers a single flight is ever cut with; spacing math clamps to
/// this rather than rejecting the input.
pub const MAX_STRINGERS: u32 = 12;

/// How the top step of the flight is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopTreadMode {
    /// The landing is the top walking surface; its thickness comes out of
    /// the rise and treads = risers - 1
    ExcludeLanding,
    /// The stringer carries a tread at the top; treads = risers
    IncludeTopTread,
}

impl Default for TopTreadMode {
    fn default() -> Self {
        TopTreadMode::ExcludeLanding
    }
}

/// Input parameters for a multi-stringer job.
///
/// ## JSON Example
///
/// ```json
/// {
///   "total_rise_in": 108.0,
///   "tread_depth_in": 10.0,
///   "max_riser_in": 7.75,
///   "stringer_count": 3,
///   "tread_thickness_in": 1.0,
///   "top_landing_thickness_in": 1.0,
///   "nosing_in": 1.0,
///   "kerf_in": 0.125,
///   "top_tread_mode": "ExcludeLanding"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringerJobInput {
    /// Floor-to-floor rise in inches
    pub total_rise_in: f64,

    /// Tread depth (cut run per step) in inches
    pub tread_depth_in: f64,

    /// Maximum allowed riser height in inches (7.75 is the common code limit)
    pub max_riser_in: f64,

    /// How many stringers to cut and space across the stair
    pub stringer_count: u32,

    /// Tread board thickness in inches
    pub tread_thickness_in: f64,

    /// Thickness of the landing surface at the top, in inches
    pub top_landing_thickness_in: f64,

    /// Tread overhang beyond the riser face below it, in inches
    pub nosing_in: f64,

    /// Saw blade width lost per cut, in inches
    pub kerf_in: f64,

    /// Top-of-flight policy
    pub top_tread_mode: TopTreadMode,
}

impl Default for StringerJobInput {
    fn default() -> Self {
        StringerJobInput {
            total_rise_in: 108.0,
            tread_depth_in: 10.0,
            max_riser_in: 7.75,
            stringer_count: 3,
            tread_thickness_in: 1.0,
            top_landing_thickness_in: 1.0,
            nosing_in: 1.0,
            kerf_in: 0.125,
            top_tread_mode: TopTreadMode::ExcludeLanding,
        }
    }
}

impl StringerJobInput {
    /// Validate input ranges, returning human-readable messages.
    ///
    /// An empty list means the input is acceptable. [`compute_job`] itself
    /// never fails; out-of-range stringer counts are clamped rather than
    /// rejected, but still reported here so the caller can warn.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.total_rise_in <= 0.0 {
            issues.push("Total rise must be greater than 0\"".to_string());
        } else if self.total_rise_in > 300.0 {
            issues.push("Total rise exceeds 300\" - split into multiple flights".to_string());
        }
        if !(7.0..=14.0).contains(&self.tread_depth_in) {
            issues.push("Tread depth should be between 7\" and 14\"".to_string());
        }
        if !(4.0..=12.0).contains(&self.max_riser_in) {
            issues.push("Maximum riser should be between 4\" and 12\"".to_string());
        }
        if self.stringer_count < 1 || self.stringer_count > MAX_STRINGERS {
            issues.push(format!(
                "Stringer count should be between 1 and {}",
                MAX_STRINGERS
            ));
        }
        if !(0.0..=5.0).contains(&self.tread_thickness_in) {
            issues.push("Tread thickness should be between 0\" and 5\"".to_string());
        }
        if !(0.0..=5.0).contains(&self.top_landing_thickness_in) {
            issues.push("Top landing thickness should be between 0\" and 5\"".to_string());
        }
        if self.nosing_in < 0.0 {
            issues.push("Nosing cannot be negative".to_string());
        }
        if self.kerf_in < 0.0 {
            issues.push("Kerf cannot be negative".to_string());
        }

        issues
    }
}

/// Results from a multi-stringer job calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringerJobResult {
    /// Rise actually divided into steps, after any landing adjustment.
    /// Floored at 0.001 so a degenerate rise cannot zero the math.
    pub effective_rise_in: f64,

    /// Number of riser cuts (always at least 1)
    pub risers: u32,

    /// Number of tread cuts, per [`TopTreadMode`]
    pub treads: u32,

    /// Finished riser height in inches
    pub finished_riser_in: f64,

    /// Horizontal run of the cut stringer: tread depth times tread count
    pub total_run_cut_in: f64,

    /// Walking-surface run including nosing overhang on each tread
    pub total_run_finished_in: f64,

    /// True rake-line length of the stringer: hypot of cut run and
    /// effective rise
    pub stringer_length_in: f64,

    /// Hypotenuse of a single step triangle
    pub step_hypotenuse_in: f64,

    /// Plumb cut height at both ends of the layout (equals the finished
    /// riser)
    pub plumb_cut_in: f64,

    /// Seat cut depth (equals the tread depth)
    pub seat_cut_in: f64,

    /// Board length to buy: stringer length plus a kerf at each end
    pub blank_length_required_in: f64,

    /// Stringer count actually used after clamping to 1..=MAX_STRINGERS
    pub stringer_count: u32,

    /// Centerline offsets in inches across the assumed stair width, one per
    /// stringer, starting at 0 (a single stringer sits centered)
    pub spacing_in: Vec<f64>,
}

/// Calculate the multi-stringer job layout.
///
/// Pure and infallible for finite numeric input. The stringer count is
/// clamped to `1..=MAX_STRINGERS` rather than rejected.
///
/// # Example
///
/// ```rust
/// use stair_core::calculations::multi_stringer::{compute_job, StringerJobInput};
///
/// let input = StringerJobInput {
///     stringer_count: 4,
///     ..StringerJobInput::default()
/// };
///
/// let result = compute_job(&input);
/// assert_eq!(result.spacing_in, vec![0.0, 12.0, 24.0, 36.0]);
/// ```
pub fn compute_job(input: &StringerJobInput) -> StringerJobResult {
    // In ExcludeLanding mode the landing surface is the top step, so its
    // thickness comes out of the rise before steps are laid out.
    let landing_deduction = match input.top_tread_mode {
        TopTreadMode::ExcludeLanding => input.top_landing_thickness_in,
        TopTreadMode::IncludeTopTread => 0.0,
    };
    let effective_rise_in = (input.total_rise_in - landing_deduction).max(0.001);

    // Ceiling division against the code-limit riser: one more riser beats
    // one too tall.
    let risers = ((effective_rise_in / input.max_riser_in).ceil() as u32).max(1);
    let finished_riser_in = effective_rise_in / risers as f64;

    let treads = match input.top_tread_mode {
        TopTreadMode::IncludeTopTread => risers,
        TopTreadMode::ExcludeLanding => risers.saturating_sub(1),
    };

    let total_run_cut_in = input.tread_depth_in * treads as f64;
    let total_run_finished_in = total_run_cut_in + input.nosing_in * treads as f64;

    let stringer_length_in = total_run_cut_in.hypot(effective_rise_in);
    let step_hypotenuse_in = input.tread_depth_in.hypot(finished_riser_in);
    let blank_length_required_in = stringer_length_in + input.kerf_in * 2.0;

    let stringer_count = input.stringer_count.clamp(1, MAX_STRINGERS);
    let spacing_in = if stringer_count >= 2 {
        let step = ASSUMED_STAIR_WIDTH_IN / (stringer_count - 1) as f64;
        (0..stringer_count).map(|k| k as f64 * step).collect()
    } else {
        vec![ASSUMED_STAIR_WIDTH_IN / 2.0]
    };

    StringerJobResult {
        effective_rise_in,
        risers,
        treads,
        finished_riser_in,
        total_run_cut_in,
        total_run_finished_in,
        stringer_length_in,
        step_hypotenuse_in,
        plumb_cut_in: finished_riser_in,
        seat_cut_in: input.tread_depth_in,
        blank_length_required_in,
        stringer_count,
        spacing_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_landing_thickness_subtracted() {
        let input = StringerJobInput {
            total_rise_in: 110.0,
            top_landing_thickness_in: 1.5,
            top_tread_mode: TopTreadMode::ExcludeLanding,
            ..StringerJobInput::default()
        };

        let result = compute_job(&input);
        assert!((result.effective_rise_in - 108.5).abs() < EPS);
        assert_eq!(result.treads, result.risers - 1);
    }

    #[test]
    fn test_top_tread_counted() {
        let input = StringerJobInput {
            total_rise_in: 96.0,
            top_landing_thickness_in: 0.75,
            tread_depth_in: 10.25,
            top_tread_mode: TopTreadMode::IncludeTopTread,
            ..StringerJobInput::default()
        };

        let result = compute_job(&input);
        // Full rise used, no landing deduction
        assert!((result.effective_rise_in - 96.0).abs() < EPS);
        assert_eq!(result.treads, result.risers);
        assert!((result.total_run_cut_in - input.tread_depth_in * result.treads as f64).abs() < EPS);
    }

    #[test]
    fn test_blank_length_includes_kerf() {
        let input = StringerJobInput {
            kerf_in: 0.1875,
            tread_depth_in: 9.5,
            total_rise_in: 104.0,
            ..StringerJobInput::default()
        };

        let result = compute_job(&input);
        assert!(
            (result.blank_length_required_in - (result.stringer_length_in + 0.375)).abs() < EPS
        );
    }

    #[test]
    fn test_spacing_four_stringers() {
        let input = StringerJobInput {
            stringer_count: 4,
            ..StringerJobInput::default()
        };

        let result = compute_job(&input);
        assert_eq!(result.spacing_in, vec![0.0, 12.0, 24.0, 36.0]);
    }

    #[test]
    fn test_single_stringer_is_centered() {
        let input = StringerJobInput {
            stringer_count: 1,
            ..StringerJobInput::default()
        };

        let result = compute_job(&input);
        assert_eq!(result.spacing_in, vec![18.0]);
    }

    #[test]
    fn test_stringer_count_clamped() {
        let input = StringerJobInput {
            stringer_count: 40,
            ..StringerJobInput::default()
        };

        assert!(!input.validate().is_empty());
        let result = compute_job(&input);
        assert_eq!(result.stringer_count, MAX_STRINGERS);
        assert_eq!(result.spacing_in.len(), MAX_STRINGERS as usize);
    }

    #[test]
    fn test_riser_never_exceeds_max() {
        let input = StringerJobInput::default();
        let result = compute_job(&input);
        assert!(result.finished_riser_in <= input.max_riser_in + EPS);
        assert!(result.risers >= 1);
    }

    #[test]
    fn test_degenerate_rise_floors_at_epsilon() {
        let input = StringerJobInput {
            total_rise_in: 0.5,
            top_landing_thickness_in: 1.0,
            ..StringerJobInput::default()
        };

        let result = compute_job(&input);
        assert!((result.effective_rise_in - 0.001).abs() < 1e-9);
        assert_eq!(result.risers, 1);
    }

    #[test]
    fn test_plumb_and_seat_cuts() {
        let result = compute_job(&StringerJobInput::default());
        assert_eq!(result.plumb_cut_in, result.finished_riser_in);
        assert_eq!(result.seat_cut_in, 10.0);
    }

    #[test]
    fn test_serialization() {
        let input = StringerJobInput::default();
        let json = serde_json::to_string_pretty(&input).unwrap();
        assert!(json.contains("ExcludeLanding"));

        let roundtrip: StringerJobInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.top_tread_mode, roundtrip.top_tread_mode);
        assert_eq!(input.stringer_count, roundtrip.stringer_count);
    }
}
