//! # PDF Report Module
//!
//! Generates the printable cut-list summary from a stair calculation using
//! Typst.
//!
//! ## Architecture
//!
//! - The Typst template is embedded as a string constant
//! - Data is injected via placeholder substitution before compilation
//! - The blueprint polygon is injected as a scaled Typst `polygon`
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use stair_core::calculations::stair::{compute, StairInput};
//! use stair_core::report::render_cut_list_pdf;
//!
//! let input = StairInput {
//!     label: "Deck stairs".to_string(),
//!     total_rise_in: 108.0,
//!     ..StairInput::default()
//! };
//! let result = compute(&input);
//!
//! let pdf_bytes = render_cut_list_pdf(&input, &result).unwrap();
//! std::fs::write("cut_list.pdf", pdf_bytes).unwrap();
//! ```

use chrono::Utc;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::blueprint::build_blueprint_path;
use crate::calculations::stair::{StairInput, StairResult};
use crate::errors::{CalcError, CalcResult};
use crate::format::{format_dimension, format_dimension_with_decimal};

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling documents without external files.
struct ReportWorld {
    /// The main source document
    main: Source,
    /// Font book
    book: LazyHash<FontBook>,
    /// Available fonts
    fonts: Vec<Font>,
    /// Library (standard functions)
    library: LazyHash<Library>,
}

impl ReportWorld {
    fn new(source: String) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        ReportWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    fn load_fonts() -> Vec<Font> {
        let mut fonts = Vec::new();

        // Bundled fonts from typst-assets cover text and math symbols
        for font_bytes in typst_assets::fonts() {
            let buffer = Bytes::new(font_bytes.to_vec());
            for font in Font::iter(buffer) {
                fonts.push(font);
            }
        }

        fonts
    }
}

impl World for ReportWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// Report Template
// ============================================================================

/// Typst template for the stringer cut-list report
const CUT_LIST_TEMPLATE: &str = r##"
#set page(
  paper: "us-letter",
  margin: (top: 1in, bottom: 1in, left: 1in, right: 1in),
  header: align(right)[
    #text(size: 9pt, fill: gray)[StairCut Stringer Calculator]
  ],
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr, 1fr),
      align(left)[#text(size: 9pt)[{{STAIR_LABEL}}]],
      align(center)[#text(size: 9pt)[Page #counter(page).display()]],
      align(right)[#text(size: 9pt)[{{DATE}}]],
    )
  ]
)

#set text(size: 11pt)

// Title Block
#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[Stair Stringer Cut List]
    #v(4pt)
    #text(size: 14pt)[{{STAIR_LABEL}}]
  ]
]

#v(12pt)

== Summary

#table(
  columns: (1fr, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right),
  table.header([*Parameter*], [*Value*]),
  [Total Rise], [{{TOTAL_RISE}}],
  [Total Run], [{{TOTAL_RUN}}],
  [Target Step Rise], [{{TARGET_RISE}}],
  [Target Step Run], [{{TARGET_RUN}}],
)

#v(12pt)

== Cut Details

#table(
  columns: (1fr, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right),
  table.header([*Dimension*], [*Value*]),
  [Number of Steps (Risers)], [{{NUM_STEPS}}],
  [Number of Treads], [{{NUM_TREADS}}],
  [Rise per Step], [{{RISE_PER_STEP}}],
  [Run per Step], [{{RUN_PER_STEP}}],
  [Step Hypotenuse], [{{STEP_HYP}}],
  [Stringer Length (approx.)], [{{STRINGER_LENGTH}}],
  [Cut Angle], [{{ANGLE_DEG}} deg],
)

#v(12pt)

== Speed Square Alignment

#table(
  columns: (1fr, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right),
  [Rise Setting (Tongue)], [{{SPEED_RISE}}],
  [Run Setting (Body)], [{{SPEED_RUN}}],
)

#v(12pt)

== Layout Marks

Tape-measure distances along the stringer edge, measured from the toe.

#table(
  columns: (auto, 1fr),
  inset: 8pt,
  stroke: 0.5pt,
  align: (right, right),
  table.header([*Step*], [*Mark*]),
{{LAYOUT_ROWS}}
)

#pagebreak()

== Stringer Blueprint

Scale: not 1:1. Verify all measurements before cutting.

#align(center)[
  #polygon(
    fill: rgb("#efe0cd"),
    stroke: 1pt + rgb("#8d6e63"),
{{POLYGON_POINTS}}
  )
]

#v(24pt)
#line(length: 100%, stroke: 0.5pt)
#v(8pt)

#text(size: 9pt, fill: gray)[
  Generated by StairCut \
  Field-verify rise and run before committing the first cut.
]
"##;

// ============================================================================
// Rendering
// ============================================================================

/// Render a stair calculation to a printable PDF cut list.
///
/// # Arguments
///
/// * `input` - The stair input parameters
/// * `result` - The calculation results for that input
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(CalcError)` - If Typst compilation or PDF export fails
pub fn render_cut_list_pdf(input: &StairInput, result: &StairResult) -> CalcResult<Vec<u8>> {
    let label = if input.label.is_empty() {
        "Stair Stringer".to_string()
    } else {
        input.label.clone()
    };

    let blueprint = build_blueprint_path(
        result.rise_per_step_in,
        result.run_per_step_in,
        result.number_of_steps,
        input.stringer_width_in,
    );

    let source = CUT_LIST_TEMPLATE
        .replace("{{STAIR_LABEL}}", &escape_typst(&label))
        .replace("{{DATE}}", &Utc::now().format("%Y-%m-%d").to_string())
        .replace("{{TOTAL_RISE}}", &format_dimension(result.total_rise_in))
        .replace("{{TOTAL_RUN}}", &format_dimension(result.total_run_in))
        .replace("{{TARGET_RISE}}", &format_dimension(input.target_step_rise_in))
        .replace("{{TARGET_RUN}}", &format_dimension(input.target_step_run_in))
        .replace("{{NUM_STEPS}}", &result.number_of_steps.to_string())
        .replace("{{NUM_TREADS}}", &result.number_of_treads.to_string())
        .replace(
            "{{RISE_PER_STEP}}",
            &format_dimension_with_decimal(result.rise_per_step_in),
        )
        .replace(
            "{{RUN_PER_STEP}}",
            &format_dimension_with_decimal(result.run_per_step_in),
        )
        .replace("{{STEP_HYP}}", &format_dimension_with_decimal(result.step_hypotenuse_in))
        .replace(
            "{{STRINGER_LENGTH}}",
            &format_dimension_with_decimal(result.stringer_length_in),
        )
        .replace("{{ANGLE_DEG}}", &format!("{:.2}", result.angle_degrees))
        .replace("{{SPEED_RISE}}", &format!("{:.3}\"", result.rise_per_step_in))
        .replace("{{SPEED_RUN}}", &format!("{:.3}\"", result.run_per_step_in))
        .replace("{{LAYOUT_ROWS}}", &build_layout_rows(result))
        .replace(
            "{{POLYGON_POINTS}}",
            &build_polygon_points(&blueprint.points, &blueprint.viewport),
        );

    // Compile the Typst document
    let world = ReportWorld::new(source);
    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::render_failed("compile", error_msgs.join("; "))
    })?;

    // Render to PDF
    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::render_failed("pdf", error_msgs.join("; "))
    })?;

    Ok(pdf_bytes)
}

/// Escape special Typst characters in user-provided text
fn escape_typst(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '*' => "\\*".to_string(),
            '_' => "\\_".to_string(),
            '#' => "\\#".to_string(),
            '$' => "\\$".to_string(),
            '@' => "\\@".to_string(),
            '<' => "\\<".to_string(),
            '>' => "\\>".to_string(),
            '\\' => "\\\\".to_string(),
            '`' => "\\`".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Build layout-mark table rows
fn build_layout_rows(result: &StairResult) -> String {
    result
        .layout_marks_in
        .iter()
        .enumerate()
        .map(|(i, mark)| format!("  [{}], [{}],", i + 1, format_dimension(*mark)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Scale the blueprint polygon into Typst points, fit to a 380pt drawing
/// width, and emit one `(xpt, ypt)` tuple per vertex.
fn build_polygon_points(
    points: &[crate::blueprint::Point],
    viewport: &crate::blueprint::Viewport,
) -> String {
    const DRAW_WIDTH_PT: f64 = 380.0;
    let scale = DRAW_WIDTH_PT / viewport.width.max(1.0);

    points
        .iter()
        .map(|p| {
            format!(
                "    ({:.2}pt, {:.2}pt),",
                (p.x - viewport.min_x) * scale,
                (p.y - viewport.min_y) * scale
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::stair::compute;

    fn sample() -> (StairInput, StairResult) {
        let input = StairInput {
            label: "Report Test".to_string(),
            total_rise_in: 108.0,
            ..StairInput::default()
        };
        let result = compute(&input);
        (input, result)
    }

    #[test]
    fn test_layout_rows() {
        let (_, result) = sample();
        let rows = build_layout_rows(&result);
        assert_eq!(rows.lines().count(), result.number_of_steps as usize);
        assert!(rows.starts_with("  [1], ["));
    }

    #[test]
    fn test_polygon_points_fit_drawing_width() {
        let blueprint = build_blueprint_path(7.714, 10.0, 14, 11.25);
        let rendered = build_polygon_points(&blueprint.points, &blueprint.viewport);
        assert_eq!(rendered.lines().count(), blueprint.points.len());
        assert!(rendered.contains("pt,"));
    }

    #[test]
    fn test_escape_typst() {
        assert_eq!(escape_typst("S-1 #north"), "S-1 \\#north");
        assert_eq!(escape_typst("plain"), "plain");
    }

    #[test]
    fn test_pdf_generation() {
        let (input, result) = sample();
        let pdf = render_cut_list_pdf(&input, &result);

        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());

        let pdf_bytes = pdf.unwrap();
        // PDF should start with %PDF
        assert!(pdf_bytes.starts_with(b"%PDF"), "Output is not a valid PDF");
        // Should be a reasonable size (at least 1KB)
        assert!(pdf_bytes.len() > 1000, "PDF seems too small");
    }
}
