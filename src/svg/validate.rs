//! Structural SVG validation.
//!
//! Errors block the add/process pipeline; warnings are advisory only and
//! never affect validity. Stroke-width collection and fill/stroke presence
//! checks walk the full element tree, not just the root.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Structured validation outcome
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Raw viewBox attribute for display
    pub view_box: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// First stroke width found, for display only
    pub stroke_width: Option<f64>,
}

impl ValidationReport {
    /// Valid means no errors; warnings never affect validity
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Everything collected in one pass over the element tree
#[derive(Debug, Default)]
struct Survey {
    root_seen: bool,
    view_box: Option<String>,
    has_xmlns: bool,
    has_root_role: bool,
    has_root_aria_label: bool,
    stroke_widths: Vec<f64>,
    has_fill: bool,
    has_stroke: bool,
    has_script: bool,
    has_style: bool,
    has_image: bool,
    has_text: bool,
}

/// Validate SVG text against the icon standards.
///
/// A parse failure (malformed XML) yields a single error and empty warnings
/// rather than propagating.
pub fn validate(svg: &str) -> ValidationReport {
    let survey = match survey_tree(svg) {
        Ok(survey) => survey,
        Err(e) => {
            return ValidationReport {
                errors: vec![format!("failed to parse SVG: {e}")],
                ..Default::default()
            };
        }
    };

    let mut report = ValidationReport::default();

    if !survey.root_seen {
        report.errors.push("invalid SVG structure".to_string());
        return report;
    }

    // viewBox: presence, arity, squareness, size band
    match &survey.view_box {
        None => report
            .errors
            .push("SVG must have a viewBox attribute".to_string()),
        Some(raw) => {
            report.view_box = Some(raw.clone());
            match crate::svg::normalize::parse_view_box(raw) {
                Err(_) => report
                    .errors
                    .push("viewBox must have 4 numeric values (x, y, width, height)".to_string()),
                Ok([_, _, width, height]) => {
                    report.width = Some(width);
                    report.height = Some(height);
                    if width != height {
                        report
                            .warnings
                            .push("viewBox should be square for consistent icon sizing".to_string());
                    }
                    if !(16.0..=512.0).contains(&width) {
                        report.warnings.push(
                            "viewBox size should be between 16 and 512 for optimal performance"
                                .to_string(),
                        );
                    }
                }
            }
        }
    }

    if !survey.has_xmlns {
        report
            .errors
            .push("SVG must have an xmlns attribute".to_string());
    }

    // Stroke width consistency across the whole tree
    if let Some(&first) = survey.stroke_widths.first() {
        report.stroke_width = Some(first);
        let mut unique = survey.stroke_widths.clone();
        unique.sort_by(|a, b| a.total_cmp(b));
        unique.dedup();
        if unique.len() > 1 {
            report.warnings.push(
                "inconsistent stroke widths found, consider using 2px for consistency".to_string(),
            );
        }
        if unique.iter().any(|&w| !(1.0..=4.0).contains(&w)) {
            report.warnings.push(
                "stroke width should be between 1px and 4px for optimal display".to_string(),
            );
        }
    }

    if !survey.has_fill && !survey.has_stroke {
        report
            .warnings
            .push("SVG should have either fill or stroke attributes".to_string());
    }

    if !survey.has_root_role && !survey.has_root_aria_label {
        report.warnings.push(
            "consider adding role=\"img\" and aria-label for accessibility".to_string(),
        );
    }

    if survey.has_script {
        report
            .errors
            .push("SVG must not contain script elements for security".to_string());
    }
    if survey.has_style {
        report.warnings.push(
            "consider using attributes instead of style elements for better performance"
                .to_string(),
        );
    }
    if survey.has_image {
        report.warnings.push(
            "consider converting embedded images to SVG paths for better scalability".to_string(),
        );
    }
    if survey.has_text {
        report
            .warnings
            .push("text elements may not scale well, consider converting to paths".to_string());
    }

    report
}

/// Depth-first event walk collecting everything the rules need
fn survey_tree(svg: &str) -> Result<Survey, quick_xml::Error> {
    let mut reader = Reader::from_str(svg);
    reader.config_mut().check_end_names = true;
    let mut survey = Survey::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => visit_element(&e, &mut survey),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(survey)
}

fn visit_element(e: &BytesStart<'_>, survey: &mut Survey) {
    let name = e.local_name();
    let is_root = !survey.root_seen && name.as_ref() == b"svg";
    if is_root {
        survey.root_seen = true;
    }

    match name.as_ref() {
        b"script" => survey.has_script = true,
        b"style" => survey.has_style = true,
        b"image" => survey.has_image = true,
        b"text" | b"tspan" => survey.has_text = true,
        _ => {}
    }

    for attr in e.attributes().with_checks(false).flatten() {
        let value = || String::from_utf8_lossy(&attr.value).into_owned();
        match attr.key.as_ref() {
            b"viewBox" if is_root => survey.view_box = Some(value()),
            b"xmlns" if is_root => survey.has_xmlns = true,
            b"role" if is_root => survey.has_root_role = true,
            b"aria-label" if is_root => survey.has_root_aria_label = true,
            b"stroke-width" => {
                if let Ok(w) = value().trim().parse::<f64>() {
                    survey.stroke_widths.push(w);
                }
            }
            b"fill" => survey.has_fill = true,
            b"stroke" => survey.has_stroke = true,
            _ => {}
        }
    }
}
