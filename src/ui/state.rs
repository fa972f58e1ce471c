//! Application state management structures.
//!
//! This module contains the state structures behind the window: the raw text of the
//! input form, the export channel and pending notice, and the persisted UI preferences.

use crate::constants;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Errors surfaced under the form when its contents cannot produce a point set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    /// A field did not parse as a number.
    #[error("{field}: '{text}' is not a number")]
    NotANumber {
        /// Label of the offending field
        field: &'static str,
        /// The text as typed
        text: String,
    },
    /// The count field did not parse as a whole number.
    #[error("{field}: '{text}' is not a whole number")]
    NotAnInteger {
        /// Label of the offending field
        field: &'static str,
        /// The text as typed
        text: String,
    },
    /// The count is larger than the window can draw.
    #[error("{field}: at most {max} points are supported, got {count}")]
    TooMany {
        /// Label of the offending field
        field: &'static str,
        /// The count as parsed
        count: i64,
        /// The largest accepted count
        max: usize,
    },
    /// The values parsed but violate the generation preconditions.
    #[error(transparent)]
    Invalid(#[from] InvalidInput),
}

/// Raw contents of the input form.
///
/// Numeric fields are kept as text and parsed on every frame so that partial input
/// (an empty field, a lone minus sign) can be typed without being rejected mid-edit.
pub struct FormState {
    /// Center x as typed
    pub center_x: String,
    /// Center y as typed
    pub center_y: String,
    /// Radius as typed
    pub radius: String,
    /// Point count as typed
    pub count: String,
    /// Angle offset in degrees as typed
    pub angle_offset: String,
    /// Marker color
    pub color: [u8; 3],
    /// Axis unit label
    pub unit: String,
    /// Whether point indices are drawn
    pub show_labels: bool,
    /// Whether the PDF lists the parameters
    pub include_parameters: bool,
    /// Author name printed in the PDF
    pub author: String,
    /// Contact printed in the PDF
    pub contact: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            center_x: "0.0".into(),
            center_y: "0.0".into(),
            radius: format!("{:.1}", constants::DEFAULT_RADIUS),
            count: constants::DEFAULT_COUNT.to_string(),
            angle_offset: "0.0".into(),
            color: constants::DEFAULT_POINT_COLOR,
            unit: constants::DEFAULT_UNIT.into(),
            show_labels: true,
            include_parameters: true,
            author: String::new(),
            contact: String::new(),
        }
    }
}

impl FormState {
    /// Parses and validates the numeric fields.
    pub fn parse(&self) -> Result<CircleSpec, FormError> {
        let center_x = parse_number("Center x", &self.center_x)?;
        let center_y = parse_number("Center y", &self.center_y)?;
        let radius = parse_number("Radius", &self.radius)?;
        let count = parse_count("Point count", &self.count)?;
        let angle_offset = parse_number("Angle offset", &self.angle_offset)?;

        let spec = CircleSpec::new((center_x, center_y), radius, count, angle_offset);
        spec.validate()?;
        Ok(spec)
    }

    /// Presentation settings derived from the form.
    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle {
            color: PointColor(self.color),
            unit: self.unit.trim().to_string(),
            show_labels: self.show_labels,
        }
    }

    /// Report options derived from the form.
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            include_parameters: self.include_parameters,
            author: self.author.clone(),
            contact: self.contact.clone(),
        }
    }
}

fn parse_number(field: &'static str, text: &str) -> Result<f64, FormError> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| FormError::NotANumber {
            field,
            text: text.to_string(),
        })
}

fn parse_count(field: &'static str, text: &str) -> Result<usize, FormError> {
    let value = text.trim().parse::<i64>().map_err(|_| FormError::NotAnInteger {
        field,
        text: text.to_string(),
    })?;
    if value < 1 {
        return Err(InvalidInput::Count { count: value }.into());
    }
    match usize::try_from(value) {
        Ok(count) if count <= constants::MAX_COUNT => Ok(count),
        _ => Err(FormError::TooMany {
            field,
            count: value,
            max: constants::MAX_COUNT,
        }),
    }
}

/// Messages sent from async save tasks back to the main app.
#[derive(Debug)]
pub enum ExportOutcome {
    /// Bytes were written to the given path
    Saved(String),
    /// Writing failed with an error message
    Failed(String),
}

/// A one-shot message shown in a small window until dismissed.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Window title
    pub title: String,
    /// Body text
    pub message: String,
    /// Whether the notice reports a failure
    pub is_error: bool,
}

/// State related to export operations.
pub struct ExportState {
    /// Channel for receiving save results from async contexts
    pub sender: Sender<ExportOutcome>,
    /// Receiving end drained once per frame
    pub receiver: Receiver<ExportOutcome>,
    /// Notice currently on screen, if any
    pub notice: Option<Notice>,
}

impl Default for ExportState {
    fn default() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            notice: None,
        }
    }
}

/// The main application structure containing UI state.
///
/// This struct implements the `eframe::App` trait. Only UI preferences are persisted;
/// form contents start fresh every session.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct CircleApp {
    /// Input form contents
    #[serde(skip)]
    pub form: FormState,
    /// Export channel and notices
    #[serde(skip)]
    pub export: ExportState,
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
    /// Remembered width of the parameters panel across sessions
    pub parameters_panel_width: f32,
}

impl Default for CircleApp {
    fn default() -> Self {
        Self {
            form: FormState::default(),
            export: ExportState::default(),
            dark_mode: false,
            parameters_panel_width: 280.0,
        }
    }
}

impl CircleApp {
    /// Creates the app, restoring UI preferences from eframe storage when present.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let restored = cc
            .storage
            .and_then(|storage| storage.get_string("app_state"))
            .and_then(|json| match Self::from_json(&json) {
                Ok(app) => Some(app),
                Err(e) => {
                    log::warn!("Ignoring unreadable saved state: {e}");
                    None
                }
            });
        restored.unwrap_or_default()
    }

    /// Serializes the persisted preferences to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Restores preferences from JSON; skipped fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
