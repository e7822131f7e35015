//! Student record model.
//!
//! This module defines [`Student`], one row of the roster, and [`ClassLabel`],
//! the grade label that may arrive either as a number or as text. Records are
//! decoded leniently: a missing or oddly typed field never rejects the record,
//! it just renders as whatever text the value naturally displays as.

use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;

/// Grade label of a student.
///
/// Numeric labels order numerically, text labels order lexicographically.
/// Text that reads as a number (`"9"`, `" 10 "`) orders as that number but
/// keeps its original spelling for display. Numbers sort before text and a
/// missing label sorts after everything, so a class sort over clean data never
/// has to look at the mixed cases.
#[derive(Debug, Clone, Default)]
pub enum ClassLabel {
    /// Field absent or `null`.
    #[default]
    Missing,
    /// Numeric grade such as `10`.
    Number(f64),
    /// Text grade such as `"10A"`.
    Text(String),
}

impl ClassLabel {
    /// Numeric value of the label, parsing text labels that hold a number.
    #[must_use]
    pub fn numeric(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Self::Missing => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Missing => 2,
            _ if self.numeric().is_some() => 0,
            _ => 1,
        }
    }
}

impl Ord for ClassLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            _ => match (self, other) {
                (Self::Text(a), Self::Text(b)) if self.rank() == other.rank() => a.cmp(b),
                _ => self.rank().cmp(&other.rank()),
            },
        }
    }
}

impl PartialOrd for ClassLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ClassLabel {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ClassLabel {}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One learner in the roster.
///
/// Every field has a default, so a record with missing keys still decodes.
/// Text fields accept any JSON scalar, `marks` accepts numbers and numeric
/// strings, and `passing` follows truthiness rules.
///
/// # Examples
///
/// ```
/// use rosterview::Student;
///
/// let student: Student = serde_json::from_str(
///     r#"{"id": 1, "first_name": "Amy", "last_name": "Lee", "marks": 70, "passing": true}"#,
/// ).unwrap();
///
/// assert_eq!(student.id, "1");
/// assert_eq!(student.full_name(), "Amy Lee");
/// assert_eq!(student.marks_text(), "70");
/// assert_eq!(student.passing_label(), "Passing");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Student {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub last_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub gender: String,
    #[serde(rename = "class", deserialize_with = "lenient::class_label")]
    pub class_label: ClassLabel,
    #[serde(deserialize_with = "lenient::number")]
    pub marks: Option<f64>,
    #[serde(deserialize_with = "lenient::truthy")]
    pub passing: bool,
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(deserialize_with = "lenient::text")]
    pub img_src: String,
}

impl Student {
    /// Returns the composite `"first last"` name used for display and name sorting.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the binary status label shown in the Passing column.
    #[must_use]
    pub const fn passing_label(&self) -> &'static str {
        if self.passing {
            "Passing"
        } else {
            "Failed"
        }
    }

    /// Returns marks as display text, empty when the score is unknown.
    #[must_use]
    pub fn marks_text(&self) -> String {
        self.marks.map(|m| m.to_string()).unwrap_or_default()
    }
}

/// Field decoders that never fail on a well-formed JSON value.
mod lenient {
    use super::ClassLabel;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(display_text(&Value::deserialize(deserializer)?))
    }

    /// Renders a JSON value the way a page cell shows it: whole numbers
    /// without a fraction, array items joined by commas, null as nothing.
    pub fn display_text(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
                (Some(i), _, _) => i.to_string(),
                (None, Some(u), _) => u.to_string(),
                (None, None, Some(f)) => f.to_string(),
                (None, None, None) => n.to_string(),
            },
            Value::String(s) => s.clone(),
            Value::Array(items) => items.iter().map(display_text).collect::<Vec<_>>().join(","),
            Value::Object(_) => "[object Object]".to_string(),
        }
    }

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        let parsed = match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(parsed.filter(|n| n.is_finite()))
    }

    pub fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => false,
            Value::Bool(b) => b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        })
    }

    pub fn class_label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ClassLabel, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => ClassLabel::Missing,
            Value::Number(n) => n.as_f64().map_or(ClassLabel::Missing, ClassLabel::Number),
            Value::String(s) => ClassLabel::Text(s),
            other => ClassLabel::Text(display_text(&other)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> Student {
        serde_json::from_str(raw).expect("record should decode")
    }

    #[test]
    fn test_decodes_complete_record() {
        let student = decode(
            r#"{
                "id": 7, "first_name": "Bo", "last_name": "Chan", "gender": "Male",
                "class": 10, "marks": 90, "passing": false,
                "email": "bo@example.com", "img_src": "https://example.com/bo.png"
            }"#,
        );

        assert_eq!(student.id, "7");
        assert_eq!(student.full_name(), "Bo Chan");
        assert_eq!(student.gender, "Male");
        assert_eq!(student.class_label, ClassLabel::Number(10.0));
        assert_eq!(student.class_label.to_string(), "10");
        assert_eq!(student.marks, Some(90.0));
        assert_eq!(student.passing_label(), "Failed");
        assert_eq!(student.img_src, "https://example.com/bo.png");
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let student = decode(r#"{"first_name": "Amy"}"#);

        assert_eq!(student.id, "");
        assert_eq!(student.last_name, "");
        assert_eq!(student.class_label.to_string(), "");
        assert_eq!(student.marks_text(), "");
        assert!(!student.passing);
    }

    #[test]
    fn test_oddly_typed_fields_are_coerced() {
        let student = decode(
            r#"{"id": "s-1", "first_name": 42, "class": "10A", "marks": " 72.5 ", "passing": "yes", "email": null}"#,
        );

        assert_eq!(student.id, "s-1");
        assert_eq!(student.first_name, "42");
        assert_eq!(student.class_label, ClassLabel::Text("10A".to_string()));
        assert_eq!(student.marks, Some(72.5));
        assert!(student.passing);
        assert_eq!(student.email, "");
    }

    #[test]
    fn test_unparseable_marks_become_unknown() {
        assert_eq!(decode(r#"{"marks": "n/a"}"#).marks, None);
        assert_eq!(decode(r#"{"marks": [1]}"#).marks, None);
    }

    #[test]
    fn test_passing_truthiness() {
        assert!(!decode(r#"{"passing": 0}"#).passing);
        assert!(decode(r#"{"passing": 1}"#).passing);
        assert!(!decode(r#"{"passing": ""}"#).passing);
        assert!(decode(r#"{"passing": {}}"#).passing);
    }

    #[test]
    fn test_class_label_ordering() {
        let mut labels = vec![
            ClassLabel::Missing,
            ClassLabel::Text("b".to_string()),
            ClassLabel::Number(12.0),
            ClassLabel::Text("a".to_string()),
            ClassLabel::Number(9.0),
        ];
        labels.sort();

        assert_eq!(
            labels,
            vec![
                ClassLabel::Number(9.0),
                ClassLabel::Number(12.0),
                ClassLabel::Text("a".to_string()),
                ClassLabel::Text("b".to_string()),
                ClassLabel::Missing,
            ]
        );
    }

    #[test]
    fn test_numeric_text_classes_order_as_numbers() {
        let mut labels = vec![
            ClassLabel::Text("10".to_string()),
            ClassLabel::Text("10A".to_string()),
            ClassLabel::Number(9.5),
            ClassLabel::Text(" 9 ".to_string()),
        ];
        labels.sort();

        let shown: Vec<String> = labels.iter().map(ToString::to_string).collect();
        assert_eq!(shown, vec![" 9 ", "9.5", "10", "10A"]);
    }

    #[test]
    fn test_non_string_values_display_like_page_cells() {
        let student = decode(r#"{"id": 1.0, "first_name": [1, "a", null], "last_name": true, "email": {"a": 1}}"#);

        assert_eq!(student.id, "1");
        assert_eq!(student.first_name, "1,a,");
        assert_eq!(student.last_name, "true");
        assert_eq!(student.email, "[object Object]");
        assert_eq!(decode(r#"{"id": 2.5}"#).id, "2.5");
        assert_eq!(decode(r#"{"class": [9, 10]}"#).class_label.to_string(), "9,10");
    }
}
