//! # Field Constraints: Declarative Descriptor Tables
//!
//! Every record in the schema is described by a [`RecordSpec`]: a static
//! table of [`FieldSpec`]s plus the conditional requirements that span
//! fields of the same record. The tables are interpreted by one generic
//! validation routine (in `echo-schema`) and by the JSON Schema exporter, so
//! bound checks are written exactly once.
//!
//! All descriptors are `const`-constructible and live in `'static` memory.
//!
//! ## Bounds
//!
//! Numeric bounds are integral in every field of the schema (latitude ±90,
//! positivity, ratio ≤ 1, year ranges), so a [`Bound`] carries an `i64`
//! limit and an inclusivity flag. Comparisons are done in the value's own
//! numeric type.

use crate::registry::Domain;

/// One end of a numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    /// The limit value.
    pub limit: i64,
    /// Whether the limit itself is admitted.
    pub inclusive: bool,
}

impl Bound {
    /// `value >= limit` (for a lower bound) or `value <= limit` (upper).
    pub const fn inclusive(limit: i64) -> Self {
        Self {
            limit,
            inclusive: true,
        }
    }

    /// `value > limit` (for a lower bound) or `value < limit` (upper).
    pub const fn exclusive(limit: i64) -> Self {
        Self {
            limit,
            inclusive: false,
        }
    }
}

/// A numeric range with optional lower and upper ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Range {
    /// Lower end.
    pub min: Option<Bound>,
    /// Upper end.
    pub max: Option<Bound>,
}

impl Range {
    /// No restriction.
    pub const ANY: Range = Range {
        min: None,
        max: None,
    };

    /// Strictly positive.
    pub const POSITIVE: Range = Range {
        min: Some(Bound::exclusive(0)),
        max: None,
    };

    /// Zero or greater.
    pub const NON_NEGATIVE: Range = Range {
        min: Some(Bound::inclusive(0)),
        max: None,
    };

    /// Closed interval `[lo, hi]`.
    pub const fn closed(lo: i64, hi: i64) -> Self {
        Self {
            min: Some(Bound::inclusive(lo)),
            max: Some(Bound::inclusive(hi)),
        }
    }

    /// Half-open interval `(lo, hi]`.
    pub const fn left_open(lo: i64, hi: i64) -> Self {
        Self {
            min: Some(Bound::exclusive(lo)),
            max: Some(Bound::inclusive(hi)),
        }
    }

    /// Check an `f64` against the range.
    pub fn admits_f64(&self, value: f64) -> bool {
        let lower_ok = match self.min {
            None => true,
            Some(b) if b.inclusive => value >= b.limit as f64,
            Some(b) => value > b.limit as f64,
        };
        let upper_ok = match self.max {
            None => true,
            Some(b) if b.inclusive => value <= b.limit as f64,
            Some(b) => value < b.limit as f64,
        };
        lower_ok && upper_ok
    }

    /// Check an `i64` against the range.
    pub fn admits_i64(&self, value: i64) -> bool {
        let lower_ok = match self.min {
            None => true,
            Some(b) if b.inclusive => value >= b.limit,
            Some(b) => value > b.limit,
        };
        let upper_ok = match self.max {
            None => true,
            Some(b) if b.inclusive => value <= b.limit,
            Some(b) => value < b.limit,
        };
        lower_ok && upper_ok
    }

    /// Human-readable description, e.g. `> 0 and <= 1`.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(b) = self.min {
            parts.push(format!("{} {}", if b.inclusive { ">=" } else { ">" }, b.limit));
        }
        if let Some(b) = self.max {
            parts.push(format!("{} {}", if b.inclusive { "<=" } else { "<" }, b.limit));
        }
        if parts.is_empty() {
            "any value".to_string()
        } else {
            parts.join(" and ")
        }
    }
}

/// Character-count bounds on a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length {
    /// Minimum number of characters.
    pub min: Option<usize>,
    /// Maximum number of characters.
    pub max: Option<usize>,
}

impl Length {
    /// No restriction.
    pub const ANY: Length = Length {
        min: None,
        max: None,
    };

    /// Between `min` and `max` characters inclusive.
    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Returns true if `count` characters satisfy the bounds.
    pub fn admits(&self, count: usize) -> bool {
        self.min.map_or(true, |m| count >= m) && self.max.map_or(true, |m| count <= m)
    }
}

/// The value type and constraints of one field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// UTF-8 string with optional length bounds.
    Text(Length),
    /// JSON boolean.
    Bool,
    /// Integral number within a range.
    Integer(Range),
    /// Binary floating point number within a range.
    Float(Range),
    /// Exact decimal within a range, with an optional limit on the number of
    /// digits after the decimal point.
    Decimal {
        /// Admitted range.
        range: Range,
        /// Maximum fractional digits, if limited.
        places: Option<u32>,
    },
    /// ISO 8601 calendar date (`YYYY-MM-DD`).
    Date,
    /// Either an ISO 8601 date or a bare year within a range.
    DateOrYear(Range),
    /// One literal from a domain.
    Choice(&'static Domain),
    /// A list of literals from a domain.
    ChoiceList(&'static Domain),
    /// A nested record.
    Record(&'static RecordSpec),
    /// A list of nested records.
    RecordList(&'static RecordSpec),
}

impl FieldKind {
    /// Unbounded text.
    pub const TEXT: FieldKind = FieldKind::Text(Length::ANY);

    /// Unbounded float.
    pub const FLOAT: FieldKind = FieldKind::Float(Range::ANY);

    /// Unbounded integer.
    pub const INTEGER: FieldKind = FieldKind::Integer(Range::ANY);

    /// Strictly positive decimal with at most two fractional digits.
    pub const AREA: FieldKind = FieldKind::Decimal {
        range: Range::POSITIVE,
        places: Some(2),
    };

    /// Short label of the expected JSON shape, used in violation messages.
    pub fn expected(&self) -> &'static str {
        match self {
            FieldKind::Text(_) => "string",
            FieldKind::Bool => "boolean",
            FieldKind::Integer(_) => "integer",
            FieldKind::Float(_) => "number",
            FieldKind::Decimal { .. } => "decimal number",
            FieldKind::Date => "date (YYYY-MM-DD)",
            FieldKind::DateOrYear(_) => "date (YYYY-MM-DD) or year",
            FieldKind::Choice(_) => "string",
            FieldKind::ChoiceList(_) => "array of strings",
            FieldKind::Record(_) => "object",
            FieldKind::RecordList(_) => "array of objects",
        }
    }
}

/// Declarative description of one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Payload key.
    pub name: &'static str,
    /// Whether the field must be present and non-null.
    pub required: bool,
    /// Value type and constraints.
    pub kind: FieldKind,
    /// Human-readable description, exported into JSON Schema.
    pub description: &'static str,
}

impl FieldSpec {
    /// A field that must be present.
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            required: true,
            kind,
            description: "",
        }
    }

    /// A field that may be absent or null.
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            required: false,
            kind,
            description: "",
        }
    }

    /// Attach a description.
    pub const fn describe(self, description: &'static str) -> Self {
        Self {
            description,
            ..self
        }
    }
}

/// `field` must be present whenever `when_field` equals `equals`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredWhen {
    /// The conditionally required field.
    pub field: &'static str,
    /// The field whose value triggers the requirement.
    pub when_field: &'static str,
    /// The triggering literal.
    pub equals: &'static str,
}

/// Descriptor table of one record type.
#[derive(Debug, Clone, Copy)]
pub struct RecordSpec {
    /// Record name, used in messages and schema titles.
    pub name: &'static str,
    /// Field descriptors in declaration order.
    pub fields: &'static [FieldSpec],
    /// Conditional requirements between fields of this record.
    pub rules: &'static [RequiredWhen],
}

impl RecordSpec {
    /// Look up a field descriptor by payload key.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Payload keys of every field, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|f| f.name)
    }

    /// Payload keys of the unconditionally required fields.
    pub fn required_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }
}
