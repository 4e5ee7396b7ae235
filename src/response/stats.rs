use serde_json::Value;

use crate::response::namedlist::{lenient_f64, named_list_pairs};

/// Statistics for one `stats.field`.
///
/// `mean` and `stddev` come back as the string `"NaN"` when the field has no
/// values; those normalize to `f64::NAN` rather than failing the parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsField {
    pub field: String,
    pub min: Option<Value>,
    pub max: Option<Value>,
    pub sum: Option<f64>,
    pub count: u64,
    pub missing: u64,
    pub sum_of_squares: Option<f64>,
    pub mean: Option<f64>,
    pub stddev: Option<f64>,
    /// Present when `stats.calcdistinct` was requested.
    pub count_distinct: Option<u64>,
    pub distinct_values: Vec<Value>,
    /// Per-facet-value stats, keyed by facet field then facet value.
    pub facets: Vec<(String, Vec<(String, StatsField)>)>,
}

/// The `stats` section of a select response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsResult {
    pub fields: Vec<StatsField>,
}

impl StatsResult {
    pub fn parse(value: &Value) -> Self {
        let fields = named_list_pairs(&value["stats_fields"])
            .into_iter()
            .map(|(field, body)| parse_field(&field, &body))
            .collect();
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&StatsField> {
        self.fields.iter().find(|f| f.field == name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn parse_field(field: &str, body: &Value) -> StatsField {
    // A field with no indexed values serializes as null.
    if body.is_null() {
        return StatsField {
            field: field.to_string(),
            ..Default::default()
        };
    }
    let facets = named_list_pairs(&body["facets"])
        .into_iter()
        .map(|(facet_field, values)| {
            let per_value = named_list_pairs(&values)
                .into_iter()
                .map(|(facet_value, stats)| {
                    let parsed = parse_field(&facet_value, &stats);
                    (facet_value, parsed)
                })
                .collect();
            (facet_field, per_value)
        })
        .collect();
    StatsField {
        field: field.to_string(),
        min: body.get("min").filter(|v| !v.is_null()).cloned(),
        max: body.get("max").filter(|v| !v.is_null()).cloned(),
        sum: body.get("sum").and_then(lenient_f64),
        count: body["count"].as_u64().unwrap_or(0),
        missing: body["missing"].as_u64().unwrap_or(0),
        sum_of_squares: body.get("sumOfSquares").and_then(lenient_f64),
        mean: body.get("mean").and_then(lenient_f64),
        stddev: body.get("stddev").and_then(lenient_f64),
        count_distinct: body["countDistinct"].as_u64(),
        distinct_values: body["distinctValues"]
            .as_array()
            .cloned()
            .unwrap_or_default(),
        facets,
    }
}
