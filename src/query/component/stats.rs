use crate::param::Params;
use crate::query::component::Component;

/// The stats component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    fields: Vec<String>,
    facets: Vec<String>,
    calc_distinct: Option<bool>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field to compute statistics over; repeatable.
    pub fn field<S: Into<String>>(mut self, field: S) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Facet field to break the statistics down by; repeatable.
    pub fn facet<S: Into<String>>(mut self, field: S) -> Self {
        self.facets.push(field.into());
        self
    }

    /// Also compute distinct value sets (`stats.calcdistinct`).
    pub fn calc_distinct(mut self, calc: bool) -> Self {
        self.calc_distinct = Some(calc);
        self
    }
}

impl Component for Stats {
    fn append_params(&self, params: &mut Params) {
        params.add("stats", "true");
        for field in &self.fields {
            params.add("stats.field", field.clone());
        }
        for field in &self.facets {
            params.add("stats.facet", field.clone());
        }
        if let Some(calc) = self.calc_distinct {
            params.add("stats.calcdistinct", calc.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_flag_always_emitted() {
        let mut params = Params::new();
        Stats::new().append_params(&mut params);
        assert_eq!(params.get("stats"), Some("true"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_fields_and_facets() {
        let mut params = Params::new();
        Stats::new()
            .field("price")
            .field("popularity")
            .facet("inStock")
            .calc_distinct(true)
            .append_params(&mut params);
        assert_eq!(params.get_all("stats.field"), vec!["price", "popularity"]);
        assert_eq!(params.get("stats.facet"), Some("inStock"));
        assert_eq!(params.get("stats.calcdistinct"), Some("true"));
    }
}
