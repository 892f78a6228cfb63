use crate::util::{join_header_values, normalize_lower};
use std::collections::HashSet;
use std::ops::Deref;

/// Header names for `Access-Control-Allow-Headers` or
/// `Access-Control-Expose-Headers`.
///
/// Names keep their configured spelling and order; repeats are dropped
/// case-insensitively. Values are not validated, so a name containing `,`
/// would split into two on the browser side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderNames {
    values: Vec<String>,
}

impl HeaderNames {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();

        for value in values.into_iter() {
            let value = value.into();
            if seen.insert(normalize_lower(&value)) {
                deduped.push(value);
            }
        }

        Self { values: deduped }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn header_value(&self) -> String {
        join_header_values(&self.values)
    }
}

impl Deref for HeaderNames {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

#[cfg(test)]
#[path = "header_names_test.rs"]
mod header_names_test;
