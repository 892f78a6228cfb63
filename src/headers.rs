use crate::constants::header;
use indexmap::IndexMap;

/// Response headers in emission order.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(6)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.insert(name, value.into());
        }
    }

    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        merge_vary(&mut self.headers, &value.into());
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

/// Writes `source` into `target`, replacing same-named entries except `Vary`,
/// whose tokens are merged case-insensitively.
pub(crate) fn write_headers(target: &mut Headers, source: &Headers) {
    for (name, value) in source {
        if name.eq_ignore_ascii_case(header::VARY) {
            merge_vary(target, value);
            continue;
        }

        let existing = target
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
            .cloned();
        match existing {
            Some(key) => {
                target.insert(key, value.clone());
            }
            None => {
                target.insert(name.clone(), value.clone());
            }
        }
    }
}

fn merge_vary(headers: &mut Headers, incoming: &str) {
    let key = headers
        .keys()
        .find(|key| key.eq_ignore_ascii_case(header::VARY))
        .cloned()
        .unwrap_or_else(|| header::VARY.to_string());

    let mut entries: Vec<String> = headers
        .get(&key)
        .map(|existing| {
            existing
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect()
        })
        .unwrap_or_default();

    entries.extend(
        incoming
            .split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty()),
    );

    if entries.is_empty() {
        headers.shift_remove(&key);
        return;
    }

    let mut deduped: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries {
        if deduped
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(&entry))
        {
            continue;
        }
        deduped.push(entry);
    }

    headers.insert(key, deduped.join(", "));
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
