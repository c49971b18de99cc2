//! LaTeX template variable replacement and output verification.
//!
//! A report template carries `\VAR{name}` placeholders that get filled
//! from a name→value map read out of the spreadsheet. Placeholders with
//! no value stay in place verbatim — the caller decides whether that is
//! worth surfacing — and the returned [`ReplaceReport`] says exactly what
//! happened.
//!
//! Generated output can also carry spreadsheet error markers (`#NAME?`,
//! `#REF!`, …) when a source formula is broken; [`check_sheet_errors`]
//! turns those into a typed error instead of letting them reach the
//! document compiler.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ChartError;
use crate::value::normalize_decimal;

static VAR_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\VAR\{([^}]+)\}").expect("Invalid regex"));

static SHEET_ERROR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(NAME\?|REF!|VALUE!|N/A|ERROR!)").expect("Invalid regex"));

/// Outcome of one [`replace_variables`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaceReport {
    /// Number of placeholders substituted.
    pub replaced: usize,
    /// Distinct placeholder names with no value, in order of appearance.
    pub missing: Vec<String>,
}

/// Substitute every `\VAR{name}` in `content` from `vars`.
///
/// Unknown placeholders are left untouched so the output still shows
/// where a value was expected; they are listed in the report.
pub fn replace_variables(content: &str, vars: &HashMap<String, String>) -> (String, ReplaceReport) {
    let mut result = String::with_capacity(content.len());
    let mut report = ReplaceReport::default();
    let mut last_end = 0;

    for caps in VAR_PLACEHOLDER.captures_iter(content) {
        let Some(whole) = caps.get(0) else { continue };
        let name = caps.get(1).map_or("", |m| m.as_str());

        result.push_str(&content[last_end..whole.start()]);
        if let Some(value) = vars.get(name) {
            result.push_str(value);
            report.replaced += 1;
        } else {
            result.push_str(whole.as_str());
            if !report.missing.iter().any(|n| n == name) {
                report.missing.push(name.to_string());
            }
        }
        last_end = whole.end();
    }
    result.push_str(&content[last_end..]);

    (result, report)
}

/// Build the variable map from raw (name, value) pairs.
///
/// Values matching the bounded decimal pattern get comma→period
/// normalization; names ending in `_percent` or `_percentage` get `\%`
/// appended to their value. A duplicate name is a configuration error.
pub fn normalize_variables(
    pairs: impl IntoIterator<Item = (String, String)>,
) -> Result<HashMap<String, String>, ChartError> {
    let mut vars = HashMap::new();
    for (name, value) in pairs {
        if vars.contains_key(&name) {
            return Err(ChartError::Config(format!(
                "Duplicate variable name: '{}'",
                name
            )));
        }
        let mut value = normalize_decimal(&value);
        if name.ends_with("_percent") || name.ends_with("_percentage") {
            value.push_str("\\%");
        }
        vars.insert(name, value);
    }
    Ok(vars)
}

/// Scan generated output for spreadsheet error markers.
///
/// Fails with [`ChartError::SheetErrors`] listing the distinct markers
/// found (sorted, so the message is deterministic).
pub fn check_sheet_errors(content: &str) -> Result<(), ChartError> {
    let mut found: Vec<&str> = SHEET_ERROR.find_iter(content).map(|m| m.as_str()).collect();
    found.sort_unstable();
    found.dedup();

    if found.is_empty() {
        Ok(())
    } else {
        Err(ChartError::SheetErrors(found.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_replace_known_placeholders() {
        let (out, report) = replace_variables(
            "total: \\VAR{total}, rate: \\VAR{rate}",
            &vars(&[("total", "42"), ("rate", "0.5")]),
        );
        assert_eq!(out, "total: 42, rate: 0.5");
        assert_eq!(report.replaced, 2);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_unknown_placeholder_left_verbatim() {
        let (out, report) = replace_variables("\\VAR{gone} and \\VAR{gone}", &vars(&[]));
        assert_eq!(out, "\\VAR{gone} and \\VAR{gone}");
        assert_eq!(report.replaced, 0);
        assert_eq!(report.missing, vec!["gone".to_string()]);
    }

    #[test]
    fn test_replace_mixed() {
        let (out, report) = replace_variables(
            "\\VAR{known} \\VAR{unknown}",
            &vars(&[("known", "yes")]),
        );
        assert_eq!(out, "yes \\VAR{unknown}");
        assert_eq!(report.replaced, 1);
        assert_eq!(report.missing, vec!["unknown".to_string()]);
    }

    #[test]
    fn test_normalize_variables_decimal_and_percent() {
        let vars = normalize_variables(vec![
            ("count".to_string(), "123,45".to_string()),
            ("done_percent".to_string(), "87".to_string()),
            ("share_percentage".to_string(), "12,5".to_string()),
        ])
        .unwrap();
        assert_eq!(vars["count"], "123.45");
        assert_eq!(vars["done_percent"], "87\\%");
        assert_eq!(vars["share_percentage"], "12.5\\%");
    }

    #[test]
    fn test_normalize_variables_rejects_duplicates() {
        let result = normalize_variables(vec![
            ("total".to_string(), "1".to_string()),
            ("total".to_string(), "2".to_string()),
        ]);
        assert!(matches!(result, Err(ChartError::Config(_))));
    }

    #[test]
    fn test_check_sheet_errors_clean() {
        assert!(check_sheet_errors("\\begin{document}42\\end{document}").is_ok());
    }

    #[test]
    fn test_check_sheet_errors_each_marker() {
        for marker in ["#NAME?", "#REF!", "#VALUE!", "#N/A", "#ERROR!"] {
            let content = format!("before {} after", marker);
            let err = check_sheet_errors(&content);
            assert!(
                matches!(err, Err(ChartError::SheetErrors(ref found)) if found == marker),
                "marker {} not detected",
                marker
            );
        }
    }

    #[test]
    fn test_check_sheet_errors_distinct_sorted() {
        let err = check_sheet_errors("#REF! #NAME? #REF!");
        assert!(matches!(
            err,
            Err(ChartError::SheetErrors(found)) if found == "#NAME?, #REF!"
        ));
    }
}
