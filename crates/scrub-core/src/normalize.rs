//! The record normalization routine.
//!
//! `normalize` is a pure function over an in-memory table: it never logs,
//! prints, or touches the filesystem. Each stage consumes the output of the
//! previous one, so ordering is significant (the income filter, for example,
//! runs after duplicate and blank-name rows are already gone).

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use polars::prelude::{
    AnyValue, BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series,
};

use scrub_ingest::{any_to_f64, any_to_string};
use scrub_model::{SchemaColumn, resolve_columns};

use crate::dates::parse_date;
use crate::values::{canonical_country, capitalize, is_valid_email, median, sanitize_income};

/// Normalize a customer record table.
///
/// The input must carry the seven schema columns (header whitespace is
/// tolerated); columns beyond the schema pass through untouched. Malformed
/// values never raise — they are nulled out, imputed, or drop their row per
/// the column policy. The only error condition is a missing schema column.
pub fn normalize(frame: &DataFrame) -> Result<DataFrame> {
    let df = trim_headers(frame)?;
    let headers: Vec<String> = column_names(&df);
    resolve_columns(&headers)?;

    let df = drop_exact_duplicates(&df)?;
    let mut df = drop_blank_names(&df)?;
    clean_emails(&mut df)?;
    impute_ages(&mut df)?;
    canonicalize_countries(&mut df)?;
    parse_signup_dates(&mut df)?;
    let mut df = clean_incomes(&df)?;
    normalize_statuses(&mut df)?;
    Ok(df)
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.as_str().to_string())
        .collect()
}

/// Stage 1: strip incidental whitespace from header names.
fn trim_headers(df: &DataFrame) -> Result<DataFrame> {
    let mut df = df.clone();
    let renames: Vec<(String, String)> = column_names(&df)
        .into_iter()
        .filter_map(|name| {
            let trimmed = name.trim().to_string();
            (trimmed != name).then_some((name, trimmed))
        })
        .collect();
    for (from, to) in renames {
        df.rename(&from, to.into())
            .with_context(|| format!("rename column `{from}`"))?;
    }
    Ok(df)
}

/// Stage 2: remove exact-duplicate rows, keeping the first occurrence.
///
/// Rows compare element-wise across every column, with null distinct from
/// the empty string.
fn drop_exact_duplicates(df: &DataFrame) -> Result<DataFrame> {
    let columns = column_names(df);
    let mut seen: BTreeSet<Vec<Option<String>>> = BTreeSet::new();
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut row = Vec::with_capacity(columns.len());
        for name in &columns {
            row.push(cell_text(df, name, idx)?);
        }
        keep.push(seen.insert(row));
    }
    filter_rows(df, &keep)
}

/// Stage 3: drop rows whose Name is null or blank after trimming.
fn drop_blank_names(df: &DataFrame) -> Result<DataFrame> {
    let names = text_values(df, SchemaColumn::Name.as_str())?;
    let keep: Vec<bool> = names
        .iter()
        .map(|value| matches!(value, Some(name) if !name.trim().is_empty()))
        .collect();
    filter_rows(df, &keep)
}

/// Stage 4: trim and lowercase emails; values failing the shape check
/// become null while the row is retained.
fn clean_emails(df: &mut DataFrame) -> Result<()> {
    let values = text_values(df, SchemaColumn::Email.as_str())?;
    let cleaned: Vec<Option<String>> = values
        .iter()
        .map(|value| {
            let lowered = value.as_deref()?.trim().to_lowercase();
            is_valid_email(&lowered).then_some(lowered)
        })
        .collect();
    replace_text_column(df, SchemaColumn::Email.as_str(), cleaned)
}

/// Stage 5: coerce ages to numeric and fill missing values with the median.
///
/// The median is computed once over the pre-imputation column; when no
/// numeric age exists at all, imputation is skipped and the column stays
/// null. Values are rounded to the nearest integer, ties to even.
fn impute_ages(df: &mut DataFrame) -> Result<()> {
    let name = SchemaColumn::Age.as_str();
    let column = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?;
    let mut ages: Vec<Option<f64>> = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        ages.push(any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)));
    }
    let fill = median(ages.iter().flatten().copied());
    let rounded: Vec<Option<i64>> = ages
        .into_iter()
        .map(|age| age.or(fill).map(|value| value.round_ties_even() as i64))
        .collect();
    let series = Series::new(name.into(), rounded);
    df.with_column(series)
        .with_context(|| format!("replace column `{name}`"))?;
    Ok(())
}

/// Stage 6: map known country aliases to canonical names; unmatched values
/// pass through trimmed but otherwise unchanged.
fn canonicalize_countries(df: &mut DataFrame) -> Result<()> {
    let values = text_values(df, SchemaColumn::Country.as_str())?;
    let cleaned: Vec<Option<String>> = values
        .iter()
        .map(|value| {
            let trimmed = value.as_deref()?.trim();
            if trimmed.is_empty() {
                return None;
            }
            Some(match canonical_country(trimmed) {
                Some(canonical) => canonical.to_string(),
                None => trimmed.to_string(),
            })
        })
        .collect();
    replace_text_column(df, SchemaColumn::Country.as_str(), cleaned)
}

/// Stage 7: parse sign-up dates; unparsable values become null and the row
/// is retained. Parsed dates are rendered back as ISO-8601 (`YYYY-MM-DD`).
fn parse_signup_dates(df: &mut DataFrame) -> Result<()> {
    let values = text_values(df, SchemaColumn::SignUpDate.as_str())?;
    let cleaned: Vec<Option<String>> = values
        .iter()
        .map(|value| {
            let date = parse_date(value.as_deref()?)?;
            Some(date.format("%Y-%m-%d").to_string())
        })
        .collect();
    replace_text_column(df, SchemaColumn::SignUpDate.as_str(), cleaned)
}

/// Stage 8: sanitize incomes and drop rows without a non-negative value.
/// Survivors are rounded to the nearest integer, ties to even.
fn clean_incomes(df: &DataFrame) -> Result<DataFrame> {
    let name = SchemaColumn::Income.as_str();
    let column = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?;
    let mut parsed: Vec<Option<f64>> = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let text = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
        let sanitized = sanitize_income(&text);
        parsed.push(scrub_ingest::parse_f64(&sanitized));
    }
    let keep: Vec<bool> = parsed
        .iter()
        .map(|value| matches!(value, Some(income) if *income >= 0.0))
        .collect();
    let rounded: Vec<Option<i64>> = parsed
        .into_iter()
        .map(|value| value.map(|income| income.round_ties_even() as i64))
        .collect();
    let mut df = df.clone();
    let series = Series::new(name.into(), rounded);
    df.with_column(series)
        .with_context(|| format!("replace column `{name}`"))?;
    filter_rows(&df, &keep)
}

/// Stage 9: trim and capitalize statuses; null or blank becomes "Unknown".
fn normalize_statuses(df: &mut DataFrame) -> Result<()> {
    let values = text_values(df, SchemaColumn::Status.as_str())?;
    let cleaned: Vec<Option<String>> = values
        .iter()
        .map(|value| {
            let trimmed = value.as_deref().map(str::trim).unwrap_or("");
            if trimmed.is_empty() {
                Some("Unknown".to_string())
            } else {
                Some(capitalize(trimmed))
            }
        })
        .collect();
    replace_text_column(df, SchemaColumn::Status.as_str(), cleaned)
}

fn cell_text(df: &DataFrame, name: &str, idx: usize) -> Result<Option<String>> {
    let column = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?;
    Ok(match column.get(idx).unwrap_or(AnyValue::Null) {
        AnyValue::Null => None,
        other => Some(any_to_string(other)),
    })
}

fn text_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(cell_text(df, name, idx)?);
    }
    Ok(values)
}

fn replace_text_column(df: &mut DataFrame, name: &str, values: Vec<Option<String>>) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)
        .with_context(|| format!("replace column `{name}`"))?;
    Ok(())
}

fn filter_rows(df: &DataFrame, keep: &[bool]) -> Result<DataFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    df.filter(&mask).context("filter rows")
}
