//! Query-string encoding for parameter structs.
//!
//! Parameter structs serialize through `serde_json` and flatten into
//! query pairs: `None` fields are skipped entirely, scalars stringify,
//! and arrays join with commas the way the API's `:in`-style filters
//! expect.

use reqwest::Url;
use serde::Serialize;
use serde_json::Value;

use crate::clients::HttpError;

/// Appends `params` to `url` as query pairs.
pub(crate) fn url_with_query<P: Serialize>(url: Url, params: &P) -> Result<Url, HttpError> {
    let pairs = to_query_pairs(params)?;
    let mut url = url;
    if !pairs.is_empty() {
        let mut query = url.query_pairs_mut();
        for (key, value) in &pairs {
            query.append_pair(key, value);
        }
        drop(query);
    }
    Ok(url)
}

fn to_query_pairs<P: Serialize>(params: &P) -> Result<Vec<(String, String)>, HttpError> {
    let value = serde_json::to_value(params).map_err(HttpError::Serialize)?;
    let mut pairs = Vec::new();

    if let Value::Object(fields) = value {
        for (key, field) in fields {
            match field {
                Value::Null => {}
                Value::String(text) => pairs.push((key, text)),
                Value::Number(number) => pairs.push((key, number.to_string())),
                Value::Bool(flag) => pairs.push((key, flag.to_string())),
                Value::Array(items) => {
                    let joined = items
                        .iter()
                        .map(|item| match item {
                            Value::String(text) => text.clone(),
                            other => other.to_string(),
                        })
                        .collect::<Vec<_>>()
                        .join(",");
                    if !joined.is_empty() {
                        pairs.push((key, joined));
                    }
                }
                Value::Object(_) => pairs.push((key, field.to_string())),
            }
        }
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Serialize)]
    struct Params {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(rename = "id:in", skip_serializing_if = "Option::is_none")]
        id_in: Option<Vec<u64>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        is_visible: Option<bool>,
    }

    #[test]
    fn test_none_fields_are_omitted() {
        let params = Params {
            name: Some("widget".to_string()),
            ..Params::default()
        };
        let pairs = to_query_pairs(&params).unwrap();
        assert_eq!(pairs, vec![("name".to_string(), "widget".to_string())]);
    }

    #[test]
    fn test_arrays_join_with_commas() {
        let params = Params {
            id_in: Some(vec![1, 2, 3]),
            ..Params::default()
        };
        let pairs = to_query_pairs(&params).unwrap();
        assert_eq!(pairs, vec![("id:in".to_string(), "1,2,3".to_string())]);
    }

    #[test]
    fn test_scalars_stringify() {
        let params = Params {
            limit: Some(250),
            is_visible: Some(true),
            ..Params::default()
        };
        let pairs = to_query_pairs(&params).unwrap();
        assert!(pairs.contains(&("limit".to_string(), "250".to_string())));
        assert!(pairs.contains(&("is_visible".to_string(), "true".to_string())));
    }

    #[test]
    fn test_url_with_query_appends_pairs() {
        let url = Url::parse("https://api.bigcommerce.com/stores/abc/v3/catalog/products").unwrap();
        let result = url_with_query(
            url,
            &Params {
                name: Some("widget".to_string()),
                limit: Some(250),
                ..Params::default()
            },
        )
        .unwrap();
        assert_eq!(result.query(), Some("limit=250&name=widget"));
    }

    #[test]
    fn test_empty_params_leave_url_untouched() {
        let url = Url::parse("https://api.bigcommerce.com/stores/abc/v3/catalog/products").unwrap();
        let result = url_with_query(url.clone(), &Params::default()).unwrap();
        assert_eq!(result, url);
    }
}
