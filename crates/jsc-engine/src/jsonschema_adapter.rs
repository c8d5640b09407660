//! # Built-in Adapter — `jsonschema` Crate
//!
//! Wraps the `jsonschema` crate behind the [`ValidatorAdapter`] contract.
//! Cross-file `$ref` retrieval is delegated to the corpus
//! [`RemoteSchemaStore`] through a local retriever, so compilation never
//! reaches the network. The crate embeds the official draft meta-schemas,
//! so no meta-schema bank is required to run the corpus offline.

use std::sync::Arc;

use jsc_corpus::{Draft, RemoteSchemaStore};
use jsonschema::{Retrieve, Uri};
use serde_json::Value;

use crate::adapter::{PreparedValidator, PrepareError, ValidateError, ValidatorAdapter};

/// Adapter for the `jsonschema` crate. Draft 3 has no dialect in the crate
/// and is not declared.
pub struct JsonschemaAdapter;

const SUPPORTED: [Draft; 5] = [
    Draft::Draft4,
    Draft::Draft6,
    Draft::Draft7,
    Draft::Draft201909,
    Draft::Draft202012,
];

/// Resolves `$ref` URIs from the in-memory store; never performs I/O.
struct StoreRetriever {
    store: Arc<RemoteSchemaStore>,
}

impl Retrieve for StoreRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let content = self.store.load(uri.as_str())?;
        Ok(serde_json::from_str(content)?)
    }
}

impl ValidatorAdapter for JsonschemaAdapter {
    fn name(&self) -> &'static str {
        "Jsonschema"
    }

    fn supported(&self) -> &[Draft] {
        &SUPPORTED
    }

    fn prepare(
        &self,
        schema: &str,
        draft: Draft,
        remotes: Arc<RemoteSchemaStore>,
        format_assertions: bool,
    ) -> Result<Box<dyn PreparedValidator>, PrepareError> {
        let schema_value: Value = serde_json::from_str(schema)
            .map_err(|e| PrepareError::new(format!("schema is not valid JSON: {e}")))?;

        let mut options = jsonschema::options();
        options.with_draft(dialect(draft)?);
        options.with_retriever(StoreRetriever { store: remotes });
        if format_assertions {
            options.should_validate_formats(true);
        }

        let validator = options
            .build(&schema_value)
            .map_err(|e| PrepareError::new(e.to_string()))?;

        Ok(Box::new(Prepared { validator }))
    }
}

fn dialect(draft: Draft) -> Result<jsonschema::Draft, PrepareError> {
    match draft {
        Draft::Draft4 => Ok(jsonschema::Draft::Draft4),
        Draft::Draft6 => Ok(jsonschema::Draft::Draft6),
        Draft::Draft7 => Ok(jsonschema::Draft::Draft7),
        Draft::Draft201909 => Ok(jsonschema::Draft::Draft201909),
        Draft::Draft202012 => Ok(jsonschema::Draft::Draft202012),
        Draft::Draft3 => Err(PrepareError::new("draft not supported: DRAFT_03")),
    }
}

struct Prepared {
    validator: jsonschema::Validator,
}

impl PreparedValidator for Prepared {
    fn validate(&self, instance: &str) -> Result<(), ValidateError> {
        let value: Value = serde_json::from_str(instance)
            .map_err(|e| ValidateError::Fault(format!("instance is not valid JSON: {e}")))?;

        self.validator
            .validate(&value)
            .map_err(|e| ValidateError::Invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use jsc_corpus::MetaSchemaBank;

    fn empty_store() -> Arc<RemoteSchemaStore> {
        Arc::new(RemoteSchemaStore::default())
    }

    fn prepare(schema: &str, store: Arc<RemoteSchemaStore>) -> Box<dyn PreparedValidator> {
        JsonschemaAdapter
            .prepare(schema, Draft::Draft7, store, false)
            .expect("prepare")
    }

    #[test]
    fn test_integer_schema_verdicts() {
        let validator = prepare(r#"{"type":"integer"}"#, empty_store());
        assert!(validator.validate("1").is_ok());
        assert!(matches!(
            validator.validate("\"x\""),
            Err(ValidateError::Invalid(_))
        ));
    }

    #[test]
    fn test_remote_ref_resolves_through_store() {
        let mut remotes = HashMap::new();
        remotes.insert(
            "http://localhost:1234/integer.json".to_string(),
            r#"{"type":"integer"}"#.to_string(),
        );
        let store = Arc::new(RemoteSchemaStore::new(remotes, MetaSchemaBank::empty()));

        let validator = prepare(
            r#"{"$ref":"http://localhost:1234/integer.json"}"#,
            store,
        );
        assert!(validator.validate("7").is_ok());
        assert!(validator.validate("\"seven\"").is_err());
    }

    #[test]
    fn test_malformed_schema_is_prepare_error() {
        let result = JsonschemaAdapter.prepare(
            r#"{"type": 42}"#,
            Draft::Draft7,
            empty_store(),
            false,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_draft3_is_not_supported() {
        assert!(!JsonschemaAdapter.supports(Draft::Draft3));
        assert!(JsonschemaAdapter
            .prepare("{}", Draft::Draft3, empty_store(), false)
            .is_err());
    }

    #[test]
    fn test_format_assertions_flag() {
        let schema = r#"{"type":"string","format":"date"}"#;
        let asserting = JsonschemaAdapter
            .prepare(schema, Draft::Draft7, empty_store(), true)
            .expect("prepare");
        assert!(asserting.validate("\"2026-08-27\"").is_ok());
        assert!(asserting.validate("\"not-a-date\"").is_err());
    }
}
