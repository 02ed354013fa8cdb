use thiserror::Error;

#[derive(Debug, Error)]
pub enum FestivalError {
    #[error("installation catalog is not valid JSON: {0}")]
    Catalog(#[from] serde_json::Error),
    #[error("installation id {id} appears more than once in the catalog")]
    DuplicateInstallation { id: u32 },
    #[error("missing #app mount point")]
    MissingMountPoint,
    #[error("dom call failed: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FestivalError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_installation_message_names_the_id() {
        let error = FestivalError::DuplicateInstallation { id: 7 };
        assert_eq!(
            error.to_string(),
            "installation id 7 appears more than once in the catalog"
        );
    }

    #[test]
    fn json_errors_convert_into_catalog_errors() {
        let decode = serde_json::from_str::<Vec<u32>>("[1,").expect_err("truncated JSON");
        let error: FestivalError = decode.into();
        assert!(matches!(error, FestivalError::Catalog(_)));
        assert!(error.to_string().starts_with("installation catalog is not valid JSON"));
    }
}
