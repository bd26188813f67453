//! Template context: the serializable rendering payload.

use serde::Serialize;

use workforge_core::WorkerCount;

use crate::error::RenderError;

/// Variables exposed to the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    /// Substituted wherever the template says `{{ num_workers }}`.
    pub num_workers: WorkerCount,
}

impl TemplateContext {
    pub fn new(num_workers: WorkerCount) -> Self {
        Self { num_workers }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_exposes_num_workers_as_number() {
        let ctx = TemplateContext::new(WorkerCount::from(6));
        let tera_ctx = ctx.to_tera_context().expect("context conversion");
        let value = tera_ctx.get("num_workers").expect("num_workers present");
        assert_eq!(value, &serde_json::json!(6));
    }

    #[test]
    fn context_has_no_other_keys() {
        let ctx = TemplateContext::new(WorkerCount::from(1));
        let json = tera::Context::from_serialize(&ctx)
            .expect("context conversion")
            .into_json();
        assert_eq!(json, serde_json::json!({ "num_workers": 1 }));
    }

    #[test]
    fn counts_beyond_u64_are_exposed_as_decimal_text() {
        let count: WorkerCount = "18446744073709551616".parse().unwrap();
        let tera_ctx = TemplateContext::new(count).to_tera_context().unwrap();
        assert_eq!(
            tera_ctx.get("num_workers"),
            Some(&serde_json::json!("18446744073709551616"))
        );
    }
}
