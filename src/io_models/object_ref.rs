use crate::errors::ModelError;
use url::Url;

// base used to resolve controller-relative references such as `/api/tenant/admin`
const RELATIVE_REFERENCE_BASE: &str = "https://controller.invalid";

/// ObjectRef: a reference to another controller object, as found in `*_ref` fields.
///
/// Accepted forms:
/// - `https://<controller>/api/<kind>/<uuid>#<name>`
/// - `/api/<kind>/<uuid>`
/// - `/api/<kind>?name=<name>`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    kind: String,
    uuid: Option<String>,
    name: Option<String>,
}

fn decode_component(reference: &str, component: &str) -> Result<String, ModelError> {
    urlencoding::decode(component)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| ModelError::new_invalid_reference(reference, e.to_string()))
}

impl ObjectRef {
    pub fn parse(reference: &str) -> Result<ObjectRef, ModelError> {
        let url = if reference.starts_with('/') {
            Url::parse(RELATIVE_REFERENCE_BASE).and_then(|base| base.join(reference))
        } else {
            Url::parse(reference)
        }
        .map_err(|e| ModelError::new_invalid_reference(reference, e.to_string()))?;

        let mut segments = url
            .path_segments()
            .ok_or_else(|| ModelError::new_invalid_reference(reference, "reference has no path"))?
            .filter(|s| !s.is_empty());

        if segments.next() != Some("api") {
            return Err(ModelError::new_invalid_reference(
                reference,
                "reference path should start with `/api/`",
            ));
        }

        let kind = match segments.next() {
            Some(kind) => decode_component(reference, kind)?,
            None => return Err(ModelError::new_invalid_reference(reference, "missing object kind")),
        };
        let uuid = segments.next().map(|s| decode_component(reference, s)).transpose()?;
        if segments.next().is_some() {
            return Err(ModelError::new_invalid_reference(reference, "too many path segments"));
        }

        let name = match url.fragment().filter(|f| !f.is_empty()) {
            Some(fragment) => Some(decode_component(reference, fragment)?),
            None => url
                .query_pairs()
                .find(|(key, _)| key == "name")
                .map(|(_, value)| value.into_owned()),
        };

        Ok(ObjectRef { kind, uuid, name })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_tenant(&self) -> bool {
        self.kind == "tenant"
    }
}
