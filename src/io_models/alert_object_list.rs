use crate::errors::ModelError;
use crate::io_models::alert_source::AlertSource;
use crate::io_models::object_ref::ObjectRef;
use crate::io_models::object_type::is_known_object_type;
use serde_derive::{Deserialize, Serialize};
use std::str::FromStr;

pub const NAME_FIELD: &str = "name";
pub const SOURCE_FIELD: &str = "source";
pub const OBJECTS_FIELD: &str = "objects";

/// AlertObjectList: scope of the objects and the log source an alert rule monitors.
///
/// `name` and `source` are always present. `url` is populated by the controller only and
/// has no mutator: it is kept as received so a decoded record encodes back unchanged.
/// Enumeration values (`source`, `objects`) are passed through as is, the controller being
/// in charge of rejecting unknown ones (see [`AlertObjectList::validate`] for a local check).
///
/// Decoding through serde directly (`serde_json::from_str::<AlertObjectList>`) reports an absent
/// `name` or `source` only as the message of the format's error. Use [`crate::codec::from_json`]
/// or [`crate::codec::Codec`] to get the typed `ModelError::MissingRequiredField`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "AlertObjectListPayload")]
pub struct AlertObjectList {
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    objects: Vec<String>,
    source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tenant_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uuid: Option<String>,
}

/// Raw wire shape, every key optional. Required keys are checked when converting into
/// [`AlertObjectList`] so absent ones surface as `MissingRequiredField`.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct AlertObjectListPayload {
    pub name: Option<String>,
    pub objects: Option<Vec<String>>,
    pub source: Option<String>,
    pub tenant_ref: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn required(value: Option<String>, field_name: &str) -> Result<String, ModelError> {
    non_empty(value).ok_or_else(|| ModelError::new_missing_required_field(field_name))
}

impl TryFrom<AlertObjectListPayload> for AlertObjectList {
    type Error = ModelError;

    fn try_from(payload: AlertObjectListPayload) -> Result<Self, Self::Error> {
        Ok(AlertObjectList {
            name: required(payload.name, NAME_FIELD)?,
            objects: payload.objects.unwrap_or_default(),
            source: required(payload.source, SOURCE_FIELD)?,
            tenant_ref: non_empty(payload.tenant_ref),
            url: non_empty(payload.url),
            uuid: non_empty(payload.uuid),
        })
    }
}

impl AlertObjectList {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Result<Self, ModelError> {
        AlertObjectList::builder().name(name).source(source).build()
    }

    pub fn builder() -> AlertObjectListBuilder {
        AlertObjectListBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn objects(&self) -> &[String] {
        &self.objects
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tenant_ref(&self) -> Option<&str> {
        self.tenant_ref.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    pub fn set_objects(&mut self, objects: Vec<String>) {
        self.objects = objects;
    }

    pub fn push_object(&mut self, object_type: impl Into<String>) {
        self.objects.push(object_type.into());
    }

    pub fn set_tenant_ref(&mut self, tenant_ref: Option<String>) {
        self.tenant_ref = non_empty(tenant_ref);
    }

    pub fn set_uuid(&mut self, uuid: Option<String>) {
        self.uuid = non_empty(uuid);
    }

    /// Returns the source as a known enumeration value, `None` if the controller sent one
    /// this client doesn't know about.
    pub fn source_kind(&self) -> Option<AlertSource> {
        AlertSource::from_str(&self.source).ok()
    }

    pub fn unknown_objects(&self) -> Vec<&str> {
        self.objects
            .iter()
            .map(|o| o.as_str())
            .filter(|o| !is_known_object_type(o))
            .collect()
    }

    /// Strict local check of enumeration values. Never applied implicitly on decoding.
    pub fn validate(&self) -> Result<(), ModelError> {
        AlertSource::from_str(&self.source)?;

        match self.unknown_objects().first() {
            Some(unknown) => Err(ModelError::new_unknown_enum_value(OBJECTS_FIELD, unknown)),
            None => Ok(()),
        }
    }

    /// Parses `tenant_ref` when set.
    pub fn tenant(&self) -> Result<Option<ObjectRef>, ModelError> {
        self.tenant_ref.as_deref().map(ObjectRef::parse).transpose()
    }

    /// Copy of the record without the read-only fields, to be used as a create/update body.
    pub fn without_server_fields(&self) -> AlertObjectList {
        AlertObjectList {
            url: None,
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AlertObjectListBuilder {
    name: Option<String>,
    objects: Vec<String>,
    source: Option<String>,
    tenant_ref: Option<String>,
    uuid: Option<String>,
}

impl AlertObjectListBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn source_kind(self, source: AlertSource) -> Self {
        self.source(source.as_str())
    }

    pub fn object(mut self, object_type: impl Into<String>) -> Self {
        self.objects.push(object_type.into());
        self
    }

    pub fn objects<I, S>(mut self, objects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.objects.extend(objects.into_iter().map(Into::into));
        self
    }

    pub fn tenant_ref(mut self, tenant_ref: impl Into<String>) -> Self {
        self.tenant_ref = Some(tenant_ref.into());
        self
    }

    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    pub fn build(self) -> Result<AlertObjectList, ModelError> {
        AlertObjectList::try_from(AlertObjectListPayload {
            name: self.name,
            objects: Some(self.objects),
            source: self.source,
            tenant_ref: self.tenant_ref,
            url: None,
            uuid: self.uuid,
        })
    }
}
