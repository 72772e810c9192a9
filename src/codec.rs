use crate::errors::ModelError;
use crate::io_models::alert_object_list::{AlertObjectList, AlertObjectListPayload, OBJECTS_FIELD, SOURCE_FIELD};
use crate::logger::{LogLevel, Logger, ModelEvent, StdIoLogger};
use serde_derive::Deserialize;

const MODEL_NAME: &str = "AlertObjectList";

fn default_warn_on_unknown_values() -> bool {
    true
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CodecSettings {
    #[serde(alias = "codec.pretty")]
    pub pretty: bool,
    /// Reject unknown enumeration values on decoding instead of passing them through.
    #[serde(alias = "codec.strict_enums")]
    pub strict_enums: bool,
    #[serde(alias = "codec.warn_on_unknown_values", default = "default_warn_on_unknown_values")]
    pub warn_on_unknown_values: bool,
}

impl Default for CodecSettings {
    fn default() -> Self {
        CodecSettings {
            pretty: false,
            strict_enums: false,
            warn_on_unknown_values: true,
        }
    }
}

/// Codec: encodes and decodes [`AlertObjectList`] documents exchanged with the controller.
#[derive(Clone)]
pub struct Codec {
    settings: CodecSettings,
    logger: Box<dyn Logger>,
}

impl Default for Codec {
    fn default() -> Self {
        Codec::new(CodecSettings::default())
    }
}

impl Codec {
    pub fn new(settings: CodecSettings) -> Self {
        Codec::new_with_logger(settings, Box::new(StdIoLogger::new()))
    }

    pub fn new_with_logger(settings: CodecSettings, logger: Box<dyn Logger>) -> Self {
        Codec { settings, logger }
    }

    pub fn encode_json(&self, list: &AlertObjectList) -> Result<String, ModelError> {
        let document = if self.settings.pretty {
            serde_json::to_string_pretty(list)
        } else {
            serde_json::to_string(list)
        }
        .map_err(ModelError::new_serialization)?;

        self.log_encoded(list);
        Ok(document)
    }

    pub fn decode_json(&self, document: &str) -> Result<AlertObjectList, ModelError> {
        let payload: AlertObjectListPayload =
            serde_json::from_str(document).map_err(ModelError::new_invalid_document)?;
        self.decode_payload(payload)
    }

    pub fn decode_json_value(&self, document: serde_json::Value) -> Result<AlertObjectList, ModelError> {
        let payload: AlertObjectListPayload =
            serde_json::from_value(document).map_err(ModelError::new_invalid_document)?;
        self.decode_payload(payload)
    }

    pub fn encode_yaml(&self, list: &AlertObjectList) -> Result<String, ModelError> {
        let document = serde_yaml::to_string(list).map_err(ModelError::new_serialization)?;

        self.log_encoded(list);
        Ok(document)
    }

    pub fn decode_yaml(&self, document: &str) -> Result<AlertObjectList, ModelError> {
        let payload: AlertObjectListPayload =
            serde_yaml::from_str(document).map_err(ModelError::new_invalid_document)?;
        self.decode_payload(payload)
    }

    fn decode_payload(&self, payload: AlertObjectListPayload) -> Result<AlertObjectList, ModelError> {
        let list = AlertObjectList::try_from(payload)?;

        if self.settings.strict_enums {
            list.validate()?;
        } else if self.settings.warn_on_unknown_values {
            self.log_pass_through_values(&list);
        }

        self.logger.log(
            LogLevel::Debug,
            ModelEvent::Decoded {
                model: MODEL_NAME.to_string(),
                name: list.name().to_string(),
            },
        );

        Ok(list)
    }

    fn log_encoded(&self, list: &AlertObjectList) {
        self.logger.log(
            LogLevel::Debug,
            ModelEvent::Encoded {
                model: MODEL_NAME.to_string(),
                name: list.name().to_string(),
            },
        );
    }

    fn log_pass_through_values(&self, list: &AlertObjectList) {
        let unknown_source = match list.source_kind() {
            Some(_) => None,
            None => Some((SOURCE_FIELD, list.source())),
        };
        let unknown_objects = list.unknown_objects().into_iter().map(|o| (OBJECTS_FIELD, o));

        for (field_name, value) in unknown_source.into_iter().chain(unknown_objects) {
            self.logger.log(
                LogLevel::Warning,
                ModelEvent::UnknownValuePassedThrough {
                    model: MODEL_NAME.to_string(),
                    name: list.name().to_string(),
                    field_name: field_name.to_string(),
                    value: value.to_string(),
                },
            );
        }
    }
}

pub fn to_json(list: &AlertObjectList) -> Result<String, ModelError> {
    Codec::default().encode_json(list)
}

pub fn to_json_pretty(list: &AlertObjectList) -> Result<String, ModelError> {
    Codec::new(CodecSettings {
        pretty: true,
        ..CodecSettings::default()
    })
    .encode_json(list)
}

pub fn from_json(document: &str) -> Result<AlertObjectList, ModelError> {
    Codec::default().decode_json(document)
}

pub fn from_json_value(document: serde_json::Value) -> Result<AlertObjectList, ModelError> {
    Codec::default().decode_json_value(document)
}

pub fn to_yaml(list: &AlertObjectList) -> Result<String, ModelError> {
    Codec::default().encode_yaml(list)
}

pub fn from_yaml(document: &str) -> Result<AlertObjectList, ModelError> {
    Codec::default().decode_yaml(document)
}
