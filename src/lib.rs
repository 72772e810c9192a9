pub mod codec;
pub mod errors;
pub mod io_models;
pub mod logger;

pub use codec::{Codec, CodecSettings};
pub use errors::ModelError;
pub use io_models::{AlertObjectList, AlertObjectListBuilder, AlertSource, ObjectRef};
