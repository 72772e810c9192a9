//! Models exchanged with the controller API.

pub mod alert_object_list;
pub mod alert_source;
pub mod object_ref;
pub mod object_type;

pub use alert_object_list::{AlertObjectList, AlertObjectListBuilder};
pub use alert_source::AlertSource;
pub use object_ref::ObjectRef;
