pub mod color;
pub mod defaults;
pub mod device;
pub mod strip;

pub use color::{ColorParseError, HtmlColor};
pub use device::{DeviceField, DeviceState, GraphRow};
pub use strip::StripRecord;
