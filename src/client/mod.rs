pub mod session;
pub mod thing;
pub mod types;

pub use session::ThingfulClient;
pub use thing::{Attributes, Channel, ChannelData, Links, RawThing, Thing, ThingsResponse};
pub use types::{AccumulateArgs, BoundingBox, HttpClient};
