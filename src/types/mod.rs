mod client_hints;
mod device_capabilities;
mod environment;
mod form_factor;
mod word_source;

pub use client_hints::*;
pub use device_capabilities::*;
pub use environment::*;
pub use form_factor::*;
pub use word_source::*;
