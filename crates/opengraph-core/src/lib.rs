//! Open Graph record model and meta-tag renderer.
//!
//! Shapes caller-supplied page attributes into an immutable `OpenGraphRecord`
//! and emits the ordered `(property, content)` pairs an external markup layer
//! turns into `<meta property="..." content="..." />` elements. HTML escaping
//! and template assembly stay with that outer layer.

pub mod attrs;
pub mod builder;
pub mod errors;
pub mod media;
pub mod record;
pub mod renderer;
pub mod timestamp;

pub use attrs::Attrs;
pub use builder::build;
pub use errors::OpenGraphError;
pub use media::{Media, MediaEntry, MediaKind};
pub use record::{
    ArticleDetail, BookDetail, Determiner, ObjectType, OpenGraphRecord, ProfileDetail,
};
pub use renderer::{Tag, render};
pub use timestamp::Timestamp;
