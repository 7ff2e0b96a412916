//! One module per particle kind; each implements [`Behavior`](super::particle::Behavior).

mod cloud;
mod rain;
mod ray;
mod snow;
mod star;

pub use cloud::CloudBlob;
pub use rain::Raindrop;
pub use ray::Ray;
pub use snow::Snowflake;
pub use star::Star;
