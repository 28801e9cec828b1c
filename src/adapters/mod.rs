// Adapters layer: HTTP implementations of the vacancy source port.

pub mod headhunter;
pub mod http;
pub mod pacing;
pub mod superjob;

pub use headhunter::HeadHunterSource;
pub use pacing::RequestPacer;
pub use superjob::SuperJobSource;
