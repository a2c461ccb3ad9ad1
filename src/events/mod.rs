pub mod pointer;

pub use pointer::DomInputSource;
