//! # confluent-render
//!
//! Turns a resolved [`RenderedFile`](confluent_core::types::RenderedFile)
//! into target-language source. Rendering is a pure function of the file and
//! its [`RenderOptions`]; every validation failure is reported before any
//! text is produced.
//!
//! Each [`Language`] has its own [`Renderer`]; [`Language::renderer`] picks
//! it at runtime.

pub mod c;
pub mod go;
pub mod java;
pub mod javascript;
pub mod language;
pub mod literal;
pub mod options;
pub mod python;
pub mod renderer;
pub mod typescript;
pub mod validate;

pub use c::CRenderer;
pub use go::GoRenderer;
pub use java::JavaRenderer;
pub use javascript::JavaScriptRenderer;
pub use language::Language;
pub use options::RenderOptions;
pub use python::PythonRenderer;
pub use renderer::Renderer;
pub use typescript::TypeScriptRenderer;
