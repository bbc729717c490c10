//! stackfile-core
//!
//! compose形式のデプロイメントデスクリプタをパース・検証し、
//! コンテナランタイムに引き渡せる型付きモデルを提供します。

pub mod discovery;
pub mod error;
pub mod loader;
pub mod model;
pub mod parser;
pub mod validate;
pub mod writer;

pub use discovery::{find_descriptor, find_descriptor_in_current_dir};
pub use error::{Result, StackError};
pub use loader::{load_descriptor, load_from_current_dir};
pub use model::*;
pub use parser::{parse_yaml_file, parse_yaml_str};
pub use validate::validate;
pub use writer::to_yaml_string;
